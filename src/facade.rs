//! The downstream REST façade (AMBIENT implementation), grounded on
//! `axiomme-web`'s `app_router` / handler / `IntoResponse`-error shape:
//! a small `axum` router, one shared state, and a JSON envelope for both
//! the success and error paths.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use wikipath_base::{Node, Profile, SupportedLang, Transition};
use wikipath_engine::WikiTransport;

use crate::output;

#[derive(Clone)]
pub struct AppState {
    pub transport: Arc<dyn WikiTransport>,
    pub profile: Profile,
    pub default_lang: SupportedLang,
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/search", get(search_get).post(search_post))
        .route("/api/v1/health", get(health))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    from: Option<String>,
    to: Option<String>,
    lang: Option<String>,
}

#[derive(Debug, Serialize)]
struct Stats {
    duration: String,
    duration_ms: u128,
    request_count: u64,
}

/// One node of the reconstructed path, as the façade hands it to callers:
/// `(lang, title)` plus the article URL the façade derives from it
/// (spec.md §6 -- URL construction is the façade's job, not the core's).
#[derive(Debug, Serialize)]
struct PathEntry {
    lang: String,
    title: String,
    url: String,
}

impl From<&Node> for PathEntry {
    fn from(node: &Node) -> Self {
        PathEntry { lang: node.lang.code().to_string(), title: node.title.clone(), url: output::article_url(node) }
    }
}

#[derive(Debug, Serialize)]
struct SearchResponse {
    success: bool,
    from: String,
    to: String,
    path_length: usize,
    path: Vec<PathEntry>,
    transitions: Vec<Transition>,
    stats: Stats,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    code: &'static str,
}

enum FacadeError {
    MissingParams(String),
    InvalidRequest(String),
    PathNotFound { from: String, to: String },
}

impl IntoResponse for FacadeError {
    fn into_response(self) -> Response {
        let (status, code, error) = match self {
            FacadeError::MissingParams(msg) => (StatusCode::BAD_REQUEST, "MISSING_PARAMS", msg),
            FacadeError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST", msg),
            FacadeError::PathNotFound { from, to } => {
                (StatusCode::NOT_FOUND, "PATH_NOT_FOUND", format!("no path found from \"{from}\" to \"{to}\""))
            }
        };
        (status, Json(ErrorResponse { success: false, error, code })).into_response()
    }
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "success": true, "status": "ok" }))
}

async fn search_get(State(state): State<AppState>, Query(query): Query<SearchQuery>) -> Response {
    run_search(state, query).await
}

async fn search_post(State(state): State<AppState>, Json(query): Json<SearchQuery>) -> Response {
    run_search(state, query).await
}

async fn run_search(state: AppState, query: SearchQuery) -> Response {
    match handle_search(state, query).await {
        Ok(resp) => Json(resp).into_response(),
        Err(e) => e.into_response(),
    }
}

async fn handle_search(state: AppState, query: SearchQuery) -> Result<SearchResponse, FacadeError> {
    let from = query.from.unwrap_or_default();
    let to = query.to.unwrap_or_default();
    if from.trim().is_empty() || to.trim().is_empty() {
        return Err(FacadeError::MissingParams("both \"from\" and \"to\" are required".to_string()));
    }

    let lang = match query.lang {
        Some(raw) if !raw.trim().is_empty() => {
            raw.parse::<SupportedLang>().map_err(|e| FacadeError::InvalidRequest(e.to_string()))?
        }
        _ => state.default_lang,
    };

    let outcome = wikipath_engine::search(state.transport.clone(), &from, &to, lang, state.profile.clone()).await;
    if !outcome.found() {
        return Err(FacadeError::PathNotFound { from, to });
    }

    let path_length = outcome.path.len().saturating_sub(1);
    let duration: Duration = outcome.elapsed;
    Ok(SearchResponse {
        success: true,
        from,
        to,
        path_length,
        path: outcome.path.iter().map(PathEntry::from).collect(),
        transitions: outcome.transitions.clone(),
        stats: Stats {
            duration: format!("{:.3}s", duration.as_secs_f64()),
            duration_ms: duration.as_millis(),
            request_count: outcome.request_count,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use std::collections::HashMap;
    use tower::ServiceExt;
    use wikipath_engine::ClientError;

    /// Answers every request with an empty page list -- enough to drive
    /// the façade's request/response plumbing without a real network
    /// call; the engine itself is tested against richer fixtures.
    struct EmptyTransport;

    #[async_trait]
    impl WikiTransport for EmptyTransport {
        async fn get(&self, _base_url: &str, _params: &HashMap<String, String>, _timeout: Duration) -> Result<serde_json::Value, ClientError> {
            Ok(serde_json::json!({ "query": { "pages": [] } }))
        }
    }

    fn state_with(transport: Arc<dyn WikiTransport>) -> AppState {
        AppState { transport, profile: Profile::aggressive(), default_lang: SupportedLang::Ru }
    }

    fn empty_state() -> AppState {
        state_with(Arc::new(EmptyTransport))
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let app = app_router(empty_state());
        let response = app.oneshot(Request::builder().uri("/api/v1/health").body(Body::empty()).unwrap()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn missing_params_are_rejected_before_the_engine_runs() {
        let app = app_router(empty_state());
        let response = app
            .oneshot(Request::builder().uri("/api/v1/search?from=&to=X").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unresolvable_path_reports_not_found() {
        let app = app_router(empty_state());
        let response = app
            .oneshot(Request::builder().uri("/api/v1/search?from=Berlin&to=Paris&lang=en").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
