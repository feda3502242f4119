//! C1: the Wiki client. Issues the two parameterised link-expansion query
//! shapes against one language endpoint and decodes a normalised page
//! list. Pagination (`continue`) is deliberately not implemented, so very
//! high-degree hub articles are truncated at `pllimit=max` /
//! `lhlimit=max`. This is a single-shot call, not a loop.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use wikipath_base::{Direction, Page, SupportedLang};

use crate::error::ClientError;
use crate::transport::WikiTransport;

fn base_url(lang: SupportedLang) -> String {
    format!("https://{}.wikipedia.org/w/api.php", lang.code())
}

#[derive(Deserialize, Default)]
struct RawLangLink {
    lang: String,
    title: String,
}

#[derive(Deserialize, Default)]
struct RawLink {
    title: String,
}

#[derive(Deserialize, Default)]
struct RawPage {
    title: String,
    #[serde(default)]
    missing: bool,
    #[serde(default)]
    links: Vec<RawLink>,
    #[serde(default)]
    linkshere: Vec<RawLink>,
    #[serde(default)]
    langlinks: Vec<RawLangLink>,
}

#[derive(Deserialize, Default)]
struct RawQueryBody {
    #[serde(default)]
    pages: Vec<RawPage>,
}

#[derive(Deserialize, Default)]
struct RawQueryResponse {
    query: Option<RawQueryBody>,
}

fn supported_lang_links(raw: Vec<RawLangLink>) -> Vec<(SupportedLang, String)> {
    raw.into_iter()
        .filter(|l| !l.title.is_empty())
        .filter_map(|l| l.lang.parse::<SupportedLang>().ok().map(|lang| (lang, l.title)))
        .collect()
}

/// Expands a batch of titles in one language and direction. Batch
/// cardinality must already be `<= 50` (the scheduler enforces this
/// before calling); `titles` is pipe-joined here per the wire contract.
///
/// Returns `Ok(pages)` exactly when the HTTP call completed and the body
/// decoded -- that is what the request counter (invariant 4) counts --
/// and `Err` otherwise. Callers that want "failures become an empty page
/// list" (§4.1) should match on the result and default to `&[]`; the
/// distinction is kept here only so the caller can still tell whether to
/// bump the counter.
pub async fn expand(
    transport: &Arc<dyn WikiTransport>,
    titles: &[String],
    lang: SupportedLang,
    direction: Direction,
    timeout: Duration,
) -> Result<Vec<Page>, ClientError> {
    if titles.is_empty() {
        return Ok(Vec::new());
    }
    debug_assert!(titles.len() <= 50, "batch cardinality must be <= 50 per §4.1");

    let joined = titles.join("|");
    let mut params: HashMap<String, String> = HashMap::new();
    params.insert("action".to_string(), "query".to_string());
    params.insert("format".to_string(), "json".to_string());
    params.insert("formatversion".to_string(), "2".to_string());
    params.insert("redirects".to_string(), "1".to_string());
    params.insert("titles".to_string(), joined);
    params.insert("lllimit".to_string(), "max".to_string());
    match direction {
        Direction::Forward => {
            params.insert("prop".to_string(), "links|langlinks".to_string());
            params.insert("pllimit".to_string(), "max".to_string());
            params.insert("plnamespace".to_string(), "0".to_string());
        }
        Direction::Backward => {
            params.insert("prop".to_string(), "linkshere|langlinks".to_string());
            params.insert("lhlimit".to_string(), "max".to_string());
            params.insert("lhnamespace".to_string(), "0".to_string());
        }
    }

    let body = transport.get(&base_url(lang), &params, timeout).await?;
    let parsed: RawQueryResponse = serde_json::from_value(body).map_err(|e| ClientError::Decode(e.to_string()))?;

    let raw_pages = parsed.query.map(|q| q.pages).unwrap_or_default();
    let pages = raw_pages
        .into_iter()
        .filter(|p| !p.missing)
        .map(|p| {
            let neighbours = match direction {
                Direction::Forward => p.links.into_iter().map(|l| l.title).collect(),
                Direction::Backward => p.linkshere.into_iter().map(|l| l.title).collect(),
            };
            Page {
                canonical_title: p.title,
                neighbours,
                lang_links: supported_lang_links(p.langlinks),
            }
        })
        .collect();

    Ok(pages)
}

/// A minimal probe query: `action=query&titles=T&redirects=1`. Used by
/// the language prober (C2) to check whether `title` resolves on `lang`'s
/// edition. Returns `Some(canonical_title)` when a non-missing page was
/// found.
pub async fn probe(
    transport: &Arc<dyn WikiTransport>,
    title: &str,
    lang: SupportedLang,
    timeout: Duration,
) -> Result<Option<String>, ClientError> {
    let mut params: HashMap<String, String> = HashMap::new();
    params.insert("action".to_string(), "query".to_string());
    params.insert("format".to_string(), "json".to_string());
    params.insert("formatversion".to_string(), "2".to_string());
    params.insert("redirects".to_string(), "1".to_string());
    params.insert("titles".to_string(), title.to_string());

    let body = transport.get(&base_url(lang), &params, timeout).await?;
    let parsed: RawQueryResponse = serde_json::from_value(body).map_err(|e| ClientError::Decode(e.to_string()))?;
    let pages = parsed.query.map(|q| q.pages).unwrap_or_default();
    Ok(pages.into_iter().find(|p| !p.missing).map(|p| p.title))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::FixtureTransport;

    #[tokio::test]
    async fn forward_expand_decodes_links_and_lang_links() {
        let fixture = serde_json::json!({
            "query": {
                "pages": [{
                    "title": "Россия",
                    "links": [{"ns": 0, "title": "Москва"}],
                    "langlinks": [{"lang": "en", "title": "Russia"}, {"lang": "zz", "title": "Ignored"}]
                }]
            }
        });
        let transport: Arc<dyn WikiTransport> = Arc::new(FixtureTransport::single(fixture));
        let pages = expand(&transport, &["Россия".to_string()], SupportedLang::Ru, Direction::Forward, Duration::from_secs(1))
            .await
            .unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].canonical_title, "Россия");
        assert_eq!(pages[0].neighbours, vec!["Москва".to_string()]);
        assert_eq!(pages[0].lang_links, vec![(SupportedLang::En, "Russia".to_string())]);
    }

    #[tokio::test]
    async fn backward_expand_reads_linkshere() {
        let fixture = serde_json::json!({
            "query": {
                "pages": [{
                    "title": "Germany",
                    "linkshere": [{"ns": 0, "title": "Berlin"}]
                }]
            }
        });
        let transport: Arc<dyn WikiTransport> = Arc::new(FixtureTransport::single(fixture));
        let pages = expand(&transport, &["Germany".to_string()], SupportedLang::En, Direction::Backward, Duration::from_secs(1))
            .await
            .unwrap();
        assert_eq!(pages[0].neighbours, vec!["Berlin".to_string()]);
    }

    #[tokio::test]
    async fn missing_pages_are_dropped() {
        let fixture = serde_json::json!({
            "query": { "pages": [{"title": "Nope", "missing": true}] }
        });
        let transport: Arc<dyn WikiTransport> = Arc::new(FixtureTransport::single(fixture));
        let pages = expand(&transport, &["Nope".to_string()], SupportedLang::En, Direction::Forward, Duration::from_secs(1))
            .await
            .unwrap();
        assert!(pages.is_empty());
    }

    #[tokio::test]
    async fn transport_failure_yields_err_not_panic() {
        let transport: Arc<dyn WikiTransport> = Arc::new(FixtureTransport::failing());
        let result = expand(&transport, &["X".to_string()], SupportedLang::En, Direction::Forward, Duration::from_secs(1)).await;
        assert!(result.is_err());
    }
}
