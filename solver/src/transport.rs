//! The HTTP boundary the engine talks through. Kept as a trait so tests
//! can swap in a fixture-driven mock ("determinism under a mock
//! transport") instead of hitting the network, mirroring the
//! service-trait boundary pattern used elsewhere in this stack rather
//! than calling `reqwest` directly from business logic.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ClientError;

#[async_trait]
pub trait WikiTransport: Send + Sync {
    /// Issues one GET against `base_url` with the given query parameters,
    /// bounded by `timeout`. Any transport error, non-2xx status or
    /// decode failure is reported as a `ClientError`; the caller (C1)
    /// turns that into an empty page list rather than propagating it.
    async fn get(&self, base_url: &str, params: &HashMap<String, String>, timeout: Duration) -> Result<Value, ClientError>;
}

/// Default transport: a single shared `reqwest::Client`, reused across
/// queries, with a large idle-connection pool and HTTP/2 enabled -- the
/// resource policy from §5. Construct this once per process; cloning a
/// `reqwest::Client` is cheap (it's an `Arc` internally), which is how the
/// same connection pool gets reused by concurrent round-scheduler tasks.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(user_agent: &str) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent.to_string())
            .pool_max_idle_per_host(200)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        Ok(HttpTransport { client })
    }

    pub fn from_client(client: reqwest::Client) -> Self {
        HttpTransport { client }
    }
}

#[async_trait]
impl WikiTransport for HttpTransport {
    async fn get(&self, base_url: &str, params: &HashMap<String, String>, timeout: Duration) -> Result<Value, ClientError> {
        // One timeout covers send *and* decode together, so a slow call
        // fails at `timeout`, not up to 2x it (§5: the per-request
        // deadline bounds the whole call, not each await inside it).
        let call = async {
            let resp = self
                .client
                .get(base_url)
                .query(params)
                .send()
                .await
                .map_err(|e| ClientError::Transport(e.to_string()))?;

            if !resp.status().is_success() {
                return Err(ClientError::Status(resp.status().as_u16()));
            }

            resp.json::<Value>().await.map_err(|e| ClientError::Decode(e.to_string()))
        };

        tokio::time::timeout(timeout, call).await.map_err(|_| ClientError::Cancelled)?
    }
}
