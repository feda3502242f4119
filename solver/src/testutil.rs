//! Fixture-driven mock transport used by every module's unit tests
//! ("determinism under a mock transport that returns fixed page bodies
//! for each `(titles, lang, direction)` tuple").

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ClientError;
use crate::transport::WikiTransport;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Tag {
    Forward,
    Backward,
    Probe,
}

fn tag_for(params: &HashMap<String, String>) -> Tag {
    if params.contains_key("pllimit") {
        Tag::Forward
    } else if params.contains_key("lhlimit") {
        Tag::Backward
    } else {
        Tag::Probe
    }
}

pub struct FixtureTransport {
    catch_all: Option<Value>,
    fixtures: HashMap<(String, Tag, String), Value>,
    fail: bool,
    empty_when_unmatched: bool,
}

impl FixtureTransport {
    pub fn new() -> Self {
        FixtureTransport { catch_all: None, fixtures: HashMap::new(), fail: false, empty_when_unmatched: false }
    }

    pub fn single(value: Value) -> Self {
        FixtureTransport { catch_all: Some(value), fixtures: HashMap::new(), fail: false, empty_when_unmatched: false }
    }

    pub fn failing() -> Self {
        FixtureTransport { catch_all: None, fixtures: HashMap::new(), fail: true, empty_when_unmatched: false }
    }

    /// Unmatched `(base_url, tag, titles)` tuples resolve to an empty
    /// `{"query": {"pages": []}}` body instead of an error. Useful for
    /// fixtures that only care about a handful of expansions and want the
    /// frontier to exhaust naturally everywhere else.
    pub fn defaulting_to_empty(mut self) -> Self {
        self.empty_when_unmatched = true;
        self
    }

    pub fn with_fixture(mut self, base_url: &str, tag: Tag, titles: &str, value: Value) -> Self {
        self.fixtures.insert((base_url.to_string(), tag, titles.to_string()), value);
        self
    }
}

impl Default for FixtureTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WikiTransport for FixtureTransport {
    async fn get(&self, base_url: &str, params: &HashMap<String, String>, _timeout: Duration) -> Result<Value, ClientError> {
        if self.fail {
            return Err(ClientError::Transport("fixture configured to fail".to_string()));
        }
        if let Some(v) = &self.catch_all {
            return Ok(v.clone());
        }
        let tag = tag_for(params);
        let titles = params.get("titles").cloned().unwrap_or_default();
        match self.fixtures.get(&(base_url.to_string(), tag, titles)) {
            Some(v) => Ok(v.clone()),
            None if self.empty_when_unmatched => Ok(serde_json::json!({"query": {"pages": []}})),
            None => Err(ClientError::Decode("no fixture registered for this request".to_string())),
        }
    }
}
