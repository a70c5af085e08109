//! Scripted transport for fetcher and runtime tests.

use beanshelf_providers::{Error, Result, Transport};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Canned response for one URL.
#[derive(Debug, Clone)]
pub enum StubResponse {
    Json(Value),
    Status(u16),
    Timeout,
}

/// Transport answering from a URL -> response table.
///
/// Unknown URLs fail as unreachable. Clones share the table and the call
/// log, so a test can keep a handle after moving the stub into a fetcher.
#[derive(Debug, Clone, Default)]
pub struct StubTransport {
    routes: Arc<Mutex<HashMap<String, StubResponse>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(self, url: impl Into<String>, body: Value) -> Self {
        self.route(url, StubResponse::Json(body))
    }

    pub fn with_status(self, url: impl Into<String>, status: u16) -> Self {
        self.route(url, StubResponse::Status(status))
    }

    pub fn with_timeout(self, url: impl Into<String>) -> Self {
        self.route(url, StubResponse::Timeout)
    }

    pub fn route(self, url: impl Into<String>, response: StubResponse) -> Self {
        self.routes
            .lock()
            .expect("stub routes poisoned")
            .insert(url.into(), response);
        self
    }

    /// URLs requested so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("stub calls poisoned").clone()
    }

    pub fn call_count(&self, url: &str) -> usize {
        self.calls().iter().filter(|called| *called == url).count()
    }
}

impl Transport for StubTransport {
    async fn get_json(&self, url: &str) -> Result<Value> {
        self.calls
            .lock()
            .expect("stub calls poisoned")
            .push(url.to_string());

        let response = self
            .routes
            .lock()
            .expect("stub routes poisoned")
            .get(url)
            .cloned();

        match response {
            Some(StubResponse::Json(body)) => Ok(body),
            Some(StubResponse::Status(status)) => Err(Error::Status {
                url: url.to_string(),
                status,
            }),
            Some(StubResponse::Timeout) => Err(Error::Timeout {
                url: url.to_string(),
            }),
            None => Err(Error::Unavailable(format!("no stub for {}", url))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_routes_and_call_log() {
        let stub = StubTransport::new()
            .with_json("http://a.test/x", json!([1]))
            .with_status("http://a.test/y", 503);
        let handle = stub.clone();

        assert_eq!(stub.get_json("http://a.test/x").await.unwrap(), json!([1]));
        assert!(matches!(
            stub.get_json("http://a.test/y").await,
            Err(Error::Status { status: 503, .. })
        ));
        assert!(matches!(
            stub.get_json("http://a.test/z").await,
            Err(Error::Unavailable(_))
        ));

        assert_eq!(handle.calls().len(), 3);
        assert_eq!(handle.call_count("http://a.test/x"), 1);
    }
}
