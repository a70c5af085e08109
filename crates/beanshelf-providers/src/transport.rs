use crate::{Error, Result};
use reqwest::header::{ACCEPT, HeaderValue};
use serde_json::Value;
use std::future::Future;
use std::time::Duration;

/// Fetches JSON documents by URL
///
/// The fetcher only ever issues `GET` requests for JSON, so this is the whole
/// surface it needs. Tests substitute a scripted implementation.
pub trait Transport: Send + Sync {
    fn get_json(&self, url: &str) -> impl Future<Output = Result<Value>> + Send;
}

/// reqwest-backed transport with a per-request wall-clock budget
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("beanshelf/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    async fn get_json(&self, url: &str) -> Result<Value> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await
            .map_err(|err| classify(url, err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|err| classify(url, err))?;
        Ok(serde_json::from_slice(&body)?)
    }
}

fn classify(url: &str, err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::Timeout {
            url: url.to_string(),
        }
    } else {
        Error::Http(err)
    }
}
