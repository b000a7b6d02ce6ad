//! HTTP transport abstraction.
//!
//! The bridge client performs all network I/O through the [`HttpTransport`]
//! trait, so tests can substitute a canned transport without a live bridge.
//! [`ReqwestTransport`] is the default implementation.

use std::future::Future;
use std::io;
use std::time::Duration;

use crate::errors::Error;

type Result<T> = std::result::Result<T, Error>;

/// Trait for the HTTP operations a bridge client performs.
pub trait HttpTransport: Send + Sync {
    /// Issue a GET request and return the response body.
    fn get(&self, url: &str) -> impl Future<Output = Result<String>> + Send;

    /// Issue a PUT request with the given body and return the response body.
    fn put(
        &self,
        url: &str,
        content_type: &str,
        body: String,
    ) -> impl Future<Output = Result<String>> + Send;
}

/// The default transport, backed by a shared [`reqwest::Client`].
///
/// Every request carries the configured timeout; a hung bridge connection
/// fails the call instead of blocking the caller indefinitely.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Self {
        ReqwestTransport {
            client: reqwest::Client::new(),
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| Error::transport("get", io::Error::other(e)))?;

        response
            .text()
            .await
            .map_err(|e| Error::transport("read", io::Error::other(e)))
    }

    async fn put(&self, url: &str, content_type: &str, body: String) -> Result<String> {
        let response = self
            .client
            .put(url)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(body)
            .timeout(self.timeout)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| Error::transport("put", io::Error::other(e)))?;

        response
            .text()
            .await
            .map_err(|e| Error::transport("read", io::Error::other(e)))
    }
}
