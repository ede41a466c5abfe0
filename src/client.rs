//! HTTP client capability.
//!
//! [`HttpClient`] is the seam the fetcher is built on. [`ReqwestClient`] is
//! the production implementation; tests substitute their own.

use reqwest::blocking::Client;
use std::time::Duration;

use crate::error::{FetchError, Result};

/// Raw response from a GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Undecoded response body.
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a single blocking GET.
///
/// Implementations return `Ok` for any response that arrived, whatever its
/// status, and [`FetchError::Transport`] when none did.
pub trait HttpClient {
    fn get(&self, url: &str) -> Result<HttpResponse>;
}

impl<C: HttpClient + ?Sized> HttpClient for &C {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        (**self).get(url)
    }
}

/// Blocking reqwest client with the request timeout disabled.
pub struct ReqwestClient {
    client: Client,
}

impl ReqwestClient {
    /// Build the client.
    ///
    /// Fails with [`FetchError::ClientInit`] when the TLS backend or
    /// resolver cannot be initialized.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| FetchError::ClientInit {
                message: describe(e),
            })?;
        Ok(Self { client })
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        tracing::debug!(url, "sending GET request");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::Transport {
                url: url.to_string(),
                message: describe(e),
            })?;

        let status = response.status().as_u16();
        tracing::debug!(status, "received response");

        let body = response.text().map_err(|e| FetchError::Transport {
            url: url.to_string(),
            message: describe(e),
        })?;

        Ok(HttpResponse { status, body })
    }
}

/// Render a reqwest error with its full source chain.
fn describe(err: reqwest::Error) -> String {
    format!("{:#}", anyhow::Error::new(err))
}
