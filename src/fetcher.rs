//! The echo-then-fetch flow.
//!
//! [`Fetcher::run`] writes the argument list as a JSON array, performs one
//! GET through its [`HttpClient`], prints either `Data: ...` or
//! `Error fetching data: ...`, and reports the resulting [`ExitStatus`].
//!
//! # Example
//!
//! ```no_run
//! use jsonfetch::client::ReqwestClient;
//! use jsonfetch::fetcher::Fetcher;
//! use jsonfetch::ArgumentList;
//!
//! let fetcher = Fetcher::new(ReqwestClient::new().unwrap());
//! let args = ArgumentList::from_env();
//! let status = fetcher.run(&args, &mut std::io::stdout()).unwrap();
//! std::process::exit(status.code().into());
//! ```

use serde_json::Value;
use std::io::Write;

use crate::args::ArgumentList;
use crate::client::HttpClient;
use crate::error::{FetchError, Result};
use crate::json::to_spaced_string;

/// The fixed endpoint fetched by the binary.
pub const DEFAULT_URL: &str = "https://jsonplaceholder.typicode.com/todos/1";

/// Outcome of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// The request succeeded and the body decoded as JSON.
    Success,
    /// The request failed or returned a non-success status.
    Failure,
}

impl ExitStatus {
    /// Process exit code.
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
        }
    }
}

/// Echoes arguments and fetches one JSON document.
pub struct Fetcher<C> {
    client: C,
    url: String,
}

impl<C: HttpClient> Fetcher<C> {
    /// Create a fetcher for [`DEFAULT_URL`].
    pub fn new(client: C) -> Self {
        Self::with_url(client, DEFAULT_URL)
    }

    /// Create a fetcher for another URL.
    pub fn with_url(client: C, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// The URL this fetcher requests.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Run the full flow, writing report lines to `out`.
    ///
    /// Request failures are reported on `out` and yield
    /// [`ExitStatus::Failure`]; only a failure to write `out` is returned
    /// as an error.
    pub fn run<W: Write + ?Sized>(&self, args: &ArgumentList, out: &mut W) -> Result<ExitStatus> {
        tracing::debug!(count = args.len(), "echoing arguments");
        writeln!(out, "{}", args.to_json())?;
        out.flush()?;

        let rendered = self.fetch().and_then(|data| {
            to_spaced_string(&data).map_err(|e| FetchError::Decode {
                message: e.to_string(),
            })
        });

        let status = match rendered {
            Ok(data) => {
                writeln!(out, "Data: {}", data)?;
                ExitStatus::Success
            }
            Err(e) => {
                tracing::warn!(error = %e, "request failed");
                writeln!(out, "Error fetching data: {}", e)?;
                ExitStatus::Failure
            }
        };
        out.flush()?;

        Ok(status)
    }

    /// Perform the GET and decode a successful body.
    pub fn fetch(&self) -> Result<Value> {
        let response = self.client.get(&self.url)?;

        if !response.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status: response.status,
            });
        }

        serde_json::from_str(&response.body).map_err(|e| FetchError::Decode {
            message: e.to_string(),
        })
    }
}
