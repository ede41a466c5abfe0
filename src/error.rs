//! Error types for jsonfetch.
//!
//! This module defines [`FetchError`], the single error type covering every
//! failure the program can hit, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every variant maps to a defined process exit code via [`FetchError::exit_code`]
//! - Request-level failures share the `Error fetching data:` report line
//! - Messages are rendered for humans, not parsed by callers

use thiserror::Error;

/// Core error type for jsonfetch operations.
#[derive(Debug, Error)]
pub enum FetchError {
    /// No response was received (DNS, connection or TLS failure).
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// A response was received with a non-success status code.
    #[error("HTTP {status} fetching {url}")]
    Status { url: String, status: u16 },

    /// A success response carried a body that is not valid JSON.
    #[error("response body is not valid JSON: {message}")]
    Decode { message: String },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {message}")]
    ClientInit { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FetchError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            FetchError::ClientInit { .. } => 2,
            FetchError::Transport { .. }
            | FetchError::Status { .. }
            | FetchError::Decode { .. }
            | FetchError::Io(_) => 1,
        }
    }

    /// Whether this failure happened while performing the GET request.
    pub fn is_request_failure(&self) -> bool {
        matches!(
            self,
            FetchError::Transport { .. } | FetchError::Status { .. } | FetchError::Decode { .. }
        )
    }
}

/// Result type alias for jsonfetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_displays_url_and_message() {
        let err = FetchError::Transport {
            url: "https://example.invalid/".into(),
            message: "dns error".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("https://example.invalid/"));
        assert!(msg.contains("dns error"));
    }

    #[test]
    fn status_displays_code_and_url() {
        let err = FetchError::Status {
            url: "https://example.com/todos/1".into(),
            status: 404,
        };
        assert_eq!(err.to_string(), "HTTP 404 fetching https://example.com/todos/1");
    }

    #[test]
    fn decode_displays_message() {
        let err = FetchError::Decode {
            message: "expected value at line 1 column 1".into(),
        };
        assert!(err.to_string().contains("line 1 column 1"));
    }

    #[test]
    fn request_failures_exit_with_one() {
        let errors = [
            FetchError::Transport {
                url: "u".into(),
                message: "m".into(),
            },
            FetchError::Status {
                url: "u".into(),
                status: 500,
            },
            FetchError::Decode {
                message: "m".into(),
            },
        ];
        for err in errors {
            assert_eq!(err.exit_code(), 1, "{err}");
            assert!(err.is_request_failure());
        }
    }

    #[test]
    fn client_init_exits_with_two() {
        let err = FetchError::ClientInit {
            message: "no tls backend".into(),
        };
        assert_eq!(err.exit_code(), 2);
        assert!(!err.is_request_failure());
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed");
        let err: FetchError = io_err.into();
        assert!(matches!(err, FetchError::Io(_)));
        assert_eq!(err.exit_code(), 1);
        assert!(!err.is_request_failure());
    }
}
