//! jsonfetch - echo arguments as JSON and fetch one JSON document.
//!
//! The binary prints its arguments as a JSON array, performs a single GET
//! against a fixed endpoint and prints either the decoded body or an error,
//! exiting `0` on success, `1` on request failure and `2` when the HTTP
//! client cannot be built.
//!
//! # Modules
//!
//! - [`args`] - Process argument list
//! - [`client`] - HTTP client capability and its reqwest implementation
//! - [`error`] - Error types and result aliases
//! - [`fetcher`] - The echo-then-fetch flow
//! - [`json`] - Spaced single-line JSON rendering
//!
//! # Example
//!
//! ```
//! use jsonfetch::ArgumentList;
//!
//! let args = ArgumentList::from(&["--flag", "value"][..]);
//! assert_eq!(args.to_json(), r#"["--flag", "value"]"#);
//! ```

pub mod args;
pub mod client;
pub mod error;
pub mod fetcher;
pub mod json;

pub use args::ArgumentList;
pub use error::{FetchError, Result};
