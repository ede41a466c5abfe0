//! Process argument list.
//!
//! Arguments are never interpreted. Flag-like values such as `--help` or
//! `--` are kept verbatim, so no flag parser sits in front of them.

use serde::Serialize;
use std::ffi::OsString;

use crate::json::to_spaced_string;

/// Ordered, immutable list of invocation arguments (program name excluded).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ArgumentList(Vec<String>);

impl ArgumentList {
    /// Create an argument list from already-collected strings.
    pub fn new(args: Vec<String>) -> Self {
        Self(args)
    }

    /// Read the current process arguments, skipping the program name.
    ///
    /// Non-UTF-8 arguments are converted lossily.
    pub fn from_env() -> Self {
        Self::from_os_args(std::env::args_os().skip(1))
    }

    /// Build from raw OS strings.
    pub fn from_os_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        Self(
            args.into_iter()
                .map(|arg| arg.to_string_lossy().into_owned())
                .collect(),
        )
    }

    /// The arguments in invocation order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render as a single-line JSON array of strings.
    pub fn to_json(&self) -> String {
        // Serializing a list of strings cannot fail.
        to_spaced_string(&self.0).unwrap_or_else(|_| String::from("[]"))
    }
}

impl From<Vec<String>> for ArgumentList {
    fn from(args: Vec<String>) -> Self {
        Self::new(args)
    }
}

impl<'a> From<&'a [&'a str]> for ArgumentList {
    fn from(args: &'a [&'a str]) -> Self {
        Self(args.iter().map(|s| s.to_string()).collect())
    }
}
