//! Unified error type for state parsing
//!
//! Only the strict APIs (`try_decode`, `parse_filter_list`) surface these
//! errors; the best-effort decode path absorbs them into per-field defaults.

use thiserror::Error;

/// Error type for strict URL-state parsing operations
#[derive(Error, Debug)]
pub enum StateError {
    /// A query parameter could not be parsed into its expected shape
    #[error("malformed `{param}` parameter: {message}")]
    MalformedParam {
        param: &'static str,
        message: String,
    },

    /// Filter JSON exceeds the size guard
    #[error("filter JSON is {len} bytes, exceeds maximum of {max}")]
    FilterJsonTooLarge { len: usize, max: usize },

    /// Filter list exceeds the count guard
    #[error("{count} filters exceeds maximum of {max}")]
    TooManyFilters { count: usize, max: usize },
}

impl StateError {
    pub fn malformed(param: &'static str, message: impl Into<String>) -> Self {
        Self::MalformedParam {
            param,
            message: message.into(),
        }
    }
}
