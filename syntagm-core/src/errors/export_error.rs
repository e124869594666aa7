//! Export and re-import errors.

use super::error_code::{self, ErrorCode};

/// Errors rendering or re-parsing the tidy per-feature tables.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    /// A serialized `text_values` cell is not a bracketed list.
    #[error("malformed value list {input:?}: expected [v1, v2, ...]")]
    MalformedValueList { input: String },

    /// An element of a value list is not a floating-point literal.
    #[error("invalid float literal {literal:?} in value list")]
    InvalidFloat { literal: String },

    #[error("JSON serialization failed: {message}")]
    Json { message: String },
}

impl ErrorCode for ExportError {
    fn error_code(&self) -> &'static str {
        error_code::EXPORT_ERROR
    }
}
