//! Tag-path annotation errors.

use super::error_code::{self, ErrorCode};

/// A tag-path string does not conform to the `(marker?)label` segment
/// grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnnotationError {
    #[error("empty tag path")]
    EmptyPath,

    #[error("empty segment at position {index} in tag path {path:?}")]
    EmptySegment { path: String, index: usize },

    #[error("span marker without label at position {index} in tag path {path:?}")]
    MarkerWithoutLabel { path: String, index: usize },
}

impl ErrorCode for AnnotationError {
    fn error_code(&self) -> &'static str {
        error_code::ANNOTATION_ERROR
    }
}
