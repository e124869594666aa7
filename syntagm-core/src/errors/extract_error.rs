//! Per-text extraction errors.

use super::error_code::ErrorCode;
use super::{AnnotationError, CorpusError, MeasureError};

/// Anything that can go wrong while extracting the feature vector of a
/// single text. Aggregates the subsystem errors via `From` conversions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    #[error(transparent)]
    Corpus(#[from] CorpusError),

    #[error(transparent)]
    Annotation(#[from] AnnotationError),

    #[error(transparent)]
    Measure(#[from] MeasureError),
}

impl ErrorCode for ExtractError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Corpus(e) => e.error_code(),
            Self::Annotation(e) => e.error_code(),
            Self::Measure(e) => e.error_code(),
        }
    }
}
