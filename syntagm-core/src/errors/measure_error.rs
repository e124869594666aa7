//! Measurement errors.

use super::error_code::{self, ErrorCode};
use crate::types::features::FeatureName;

/// A length or ratio computation would divide by a category count of zero.
///
/// This is always a hard failure: converting it to 0 or NaN would let the
/// missing category propagate invisibly into the year aggregates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeasureError {
    #[error("category {category:?} does not occur in the text (feature {feature})")]
    EmptyCategory {
        category: &'static str,
        feature: FeatureName,
    },
}

impl ErrorCode for MeasureError {
    fn error_code(&self) -> &'static str {
        error_code::MEASURE_ERROR
    }
}
