//! Mean span length.
//!
//! The length of a category's spans is measured in nested tag
//! occurrences: total matches in any marker state, normalized by the
//! number of span-initiating matches.

use syntagm_core::errors::MeasureError;
use syntagm_core::types::FeatureName;

use crate::patterns::PatternCounts;
use crate::tagpath::Category;

/// `total / spans` for one category.
///
/// A category that never opens a span in the text has no defined length;
/// that is reported as [`MeasureError::EmptyCategory`] rather than being
/// folded into 0 or NaN.
pub fn mean_span_length(
    counts: PatternCounts,
    category: Category,
    feature: FeatureName,
) -> Result<f64, MeasureError> {
    if counts.spans == 0 {
        return Err(MeasureError::EmptyCategory {
            category: category.name(),
            feature,
        });
    }
    Ok(counts.total as f64 / counts.spans as f64)
}
