//! Year-aggregation errors.

use super::error_code::{self, ErrorCode};
use crate::types::features::FeatureName;

/// Errors finalizing a feature's per-year summary table.
///
/// The sample standard deviation (divisor n−1) is undefined for fewer than
/// two samples; both undersized groups are reported explicitly instead of
/// yielding NaN.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AggregateError {
    #[error("feature {feature}: no records to aggregate")]
    NoRecords { feature: FeatureName },

    #[error(
        "feature {feature}, year {year}: {count} text value(s), \
         sample standard deviation needs at least 2"
    )]
    InsufficientSamples {
        feature: FeatureName,
        year: i32,
        count: usize,
    },

    #[error(
        "feature {feature}: {count} year value(s), \
         across-year statistics need at least 2"
    )]
    InsufficientYears { feature: FeatureName, count: usize },
}

impl ErrorCode for AggregateError {
    fn error_code(&self) -> &'static str {
        error_code::AGGREGATE_ERROR
    }
}
