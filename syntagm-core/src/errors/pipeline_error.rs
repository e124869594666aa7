//! Pipeline errors and non-fatal error collection.

use super::error_code::ErrorCode;
use super::{AggregateError, ExtractError};
use crate::types::corpus::TextId;
use crate::types::features::FeatureSet;

/// Errors that can occur during a full analysis run.
///
/// Per-text failures carry the offending text identity so a failure can be
/// traced back to its year and text number.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PipelineError {
    #[error("text {id}: {source}")]
    Text {
        id: TextId,
        #[source]
        source: ExtractError,
    },

    #[error(transparent)]
    Aggregate(#[from] AggregateError),

    #[error("corpus contains no texts")]
    EmptyCorpus,
}

impl PipelineError {
    /// Attach a text identity to a per-text extraction failure.
    pub fn for_text(id: TextId, source: ExtractError) -> Self {
        Self::Text { id, source }
    }
}

impl ErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Text { source, .. } => source.error_code(),
            Self::Aggregate(e) => e.error_code(),
            Self::EmptyCorpus => super::error_code::CORPUS_ERROR,
        }
    }
}

/// Result of a lenient analysis run.
///
/// Texts that failed extraction are skipped and their errors collected
/// here, so partial results can be returned even when some texts are
/// malformed.
#[derive(Debug, Default)]
pub struct AnalysisReport {
    /// The per-feature summary tables for the texts that succeeded.
    pub features: FeatureSet,
    /// Non-fatal per-text errors collected during the run.
    pub errors: Vec<PipelineError>,
}

impl AnalysisReport {
    pub fn new(features: FeatureSet) -> Self {
        Self {
            features,
            errors: Vec::new(),
        }
    }

    /// Returns true if no text was skipped.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}
