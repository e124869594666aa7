//! The analysis pipeline: map over texts, reduce by year.
//!
//! Per-text extraction has no cross-text dependency, so the map step can
//! run on the rayon pool; order-preserving `collect` keeps the result
//! independent of scheduling. Year aggregation is the synchronization
//! barrier: it runs only after every text's records exist.

use std::time::Instant;

use rayon::prelude::*;

use syntagm_core::config::AnalysisConfig;
use syntagm_core::errors::{AggregateError, AnalysisReport, ExtractError, PipelineError};
use syntagm_core::types::{
    Corpus, FeatureName, FeatureRecord, FeatureSet, FeatureVector, Text, TextId,
};

use crate::aggregation;
use crate::features;

/// Pure corpus-to-feature-set transformation.
pub struct AnalysisPipeline {
    config: AnalysisConfig,
}

impl AnalysisPipeline {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Create a pipeline with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(AnalysisConfig::default())
    }

    /// Run the full analysis.
    ///
    /// With `fail_fast` (the default) the first failing text aborts the
    /// run. Otherwise failing texts are skipped and their errors returned
    /// in the report. Aggregation failures are fatal in both modes.
    pub fn run(&self, corpus: &Corpus) -> Result<AnalysisReport, PipelineError> {
        if corpus.is_empty() {
            return Err(PipelineError::EmptyCorpus);
        }

        let started = Instant::now();
        let texts: Vec<(TextId, &Text)> = corpus.iter().collect();

        let extracted: Vec<(TextId, Result<FeatureVector, ExtractError>)> =
            if self.config.effective_parallel() {
                texts
                    .par_iter()
                    .map(|&(id, text)| (id, features::extract(text)))
                    .collect()
            } else {
                texts
                    .iter()
                    .map(|&(id, text)| (id, features::extract(text)))
                    .collect()
            };

        let mut vectors: Vec<(TextId, FeatureVector)> =
            Vec::with_capacity(extracted.len());
        let mut errors = Vec::new();
        for (id, result) in extracted {
            match result {
                Ok(vector) => {
                    tracing::debug!(year = id.year, no = id.no, "text extracted");
                    vectors.push((id, vector));
                }
                Err(source) => {
                    let error = PipelineError::for_text(id, source);
                    if self.config.effective_fail_fast() {
                        return Err(error);
                    }
                    tracing::warn!(
                        year = id.year,
                        no = id.no,
                        error = %error,
                        "skipping text"
                    );
                    errors.push(error);
                }
            }
        }

        if vectors.is_empty() {
            // Every text failed extraction; nothing left to aggregate.
            return Err(errors.swap_remove(0));
        }

        let features = Self::reduce(&vectors)?;
        tracing::info!(
            texts = vectors.len(),
            skipped = errors.len(),
            features = FeatureName::COUNT,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "analysis complete"
        );
        Ok(AnalysisReport { features, errors })
    }

    /// Reduce step: one summary table per feature, keyed by year.
    fn reduce(vectors: &[(TextId, FeatureVector)]) -> Result<FeatureSet, AggregateError> {
        let mut set = FeatureSet::new();
        for (index, feature) in FeatureName::ALL.into_iter().enumerate() {
            let records: Vec<FeatureRecord> = vectors
                .iter()
                .map(|&(id, values)| FeatureRecord {
                    id,
                    value: values[index],
                })
                .collect();
            set.insert(feature, aggregation::summarize(feature, &records)?);
        }
        Ok(set)
    }
}
