//! Per-text feature extraction.
//!
//! Validates a text, decodes every tag path exactly once, and assembles
//! the fixed 24-feature vector from the pattern counts and depth
//! measures. Extraction is a pure function over one text with no shared
//! mutable state, so texts can be processed in parallel.

use syntagm_core::errors::{ExtractError, MeasureError};
use syntagm_core::types::{FeatureName, FeatureVector, Text};

use crate::measures::{depth_stats, mean_span_length};
use crate::patterns::{PatternCounts, TextProfile};
use crate::tagpath::{decode_text, Category};

/// Extract the full feature vector of one text, in [`FeatureName::ALL`]
/// order.
pub fn extract(text: &Text) -> Result<FeatureVector, ExtractError> {
    text.validate()?;

    let decoded = decode_text(text)?;
    let profile = TextProfile::build(&decoded);

    let sentence_count = text.sentence_count();
    let sentences = sentence_count as f64;
    let tokens = text.len() as f64;
    let depths = depth_stats(&decoded, sentence_count);
    let clauses = profile.counts(Category::AnyClause);

    let mut values: FeatureVector = [0.0; FeatureName::COUNT];
    for (index, feature) in FeatureName::ALL.into_iter().enumerate() {
        values[index] = match feature {
            FeatureName::SentenceLength => tokens / sentences,
            FeatureName::TokenEmbeddingDepth => depths.mean_token_depth,
            FeatureName::MaxSentenceEmbeddingDepth => depths.mean_max_sentence_depth,

            FeatureName::SimplexClausesPerSentence => {
                per_sentence(&profile, Category::SimplexClause, sentences)
            }
            FeatureName::DependentClausesPerSentence => {
                per_sentence(&profile, Category::DependentClause, sentences)
            }
            FeatureName::RelativeClausesPerSentence => {
                per_sentence(&profile, Category::RelativeClause, sentences)
            }
            FeatureName::ParatacticClausesPerSentence => {
                per_sentence(&profile, Category::ParatacticClause, sentences)
            }
            FeatureName::ClausesPerSentence => {
                per_sentence(&profile, Category::AnyClause, sentences)
            }
            FeatureName::VerbPhrasesPerSentence => {
                per_sentence(&profile, Category::VerbPhrase, sentences)
            }
            FeatureName::VerbComplexesPerSentence => {
                per_sentence(&profile, Category::VerbComplex, sentences)
            }
            FeatureName::NounPhrasesPerSentence => {
                per_sentence(&profile, Category::NounPhrase, sentences)
            }

            FeatureName::SimplexClauseRatio => {
                per_clause(&profile, Category::SimplexClause, clauses, feature)?
            }
            FeatureName::DependentClauseRatio => {
                per_clause(&profile, Category::DependentClause, clauses, feature)?
            }
            FeatureName::RelativeClauseRatio => {
                per_clause(&profile, Category::RelativeClause, clauses, feature)?
            }
            FeatureName::ParatacticClauseRatio => {
                per_clause(&profile, Category::ParatacticClause, clauses, feature)?
            }

            FeatureName::ClauseLength => {
                mean_span_length(clauses, Category::AnyClause, feature)?
            }
            FeatureName::SimplexClauseLength => span_length(
                &profile,
                Category::SimplexClause,
                feature,
            )?,
            FeatureName::RelativeClauseLength => span_length(
                &profile,
                Category::RelativeClause,
                feature,
            )?,
            FeatureName::NounPhraseLength => {
                span_length(&profile, Category::NounPhrase, feature)?
            }
            FeatureName::PrepPhraseLength => {
                span_length(&profile, Category::PrepPhrase, feature)?
            }
            FeatureName::InitialFieldLength => {
                span_length(&profile, Category::InitialField, feature)?
            }
            FeatureName::MiddleFieldLength => {
                span_length(&profile, Category::MiddleField, feature)?
            }
            FeatureName::FinalFieldLength => {
                span_length(&profile, Category::FinalField, feature)?
            }

            FeatureName::VerbNounRatio => verb_noun_ratio(&profile, feature)?,
        };
    }
    Ok(values)
}

/// Span-initiating occurrences per sentence.
fn per_sentence(profile: &TextProfile, category: Category, sentences: f64) -> f64 {
    profile.counts(category).spans as f64 / sentences
}

/// Span-initiating occurrences per clause.
fn per_clause(
    profile: &TextProfile,
    category: Category,
    clauses: PatternCounts,
    feature: FeatureName,
) -> Result<f64, MeasureError> {
    if clauses.spans == 0 {
        return Err(MeasureError::EmptyCategory {
            category: Category::AnyClause.name(),
            feature,
        });
    }
    Ok(profile.counts(category).spans as f64 / clauses.spans as f64)
}

fn span_length(
    profile: &TextProfile,
    category: Category,
    feature: FeatureName,
) -> Result<f64, MeasureError> {
    mean_span_length(profile.counts(category), category, feature)
}

/// Full verbs per common noun, from the part-of-speech column.
fn verb_noun_ratio(
    profile: &TextProfile,
    feature: FeatureName,
) -> Result<f64, MeasureError> {
    let nouns = profile.counts(Category::CommonNoun);
    if nouns.total == 0 {
        return Err(MeasureError::EmptyCategory {
            category: Category::CommonNoun.name(),
            feature,
        });
    }
    Ok(profile.counts(Category::FullVerb).total as f64 / nouns.total as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use syntagm_core::errors::CorpusError;
    use syntagm_core::types::TokenAnnotation;

    #[test]
    fn test_extract_rejects_invalid_text() {
        let text = Text::new(vec![
            TokenAnnotation::new(0, "SIMPX", "NN"),
            TokenAnnotation::new(2, "SIMPX", "NN"),
        ]);
        let err = extract(&text).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::Corpus(CorpusError::NonContiguousSentenceIds { .. })
        ));
    }

    #[test]
    fn test_vector_is_ordered_by_feature_inventory() {
        // One sentence, every category present at least once.
        let text = Text::new(vec![
            TokenAnnotation::new(0, "B-SIMPX|VF|B-NX", "NN"),
            TokenAnnotation::new(0, "I-SIMPX|LK|VXFIN", "VVFIN"),
            TokenAnnotation::new(0, "I-SIMPX|MF|E-NX|B-PX", "APPR"),
            TokenAnnotation::new(0, "I-SIMPX|MF|E-PX|B-R-SIMPX|C", "PRELS"),
            TokenAnnotation::new(0, "I-SIMPX|MF|I-R-SIMPX|NX", "NN"),
            TokenAnnotation::new(0, "I-SIMPX|NF|E-R-SIMPX|VC|VXINF", "VVINF"),
            TokenAnnotation::new(0, "E-SIMPX|P-SIMPX", "KON"),
        ]);
        let values = extract(&text).unwrap();

        let index = |feature: FeatureName| {
            FeatureName::ALL.iter().position(|f| *f == feature).unwrap()
        };
        assert_eq!(values[index(FeatureName::SentenceLength)], 7.0);
        assert_eq!(values[index(FeatureName::SimplexClausesPerSentence)], 1.0);
        assert_eq!(values[index(FeatureName::RelativeClausesPerSentence)], 1.0);
        assert_eq!(values[index(FeatureName::ClausesPerSentence)], 3.0);
        assert_eq!(values[index(FeatureName::VerbNounRatio)], 1.0);
    }
}
