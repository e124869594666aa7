//! The fixed feature inventory and the result types built from it.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::corpus::TextId;

/// The 24 syntactic-complexity features, in vector order.
///
/// Groups: one length-in-tokens measure, two embedding-depth measures,
/// eight per-sentence ratios, four per-clause ratios, eight mean span
/// lengths, and one part-of-speech ratio.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FeatureName {
    SentenceLength,
    TokenEmbeddingDepth,
    MaxSentenceEmbeddingDepth,
    SimplexClausesPerSentence,
    DependentClausesPerSentence,
    RelativeClausesPerSentence,
    ParatacticClausesPerSentence,
    ClausesPerSentence,
    VerbPhrasesPerSentence,
    VerbComplexesPerSentence,
    NounPhrasesPerSentence,
    SimplexClauseRatio,
    DependentClauseRatio,
    RelativeClauseRatio,
    ParatacticClauseRatio,
    ClauseLength,
    SimplexClauseLength,
    RelativeClauseLength,
    NounPhraseLength,
    PrepPhraseLength,
    InitialFieldLength,
    MiddleFieldLength,
    FinalFieldLength,
    VerbNounRatio,
}

impl FeatureName {
    /// All features in vector order.
    pub const ALL: [FeatureName; 24] = [
        Self::SentenceLength,
        Self::TokenEmbeddingDepth,
        Self::MaxSentenceEmbeddingDepth,
        Self::SimplexClausesPerSentence,
        Self::DependentClausesPerSentence,
        Self::RelativeClausesPerSentence,
        Self::ParatacticClausesPerSentence,
        Self::ClausesPerSentence,
        Self::VerbPhrasesPerSentence,
        Self::VerbComplexesPerSentence,
        Self::NounPhrasesPerSentence,
        Self::SimplexClauseRatio,
        Self::DependentClauseRatio,
        Self::RelativeClauseRatio,
        Self::ParatacticClauseRatio,
        Self::ClauseLength,
        Self::SimplexClauseLength,
        Self::RelativeClauseLength,
        Self::NounPhraseLength,
        Self::PrepPhraseLength,
        Self::InitialFieldLength,
        Self::MiddleFieldLength,
        Self::FinalFieldLength,
        Self::VerbNounRatio,
    ];

    /// Number of features in the vector.
    pub const COUNT: usize = Self::ALL.len();

    /// Stable snake_case key, used for serialization and file naming.
    pub fn key(self) -> &'static str {
        match self {
            Self::SentenceLength => "sentence_length",
            Self::TokenEmbeddingDepth => "token_embedding_depth",
            Self::MaxSentenceEmbeddingDepth => "max_sentence_embedding_depth",
            Self::SimplexClausesPerSentence => "simplex_clauses_per_sentence",
            Self::DependentClausesPerSentence => "dependent_clauses_per_sentence",
            Self::RelativeClausesPerSentence => "relative_clauses_per_sentence",
            Self::ParatacticClausesPerSentence => "paratactic_clauses_per_sentence",
            Self::ClausesPerSentence => "clauses_per_sentence",
            Self::VerbPhrasesPerSentence => "verb_phrases_per_sentence",
            Self::VerbComplexesPerSentence => "verb_complexes_per_sentence",
            Self::NounPhrasesPerSentence => "noun_phrases_per_sentence",
            Self::SimplexClauseRatio => "simplex_clause_ratio",
            Self::DependentClauseRatio => "dependent_clause_ratio",
            Self::RelativeClauseRatio => "relative_clause_ratio",
            Self::ParatacticClauseRatio => "paratactic_clause_ratio",
            Self::ClauseLength => "clause_length",
            Self::SimplexClauseLength => "simplex_clause_length",
            Self::RelativeClauseLength => "relative_clause_length",
            Self::NounPhraseLength => "noun_phrase_length",
            Self::PrepPhraseLength => "prep_phrase_length",
            Self::InitialFieldLength => "initial_field_length",
            Self::MiddleFieldLength => "middle_field_length",
            Self::FinalFieldLength => "final_field_length",
            Self::VerbNounRatio => "verb_noun_ratio",
        }
    }

    /// Human-readable label for report and plot consumers.
    pub fn label(self) -> &'static str {
        match self {
            Self::SentenceLength => "Mean Sentence Length in Tokens",
            Self::TokenEmbeddingDepth => "Mean Token Embedding Depth",
            Self::MaxSentenceEmbeddingDepth => {
                "Mean Maximum Embedding Depth per Sentence"
            }
            Self::SimplexClausesPerSentence => "Simplex Clauses per Sentence",
            Self::DependentClausesPerSentence => "Dependent Clauses per Sentence",
            Self::RelativeClausesPerSentence => "Relative Clauses per Sentence",
            Self::ParatacticClausesPerSentence => {
                "Paratactic Clause Constructions per Sentence"
            }
            Self::ClausesPerSentence => "Clauses per Sentence",
            Self::VerbPhrasesPerSentence => "Verb Phrases per Sentence",
            Self::VerbComplexesPerSentence => "Verb Complexes per Sentence",
            Self::NounPhrasesPerSentence => "Noun Phrases per Sentence",
            Self::SimplexClauseRatio => "Simplex Clause Ratio",
            Self::DependentClauseRatio => "Dependent Clause Ratio",
            Self::RelativeClauseRatio => "Relative Clause Ratio",
            Self::ParatacticClauseRatio => "Paratactic Clause Construction Ratio",
            Self::ClauseLength => "Mean Clause Length",
            Self::SimplexClauseLength => "Mean Simplex Clause Length",
            Self::RelativeClauseLength => "Mean Relative Clause Length",
            Self::NounPhraseLength => "Mean Noun Phrase Length",
            Self::PrepPhraseLength => "Mean Prepositional Phrase Length",
            Self::InitialFieldLength => "Mean Initial Field Length",
            Self::MiddleFieldLength => "Mean Middle Field Length",
            Self::FinalFieldLength => "Mean Final Field Length",
            Self::VerbNounRatio => "Verb/Noun Ratio",
        }
    }

    /// Inverse of [`FeatureName::key`].
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

impl fmt::Display for FeatureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One feature vector per text, in [`FeatureName::ALL`] order.
pub type FeatureVector = [f64; FeatureName::COUNT];

/// One feature's value for one text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub id: TextId,
    pub value: f64,
}

/// One row of a feature's per-year summary table.
///
/// `text_values` preserves the per-text discovery order within the year.
/// `years_mean`/`years_std` are computed across the per-year `year_value`s
/// and broadcast identically onto every row of the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearRow {
    pub year: i32,
    pub year_value: f64,
    pub text_values: Vec<f64>,
    pub text_value_std: f64,
    pub years_mean: f64,
    pub years_std: f64,
}

/// Terminal artifact of an analysis run: one summary table per feature,
/// rows sorted ascending by year.
pub type FeatureSet = BTreeMap<FeatureName, Vec<YearRow>>;
