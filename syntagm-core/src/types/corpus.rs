//! Corpus types: token annotations, texts, and the two-level corpus map.
//!
//! All of these are read-only inputs owned by the caller. The analysis
//! engine borrows them and never mutates them.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::CorpusError;
use crate::types::collections::FxHashSet;

/// One token of a parsed text.
///
/// `tag_path` is the "|"-joined sequence of constituent node tags from the
/// (un-materialized) parse tree, each tag optionally prefixed with a span
/// marker `B-`/`I-`/`E-`. `pos_tag` is the token's part-of-speech tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenAnnotation {
    /// 0-based sentence index, contiguous within a text.
    pub sentence_id: usize,
    /// Serialized constituent-tree annotation for this token.
    pub tag_path: String,
    /// Part-of-speech tag.
    pub pos_tag: String,
}

impl TokenAnnotation {
    pub fn new(
        sentence_id: usize,
        tag_path: impl Into<String>,
        pos_tag: impl Into<String>,
    ) -> Self {
        Self {
            sentence_id,
            tag_path: tag_path.into(),
            pos_tag: pos_tag.into(),
        }
    }
}

/// Composite identifier of a text: publication year and per-year number.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TextId {
    pub year: i32,
    pub no: u32,
}

impl TextId {
    pub fn new(year: i32, no: u32) -> Self {
        Self { year, no }
    }
}

impl fmt::Display for TextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.year, self.no)
    }
}

/// An ordered sequence of token annotations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    tokens: Vec<TokenAnnotation>,
}

impl Text {
    pub fn new(tokens: Vec<TokenAnnotation>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[TokenAnnotation] {
        &self.tokens
    }

    /// Number of tokens in the text.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of sentences, derived from the highest sentence id.
    /// Only meaningful once [`Text::validate`] has passed.
    pub fn sentence_count(&self) -> usize {
        self.tokens
            .iter()
            .map(|t| t.sentence_id)
            .max()
            .map_or(0, |max| max + 1)
    }

    /// Check the sentence-id contiguity invariant.
    ///
    /// `max(sentence_id) + 1` must equal the number of distinct sentence
    /// ids, which guarantees every sentence in `[0, sentence_count)` has at
    /// least one token. A violation is a fatal input error.
    pub fn validate(&self) -> Result<(), CorpusError> {
        if self.tokens.is_empty() {
            return Err(CorpusError::EmptyText);
        }

        let distinct: FxHashSet<usize> =
            self.tokens.iter().map(|t| t.sentence_id).collect();
        let expected = self.sentence_count();
        if distinct.len() != expected {
            return Err(CorpusError::NonContiguousSentenceIds {
                expected,
                found: distinct.len(),
            });
        }
        Ok(())
    }
}

/// The corpus: a two-level mapping year → text number → text.
///
/// `BTreeMap` on both levels keeps iteration deterministic (ascending
/// year, then ascending text number). That order is the per-text
/// "discovery order" preserved in aggregated `text_values`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Corpus {
    years: BTreeMap<i32, BTreeMap<u32, Text>>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a text, returning the previous text under the same id if any.
    pub fn insert(&mut self, id: TextId, text: Text) -> Option<Text> {
        self.years.entry(id.year).or_default().insert(id.no, text)
    }

    pub fn get(&self, id: &TextId) -> Option<&Text> {
        self.years.get(&id.year).and_then(|y| y.get(&id.no))
    }

    /// Total number of texts across all years.
    pub fn len(&self) -> usize {
        self.years.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Number of distinct years.
    pub fn year_count(&self) -> usize {
        self.years.len()
    }

    /// Iterate over all texts in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (TextId, &Text)> {
        self.years.iter().flat_map(|(&year, texts)| {
            texts
                .iter()
                .map(move |(&no, text)| (TextId { year, no }, text))
        })
    }
}
