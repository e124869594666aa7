//! Corpus shape errors.

use super::error_code::{self, ErrorCode};

/// A text violates the corpus input invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CorpusError {
    /// The text has no tokens at all.
    #[error("text has no tokens")]
    EmptyText,

    /// `max(sentence_id) + 1` does not equal the number of distinct
    /// sentence ids, i.e. some sentence in the range has no token.
    #[error("non-contiguous sentence ids: expected {expected} distinct ids, found {found}")]
    NonContiguousSentenceIds { expected: usize, found: usize },
}

impl ErrorCode for CorpusError {
    fn error_code(&self) -> &'static str {
        error_code::CORPUS_ERROR
    }
}
