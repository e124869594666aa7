//! Embedding depth.
//!
//! A token's embedding depth is the number of tag segments left in its
//! path after discarding every topological-field tag. Field tags mark
//! linear position inside a clause, not syntactic nesting, so keeping
//! them would inflate depth.

use crate::tagpath::{Category, DecodedToken, TagSegment};

/// Depth summary for one text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthStats {
    /// Mean embedding depth over all tokens.
    pub mean_token_depth: f64,
    /// Mean over sentences of the maximum token depth per sentence.
    pub mean_max_sentence_depth: f64,
}

/// Embedding depth of a single decoded path.
pub fn embedding_depth(segments: &[TagSegment<'_>]) -> usize {
    segments
        .iter()
        .filter(|segment| !Category::TopologicalField.matches(segment.label))
        .count()
}

/// Compute both depth measures in one pass.
///
/// Callers must have validated the text: every sentence id lies in
/// `[0, sentence_count)` and every sentence has at least one token.
pub fn depth_stats(tokens: &[DecodedToken<'_>], sentence_count: usize) -> DepthStats {
    debug_assert!(!tokens.is_empty());
    debug_assert!(sentence_count > 0);

    let mut depth_sum = 0usize;
    let mut sentence_max = vec![0usize; sentence_count];

    for token in tokens {
        let depth = embedding_depth(&token.segments);
        depth_sum += depth;
        let max = &mut sentence_max[token.sentence_id];
        if depth > *max {
            *max = depth;
        }
    }

    DepthStats {
        mean_token_depth: depth_sum as f64 / tokens.len() as f64,
        mean_max_sentence_depth: sentence_max.iter().sum::<usize>() as f64
            / sentence_count as f64,
    }
}
