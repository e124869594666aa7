//! Pattern counting over decoded tag paths.
//!
//! A single pass over a text's decoded tokens accumulates, for every
//! category, (a) the total number of matching segments regardless of span
//! marker and (b) the number of matches at span-initiating position
//! (unmarked singletons and `B-` tags). Matches are per decoded segment,
//! left to right, so a category that legitimately recurs inside one
//! token's stacked path contributes once per occurrence.

use crate::tagpath::{AnnotationColumn, Category, DecodedToken};

/// Occurrence counts of one category within one text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternCounts {
    /// Matches in any span-marker state.
    pub total: u64,
    /// Matches at span-initiating position.
    pub spans: u64,
}

/// Per-category occurrence counts for one text.
#[derive(Debug, Clone)]
pub struct TextProfile {
    counts: [PatternCounts; Category::COUNT],
}

impl TextProfile {
    /// Accumulate counts for every category in one pass over the tokens.
    pub fn build(tokens: &[DecodedToken<'_>]) -> Self {
        let mut counts = [PatternCounts::default(); Category::COUNT];

        for token in tokens {
            for segment in &token.segments {
                for category in Category::ALL {
                    if category.column() != AnnotationColumn::TagPath {
                        continue;
                    }
                    if category.matches(segment.label) {
                        let entry = &mut counts[category.index()];
                        entry.total += 1;
                        if segment.is_span_initial() {
                            entry.spans += 1;
                        }
                    }
                }
            }

            // Part-of-speech categories: one occurrence per matching row,
            // always span-initiating (the column carries no markers).
            for category in [Category::FullVerb, Category::CommonNoun] {
                if category.matches(token.pos) {
                    let entry = &mut counts[category.index()];
                    entry.total += 1;
                    entry.spans += 1;
                }
            }
        }

        Self { counts }
    }

    /// Counts for one category.
    pub fn counts(&self, category: Category) -> PatternCounts {
        self.counts[category.index()]
    }
}
