//! Year-level aggregation of per-text feature values.

pub mod years;

pub use years::summarize;
