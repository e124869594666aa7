//! # syntagm-analysis
//!
//! The complexity-measurement engine: decodes per-token tag paths into
//! structural signals, combines them into a fixed 24-feature vector per
//! text, and aggregates per-text values into per-year summary statistics.
//!
//! The whole pipeline is a deterministic, stateless batch transformation:
//! a pure function from a [`syntagm_core::Corpus`] to a feature set, with
//! no persistent state and no internal I/O.

pub mod aggregation;
pub mod export;
pub mod features;
pub mod measures;
pub mod patterns;
pub mod pipeline;
pub mod tagpath;

pub use pipeline::AnalysisPipeline;
pub use tagpath::{Category, SpanMarker, TagSegment};
