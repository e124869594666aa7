//! # syntagm-core
//!
//! Foundation crate for the Syntagm complexity-measurement system.
//! Defines corpus types, feature names, result types, errors, config,
//! and the node-tag inventories. Every other crate in the workspace
//! depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::AnalysisConfig;
pub use errors::{ErrorCode, PipelineError};
pub use types::{Corpus, FeatureName, FeatureRecord, Text, TextId, TokenAnnotation, YearRow};
