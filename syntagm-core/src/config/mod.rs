//! Configuration for the analysis pipeline.

pub mod analysis_config;

pub use analysis_config::AnalysisConfig;
