//! Error handling for Syntagm.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod aggregate_error;
pub mod annotation_error;
pub mod config_error;
pub mod corpus_error;
pub mod error_code;
pub mod export_error;
pub mod extract_error;
pub mod measure_error;
pub mod pipeline_error;

pub use aggregate_error::AggregateError;
pub use annotation_error::AnnotationError;
pub use config_error::ConfigError;
pub use corpus_error::CorpusError;
pub use error_code::ErrorCode;
pub use export_error::ExportError;
pub use extract_error::ExtractError;
pub use measure_error::MeasureError;
pub use pipeline_error::{AnalysisReport, PipelineError};
