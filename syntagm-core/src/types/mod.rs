//! Core domain types shared across the workspace.

pub mod collections;
pub mod corpus;
pub mod features;

pub use corpus::{Corpus, Text, TextId, TokenAnnotation};
pub use features::{FeatureName, FeatureRecord, FeatureSet, FeatureVector, YearRow};
