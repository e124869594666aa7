//! The tag-path mini-language.
//!
//! A token's annotation is a "|"-joined stack of node tags, each tag
//! optionally prefixed with a span marker (`B-`/`I-`/`E-`). This module
//! decodes that language into structured segments and defines the
//! node-label categories whose occurrences the measures count.

pub mod category;
pub mod decoder;

pub use category::{AnnotationColumn, Category};
pub use decoder::{decode_path, decode_text, DecodedToken, Segments, SpanMarker, TagSegment};
