//! Tokenizer for serialized tag paths.
//!
//! Replaces regex matching over the raw strings: split on the segment
//! delimiter, parse each segment into `(marker, label)`, and let the
//! counting layers work with structural predicates over the decoded
//! sequence.

use smallvec::SmallVec;

use syntagm_core::errors::AnnotationError;
use syntagm_core::types::Text;

/// Span marker prefixing a node tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanMarker {
    /// `B-`: the tag opens a multi-token constituent span.
    Begin,
    /// `I-`: the tag continues a span.
    Inside,
    /// `E-`: the tag closes a span.
    End,
}

/// One decoded segment of a tag path. Borrows its label from the
/// annotation string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagSegment<'a> {
    /// `None` for an unspanned singleton tag.
    pub marker: Option<SpanMarker>,
    pub label: &'a str,
}

impl TagSegment<'_> {
    /// Unmarked singleton tags and `B-` tags initiate a span.
    pub fn is_span_initial(&self) -> bool {
        matches!(self.marker, None | Some(SpanMarker::Begin))
    }
}

/// Decoded segments of one tag path. Paths are shallow; eight segments
/// cover nearly every token without a heap allocation.
pub type Segments<'a> = SmallVec<[TagSegment<'a>; 8]>;

/// One token with its tag path decoded.
#[derive(Debug, Clone)]
pub struct DecodedToken<'a> {
    pub sentence_id: usize,
    pub segments: Segments<'a>,
    pub pos: &'a str,
}

/// Decode a single tag path into its `(marker, label)` segments.
///
/// Fails on an empty path, an empty segment (stray delimiter), or a span
/// marker with no label behind it.
pub fn decode_path(path: &str) -> Result<Segments<'_>, AnnotationError> {
    if path.is_empty() {
        return Err(AnnotationError::EmptyPath);
    }

    let mut segments = Segments::new();
    for (index, raw) in path.split('|').enumerate() {
        if raw.is_empty() {
            return Err(AnnotationError::EmptySegment {
                path: path.to_string(),
                index,
            });
        }

        let (marker, label) = if let Some(rest) = raw.strip_prefix("B-") {
            (Some(SpanMarker::Begin), rest)
        } else if let Some(rest) = raw.strip_prefix("I-") {
            (Some(SpanMarker::Inside), rest)
        } else if let Some(rest) = raw.strip_prefix("E-") {
            (Some(SpanMarker::End), rest)
        } else {
            (None, raw)
        };

        if label.is_empty() {
            return Err(AnnotationError::MarkerWithoutLabel {
                path: path.to_string(),
                index,
            });
        }

        segments.push(TagSegment { marker, label });
    }
    Ok(segments)
}

/// Decode every token of a text. The decoded tokens borrow from the text.
pub fn decode_text(text: &Text) -> Result<Vec<DecodedToken<'_>>, AnnotationError> {
    text.tokens()
        .iter()
        .map(|token| {
            Ok(DecodedToken {
                sentence_id: token.sentence_id,
                segments: decode_path(&token.tag_path)?,
                pos: token.pos_tag.as_str(),
            })
        })
        .collect()
}
