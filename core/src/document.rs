//! document.rs
//! The decoded save document and its text helpers.
//!
//! The codec only checks JSON syntax; no schema is enforced.

use serde_json::Value;

use crate::constants::{BOM, DOC_CLOSE, DOC_OPEN};
use crate::types::CodecError;

/// Decoded key/value tree of a save.
pub type Document = Value;

pub fn parse_document(text: &str) -> Result<Document, serde_json::Error> {
    serde_json::from_str(text)
}

/// At least one opening and one closing structural delimiter.
pub fn has_delimiters(text: &str) -> bool {
    text.contains(DOC_OPEN) && text.contains(DOC_CLOSE)
}

/// Check that `text` is syntactically valid JSON.
pub fn validate_document(text: &str) -> Result<(), CodecError> {
    parse_document(text).map(|_| ()).map_err(CodecError::InvalidDocument)
}

/// Re-serialize JSON text with two-space indentation.
pub fn format_document(text: &str) -> Result<String, CodecError> {
    let doc = parse_document(text).map_err(CodecError::InvalidDocument)?;
    to_pretty(&doc)
}

pub fn to_pretty(doc: &Document) -> Result<String, CodecError> {
    serde_json::to_string_pretty(doc).map_err(CodecError::Serialization)
}

/// Drop a leading BOM and every control character (0x00..=0x1F, 0x7F).
pub fn clean_text(text: &str) -> String {
    text.strip_prefix(BOM)
        .unwrap_or(text)
        .chars()
        .filter(|c| !matches!(*c, '\u{00}'..='\u{1F}' | '\u{7F}'))
        .collect()
}

/// Span from the first `{` through the last `}`, if it is non-empty.
pub fn document_span(text: &str) -> Option<&str> {
    let start = text.find(DOC_OPEN)?;
    let end = text.rfind(DOC_CLOSE)?;
    (end > start).then(|| &text[start..=end])
}
