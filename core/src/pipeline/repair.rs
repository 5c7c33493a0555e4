//! pipeline/repair.rs
//! Best-effort repair of a document that no strategy accepted.
//!
//! Design notes:
//! - Works on the lossy text form of a candidate buffer.
//! - Strips a leading BOM and every control character, then parses the span
//!   from the first `{` to the last `}`.
//! - Never fabricates content: if the span does not parse, repair fails.

use std::fmt;

use crate::document::{clean_text, document_span, parse_document, Document};
use crate::pipeline::codec::SaveCodec;
use crate::telemetry::Stage;
use crate::types::StrategyFailure;

/// Which buffer the repaired document came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepairSource {
    /// Plaintext the `Standard` strategy decrypted but could not parse.
    DecryptedPlaintext,
    /// The container bytes themselves.
    RawText,
}

impl fmt::Display for RepairSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepairSource::DecryptedPlaintext => f.write_str("decrypted-plaintext"),
            RepairSource::RawText => f.write_str("raw-text"),
        }
    }
}

/// Clean `text` and parse its delimited span.
///
/// Returns the cleaned span together with its document.
pub fn repair_text(text: &str) -> Option<(String, Document)> {
    let cleaned = clean_text(text);
    let span = document_span(&cleaned)?;
    let document = parse_document(span).ok()?;
    Some((span.to_string(), document))
}

pub(crate) struct Repaired {
    pub text: String,
    pub document: Document,
    pub source: RepairSource,
}

impl SaveCodec {
    /// Try each candidate in order; the first that repairs wins.
    pub(crate) fn repair(
        &self,
        candidates: &[(RepairSource, &[u8])],
    ) -> Result<Repaired, StrategyFailure> {
        for &(source, bytes) in candidates {
            let scope = self.scope(Stage::Repair, None, bytes.len());
            let text = String::from_utf8_lossy(bytes);
            match repair_text(&text) {
                Some((text, document)) => {
                    scope.ok(text.as_bytes());
                    return Ok(Repaired { text, document, source });
                }
                None => scope.fail(&format_args!("no parseable document in {}", source)),
            }
        }

        Err(StrategyFailure {
            strategy: None,
            stage: Stage::Repair,
            reason: "no parseable delimited span".to_string(),
        })
    }
}
