//! pipeline/decode.rs
//! Ordered strategy chain plus the repair step.

use std::fmt;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::container::ContainerKind;
use crate::document::{parse_document, Document};
use crate::pipeline::codec::SaveCodec;
use crate::pipeline::repair::RepairSource;
use crate::pipeline::strategy::{DecodeStrategy, StrategyError};
use crate::telemetry::Stage;
use crate::types::{CodecError, StrategyFailure};

/// How a document was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeRoute {
    Strategy(DecodeStrategy),
    Repaired(RepairSource),
    /// Plain-text container parsed as is.
    PlainText,
}

impl fmt::Display for DecodeRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeRoute::Strategy(s) => write!(f, "{s}"),
            DecodeRoute::Repaired(source) => write!(f, "repaired from {source}"),
            DecodeRoute::PlainText => f.write_str("plain-text"),
        }
    }
}

/// A decoded save: the document text and its parsed tree.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedSave {
    pub text: String,
    pub document: Document,
    pub route: DecodeRoute,
}

impl DecodedSave {
    /// Strategy that accepted the input, `None` for repaired or plain text.
    pub fn strategy(&self) -> Option<DecodeStrategy> {
        match self.route {
            DecodeRoute::Strategy(s) => Some(s),
            _ => None,
        }
    }

    pub fn repaired(&self) -> bool {
        matches!(self.route, DecodeRoute::Repaired(_))
    }

    pub fn into_document(self) -> Document {
        self.document
    }
}

impl SaveCodec {
    /// Decode a binary container.
    ///
    /// Strategies run in configured order on the same input and the first
    /// success wins. `TruncatedPayload` stops the chain at once. When every
    /// strategy fails and repair is enabled, the decrypted plaintext (if
    /// any) and then the raw bytes are repaired.
    pub fn decode(&self, raw: &[u8]) -> Result<DecodedSave, CodecError> {
        if raw.is_empty() {
            warn!("empty container");
            return Err(CodecError::DecodeFailure { attempts: Vec::new() });
        }

        let mut attempts = Vec::with_capacity(self.config().strategies.len() + 1);
        let mut residue = None;

        for &strategy in &self.config().strategies {
            match self.run_strategy(strategy, raw, &mut residue) {
                Ok(accepted) => {
                    debug!(strategy = strategy.name(), len = raw.len(), "decoded");
                    return Ok(DecodedSave {
                        text: accepted.text,
                        document: accepted.document,
                        route: DecodeRoute::Strategy(strategy),
                    });
                }
                Err(StrategyError::Fatal(e)) => {
                    warn!(strategy = strategy.name(), error = %e, "decode aborted");
                    return Err(e);
                }
                Err(StrategyError::Rejected(failure)) => {
                    debug!(%failure, "strategy rejected");
                    attempts.push(failure);
                }
            }
        }

        if self.config().repair {
            let mut candidates: Vec<(RepairSource, &[u8])> = Vec::with_capacity(2);
            if let Some(plain) = residue.as_deref() {
                candidates.push((RepairSource::DecryptedPlaintext, plain));
            }
            candidates.push((RepairSource::RawText, raw));

            match self.repair(&candidates) {
                Ok(repaired) => {
                    warn!(source = %repaired.source, "document recovered by repair");
                    return Ok(DecodedSave {
                        text: repaired.text,
                        document: repaired.document,
                        route: DecodeRoute::Repaired(repaired.source),
                    });
                }
                Err(failure) => attempts.push(failure),
            }
        }

        warn!(attempts = attempts.len(), "decode failed");
        Err(CodecError::DecodeFailure { attempts })
    }

    /// Decode, then deserialize the document into `T`.
    pub fn decode_as<T: DeserializeOwned>(&self, raw: &[u8]) -> Result<T, CodecError> {
        let decoded = self.decode(raw)?;
        serde_json::from_value(decoded.document).map_err(CodecError::Serialization)
    }

    /// Decode by container kind.
    ///
    /// `PlainText` bytes are read as (lossy) UTF-8 text and parsed directly,
    /// with the repair step as the only fallback.
    pub fn decode_container(&self, kind: ContainerKind, raw: &[u8]) -> Result<DecodedSave, CodecError> {
        match kind {
            ContainerKind::Binary => self.decode(raw),
            ContainerKind::PlainText => self.decode_plain_text(raw),
        }
    }

    fn decode_plain_text(&self, raw: &[u8]) -> Result<DecodedSave, CodecError> {
        if raw.is_empty() {
            return Err(CodecError::DecodeFailure { attempts: Vec::new() });
        }

        let scope = self.scope(Stage::Utf8, None, raw.len());
        let text = String::from_utf8_lossy(raw).into_owned();
        scope.ok(text.as_bytes());

        let scope = self.scope(Stage::Parse, None, text.len());
        let failure = match parse_document(&text) {
            Ok(document) => {
                scope.ok(text.as_bytes());
                return Ok(DecodedSave { text, document, route: DecodeRoute::PlainText });
            }
            Err(e) => {
                scope.fail(&e);
                StrategyFailure { strategy: None, stage: Stage::Parse, reason: e.to_string() }
            }
        };

        let mut attempts = vec![failure];
        if self.config().repair {
            match self.repair(&[(RepairSource::RawText, raw)]) {
                Ok(repaired) => {
                    warn!(source = %repaired.source, "document recovered by repair");
                    return Ok(DecodedSave {
                        text: repaired.text,
                        document: repaired.document,
                        route: DecodeRoute::Repaired(repaired.source),
                    });
                }
                Err(failure) => attempts.push(failure),
            }
        }
        Err(CodecError::DecodeFailure { attempts })
    }
}
