//! pipeline/strategy.rs
//! Decode strategies, each an independent function over the same raw input.
//!
//! A strategy either accepts the input (returns text + document) or rejects
//! it with the stage that failed. Only a hard structural violation
//! (`TruncatedPayload`) is fatal and stops the chain.

use std::fmt;

use crate::crypto::padding;
use crate::document::{has_delimiters, parse_document, Document};
use crate::headers::{strip_header, Framing};
use crate::pipeline::codec::SaveCodec;
use crate::telemetry::Stage;
use crate::transcoder::decode_text;
use crate::types::{CodecError, StrategyFailure};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeStrategy {
    /// unframe → base64 → decrypt → unpad → UTF-8 → parse.
    Standard,
    /// Whole container is already a plain JSON document.
    RawText,
    /// Framed base64 of an unencrypted document.
    FramedBase64Only,
}

impl DecodeStrategy {
    pub const DEFAULT_ORDER: [DecodeStrategy; 3] = [
        DecodeStrategy::Standard,
        DecodeStrategy::RawText,
        DecodeStrategy::FramedBase64Only,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DecodeStrategy::Standard => "standard",
            DecodeStrategy::RawText => "raw-text",
            DecodeStrategy::FramedBase64Only => "framed-base64",
        }
    }
}

impl fmt::Display for DecodeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A strategy's successful result.
#[derive(Debug)]
pub(crate) struct Accepted {
    pub text: String,
    pub document: Document,
}

#[derive(Debug)]
pub(crate) enum StrategyError {
    /// Stop the chain and surface this error.
    Fatal(CodecError),
    /// Try the next strategy.
    Rejected(StrategyFailure),
}

/// One strategy run; stage helpers report to the codec's observer.
struct Attempt<'c> {
    codec: &'c SaveCodec,
    strategy: DecodeStrategy,
}

impl SaveCodec {
    /// Run `strategy` on `raw`.
    ///
    /// `residue` receives the decrypted plaintext when `Standard` gets that
    /// far, so the repair step can work on it.
    pub(crate) fn run_strategy(
        &self,
        strategy: DecodeStrategy,
        raw: &[u8],
        residue: &mut Option<Vec<u8>>,
    ) -> Result<Accepted, StrategyError> {
        let attempt = Attempt { codec: self, strategy };
        match strategy {
            DecodeStrategy::Standard => attempt.standard(raw, residue),
            DecodeStrategy::RawText => attempt.raw_text(raw),
            DecodeStrategy::FramedBase64Only => attempt.framed_base64(raw),
        }
    }
}

impl Attempt<'_> {
    fn standard(&self, raw: &[u8], residue: &mut Option<Vec<u8>>) -> Result<Accepted, StrategyError> {
        let framing = self.unframe(raw)?;
        let ciphertext = self.text_decode(framing.payload())?;
        let padded = self.decrypt(&ciphertext)?;
        let plain = self.unpad(&padded);
        *residue = Some(plain.clone());
        let text = self.utf8(plain)?;
        self.parse(text, false)
    }

    fn raw_text(&self, raw: &[u8]) -> Result<Accepted, StrategyError> {
        let text = self.utf8(raw.to_vec())?;
        self.parse(text, true)
    }

    fn framed_base64(&self, raw: &[u8]) -> Result<Accepted, StrategyError> {
        let framing = self.unframe(raw)?;
        let plain = self.text_decode(framing.payload())?;
        let text = self.utf8(plain)?;
        self.parse(text, true)
    }

    fn reject(&self, stage: Stage, reason: impl fmt::Display) -> StrategyError {
        StrategyError::Rejected(StrategyFailure {
            strategy: Some(self.strategy),
            stage,
            reason: reason.to_string(),
        })
    }

    fn unframe(&self, raw: &[u8]) -> Result<Framing, StrategyError> {
        let scope = self.codec.scope(Stage::Unframe, Some(self.strategy), raw.len());
        match strip_header(raw, &self.codec.config().preamble) {
            Ok(framing) => {
                scope.ok(framing.payload());
                Ok(framing)
            }
            Err(e) => {
                scope.fail(&e);
                Err(StrategyError::Fatal(e.into()))
            }
        }
    }

    fn text_decode(&self, text: &[u8]) -> Result<Vec<u8>, StrategyError> {
        let scope = self.codec.scope(Stage::TextDecode, Some(self.strategy), text.len());
        match decode_text(text) {
            Ok(bytes) => {
                scope.ok(&bytes);
                Ok(bytes)
            }
            Err(e) => {
                scope.fail(&e);
                Err(self.reject(Stage::TextDecode, e))
            }
        }
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, StrategyError> {
        let scope = self.codec.scope(Stage::Decrypt, Some(self.strategy), ciphertext.len());
        match self.codec.cipher().decrypt(ciphertext) {
            Ok(padded) => {
                scope.ok(&padded);
                Ok(padded)
            }
            Err(e) => {
                scope.fail(&e);
                Err(self.reject(Stage::Decrypt, e))
            }
        }
    }

    // Lenient: absent or invalid padding leaves the plaintext as is.
    fn unpad(&self, padded: &[u8]) -> Vec<u8> {
        let scope = self.codec.scope(Stage::Unpad, Some(self.strategy), padded.len());
        let plain = padding::strip(padded);
        scope.ok(&plain);
        plain
    }

    fn utf8(&self, bytes: Vec<u8>) -> Result<String, StrategyError> {
        let scope = self.codec.scope(Stage::Utf8, Some(self.strategy), bytes.len());
        match String::from_utf8(bytes) {
            Ok(text) => {
                scope.ok(text.as_bytes());
                Ok(text)
            }
            Err(e) => {
                let e = e.utf8_error();
                scope.fail(&e);
                Err(self.reject(Stage::Utf8, e))
            }
        }
    }

    fn parse(&self, text: String, require_delimiters: bool) -> Result<Accepted, StrategyError> {
        let scope = self.codec.scope(Stage::Parse, Some(self.strategy), text.len());
        if require_delimiters && !has_delimiters(&text) {
            let reason = "missing structural delimiters";
            scope.fail(&reason);
            return Err(self.reject(Stage::Parse, reason));
        }

        match parse_document(&text) {
            Ok(document) => {
                scope.ok(text.as_bytes());
                Ok(Accepted { text, document })
            }
            Err(e) => {
                scope.fail(&e);
                Err(self.reject(Stage::Parse, e))
            }
        }
    }
}
