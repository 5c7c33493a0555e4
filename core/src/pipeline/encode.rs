//! pipeline/encode.rs
//! Mirror of the decode path: serialize → pad → encrypt → base64 → frame.
//!
//! There is no fallback. The first failing stage aborts the call and its
//! error is returned as is.

use serde::Serialize;
use tracing::debug;

use crate::container::ContainerKind;
use crate::crypto::padding;
use crate::document::{parse_document, Document};
use crate::headers::add_header;
use crate::pipeline::codec::SaveCodec;
use crate::telemetry::Stage;
use crate::transcoder::encode_text;
use crate::types::CodecError;

impl SaveCodec {
    /// Serialize `doc` compactly and seal it into a binary container.
    pub fn encode<T: Serialize + ?Sized>(&self, doc: &T) -> Result<Vec<u8>, CodecError> {
        let scope = self.scope(Stage::Serialize, None, 0);
        let text = match serde_json::to_vec(doc) {
            Ok(text) => {
                scope.ok(&text);
                text
            }
            Err(e) => {
                scope.fail(&e);
                return Err(CodecError::Serialization(e));
            }
        };
        self.seal(&text)
    }

    /// Validate JSON text, then encode its compact form.
    pub fn encode_str(&self, text: &str) -> Result<Vec<u8>, CodecError> {
        let doc = parse_document(text).map_err(CodecError::InvalidDocument)?;
        self.encode(&doc)
    }

    /// Encode by container kind. `PlainText` is two-space pretty JSON.
    pub fn encode_container(&self, kind: ContainerKind, doc: &Document) -> Result<Vec<u8>, CodecError> {
        match kind {
            ContainerKind::Binary => self.encode(doc),
            ContainerKind::PlainText => {
                let scope = self.scope(Stage::Serialize, None, 0);
                match serde_json::to_vec_pretty(doc) {
                    Ok(text) => {
                        scope.ok(&text);
                        Ok(text)
                    }
                    Err(e) => {
                        scope.fail(&e);
                        Err(CodecError::Serialization(e))
                    }
                }
            }
        }
    }

    /// Pad, encrypt, base64 and frame already-serialized document bytes.
    pub fn seal(&self, plaintext: &[u8]) -> Result<Vec<u8>, CodecError> {
        let scope = self.scope(Stage::Pad, None, plaintext.len());
        let padded = padding::pad(plaintext);
        scope.ok(&padded);

        let scope = self.scope(Stage::Encrypt, None, padded.len());
        let ciphertext = match self.cipher().encrypt(&padded) {
            Ok(ct) => {
                scope.ok(&ct);
                ct
            }
            Err(e) => {
                scope.fail(&e);
                return Err(e.into());
            }
        };

        let scope = self.scope(Stage::TextEncode, None, ciphertext.len());
        let payload = encode_text(&ciphertext);
        scope.ok(&payload);

        let scope = self.scope(Stage::Frame, None, payload.len());
        let raw = match add_header(&self.config().preamble, &payload) {
            Ok(raw) => {
                scope.ok(&raw);
                raw
            }
            Err(e) => {
                scope.fail(&e);
                return Err(e.into());
            }
        };

        debug!(plaintext = plaintext.len(), container = raw.len(), "encoded");
        Ok(raw)
    }
}
