//! transcoder.rs
//! Base64 text transport for the ciphertext.
//!
//! Standard RFC 4648 alphabet, `=` padding always emitted and required on
//! decode (canonical). Any byte outside the alphabet is `InvalidEncoding`.

use base64::{engine::general_purpose::STANDARD, Engine};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TranscodeError {
    #[error("invalid base64 encoding: {0}")]
    InvalidEncoding(#[from] base64::DecodeError),
}

/// Encode bytes into base64 text bytes (ASCII).
pub fn encode_text(data: &[u8]) -> Vec<u8> {
    let out = STANDARD.encode(data).into_bytes();
    debug_assert_eq!(out.len(), encoded_len(data.len()));
    out
}

/// Strict base64 decode.
pub fn decode_text(text: &[u8]) -> Result<Vec<u8>, TranscodeError> {
    Ok(STANDARD.decode(text)?)
}

/// Length of `encode_text` output for `len` input bytes.
#[inline]
pub const fn encoded_len(len: usize) -> usize {
    len.div_ceil(3) * 4
}
