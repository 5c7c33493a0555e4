//! headers/types.rs
//! Framing results and errors.

use thiserror::Error;

/// Outcome of [`crate::headers::strip_header`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Framing {
    /// Preamble and length prefix matched; holds exactly `declared` bytes.
    Framed {
        payload: Vec<u8>,
        /// Bytes consumed by the length prefix.
        prefix_len: usize,
    },
    /// No frame detected; holds a copy of the whole input.
    Unframed(Vec<u8>),
}

impl Framing {
    pub fn is_framed(&self) -> bool {
        matches!(self, Framing::Framed { .. })
    }

    /// Payload bytes regardless of whether a frame was found.
    pub fn into_payload(self) -> Vec<u8> {
        match self {
            Framing::Framed { payload, .. } => payload,
            Framing::Unframed(raw) => raw,
        }
    }

    pub fn payload(&self) -> &[u8] {
        match self {
            Framing::Framed { payload, .. } => payload,
            Framing::Unframed(raw) => raw,
        }
    }
}

/// Non-failing probe of the framing layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerInfo {
    pub total_len: usize,
    pub preamble_found: bool,
    /// Decoded length prefix, when the preamble matched and the prefix terminated.
    pub declared_len: Option<u32>,
    pub prefix_len: Option<usize>,
    /// Bytes actually present after the prefix (or the whole buffer if unframed).
    pub payload_available: usize,
}

impl ContainerInfo {
    /// True when a declared length exceeds what the buffer holds.
    pub fn is_truncated(&self) -> bool {
        matches!(self.declared_len, Some(d) if d as usize > self.payload_available)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VarintError {
    /// Buffer ended before a byte with the high bit clear.
    #[error("malformed length prefix: unterminated at offset {offset}")]
    Unterminated { offset: usize },

    /// More groups than a u32 can hold, or the last group overflows 32 bits.
    #[error("malformed length prefix: overflow after {groups} groups")]
    Overflow { groups: usize },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HeaderError {
    /// Preamble matched but the declared payload runs past the buffer.
    #[error("truncated payload: declared {declared} bytes, {available} available")]
    TruncatedPayload { declared: u32, available: usize },

    /// Payload is longer than a u32 length prefix can express.
    #[error("payload too large for length prefix: {len} bytes")]
    PayloadTooLarge { len: usize },
}
