//! headers/decode.rs
//!
//! Header detection and stripping.
//!
//! Design notes:
//! - Preamble mismatch and unterminated length are *signals* (`Framing::Unframed`).
//! - Only a declared length past the end of the buffer is an error.
//! - The returned payload is an owned copy; nothing borrows from `raw`.

use crate::headers::types::{ContainerInfo, Framing, HeaderError};
use crate::headers::varint::decode_varint;

/// Strip `preamble` and the length prefix from `raw`.
///
/// # Returns
/// - `Ok(Framing::Framed)` with exactly the declared number of bytes.
/// - `Ok(Framing::Unframed)` when no frame is detected.
/// - `Err(HeaderError::TruncatedPayload)` when the declared length overruns `raw`.
pub fn strip_header(raw: &[u8], preamble: &[u8]) -> Result<Framing, HeaderError> {
    if !has_preamble(raw, preamble) {
        return Ok(Framing::Unframed(raw.to_vec()));
    }

    let (declared, prefix_len) = match decode_varint(raw, preamble.len()) {
        Ok(v) => v,
        Err(_) => return Ok(Framing::Unframed(raw.to_vec())),
    };

    let start = preamble.len() + prefix_len;
    let available = raw.len() - start;
    let end = start + declared as usize;
    if declared as usize > available {
        return Err(HeaderError::TruncatedPayload { declared, available });
    }

    Ok(Framing::Framed {
        payload: raw[start..end].to_vec(),
        prefix_len,
    })
}

/// Exact match of the first `preamble.len()` bytes.
#[inline]
pub fn has_preamble(raw: &[u8], preamble: &[u8]) -> bool {
    !preamble.is_empty() && raw.len() >= preamble.len() && raw[..preamble.len()] == *preamble
}

/// Describe the framing of `raw` without failing.
pub fn inspect_container(raw: &[u8], preamble: &[u8]) -> ContainerInfo {
    let preamble_found = has_preamble(raw, preamble);
    let mut info = ContainerInfo {
        total_len: raw.len(),
        preamble_found,
        declared_len: None,
        prefix_len: None,
        payload_available: raw.len(),
    };

    if preamble_found {
        if let Ok((declared, prefix_len)) = decode_varint(raw, preamble.len()) {
            info.declared_len = Some(declared);
            info.prefix_len = Some(prefix_len);
            info.payload_available = raw.len() - preamble.len() - prefix_len;
        }
    }

    info
}
