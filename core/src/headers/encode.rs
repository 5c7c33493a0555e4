//! headers/encode.rs
//!
//! Header encoding.
//!
//! Design notes:
//! - Output is `preamble || varint(len) || payload`, in that order.
//! - The length prefix is a u32, so payloads above 4 GiB are rejected.

use crate::headers::types::HeaderError;
use crate::headers::varint::{encode_varint_into, varint_len};

/// Frame `payload` behind `preamble` and its varint length.
///
/// # Returns
/// - `Ok(Vec<u8>)` the complete raw container.
/// - `Err(HeaderError::PayloadTooLarge)` if `payload.len()` exceeds `u32::MAX`.
pub fn add_header(preamble: &[u8], payload: &[u8]) -> Result<Vec<u8>, HeaderError> {
    let len = u32::try_from(payload.len())
        .map_err(|_| HeaderError::PayloadTooLarge { len: payload.len() })?;

    let mut out = Vec::with_capacity(preamble.len() + varint_len(len) + payload.len());
    out.extend_from_slice(preamble);
    encode_varint_into(len, &mut out);
    out.extend_from_slice(payload);

    debug_assert_eq!(out.len(), preamble.len() + varint_len(len) + payload.len());
    Ok(out)
}
