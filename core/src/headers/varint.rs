//! headers/varint.rs
//! 7-bit group variable-length integer (u32).
//!
//! - Low-order group first.
//! - High bit set on every byte except the last.
//! - At most 5 groups; the 5th may only carry the top 4 bits of a u32.

use crate::constants::MAX_VARINT_GROUPS;
use crate::headers::types::VarintError;

/// Encode `value` into a fresh buffer (1..=5 bytes).
pub fn encode_varint(value: u32) -> Vec<u8> {
    let mut out = Vec::with_capacity(varint_len(value));
    encode_varint_into(value, &mut out);
    out
}

/// Append the encoding of `value` to `out`.
#[inline]
pub fn encode_varint_into(mut value: u32, out: &mut Vec<u8>) {
    while value >= 0x80 {
        out.push((value as u8 & 0x7F) | 0x80);
        value >>= 7;
    }
    out.push(value as u8);
}

/// Number of bytes `encode_varint(value)` produces.
#[inline]
pub const fn varint_len(value: u32) -> usize {
    match value {
        0..=0x7F => 1,
        0x80..=0x3FFF => 2,
        0x4000..=0x1F_FFFF => 3,
        0x20_0000..=0xFFF_FFFF => 4,
        _ => 5,
    }
}

/// Decode a varint starting at `offset`.
///
/// # Returns
/// - `Ok((value, bytes_consumed))`
/// - `Err(VarintError::Unterminated)` if the buffer ends first.
/// - `Err(VarintError::Overflow)` past 5 groups or past 32 bits.
pub fn decode_varint(buf: &[u8], offset: usize) -> Result<(u32, usize), VarintError> {
    let mut value: u32 = 0;
    let mut groups = 0usize;

    loop {
        if groups == MAX_VARINT_GROUPS {
            return Err(VarintError::Overflow { groups: groups + 1 });
        }

        let pos = offset + groups;
        let Some(&byte) = buf.get(pos) else {
            return Err(VarintError::Unterminated { offset: pos });
        };

        let bits = u32::from(byte & 0x7F);
        // 5th group sits at shift 28: only 4 bits fit.
        if groups == MAX_VARINT_GROUPS - 1 && bits > 0x0F {
            return Err(VarintError::Overflow { groups: groups + 1 });
        }

        value |= bits << (7 * groups);
        groups += 1;

        if byte & 0x80 == 0 {
            return Ok((value, groups));
        }
    }
}
