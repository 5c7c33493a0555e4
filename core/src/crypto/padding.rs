//! crypto/padding.rs
//! PKCS#7-style padding as the save format actually writes it.
//!
//! Two deviations from strict PKCS#7:
//! - `pad` is a no-op on block-aligned input (no extra full block).
//! - `strip` never fails: invalid or absent padding returns the input as is.
//!
//! Consequence: an unpadded plaintext ending in `n` copies of byte `n`
//! (1..=16) is indistinguishable from a padded one and gets stripped.
//! Legacy containers depend on this behavior; it is kept as is.

use crate::crypto::types::BLOCK_LEN;

/// Pad `data` up to the next block boundary.
pub fn pad(data: &[u8]) -> Vec<u8> {
    let rem = data.len() % BLOCK_LEN;
    if rem == 0 {
        return data.to_vec();
    }

    let pad_len = BLOCK_LEN - rem;
    let mut out = Vec::with_capacity(data.len() + pad_len);
    out.extend_from_slice(data);
    out.resize(data.len() + pad_len, pad_len as u8);
    out
}

/// Remove trailing padding if it is well formed, otherwise return `data`.
pub fn strip(data: &[u8]) -> Vec<u8> {
    match padding_len(data) {
        Some(n) => data[..data.len() - n].to_vec(),
        None => data.to_vec(),
    }
}

/// Length of valid trailing padding, or `None` when padding is absent.
pub fn padding_len(data: &[u8]) -> Option<usize> {
    let &last = data.last()?;
    let n = last as usize;
    if n == 0 || n > BLOCK_LEN || n > data.len() {
        return None;
    }
    data[data.len() - n..].iter().all(|&b| b == last).then_some(n)
}
