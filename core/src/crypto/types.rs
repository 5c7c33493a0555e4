//! crypto/types.rs

use thiserror::Error;

pub use crate::constants::{BLOCK_LEN, KEY_LENGTHS};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// Cipher input is empty or not a multiple of the block size.
    #[error("block alignment error: {len} bytes is not a positive multiple of {block}")]
    BlockAlignment { len: usize, block: usize },

    /// Key does not select an AES variant.
    #[error("invalid key length: {actual} bytes (expected one of {KEY_LENGTHS:?})")]
    InvalidKeyLen { actual: usize },
}

/// AES variant selected by key length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AesVariant {
    Aes128,
    Aes192,
    Aes256,
}

impl AesVariant {
    pub fn from_key_len(len: usize) -> Result<Self, CryptoError> {
        match len {
            16 => Ok(AesVariant::Aes128),
            24 => Ok(AesVariant::Aes192),
            32 => Ok(AesVariant::Aes256),
            actual => Err(CryptoError::InvalidKeyLen { actual }),
        }
    }

    pub fn key_len(self) -> usize {
        match self {
            AesVariant::Aes128 => 16,
            AesVariant::Aes192 => 24,
            AesVariant::Aes256 => 32,
        }
    }
}
