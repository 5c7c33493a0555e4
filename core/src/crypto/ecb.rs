//! crypto/ecb.rs
//! AES-ECB over whole buffers.
//!
//! Design notes:
//! - Each 16-byte block is transformed independently, no IV.
//! - The key schedule is built once in `EcbCipher::new` and reused.
//! - Input must be a positive multiple of 16 bytes; anything else is a
//!   caller error (`BlockAlignment`), never silently padded here.
//! - Output is a fresh buffer; the input slice is not touched.

use std::fmt;

use aes::cipher::{generic_array::GenericArray, BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes128, Aes192, Aes256};

use crate::crypto::types::{AesVariant, CryptoError, BLOCK_LEN};

/// AES key schedule selected by key length.
#[derive(Clone)]
pub enum EcbCipher {
    Aes128(Aes128),
    Aes192(Aes192),
    Aes256(Aes256),
}

impl EcbCipher {
    /// Build the key schedule. Key length picks AES-128/192/256.
    pub fn new(key: &[u8]) -> Result<Self, CryptoError> {
        let invalid = |_| CryptoError::InvalidKeyLen { actual: key.len() };
        match AesVariant::from_key_len(key.len())? {
            AesVariant::Aes128 => Ok(Self::Aes128(Aes128::new_from_slice(key).map_err(invalid)?)),
            AesVariant::Aes192 => Ok(Self::Aes192(Aes192::new_from_slice(key).map_err(invalid)?)),
            AesVariant::Aes256 => Ok(Self::Aes256(Aes256::new_from_slice(key).map_err(invalid)?)),
        }
    }

    /// AES-256 schedule for a fixed 32-byte key.
    pub fn aes256(key: &[u8; 32]) -> Self {
        Self::Aes256(Aes256::new(&(*key).into()))
    }

    pub fn variant(&self) -> AesVariant {
        match self {
            EcbCipher::Aes128(_) => AesVariant::Aes128,
            EcbCipher::Aes192(_) => AesVariant::Aes192,
            EcbCipher::Aes256(_) => AesVariant::Aes256,
        }
    }

    /// Encrypt every block of `plaintext`.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        check_alignment(plaintext)?;
        let mut out = plaintext.to_vec();
        for chunk in out.chunks_exact_mut(BLOCK_LEN) {
            let block = GenericArray::from_mut_slice(chunk);
            match self {
                EcbCipher::Aes128(c) => c.encrypt_block(block),
                EcbCipher::Aes192(c) => c.encrypt_block(block),
                EcbCipher::Aes256(c) => c.encrypt_block(block),
            }
        }
        Ok(out)
    }

    /// Decrypt every block of `ciphertext`.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        check_alignment(ciphertext)?;
        let mut out = ciphertext.to_vec();
        for chunk in out.chunks_exact_mut(BLOCK_LEN) {
            let block = GenericArray::from_mut_slice(chunk);
            match self {
                EcbCipher::Aes128(c) => c.decrypt_block(block),
                EcbCipher::Aes192(c) => c.decrypt_block(block),
                EcbCipher::Aes256(c) => c.decrypt_block(block),
            }
        }
        Ok(out)
    }
}

// Key material stays out of logs.
impl fmt::Debug for EcbCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EcbCipher").field("variant", &self.variant()).finish_non_exhaustive()
    }
}

#[inline]
fn check_alignment(data: &[u8]) -> Result<(), CryptoError> {
    if data.is_empty() || data.len() % BLOCK_LEN != 0 {
        return Err(CryptoError::BlockAlignment { len: data.len(), block: BLOCK_LEN });
    }
    Ok(())
}
