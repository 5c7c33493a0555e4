//! pipeline/config.rs
//! Immutable codec configuration.

use thiserror::Error;

use crate::constants::{KEY_LENGTHS, PREAMBLE, SAVE_KEY};
use crate::pipeline::strategy::DecodeStrategy;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid key length: {actual} bytes (expected one of {KEY_LENGTHS:?})")]
    InvalidKeyLen { actual: usize },

    #[error("preamble must not be empty")]
    EmptyPreamble,

    #[error("at least one decode strategy is required")]
    NoStrategies,
}

/// Key, preamble and decode policy of a `SaveCodec`.
///
/// The default is the Hollow Knight format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// AES key bytes; 16, 24 or 32 bytes.
    pub key: Vec<u8>,
    pub preamble: Vec<u8>,
    /// Decode strategies in try order.
    pub strategies: Vec<DecodeStrategy>,
    /// Run the best-effort repair step when every strategy fails.
    pub repair: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            key: SAVE_KEY.to_vec(),
            preamble: PREAMBLE.to_vec(),
            strategies: DecodeStrategy::DEFAULT_ORDER.to_vec(),
            repair: true,
        }
    }
}

impl CodecConfig {
    pub fn with_key(mut self, key: impl Into<Vec<u8>>) -> Self {
        self.key = key.into();
        self
    }

    pub fn with_preamble(mut self, preamble: impl Into<Vec<u8>>) -> Self {
        self.preamble = preamble.into();
        self
    }

    pub fn with_strategies(mut self, strategies: impl Into<Vec<DecodeStrategy>>) -> Self {
        self.strategies = strategies.into();
        self
    }

    pub fn with_repair(mut self, repair: bool) -> Self {
        self.repair = repair;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !KEY_LENGTHS.contains(&self.key.len()) {
            return Err(ConfigError::InvalidKeyLen { actual: self.key.len() });
        }
        if self.preamble.is_empty() {
            return Err(ConfigError::EmptyPreamble);
        }
        if self.strategies.is_empty() {
            return Err(ConfigError::NoStrategies);
        }
        Ok(())
    }
}
