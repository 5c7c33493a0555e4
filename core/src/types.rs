use std::fmt;

use thiserror::Error;

use crate::crypto::CryptoError;
use crate::headers::{HeaderError, VarintError};
use crate::pipeline::config::ConfigError;
use crate::pipeline::strategy::DecodeStrategy;
use crate::telemetry::Stage;
use crate::transcoder::TranscodeError;

/// Unified codec error surfaced to callers.
/// - One variant per error kind of the container format.
/// - `From<T>` impls let every layer use `?`.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Length prefix never terminates or overflows 32 bits.
    #[error("malformed length: {0}")]
    MalformedLength(#[from] VarintError),

    /// Preamble matched but the declared payload runs past the buffer.
    #[error("truncated payload: declared {declared} bytes, {available} available")]
    TruncatedPayload { declared: u32, available: usize },

    /// Payload too long for a u32 length prefix.
    #[error("payload too large for length prefix: {len} bytes")]
    PayloadTooLarge { len: usize },

    #[error(transparent)]
    InvalidEncoding(#[from] TranscodeError),

    /// Cipher input not a positive multiple of the block size.
    #[error("block alignment error: {len} bytes is not a positive multiple of {block}")]
    BlockAlignment { len: usize, block: usize },

    /// Every decode strategy and the repair step failed.
    #[error("decode failure: {}", FailureList(.attempts))]
    DecodeFailure { attempts: Vec<StrategyFailure> },

    /// Document cannot be converted to or from JSON.
    #[error("serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Text handed to a text-based entry point is not valid JSON.
    #[error("invalid document: {0}")]
    InvalidDocument(#[source] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl CodecError {
    /// Per-strategy failures, empty for other error kinds.
    pub fn attempts(&self) -> &[StrategyFailure] {
        match self {
            CodecError::DecodeFailure { attempts } => attempts,
            _ => &[],
        }
    }
}

impl From<HeaderError> for CodecError {
    fn from(e: HeaderError) -> Self {
        match e {
            HeaderError::TruncatedPayload { declared, available } =>
                CodecError::TruncatedPayload { declared, available },
            HeaderError::PayloadTooLarge { len } => CodecError::PayloadTooLarge { len },
        }
    }
}

impl From<CryptoError> for CodecError {
    fn from(e: CryptoError) -> Self {
        match e {
            CryptoError::BlockAlignment { len, block } => CodecError::BlockAlignment { len, block },
            CryptoError::InvalidKeyLen { actual } =>
                CodecError::Config(ConfigError::InvalidKeyLen { actual }),
        }
    }
}

/// Why one step of the decode chain gave up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyFailure {
    /// `None` for the repair step and plain-text containers.
    pub strategy: Option<DecodeStrategy>,
    pub stage: Stage,
    pub reason: String,
}

impl fmt::Display for StrategyFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.strategy {
            Some(s) => s.name(),
            None if self.stage == Stage::Repair => "repair",
            None => "plain-text",
        };
        write!(f, "{}@{}: {}", name, self.stage, self.reason)
    }
}

struct FailureList<'a>(&'a [StrategyFailure]);

impl fmt::Display for FailureList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("empty container");
        }
        for (i, failure) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", failure)?;
        }
        Ok(())
    }
}
