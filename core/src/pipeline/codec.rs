//! pipeline/codec.rs
//! `SaveCodec`: configuration, key schedule and observer in one handle.
//!
//! - Built once; holds no mutable state; `Send + Sync`.
//! - Cloning is cheap enough to hand one to each worker, sharing is fine too.

use std::fmt;
use std::sync::Arc;

use crate::constants::SAVE_KEY;
use crate::crypto::EcbCipher;
use crate::headers::{inspect_container, ContainerInfo};
use crate::pipeline::config::CodecConfig;
use crate::pipeline::strategy::DecodeStrategy;
use crate::telemetry::observer::StageScope;
use crate::telemetry::{CodecObserver, NoopObserver, Stage};
use crate::types::CodecError;

#[derive(Clone)]
pub struct SaveCodec {
    config: CodecConfig,
    cipher: EcbCipher,
    observer: Arc<dyn CodecObserver>,
}

impl SaveCodec {
    /// Validate `config` and build the key schedule.
    pub fn new(config: CodecConfig) -> Result<Self, CodecError> {
        config.validate()?;
        let cipher = EcbCipher::new(&config.key)?;
        Ok(Self {
            config,
            cipher,
            observer: Arc::new(NoopObserver),
        })
    }

    /// Attach a stage observer (replaces the current one).
    pub fn with_observer(mut self, observer: Arc<dyn CodecObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub(crate) fn cipher(&self) -> &EcbCipher {
        &self.cipher
    }

    /// Describe the framing of `raw` without decoding it.
    pub fn inspect(&self, raw: &[u8]) -> ContainerInfo {
        inspect_container(raw, &self.config.preamble)
    }

    pub(crate) fn scope(
        &self,
        stage: Stage,
        strategy: Option<DecodeStrategy>,
        input_len: usize,
    ) -> StageScope<'_> {
        StageScope::open(self.observer.as_ref(), stage, strategy, input_len)
    }
}

impl Default for SaveCodec {
    /// The Hollow Knight format with no observer.
    fn default() -> Self {
        Self {
            config: CodecConfig::default(),
            cipher: EcbCipher::aes256(&SAVE_KEY),
            observer: Arc::new(NoopObserver),
        }
    }
}

impl fmt::Debug for SaveCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SaveCodec")
            .field("cipher", &self.cipher)
            .field("preamble_len", &self.config.preamble.len())
            .field("strategies", &self.config.strategies)
            .field("repair", &self.config.repair)
            .finish_non_exhaustive()
    }
}
