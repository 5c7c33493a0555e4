//! telemetry/counters.rs
//! Deterministic counters folded from stage events.

use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

use crate::telemetry::observer::{StageEvent, StageOutcome};
use crate::telemetry::timers::Stage;

#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryCounters {
    pub stages_ok: u64,
    pub stages_failed: u64,
    /// Failed stages that belonged to a decode strategy (strategy rejected).
    pub strategies_rejected: u64,
    pub repairs: u64,
    /// Raw container bytes read (unframe input) or written (frame output).
    pub bytes_container: u64,
    /// Ciphertext bytes decrypted or produced.
    pub bytes_ciphertext: u64,
    /// Plaintext bytes recovered (unpad output) or consumed (pad input).
    pub bytes_plaintext: u64,
}

impl TelemetryCounters {
    /// Fold one stage event.
    pub fn record(&mut self, event: &StageEvent<'_>) {
        match event.outcome {
            StageOutcome::Ok => self.stages_ok += 1,
            StageOutcome::Failed(_) => {
                self.stages_failed += 1;
                if event.strategy.is_some() {
                    self.strategies_rejected += 1;
                }
                return;
            }
        }

        let (input, output) = (event.input_len as u64, event.output_len as u64);
        match event.stage {
            Stage::Unframe => self.bytes_container += input,
            Stage::Frame => self.bytes_container += output,
            Stage::Decrypt => self.bytes_ciphertext += input,
            Stage::Encrypt => self.bytes_ciphertext += output,
            Stage::Unpad => self.bytes_plaintext += output,
            Stage::Pad => self.bytes_plaintext += input,
            Stage::Repair => self.repairs += 1,
            _ => {}
        }
    }

    pub fn merge(&mut self, other: &TelemetryCounters) {
        self.stages_ok += other.stages_ok;
        self.stages_failed += other.stages_failed;
        self.strategies_rejected += other.strategies_rejected;
        self.repairs += other.repairs;
        self.bytes_container += other.bytes_container;
        self.bytes_ciphertext += other.bytes_ciphertext;
        self.bytes_plaintext += other.bytes_plaintext;
    }
}

impl AddAssign for TelemetryCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
