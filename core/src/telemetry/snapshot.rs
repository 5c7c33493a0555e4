//! telemetry/snapshot.rs
//! Immutable telemetry snapshot.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::telemetry::counters::TelemetryCounters;
use crate::telemetry::timers::{Stage, StageTimes, TelemetryTimer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub counters: TelemetryCounters,
    /// Ciphertext bytes over plaintext bytes (padding overhead), 0 if unknown.
    pub cipher_overhead_ratio: f64,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
}

impl TelemetrySnapshot {
    pub fn from(counters: &TelemetryCounters, timer: &TelemetryTimer) -> Self {
        let cipher_overhead_ratio = if counters.bytes_plaintext > 0 {
            counters.bytes_ciphertext as f64 / counters.bytes_plaintext as f64
        } else {
            0.0
        };

        Self {
            counters: counters.clone(),
            cipher_overhead_ratio,
            elapsed: timer.elapsed(),
            stage_times: timer.stage_times.clone(),
        }
    }

    pub fn total_stage_time(&self) -> Duration {
        self.stage_times.total()
    }

    pub fn has_all_stages(&self, expected: &[Stage]) -> bool {
        self.stage_times.has_all(expected)
    }

    /// Stage time never exceeds wall time.
    pub fn sanity_check(&self) -> bool {
        self.total_stage_time() <= self.elapsed
    }
}
