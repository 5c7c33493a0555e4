//! telemetry/observer.rs
//! Injectable stage hook.
//!
//! The codec calls `CodecObserver::on_stage` once per stage boundary, on the
//! calling thread, after the stage finished. Observers must not assume
//! events from different calls arrive in any particular interleaving.

use std::fmt;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use crate::constants::HEAD_PREVIEW_LEN;
use crate::pipeline::strategy::DecodeStrategy;
use crate::telemetry::counters::TelemetryCounters;
use crate::telemetry::snapshot::TelemetrySnapshot;
use crate::telemetry::timers::{Stage, TelemetryTimer};
use crate::utils::head_preview;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageOutcome<'a> {
    Ok,
    Failed(&'a str),
}

/// One finished stage.
#[derive(Debug, Clone, Copy)]
pub struct StageEvent<'a> {
    pub stage: Stage,
    /// Decode strategy that ran the stage; `None` for encode and repair.
    pub strategy: Option<DecodeStrategy>,
    pub input_len: usize,
    pub output_len: usize,
    pub elapsed: Duration,
    pub outcome: StageOutcome<'a>,
    /// First bytes of the stage output (empty on failure).
    pub head: &'a [u8],
}

impl StageEvent<'_> {
    pub fn is_ok(&self) -> bool {
        matches!(self.outcome, StageOutcome::Ok)
    }
}

pub trait CodecObserver: Send + Sync {
    fn on_stage(&self, event: &StageEvent<'_>);
}

/// Default observer: ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl CodecObserver for NoopObserver {
    #[inline]
    fn on_stage(&self, _event: &StageEvent<'_>) {}
}

/// Forwards stage events to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl CodecObserver for TracingObserver {
    fn on_stage(&self, event: &StageEvent<'_>) {
        let strategy = event.strategy.map(|s| s.name()).unwrap_or("-");
        match event.outcome {
            StageOutcome::Ok => tracing::debug!(
                stage = %event.stage,
                strategy,
                input_len = event.input_len,
                output_len = event.output_len,
                elapsed_us = event.elapsed.as_micros() as u64,
                head = %head_preview(event.head),
                "stage complete"
            ),
            StageOutcome::Failed(reason) => tracing::trace!(
                stage = %event.stage,
                strategy,
                input_len = event.input_len,
                reason,
                "stage failed"
            ),
        }
    }
}

/// Accumulates counters and stage times across any number of codec calls.
#[derive(Debug, Default)]
pub struct TelemetryRecorder {
    state: Mutex<RecorderState>,
}

#[derive(Debug, Default)]
struct RecorderState {
    counters: TelemetryCounters,
    timer: TelemetryTimer,
}

impl TelemetryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Immutable view of everything recorded so far.
    pub fn snapshot(&self) -> TelemetrySnapshot {
        let state = self.lock();
        TelemetrySnapshot::from(&state.counters, &state.timer)
    }

    /// Clear counters and restart the clock.
    pub fn reset(&self) {
        *self.lock() = RecorderState::default();
    }

    // A panicking observer elsewhere must not disable telemetry.
    fn lock(&self) -> MutexGuard<'_, RecorderState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl CodecObserver for TelemetryRecorder {
    fn on_stage(&self, event: &StageEvent<'_>) {
        let mut state = self.lock();
        state.counters.record(event);
        state.timer.add_stage_time(event.stage, event.elapsed);
    }
}

/// Open stage measurement; closed with `ok` or `fail`.
pub(crate) struct StageScope<'o> {
    observer: &'o dyn CodecObserver,
    stage: Stage,
    strategy: Option<DecodeStrategy>,
    input_len: usize,
    started: Instant,
}

impl<'o> StageScope<'o> {
    pub(crate) fn open(
        observer: &'o dyn CodecObserver,
        stage: Stage,
        strategy: Option<DecodeStrategy>,
        input_len: usize,
    ) -> Self {
        Self { observer, stage, strategy, input_len, started: Instant::now() }
    }

    pub(crate) fn ok(self, output: &[u8]) {
        let head = &output[..output.len().min(HEAD_PREVIEW_LEN)];
        self.emit(output.len(), StageOutcome::Ok, head);
    }

    pub(crate) fn fail(self, reason: &dyn fmt::Display) {
        let reason = reason.to_string();
        self.emit(0, StageOutcome::Failed(&reason), &[]);
    }

    fn emit(self, output_len: usize, outcome: StageOutcome<'_>, head: &[u8]) {
        self.observer.on_stage(&StageEvent {
            stage: self.stage,
            strategy: self.strategy,
            input_len: self.input_len,
            output_len,
            elapsed: self.started.elapsed(),
            outcome,
            head,
        });
    }
}
