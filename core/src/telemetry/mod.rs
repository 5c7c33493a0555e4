//! telemetry/mod.rs
//! Stage observability: the observer hook, counters, timers and snapshots.
//!
//! Notes:
//! - The codec reports every stage boundary to one `CodecObserver`.
//! - `NoopObserver` is the default, so the codec stays silent and pure.
//! - `TracingObserver` forwards events to `tracing`.
//! - `TelemetryRecorder` folds events into an immutable `TelemetrySnapshot`.

pub mod counters;
pub mod timers;
pub mod snapshot;
pub mod observer;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
pub use observer::*;
