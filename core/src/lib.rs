//! hksave-core
//!
//! Codec for the Hollow Knight save container.
//! Pure Rust, in-memory only. No filesystem, no global state.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

// Format layers
pub mod headers;
pub mod transcoder;
pub mod crypto;

// Documents and containers
pub mod document;
pub mod container;

pub mod telemetry;

// Decode / encode compositions
pub mod pipeline;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::container::ContainerKind;
    pub use crate::document::{format_document, validate_document, Document};
    pub use crate::headers::ContainerInfo;
    pub use crate::pipeline::{
        CodecConfig, ConfigError, DecodeRoute, DecodeStrategy, DecodedSave, RepairSource, SaveCodec,
    };
    pub use crate::telemetry::{CodecObserver, NoopObserver, TelemetryRecorder, TracingObserver};
    pub use crate::types::{CodecError, StrategyFailure};
    pub use crate::utils::format_size;
}
