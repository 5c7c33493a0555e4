//! pipeline/mod.rs
//! Decode and encode compositions over the format layers.
//!
//! Decode: unframe → base64 decode → AES-ECB decrypt → unpad → UTF-8 → parse,
//! with an ordered list of fallback strategies and a final repair step.
//!
//! Encode: serialize → pad → encrypt → base64 encode → frame. No fallback.

pub mod config;
pub mod strategy;
pub mod codec;
pub mod decode;
pub mod encode;
pub mod repair;

pub use config::{CodecConfig, ConfigError};
pub use strategy::DecodeStrategy;
pub use codec::SaveCodec;
pub use decode::{DecodeRoute, DecodedSave};
pub use repair::RepairSource;
