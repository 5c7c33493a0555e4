//! crypto/mod.rs
//! Fixed-key block cipher layer of the save container.
//!
//! - `ecb`: AES in electronic-codebook mode, no IV, no chaining.
//! - `padding`: the format's lenient PKCS#7 variant.

pub mod types;
pub mod ecb;
pub mod padding;

pub use types::*;
pub use ecb::*;
pub use padding::*;
