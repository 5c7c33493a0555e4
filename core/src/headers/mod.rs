//! headers/mod.rs
//! Container framing: fixed preamble + variable-length payload prefix.
//!
//! Wire layout:
//! - `preamble (22B) || varint(len(payload)) || payload`
//! - The varint is 7-bit groups, low-order group first, high bit = continuation
//!   (the .NET `BinaryWriter.Write7BitEncodedInt` layout).
//!
//! Detection semantics:
//! - A missing preamble or an unterminated length is "no frame detected",
//!   never an error. Callers fall back to treating the buffer as unframed.
//! - A declared length larger than the remaining bytes is `TruncatedPayload`.

pub mod types;
pub mod varint;
pub mod encode;
pub mod decode;

pub use types::*;
pub use varint::*;
pub use encode::*;
pub use decode::*;
