//! constants.rs
//! Fixed wire constants of the Hollow Knight save container.
//!
//! These are public knowledge for the format. They are only the *defaults*
//! of [`crate::pipeline::CodecConfig`]; nothing reads them as process state.

/// .NET `BinaryFormatter` preamble that precedes the length-prefixed
/// base64 payload (22 bytes).
pub const PREAMBLE: [u8; PREAMBLE_LEN] = [
    0, 1, 0, 0, 0, 255, 255, 255, 255, 1, 0, 0, 0, 0, 0, 0, 0, 6, 1, 0, 0, 0,
];
pub const PREAMBLE_LEN: usize = 22;

/// Fixed AES key: the UTF-8 bytes of a 32-character ASCII string (AES-256).
pub const SAVE_KEY: [u8; 32] = *b"UKu52ePUBwetZ9wNX88o54dnfKRu0T1l";

/// Cipher block size in bytes.
pub const BLOCK_LEN: usize = 16;

/// Accepted AES key lengths (AES-128 / AES-192 / AES-256).
pub const KEY_LENGTHS: &[usize] = &[16, 24, 32];

/// A u32 needs at most 5 groups of 7 bits.
pub const MAX_VARINT_GROUPS: usize = 5;

/// Number of output bytes handed to observers as a stage "head".
pub const HEAD_PREVIEW_LEN: usize = 32;

/// Structural delimiters of the document format.
pub const DOC_OPEN: char = '{';
pub const DOC_CLOSE: char = '}';

/// UTF-8 byte-order mark.
pub const BOM: char = '\u{FEFF}';

/// File extensions per container kind.
pub mod extensions {
    pub const BINARY: &[&str] = &["dat", "bak1"];
    pub const PLAIN_TEXT: &[&str] = &["json"];
}
