//! container.rs
//! Container kinds by file association.
//!
//! - `.dat` / `.bak1`: binary container (preamble, base64, AES).
//! - `.json`: plain-text document, no framing, no encryption.

use std::fmt;
use std::path::Path;

use crate::constants::extensions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    Binary,
    PlainText,
}

impl ContainerKind {
    /// Kind from a file path's extension, `None` for unsupported types.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?;
        Self::from_extension(ext)
    }

    /// Case-insensitive, with or without the leading dot.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.trim_start_matches('.').to_ascii_lowercase();
        if extensions::BINARY.contains(&ext.as_str()) {
            Some(ContainerKind::Binary)
        } else if extensions::PLAIN_TEXT.contains(&ext.as_str()) {
            Some(ContainerKind::PlainText)
        } else {
            None
        }
    }

    /// Canonical extension for writing this kind.
    pub fn extension(self) -> &'static str {
        match self {
            ContainerKind::Binary => extensions::BINARY[0],
            ContainerKind::PlainText => extensions::PLAIN_TEXT[0],
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerKind::Binary => f.write_str("binary"),
            ContainerKind::PlainText => f.write_str("plain-text"),
        }
    }
}
