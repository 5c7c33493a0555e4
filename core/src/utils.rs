use crate::constants::HEAD_PREVIEW_LEN;

/// Printable preview of a byte head: quoted text when it is all ASCII
/// graphic characters, hex otherwise.
pub fn head_preview(b: &[u8]) -> String {
    let b = &b[..b.len().min(HEAD_PREVIEW_LEN)];
    if !b.is_empty() && b.iter().all(|&c| c.is_ascii_graphic() || c == b' ') {
        format!("b\"{}\"", String::from_utf8_lossy(b))
    } else {
        format!("0x{}", hex::encode(b))
    }
}

/// Human-readable size using base-1024 units.
///
/// Two decimals at most, trailing zeros trimmed: `1536` → `"1.5 KB"`.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0usize;
    let mut value = bytes as f64;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[unit])
}
