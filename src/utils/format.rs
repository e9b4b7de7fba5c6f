//! Formatting helpers for sizes and manifests

const SIZE_UNITS: [&str; 9] = ["Bytes", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Human readable byte size with binary (1024) steps.
///
/// At most `decimals` fraction digits are kept and trailing zeros are
/// dropped, so 1536 bytes read "1.5 KB" and 1024 bytes read "1 KB".
pub fn format_bytes_with(bytes: u64, decimals: usize) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut value = bytes as f64;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let mut number = format!("{value:.decimals$}");
    if number.contains('.') {
        number.truncate(number.trim_end_matches('0').trim_end_matches('.').len());
    }
    format!("{number} {}", SIZE_UNITS[unit])
}

/// [`format_bytes_with`] using two decimals
pub fn format_bytes(bytes: u64) -> String {
    format_bytes_with(bytes, 2)
}

/// Pretty print a manifest body with two-space indentation.
///
/// Bodies that are not JSON come back verbatim. Key order is preserved.
pub fn pretty_manifest(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| body.to_string()),
        Err(_) => body.to_string(),
    }
}
