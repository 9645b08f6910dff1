// src/core/sanitize.rs

/// Collapse whitespace runs (including `&nbsp;` once decoded, U+00A0) into a
/// single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Parse an integer cell; empty, `-` or anything non-numeric is `None`.
pub fn parse_int<T: std::str::FromStr>(s: &str) -> Option<T> {
    let t = s.trim();
    if t.is_empty() || t == "-" { return None; }
    t.parse().ok()
}

/// Parse a decimal cell. Accepts a comma decimal separator and a `½` suffix
/// ("4½" → 4.5).
pub fn parse_decimal(s: &str) -> Option<f64> {
    let t = s.trim();
    if t.is_empty() { return None; }
    if let Some(whole) = t.strip_suffix('½') {
        let base: f64 = if whole.is_empty() { 0.0 } else { whole.parse().ok()? };
        return Some(base + 0.5);
    }
    t.replace(',', ".").parse().ok()
}
