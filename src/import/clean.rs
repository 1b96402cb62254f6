// src/import/clean.rs

/// Drop one `"` from the start and one from the end, each only if present.
/// Inner quotes and unbalanced quoting are left alone.
pub fn strip_outer_quotes(raw: &str) -> &str {
    let s = raw.strip_prefix('"').unwrap_or(raw);
    s.strip_suffix('"').unwrap_or(s)
}
