//! # Shared Utility Functions
//!
//! Display helpers used when rendering student records.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::truncate_text;
//!
//! assert_eq!(truncate_text("42 Wallaby Way, Sydney", 10), "42 Wallab…");
//! ```

/// Shorten `text` to at most `max_chars` characters, ending with an ellipsis.
///
/// Counts `char`s rather than bytes, so multi-byte names never split.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_text;
///
/// assert_eq!(truncate_text("short", 10), "short");
/// assert_eq!(truncate_text("abcdef", 4), "abc…");
/// ```
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if max_chars == 0 {
        return String::new();
    }
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars - 1).collect();
    out.push('…');
    out
}

/// Render an optional cell value, using a dash for missing data.
pub fn or_dash(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => "-",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("john@example.com", 8), "john@ex…");
        assert_eq!(truncate_text("abc", 3), "abc");
        assert_eq!(truncate_text("abc", 0), "");
    }

    #[test]
    fn test_truncate_text_multibyte() {
        assert_eq!(truncate_text("Zoë Ångström", 4), "Zoë…");
    }

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(None), "-");
        assert_eq!(or_dash(Some("  ")), "-");
        assert_eq!(or_dash(Some("x")), "x");
    }
}
