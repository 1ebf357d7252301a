use unicode_width::UnicodeWidthChar;

/// Truncate a string to at most `max_width` display columns, appending "..."
/// when anything was cut. Width-aware so wide characters don't overflow the
/// review layout.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(1)).sum();
    if total <= max_width {
        return s.to_string();
    }

    let limit = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(1);
        if used + w > limit {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str("...");
    out
}
