//! Log sanitization for user-supplied strings (guesses, raw letters).
//! Keeps every log record on a single line regardless of what a player types.

/// Escape a string for single-line logging: newlines, carriage returns and
/// tabs become their two-character escapes, backslashes are doubled, and any
/// other control character is rendered as `\xNN`. Input longer than the
/// preview cap is truncated with an ellipsis to keep log noise bounded.
pub fn escape_log(s: &str) -> String {
    const MAX_PREVIEW: usize = 200; // plenty for command text
    let mut out = String::with_capacity(s.len().min(MAX_PREVIEW) + 8);
    for (count, ch) in s.chars().enumerate() {
        if count >= MAX_PREVIEW {
            out.push('…');
            break;
        }
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                use std::fmt::Write;
                let _ = write!(&mut out, "\\x{:02X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::escape_log;

    #[test]
    fn escapes_control_characters() {
        assert_eq!(escape_log("rat\ntar\r\tart"), "rat\\ntar\\r\\tart");
    }

    #[test]
    fn truncates_long_input() {
        let long = "a".repeat(500);
        let escaped = escape_log(&long);
        assert!(escaped.ends_with('…'));
        assert!(escaped.chars().count() <= 201);
    }
}
