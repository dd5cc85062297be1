use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate to `max_width` display columns, appending "…" if truncated 🛡️
pub fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        used += w;
        out.push(ch);
    }
    out + "…"
}

/// Right-pad with spaces to `width` display columns.
pub fn pad(s: &str, width: usize) -> String {
    let w = s.width();
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hey Jude", 20), "Hey Jude");
        assert_eq!(truncate("Ten Years Gone", 6), "Ten Y…");
        assert_eq!(truncate("abc", 0), "");
        // Wide glyphs count double
        assert_eq!(truncate("📁📁📁", 5), "📁📁…");
    }

    #[test]
    fn test_pad() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("abcdef", 4), "abcdef");
    }
}
