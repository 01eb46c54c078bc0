//! String utilities for the domain layer.

/// Keep at most `max_chars` characters of `s`, appending `...` when anything
/// was cut off.
///
/// Counts characters, not bytes, so multi-byte text is never split inside a
/// code point. The ellipsis is added on top of `max_chars`.
pub fn truncate_with_ellipsis(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &s[..end]),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate_with_ellipsis("hello", 10), "hello");
        assert_eq!(truncate_with_ellipsis("hello", 5), "hello");
        assert_eq!(truncate_with_ellipsis("hello world", 5), "hello...");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate_with_ellipsis("日本語テスト", 6), "日本語テスト");
        assert_eq!(truncate_with_ellipsis("日本語テスト", 3), "日本語...");
    }

    #[test]
    fn test_truncate_report_widths() {
        let question = "What is the boiling point of water at sea level, in Kelvin?";
        let cut = truncate_with_ellipsis(question, 50);
        assert_eq!(cut.chars().count(), 53);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_truncate_empty() {
        assert_eq!(truncate_with_ellipsis("", 10), "");
        assert_eq!(truncate_with_ellipsis("abc", 0), "...");
    }
}
