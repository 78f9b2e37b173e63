//! UI helper functions

/// Greedy word wrap by display width in chars.
///
/// Words longer than the width get their own line rather than being split.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in text.split_whitespace() {
        let word_width = word.chars().count();
        if current.is_empty() {
            current = word.to_string();
            current_width = word_width;
        } else if current_width + 1 + word_width <= max_width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
            current_width = word_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Truncate to `max_width` chars, appending "..." when cut.
/// Slices on char boundaries.
pub fn ellipsize(text: &str, max_width: usize) -> String {
    let count = text.chars().count();
    if count <= max_width {
        return text.to_string();
    }
    let take = max_width.saturating_sub(3);
    let truncated: String = text.chars().take(take).collect();
    format!("{}...", truncated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_empty() {
        assert_eq!(wrap_text("", 10), vec![""]);
    }

    #[test]
    fn test_wrap_text_zero_width() {
        assert_eq!(wrap_text("hello world", 0), vec!["hello world"]);
    }

    #[test]
    fn test_wrap_text_fits() {
        assert_eq!(wrap_text("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn test_wrap_text_multiple_lines() {
        assert_eq!(
            wrap_text("hello world foo bar", 10),
            vec!["hello", "world foo", "bar"]
        );
    }

    #[test]
    fn test_wrap_counts_chars_not_bytes() {
        assert_eq!(wrap_text("héllo wörld", 5), vec!["héllo", "wörld"]);
    }

    #[test]
    fn test_ellipsize_short_text_untouched() {
        assert_eq!(ellipsize("short", 10), "short");
    }

    #[test]
    fn test_ellipsize_truncates_with_dots() {
        assert_eq!(ellipsize("a very long title", 10), "a very ...");
        assert_eq!(ellipsize("a very long title", 10).chars().count(), 10);
    }
}
