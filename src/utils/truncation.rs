const MAX_LOG_DETAIL_LENGTH: usize = 2_000;

/// Clip diagnostic text (upstream error bodies, model output) before it goes
/// to the log. Cuts on a char boundary.
pub fn truncate_for_log(text: &str) -> String {
    truncate_chars(text, MAX_LOG_DETAIL_LENGTH)
}

pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}... [truncated {} chars]", &text[..cut], text[cut..].chars().count()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_unchanged() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 5), "hello");
    }

    #[test]
    fn test_long_text_clipped() {
        assert_eq!(truncate_chars("abcdefgh", 3), "abc... [truncated 5 chars]");
    }

    #[test]
    fn test_multibyte_boundary() {
        assert_eq!(truncate_chars("ééé", 2), "éé... [truncated 1 chars]");
    }
}
