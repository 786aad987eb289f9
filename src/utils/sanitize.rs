use regex::Regex;
use std::sync::LazyLock;

// ASCII letters and digits only; `\s` still matches Unicode whitespace.
static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\s]").expect("sanitize pattern is valid"));

/// Removes every character that is not an ASCII letter, ASCII digit or
/// whitespace, then trims the ends.
///
/// Internal whitespace is kept exactly as given, so `"a  b"` stays
/// `"a  b"`. Accented and other non-ASCII letters are removed. The result
/// may be empty, and sanitizing an already sanitized string is a no-op.
pub fn sanitize_string(value: &str) -> String {
    DISALLOWED.replace_all(value, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_special_characters() {
        assert_eq!(sanitize_string("Hello!@#World"), "HelloWorld");
        assert_eq!(sanitize_string("Claude!@#$%"), "Claude");
    }

    #[test]
    fn test_preserves_alphanumeric_and_spaces() {
        assert_eq!(sanitize_string("Test123"), "Test123");
        assert_eq!(sanitize_string("Hello World"), "Hello World");
        assert_eq!(sanitize_string("a  b\tc"), "a  b\tc");
    }

    #[test]
    fn test_trims_after_stripping() {
        // the leading "!" goes first, then the exposed space is trimmed
        assert_eq!(sanitize_string("! Bob ?"), "Bob");
        assert_eq!(sanitize_string("\n  x  \n"), "x");
    }

    #[test]
    fn test_only_punctuation_yields_empty() {
        assert_eq!(sanitize_string("!@#$%^&*()"), "");
        assert_eq!(sanitize_string(""), "");
    }

    #[test]
    fn test_non_ascii_letters_are_removed() {
        assert_eq!(sanitize_string("José"), "Jos");
        assert_eq!(sanitize_string("日本"), "");
    }
}
