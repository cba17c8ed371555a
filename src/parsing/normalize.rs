//! Line normalization applied before classification.

use std::borrow::Cow;

/// U+202F, emitted by some exporters between the time and the AM/PM marker.
pub const NARROW_NO_BREAK_SPACE: char = '\u{202F}';

/// Replaces every narrow no-break space in `line` with an ordinary space.
///
/// No other transformation is applied. Lines without the character are
/// returned borrowed.
///
/// # Example
///
/// ```rust
/// use chatsplit::parsing::normalize_line;
///
/// assert_eq!(normalize_line("9:00\u{202F}AM - Alice: Hi"), "9:00 AM - Alice: Hi");
/// assert_eq!(normalize_line("plain"), "plain");
/// ```
pub fn normalize_line(line: &str) -> Cow<'_, str> {
    if line.contains(NARROW_NO_BREAK_SPACE) {
        Cow::Owned(line.replace(NARROW_NO_BREAK_SPACE, " "))
    } else {
        Cow::Borrowed(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_every_occurrence() {
        let line = "1/1/24,\u{202F}9:00\u{202F}AM - Alice:\u{202F}Hi";
        assert_eq!(normalize_line(line), "1/1/24, 9:00 AM - Alice: Hi");
    }

    #[test]
    fn test_leaves_other_whitespace_alone() {
        let line = "a\u{00A0}b\tc  d ";
        assert_eq!(normalize_line(line), line);
    }

    #[test]
    fn test_borrowed_when_unchanged() {
        assert!(matches!(normalize_line("nothing to do"), Cow::Borrowed(_)));
        assert!(matches!(normalize_line("x\u{202F}y"), Cow::Owned(_)));
    }

    #[test]
    fn test_idempotent() {
        let once = normalize_line("9:00\u{202F}PM").into_owned();
        assert_eq!(normalize_line(&once), once);
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(normalize_line(""), "");
    }
}
