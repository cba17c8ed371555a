//! Field extraction from a single message chunk.
//!
//! A chunk either becomes a [`MessageRecord`] or is skipped with a
//! [`SkipReason`]. Both splits use first-occurrence semantics, so dashes and
//! colons inside the message body are passed through untouched.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::MessageRecord;
use crate::config::TranscriptConfig;

use super::segment::SEPARATOR;

/// Separator between the author and the message body.
pub const AUTHOR_SEPARATOR: char = ':';

/// Why a chunk did not produce a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkipReason {
    /// The chunk has no `" - "` token.
    MissingDatetimeSeparator,
    /// The chunk content is a known system notice.
    SystemNotice,
    /// The content after the datetime has no `":"`.
    MissingAuthorSeparator,
}

impl SkipReason {
    /// Returns the stable reason code, e.g. `MISSING_AUTHOR_SEPARATOR`.
    pub fn code(self) -> &'static str {
        match self {
            SkipReason::MissingDatetimeSeparator => "MISSING_DATETIME_SEPARATOR",
            SkipReason::SystemNotice => "SYSTEM_NOTICE",
            SkipReason::MissingAuthorSeparator => "MISSING_AUTHOR_SEPARATOR",
        }
    }

    /// Returns all reasons in check order.
    pub fn all() -> &'static [SkipReason] {
        &[
            SkipReason::MissingDatetimeSeparator,
            SkipReason::SystemNotice,
            SkipReason::MissingAuthorSeparator,
        ]
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Outcome of extracting fields from one chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// The chunk passed every rule.
    Record(MessageRecord),
    /// The chunk was rejected.
    Skip(SkipReason),
}

impl Extraction {
    /// Returns the record, if any.
    pub fn record(self) -> Option<MessageRecord> {
        match self {
            Extraction::Record(record) => Some(record),
            Extraction::Skip(_) => None,
        }
    }

    /// Returns the skip reason, if any.
    pub fn skip_reason(&self) -> Option<SkipReason> {
        match self {
            Extraction::Record(_) => None,
            Extraction::Skip(reason) => Some(*reason),
        }
    }

    /// Returns `true` if a record was produced.
    pub fn is_record(&self) -> bool {
        matches!(self, Extraction::Record(_))
    }
}

impl From<Extraction> for Result<MessageRecord, SkipReason> {
    fn from(extraction: Extraction) -> Self {
        match extraction {
            Extraction::Record(record) => Ok(record),
            Extraction::Skip(reason) => Err(reason),
        }
    }
}

/// Turns chunks into records.
///
/// # Example
///
/// ```rust
/// use chatsplit::parsing::{Extraction, FieldExtractor, SkipReason};
///
/// let extractor = FieldExtractor::new();
///
/// let Extraction::Record(record) = extractor.extract("1/1/24, 9:00 AM - Alice: Hi - there: you") else {
///     panic!("expected a record");
/// };
/// assert_eq!(record.author(), "Alice");
/// assert_eq!(record.message(), "Hi - there: you");
///
/// assert_eq!(
///     extractor.extract("random line with no dash"),
///     Extraction::Skip(SkipReason::MissingDatetimeSeparator),
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct FieldExtractor {
    config: TranscriptConfig,
}

impl FieldExtractor {
    /// Creates an extractor with default rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an extractor with custom rules.
    pub fn with_config(config: TranscriptConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &TranscriptConfig {
        &self.config
    }

    /// Extracts `datetime`, `author` and `message` from `chunk`.
    pub fn extract(&self, chunk: &str) -> Extraction {
        let Some((head, rest)) = chunk.split_once(SEPARATOR) else {
            return Extraction::Skip(SkipReason::MissingDatetimeSeparator);
        };

        let datetime = trim_field(head);
        let rest = trim_field(rest);

        // Checked before the author split: the notice has no colon either.
        if self.config.is_system_notice(rest) {
            return Extraction::Skip(SkipReason::SystemNotice);
        }

        let Some((author, body)) = rest.split_once(AUTHOR_SEPARATOR) else {
            return Extraction::Skip(SkipReason::MissingAuthorSeparator);
        };

        let body = trim_field(body);
        let message = if self.config.collapse_line_breaks {
            body.replace('\n', " ")
        } else {
            body.to_string()
        };

        Extraction::Record(MessageRecord::new(datetime, trim_field(author), message))
    }
}

/// Strips ASCII spaces and control characters from both ends.
///
/// Unicode spaces such as U+00A0 are part of the field.
fn trim_field(field: &str) -> &str {
    field.trim_matches(|c: char| c <= ' ')
}

/// Extracts a chunk with the default rules.
pub fn extract(chunk: &str) -> Extraction {
    FieldExtractor::new().extract(chunk)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ENCRYPTION_NOTICE;

    fn record(chunk: &str) -> MessageRecord {
        extract(chunk).record().expect("chunk should produce a record")
    }

    #[test]
    fn test_basic_record() {
        let r = record("1/1/24, 9:00 AM - Alice: Hi there");
        assert_eq!(r, MessageRecord::new("1/1/24, 9:00 AM", "Alice", "Hi there"));
    }

    #[test]
    fn test_fields_are_trimmed() {
        let r = record("  1/1/24, 9:00 AM  -   Alice  :   Hi there   ");
        assert_eq!(r.datetime(), "1/1/24, 9:00 AM");
        assert_eq!(r.author(), "Alice");
        assert_eq!(r.message(), "Hi there");
    }

    #[test]
    fn test_unicode_spaces_are_not_trimmed() {
        let r = record("d\u{00A0} - Alice\u{00A0}: hi\u{2003}");
        assert_eq!(r.datetime(), "d\u{00A0}");
        assert_eq!(r.author(), "Alice\u{00A0}");
        assert_eq!(r.message(), "hi\u{2003}");
    }

    #[test]
    fn test_control_characters_are_trimmed() {
        let r = record("d\t - \tAlice: hi\u{0}");
        assert_eq!(r.datetime(), "d");
        assert_eq!(r.author(), "Alice");
        assert_eq!(r.message(), "hi");
    }

    #[test]
    fn test_continuation_collapsed() {
        let r = record("1/1/24, 9:01 AM - Bob: Hello\nhow are you?");
        assert_eq!(r.message(), "Hello how are you?");
    }

    #[test]
    fn test_each_line_break_becomes_one_space() {
        let r = record("d - Bob: a\n\nb");
        assert_eq!(r.message(), "a  b");
    }

    #[test]
    fn test_trailing_continuation_whitespace_trimmed_before_collapse() {
        let r = record("d - Bob: hello\n");
        assert_eq!(r.message(), "hello");
    }

    #[test]
    fn test_first_occurrence_of_separator() {
        let r = record("d - Alice: see you at 5 - 6 pm");
        assert_eq!(r.datetime(), "d");
        assert_eq!(r.message(), "see you at 5 - 6 pm");
    }

    #[test]
    fn test_first_occurrence_of_colon() {
        let r = record("d - Alice: meeting at 10:30: room 4");
        assert_eq!(r.author(), "Alice");
        assert_eq!(r.message(), "meeting at 10:30: room 4");
    }

    #[test]
    fn test_empty_message_allowed() {
        let r = record("d - Alice:");
        assert_eq!(r.author(), "Alice");
        assert_eq!(r.message(), "");
    }

    #[test]
    fn test_empty_author_is_not_rejected() {
        let r = record("d - : body");
        assert_eq!(r.author(), "");
        assert_eq!(r.message(), "body");
    }

    #[test]
    fn test_missing_datetime_separator() {
        assert_eq!(
            extract("random line with no dash"),
            Extraction::Skip(SkipReason::MissingDatetimeSeparator)
        );
        assert_eq!(
            extract(""),
            Extraction::Skip(SkipReason::MissingDatetimeSeparator)
        );
    }

    #[test]
    fn test_missing_author_separator() {
        assert_eq!(
            extract("1/1/24, 9:03 AM - not a real author line"),
            Extraction::Skip(SkipReason::MissingAuthorSeparator)
        );
    }

    #[test]
    fn test_colon_in_datetime_does_not_count_as_author_separator() {
        // The time's colon lives in the head, not in the rest.
        assert_eq!(
            extract("1/1/24, 9:03 AM - Alice added Bob").skip_reason(),
            Some(SkipReason::MissingAuthorSeparator)
        );
    }

    #[test]
    fn test_system_notice_skipped() {
        let chunk = format!("1/1/24, 9:02 AM - {ENCRYPTION_NOTICE}");
        assert_eq!(extract(&chunk), Extraction::Skip(SkipReason::SystemNotice));
    }

    #[test]
    fn test_system_notice_must_match_exactly() {
        let chunk = format!("d - {ENCRYPTION_NOTICE} Extra");
        assert_eq!(
            extract(&chunk).skip_reason(),
            Some(SkipReason::MissingAuthorSeparator)
        );
    }

    #[test]
    fn test_system_notice_disabled_falls_through_to_author_check() {
        let extractor =
            FieldExtractor::with_config(TranscriptConfig::new().with_skip_system_notices(false));
        let chunk = format!("d - {ENCRYPTION_NOTICE}");
        assert_eq!(
            extractor.extract(&chunk).skip_reason(),
            Some(SkipReason::MissingAuthorSeparator)
        );
    }

    #[test]
    fn test_keep_line_breaks_config() {
        let extractor =
            FieldExtractor::with_config(TranscriptConfig::new().with_collapse_line_breaks(false));
        let r = extractor.extract("d - Bob: a\nb").record().unwrap();
        assert_eq!(r.message(), "a\nb");
    }

    #[test]
    fn test_skip_reason_codes() {
        assert_eq!(
            SkipReason::MissingDatetimeSeparator.to_string(),
            "MISSING_DATETIME_SEPARATOR"
        );
        assert_eq!(SkipReason::SystemNotice.to_string(), "SYSTEM_NOTICE");
        assert_eq!(
            serde_json::to_string(&SkipReason::MissingAuthorSeparator).unwrap(),
            "\"MISSING_AUTHOR_SEPARATOR\""
        );
        assert_eq!(SkipReason::all().len(), 3);
    }

    #[test]
    fn test_extraction_into_result() {
        let ok: Result<MessageRecord, SkipReason> = extract("d - A: b").into();
        assert!(ok.is_ok());
        let err: Result<MessageRecord, SkipReason> = extract("nope").into();
        assert_eq!(err, Err(SkipReason::MissingDatetimeSeparator));
    }
}
