//! Transcript parser: read, normalize, segment, extract.
//!
//! # Example
//!
//! ```rust
//! use chatsplit::parser::TranscriptParser;
//!
//! let transcript = "\
//! 1/1/24, 9:00 AM - Alice: Hi there
//! 1/1/24, 9:01 AM - Bob: Hello
//! how are you?";
//!
//! let records = TranscriptParser::new().parse_str(transcript);
//!
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[1].message(), "Hello how are you?");
//! ```
//!
//! Use [`parse_str_with_report`](TranscriptParser::parse_str_with_report) to
//! see which chunks were skipped and why.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::MessageRecord;
use crate::config::TranscriptConfig;
use crate::core::processor::ParseStats;
use crate::core::sink::{AuthorIndex, RecordSink};
use crate::error::{ChatsplitError, Result};
use crate::parsing::{Extraction, FieldExtractor, Segmenter, SkipReason, normalize_line};

/// A chunk that did not produce a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedChunk {
    /// 1-based number of the chunk's first physical line.
    pub line: usize,
    /// Why the chunk was rejected.
    pub reason: SkipReason,
}

/// Everything a parse run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    sink: RecordSink,
    skipped: Vec<SkippedChunk>,
    chunk_count: usize,
}

impl ParseReport {
    /// Returns the accepted records in input order.
    pub fn records(&self) -> &[MessageRecord] {
        self.sink.records()
    }

    /// Returns the record sink.
    pub fn sink(&self) -> &RecordSink {
        &self.sink
    }

    /// Returns skipped chunks in input order.
    pub fn skipped(&self) -> &[SkippedChunk] {
        &self.skipped
    }

    /// Returns the number of chunks handed to the extractor.
    pub fn chunk_count(&self) -> usize {
        self.chunk_count
    }

    /// Returns how many chunks were skipped for `reason`.
    pub fn skip_count(&self, reason: SkipReason) -> usize {
        self.skipped.iter().filter(|s| s.reason == reason).count()
    }

    /// Returns the distinct authors of the accepted records.
    pub fn authors(&self) -> AuthorIndex {
        self.sink.authors()
    }

    /// Summarizes the run.
    pub fn stats(&self) -> ParseStats {
        let mut stats = ParseStats::new(self.chunk_count, self.sink.len());
        for skipped in &self.skipped {
            stats.record_skip(skipped.reason);
        }
        stats
    }

    /// Consumes the report and returns the record sink.
    pub fn into_sink(self) -> RecordSink {
        self.sink
    }

    /// Consumes the report and returns the records.
    pub fn into_records(self) -> Vec<MessageRecord> {
        self.sink.into_records()
    }
}

/// Parser for plain-text chat transcripts.
///
/// # Example
///
/// ```rust,no_run
/// use chatsplit::parser::TranscriptParser;
///
/// let parser = TranscriptParser::new();
/// let records = parser.parse("chat.txt")?;
/// # Ok::<(), chatsplit::ChatsplitError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    extractor: FieldExtractor,
}

impl TranscriptParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: TranscriptConfig) -> Self {
        Self {
            extractor: FieldExtractor::with_config(config),
        }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &TranscriptConfig {
        self.extractor.config()
    }

    /// Parses a transcript file and returns the accepted records.
    ///
    /// # Errors
    ///
    /// Returns [`ChatsplitError::Io`] if the file cannot be read and
    /// [`ChatsplitError::Utf8`] if it is not valid UTF-8.
    pub fn parse(&self, path: impl AsRef<Path>) -> Result<Vec<MessageRecord>> {
        Ok(self.parse_with_report(path)?.into_records())
    }

    /// Parses a transcript file and returns the full report.
    pub fn parse_with_report(&self, path: impl AsRef<Path>) -> Result<ParseReport> {
        let content = read_transcript(path.as_ref())?;
        Ok(self.parse_str_with_report(&content))
    }

    /// Parses transcript content from a string.
    pub fn parse_str(&self, content: &str) -> Vec<MessageRecord> {
        self.parse_str_with_report(content).into_records()
    }

    /// Parses transcript content from a string and returns the full report.
    ///
    /// Lines end at `\n`, `\r\n` or a bare `\r`.
    pub fn parse_str_with_report(&self, content: &str) -> ParseReport {
        self.parse_lines(physical_lines(content))
    }

    /// Runs the pipeline over raw lines.
    pub fn parse_lines<I, S>(&self, lines: I) -> ParseReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let normalized = lines
            .into_iter()
            .map(|line| normalize_line(line.as_ref()).into_owned());

        let mut report = ParseReport::default();

        for chunk in Segmenter::new(normalized) {
            report.chunk_count += 1;

            match self.extractor.extract(chunk.text()) {
                Extraction::Record(record) => report.sink.append(record),
                Extraction::Skip(reason) => {
                    debug!(line = chunk.first_line(), %reason, "skipping chunk");
                    report.skipped.push(SkippedChunk {
                        line: chunk.first_line(),
                        reason,
                    });
                }
            }
        }

        info!(
            chunks = report.chunk_count,
            records = report.sink.len(),
            skipped = report.skipped.len(),
            "parsed transcript"
        );

        report
    }
}

/// Iterator over the physical lines of a text.
///
/// Like [`str::lines`], but a lone `\r` also terminates a line. A final
/// terminator does not produce an empty trailing line.
#[derive(Debug, Clone)]
pub struct PhysicalLines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for PhysicalLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        let Some(end) = self.rest.find(['\r', '\n']) else {
            let line = self.rest;
            self.rest = "";
            return Some(line);
        };

        let line = &self.rest[..end];
        let terminator = if self.rest[end..].starts_with("\r\n") { 2 } else { 1 };
        self.rest = &self.rest[end + terminator..];
        Some(line)
    }
}

/// Splits `content` into physical lines.
pub fn physical_lines(content: &str) -> PhysicalLines<'_> {
    PhysicalLines { rest: content }
}

/// Reads a whole transcript file as UTF-8 text.
pub fn read_transcript(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| ChatsplitError::io_at(e, path))?;
    String::from_utf8(bytes).map_err(|e| ChatsplitError::utf8_in(e, path))
}

/// Parses a transcript file with default rules.
///
/// This is the one-call entry point: read, normalize, segment and extract.
///
/// ```rust,no_run
/// let records = chatsplit::parse_transcript("chat.txt")?;
/// for record in &records {
///     println!("[{}] {}: {}", record.datetime(), record.author(), record.message());
/// }
/// # Ok::<(), chatsplit::ChatsplitError>(())
/// ```
pub fn parse_transcript(path: impl AsRef<Path>) -> Result<Vec<MessageRecord>> {
    TranscriptParser::new().parse(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ENCRYPTION_NOTICE;

    #[test]
    fn test_report_counts() {
        let content = format!(
            "orphan\n1/1/24, 9:00 AM - {ENCRYPTION_NOTICE}\n1/1/24, 9:01 AM - Alice: Hi\n1/1/24, 9:02 AM - Bob joined"
        );
        let report = TranscriptParser::new().parse_str_with_report(&content);

        assert_eq!(report.chunk_count(), 4);
        assert_eq!(report.records().len(), 1);
        assert_eq!(report.skip_count(SkipReason::MissingDatetimeSeparator), 1);
        assert_eq!(report.skip_count(SkipReason::SystemNotice), 1);
        assert_eq!(report.skip_count(SkipReason::MissingAuthorSeparator), 1);

        let lines: Vec<_> = report.skipped().iter().map(|s| s.line).collect();
        assert_eq!(lines, vec![1, 2, 4]);
    }

    #[test]
    fn test_stats_from_report() {
        let report =
            TranscriptParser::new().parse_str_with_report("d - A: 1\nnope - x\nd - B: 2");
        let stats = report.stats();
        assert_eq!(stats.chunks, 3);
        assert_eq!(stats.records, 2);
        assert_eq!(stats.skipped_for(SkipReason::MissingAuthorSeparator), 1);
    }

    #[test]
    fn test_narrow_no_break_space_normalized() {
        let records = TranscriptParser::new().parse_str("1/1/24, 9:00\u{202F}AM - Alice: Hi");
        assert_eq!(records[0].datetime(), "1/1/24, 9:00 AM");
    }

    #[test]
    fn test_separator_made_of_narrow_spaces_is_recognized() {
        let records = TranscriptParser::new().parse_str("d\u{202F}-\u{202F}Alice: Hi");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].author(), "Alice");
    }

    #[test]
    fn test_crlf_line_endings() {
        let records = TranscriptParser::new().parse_str("d1 - A: one\r\ntwo\r\nd2 - B: three\r\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].message(), "one two");
    }

    #[test]
    fn test_physical_lines_terminators() {
        let lines: Vec<_> = physical_lines("a\rb\r\nc\nd\n\ne\r").collect();
        assert_eq!(lines, vec!["a", "b", "c", "d", "", "e"]);
        assert_eq!(physical_lines("").count(), 0);
        assert_eq!(physical_lines("\r\n").collect::<Vec<_>>(), vec![""]);
    }

    #[test]
    fn test_bare_carriage_return_line_endings() {
        let records = TranscriptParser::new().parse_str("d1 - A: one\rtwo\rd2 - B: three");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].message(), "one two");
        assert_eq!(records[1].message(), "three");
    }

    #[test]
    fn test_parse_lines_accepts_owned_strings() {
        let lines = vec!["d - A: x".to_string(), "y".to_string()];
        let report = TranscriptParser::new().parse_lines(lines);
        assert_eq!(report.records()[0].message(), "x y");
    }

    #[test]
    fn test_parse_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let err = parse_transcript(&path).unwrap_err();
        assert!(err.is_io());
        assert_eq!(err.path(), Some(path.as_path()));
    }

    #[test]
    fn test_parse_invalid_utf8_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.txt");
        std::fs::write(&path, [0x31, 0x20, 0x2d, 0x20, 0xff, 0xfe]).unwrap();
        let err = parse_transcript(&path).unwrap_err();
        assert!(err.is_utf8());
    }

    #[test]
    fn test_authors_from_report() {
        let report = TranscriptParser::new().parse_str_with_report("d - Bob: 1\nd - Alice: 2\nd - Bob: 3");
        assert_eq!(report.authors().into_vec(), vec!["Alice", "Bob"]);
    }
}
