//! Configuration types for parsing, output and display.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`TranscriptConfig`] - extraction rules
//! - [`OutputConfig`] - interchange file layout
//! - [`ViewConfig`] - placeholder handling for chat previews
//!
//! # Example
//!
//! ```rust
//! use chatsplit::config::TranscriptConfig;
//! use chatsplit::parser::TranscriptParser;
//!
//! let config = TranscriptConfig::new()
//!     .with_system_notice("Your security code with Bob changed.");
//!
//! let parser = TranscriptParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

/// The end-to-end encryption banner that opens most exported transcripts.
pub const ENCRYPTION_NOTICE: &str = "Messages and calls are end-to-end encrypted. No one outside of this chat, not even WhatsApp, can read or listen to them. Tap to learn more.";

/// Text the exporter substitutes for attachments.
pub const MEDIA_PLACEHOLDER: &str = "<Media omitted>";

/// Text shown in place of [`MEDIA_PLACEHOLDER`].
pub const MEDIA_REPLACEMENT: &str = "A document was shared but cannot be displayed.";

/// Configuration for transcript field extraction.
///
/// The defaults reproduce the standard behaviour: the encryption notice is
/// skipped and continuation line breaks are collapsed into spaces.
///
/// # Example
///
/// ```rust
/// use chatsplit::config::TranscriptConfig;
///
/// let config = TranscriptConfig::new().with_skip_system_notices(false);
/// assert!(!config.skip_system_notices);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptConfig {
    /// Skip chunks whose content equals one of `system_notices` (default: true)
    pub skip_system_notices: bool,

    /// Exact content strings treated as system notices
    /// (default: [`ENCRYPTION_NOTICE`])
    pub system_notices: Vec<String>,

    /// Replace embedded line breaks in the message body with spaces (default: true)
    pub collapse_line_breaks: bool,
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self {
            skip_system_notices: true,
            system_notices: vec![ENCRYPTION_NOTICE.to_string()],
            collapse_line_breaks: true,
        }
    }
}

impl TranscriptConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether system notices are skipped.
    #[must_use]
    pub fn with_skip_system_notices(mut self, skip: bool) -> Self {
        self.skip_system_notices = skip;
        self
    }

    /// Adds another exact-match system notice.
    #[must_use]
    pub fn with_system_notice(mut self, notice: impl Into<String>) -> Self {
        self.system_notices.push(notice.into());
        self
    }

    /// Sets whether continuation line breaks are collapsed.
    #[must_use]
    pub fn with_collapse_line_breaks(mut self, collapse: bool) -> Self {
        self.collapse_line_breaks = collapse;
        self
    }

    /// Returns `true` if `content` is a configured system notice.
    pub fn is_system_notice(&self, content: &str) -> bool {
        self.skip_system_notices && self.system_notices.iter().any(|n| n == content)
    }
}

/// Configuration for the interchange file layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON output (default: true)
    pub pretty: bool,

    /// Spaces per indentation level when pretty-printing (default: 4)
    pub indent: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: 4,
        }
    }
}

impl OutputConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Produces single-line JSON.
    #[must_use]
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    /// Sets the indentation width.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}

/// Placeholder rules for chat previews.
///
/// These rules belong to the display layer; the parser itself never looks
/// at message contents beyond the system notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Exact text marking an omitted attachment
    pub media_placeholder: String,

    /// Text shown instead of `media_placeholder`
    pub media_replacement: String,

    /// Texts that are not shown at all. Empty text is always hidden.
    pub hidden_texts: Vec<String>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            media_placeholder: MEDIA_PLACEHOLDER.to_string(),
            media_replacement: MEDIA_REPLACEMENT.to_string(),
            hidden_texts: vec![".".to_string(), "^".to_string()],
        }
    }
}

impl ViewConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement for omitted media.
    #[must_use]
    pub fn with_media_replacement(mut self, text: impl Into<String>) -> Self {
        self.media_replacement = text.into();
        self
    }

    /// Adds a text that is never shown.
    #[must_use]
    pub fn with_hidden_text(mut self, text: impl Into<String>) -> Self {
        self.hidden_texts.push(text.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_config_defaults() {
        let config = TranscriptConfig::default();
        assert!(config.skip_system_notices);
        assert!(config.collapse_line_breaks);
        assert_eq!(config.system_notices, vec![ENCRYPTION_NOTICE.to_string()]);
    }

    #[test]
    fn test_is_system_notice_exact_match_only() {
        let config = TranscriptConfig::new();
        assert!(config.is_system_notice(ENCRYPTION_NOTICE));
        assert!(!config.is_system_notice("Messages and calls are end-to-end encrypted."));
        assert!(!config.is_system_notice(&ENCRYPTION_NOTICE.to_uppercase()));
    }

    #[test]
    fn test_is_system_notice_disabled() {
        let config = TranscriptConfig::new().with_skip_system_notices(false);
        assert!(!config.is_system_notice(ENCRYPTION_NOTICE));
    }

    #[test]
    fn test_extra_system_notice() {
        let config = TranscriptConfig::new().with_system_notice("You deleted this message");
        assert!(config.is_system_notice("You deleted this message"));
        assert!(config.is_system_notice(ENCRYPTION_NOTICE));
    }

    #[test]
    fn test_output_config_builder() {
        let config = OutputConfig::new().with_indent(2);
        assert_eq!(config.indent, 2);
        assert!(config.pretty);
        assert!(!OutputConfig::new().compact().pretty);
    }

    #[test]
    fn test_view_config_defaults() {
        let config = ViewConfig::default();
        assert_eq!(config.media_placeholder, "<Media omitted>");
        assert_eq!(config.hidden_texts, vec![".", "^"]);
    }

    #[test]
    fn test_config_serde_partial() {
        let config: TranscriptConfig =
            serde_json::from_str(r#"{"collapse_line_breaks": false}"#).unwrap();
        assert!(!config.collapse_line_breaks);
        assert!(config.skip_system_notices);
        assert_eq!(config.system_notices.len(), 1);

        let output: OutputConfig = serde_json::from_str(r#"{"indent": 2}"#).unwrap();
        assert_eq!(output.indent, 2);
        assert!(output.pretty);
    }
}
