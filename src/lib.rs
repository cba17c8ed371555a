//! # Chatsplit
//!
//! A Rust library for turning plain-text chat transcripts into structured
//! message records.
//!
//! ## Overview
//!
//! A transcript is a text file where each message starts with a line of the form
//!
//! ```text
//! <datetime> - <author>: <message>
//! ```
//!
//! and may continue over any number of following lines. Chatsplit groups the
//! physical lines into logical messages, splits each one into its datetime,
//! author and message fields, and collects the valid ones in file order.
//! Chunks that do not have the expected shape are skipped, never fatal.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatsplit::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let records = parse_transcript("chat.txt")?;
//!
//!     let authors = AuthorIndex::from_records(&records);
//!     println!("{} participants", authors.len());
//!
//!     write_json(&records, "results.json", &OutputConfig::new())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Skip diagnostics
//!
//! ```rust
//! use chatsplit::parser::TranscriptParser;
//! use chatsplit::parsing::SkipReason;
//!
//! let report = TranscriptParser::new().parse_str_with_report("hello\nd - Alice: Hi");
//! assert_eq!(report.records().len(), 1);
//! assert_eq!(report.skip_count(SkipReason::MissingDatetimeSeparator), 1);
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`TranscriptParser`](parser::TranscriptParser), [`parse_transcript`]
//! - [`parsing`] - the pipeline stages: normalize, segment, extract
//! - [`record`] - [`MessageRecord`]
//! - [`config`] - [`TranscriptConfig`](config::TranscriptConfig),
//!   [`OutputConfig`](config::OutputConfig), [`ViewConfig`](config::ViewConfig)
//! - [`core`] - record sink, author index, chat views, writers and reader
//! - [`format`] - [`OutputFormat`](format::OutputFormat) and [`write_to_format`](format::write_to_format)
//! - [`error`] - [`ChatsplitError`], [`Result`]
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod parser;
pub mod parsing;
pub mod record;

// Re-export the main types at the crate root for convenience
pub use error::{ChatsplitError, Result};
pub use parser::parse_transcript;
pub use record::MessageRecord;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatsplit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::MessageRecord;

    pub use crate::error::{ChatsplitError, Result};

    pub use crate::parser::{ParseReport, SkippedChunk, TranscriptParser, parse_transcript};
    pub use crate::parsing::SkipReason;

    pub use crate::config::{OutputConfig, TranscriptConfig, ViewConfig};

    pub use crate::core::processor::ParseStats;
    pub use crate::core::sink::{AuthorIndex, RecordSink};
    pub use crate::core::view::{Alignment, ChatView, author_views};

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    pub use crate::core::output::{
        from_json, read_json, to_json, to_jsonl, write_json, write_jsonl,
    };

    pub use crate::format::{OutputFormat, write_to_format};
}
