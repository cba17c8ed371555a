//! Transcript parsing stages.
//!
//! Raw lines flow through three stages:
//!
//! 1. [`normalize_line`] - narrow no-break spaces become ordinary spaces
//! 2. [`Segmenter`] - lines are grouped into [`MessageChunk`]s
//! 3. [`FieldExtractor`] - each chunk becomes a record or a [`SkipReason`]
//!
//! The stages are pure and can be tested without touching the file system.
//! [`TranscriptParser`](crate::parser::TranscriptParser) wires them together.

pub mod extract;
pub mod normalize;
pub mod segment;

pub use extract::{AUTHOR_SEPARATOR, Extraction, FieldExtractor, SkipReason, extract};
pub use normalize::{NARROW_NO_BREAK_SPACE, normalize_line};
pub use segment::{MessageChunk, SEPARATOR, Segmenter, SegmenterState, starts_message};
