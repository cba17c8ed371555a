//! Record storage, display and output for chatsplit.
//!
//! This module contains:
//! - [`sink`] - [`RecordSink`] and the derived [`AuthorIndex`]
//! - [`processor`] - [`ParseStats`]
//! - [`view`] - per-author chat previews
//! - [`output`] - interchange writers and reader (JSON, JSONL, CSV)

pub mod output;
pub mod processor;
pub mod sink;
pub mod view;

// Re-export main types for convenience
pub use processor::ParseStats;
pub use sink::{AuthorIndex, RecordSink};
pub use view::{Alignment, ChatView, ViewEntry, author_views};

pub use crate::MessageRecord;

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
pub use output::{from_json, read_json, to_json, to_jsonl, write_json, write_jsonl};
