//! Interchange and export writers.
//!
//! - [`write_json`] / [`to_json`] - JSON array, 4-space indentation by default
//! - [`read_json`] / [`from_json`] - load a previously written JSON array
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, one record per line
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # fn main() -> chatsplit::Result<()> {
//! use chatsplit::core::output::{read_json, write_json};
//! use chatsplit::config::OutputConfig;
//! use chatsplit::MessageRecord;
//!
//! let records = vec![
//!     MessageRecord::new("1/1/24, 9:00 AM", "Alice", "Hello!"),
//!     MessageRecord::new("1/1/24, 9:01 AM", "Bob", "Hi there!"),
//! ];
//!
//! write_json(&records, "results.json", &OutputConfig::new())?;
//! let loaded = read_json("results.json")?;
//! assert_eq!(loaded, records);
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::Path;

use crate::error::{ChatsplitError, Result};

#[cfg(feature = "csv-output")]
mod csv_writer;
mod json_reader;
mod json_writer;
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
pub use json_reader::{from_json, read_json};
pub use json_writer::{to_json, write_json};
pub use jsonl_writer::{to_jsonl, write_jsonl};

/// Writes `contents` to `path` in one go, creating or truncating the file.
pub(crate) fn write_string(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| ChatsplitError::io_at(e, path))
}
