//! Output format selection.
//!
//! # Example
//!
//! ```rust,no_run
//! # fn example() -> chatsplit::Result<()> {
//! use chatsplit::format::{OutputFormat, write_to_format};
//! use chatsplit::config::OutputConfig;
//! use chatsplit::MessageRecord;
//!
//! let records = vec![MessageRecord::new("1/1/24, 9:00 AM", "Alice", "Hello!")];
//!
//! // Write using format enum
//! write_to_format(&records, "results.json", OutputFormat::Json, &OutputConfig::new())?;
//!
//! // Or use format detection from extension
//! let format = OutputFormat::from_path("results.jsonl")?;
//! assert_eq!(format, OutputFormat::Jsonl);
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::MessageRecord;
use crate::config::OutputConfig;
use crate::error::ChatsplitError;

/// Output format for parsed records.
///
/// - [`Json`](OutputFormat::Json) - the interchange format, a pretty-printed array
/// - [`Jsonl`](OutputFormat::Jsonl) - one JSON object per line
/// - [`Csv`](OutputFormat::Csv) - semicolon-delimited table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// JSON array of records (default)
    #[default]
    Json,

    /// JSON Lines - one JSON object per line
    #[cfg_attr(feature = "cli", value(alias = "ndjson"))]
    Jsonl,

    /// CSV with semicolon delimiter
    Csv,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatsplit::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Json.extension(), "json");
    /// assert_eq!(OutputFormat::Csv.extension(), "csv");
    /// ```
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Csv => "csv",
        }
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Json, OutputFormat::Jsonl, OutputFormat::Csv]
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatsplit::format::OutputFormat;
    ///
    /// let format = OutputFormat::from_path("out.ndjson").unwrap();
    /// assert_eq!(format, OutputFormat::Jsonl);
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ChatsplitError> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ChatsplitError::invalid_format(
                "output",
                format!(
                    "Unknown file extension: '.{}'. Expected one of: json, jsonl, csv",
                    ext
                ),
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
            OutputFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: json, jsonl, ndjson, csv",
                s
            )),
        }
    }
}

/// Writes records to a file in the specified format.
///
/// `config` only affects JSON output.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
pub fn write_to_format(
    records: &[MessageRecord],
    path: impl AsRef<Path>,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<(), ChatsplitError> {
    match format {
        OutputFormat::Json => crate::core::output::write_json(records, path, config),
        OutputFormat::Jsonl => crate::core::output::write_jsonl(records, path),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(records, path),
        #[cfg(not(feature = "csv-output"))]
        OutputFormat::Csv => Err(missing_feature(format)),
    }
}

#[cfg(not(feature = "csv-output"))]
fn missing_feature(format: OutputFormat) -> ChatsplitError {
    ChatsplitError::invalid_format(
        "output",
        format!(
            "Output format {} requires the 'csv-output' feature to be enabled",
            format
        ),
    )
}
