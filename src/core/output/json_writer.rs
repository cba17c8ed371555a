//! JSON output writer.

use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::MessageRecord;
use crate::config::OutputConfig;
use crate::error::{ChatsplitError, Result};

/// Writes records to a JSON file as an array.
///
/// # Format
/// ```json
/// [
///     {
///         "datetime": "1/1/24, 9:00 AM",
///         "author": "Alice",
///         "message": "Hi there"
///     }
/// ]
/// ```
pub fn write_json(
    records: &[MessageRecord],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let json = to_json(records, config)?;
    super::write_string(output_path.as_ref(), &json)
}

/// Converts records to a JSON array string.
///
/// Same format as `write_json`, but returns a String instead of writing to file.
pub fn to_json(records: &[MessageRecord], config: &OutputConfig) -> Result<String> {
    if !config.pretty {
        return Ok(serde_json::to_string(records)?);
    }

    let indent = " ".repeat(config.indent);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut serializer)?;

    String::from_utf8(buf).map_err(|source| ChatsplitError::Utf8 {
        context: "JSON output".to_string(),
        source,
    })
}
