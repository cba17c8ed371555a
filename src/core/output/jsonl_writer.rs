//! JSON Lines (JSONL) output writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::MessageRecord;
use crate::error::{ChatsplitError, Result};

/// Writes records to JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"datetime":"1/1/24, 9:00 AM","author":"Alice","message":"Hello"}
/// {"datetime":"1/1/24, 9:01 AM","author":"Bob","message":"Hi"}
/// ```
pub fn write_jsonl(records: &[MessageRecord], output_path: impl AsRef<Path>) -> Result<()> {
    let path = output_path.as_ref();
    let file = File::create(path).map_err(|e| ChatsplitError::io_at(e, path))?;
    let mut writer = BufWriter::new(file);

    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer
            .write_all(b"\n")
            .map_err(|e| ChatsplitError::io_at(e, path))?;
    }

    writer.flush().map_err(|e| ChatsplitError::io_at(e, path))?;
    Ok(())
}

/// Converts records to a JSONL string.
pub fn to_jsonl(records: &[MessageRecord]) -> Result<String> {
    let mut output = String::new();

    for record in records {
        output.push_str(&serde_json::to_string(record)?);
        output.push('\n');
    }

    Ok(output)
}
