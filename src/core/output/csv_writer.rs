//! CSV output writer.

use std::fs::File;
use std::path::Path;

use crate::MessageRecord;
use crate::error::{ChatsplitError, Result};

const HEADER: [&str; 3] = ["DateTime", "Author", "Message"];

/// Writes records to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `DateTime`, `Author`, `Message`
/// - Encoding: UTF-8
pub fn write_csv(records: &[MessageRecord], output_path: impl AsRef<Path>) -> Result<()> {
    let path = output_path.as_ref();
    let file = File::create(path).map_err(|e| ChatsplitError::io_at(e, path))?;
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(file);

    writer.write_record(HEADER)?;
    for record in records {
        writer.write_record([record.datetime(), record.author(), record.message()])?;
    }

    writer.flush().map_err(|e| ChatsplitError::io_at(e, path))?;
    Ok(())
}

/// Converts records to a CSV string.
pub fn to_csv(records: &[MessageRecord]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    writer.write_record(HEADER)?;
    for record in records {
        writer.write_record([record.datetime(), record.author(), record.message()])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ChatsplitError::from(e.into_error()))?;

    String::from_utf8(bytes).map_err(|source| ChatsplitError::Utf8 {
        context: "CSV output".to_string(),
        source,
    })
}
