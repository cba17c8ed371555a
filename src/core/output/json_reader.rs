//! Loading of previously written JSON arrays.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::MessageRecord;
use crate::error::{ChatsplitError, Result};

/// Reads records from a JSON file produced by [`write_json`](super::write_json).
///
/// # Errors
///
/// - [`ChatsplitError::Io`] if the file cannot be read
/// - [`ChatsplitError::Json`] if the content is not valid JSON or an entry
///   lacks a string-valued `datetime`, `author` or `message`
/// - [`ChatsplitError::InvalidFormat`] if the top level is not an array
pub fn read_json(path: impl AsRef<Path>) -> Result<Vec<MessageRecord>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| ChatsplitError::io_at(e, path))?;
    from_json(&content)
}

/// Parses records from a JSON array string.
pub fn from_json(content: &str) -> Result<Vec<MessageRecord>> {
    let items = match serde_json::from_str::<Value>(content)? {
        Value::Array(items) => items,
        other => {
            return Err(ChatsplitError::invalid_format(
                "interchange JSON",
                format!("expected an array of records, found {}", kind(&other)),
            ));
        }
    };

    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(ChatsplitError::from))
        .collect()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
