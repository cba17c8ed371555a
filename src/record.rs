//! The structured output unit of the transcript parser.
//!
//! A [`MessageRecord`] holds the three fields extracted from one logical
//! message: the datetime text, the author and the message body.
//!
//! # Examples
//!
//! ```
//! use chatsplit::MessageRecord;
//!
//! let record = MessageRecord::new("1/1/24, 9:00 AM", "Alice", "Hi there");
//! assert_eq!(record.datetime(), "1/1/24, 9:00 AM");
//! assert_eq!(record.author(), "Alice");
//! assert_eq!(record.message(), "Hi there");
//! ```
//!
//! ## Serialization
//!
//! Records serialize to an object with exactly the keys `datetime`,
//! `author` and `message`:
//!
//! ```
//! use chatsplit::MessageRecord;
//!
//! let record = MessageRecord::new("1/1/24, 9:00 AM", "Alice", "Hi");
//! let json = serde_json::to_string(&record)?;
//! assert_eq!(json, r#"{"datetime":"1/1/24, 9:00 AM","author":"Alice","message":"Hi"}"#);
//!
//! let parsed: MessageRecord = serde_json::from_str(&json)?;
//! assert_eq!(record, parsed);
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde::{Deserialize, Serialize};

/// One validated chat message.
///
/// | Field | Description |
/// |-------|-------------|
/// | `datetime` | Text before the first `" - "`, trimmed. Never parsed. |
/// | `author` | Text between the separator and the first `":"`, trimmed |
/// | `message` | Remaining text, trimmed, line breaks collapsed to spaces |
///
/// Fields are private: a record cannot be modified after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageRecord {
    datetime: String,
    author: String,
    message: String,
}

impl MessageRecord {
    /// Creates a record from already-extracted fields.
    pub fn new(
        datetime: impl Into<String>,
        author: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            datetime: datetime.into(),
            author: author.into(),
            message: message.into(),
        }
    }

    /// Returns the verbatim datetime text.
    pub fn datetime(&self) -> &str {
        &self.datetime
    }

    /// Returns the author name.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the message body.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` if the message body is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.message.trim().is_empty()
    }

    /// Consumes the record and returns `(datetime, author, message)`.
    pub fn into_parts(self) -> (String, String, String) {
        (self.datetime, self.author, self.message)
    }
}
