//! Ordered record storage and the author index derived from it.
//!
//! # Example
//!
//! ```
//! use chatsplit::core::sink::RecordSink;
//! use chatsplit::MessageRecord;
//!
//! let mut sink = RecordSink::new();
//! sink.append(MessageRecord::new("d1", "Bob", "Hi"));
//! sink.append(MessageRecord::new("d2", "Alice", "Hello"));
//! sink.append(MessageRecord::new("d3", "Bob", "How are you?"));
//!
//! let authors = sink.authors();
//! assert_eq!(authors.len(), 2);
//! assert_eq!(authors.iter().collect::<Vec<_>>(), vec!["Alice", "Bob"]);
//! ```

use std::collections::BTreeSet;

use crate::MessageRecord;

/// Append-only, insertion-ordered sequence of accepted records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSink {
    records: Vec<MessageRecord>,
}

impl RecordSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record at the end. No deduplication is performed.
    pub fn append(&mut self, record: MessageRecord) {
        self.records.push(record);
    }

    /// Returns the records in insertion order.
    pub fn records(&self) -> &[MessageRecord] {
        &self.records
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no record has been appended.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, MessageRecord> {
        self.records.iter()
    }

    /// Computes the set of distinct authors currently in the sink.
    pub fn authors(&self) -> AuthorIndex {
        AuthorIndex::from_records(&self.records)
    }

    /// Consumes the sink and returns its records.
    pub fn into_records(self) -> Vec<MessageRecord> {
        self.records
    }
}

impl From<Vec<MessageRecord>> for RecordSink {
    fn from(records: Vec<MessageRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<MessageRecord> for RecordSink {
    fn from_iter<T: IntoIterator<Item = MessageRecord>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl Extend<MessageRecord> for RecordSink {
    fn extend<T: IntoIterator<Item = MessageRecord>>(&mut self, iter: T) {
        self.records.extend(iter);
    }
}

impl IntoIterator for RecordSink {
    type Item = MessageRecord;
    type IntoIter = std::vec::IntoIter<MessageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecordSink {
    type Item = &'a MessageRecord;
    type IntoIter = std::slice::Iter<'a, MessageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Set of distinct author names.
///
/// Membership is exact string equality: `"alice"` and `"Alice"` are
/// different authors. Iteration is in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorIndex {
    authors: BTreeSet<String>,
}

impl AuthorIndex {
    /// Builds the index from a record slice.
    pub fn from_records(records: &[MessageRecord]) -> Self {
        records.iter().map(MessageRecord::author).collect()
    }

    /// Returns `true` if `author` appears in the index.
    pub fn contains(&self, author: &str) -> bool {
        self.authors.contains(author)
    }

    /// Returns the number of distinct authors.
    pub fn len(&self) -> usize {
        self.authors.len()
    }

    /// Returns `true` if there are no authors.
    pub fn is_empty(&self) -> bool {
        self.authors.is_empty()
    }

    /// Iterates over authors in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.authors.iter().map(String::as_str)
    }

    /// Returns the authors as a sorted vector.
    pub fn into_vec(self) -> Vec<String> {
        self.authors.into_iter().collect()
    }
}

impl<'a> FromIterator<&'a str> for AuthorIndex {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        Self {
            authors: iter.into_iter().map(str::to_string).collect(),
        }
    }
}
