//! Per-author chat previews.
//!
//! A [`ChatView`] is the presentation model for reading a chat from one
//! participant's side: their own messages align right, everyone else's
//! align left. Placeholder handling from [`ViewConfig`] applies here and
//! nowhere else; the parser keeps every record verbatim.
//!
//! # Example
//!
//! ```
//! use chatsplit::core::view::{Alignment, ChatView};
//! use chatsplit::config::ViewConfig;
//! use chatsplit::MessageRecord;
//!
//! let records = vec![
//!     MessageRecord::new("d1", "Alice", "Hi"),
//!     MessageRecord::new("d2", "Bob", "<Media omitted>"),
//!     MessageRecord::new("d3", "Bob", "."),
//! ];
//!
//! let view = ChatView::for_author(&records, "Alice", &ViewConfig::default());
//! assert_eq!(view.len(), 2);
//! assert_eq!(view.entries()[0].alignment, Alignment::Right);
//! assert_eq!(view.entries()[1].text, "A document was shared but cannot be displayed.");
//! ```

use crate::MessageRecord;
use crate::config::ViewConfig;
use crate::core::sink::AuthorIndex;

/// Which side of the preview a message sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Someone else's message.
    Left,
    /// The selected author's own message.
    Right,
}

/// One displayable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewEntry {
    /// Author of the message.
    pub author: String,
    /// Datetime text as exported.
    pub datetime: String,
    /// Text to display, after placeholder substitution.
    pub text: String,
    /// Side of the preview the entry sits on.
    pub alignment: Alignment,
}

/// Chat preview from one author's perspective.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatView {
    selected: String,
    entries: Vec<ViewEntry>,
}

impl ChatView {
    /// Builds the preview of `records` as seen by `selected`.
    pub fn for_author(records: &[MessageRecord], selected: &str, config: &ViewConfig) -> Self {
        let entries = records
            .iter()
            .filter_map(|record| {
                let text = display_text(record.message(), config)?;
                let alignment = if record.author() == selected {
                    Alignment::Right
                } else {
                    Alignment::Left
                };
                Some(ViewEntry {
                    author: record.author().to_string(),
                    datetime: record.datetime().to_string(),
                    text,
                    alignment,
                })
            })
            .collect();

        Self {
            selected: selected.to_string(),
            entries,
        }
    }

    /// Returns the author this view was built for.
    pub fn selected(&self) -> &str {
        &self.selected
    }

    /// Returns the visible entries in record order.
    pub fn entries(&self) -> &[ViewEntry] {
        &self.entries
    }

    /// Returns the number of visible entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is visible.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the view as plain text, right-aligning own messages to `width`
    /// columns.
    ///
    /// Each entry is an author line, a text line and a datetime line,
    /// separated from the next entry by a blank line.
    pub fn render_text(&self, width: usize) -> String {
        let mut out = String::new();

        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            for line in [&entry.author, &entry.text, &entry.datetime] {
                match entry.alignment {
                    Alignment::Left => out.push_str(line),
                    Alignment::Right => out.push_str(&format!("{line:>width$}")),
                }
                out.push('\n');
            }
        }

        out
    }
}

/// Applies placeholder rules, returning `None` for hidden messages.
fn display_text(message: &str, config: &ViewConfig) -> Option<String> {
    let text = message.trim();

    if text == config.media_placeholder {
        return Some(config.media_replacement.clone());
    }
    if text.is_empty() || config.hidden_texts.iter().any(|hidden| hidden == text) {
        return None;
    }

    Some(text.to_string())
}

/// Builds one view per author in `index`, in index order.
pub fn author_views(
    records: &[MessageRecord],
    index: &AuthorIndex,
    config: &ViewConfig,
) -> Vec<ChatView> {
    index
        .iter()
        .map(|author| ChatView::for_author(records, author, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<MessageRecord> {
        vec![
            MessageRecord::new("d1", "Alice", "Hi Bob"),
            MessageRecord::new("d2", "Bob", "Hey"),
            MessageRecord::new("d3", "Bob", "<Media omitted>"),
            MessageRecord::new("d4", "Alice", "."),
            MessageRecord::new("d5", "Alice", "^"),
            MessageRecord::new("d6", "Bob", "   "),
            MessageRecord::new("d7", "Alice", "Bye"),
        ]
    }

    #[test]
    fn test_alignment_by_exact_author() {
        let view = ChatView::for_author(&records(), "Alice", &ViewConfig::default());
        let sides: Vec<_> = view.entries().iter().map(|e| e.alignment).collect();
        assert_eq!(
            sides,
            vec![
                Alignment::Right,
                Alignment::Left,
                Alignment::Left,
                Alignment::Right
            ]
        );

        let lower = ChatView::for_author(&records(), "alice", &ViewConfig::default());
        assert!(lower.entries().iter().all(|e| e.alignment == Alignment::Left));
    }

    #[test]
    fn test_placeholders_hidden_and_substituted() {
        let view = ChatView::for_author(&records(), "Bob", &ViewConfig::default());
        let texts: Vec<_> = view.entries().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Hi Bob",
                "Hey",
                "A document was shared but cannot be displayed.",
                "Bye"
            ]
        );
    }

    #[test]
    fn test_custom_hidden_text() {
        let config = ViewConfig::new().with_hidden_text("Bye");
        let view = ChatView::for_author(&records(), "Bob", &config);
        assert!(view.entries().iter().all(|e| e.text != "Bye"));
    }

    #[test]
    fn test_render_text_alignment() {
        let records = vec![
            MessageRecord::new("d1", "Alice", "Hi"),
            MessageRecord::new("d2", "Bob", "Yo"),
        ];
        let view = ChatView::for_author(&records, "Bob", &ViewConfig::default());
        let rendered = view.render_text(10);
        assert_eq!(rendered, "Alice\nHi\nd1\n\n       Bob\n        Yo\n        d2\n");
    }

    #[test]
    fn test_author_views_one_per_author() {
        let records = records();
        let index = AuthorIndex::from_records(&records);
        let views = author_views(&records, &index, &ViewConfig::default());
        let selected: Vec<_> = views.iter().map(ChatView::selected).collect();
        assert_eq!(selected, vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_empty_records() {
        let view = ChatView::for_author(&[], "Alice", &ViewConfig::default());
        assert!(view.is_empty());
        assert_eq!(view.render_text(40), "");
    }
}
