//! Grouping of normalized lines into message chunks.
//!
//! A line containing [`SEPARATOR`] opens a new message; any other line
//! continues the message in progress. The state machine is expressed as a
//! fold over [`SegmenterState`], and [`Segmenter`] drives it over any line
//! iterator.

/// Token between the datetime text and the rest of a message header.
pub const SEPARATOR: &str = " - ";

/// Returns `true` if `line` opens a new message.
pub fn starts_message(line: &str) -> bool {
    line.contains(SEPARATOR)
}

/// Raw text of one logical message.
///
/// Continuation lines are joined to the header line with `\n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageChunk {
    text: String,
    first_line: usize,
    line_count: usize,
}

impl MessageChunk {
    fn start(line: &str, line_no: usize) -> Self {
        Self {
            text: line.to_string(),
            first_line: line_no,
            line_count: 1,
        }
    }

    fn push_line(&mut self, line: &str) {
        self.text.push('\n');
        self.text.push_str(line);
        self.line_count += 1;
    }

    /// Returns the chunk text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the 1-based number of the chunk's first physical line.
    pub fn first_line(&self) -> usize {
        self.first_line
    }

    /// Returns how many physical lines make up the chunk.
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// Consumes the chunk and returns its text.
    pub fn into_text(self) -> String {
        self.text
    }
}

/// Segmenter state: either idle or accumulating one chunk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SegmenterState {
    /// No chunk in progress.
    #[default]
    Idle,
    /// A chunk is being accumulated.
    Accumulating(MessageChunk),
}

impl SegmenterState {
    /// Feeds one normalized line (numbered from 1).
    ///
    /// Returns the next state and the chunk completed by this line, if any.
    #[must_use]
    pub fn step(self, line: &str, line_no: usize) -> (Self, Option<MessageChunk>) {
        if starts_message(line) {
            let emitted = match self {
                SegmenterState::Idle => None,
                SegmenterState::Accumulating(chunk) => Some(chunk),
            };
            (
                SegmenterState::Accumulating(MessageChunk::start(line, line_no)),
                emitted,
            )
        } else {
            // A leading orphan line still opens a chunk; extraction rejects it.
            let chunk = match self {
                SegmenterState::Idle => MessageChunk::start(line, line_no),
                SegmenterState::Accumulating(mut chunk) => {
                    chunk.push_line(line);
                    chunk
                }
            };
            (SegmenterState::Accumulating(chunk), None)
        }
    }

    /// Ends the input, returning the chunk still in progress.
    pub fn finish(self) -> Option<MessageChunk> {
        match self {
            SegmenterState::Idle => None,
            SegmenterState::Accumulating(chunk) => Some(chunk),
        }
    }

    /// Returns `true` if no chunk is in progress.
    pub fn is_idle(&self) -> bool {
        matches!(self, SegmenterState::Idle)
    }
}

/// Iterator yielding the chunks of a line sequence in input order.
///
/// # Example
///
/// ```rust
/// use chatsplit::parsing::Segmenter;
///
/// let lines = ["1/1/24, 9:01 AM - Bob: Hello", "how are you?", "1/1/24, 9:02 AM - Alice: Fine"];
/// let chunks: Vec<_> = Segmenter::new(lines).map(|c| c.into_text()).collect();
///
/// assert_eq!(chunks, vec![
///     "1/1/24, 9:01 AM - Bob: Hello\nhow are you?",
///     "1/1/24, 9:02 AM - Alice: Fine",
/// ]);
/// ```
pub struct Segmenter<I> {
    lines: I,
    // `None` once the final chunk has been flushed.
    state: Option<SegmenterState>,
    line_no: usize,
}

impl<I> Segmenter<I> {
    /// Creates a segmenter over already-normalized lines.
    pub fn new<T>(lines: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            lines: lines.into_iter(),
            state: Some(SegmenterState::Idle),
            line_no: 0,
        }
    }

    /// Returns how many lines have been consumed so far.
    pub fn lines_read(&self) -> usize {
        self.line_no
    }
}

impl<I, S> Iterator for Segmenter<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = MessageChunk;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let state = self.state.take()?;
            let Some(line) = self.lines.next() else {
                return state.finish();
            };

            self.line_no += 1;
            let (next_state, emitted) = state.step(line.as_ref(), self.line_no);
            self.state = Some(next_state);

            if emitted.is_some() {
                return emitted;
            }
        }
    }
}
