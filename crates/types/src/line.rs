//! Physical line records over a shared buffer.

/// One physical line of the document.
///
/// `start` and `end` are byte offsets into `buffer`. `end` points at the line
/// terminator (before the `\r` of a `\r\n` pair) or at the buffer end for
/// the last line. The buffer is borrowed, never copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line<'a> {
    /// Line number (1-indexed)
    pub line_no: usize,
    pub buffer: &'a str,
    pub start: usize,
    pub end: usize,
}

impl<'a> Line<'a> {
    #[must_use]
    pub const fn new(line_no: usize, buffer: &'a str, start: usize, end: usize) -> Self {
        Self {
            line_no,
            buffer,
            start,
            end,
        }
    }

    /// Line text without its terminator.
    #[must_use]
    pub fn content(&self) -> &'a str {
        &self.buffer[self.start..self.end]
    }

    /// Length of the line in characters, terminator excluded.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.content().chars().count()
    }

    /// Returns `true` if the line has no content.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if this is the last line of the buffer (no terminator).
    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.end == self.buffer.len()
    }
}

/// Iterator over the [`Line`]s of a buffer. See [`lines`].
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    buffer: &'a str,
    cursor: usize,
    line_no: usize,
    done: bool,
}

impl<'a> Iterator for Lines<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let bytes = self.buffer.as_bytes();
        self.line_no += 1;
        let start = self.cursor;

        if let Some(rel) = bytes[start..].iter().position(|&b| b == b'\n') {
            let newline = start + rel;
            let end = if newline > start && bytes[newline - 1] == b'\r' {
                newline - 1
            } else {
                newline
            };
            self.cursor = newline + 1;
            Some(Line::new(self.line_no, self.buffer, start, end))
        } else {
            self.done = true;
            Some(Line::new(self.line_no, self.buffer, start, self.buffer.len()))
        }
    }
}

/// Slice a buffer into line records.
///
/// The final record is always produced, so a buffer ending with `\n` yields
/// a trailing empty line and an empty buffer yields one empty line.
#[must_use]
pub fn lines(buffer: &str) -> Lines<'_> {
    Lines {
        buffer,
        cursor: 0,
        line_no: 0,
        done: false,
    }
}
