use yamlcheck_types::{lines, Line, Token};

/// Input to one lint run: the buffer, its token stream and its line records
#[derive(Debug, Clone)]
pub struct Document<'a> {
    buffer: &'a str,
    tokens: &'a [Token],
    lines: Vec<Line<'a>>,
}

impl<'a> Document<'a> {
    /// Create a document, slicing `buffer` into line records
    #[must_use]
    pub fn new(buffer: &'a str, tokens: &'a [Token]) -> Self {
        Self {
            buffer,
            tokens,
            lines: lines(buffer).collect(),
        }
    }

    #[must_use]
    pub const fn buffer(&self) -> &'a str {
        self.buffer
    }

    #[must_use]
    pub const fn tokens(&self) -> &'a [Token] {
        self.tokens
    }

    #[must_use]
    pub fn lines(&self) -> &[Line<'a>] {
        &self.lines
    }

    /// The window centered on the token at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn window(&self, index: usize) -> TokenWindow<'a> {
        TokenWindow {
            buffer: self.buffer,
            token: &self.tokens[index],
            prev: index.checked_sub(1).and_then(|i| self.tokens.get(i)),
            next: self.tokens.get(index + 1),
            nextnext: self.tokens.get(index + 2),
        }
    }
}

/// What a token rule sees for one invocation
///
/// Neighbors are `None` past either end of the stream.
#[derive(Debug, Clone, Copy)]
pub struct TokenWindow<'a> {
    /// The whole document buffer, indexed by token marks
    pub buffer: &'a str,
    pub token: &'a Token,
    pub prev: Option<&'a Token>,
    pub next: Option<&'a Token>,
    pub nextnext: Option<&'a Token>,
}

impl TokenWindow<'_> {
    /// Byte at `offset` in the buffer, if any
    #[must_use]
    pub fn byte_at(&self, offset: usize) -> Option<u8> {
        self.buffer.as_bytes().get(offset).copied()
    }
}
