//! Hand-built token streams.
//!
//! The linter consumes tokens produced elsewhere, so tests describe a stream
//! as byte ranges over a source string and let the builder compute marks.
use std::ops::Range;
use yamlcheck_types::{Mark, ScalarStyle, Token, TokenKind};

/// Builder for a token stream over `source`
///
/// ```
/// use yamlcheck_test_utils::TokenStreamBuilder;
/// use yamlcheck_types::TokenKind;
///
/// let source = "a: 1\n";
/// let tokens = TokenStreamBuilder::new(source)
///     .stream_start()
///     .push(TokenKind::BlockMappingStart, 0..0)
///     .push(TokenKind::Key, 0..0)
///     .plain(0..1)
///     .push(TokenKind::Value, 1..2)
///     .plain(3..4)
///     .push(TokenKind::BlockEnd, 5..5)
///     .stream_end()
///     .build();
/// assert_eq!(tokens.len(), 8);
/// assert_eq!(tokens[5].start.column, 3);
/// ```
#[derive(Debug, Clone)]
pub struct TokenStreamBuilder<'a> {
    source: &'a str,
    tokens: Vec<Token>,
}

impl<'a> TokenStreamBuilder<'a> {
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self {
            source,
            tokens: Vec::new(),
        }
    }

    /// Append a token spanning `range` of the source
    #[must_use]
    pub fn push(mut self, kind: TokenKind, range: Range<usize>) -> Self {
        let start = Mark::from_offset(self.source, range.start);
        let end = Mark::from_offset(self.source, range.end);
        self.tokens.push(Token::new(kind, start, end));
        self
    }

    /// Append a plain scalar whose value is the source text under `range`
    ///
    /// # Panics
    ///
    /// Panics if `range` does not fall on character boundaries.
    #[must_use]
    pub fn plain(self, range: Range<usize>) -> Self {
        let value = self.source[range.clone()].to_string();
        self.push(TokenKind::plain(value), range)
    }

    /// Append a scalar with an explicit value and style
    #[must_use]
    pub fn scalar(self, range: Range<usize>, value: &str, style: ScalarStyle) -> Self {
        self.push(
            TokenKind::Scalar {
                value: value.to_string(),
                style,
            },
            range,
        )
    }

    /// Append the zero-width stream start at offset 0
    #[must_use]
    pub fn stream_start(self) -> Self {
        self.push(TokenKind::StreamStart, 0..0)
    }

    /// Append the zero-width stream end at the end of the source
    #[must_use]
    pub fn stream_end(self) -> Self {
        let len = self.source.len();
        self.push(TokenKind::StreamEnd, len..len)
    }

    #[must_use]
    pub fn build(self) -> Vec<Token> {
        self.tokens
    }
}
