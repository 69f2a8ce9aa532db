//! Token types produced by the external YAML scanner.

use crate::position::Mark;

/// How a scalar was written in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScalarStyle {
    /// Unquoted
    #[default]
    Plain,
    /// `'single quoted'`
    SingleQuoted,
    /// `"double quoted"`
    DoubleQuoted,
    /// `|` block scalar
    Literal,
    /// `>` block scalar
    Folded,
}

impl ScalarStyle {
    /// Returns true for unquoted scalars.
    #[must_use]
    pub const fn is_plain(self) -> bool {
        matches!(self, Self::Plain)
    }
}

/// Classification of a token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    StreamStart,
    StreamEnd,
    /// `%YAML` or `%TAG`
    Directive,
    /// `---`
    DocumentStart,
    /// `...`
    DocumentEnd,
    BlockSequenceStart,
    BlockMappingStart,
    BlockEnd,
    /// `[`
    FlowSequenceStart,
    /// `]`
    FlowSequenceEnd,
    /// `{`
    FlowMappingStart,
    /// `}`
    FlowMappingEnd,
    /// Key marker. Zero-width for implicit keys, `?` for explicit ones.
    Key,
    /// `:`
    Value,
    /// `-`
    BlockEntry,
    /// `,`
    FlowEntry,
    /// `*name`
    Alias,
    /// `&name`
    Anchor,
    /// `!tag`
    Tag,
    Scalar { value: String, style: ScalarStyle },
}

impl TokenKind {
    /// Build a plain scalar kind.
    #[must_use]
    pub fn plain(value: impl Into<String>) -> Self {
        Self::Scalar {
            value: value.into(),
            style: ScalarStyle::Plain,
        }
    }

    /// Returns `true` for tokens that close a mapping or a sequence.
    #[must_use]
    pub const fn is_collection_end(&self) -> bool {
        matches!(
            self,
            Self::BlockEnd | Self::FlowMappingEnd | Self::FlowSequenceEnd
        )
    }

    /// Short lowercase name, used in log and error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::StreamStart => "stream-start",
            Self::StreamEnd => "stream-end",
            Self::Directive => "directive",
            Self::DocumentStart => "document-start",
            Self::DocumentEnd => "document-end",
            Self::BlockSequenceStart => "block-sequence-start",
            Self::BlockMappingStart => "block-mapping-start",
            Self::BlockEnd => "block-end",
            Self::FlowSequenceStart => "flow-sequence-start",
            Self::FlowSequenceEnd => "flow-sequence-end",
            Self::FlowMappingStart => "flow-mapping-start",
            Self::FlowMappingEnd => "flow-mapping-end",
            Self::Key => "key",
            Self::Value => "value",
            Self::BlockEntry => "block-entry",
            Self::FlowEntry => "flow-entry",
            Self::Alias => "alias",
            Self::Anchor => "anchor",
            Self::Tag => "tag",
            Self::Scalar { .. } => "scalar",
        }
    }
}

/// A classified lexical unit with its source span.
///
/// Tokens are read-only input to the linter; nothing downstream mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub start: Mark,
    pub end: Mark,
}

impl Token {
    #[must_use]
    pub const fn new(kind: TokenKind, start: Mark, end: Mark) -> Self {
        Self { kind, start, end }
    }

    /// The scalar value and style, if this is a scalar token.
    #[must_use]
    pub fn scalar(&self) -> Option<(&str, ScalarStyle)> {
        match &self.kind {
            TokenKind::Scalar { value, style } => Some((value.as_str(), *style)),
            _ => None,
        }
    }
}
