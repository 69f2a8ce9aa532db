//! Structural frame tracking shared by the key rules.
//!
//! Each rule that needs to know "which keys have I already seen in the
//! current mapping" owns its own [`KeyStack`] as its token-rule context.
use crate::context::TokenWindow;
use crate::error::TokenStreamError;
use yamlcheck_types::{Token, TokenKind};

/// Mapping key that merges another mapping in; never checked or recorded.
pub const MERGE_KEY: &str = "<<";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    Mapping,
    Sequence,
}

/// One nesting level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub kind: FrameKind,
    keys: Vec<String>,
}

impl Frame {
    #[must_use]
    pub const fn new(kind: FrameKind) -> Self {
        Self {
            kind,
            keys: Vec::new(),
        }
    }

    /// Keys recorded at this level, in insertion order
    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|seen| seen == key)
    }

    pub fn record(&mut self, key: &str) {
        self.keys.push(key.to_string());
    }
}

/// A scalar key found directly inside a mapping
#[derive(Debug)]
pub struct KeyVisit<'s, 't> {
    /// The mapping frame the key belongs to
    pub frame: &'s mut Frame,
    /// Literal text of the key
    pub key: &'t str,
    /// The scalar token holding the key
    pub token: &'t Token,
}

/// Stack of [`Frame`]s, one per open mapping or sequence
#[derive(Debug, Default)]
pub struct KeyStack {
    frames: Vec<Frame>,
}

impl KeyStack {
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Advance the stack over the current token
    ///
    /// Returns a [`KeyVisit`] when the token is a key marker followed by a
    /// scalar inside a mapping, unless the scalar is the merge key.
    pub fn track<'s, 't>(
        &'s mut self,
        window: &TokenWindow<'t>,
    ) -> Result<Option<KeyVisit<'s, 't>>, TokenStreamError> {
        let token = window.token;
        match &token.kind {
            TokenKind::BlockMappingStart | TokenKind::FlowMappingStart => {
                self.frames.push(Frame::new(FrameKind::Mapping));
            }
            TokenKind::BlockSequenceStart | TokenKind::FlowSequenceStart => {
                self.frames.push(Frame::new(FrameKind::Sequence));
            }
            kind if kind.is_collection_end() => {
                if self.frames.pop().is_none() {
                    return Err(TokenStreamError::UnmatchedEnd {
                        kind: kind.name(),
                        mark: token.start,
                    });
                }
            }
            TokenKind::StreamEnd => {
                if !self.frames.is_empty() {
                    return Err(TokenStreamError::UnclosedCollections {
                        depth: self.frames.len(),
                        mark: token.start,
                    });
                }
            }
            TokenKind::Key => {
                let Some(next) = window.next else {
                    return Ok(None);
                };
                let Some((key, _)) = next.scalar() else {
                    return Ok(None);
                };
                if key == MERGE_KEY {
                    return Ok(None);
                }
                return Ok(self
                    .frames
                    .last_mut()
                    .filter(|frame| frame.kind == FrameKind::Mapping)
                    .map(|frame| KeyVisit {
                        frame,
                        key,
                        token: next,
                    }));
            }
            _ => {}
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Document;
    use yamlcheck_types::Mark;

    fn at(kind: TokenKind, offset: usize) -> Token {
        Token::new(kind, Mark::new(0, offset, offset), Mark::new(0, offset, offset))
    }

    fn run(tokens: &[Token]) -> (KeyStack, Vec<String>, Result<(), TokenStreamError>) {
        let document = Document::new("", tokens);
        let mut stack = KeyStack::default();
        let mut visited = Vec::new();
        let mut outcome = Ok(());
        for index in 0..tokens.len() {
            match stack.track(&document.window(index)) {
                Ok(Some(KeyVisit { frame, key, .. })) => {
                    visited.push(key.to_string());
                    frame.record(key);
                }
                Ok(None) => {}
                Err(err) => {
                    outcome = Err(err);
                    break;
                }
            }
        }
        (stack, visited, outcome)
    }

    #[test]
    fn test_balanced_stream_leaves_stack_empty() {
        let tokens = vec![
            at(TokenKind::StreamStart, 0),
            at(TokenKind::FlowMappingStart, 0),
            at(TokenKind::Key, 1),
            at(TokenKind::plain("a"), 1),
            at(TokenKind::Value, 2),
            at(TokenKind::FlowSequenceStart, 4),
            at(TokenKind::FlowSequenceEnd, 5),
            at(TokenKind::FlowMappingEnd, 6),
            at(TokenKind::StreamEnd, 7),
        ];
        let (stack, visited, result) = run(&tokens);
        assert!(result.is_ok());
        assert!(stack.is_empty());
        assert_eq!(visited, vec!["a"]);
    }

    #[test]
    fn test_keys_inside_sequences_are_ignored() {
        let tokens = vec![
            at(TokenKind::FlowSequenceStart, 0),
            at(TokenKind::Key, 1),
            at(TokenKind::plain("a"), 1),
            at(TokenKind::FlowSequenceEnd, 5),
        ];
        let (_, visited, result) = run(&tokens);
        assert!(result.is_ok());
        assert!(visited.is_empty());
    }

    #[test]
    fn test_merge_key_is_skipped() {
        let tokens = vec![
            at(TokenKind::BlockMappingStart, 0),
            at(TokenKind::Key, 0),
            at(TokenKind::plain(MERGE_KEY), 0),
            at(TokenKind::BlockEnd, 4),
        ];
        let (_, visited, _) = run(&tokens);
        assert!(visited.is_empty());
    }

    #[test]
    fn test_underflow_is_an_error() {
        let tokens = vec![at(TokenKind::StreamStart, 0), at(TokenKind::BlockEnd, 3)];
        let (_, _, result) = run(&tokens);
        assert_eq!(
            result,
            Err(TokenStreamError::UnmatchedEnd {
                kind: "block-end",
                mark: Mark::new(0, 3, 3),
            })
        );
    }

    #[test]
    fn test_unclosed_collection_at_stream_end_is_an_error() {
        let tokens = vec![
            at(TokenKind::StreamStart, 0),
            at(TokenKind::BlockMappingStart, 0),
            at(TokenKind::BlockSequenceStart, 2),
            at(TokenKind::BlockEnd, 5),
            at(TokenKind::StreamEnd, 6),
        ];
        let (stack, _, result) = run(&tokens);
        assert_eq!(stack.depth(), 1);
        assert!(matches!(
            result,
            Err(TokenStreamError::UnclosedCollections { depth: 1, .. })
        ));
    }
}
