use crate::context::TokenWindow;
use crate::diagnostics::LintDiagnostic;
use crate::error::TokenStreamError;
use crate::structure::{KeyStack, KeyVisit};
use crate::traits::{LintRule, NoOptions, TokenLintRule};
use yamlcheck_types::DiagnosticSeverity;

/// Lint rule that detects a key repeated within one mapping
///
/// Keys are compared by their literal scalar text, so `a` and `"a"` collide
/// while `1` and `01` do not. The merge key `<<` may repeat.
pub struct KeyDuplicatesRuleImpl;

impl LintRule for KeyDuplicatesRuleImpl {
    fn name(&self) -> &'static str {
        "key-duplicates"
    }

    fn description(&self) -> &'static str {
        "Detects duplicate keys in mappings"
    }

    fn default_severity(&self) -> DiagnosticSeverity {
        DiagnosticSeverity::Error
    }

    fn recommended(&self) -> bool {
        true
    }
}

impl TokenLintRule for KeyDuplicatesRuleImpl {
    type Options = NoOptions;
    type Context = KeyStack;

    fn check(
        &self,
        _options: &NoOptions,
        window: &TokenWindow<'_>,
        stack: &mut KeyStack,
    ) -> Result<Vec<LintDiagnostic>, TokenStreamError> {
        let Some(KeyVisit { frame, key, token }) = stack.track(window)? else {
            return Ok(Vec::new());
        };

        if frame.contains(key) {
            return Ok(vec![LintDiagnostic::new(
                token.start.line + 1,
                token.start.column + 1,
                format!("duplication of key \"{key}\" in mapping"),
                self.name(),
            )]);
        }

        frame.record(key);
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::{positions, run_token_rule};
    use yamlcheck_test_utils::TokenStreamBuilder;
    use yamlcheck_types::{ScalarStyle, TokenKind};

    #[test]
    fn test_duplicate_in_flat_mapping() {
        let source = "a: 1\nb: 2\na: 3\n";
        let tokens = TokenStreamBuilder::new(source)
            .stream_start()
            .push(TokenKind::BlockMappingStart, 0..0)
            .push(TokenKind::Key, 0..0)
            .plain(0..1)
            .push(TokenKind::Value, 1..2)
            .plain(3..4)
            .push(TokenKind::Key, 5..5)
            .plain(5..6)
            .push(TokenKind::Value, 6..7)
            .plain(8..9)
            .push(TokenKind::Key, 10..10)
            .plain(10..11)
            .push(TokenKind::Value, 11..12)
            .plain(13..14)
            .push(TokenKind::BlockEnd, 15..15)
            .stream_end()
            .build();
        let found =
            run_token_rule(&KeyDuplicatesRuleImpl, &NoOptions {}, source, &tokens).unwrap();
        assert_eq!(
            positions(&found),
            vec![(3, 1, "duplication of key \"a\" in mapping")]
        );
    }

    #[test]
    fn test_same_key_in_sibling_mappings() {
        let source = "- a: 1\n- a: 2\n";
        let tokens = TokenStreamBuilder::new(source)
            .stream_start()
            .push(TokenKind::BlockSequenceStart, 0..0)
            .push(TokenKind::BlockEntry, 0..1)
            .push(TokenKind::BlockMappingStart, 2..2)
            .push(TokenKind::Key, 2..2)
            .plain(2..3)
            .push(TokenKind::Value, 3..4)
            .plain(5..6)
            .push(TokenKind::BlockEnd, 7..7)
            .push(TokenKind::BlockEntry, 7..8)
            .push(TokenKind::BlockMappingStart, 9..9)
            .push(TokenKind::Key, 9..9)
            .plain(9..10)
            .push(TokenKind::Value, 10..11)
            .plain(12..13)
            .push(TokenKind::BlockEnd, 14..14)
            .push(TokenKind::BlockEnd, 14..14)
            .stream_end()
            .build();
        let found = run_token_rule(&KeyDuplicatesRuleImpl, &NoOptions {}, source, &tokens);
        assert!(found.unwrap().is_empty());
    }

    #[test]
    fn test_quoting_does_not_hide_duplicate() {
        let source = "{a: 1, \"a\": 2}\n";
        let tokens = TokenStreamBuilder::new(source)
            .stream_start()
            .push(TokenKind::FlowMappingStart, 0..1)
            .push(TokenKind::Key, 1..1)
            .plain(1..2)
            .push(TokenKind::Value, 2..3)
            .plain(4..5)
            .push(TokenKind::FlowEntry, 5..6)
            .push(TokenKind::Key, 7..7)
            .scalar(7..10, "a", ScalarStyle::DoubleQuoted)
            .push(TokenKind::Value, 10..11)
            .plain(12..13)
            .push(TokenKind::FlowMappingEnd, 13..14)
            .stream_end()
            .build();
        let found =
            run_token_rule(&KeyDuplicatesRuleImpl, &NoOptions {}, source, &tokens).unwrap();
        assert_eq!(
            positions(&found),
            vec![(1, 8, "duplication of key \"a\" in mapping")]
        );
    }

    #[test]
    fn test_merge_keys_may_repeat() {
        let source = "<<: *a\n<<: *b\n";
        let tokens = TokenStreamBuilder::new(source)
            .stream_start()
            .push(TokenKind::BlockMappingStart, 0..0)
            .push(TokenKind::Key, 0..0)
            .plain(0..2)
            .push(TokenKind::Value, 2..3)
            .push(TokenKind::Alias, 4..6)
            .push(TokenKind::Key, 7..7)
            .plain(7..9)
            .push(TokenKind::Value, 9..10)
            .push(TokenKind::Alias, 11..13)
            .push(TokenKind::BlockEnd, 14..14)
            .stream_end()
            .build();
        let found = run_token_rule(&KeyDuplicatesRuleImpl, &NoOptions {}, source, &tokens);
        assert!(found.unwrap().is_empty());
    }

    #[test]
    fn test_keys_outside_any_collection_are_not_tracked() {
        let source = "a: 1\na: 2\n";
        let tokens = TokenStreamBuilder::new(source)
            .stream_start()
            .push(TokenKind::Key, 0..0)
            .plain(0..1)
            .push(TokenKind::Value, 1..2)
            .plain(3..4)
            .push(TokenKind::Key, 5..5)
            .plain(5..6)
            .push(TokenKind::Value, 6..7)
            .plain(8..9)
            .stream_end()
            .build();
        let found = run_token_rule(&KeyDuplicatesRuleImpl, &NoOptions {}, source, &tokens);
        assert!(found.unwrap().is_empty());
    }

    #[test]
    fn test_unbalanced_stream_is_rejected() {
        let source = "a: 1\n";
        let tokens = TokenStreamBuilder::new(source)
            .stream_start()
            .push(TokenKind::Key, 0..0)
            .plain(0..1)
            .push(TokenKind::Value, 1..2)
            .plain(3..4)
            .push(TokenKind::BlockEnd, 5..5)
            .stream_end()
            .build();
        let result = run_token_rule(&KeyDuplicatesRuleImpl, &NoOptions {}, source, &tokens);
        assert!(matches!(
            result,
            Err(TokenStreamError::UnmatchedEnd {
                kind: "block-end",
                ..
            })
        ));
    }
}
