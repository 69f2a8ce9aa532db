use crate::context::TokenWindow;
use crate::diagnostics::LintDiagnostic;
use crate::error::TokenStreamError;
use crate::structure::{KeyStack, KeyVisit};
use crate::traits::{LintRule, TokenLintRule};
use regex::Regex;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use yamlcheck_types::DiagnosticSeverity;

/// Options for [`KeyOrderingRuleImpl`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct KeyOrderingOptions {
    /// Keys matching any of these patterns (anchored at the start of the
    /// key) are neither checked nor recorded
    pub ignored_keys: IgnoredKeys,
}

/// Compiled `ignored-keys` patterns
///
/// Serialized as the list of source patterns. An invalid pattern fails
/// deserialization, and so configuration.
#[derive(Debug, Clone, Default)]
pub struct IgnoredKeys(Vec<Regex>);

impl IgnoredKeys {
    /// Compile `patterns`
    pub fn new<I, S>(patterns: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        patterns
            .into_iter()
            .map(|pattern| Regex::new(pattern.as_ref()))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    #[must_use]
    pub fn matches(&self, key: &str) -> bool {
        self.0
            .iter()
            .any(|regex| regex.find(key).is_some_and(|found| found.start() == 0))
    }
}

impl Serialize for IgnoredKeys {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter().map(Regex::as_str))
    }
}

impl<'de> Deserialize<'de> for IgnoredKeys {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let patterns = Vec::<String>::deserialize(deserializer)?;
        Self::new(&patterns).map_err(D::Error::custom)
    }
}

/// Lint rule that requires mapping keys in code point order
///
/// A key is out of order when any earlier key of the same mapping sorts
/// after it.
pub struct KeyOrderingRuleImpl;

impl LintRule for KeyOrderingRuleImpl {
    fn name(&self) -> &'static str {
        "key-ordering"
    }

    fn description(&self) -> &'static str {
        "Requires mapping keys to be sorted"
    }

    fn default_severity(&self) -> DiagnosticSeverity {
        DiagnosticSeverity::Error
    }

    fn recommended(&self) -> bool {
        false
    }
}

impl TokenLintRule for KeyOrderingRuleImpl {
    type Options = KeyOrderingOptions;
    type Context = KeyStack;

    fn check(
        &self,
        options: &KeyOrderingOptions,
        window: &TokenWindow<'_>,
        stack: &mut KeyStack,
    ) -> Result<Vec<LintDiagnostic>, TokenStreamError> {
        let Some(KeyVisit { frame, key, token }) = stack.track(window)? else {
            return Ok(Vec::new());
        };
        if options.ignored_keys.matches(key) {
            return Ok(Vec::new());
        }

        if frame.keys().iter().any(|seen| seen.as_str() > key) {
            return Ok(vec![LintDiagnostic::new(
                token.start.line + 1,
                token.start.column + 1,
                format!("wrong ordering of key \"{key}\" in mapping"),
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
    use yamlcheck_types::{Token, TokenKind};

    /// One-line-per-key block mapping with single-character values
    fn mapping(source: &str) -> Vec<Token> {
        let mut builder = TokenStreamBuilder::new(source)
            .stream_start()
            .push(TokenKind::BlockMappingStart, 0..0);
        let mut offset = 0;
        for line in source.lines() {
            let colon = offset + line.find(':').unwrap();
            builder = builder
                .push(TokenKind::Key, offset..offset)
                .plain(offset..colon)
                .push(TokenKind::Value, colon..colon + 1)
                .plain(colon + 2..colon + 3);
            offset += line.len() + 1;
        }
        builder
            .push(TokenKind::BlockEnd, source.len()..source.len())
            .stream_end()
            .build()
    }

    #[test]
    fn test_sorted_keys() {
        let source = "a: 1\nb: 2\nc: 3\n";
        let found = run_token_rule(
            &KeyOrderingRuleImpl,
            &KeyOrderingOptions::default(),
            source,
            &mapping(source),
        );
        assert!(found.unwrap().is_empty());
    }

    #[test]
    fn test_out_of_order_key() {
        let source = "b: 1\na: 2\nc: 3\n";
        let found = run_token_rule(
            &KeyOrderingRuleImpl,
            &KeyOrderingOptions::default(),
            source,
            &mapping(source),
        )
        .unwrap();
        assert_eq!(
            positions(&found),
            vec![(2, 1, "wrong ordering of key \"a\" in mapping")]
        );
    }

    #[test]
    fn test_compared_against_every_earlier_key() {
        // `b` is flagged against `c` even though `a` directly precedes it
        let source = "c: 1\na: 2\nb: 3\n";
        let found = run_token_rule(
            &KeyOrderingRuleImpl,
            &KeyOrderingOptions::default(),
            source,
            &mapping(source),
        )
        .unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[1].message, "wrong ordering of key \"b\" in mapping");
    }

    #[test]
    fn test_code_point_order() {
        let source = "B: 1\na: 2\n";
        let found = run_token_rule(
            &KeyOrderingRuleImpl,
            &KeyOrderingOptions::default(),
            source,
            &mapping(source),
        );
        assert!(found.unwrap().is_empty());
    }

    #[test]
    fn test_keys_outside_any_collection_are_not_tracked() {
        let source = "b: 1\na: 2\na: 3\n";
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
            .push(TokenKind::Key, 10..10)
            .plain(10..11)
            .push(TokenKind::Value, 11..12)
            .plain(13..14)
            .stream_end()
            .build();
        let found = run_token_rule(
            &KeyOrderingRuleImpl,
            &KeyOrderingOptions::default(),
            source,
            &tokens,
        );
        assert!(found.unwrap().is_empty());
    }

    #[test]
    fn test_each_mapping_is_ordered_on_its_own() {
        // The second mapping starts fresh, and the nested one does not see `c`
        let source = "- c: 1\n- b:\n    a: 2\n";
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
            .push(TokenKind::BlockMappingStart, 16..16)
            .push(TokenKind::Key, 16..16)
            .plain(16..17)
            .push(TokenKind::Value, 17..18)
            .plain(19..20)
            .push(TokenKind::BlockEnd, 21..21)
            .push(TokenKind::BlockEnd, 21..21)
            .push(TokenKind::BlockEnd, 21..21)
            .stream_end()
            .build();
        let found = run_token_rule(
            &KeyOrderingRuleImpl,
            &KeyOrderingOptions::default(),
            source,
            &tokens,
        );
        assert!(found.unwrap().is_empty());
    }

    #[test]
    fn test_ignored_keys() {
        let source = "name: 1\napiVersion: 2\nb: 3\n";
        let options = KeyOrderingOptions {
            ignored_keys: IgnoredKeys::new(["name"]).unwrap(),
        };
        let found = run_token_rule(&KeyOrderingRuleImpl, &options, source, &mapping(source));
        assert!(found.unwrap().is_empty());
    }

    #[test]
    fn test_ignored_keys_from_json() {
        let options: KeyOrderingOptions =
            serde_json::from_value(serde_json::json!({ "ignored-keys": ["^x-", "id"] })).unwrap();
        assert!(options.ignored_keys.matches("x-custom"));
        assert!(options.ignored_keys.matches("identifier"));
        assert!(!options.ignored_keys.matches("my-id"));
        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            serde_json::json!({ "ignored-keys": ["^x-", "id"] })
        );

        let invalid = serde_json::from_value::<KeyOrderingOptions>(
            serde_json::json!({ "ignored-keys": ["("] }),
        );
        assert!(invalid.is_err());
    }
}
