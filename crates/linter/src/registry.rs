//! Registry of available lint rules.
//!
//! Rules are registered through [`RuleRegistryBuilder`] in a fixed order; that
//! order breaks ties when diagnostics of several rules share a position.
use crate::context::TokenWindow;
use crate::diagnostics::LintDiagnostic;
use crate::error::{ConfigError, TokenStreamError};
use crate::rules;
use crate::traits::{LineLintRule, LintRule, RuleOptions, TokenLintRule};
use std::collections::HashMap;
use std::sync::Arc;
use yamlcheck_types::Line;

/// Deserialize user overrides onto the defaults of `O`
fn resolve_options<O: RuleOptions>(
    rule: &'static str,
    raw: Option<&serde_json::Value>,
) -> Result<O, ConfigError> {
    match raw {
        None | Some(serde_json::Value::Null) => Ok(O::default()),
        Some(value) => serde_json::from_value(value.clone())
            .map_err(|source| ConfigError::InvalidOptions { rule, source }),
    }
}

fn default_options_json<O: RuleOptions>() -> serde_json::Value {
    serde_json::to_value(O::default()).unwrap_or(serde_json::Value::Null)
}

/// One run of a token rule, owning that run's context
pub(crate) trait TokenPass {
    fn check(&mut self, window: &TokenWindow<'_>)
        -> Result<Vec<LintDiagnostic>, TokenStreamError>;
}

/// A token rule with resolved options
pub(crate) trait PreparedTokenRule: Send + Sync {
    fn begin(&self) -> Box<dyn TokenPass + '_>;
}

/// A line rule with resolved options
pub(crate) trait PreparedLineRule: Send + Sync {
    fn check(&self, line: &Line<'_>) -> Vec<LintDiagnostic>;
}

struct TokenRun<'p, R: TokenLintRule> {
    rule: &'p R,
    options: &'p R::Options,
    context: R::Context,
}

impl<R: TokenLintRule> TokenPass for TokenRun<'_, R> {
    fn check(
        &mut self,
        window: &TokenWindow<'_>,
    ) -> Result<Vec<LintDiagnostic>, TokenStreamError> {
        self.rule.check(self.options, window, &mut self.context)
    }
}

struct PreparedToken<R: TokenLintRule> {
    rule: Arc<R>,
    options: R::Options,
}

impl<R: TokenLintRule + 'static> PreparedTokenRule for PreparedToken<R> {
    fn begin(&self) -> Box<dyn TokenPass + '_> {
        Box::new(TokenRun {
            rule: self.rule.as_ref(),
            options: &self.options,
            context: R::Context::default(),
        })
    }
}

struct PreparedLine<R: LineLintRule> {
    rule: Arc<R>,
    options: R::Options,
}

impl<R: LineLintRule + 'static> PreparedLineRule for PreparedLine<R> {
    fn check(&self, line: &Line<'_>) -> Vec<LintDiagnostic> {
        self.rule.check(&self.options, line)
    }
}

/// Type-erased access to a registered rule
trait ErasedRule: Send + Sync {
    fn rule(&self) -> &dyn LintRule;
    fn default_options(&self) -> serde_json::Value;
    fn prepare(&self, options: Option<&serde_json::Value>) -> Result<Prepared, ConfigError>;
}

/// A rule ready to run, tagged with its shape
pub(crate) enum Prepared {
    Token(Box<dyn PreparedTokenRule>),
    Line(Box<dyn PreparedLineRule>),
}

struct TokenRuleHandle<R>(Arc<R>);

impl<R: TokenLintRule + 'static> ErasedRule for TokenRuleHandle<R> {
    fn rule(&self) -> &dyn LintRule {
        self.0.as_ref()
    }

    fn default_options(&self) -> serde_json::Value {
        default_options_json::<R::Options>()
    }

    fn prepare(&self, options: Option<&serde_json::Value>) -> Result<Prepared, ConfigError> {
        let options = resolve_options::<R::Options>(self.0.name(), options)?;
        Ok(Prepared::Token(Box::new(PreparedToken {
            rule: Arc::clone(&self.0),
            options,
        })))
    }
}

struct LineRuleHandle<R>(Arc<R>);

impl<R: LineLintRule + 'static> ErasedRule for LineRuleHandle<R> {
    fn rule(&self) -> &dyn LintRule {
        self.0.as_ref()
    }

    fn default_options(&self) -> serde_json::Value {
        default_options_json::<R::Options>()
    }

    fn prepare(&self, options: Option<&serde_json::Value>) -> Result<Prepared, ConfigError> {
        let options = resolve_options::<R::Options>(self.0.name(), options)?;
        Ok(Prepared::Line(Box::new(PreparedLine {
            rule: Arc::clone(&self.0),
            options,
        })))
    }
}

/// Shape of a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Token,
    Line,
}

/// A rule in the registry
pub struct RegisteredRule {
    kind: RuleKind,
    handle: Box<dyn ErasedRule>,
}

impl RegisteredRule {
    #[must_use]
    pub const fn kind(&self) -> RuleKind {
        self.kind
    }

    #[must_use]
    pub fn rule(&self) -> &dyn LintRule {
        self.handle.rule()
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.handle.rule().name()
    }

    /// Default options as JSON, keyed by option name
    #[must_use]
    pub fn default_options(&self) -> serde_json::Value {
        self.handle.default_options()
    }

    /// Validate `options` against the rule's schema and bind them
    pub(crate) fn prepare(
        &self,
        options: Option<&serde_json::Value>,
    ) -> Result<Prepared, ConfigError> {
        self.handle.prepare(options)
    }
}

impl std::fmt::Debug for RegisteredRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredRule")
            .field("name", &self.name())
            .field("kind", &self.kind)
            .finish()
    }
}

/// Fixed, ordered set of rules with lookup by name
#[derive(Debug, Default)]
pub struct RuleRegistry {
    rules: Vec<RegisteredRule>,
    by_name: HashMap<&'static str, usize>,
}

impl RuleRegistry {
    #[must_use]
    pub fn builder() -> RuleRegistryBuilder {
        RuleRegistryBuilder::default()
    }

    /// Registry holding every built-in rule
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::default();
        for rule in rules::builtin_rules().rules {
            registry.insert(rule);
        }
        registry
    }

    fn insert(&mut self, rule: RegisteredRule) {
        self.by_name.insert(rule.name(), self.rules.len());
        self.rules.push(rule);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RegisteredRule> {
        self.by_name.get(name).map(|&index| &self.rules[index])
    }

    /// Rules in registration order
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredRule> {
        self.rules.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule names in registration order
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(RegisteredRule::name).collect()
    }
}

/// Builder for [`RuleRegistry`]
#[derive(Default)]
pub struct RuleRegistryBuilder {
    rules: Vec<RegisteredRule>,
}

impl RuleRegistryBuilder {
    /// Register a token rule
    #[must_use]
    pub fn token_rule<R: TokenLintRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(RegisteredRule {
            kind: RuleKind::Token,
            handle: Box::new(TokenRuleHandle(Arc::new(rule))),
        });
        self
    }

    /// Register a line rule
    #[must_use]
    pub fn line_rule<R: LineLintRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(RegisteredRule {
            kind: RuleKind::Line,
            handle: Box::new(LineRuleHandle(Arc::new(rule))),
        });
        self
    }

    /// Register every built-in rule
    #[must_use]
    pub fn with_builtin_rules(mut self) -> Self {
        self.rules.extend(rules::builtin_rules().rules);
        self
    }

    /// Finish the registry
    ///
    /// Fails if two rules share a name.
    pub fn build(self) -> Result<RuleRegistry, ConfigError> {
        let mut registry = RuleRegistry::default();
        for rule in self.rules {
            if registry.get(rule.name()).is_some() {
                return Err(ConfigError::DuplicateRule(rule.name()));
            }
            registry.insert(rule);
        }
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names_are_unique() {
        let registry = RuleRegistry::builder()
            .with_builtin_rules()
            .build()
            .unwrap();
        assert_eq!(registry.len(), RuleRegistry::builtin().len());
    }

    #[test]
    fn test_builtin_registration_order() {
        let registry = RuleRegistry::builtin();
        assert_eq!(
            registry.names(),
            vec![
                "colons",
                "commas",
                "document-end",
                "document-start",
                "empty-lines",
                "empty-values",
                "hyphens",
                "key-duplicates",
                "key-ordering",
                "line-length",
                "new-line-at-end-of-file",
                "new-lines",
                "octal-values",
                "trailing-spaces",
            ]
        );
    }

    #[test]
    fn test_lookup_by_name() {
        let registry = RuleRegistry::builtin();
        let rule = registry.get("key-duplicates").unwrap();
        assert_eq!(rule.kind(), RuleKind::Token);
        assert_eq!(rule.name(), "key-duplicates");

        let rule = registry.get("trailing-spaces").unwrap();
        assert_eq!(rule.kind(), RuleKind::Line);

        assert!(registry.get("no-such-rule").is_none());
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let result = RuleRegistry::builder()
            .token_rule(rules::KeyDuplicatesRuleImpl)
            .token_rule(rules::KeyDuplicatesRuleImpl)
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::DuplicateRule("key-duplicates"))
        ));
    }

    #[test]
    fn test_default_options() {
        let registry = RuleRegistry::builtin();
        let colons = registry.get("colons").unwrap().default_options();
        assert_eq!(
            colons,
            serde_json::json!({ "max-spaces-before": 0, "max-spaces-after": 1 })
        );

        let trailing = registry.get("trailing-spaces").unwrap().default_options();
        assert_eq!(trailing, serde_json::json!({}));
    }

    #[test]
    fn test_prepare_rejects_unknown_option() {
        let registry = RuleRegistry::builtin();
        let options = serde_json::json!({ "max-spaces-around": 1 });
        let result = registry.get("colons").unwrap().prepare(Some(&options));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidOptions { rule: "colons", .. })
        ));
    }

    #[test]
    fn test_prepare_rejects_wrong_type() {
        let registry = RuleRegistry::builtin();
        let options = serde_json::json!({ "present": "yes" });
        let result = registry.get("document-start").unwrap().prepare(Some(&options));
        assert!(result.is_err());
    }

    #[test]
    fn test_prepare_accepts_partial_options() {
        let registry = RuleRegistry::builtin();
        let options = serde_json::json!({ "max-spaces-after": 2 });
        let prepared = registry.get("colons").unwrap().prepare(Some(&options));
        assert!(matches!(prepared, Ok(Prepared::Token(_))));
    }
}
