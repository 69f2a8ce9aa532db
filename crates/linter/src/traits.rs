//! Rule contract.
//!
//! A rule is either a token rule, invoked once per token with a sliding
//! window and a private context, or a line rule, invoked once per physical
//! line. Both declare their options as a typed struct: the struct's
//! `Default` is the rule's default configuration and its `Deserialize`
//! impl is the schema user overrides are validated against.
use crate::context::TokenWindow;
use crate::diagnostics::LintDiagnostic;
use crate::error::TokenStreamError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use yamlcheck_types::{DiagnosticSeverity, Line};

/// Base trait for all lint rules
pub trait LintRule: Send + Sync {
    /// Unique identifier for this rule (e.g., `"key-duplicates"`)
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Default severity (can be overridden by config)
    fn default_severity(&self) -> DiagnosticSeverity;

    /// Whether the `recommended` preset enables this rule
    fn recommended(&self) -> bool;
}

/// Typed option set of a rule.
///
/// Implemented for every `Default + Serialize + Deserialize` type. Option
/// structs use `#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]`
/// so that missing keys fall back to defaults while unknown keys and wrong
/// value types are rejected.
pub trait RuleOptions: Default + Serialize + DeserializeOwned + Send + Sync + 'static {}

impl<T> RuleOptions for T where T: Default + Serialize + DeserializeOwned + Send + Sync + 'static {}

/// Options of a rule that takes none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoOptions {}

/// Lint rule that runs on the token stream
///
/// `Context` is created with `Default` at the start of each run and handed
/// to every invocation of that run. No other rule can see it.
pub trait TokenLintRule: LintRule {
    type Options: RuleOptions;
    type Context: Default;

    /// Check one token
    ///
    /// An `Err` means the token stream itself is inconsistent and aborts the run.
    fn check(
        &self,
        options: &Self::Options,
        window: &TokenWindow<'_>,
        context: &mut Self::Context,
    ) -> Result<Vec<LintDiagnostic>, TokenStreamError>;
}

/// Lint rule that runs on physical lines
pub trait LineLintRule: LintRule {
    type Options: RuleOptions;

    /// Check one line
    fn check(&self, options: &Self::Options, line: &Line<'_>) -> Vec<LintDiagnostic>;
}
