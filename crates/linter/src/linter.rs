use crate::config::LintConfig;
use crate::context::Document;
use crate::diagnostics::LintDiagnostic;
use crate::error::{ConfigError, LintError};
use crate::registry::{Prepared, PreparedLineRule, PreparedTokenRule, RuleRegistry};
use yamlcheck_types::{DiagnosticSeverity, Token};

/// A rule enabled for this linter, with its options already resolved
struct ActiveRule<P: ?Sized> {
    name: &'static str,
    /// Registration order, used to break position ties
    order: usize,
    severity: DiagnosticSeverity,
    rule: Box<P>,
}

/// Linter that runs configured lint rules
///
/// Construction validates the whole configuration; [`lint`](Self::lint) can
/// then be called any number of times, from any number of threads.
pub struct Linter {
    token_rules: Vec<ActiveRule<dyn PreparedTokenRule>>,
    line_rules: Vec<ActiveRule<dyn PreparedLineRule>>,
}

impl std::fmt::Debug for Linter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Linter")
            .field("token_rules", &self.token_rule_names())
            .field("line_rules", &self.line_rule_names())
            .finish()
    }
}

impl Linter {
    /// Create a linter from a registry and a configuration
    ///
    /// Fails on unknown rule names, unknown presets, and options that do not
    /// match a rule's schema. Options are validated for every configured rule,
    /// including disabled ones.
    #[tracing::instrument(skip_all, fields(registered = registry.len()))]
    pub fn new(registry: &RuleRegistry, config: &LintConfig) -> Result<Self, ConfigError> {
        config.validate(&registry.names())?;

        let mut token_rules = Vec::new();
        let mut line_rules = Vec::new();

        for (order, entry) in registry.iter().enumerate() {
            let name = entry.name();
            let meta = entry.rule();
            let prepared = entry.prepare(config.options(name))?;

            let Some(severity) =
                config.severity(name, meta.default_severity(), meta.recommended())
            else {
                tracing::trace!(rule = name, "Rule not enabled, skipping");
                continue;
            };

            match prepared {
                Prepared::Token(rule) => token_rules.push(ActiveRule {
                    name,
                    order,
                    severity,
                    rule,
                }),
                Prepared::Line(rule) => line_rules.push(ActiveRule {
                    name,
                    order,
                    severity,
                    rule,
                }),
            }
        }

        tracing::debug!(
            token_rules = token_rules.len(),
            line_rules = line_rules.len(),
            "Linter configured"
        );

        Ok(Self {
            token_rules,
            line_rules,
        })
    }

    /// Create a linter over the built-in rules
    pub fn builtin(config: &LintConfig) -> Result<Self, ConfigError> {
        Self::new(&RuleRegistry::builtin(), config)
    }

    /// Names of the enabled token rules, in registration order
    #[must_use]
    pub fn token_rule_names(&self) -> Vec<&'static str> {
        self.token_rules.iter().map(|active| active.name).collect()
    }

    /// Names of the enabled line rules, in registration order
    #[must_use]
    pub fn line_rule_names(&self) -> Vec<&'static str> {
        self.line_rules.iter().map(|active| active.name).collect()
    }

    /// Lint one document
    ///
    /// Runs the token phase, then the line phase, and returns every
    /// diagnostic sorted by `(line, column)`. Diagnostics at the same
    /// position keep the order in which their rules were registered.
    #[tracing::instrument(
        skip_all,
        fields(tokens = document.tokens().len(), lines = document.lines().len())
    )]
    pub fn lint(&self, document: &Document<'_>) -> Result<Vec<LintDiagnostic>, LintError> {
        let mut found: Vec<(usize, LintDiagnostic)> = Vec::new();

        self.run_token_phase(document, &mut found)?;
        self.run_line_phase(document, &mut found);

        found.sort_by_key(|(order, diagnostic)| (diagnostic.line, diagnostic.column, *order));

        tracing::debug!(total_diagnostics = found.len(), "Linting complete");
        Ok(found.into_iter().map(|(_, diagnostic)| diagnostic).collect())
    }

    fn run_token_phase(
        &self,
        document: &Document<'_>,
        found: &mut Vec<(usize, LintDiagnostic)>,
    ) -> Result<(), LintError> {
        if self.token_rules.is_empty() {
            return Ok(());
        }

        // One pass, and so one fresh context, per rule for this run
        let mut passes: Vec<_> = self
            .token_rules
            .iter()
            .map(|active| (active, active.rule.begin()))
            .collect();

        for index in 0..document.tokens().len() {
            let window = document.window(index);
            for (active, pass) in &mut passes {
                let diagnostics = pass.check(&window).map_err(|source| {
                    tracing::debug!(rule = active.name, error = %source, "Malformed token stream");
                    LintError::MalformedTokenStream {
                        rule: active.name,
                        source,
                    }
                })?;
                collect(*active, diagnostics, found);
            }
        }
        Ok(())
    }

    fn run_line_phase(&self, document: &Document<'_>, found: &mut Vec<(usize, LintDiagnostic)>) {
        for line in document.lines() {
            for active in &self.line_rules {
                collect(active, active.rule.check(line), found);
            }
        }
    }
}

/// Apply the configured severity and remember the rule's registration order
fn collect<P: ?Sized>(
    active: &ActiveRule<P>,
    diagnostics: Vec<LintDiagnostic>,
    found: &mut Vec<(usize, LintDiagnostic)>,
) {
    if diagnostics.is_empty() {
        return;
    }
    tracing::trace!(
        rule = active.name,
        diagnostics = diagnostics.len(),
        "Rule found issues"
    );
    found.extend(
        diagnostics
            .into_iter()
            .map(|diagnostic| (active.order, diagnostic.with_severity(active.severity))),
    );
}

/// Lint `buffer` and its token stream with the built-in rules
///
/// Convenience wrapper around [`Linter::builtin`] and [`Linter::lint`].
pub fn lint(
    buffer: &str,
    tokens: &[Token],
    config: &LintConfig,
) -> Result<Vec<LintDiagnostic>, LintError> {
    let linter = Linter::builtin(config)?;
    linter.lint(&Document::new(buffer, tokens))
}
