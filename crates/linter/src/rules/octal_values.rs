use crate::context::TokenWindow;
use crate::diagnostics::LintDiagnostic;
use crate::error::TokenStreamError;
use crate::traits::{LintRule, TokenLintRule};
use serde::{Deserialize, Serialize};
use yamlcheck_types::{DiagnosticSeverity, TokenKind};

/// Options for [`OctalValuesRuleImpl`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct OctalValuesOptions {
    /// Flag YAML 1.1 style `010`
    pub forbid_implicit_octal: bool,
    /// Flag YAML 1.2 style `0o10`
    pub forbid_explicit_octal: bool,
}

impl Default for OctalValuesOptions {
    fn default() -> Self {
        Self {
            forbid_implicit_octal: true,
            forbid_explicit_octal: true,
        }
    }
}

/// Lint rule that flags plain scalars a parser may read as octal numbers
///
/// Tagged scalars (`!!str 010`) and quoted scalars are left alone.
pub struct OctalValuesRuleImpl;

impl LintRule for OctalValuesRuleImpl {
    fn name(&self) -> &'static str {
        "octal-values"
    }

    fn description(&self) -> &'static str {
        "Forbids implicit and explicit octal values"
    }

    fn default_severity(&self) -> DiagnosticSeverity {
        DiagnosticSeverity::Error
    }

    fn recommended(&self) -> bool {
        false
    }
}

impl TokenLintRule for OctalValuesRuleImpl {
    type Options = OctalValuesOptions;
    type Context = ();

    fn check(
        &self,
        options: &OctalValuesOptions,
        window: &TokenWindow<'_>,
        _context: &mut (),
    ) -> Result<Vec<LintDiagnostic>, TokenStreamError> {
        if window
            .prev
            .is_some_and(|prev| matches!(prev.kind, TokenKind::Tag))
        {
            return Ok(Vec::new());
        }
        let token = window.token;
        let Some((value, style)) = token.scalar() else {
            return Ok(Vec::new());
        };
        if !style.is_plain() {
            return Ok(Vec::new());
        }

        let message = if options.forbid_implicit_octal && is_implicit_octal(value) {
            format!("forbidden implicit octal value \"{value}\"")
        } else if options.forbid_explicit_octal && is_explicit_octal(value) {
            format!("forbidden explicit octal value \"{value}\"")
        } else {
            return Ok(Vec::new());
        };

        Ok(vec![LintDiagnostic::new(
            token.start.line + 1,
            token.end.column + 1,
            message,
            self.name(),
        )])
    }
}

fn is_implicit_octal(value: &str) -> bool {
    value.len() > 1
        && value.starts_with('0')
        && value.bytes().all(|byte| byte.is_ascii_digit())
}

fn is_explicit_octal(value: &str) -> bool {
    value.len() > 2
        && value
            .strip_prefix("0o")
            .is_some_and(|digits| digits.bytes().all(|byte| byte.is_ascii_digit()))
}
