use super::spacing::{spaces_after, Spacing};
use crate::context::TokenWindow;
use crate::diagnostics::LintDiagnostic;
use crate::error::TokenStreamError;
use crate::traits::{LintRule, TokenLintRule};
use serde::{Deserialize, Serialize};
use yamlcheck_types::{DiagnosticSeverity, TokenKind};

/// Options for [`HyphensRuleImpl`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct HyphensOptions {
    pub max_spaces_after: i64,
}

impl Default for HyphensOptions {
    fn default() -> Self {
        Self {
            max_spaces_after: 1,
        }
    }
}

/// Lint rule that bounds the spaces after a block sequence `-`
pub struct HyphensRuleImpl;

impl LintRule for HyphensRuleImpl {
    fn name(&self) -> &'static str {
        "hyphens"
    }

    fn description(&self) -> &'static str {
        "Limits the number of spaces after hyphens"
    }

    fn default_severity(&self) -> DiagnosticSeverity {
        DiagnosticSeverity::Error
    }

    fn recommended(&self) -> bool {
        true
    }
}

impl TokenLintRule for HyphensRuleImpl {
    type Options = HyphensOptions;
    type Context = ();

    fn check(
        &self,
        options: &HyphensOptions,
        window: &TokenWindow<'_>,
        _context: &mut (),
    ) -> Result<Vec<LintDiagnostic>, TokenStreamError> {
        if !matches!(window.token.kind, TokenKind::BlockEntry) {
            return Ok(Vec::new());
        }
        let spacing = Spacing::max(
            self.name(),
            options.max_spaces_after,
            "too many spaces after hyphen",
        );
        Ok(spaces_after(window, &spacing).into_iter().collect())
    }
}
