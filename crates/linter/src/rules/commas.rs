use super::spacing::{spaces_after, spaces_before, Spacing};
use crate::context::TokenWindow;
use crate::diagnostics::LintDiagnostic;
use crate::error::TokenStreamError;
use crate::traits::{LintRule, TokenLintRule};
use serde::{Deserialize, Serialize};
use yamlcheck_types::{DiagnosticSeverity, TokenKind};

const NAME: &str = "commas";
const TOO_MANY_BEFORE: &str = "too many spaces before comma";

/// Options for [`CommasRuleImpl`]
///
/// A negative bound disables that check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct CommasOptions {
    pub max_spaces_before: i64,
    pub min_spaces_after: i64,
    pub max_spaces_after: i64,
}

impl Default for CommasOptions {
    fn default() -> Self {
        Self {
            max_spaces_before: 0,
            min_spaces_after: 1,
            max_spaces_after: 1,
        }
    }
}

/// Lint rule that bounds the spaces around `,` in flow collections
pub struct CommasRuleImpl;

impl LintRule for CommasRuleImpl {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Limits the number of spaces before and after commas"
    }

    fn default_severity(&self) -> DiagnosticSeverity {
        DiagnosticSeverity::Error
    }

    fn recommended(&self) -> bool {
        true
    }
}

impl TokenLintRule for CommasRuleImpl {
    type Options = CommasOptions;
    type Context = ();

    fn check(
        &self,
        options: &CommasOptions,
        window: &TokenWindow<'_>,
        _context: &mut (),
    ) -> Result<Vec<LintDiagnostic>, TokenStreamError> {
        let token = window.token;
        if !matches!(token.kind, TokenKind::FlowEntry) {
            return Ok(Vec::new());
        }

        let mut diagnostics = Vec::new();

        // A comma starting its own line is never preceded by allowed spacing
        let on_new_line = window
            .prev
            .is_some_and(|prev| prev.end.line < token.start.line);
        if on_new_line {
            if options.max_spaces_before >= 0 {
                diagnostics.push(LintDiagnostic::new(
                    token.start.line + 1,
                    token.start.column.max(1),
                    TOO_MANY_BEFORE,
                    NAME,
                ));
            }
        } else {
            let before = Spacing::max(NAME, options.max_spaces_before, TOO_MANY_BEFORE);
            diagnostics.extend(spaces_before(window, &before));
        }

        let after = Spacing {
            rule: NAME,
            min: options.min_spaces_after,
            max: options.max_spaces_after,
            min_desc: "too few spaces after comma",
            max_desc: "too many spaces after comma",
        };
        diagnostics.extend(spaces_after(window, &after));

        Ok(diagnostics)
    }
}
