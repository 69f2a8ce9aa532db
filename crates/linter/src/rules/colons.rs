use super::spacing::{is_explicit_key, spaces_after, spaces_before, Spacing};
use crate::context::TokenWindow;
use crate::diagnostics::LintDiagnostic;
use crate::error::TokenStreamError;
use crate::traits::{LintRule, TokenLintRule};
use serde::{Deserialize, Serialize};
use yamlcheck_types::{DiagnosticSeverity, TokenKind};

const NAME: &str = "colons";

/// Options for [`ColonsRuleImpl`]
///
/// A negative bound disables that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct ColonsOptions {
    pub max_spaces_before: i64,
    pub max_spaces_after: i64,
}

impl Default for ColonsOptions {
    fn default() -> Self {
        Self {
            max_spaces_before: 0,
            max_spaces_after: 1,
        }
    }
}

/// Lint rule that bounds the spaces around `:` and after `?`
pub struct ColonsRuleImpl;

impl LintRule for ColonsRuleImpl {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Limits the number of spaces before and after colons"
    }

    fn default_severity(&self) -> DiagnosticSeverity {
        DiagnosticSeverity::Error
    }

    fn recommended(&self) -> bool {
        true
    }
}

impl TokenLintRule for ColonsRuleImpl {
    type Options = ColonsOptions;
    type Context = ();

    fn check(
        &self,
        options: &ColonsOptions,
        window: &TokenWindow<'_>,
        _context: &mut (),
    ) -> Result<Vec<LintDiagnostic>, TokenStreamError> {
        let mut diagnostics = Vec::new();

        match window.token.kind {
            TokenKind::Value if !follows_alias(window) => {
                let before = Spacing::max(
                    NAME,
                    options.max_spaces_before,
                    "too many spaces before colon",
                );
                let after = Spacing::max(
                    NAME,
                    options.max_spaces_after,
                    "too many spaces after colon",
                );
                diagnostics.extend(spaces_before(window, &before));
                diagnostics.extend(spaces_after(window, &after));
            }
            TokenKind::Key if is_explicit_key(window) => {
                let after = Spacing::max(
                    NAME,
                    options.max_spaces_after,
                    "too many spaces after question mark",
                );
                diagnostics.extend(spaces_after(window, &after));
            }
            _ => {}
        }

        Ok(diagnostics)
    }
}

/// `*alias :` needs exactly one space, or the colon would read as part of the alias name.
/// Such a colon is not measured on either side.
fn follows_alias(window: &TokenWindow<'_>) -> bool {
    window.prev.is_some_and(|prev| {
        matches!(prev.kind, TokenKind::Alias)
            && window.token.start.pointer.saturating_sub(prev.end.pointer) == 1
    })
}
