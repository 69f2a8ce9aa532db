use super::MarkerOptions;
use crate::context::TokenWindow;
use crate::diagnostics::LintDiagnostic;
use crate::error::TokenStreamError;
use crate::traits::{LintRule, TokenLintRule};
use yamlcheck_types::{DiagnosticSeverity, TokenKind};

/// Lint rule that requires or forbids the `---` document start marker
pub struct DocumentStartRuleImpl;

impl LintRule for DocumentStartRuleImpl {
    fn name(&self) -> &'static str {
        "document-start"
    }

    fn description(&self) -> &'static str {
        "Requires or forbids the document start marker"
    }

    fn default_severity(&self) -> DiagnosticSeverity {
        DiagnosticSeverity::Warning
    }

    fn recommended(&self) -> bool {
        true
    }
}

impl TokenLintRule for DocumentStartRuleImpl {
    type Options = MarkerOptions;
    type Context = ();

    fn check(
        &self,
        options: &MarkerOptions,
        window: &TokenWindow<'_>,
        _context: &mut (),
    ) -> Result<Vec<LintDiagnostic>, TokenStreamError> {
        let token = window.token;
        let mut diagnostics = Vec::new();

        if options.present {
            let opens_document = window.prev.is_some_and(|prev| {
                matches!(
                    prev.kind,
                    TokenKind::StreamStart | TokenKind::DocumentEnd | TokenKind::Directive
                )
            });
            let is_marker = matches!(
                token.kind,
                TokenKind::DocumentStart | TokenKind::Directive | TokenKind::StreamEnd
            );
            if opens_document && !is_marker {
                diagnostics.push(LintDiagnostic::new(
                    token.start.line + 1,
                    1,
                    "missing document start \"---\"",
                    self.name(),
                ));
            }
        } else if matches!(token.kind, TokenKind::DocumentStart) {
            diagnostics.push(LintDiagnostic::new(
                token.start.line + 1,
                token.start.column + 1,
                "found forbidden document start \"---\"",
                self.name(),
            ));
        }

        Ok(diagnostics)
    }
}
