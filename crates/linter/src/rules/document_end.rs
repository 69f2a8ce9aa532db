use super::MarkerOptions;
use crate::context::TokenWindow;
use crate::diagnostics::LintDiagnostic;
use crate::error::TokenStreamError;
use crate::traits::{LintRule, TokenLintRule};
use yamlcheck_types::{DiagnosticSeverity, TokenKind};

const MISSING: &str = "missing document end \"...\"";

/// Lint rule that requires or forbids the `...` document end marker
pub struct DocumentEndRuleImpl;

impl LintRule for DocumentEndRuleImpl {
    fn name(&self) -> &'static str {
        "document-end"
    }

    fn description(&self) -> &'static str {
        "Requires or forbids the document end marker"
    }

    fn default_severity(&self) -> DiagnosticSeverity {
        DiagnosticSeverity::Error
    }

    fn recommended(&self) -> bool {
        false
    }
}

impl TokenLintRule for DocumentEndRuleImpl {
    type Options = MarkerOptions;
    type Context = ();

    fn check(
        &self,
        options: &MarkerOptions,
        window: &TokenWindow<'_>,
        _context: &mut (),
    ) -> Result<Vec<LintDiagnostic>, TokenStreamError> {
        let token = window.token;
        let prev = window.prev.map(|prev| &prev.kind);
        let mut diagnostics = Vec::new();

        if options.present {
            match token.kind {
                TokenKind::StreamEnd
                    if !matches!(prev, Some(TokenKind::DocumentEnd | TokenKind::StreamStart)) =>
                {
                    // Stream end sits past the final line break, report on the last line
                    diagnostics.push(LintDiagnostic::new(
                        token.start.line.max(1),
                        1,
                        MISSING,
                        self.name(),
                    ));
                }
                TokenKind::DocumentStart
                    if !matches!(
                        prev,
                        Some(
                            TokenKind::DocumentEnd | TokenKind::StreamStart | TokenKind::Directive
                        )
                    ) =>
                {
                    diagnostics.push(LintDiagnostic::new(
                        token.start.line + 1,
                        1,
                        MISSING,
                        self.name(),
                    ));
                }
                _ => {}
            }
        } else if matches!(token.kind, TokenKind::DocumentEnd) {
            diagnostics.push(LintDiagnostic::new(
                token.start.line + 1,
                token.start.column + 1,
                "found forbidden document end \"...\"",
                self.name(),
            ));
        }

        Ok(diagnostics)
    }
}
