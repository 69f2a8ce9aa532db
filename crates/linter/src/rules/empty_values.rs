use crate::context::TokenWindow;
use crate::diagnostics::LintDiagnostic;
use crate::error::TokenStreamError;
use crate::traits::{LintRule, TokenLintRule};
use serde::{Deserialize, Serialize};
use yamlcheck_types::{DiagnosticSeverity, TokenKind};

/// Options for [`EmptyValuesRuleImpl`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
#[allow(clippy::struct_field_names)]
pub struct EmptyValuesOptions {
    pub forbid_in_block_mappings: bool,
    pub forbid_in_flow_mappings: bool,
    pub forbid_in_block_sequences: bool,
}

impl Default for EmptyValuesOptions {
    fn default() -> Self {
        Self {
            forbid_in_block_mappings: true,
            forbid_in_flow_mappings: true,
            forbid_in_block_sequences: true,
        }
    }
}

/// Lint rule that flags implicit null values
///
/// `key:` with nothing after it, `{a: }` and a bare `-` all produce a null
/// that is easy to write by accident.
pub struct EmptyValuesRuleImpl;

impl LintRule for EmptyValuesRuleImpl {
    fn name(&self) -> &'static str {
        "empty-values"
    }

    fn description(&self) -> &'static str {
        "Forbids empty values in mappings and sequences"
    }

    fn default_severity(&self) -> DiagnosticSeverity {
        DiagnosticSeverity::Error
    }

    fn recommended(&self) -> bool {
        false
    }
}

impl TokenLintRule for EmptyValuesRuleImpl {
    type Options = EmptyValuesOptions;
    type Context = ();

    fn check(
        &self,
        options: &EmptyValuesOptions,
        window: &TokenWindow<'_>,
        _context: &mut (),
    ) -> Result<Vec<LintDiagnostic>, TokenStreamError> {
        let token = window.token;
        let Some(next) = window.next.map(|next| &next.kind) else {
            return Ok(Vec::new());
        };

        let message = match token.kind {
            TokenKind::Value
                if options.forbid_in_block_mappings
                    && matches!(next, TokenKind::Key | TokenKind::BlockEnd) =>
            {
                Some("empty value in block mapping")
            }
            TokenKind::Value
                if options.forbid_in_flow_mappings
                    && matches!(next, TokenKind::FlowEntry | TokenKind::FlowMappingEnd) =>
            {
                Some("empty value in flow mapping")
            }
            TokenKind::BlockEntry
                if options.forbid_in_block_sequences
                    && matches!(
                        next,
                        TokenKind::Key | TokenKind::BlockEnd | TokenKind::BlockEntry
                    ) =>
            {
                Some("empty value in block sequence")
            }
            _ => None,
        };

        Ok(message
            .map(|message| {
                LintDiagnostic::new(
                    token.start.line + 1,
                    token.end.column + 1,
                    message,
                    self.name(),
                )
            })
            .into_iter()
            .collect())
    }
}
