use crate::diagnostics::LintDiagnostic;
use crate::traits::{LineLintRule, LintRule, NoOptions};
use yamlcheck_types::{DiagnosticSeverity, Line};

/// Lint rule that flags spaces or tabs at the end of a line
pub struct TrailingSpacesRuleImpl;

impl LintRule for TrailingSpacesRuleImpl {
    fn name(&self) -> &'static str {
        "trailing-spaces"
    }

    fn description(&self) -> &'static str {
        "Forbids trailing spaces at the end of lines"
    }

    fn default_severity(&self) -> DiagnosticSeverity {
        DiagnosticSeverity::Error
    }

    fn recommended(&self) -> bool {
        true
    }
}

impl LineLintRule for TrailingSpacesRuleImpl {
    type Options = NoOptions;

    fn check(&self, _options: &NoOptions, line: &Line<'_>) -> Vec<LintDiagnostic> {
        if line.end == 0 {
            return Vec::new();
        }

        let bytes = line.buffer.as_bytes();
        let mut pos = line.end;
        while pos > line.start && is_whitespace(bytes[pos - 1]) {
            pos -= 1;
        }
        if pos == line.end {
            return Vec::new();
        }

        // The run may end in other whitespace, only space and tab start it
        if !matches!(bytes[pos], b' ' | b'\t') {
            return Vec::new();
        }

        let column = line.buffer[line.start..pos].chars().count() + 1;
        vec![LintDiagnostic::new(
            line.line_no,
            column,
            "trailing spaces",
            self.name(),
        )]
    }
}

fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}
