use crate::diagnostics::LintDiagnostic;
use crate::traits::{LineLintRule, LintRule, NoOptions};
use yamlcheck_types::{DiagnosticSeverity, Line};

/// Lint rule that requires the file to end with a line terminator
pub struct NewLineAtEndOfFileRuleImpl;

impl LintRule for NewLineAtEndOfFileRuleImpl {
    fn name(&self) -> &'static str {
        "new-line-at-end-of-file"
    }

    fn description(&self) -> &'static str {
        "Requires a new line character at the end of the file"
    }

    fn default_severity(&self) -> DiagnosticSeverity {
        DiagnosticSeverity::Error
    }

    fn recommended(&self) -> bool {
        true
    }
}

impl LineLintRule for NewLineAtEndOfFileRuleImpl {
    type Options = NoOptions;

    fn check(&self, _options: &NoOptions, line: &Line<'_>) -> Vec<LintDiagnostic> {
        if !line.is_last() || line.is_empty() {
            return Vec::new();
        }
        vec![LintDiagnostic::new(
            line.line_no,
            line.char_len() + 1,
            "no new line character at the end of file",
            self.name(),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::{positions, run_line_rule};

    #[test]
    fn test_missing_final_newline() {
        let found = run_line_rule(&NewLineAtEndOfFileRuleImpl, &NoOptions {}, "foo");
        assert_eq!(
            positions(&found),
            vec![(1, 4, "no new line character at the end of file")]
        );

        let found = run_line_rule(&NewLineAtEndOfFileRuleImpl, &NoOptions {}, "a: 1\nb: 2");
        assert_eq!(found[0].line, 2);
    }

    #[test]
    fn test_terminated_and_empty_files() {
        assert!(run_line_rule(&NewLineAtEndOfFileRuleImpl, &NoOptions {}, "foo\n").is_empty());
        assert!(run_line_rule(&NewLineAtEndOfFileRuleImpl, &NoOptions {}, "").is_empty());
    }
}
