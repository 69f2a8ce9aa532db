use crate::diagnostics::LintDiagnostic;
use crate::traits::{LineLintRule, LintRule};
use serde::{Deserialize, Serialize};
use yamlcheck_types::{DiagnosticSeverity, Line};

/// Options for [`EmptyLinesRuleImpl`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct EmptyLinesOptions {
    /// Blank lines allowed in a row inside the document
    pub max: usize,
    /// Blank lines allowed at the start of the file
    pub max_start: usize,
    /// Blank lines allowed at the end of the file
    pub max_end: usize,
}

impl Default for EmptyLinesOptions {
    fn default() -> Self {
        Self {
            max: 2,
            max_start: 0,
            max_end: 0,
        }
    }
}

/// Lint rule that limits runs of consecutive blank lines
///
/// A run is reported once, on its last blank line.
pub struct EmptyLinesRuleImpl;

impl LintRule for EmptyLinesRuleImpl {
    fn name(&self) -> &'static str {
        "empty-lines"
    }

    fn description(&self) -> &'static str {
        "Limits the number of consecutive blank lines"
    }

    fn default_severity(&self) -> DiagnosticSeverity {
        DiagnosticSeverity::Error
    }

    fn recommended(&self) -> bool {
        true
    }
}

impl LineLintRule for EmptyLinesRuleImpl {
    type Options = EmptyLinesOptions;

    fn check(&self, options: &EmptyLinesOptions, line: &Line<'_>) -> Vec<LintDiagnostic> {
        let bytes = line.buffer.as_bytes();
        if !line.is_empty() || line.end >= bytes.len() {
            return Vec::new();
        }

        let rest = &bytes[line.end..];
        if rest.starts_with(b"\n\n") || rest.starts_with(b"\r\n\r\n") {
            return Vec::new();
        }

        let mut blank_lines = 0;
        let mut start = line.start;
        while start >= 2 && &bytes[start - 2..start] == b"\r\n" {
            blank_lines += 1;
            start -= 2;
        }
        while start >= 1 && bytes[start - 1] == b'\n' {
            blank_lines += 1;
            start -= 1;
        }

        let mut max = options.max;
        if start == 0 {
            // The first line has no terminator before it
            blank_lines += 1;
            max = options.max_start;
        }
        if rest == b"\n" || rest == b"\r\n" {
            // A file holding a single line break is not a blank run
            if line.end == 0 {
                return Vec::new();
            }
            max = options.max_end;
        }

        if blank_lines <= max {
            return Vec::new();
        }
        vec![LintDiagnostic::new(
            line.line_no,
            1,
            format!("too many blank lines ({blank_lines} > {max})"),
            self.name(),
        )]
    }
}
