use crate::diagnostics::LintDiagnostic;
use crate::traits::{LineLintRule, LintRule};
use serde::{Deserialize, Serialize};
use yamlcheck_types::{DiagnosticSeverity, Line};

/// Expected line terminator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewLineType {
    /// `\n`
    #[default]
    Unix,
    /// `\r\n`
    Dos,
    /// Whatever the host platform uses
    Platform,
}

impl NewLineType {
    /// The terminator itself
    #[must_use]
    pub const fn terminator(self) -> &'static str {
        match self {
            Self::Unix => "\n",
            Self::Dos => "\r\n",
            Self::Platform => {
                if cfg!(windows) {
                    "\r\n"
                } else {
                    "\n"
                }
            }
        }
    }

    /// The terminator spelled with backslash escapes, for messages
    const fn escaped(self) -> &'static str {
        if self.terminator().len() == 2 {
            "\\r\\n"
        } else {
            "\\n"
        }
    }
}

/// Options for [`NewLinesRuleImpl`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NewLinesOptions {
    #[serde(rename = "type")]
    pub kind: NewLineType,
}

/// Lint rule that checks every line terminator against the configured type
pub struct NewLinesRuleImpl;

impl LintRule for NewLinesRuleImpl {
    fn name(&self) -> &'static str {
        "new-lines"
    }

    fn description(&self) -> &'static str {
        "Requires a consistent line terminator"
    }

    fn default_severity(&self) -> DiagnosticSeverity {
        DiagnosticSeverity::Error
    }

    fn recommended(&self) -> bool {
        true
    }
}

impl LineLintRule for NewLinesRuleImpl {
    type Options = NewLinesOptions;

    fn check(&self, options: &NewLinesOptions, line: &Line<'_>) -> Vec<LintDiagnostic> {
        if line.end >= line.buffer.len() {
            return Vec::new();
        }
        if line.buffer[line.end..].starts_with(options.kind.terminator()) {
            return Vec::new();
        }
        vec![LintDiagnostic::new(
            line.line_no,
            line.char_len() + 1,
            format!("wrong new line character: expected {}", options.kind.escaped()),
            self.name(),
        )]
    }
}
