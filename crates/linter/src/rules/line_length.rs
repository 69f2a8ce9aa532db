use crate::diagnostics::LintDiagnostic;
use crate::traits::{LineLintRule, LintRule};
use serde::{Deserialize, Serialize};
use yamlcheck_types::{DiagnosticSeverity, Line};

/// Options for [`LineLengthRuleImpl`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct LineLengthOptions {
    /// Longest allowed line, in characters
    pub max: usize,
    /// Let a line through when its only overflow is one unbreakable word,
    /// such as a long URL
    pub allow_non_breakable_words: bool,
}

impl Default for LineLengthOptions {
    fn default() -> Self {
        Self {
            max: 80,
            allow_non_breakable_words: true,
        }
    }
}

/// Lint rule that limits line length
pub struct LineLengthRuleImpl;

impl LintRule for LineLengthRuleImpl {
    fn name(&self) -> &'static str {
        "line-length"
    }

    fn description(&self) -> &'static str {
        "Limits the length of lines"
    }

    fn default_severity(&self) -> DiagnosticSeverity {
        DiagnosticSeverity::Error
    }

    fn recommended(&self) -> bool {
        true
    }
}

impl LineLintRule for LineLengthRuleImpl {
    type Options = LineLengthOptions;

    fn check(&self, options: &LineLengthOptions, line: &Line<'_>) -> Vec<LintDiagnostic> {
        let length = line.char_len();
        if length <= options.max {
            return Vec::new();
        }
        if options.allow_non_breakable_words && is_non_breakable(line.content()) {
            return Vec::new();
        }
        vec![LintDiagnostic::new(
            line.line_no,
            options.max + 1,
            format!("line too long ({length} > {} characters)", options.max),
            self.name(),
        )]
    }
}

/// A single word after indentation and an optional `#` or `- ` lead-in
fn is_non_breakable(content: &str) -> bool {
    let text = content.trim_start_matches(' ');
    if text.is_empty() {
        return false;
    }
    let word = if let Some(comment) = text.strip_prefix('#') {
        skip_chars(comment.trim_start_matches('#'), 1)
    } else if text.starts_with('-') {
        skip_chars(text, 2)
    } else {
        text
    };
    !word.contains(' ')
}

/// `text` without its first `n` characters
fn skip_chars(text: &str, n: usize) -> &str {
    text.char_indices().nth(n).map_or("", |(index, _)| &text[index..])
}
