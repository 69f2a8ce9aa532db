//! Whitespace measurement around delimiter tokens.
use crate::context::TokenWindow;
use crate::diagnostics::LintDiagnostic;
use yamlcheck_types::Token;

/// Bound value that turns a spacing check off
pub const DISABLED: i64 = -1;

/// Bounds and messages for one side of a delimiter
#[derive(Debug, Clone, Copy)]
pub(crate) struct Spacing {
    pub rule: &'static str,
    pub min: i64,
    pub max: i64,
    pub min_desc: &'static str,
    pub max_desc: &'static str,
}

impl Spacing {
    /// Only an upper bound
    pub(crate) const fn max(rule: &'static str, max: i64, max_desc: &'static str) -> Self {
        Self {
            rule,
            min: DISABLED,
            max,
            min_desc: "",
            max_desc,
        }
    }

    fn violation(&self, spaces: usize) -> Option<&'static str> {
        let spaces = i64::try_from(spaces).unwrap_or(i64::MAX);
        if self.max >= 0 && spaces > self.max {
            Some(self.max_desc)
        } else if self.min >= 0 && spaces < self.min {
            Some(self.min_desc)
        } else {
            None
        }
    }
}

/// Check the run of spaces between `window.token` and the next token
///
/// Only measured when both sit on the same line. A violation is reported at
/// the delimiter.
pub(crate) fn spaces_after(window: &TokenWindow<'_>, spacing: &Spacing) -> Option<LintDiagnostic> {
    let token = window.token;
    let next = window.next?;
    if token.end.line != next.start.line {
        return None;
    }
    let spaces = next.start.pointer.saturating_sub(token.end.pointer);
    spacing.violation(spaces).map(|message| {
        LintDiagnostic::new(
            token.start.line + 1,
            token.start.column + 1,
            message,
            spacing.rule,
        )
    })
}

/// Check the run of spaces between the previous token and `window.token`
///
/// Only measured when both sit on the same line and the previous token does
/// not swallow a line break. A violation is reported at the first character
/// after the previous token, where the run starts.
pub(crate) fn spaces_before(
    window: &TokenWindow<'_>,
    spacing: &Spacing,
) -> Option<LintDiagnostic> {
    let token = window.token;
    let prev = window.prev?;
    if prev.end.line != token.start.line || ends_with_newline(window, prev) {
        return None;
    }
    let spaces = token.start.pointer.saturating_sub(prev.end.pointer);
    spacing.violation(spaces).map(|message| {
        LintDiagnostic::new(
            token.start.line + 1,
            prev.end.column + 1,
            message,
            spacing.rule,
        )
    })
}

fn ends_with_newline(window: &TokenWindow<'_>, token: &Token) -> bool {
    token.end.pointer > 0 && window.byte_at(token.end.pointer - 1) == Some(b'\n')
}

/// `?` explicit key, as opposed to the zero-width implicit key marker
pub(crate) fn is_explicit_key(window: &TokenWindow<'_>) -> bool {
    let token = window.token;
    token.start.pointer < token.end.pointer && window.byte_at(token.start.pointer) == Some(b'?')
}
