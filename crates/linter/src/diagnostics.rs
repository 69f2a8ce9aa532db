use yamlcheck_types::DiagnosticSeverity;

/// A single rule finding.
///
/// `line` and `column` are 1-based. Rules create diagnostics with the
/// [`new`](Self::new) constructor; the linter then stamps the severity
/// configured for the rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LintDiagnostic {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed, in characters)
    pub column: usize,
    /// Severity (from rule default or config override)
    pub severity: DiagnosticSeverity,
    /// Human-readable message
    pub message: String,
    /// Rule identifier (e.g., `"key-duplicates"`)
    pub rule: String,
}

impl LintDiagnostic {
    /// Create a new lint diagnostic with error severity
    #[must_use]
    pub fn new(
        line: usize,
        column: usize,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            line,
            column,
            severity: DiagnosticSeverity::Error,
            message: message.into(),
            rule: rule.into(),
        }
    }

    /// Replace the severity
    #[must_use]
    pub fn with_severity(mut self, severity: DiagnosticSeverity) -> Self {
        self.severity = severity;
        self
    }

    /// Sort key used when merging the output of several rules
    #[must_use]
    pub const fn position(&self) -> (usize, usize) {
        (self.line, self.column)
    }
}

impl std::fmt::Display for LintDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}  {}  {}  ({})",
            self.line, self.column, self.severity, self.message, self.rule
        )
    }
}
