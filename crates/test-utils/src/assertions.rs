//! Snapshot formatting for lint diagnostics
//!
//! Diagnostics are rendered through their `Display` impl, one per line and
//! numbered, so snapshots read like linter output.

/// Format a list of diagnostics for snapshot testing.
///
/// # Example
///
/// ```ignore
/// use yamlcheck_test_utils::format_diagnostics;
///
/// let diagnostics = linter.lint(&document)?;
/// insta::assert_snapshot!(format_diagnostics(&diagnostics), @"...");
/// ```
pub fn format_diagnostics<D: std::fmt::Display>(diagnostics: &[D]) -> String {
    if diagnostics.is_empty() {
        return String::from("(no diagnostics)");
    }

    diagnostics
        .iter()
        .enumerate()
        .map(|(i, d)| format!("[{}] {d}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format messages only, without positions.
pub fn format_diagnostic_messages<T: AsRef<str>>(messages: &[T]) -> String {
    if messages.is_empty() {
        return String::from("(no diagnostics)");
    }

    messages
        .iter()
        .enumerate()
        .map(|(i, m)| format!("[{}] {}", i + 1, m.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}
