use thiserror::Error;
use yamlcheck_types::Mark;

pub type Result<T> = std::result::Result<T, LintError>;

/// Configuration problems, reported before any rule runs.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid lint rule name(s): {}\n\nValid rule names are:\n{}", .invalid.join(", "), format_valid(.valid))]
    UnknownRule {
        invalid: Vec<String>,
        valid: Vec<&'static str>,
    },

    #[error("Invalid preset name: '{0}'\n\nValid presets are:\n  - recommended\n  - all")]
    InvalidPreset(String),

    #[error("Invalid options for rule '{rule}': {source}")]
    InvalidOptions {
        rule: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Rule '{0}' is registered more than once")]
    DuplicateRule(&'static str),
}

fn format_valid(valid: &[&'static str]) -> String {
    valid
        .iter()
        .map(|name| format!("  - {name}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// An inconsistency in the token stream itself.
///
/// These are precondition failures of the external scanner, not lint findings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenStreamError {
    #[error("{kind} at {mark} closes a collection that was never opened")]
    UnmatchedEnd { kind: &'static str, mark: Mark },

    #[error("stream ended at {mark} with {depth} unclosed collection(s)")]
    UnclosedCollections { depth: usize, mark: Mark },
}

/// Errors that abort a lint run.
#[derive(Debug, Error)]
pub enum LintError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Malformed token stream (rule '{rule}'): {source}")]
    MalformedTokenStream {
        rule: &'static str,
        #[source]
        source: TokenStreamError,
    },
}
