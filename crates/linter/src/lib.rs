//! Token-stream lint engine for YAML-like documents.
//!
//! The caller supplies the source buffer and the token stream a scanner
//! produced for it. [`Linter`] runs every enabled token rule over a sliding
//! window of tokens, then every enabled line rule over the physical lines,
//! and returns the diagnostics sorted by position.
mod config;
mod context;
mod diagnostics;
mod error;
mod linter;
mod registry;
mod rules;
mod structure;
mod traits;

pub use config::{ExtendsConfig, FullLintConfig, LintConfig, LintRuleConfig};
pub use context::{Document, TokenWindow};
pub use diagnostics::LintDiagnostic;
pub use error::{ConfigError, LintError, Result, TokenStreamError};
pub use linter::{lint, Linter};
pub use registry::{RegisteredRule, RuleKind, RuleRegistry, RuleRegistryBuilder};
pub use rules::{
    ColonsOptions, ColonsRuleImpl, CommasOptions, CommasRuleImpl, DocumentEndRuleImpl,
    DocumentStartRuleImpl, EmptyLinesOptions, EmptyLinesRuleImpl, EmptyValuesOptions,
    EmptyValuesRuleImpl, HyphensOptions, HyphensRuleImpl, IgnoredKeys, KeyDuplicatesRuleImpl,
    KeyOrderingOptions, KeyOrderingRuleImpl, LineLengthOptions, LineLengthRuleImpl, MarkerOptions,
    NewLineAtEndOfFileRuleImpl, NewLineType, NewLinesOptions, NewLinesRuleImpl,
    OctalValuesOptions, OctalValuesRuleImpl, TrailingSpacesRuleImpl, DISABLED,
};
pub use structure::{Frame, FrameKind, KeyStack, KeyVisit, MERGE_KEY};
pub use traits::{LineLintRule, LintRule, NoOptions, RuleOptions, TokenLintRule};
pub use yamlcheck_types::{DiagnosticSeverity, RuleSeverity};

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types for working with
/// the linter. Import with:
///
/// ```rust,ignore
/// use yamlcheck_linter::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{LintConfig, LintRuleConfig};
    pub use crate::context::{Document, TokenWindow};
    pub use crate::diagnostics::LintDiagnostic;
    pub use crate::error::{ConfigError, LintError, TokenStreamError};
    pub use crate::linter::Linter;
    pub use crate::traits::{LineLintRule, LintRule, TokenLintRule};
    pub use yamlcheck_types::{DiagnosticSeverity, Line, Token, TokenKind};
}
