//! Foundation types for yamlcheck.
//!
//! This crate provides the position model shared by the linter and its
//! callers. It has zero external dependencies, making it suitable as a
//! foundation layer.
//!
//! # Type Categories
//!
//! - **Position types**: [`Mark`]
//! - **Token types**: [`Token`], [`TokenKind`], [`ScalarStyle`]
//! - **Line types**: [`Line`], [`lines`]
//! - **Severity types**: [`DiagnosticSeverity`], [`RuleSeverity`]

mod line;
mod position;
mod severity;
mod token;

pub use line::{lines, Line, Lines};
pub use position::Mark;
pub use severity::{DiagnosticSeverity, ParseSeverityError, RuleSeverity};
pub use token::{ScalarStyle, Token, TokenKind};
