//! Shared test utilities for yamlcheck crates
//!
//! - [`fixture`] builds token streams by hand from byte ranges of a source
//! - [`assertions`] formats diagnostics for snapshot tests

pub mod assertions;
pub mod fixture;

pub use assertions::{format_diagnostic_messages, format_diagnostics};
pub use fixture::TokenStreamBuilder;
