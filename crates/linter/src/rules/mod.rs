/// Built-in lint rules
///
/// Each rule is implemented in its own file and implements one of the trait types:
/// - `TokenLintRule` - Rules that walk the token stream
/// - `LineLintRule` - Rules that look at physical lines only
use crate::registry::RuleRegistryBuilder;

mod colons;
mod commas;
mod document_end;
mod document_start;
mod empty_lines;
mod empty_values;
mod hyphens;
mod key_duplicates;
mod key_ordering;
mod line_length;
mod new_line_at_end_of_file;
mod new_lines;
mod octal_values;
mod spacing;
mod trailing_spaces;

pub use colons::{ColonsOptions, ColonsRuleImpl};
pub use commas::{CommasOptions, CommasRuleImpl};
pub use document_end::DocumentEndRuleImpl;
pub use document_start::DocumentStartRuleImpl;
pub use empty_lines::{EmptyLinesOptions, EmptyLinesRuleImpl};
pub use empty_values::{EmptyValuesOptions, EmptyValuesRuleImpl};
pub use hyphens::{HyphensOptions, HyphensRuleImpl};
pub use key_duplicates::KeyDuplicatesRuleImpl;
pub use key_ordering::{IgnoredKeys, KeyOrderingOptions, KeyOrderingRuleImpl};
pub use line_length::{LineLengthOptions, LineLengthRuleImpl};
pub use new_line_at_end_of_file::NewLineAtEndOfFileRuleImpl;
pub use new_lines::{NewLineType, NewLinesOptions, NewLinesRuleImpl};
pub use octal_values::{OctalValuesOptions, OctalValuesRuleImpl};
pub use spacing::DISABLED;
pub use trailing_spaces::TrailingSpacesRuleImpl;

/// Options of the document marker rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkerOptions {
    /// Require the marker (`true`) or forbid it (`false`)
    pub present: bool,
}

impl Default for MarkerOptions {
    fn default() -> Self {
        Self { present: true }
    }
}

/// Every built-in rule, in registration order
pub(crate) fn builtin_rules() -> RuleRegistryBuilder {
    RuleRegistryBuilder::default()
        .token_rule(ColonsRuleImpl)
        .token_rule(CommasRuleImpl)
        .token_rule(DocumentEndRuleImpl)
        .token_rule(DocumentStartRuleImpl)
        .line_rule(EmptyLinesRuleImpl)
        .token_rule(EmptyValuesRuleImpl)
        .token_rule(HyphensRuleImpl)
        .token_rule(KeyDuplicatesRuleImpl)
        .token_rule(KeyOrderingRuleImpl)
        .line_rule(LineLengthRuleImpl)
        .line_rule(NewLineAtEndOfFileRuleImpl)
        .line_rule(NewLinesRuleImpl)
        .token_rule(OctalValuesRuleImpl)
        .line_rule(TrailingSpacesRuleImpl)
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::context::Document;
    use crate::diagnostics::LintDiagnostic;
    use crate::error::TokenStreamError;
    use crate::traits::{LineLintRule, TokenLintRule};
    use yamlcheck_types::Token;

    /// Run one token rule over a whole stream with a fresh context
    pub(crate) fn run_token_rule<R: TokenLintRule>(
        rule: &R,
        options: &R::Options,
        source: &str,
        tokens: &[Token],
    ) -> Result<Vec<LintDiagnostic>, TokenStreamError> {
        let document = Document::new(source, tokens);
        let mut context = R::Context::default();
        let mut found = Vec::new();
        for index in 0..tokens.len() {
            found.extend(rule.check(options, &document.window(index), &mut context)?);
        }
        Ok(found)
    }

    /// Run one line rule over every line of `source`
    pub(crate) fn run_line_rule<R: LineLintRule>(
        rule: &R,
        options: &R::Options,
        source: &str,
    ) -> Vec<LintDiagnostic> {
        yamlcheck_types::lines(source)
            .flat_map(|line| rule.check(options, &line))
            .collect()
    }

    /// `(line, column, message)` triples, for compact assertions
    pub(crate) fn positions(diagnostics: &[LintDiagnostic]) -> Vec<(usize, usize, &str)> {
        diagnostics
            .iter()
            .map(|d| (d.line, d.column, d.message.as_str()))
            .collect()
    }
}
