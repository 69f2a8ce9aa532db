use crate::error::ConfigError;
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use yamlcheck_types::{DiagnosticSeverity, RuleSeverity};

/// Presets accepted by `extends`
const VALID_PRESETS: &[&str] = &["recommended", "all"];

/// Configuration for a single lint rule
///
/// Supports multiple formats:
/// ```yaml
/// # Simple severity
/// rule-name: warn
///
/// # Toggle, keeping the rule's default severity
/// rule-name: true
///
/// # Object style with options
/// rule-name:
///   enabled: true
///   severity: warn
///   options:
///     max-spaces-after: 2
///
/// # ESLint-style array: [severity, options]
/// rule-name: [warn, { max-spaces-after: 2 }]
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum LintRuleConfig {
    /// Just a severity level (simple case)
    Severity(RuleSeverity),

    /// Enabled or disabled with the rule's default severity
    Enabled(bool),

    /// Detailed config with options
    Detailed {
        enabled: bool,
        severity: Option<RuleSeverity>,
        options: Option<serde_json::Value>,
    },
}

impl LintRuleConfig {
    /// Resolve the diagnostic severity for this rule, or `None` if disabled
    #[must_use]
    pub fn severity(&self, default: DiagnosticSeverity) -> Option<DiagnosticSeverity> {
        match self {
            Self::Severity(severity)
            | Self::Detailed {
                enabled: true,
                severity: Some(severity),
                ..
            } => severity.to_diagnostic_severity(),
            Self::Enabled(true)
            | Self::Detailed {
                enabled: true,
                severity: None,
                ..
            } => Some(default),
            Self::Enabled(false) | Self::Detailed { enabled: false, .. } => None,
        }
    }

    /// Get the options for this rule configuration (if any)
    #[must_use]
    pub fn options(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Severity(_) | Self::Enabled(_) => None,
            Self::Detailed { options, .. } => options.as_ref(),
        }
    }
}

fn parse_severity<E: serde::de::Error>(value: &str) -> Result<RuleSeverity, E> {
    value.parse().map_err(E::custom)
}

fn deserialize_optional_severity<'de, D>(deserializer: D) -> Result<Option<RuleSeverity>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    raw.as_deref().map(parse_severity).transpose()
}

const fn default_enabled() -> bool {
    true
}

/// Custom deserializer for `LintRuleConfig` to handle the shorthand forms
impl<'de> Deserialize<'de> for LintRuleConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, SeqAccess, Visitor};

        struct LintRuleConfigVisitor;

        impl<'de> Visitor<'de> for LintRuleConfigVisitor {
            type Value = LintRuleConfig;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str(
                    "a severity string ('off', 'warn', 'error'), \
                     a boolean, \
                     an array [severity, options], \
                     or an object { enabled, severity, options }",
                )
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(LintRuleConfig::Enabled(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if value == "enable" {
                    return Ok(LintRuleConfig::Enabled(true));
                }
                parse_severity(value).map(LintRuleConfig::Severity)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                // ESLint-style: [severity, options]
                let severity: String = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &"array with severity"))?;
                let severity = parse_severity(&severity)?;

                let options: Option<serde_json::Value> = seq.next_element()?;

                Ok(LintRuleConfig::Detailed {
                    enabled: true,
                    severity: Some(severity),
                    options,
                })
            }

            fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                // Object style: { enabled, severity, options }
                #[derive(Deserialize)]
                #[serde(deny_unknown_fields)]
                struct DetailedConfig {
                    #[serde(default = "default_enabled")]
                    enabled: bool,
                    #[serde(default, deserialize_with = "deserialize_optional_severity")]
                    severity: Option<RuleSeverity>,
                    #[serde(default)]
                    options: Option<serde_json::Value>,
                }

                let config =
                    DetailedConfig::deserialize(de::value::MapAccessDeserializer::new(map))?;
                Ok(LintRuleConfig::Detailed {
                    enabled: config.enabled,
                    severity: config.severity,
                    options: config.options,
                })
            }
        }

        deserializer.deserialize_any(LintRuleConfigVisitor)
    }
}

/// Extends configuration - can be a single preset or multiple
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
#[non_exhaustive]
pub enum ExtendsConfig {
    /// Single preset: `extends: recommended`
    Single(String),
    /// Multiple presets: `extends: [recommended, all]`
    Multiple(Vec<String>),
}

impl ExtendsConfig {
    /// Get all presets as a vector (normalizes single to vec)
    #[must_use]
    pub fn presets(&self) -> Vec<&str> {
        match self {
            Self::Single(s) => vec![s.as_str()],
            Self::Multiple(v) => v.iter().map(String::as_str).collect(),
        }
    }
}

/// Full lint configuration struct with extends and rules
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FullLintConfig {
    /// Presets to extend (optional)
    pub extends: Option<ExtendsConfig>,

    /// Rule configurations (optional)
    #[serde(default)]
    pub rules: HashMap<String, LintRuleConfig>,
}

/// Overall lint configuration
///
/// Supports multiple formats:
///
/// ```yaml
/// # Just use the recommended preset
/// recommended
///
/// # Fine-grained rules only (no presets)
/// rules:
///   key-duplicates: error
///   trailing-spaces: warn
///
/// # Preset with overrides
/// extends: recommended
/// rules:
///   document-start: off
///   colons: [error, { max-spaces-after: 2 }]
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
#[non_exhaustive]
pub enum LintConfig {
    /// Preset(s): `recommended` or `[recommended, all]`
    Preset(ExtendsConfig),

    /// Full configuration with optional extends and rules
    Full(FullLintConfig),
}

impl Default for LintConfig {
    fn default() -> Self {
        Self::Full(FullLintConfig::default())
    }
}

impl LintConfig {
    /// Recommended preset
    #[must_use]
    pub fn recommended() -> Self {
        Self::Preset(ExtendsConfig::Single("recommended".to_string()))
    }

    /// Every registered rule enabled with its default options
    #[must_use]
    pub fn all() -> Self {
        Self::Preset(ExtendsConfig::Single("all".to_string()))
    }

    /// Only the given rules, each enabled with default severity and options
    #[must_use]
    pub fn only<'a>(rules: impl IntoIterator<Item = &'a str>) -> Self {
        Self::Full(FullLintConfig {
            extends: None,
            rules: rules
                .into_iter()
                .map(|name| (name.to_string(), LintRuleConfig::Enabled(true)))
                .collect(),
        })
    }

    /// Add or replace the configuration of one rule
    #[must_use]
    pub fn with_rule(self, name: impl Into<String>, rule: LintRuleConfig) -> Self {
        let mut full = match self {
            Self::Preset(presets) => FullLintConfig {
                extends: Some(presets),
                rules: HashMap::new(),
            },
            Self::Full(full) => full,
        };
        full.rules.insert(name.into(), rule);
        Self::Full(full)
    }

    fn extends(&self) -> Option<&ExtendsConfig> {
        match self {
            Self::Preset(presets) => Some(presets),
            Self::Full(FullLintConfig { extends, .. }) => extends.as_ref(),
        }
    }

    /// Explicitly configured rules
    #[must_use]
    pub fn rules(&self) -> Option<&HashMap<String, LintRuleConfig>> {
        match self {
            Self::Preset(_) => None,
            Self::Full(FullLintConfig { rules, .. }) => Some(rules),
        }
    }

    /// Validate preset names and configured rule names
    ///
    /// The error for unknown rules includes the list of valid rule names.
    pub fn validate(&self, valid_rules: &[&'static str]) -> Result<(), ConfigError> {
        if let Some(extends) = self.extends() {
            for preset in extends.presets() {
                if !VALID_PRESETS.contains(&preset) {
                    return Err(ConfigError::InvalidPreset(preset.to_string()));
                }
            }
        }

        let Some(rules) = self.rules() else {
            return Ok(());
        };

        let mut invalid: Vec<String> = rules
            .keys()
            .filter(|rule| !valid_rules.contains(&rule.as_str()))
            .cloned()
            .collect();

        if invalid.is_empty() {
            Ok(())
        } else {
            invalid.sort_unstable();
            let mut valid = valid_rules.to_vec();
            valid.sort_unstable();
            Err(ConfigError::UnknownRule { invalid, valid })
        }
    }

    /// Get the severity for a rule, considering presets and overrides
    ///
    /// Returns `None` when the rule is disabled.
    #[must_use]
    pub fn severity(
        &self,
        rule_name: &str,
        default: DiagnosticSeverity,
        recommended: bool,
    ) -> Option<DiagnosticSeverity> {
        if let Some(rule) = self.rules().and_then(|rules| rules.get(rule_name)) {
            return rule.severity(default);
        }

        let enabled_by_preset = self.extends().is_some_and(|presets| {
            presets
                .presets()
                .iter()
                .any(|preset| *preset == "all" || (*preset == "recommended" && recommended))
        });
        enabled_by_preset.then_some(default)
    }

    /// Get the options for a rule (if configured)
    ///
    /// Returns `None` if the rule is not configured or has no options.
    #[must_use]
    pub fn options(&self, rule_name: &str) -> Option<&serde_json::Value> {
        self.rules()
            .and_then(|rules| rules.get(rule_name))
            .and_then(LintRuleConfig::options)
    }
}
