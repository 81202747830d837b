// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! A rule table maps rule names to `[severity, applicability, value]`
//! tuples, the same shape commitlint uses:
//!
//! ```toml
//! extends = ["config-conventional"]
//!
//! [rules]
//! type-case = [2, "always", "lower-case"]
//! scope-empty = [2, "never"]
//! header-max-length = [2, "always", 72]
//! ```

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::ser::{SerializeTuple, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The main configuration structure for clint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct LintConfig {
    /// Presets to extend, merged in order before `rules`.
    pub extends: Vec<String>,

    /// Skip merge, revert, fixup and release messages.
    pub default_ignores: bool,

    /// Extra regexes; a message matching any of them is not linted.
    pub ignores: Vec<String>,

    /// Rule overrides keyed by rule name.
    pub rules: BTreeMap<String, RuleEntry>,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            extends: Vec::new(),
            default_ignores: true,
            ignores: Vec::new(),
            rules: BTreeMap::new(),
        }
    }
}

impl LintConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Look up a rule entry by name.
    pub fn rule(&self, name: &str) -> Option<&RuleEntry> {
        self.rules.get(name)
    }

    /// Rules that are not disabled.
    pub fn enabled_rules(&self) -> impl Iterator<Item = (&String, &RuleEntry)> {
        self.rules.iter().filter(|(_, entry)| entry.is_enabled())
    }
}

/// How a rule violation affects the lint outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Disabled,
    Warning,
    Error,
}

impl Severity {
    /// Numeric level (0, 1, 2).
    pub fn level(&self) -> u8 {
        match self {
            Severity::Disabled => 0,
            Severity::Warning => 1,
            Severity::Error => 2,
        }
    }

    /// Get the string representation of the severity.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Disabled => "disabled",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    fn from_level(level: i64) -> Option<Self> {
        match level {
            0 => Some(Severity::Disabled),
            1 => Some(Severity::Warning),
            2 => Some(Severity::Error),
            _ => None,
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "disabled" | "off" => Ok(Severity::Disabled),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.level())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SeverityVisitor;

        impl Visitor<'_> for SeverityVisitor {
            type Value = Severity;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a severity level 0, 1, 2 or \"disabled\", \"warning\", \"error\"")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Severity, E> {
                Severity::from_level(v)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Signed(v), &self))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Severity, E> {
                i64::try_from(v)
                    .ok()
                    .and_then(Severity::from_level)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(v), &self))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Severity, E> {
                v.parse()
                    .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_any(SeverityVisitor)
    }
}

/// Whether the rule's condition must or must not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Applicability {
    #[default]
    Always,
    Never,
}

impl Applicability {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Applicability::Always => "always",
            Applicability::Never => "never",
        }
    }

    /// Whether a condition outcome satisfies this applicability.
    pub fn accepts(&self, holds: bool) -> bool {
        match self {
            Applicability::Always => holds,
            Applicability::Never => !holds,
        }
    }
}

impl fmt::Display for Applicability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rule-specific parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleValue {
    Number(i64),
    Text(String),
    List(Vec<String>),
}

impl RuleValue {
    /// Short name of the value's kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            RuleValue::Number(_) => "number",
            RuleValue::Text(_) => "string",
            RuleValue::List(_) => "list",
        }
    }
}

impl fmt::Display for RuleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleValue::Number(n) => write!(f, "{}", n),
            RuleValue::Text(s) => write!(f, "{}", s),
            RuleValue::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

/// A rule definition: `[severity, applicability, value]`.
///
/// Applicability and value may be omitted from the tuple; a missing
/// applicability means `always`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleEntry {
    pub severity: Severity,
    pub applicability: Applicability,
    pub value: Option<RuleValue>,
}

impl RuleEntry {
    /// Create a new rule entry.
    pub fn new(severity: Severity, applicability: Applicability) -> Self {
        Self {
            severity,
            applicability,
            value: None,
        }
    }

    /// Set the parameter value.
    pub fn with_value(mut self, value: RuleValue) -> Self {
        self.value = Some(value);
        self
    }

    /// Whether the rule is evaluated at all.
    pub fn is_enabled(&self) -> bool {
        self.severity != Severity::Disabled
    }

    /// The numeric parameter, if any.
    pub fn number(&self) -> Option<i64> {
        match self.value {
            Some(RuleValue::Number(n)) => Some(n),
            _ => None,
        }
    }

    /// The text parameter, if any.
    pub fn text(&self) -> Option<&str> {
        match self.value {
            Some(RuleValue::Text(ref s)) => Some(s),
            _ => None,
        }
    }

    /// The parameter as a list of strings; a single string counts as a
    /// one-element list.
    pub fn strings(&self) -> Vec<&str> {
        match self.value {
            Some(RuleValue::List(ref items)) => items.iter().map(String::as_str).collect(),
            Some(RuleValue::Text(ref s)) => vec![s.as_str()],
            _ => Vec::new(),
        }
    }
}

impl Serialize for RuleEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.value.is_some() { 3 } else { 2 };
        let mut tuple = serializer.serialize_tuple(len)?;
        tuple.serialize_element(&self.severity)?;
        tuple.serialize_element(&self.applicability)?;
        if let Some(ref value) = self.value {
            tuple.serialize_element(value)?;
        }
        tuple.end()
    }
}

impl<'de> Deserialize<'de> for RuleEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntryVisitor;

        impl<'de> Visitor<'de> for EntryVisitor {
            type Value = RuleEntry;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an array [severity, applicability, value]")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<RuleEntry, A::Error> {
                let severity: Severity = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let applicability: Applicability = seq.next_element()?.unwrap_or_default();
                let value: Option<RuleValue> = seq.next_element()?;

                if seq.next_element::<de::IgnoredAny>()?.is_some() {
                    return Err(de::Error::invalid_length(4, &self));
                }

                Ok(RuleEntry {
                    severity,
                    applicability,
                    value,
                })
            }
        }

        deserializer.deserialize_seq(EntryVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Wrapper {
        entry: RuleEntry,
    }

    fn entry(src: &str) -> RuleEntry {
        toml::from_str::<Wrapper>(&format!("entry = {}", src))
            .unwrap()
            .entry
    }

    #[test]
    fn test_default_config() {
        let config = LintConfig::default();
        assert!(config.extends.is_empty());
        assert!(config.default_ignores);
        assert!(config.rules.is_empty());
    }

    #[test]
    fn test_entry_full_tuple() {
        let e = entry(r#"[2, "always", 72]"#);
        assert_eq!(e.severity, Severity::Error);
        assert_eq!(e.applicability, Applicability::Always);
        assert_eq!(e.number(), Some(72));
    }

    #[test]
    fn test_entry_without_value() {
        let e = entry(r#"[2, "never"]"#);
        assert_eq!(e.applicability, Applicability::Never);
        assert!(e.value.is_none());
    }

    #[test]
    fn test_entry_severity_only() {
        let e = entry("[0]");
        assert!(!e.is_enabled());
        assert_eq!(e.applicability, Applicability::Always);
    }

    #[test]
    fn test_entry_named_severity() {
        let e = entry(r#"["warning", "always", "."]"#);
        assert_eq!(e.severity, Severity::Warning);
        assert_eq!(e.text(), Some("."));
    }

    #[test]
    fn test_entry_list_value() {
        let e = entry(r#"[2, "always", ["feat", "fix"]]"#);
        assert_eq!(e.strings(), vec!["feat", "fix"]);
    }

    #[test]
    fn test_entry_rejects_bad_severity() {
        let result = toml::from_str::<Wrapper>(r#"entry = [3, "always"]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_entry_rejects_bad_applicability() {
        let result = toml::from_str::<Wrapper>(r#"entry = [2, "sometimes"]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_entry_rejects_extra_elements() {
        let result = toml::from_str::<Wrapper>(r#"entry = [2, "always", 72, 1]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let mut config = LintConfig::default();
        config.rules.insert(
            "header-max-length".to_string(),
            RuleEntry::new(Severity::Error, Applicability::Always).with_value(RuleValue::Number(72)),
        );
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("header-max-length"));

        let parsed: LintConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_applicability_accepts() {
        assert!(Applicability::Always.accepts(true));
        assert!(!Applicability::Always.accepts(false));
        assert!(Applicability::Never.accepts(false));
        assert!(!Applicability::Never.accepts(true));
    }
}
