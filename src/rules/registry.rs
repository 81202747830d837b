// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The set of rules clint knows how to evaluate.

use std::fmt;

/// Parameter shape a rule expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// No parameter.
    None,
    /// A list of allowed values.
    List,
    /// One casing policy or a list of them.
    Case,
    /// A positive integer.
    Length,
    /// A string; optional, with a rule-specific default.
    Text,
}

/// A recognised rule name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleName {
    TypeEnum,
    TypeCase,
    TypeEmpty,
    TypeMaxLength,
    ScopeEnum,
    ScopeCase,
    ScopeEmpty,
    SubjectCase,
    SubjectEmpty,
    SubjectFullStop,
    HeaderMaxLength,
    HeaderMinLength,
    HeaderTrim,
    BodyLeadingBlank,
    BodyEmpty,
    BodyMaxLineLength,
    FooterLeadingBlank,
    FooterMaxLineLength,
}

impl RuleName {
    /// Get the string representation of the rule name.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleName::TypeEnum => "type-enum",
            RuleName::TypeCase => "type-case",
            RuleName::TypeEmpty => "type-empty",
            RuleName::TypeMaxLength => "type-max-length",
            RuleName::ScopeEnum => "scope-enum",
            RuleName::ScopeCase => "scope-case",
            RuleName::ScopeEmpty => "scope-empty",
            RuleName::SubjectCase => "subject-case",
            RuleName::SubjectEmpty => "subject-empty",
            RuleName::SubjectFullStop => "subject-full-stop",
            RuleName::HeaderMaxLength => "header-max-length",
            RuleName::HeaderMinLength => "header-min-length",
            RuleName::HeaderTrim => "header-trim",
            RuleName::BodyLeadingBlank => "body-leading-blank",
            RuleName::BodyEmpty => "body-empty",
            RuleName::BodyMaxLineLength => "body-max-line-length",
            RuleName::FooterLeadingBlank => "footer-leading-blank",
            RuleName::FooterMaxLineLength => "footer-max-line-length",
        }
    }

    /// The parameter this rule takes.
    pub fn param_kind(&self) -> ParamKind {
        match self {
            RuleName::TypeEnum | RuleName::ScopeEnum => ParamKind::List,
            RuleName::TypeCase | RuleName::ScopeCase | RuleName::SubjectCase => ParamKind::Case,
            RuleName::TypeMaxLength
            | RuleName::HeaderMaxLength
            | RuleName::HeaderMinLength
            | RuleName::BodyMaxLineLength
            | RuleName::FooterMaxLineLength => ParamKind::Length,
            RuleName::SubjectFullStop => ParamKind::Text,
            RuleName::TypeEmpty
            | RuleName::ScopeEmpty
            | RuleName::SubjectEmpty
            | RuleName::HeaderTrim
            | RuleName::BodyLeadingBlank
            | RuleName::BodyEmpty
            | RuleName::FooterLeadingBlank => ParamKind::None,
        }
    }

    /// Get all rule names.
    pub fn all() -> &'static [RuleName] {
        &[
            RuleName::TypeEnum,
            RuleName::TypeCase,
            RuleName::TypeEmpty,
            RuleName::TypeMaxLength,
            RuleName::ScopeEnum,
            RuleName::ScopeCase,
            RuleName::ScopeEmpty,
            RuleName::SubjectCase,
            RuleName::SubjectEmpty,
            RuleName::SubjectFullStop,
            RuleName::HeaderMaxLength,
            RuleName::HeaderMinLength,
            RuleName::HeaderTrim,
            RuleName::BodyLeadingBlank,
            RuleName::BodyEmpty,
            RuleName::BodyMaxLineLength,
            RuleName::FooterLeadingBlank,
            RuleName::FooterMaxLineLength,
        ]
    }
}

impl std::str::FromStr for RuleName {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleName::all()
            .iter()
            .find(|rule| rule.as_str() == s)
            .copied()
            .ok_or(())
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_name_from_str() {
        assert_eq!("type-enum".parse::<RuleName>(), Ok(RuleName::TypeEnum));
        assert_eq!(
            "header-max-length".parse::<RuleName>(),
            Ok(RuleName::HeaderMaxLength)
        );
        assert!("type-emum".parse::<RuleName>().is_err());
        assert!("TYPE-ENUM".parse::<RuleName>().is_err());
    }

    #[test]
    fn test_rule_name_roundtrip() {
        for rule in RuleName::all() {
            assert_eq!(rule.as_str().parse::<RuleName>(), Ok(*rule));
        }
    }

    #[test]
    fn test_param_kinds() {
        assert_eq!(RuleName::TypeEnum.param_kind(), ParamKind::List);
        assert_eq!(RuleName::TypeCase.param_kind(), ParamKind::Case);
        assert_eq!(RuleName::ScopeEmpty.param_kind(), ParamKind::None);
        assert_eq!(RuleName::SubjectFullStop.param_kind(), ParamKind::Text);
        assert_eq!(RuleName::HeaderMaxLength.param_kind(), ParamKind::Length);
    }
}
