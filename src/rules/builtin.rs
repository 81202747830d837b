// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in rules.
//!
//! Each rule answers one yes/no question about the message (the
//! condition). The configured applicability then decides whether the
//! answer must be yes (`always`) or no (`never`). A rule whose subject is
//! absent (no type, no body, ...) has nothing to say and passes.

use crate::commit::CommitMessage;
use crate::config::{Applicability, RuleEntry};

use super::case::Case;
use super::registry::RuleName;
use super::report::LintIssue;

/// Evaluate one rule against a message.
pub fn evaluate(rule: RuleName, entry: &RuleEntry, message: &CommitMessage) -> Option<LintIssue> {
    if !entry.is_enabled() {
        return None;
    }

    let Some(holds) = condition(rule, entry, message) else {
        tracing::debug!("Rule {} not applicable", rule);
        return None;
    };

    if entry.applicability.accepts(holds) {
        return None;
    }

    Some(LintIssue {
        name: rule.as_str().to_string(),
        level: entry.severity,
        message: describe(rule, entry, message),
    })
}

/// Whether the rule's condition holds; `None` when the rule does not apply.
fn condition(rule: RuleName, entry: &RuleEntry, message: &CommitMessage) -> Option<bool> {
    let commit_type = message.commit_type.as_deref();
    let scope = message.scope.as_deref();
    let subject = message.subject.as_deref();

    match rule {
        RuleName::TypeEnum => commit_type.map(|t| entry.strings().contains(&t)),
        RuleName::TypeCase => commit_type.map(|t| matches_any_case(t, entry)),
        RuleName::TypeEmpty => Some(commit_type.is_none()),
        RuleName::TypeMaxLength => commit_type.map(|t| within(t, entry)),

        RuleName::ScopeEnum => scope.map(|s| entry.strings().contains(&s)),
        RuleName::ScopeCase => scope.map(|s| matches_any_case(s, entry)),
        RuleName::ScopeEmpty => Some(scope.is_none()),

        RuleName::SubjectCase => subject
            .filter(|s| starts_with_letter(s))
            .map(|s| matches_any_case(s, entry)),
        RuleName::SubjectEmpty => Some(subject.is_none()),
        RuleName::SubjectFullStop => subject.map(|s| s.ends_with(full_stop(entry))),

        RuleName::HeaderMaxLength => Some(within(&message.header, entry)),
        RuleName::HeaderMinLength => Some(message.header_len() as i64 >= limit(entry)),
        RuleName::HeaderTrim => Some(message.header.trim() == message.header),

        RuleName::BodyLeadingBlank => message.body.as_ref().map(|_| message.blank_after_header),
        RuleName::BodyEmpty => Some(message.body.is_none()),
        RuleName::BodyMaxLineLength => message
            .body
            .as_deref()
            .map(|body| body.lines().all(|line| within(line, entry))),

        RuleName::FooterLeadingBlank => message
            .footer
            .as_ref()
            .map(|_| message.blank_before_footer),
        RuleName::FooterMaxLineLength => message
            .footer
            .as_deref()
            .map(|footer| footer.lines().all(|line| within(line, entry))),
    }
}

fn limit(entry: &RuleEntry) -> i64 {
    entry.number().unwrap_or(i64::MAX)
}

fn within(text: &str, entry: &RuleEntry) -> bool {
    text.chars().count() as i64 <= limit(entry)
}

fn full_stop(entry: &RuleEntry) -> &str {
    entry.text().unwrap_or(".")
}

fn starts_with_letter(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_alphabetic)
}

fn matches_any_case(text: &str, entry: &RuleEntry) -> bool {
    entry
        .strings()
        .iter()
        .filter_map(|name| name.parse::<Case>().ok())
        .any(|case| case.matches(text))
}

/// The violation message, phrased for the configured applicability.
fn describe(rule: RuleName, entry: &RuleEntry, message: &CommitMessage) -> String {
    let never = entry.applicability == Applicability::Never;
    let must = if never { "must not" } else { "must" };
    let may = if never { "may not" } else { "must" };
    let cases = entry.strings().join(", ");
    let n = limit(entry);

    match rule {
        RuleName::TypeEnum => format!("type {} be one of [{}]", must, cases),
        RuleName::TypeCase => format!("type {} be {}", must, cases),
        RuleName::TypeEmpty => format!("type {} be empty", may),
        RuleName::TypeMaxLength => format!("type must not be longer than {} characters", n),
        RuleName::ScopeEnum => format!("scope {} be one of [{}]", must, cases),
        RuleName::ScopeCase => format!("scope {} be {}", must, cases),
        RuleName::ScopeEmpty => format!("scope {} be empty", may),
        RuleName::SubjectCase => format!("subject {} be {}", must, cases),
        RuleName::SubjectEmpty => format!("subject {} be empty", may),
        RuleName::SubjectFullStop => {
            format!("subject {} end with full stop \"{}\"", may, full_stop(entry))
        }
        RuleName::HeaderMaxLength => format!(
            "header must not be longer than {} characters, current length is {}",
            n,
            message.header_len()
        ),
        RuleName::HeaderMinLength => format!(
            "header must not be shorter than {} characters, current length is {}",
            n,
            message.header_len()
        ),
        RuleName::HeaderTrim => format!(
            "header {} be surrounded by whitespace",
            if never { "must" } else { "must not" }
        ),
        RuleName::BodyLeadingBlank => format!("body {} have leading blank line", must),
        RuleName::BodyEmpty => format!("body {} be empty", may),
        RuleName::BodyMaxLineLength => {
            format!("body's lines must not be longer than {} characters", n)
        }
        RuleName::FooterLeadingBlank => format!("footer {} have leading blank line", must),
        RuleName::FooterMaxLineLength => {
            format!("footer's lines must not be longer than {} characters", n)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RuleValue, Severity};

    fn rule(applicability: Applicability, value: Option<RuleValue>) -> RuleEntry {
        RuleEntry {
            severity: Severity::Error,
            applicability,
            value,
        }
    }

    fn list(items: &[&str]) -> Option<RuleValue> {
        Some(RuleValue::List(items.iter().map(|s| s.to_string()).collect()))
    }

    fn text(s: &str) -> Option<RuleValue> {
        Some(RuleValue::Text(s.to_string()))
    }

    fn check(name: RuleName, entry: &RuleEntry, raw: &str) -> Option<LintIssue> {
        evaluate(name, entry, &CommitMessage::parse(raw).unwrap())
    }

    #[test]
    fn test_type_enum() {
        let entry = rule(Applicability::Always, list(&["feat", "fix"]));
        assert!(check(RuleName::TypeEnum, &entry, "feat: x").is_none());
        let issue = check(RuleName::TypeEnum, &entry, "wip: x").unwrap();
        assert_eq!(issue.message, "type must be one of [feat, fix]");
        // Empty type is left to type-empty.
        assert!(check(RuleName::TypeEnum, &entry, "no type here").is_none());
    }

    #[test]
    fn test_type_enum_is_case_sensitive() {
        let entry = rule(Applicability::Always, list(&["feat"]));
        assert!(check(RuleName::TypeEnum, &entry, "Feat: x").is_some());
    }

    #[test]
    fn test_type_case() {
        let entry = rule(Applicability::Always, text("lower-case"));
        assert!(check(RuleName::TypeCase, &entry, "feat: x").is_none());
        let issue = check(RuleName::TypeCase, &entry, "Feat: x").unwrap();
        assert_eq!(issue.message, "type must be lower-case");
    }

    #[test]
    fn test_type_empty_never() {
        let entry = rule(Applicability::Never, None);
        assert!(check(RuleName::TypeEmpty, &entry, "feat: x").is_none());
        let issue = check(RuleName::TypeEmpty, &entry, "just words").unwrap();
        assert_eq!(issue.message, "type may not be empty");
    }

    #[test]
    fn test_type_empty_always() {
        let entry = rule(Applicability::Always, None);
        assert!(check(RuleName::TypeEmpty, &entry, "feat: x").is_some());
        assert!(check(RuleName::TypeEmpty, &entry, "just words").is_none());
    }

    #[test]
    fn test_type_max_length() {
        let entry = rule(Applicability::Always, Some(RuleValue::Number(4)));
        assert!(check(RuleName::TypeMaxLength, &entry, "feat: x").is_none());
        assert!(check(RuleName::TypeMaxLength, &entry, "chore: x").is_some());
    }

    #[test]
    fn test_scope_empty() {
        let entry = rule(Applicability::Never, None);
        let issue = check(RuleName::ScopeEmpty, &entry, "feat: subject").unwrap();
        assert_eq!(issue.message, "scope may not be empty");
        assert!(check(RuleName::ScopeEmpty, &entry, "feat(core): subject").is_none());
    }

    #[test]
    fn test_scope_enum_and_case() {
        let scopes = rule(Applicability::Always, list(&["api", "cli"]));
        assert!(check(RuleName::ScopeEnum, &scopes, "feat(api): x").is_none());
        assert!(check(RuleName::ScopeEnum, &scopes, "feat(db): x").is_some());
        assert!(check(RuleName::ScopeEnum, &scopes, "feat: x").is_none());

        let case = rule(Applicability::Always, text("kebab-case"));
        assert!(check(RuleName::ScopeCase, &case, "feat(token-store): x").is_none());
        assert!(check(RuleName::ScopeCase, &case, "feat(TokenStore): x").is_some());
    }

    #[test]
    fn test_subject_case_never() {
        let entry = rule(
            Applicability::Never,
            list(&["sentence-case", "start-case", "pascal-case", "upper-case"]),
        );
        assert!(check(RuleName::SubjectCase, &entry, "feat: add token refresh").is_none());
        let issue = check(RuleName::SubjectCase, &entry, "feat: Add token refresh").unwrap();
        assert_eq!(
            issue.message,
            "subject must not be sentence-case, start-case, pascal-case, upper-case"
        );
    }

    #[test]
    fn test_subject_case_skips_non_letter_start() {
        let never = rule(
            Applicability::Never,
            list(&["sentence-case", "start-case", "pascal-case", "upper-case"]),
        );
        assert!(check(RuleName::SubjectCase, &never, "feat(auth): 2fa support").is_none());
        assert!(check(RuleName::SubjectCase, &never, "feat(ui): 🎉 launch dashboard").is_none());

        let always = rule(Applicability::Always, text("lower-case"));
        assert!(check(RuleName::SubjectCase, &always, "feat: 2FA SUPPORT").is_none());
        assert!(check(RuleName::SubjectCase, &always, "feat: ADD SUPPORT").is_some());
    }

    #[test]
    fn test_subject_empty() {
        let entry = rule(Applicability::Never, None);
        assert!(check(RuleName::SubjectEmpty, &entry, "feat: x").is_none());
        assert!(check(RuleName::SubjectEmpty, &entry, "feat:").is_some());
    }

    #[test]
    fn test_subject_full_stop() {
        let entry = rule(Applicability::Never, text("."));
        let issue = check(RuleName::SubjectFullStop, &entry, "feat: add thing.").unwrap();
        assert_eq!(issue.message, "subject may not end with full stop \".\"");
        assert!(check(RuleName::SubjectFullStop, &entry, "feat: add thing").is_none());
    }

    #[test]
    fn test_subject_full_stop_default_value() {
        let entry = rule(Applicability::Never, None);
        assert!(check(RuleName::SubjectFullStop, &entry, "feat: add thing.").is_some());
    }

    #[test]
    fn test_header_max_length() {
        let entry = rule(Applicability::Always, Some(RuleValue::Number(72)));
        let at_limit = format!("feat: {}", "a".repeat(66));
        assert!(check(RuleName::HeaderMaxLength, &entry, &at_limit).is_none());

        let over = format!("feat: {}", "a".repeat(67));
        let issue = check(RuleName::HeaderMaxLength, &entry, &over).unwrap();
        assert_eq!(
            issue.message,
            "header must not be longer than 72 characters, current length is 73"
        );
    }

    #[test]
    fn test_header_max_length_applies_to_any_header() {
        let entry = rule(Applicability::Always, Some(RuleValue::Number(10)));
        assert!(check(RuleName::HeaderMaxLength, &entry, "this is not conventional").is_some());
    }

    #[test]
    fn test_header_min_length() {
        let entry = rule(Applicability::Always, Some(RuleValue::Number(10)));
        assert!(check(RuleName::HeaderMinLength, &entry, "fix: a").is_some());
        assert!(check(RuleName::HeaderMinLength, &entry, "fix: a longer one").is_none());
    }

    #[test]
    fn test_header_trim() {
        let entry = rule(Applicability::Always, None);
        assert!(check(RuleName::HeaderTrim, &entry, "feat: x").is_none());
        assert!(check(RuleName::HeaderTrim, &entry, " feat: x").is_some());
        assert!(check(RuleName::HeaderTrim, &entry, "feat: x \n\nbody").is_some());
        assert!(check(RuleName::HeaderTrim, &entry, "feat(core): add thing ").is_some());
        assert!(check(RuleName::HeaderTrim, &entry, "feat(core): add thing \n").is_some());
    }

    #[test]
    fn test_body_leading_blank() {
        let entry = rule(Applicability::Always, None);
        assert!(check(RuleName::BodyLeadingBlank, &entry, "feat: x\n\nbody").is_none());
        assert!(check(RuleName::BodyLeadingBlank, &entry, "feat: x\nbody").is_some());
        assert!(check(RuleName::BodyLeadingBlank, &entry, "feat: x").is_none());
    }

    #[test]
    fn test_body_empty() {
        let entry = rule(Applicability::Never, None);
        assert!(check(RuleName::BodyEmpty, &entry, "feat: x").is_some());
        assert!(check(RuleName::BodyEmpty, &entry, "feat: x\n\nbody").is_none());
    }

    #[test]
    fn test_body_max_line_length() {
        let entry = rule(Applicability::Always, Some(RuleValue::Number(10)));
        assert!(check(RuleName::BodyMaxLineLength, &entry, "feat: x\n\nshort\nlines").is_none());
        assert!(
            check(RuleName::BodyMaxLineLength, &entry, "feat: x\n\nthis line is too long").is_some()
        );
    }

    #[test]
    fn test_footer_rules() {
        let blank = rule(Applicability::Always, None);
        assert!(check(RuleName::FooterLeadingBlank, &blank, "fix: x\n\nbody\n\nRefs #1").is_none());
        assert!(check(RuleName::FooterLeadingBlank, &blank, "fix: x\n\nbody\nRefs #1").is_some());

        let length = rule(Applicability::Always, Some(RuleValue::Number(8)));
        assert!(check(RuleName::FooterMaxLineLength, &length, "fix: x\n\nRefs #1").is_none());
        assert!(
            check(RuleName::FooterMaxLineLength, &length, "fix: x\n\nReviewed-by: Someone").is_some()
        );
    }

    #[test]
    fn test_disabled_rule_never_fires() {
        let entry = RuleEntry::new(Severity::Disabled, Applicability::Never);
        assert!(check(RuleName::ScopeEmpty, &entry, "feat: x").is_none());
    }

    #[test]
    fn test_issue_carries_severity() {
        let entry = RuleEntry::new(Severity::Warning, Applicability::Never);
        let issue = check(RuleName::ScopeEmpty, &entry, "feat: x").unwrap();
        assert_eq!(issue.level, Severity::Warning);
        assert_eq!(issue.name, "scope-empty");
    }
}
