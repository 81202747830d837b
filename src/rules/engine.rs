// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for linting commit messages.

use crate::commit::{CommitMessage, Ignores};
use crate::config::{validate_config, LintConfig, RuleEntry};
use crate::error::Result;
use crate::git;

use super::builtin::evaluate;
use super::registry::RuleName;
use super::report::LintReport;

/// Lints commit messages against a resolved rule table.
#[derive(Debug, Clone)]
pub struct Linter {
    config: LintConfig,
    rules: Vec<(RuleName, RuleEntry)>,
    ignores: Ignores,
}

impl Linter {
    /// Create a linter from a resolved configuration.
    ///
    /// The configuration is validated again here, so a `Linter` can only
    /// exist for a table whose rule names and parameters are all known.
    pub fn new(config: LintConfig) -> Result<Self> {
        validate_config(&config)?;

        let rules = config
            .enabled_rules()
            .filter_map(|(name, entry)| {
                name.parse::<RuleName>()
                    .ok()
                    .map(|rule| (rule, entry.clone()))
            })
            .collect();
        let ignores = Ignores::new(config.default_ignores, &config.ignores)?;

        Ok(Self {
            config,
            rules,
            ignores,
        })
    }

    /// The configuration this linter was built from.
    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    /// Lint a commit message. Every enabled rule is evaluated; all
    /// violations are collected.
    pub fn lint(&self, message: &str) -> Result<LintReport> {
        if self.ignores.is_ignored(message) {
            tracing::debug!("Message ignored: {:?}", message.lines().next());
            return Ok(LintReport::ignored(message));
        }

        let parsed = CommitMessage::parse(message)?;
        let mut report = LintReport::new(message.trim_end());

        for (rule, entry) in &self.rules {
            if let Some(issue) = evaluate(*rule, entry, &parsed) {
                report.push(issue);
            }
        }

        Ok(report)
    }

    /// Lint a specific commit by reference.
    pub fn check_commit(&self, reference: &str) -> Result<LintReport> {
        let message = git::get_commit_message(reference)?;
        self.lint(&message)
    }

    /// Lint every commit in a range.
    pub fn check_range(&self, range: &str) -> Result<Vec<LintReport>> {
        let commits = git::get_commit_range(range)?;
        let mut reports = Vec::new();

        for (oid, message) in commits {
            let mut report = self.lint(&message)?;
            report.commit_sha = Some(oid);
            reports.push(report);
        }

        Ok(reports)
    }
}
