// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Lint result types.

use crate::cli::args::OutputFormat;
use crate::config::Severity;
use console::{style, Style};
use serde::Serialize;

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintIssue {
    /// Rule name, e.g. `type-enum`.
    pub name: String,
    /// Severity the rule was configured with.
    pub level: Severity,
    /// Human-readable message.
    pub message: String,
}

impl LintIssue {
    /// Whether this issue fails the lint.
    pub fn is_error(&self) -> bool {
        self.level == Severity::Error
    }

    /// Format the issue for terminal output.
    pub fn format(&self) -> String {
        let (prefix, message_style) = if self.is_error() {
            (style("✖").red().bold(), Style::new().red())
        } else {
            (style("⚠").yellow().bold(), Style::new().yellow())
        };

        format!(
            "{}   {} {}",
            prefix,
            message_style.apply_to(&self.message),
            style(format!("[{}]", self.name)).dim()
        )
    }
}

/// Result of linting one commit message.
#[derive(Debug, Clone)]
pub struct LintReport {
    /// The original message.
    pub input: String,
    /// Commit SHA if linting an existing commit.
    pub commit_sha: Option<String>,
    /// Whether the message matched an ignore pattern.
    pub ignored: bool,
    /// Violations of error-level rules.
    pub errors: Vec<LintIssue>,
    /// Violations of warning-level rules.
    pub warnings: Vec<LintIssue>,
}

impl LintReport {
    /// Create a new, empty report.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            commit_sha: None,
            ignored: false,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Create a report for a skipped message.
    pub fn ignored(input: impl Into<String>) -> Self {
        Self {
            ignored: true,
            ..Self::new(input)
        }
    }

    /// Record an issue under errors or warnings by its level.
    pub fn push(&mut self, issue: LintIssue) {
        match issue.level {
            Severity::Error => self.errors.push(issue),
            Severity::Warning => self.warnings.push(issue),
            Severity::Disabled => {}
        }
    }

    /// Check if the lint passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the total number of issues.
    pub fn issue_count(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }

    /// Names of all violated rules, errors first.
    pub fn violated_rules(&self) -> Vec<&str> {
        self.errors
            .iter()
            .chain(&self.warnings)
            .map(|issue| issue.name.as_str())
            .collect()
    }

    /// Print the report to stdout.
    pub fn print(&self, format: Option<OutputFormat>) {
        match format {
            Some(OutputFormat::Json) => self.print_json(),
            _ => self.print_text(),
        }
    }

    /// Print in text format.
    fn print_text(&self) {
        let header = self.input.lines().next().unwrap_or("");

        if let Some(ref sha) = self.commit_sha {
            let short_sha = &sha[..7.min(sha.len())];
            let status = if self.is_valid() {
                style("✔").green().bold()
            } else {
                style("✖").red().bold()
            };
            println!("{} {} {}", status, style(short_sha).cyan(), header);
        } else {
            println!("{}   input: {}", style("⧗").dim(), header);
        }

        if self.ignored {
            println!("{}   ignored", style("○").dim());
            return;
        }

        for error in &self.errors {
            println!("{}", error.format());
        }

        for warning in &self.warnings {
            println!("{}", warning.format());
        }

        let summary = if self.issue_count() == 0 {
            style(self.summary()).green()
        } else if self.is_valid() {
            style(self.summary()).yellow()
        } else {
            style(self.summary()).red()
        };
        println!("\n{}", summary);
    }

    /// Print in JSON format.
    fn print_json(&self) {
        println!(
            "{}",
            serde_json::to_string_pretty(&self.to_json()).unwrap_or_default()
        );
    }

    /// The report as a JSON value.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "valid": self.is_valid(),
            "ignored": self.ignored,
            "commit": self.commit_sha,
            "input": self.input,
            "errors": self.errors,
            "warnings": self.warnings,
        })
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        format!(
            "found {} problems, {} warnings",
            self.errors.len(),
            self.warnings.len()
        )
    }
}
