// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure and parsing.
//!
//! Parsing is lenient: a header that does not follow the
//! `type(scope): subject` shape still parses, with the missing parts left
//! empty so the rules can report them.

use crate::error::{ClintError, CommitError, Result};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for the conventional commit header.
    static ref HEADER_REGEX: Regex =
        Regex::new(r"^(?P<type>\w*)(?:\((?P<scope>.*)\))?!?: (?P<subject>.*)$").unwrap();

    /// Regex for the first line of a footer (git trailer or breaking change note).
    static ref FOOTER_REGEX: Regex =
        Regex::new(r"^(?:BREAKING[ -]CHANGE|[A-Za-z][\w-]*)(?:: | #)\S").unwrap();
}

/// Line git writes above the diff in verbose commit templates.
const SCISSORS: &str = "# ------------------------ >8 ------------------------";

/// A parsed commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    /// First line, untrimmed.
    pub header: String,
    /// Commit type (feat, fix, etc.).
    pub commit_type: Option<String>,
    /// Optional scope.
    pub scope: Option<String>,
    /// Subject line.
    pub subject: Option<String>,
    /// Optional body.
    pub body: Option<String>,
    /// Optional footer (references, breaking changes, etc.).
    pub footer: Option<String>,
    /// Whether the line right after the header is blank.
    pub blank_after_header: bool,
    /// Whether the line right before the footer is blank.
    pub blank_before_footer: bool,
}

impl CommitMessage {
    /// Parse a commit message from a string.
    pub fn parse(message: &str) -> Result<Self> {
        let header = message.lines().next().unwrap_or_default();
        let lines: Vec<&str> = message.trim_end().lines().collect();

        if lines.iter().all(|l| l.trim().is_empty()) {
            return Err(ClintError::Commit(CommitError::EmptyMessage));
        }

        let captures = HEADER_REGEX.captures(header);
        let field = |name: &str| {
            captures
                .as_ref()
                .and_then(|c| c.name(name))
                .map(|m| m.as_str().to_string())
                .filter(|s| !s.is_empty())
        };
        let commit_type = field("type");
        let scope = field("scope");
        let subject = field("subject");

        let rest = &lines[1..];
        let blank_after_header = rest.first().map(|l| l.trim().is_empty()).unwrap_or(true);

        let (body, footer, blank_before_footer) = match split_body_footer(rest) {
            Some(split) => split,
            None => (None, None, false),
        };

        Ok(Self {
            header: header.to_string(),
            commit_type,
            scope,
            subject,
            body,
            footer,
            blank_after_header,
            blank_before_footer,
        })
    }

    /// Get the header length in characters.
    pub fn header_len(&self) -> usize {
        self.header.chars().count()
    }
}

/// Split the lines after the header into body and footer.
///
/// The footer is the tail of the last paragraph, starting at its first
/// trailer-looking line.
fn split_body_footer(rest: &[&str]) -> Option<(Option<String>, Option<String>, bool)> {
    let first = rest.iter().position(|l| !l.trim().is_empty())?;

    let last_para = rest
        .iter()
        .rposition(|l| l.trim().is_empty())
        .map(|i| i + 1)
        .unwrap_or(0)
        .max(first);

    let footer_start = rest[last_para..]
        .iter()
        .position(|l| FOOTER_REGEX.is_match(l))
        .map(|i| i + last_para);

    let body_end = footer_start.unwrap_or(rest.len());
    let body = join_trimmed(&rest[first..body_end]);
    let footer = footer_start.and_then(|start| join_trimmed(&rest[start..]));
    let blank_before_footer = footer_start
        .map(|start| start > 0 && rest[start - 1].trim().is_empty())
        .unwrap_or(false);

    Some((body, footer, blank_before_footer))
}

fn join_trimmed(lines: &[&str]) -> Option<String> {
    let text = lines.join("\n");
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Drop comment lines and everything below the scissors line, as git does
/// before storing a message written in an editor.
pub fn strip_comments(message: &str) -> String {
    message
        .lines()
        .take_while(|line| *line != SCISSORS)
        .filter(|line| !line.starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n")
}
