// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Messages that are not linted.

use crate::error::{ConfigError, Result};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Messages git or hosting tools generate on their own.
    static ref DEFAULT_IGNORES: Vec<Regex> = [
        r"(?m)^(?:Merge pull request(?:.*)|Merge (?:.*?) into (?:.*?)|Merge branch (?:.*?))(?:\r?\n)*$",
        r"(?m)^Merge tag (?:.*?)(?:\r?\n)*$",
        r"^(?:R|r)evert (?:.*)",
        r"^(?:amend|fixup|squash)!",
        r"^v?\d+\.\d+\.\d+(?:-[0-9A-Za-z.-]+)?(?:\+[0-9A-Za-z.-]+)?(?:\r?\n|$)",
        r"^(?:Merged (?:.*?)(?:in|into) (?:.*)|Merged PR (?:.*): (?:.*))",
        r"^Merge remote-tracking branch(?:\s*)(?:.*)",
        r"^Automatic merge(?:.*)",
        r"^Auto-merged (?:.*?) into (?:.*)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect();
}

/// Compiled ignore patterns.
#[derive(Debug, Clone, Default)]
pub struct Ignores {
    use_defaults: bool,
    patterns: Vec<Regex>,
}

impl Ignores {
    /// Compile the ignore set; invalid user patterns are configuration errors.
    pub fn new(use_defaults: bool, patterns: &[String]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|e| ConfigError::InvalidValue {
                    key: "ignores".to_string(),
                    message: format!("'{}' is not a valid regex: {}", pattern, e),
                })
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            use_defaults,
            patterns,
        })
    }

    /// Whether `message` should be skipped.
    pub fn is_ignored(&self, message: &str) -> bool {
        let defaults = self.use_defaults && DEFAULT_IGNORES.iter().any(|re| re.is_match(message));
        defaults || self.patterns.iter().any(|re| re.is_match(message))
    }
}
