// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! clint - declarative conventional-commit linter
//!
//! The rule table is a flat mapping from rule name to
//! `[severity, applicability, value]`, extending a named preset.
//!
//! # Features
//!
//! - **Declarative rules**: the whole policy lives in one TOML table
//! - **Presets**: extend `config-conventional` and override per rule
//! - **Load-time validation**: unknown rules and bad parameters fail early
//! - **Git integration**: lint `COMMIT_EDITMSG`, a commit, or a range
//!
//! # Example
//!
//! ```no_run
//! use clint::config::LintConfig;
//! use clint::rules::Linter;
//!
//! let linter = Linter::new(LintConfig::load().unwrap()).unwrap();
//! let report = linter.lint("feat(auth): add token refresh").unwrap();
//! assert!(report.is_valid());
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod rules;

// Re-exports for convenience
pub use config::LintConfig;
pub use error::{ClintError, Result};
pub use rules::Linter;

/// Version information embedded at compile time.
pub mod version {
    /// The current version of clint.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// Value vergen emits when the build has no git metadata to read.
    const PLACEHOLDER: &str = "VERGEN_IDEMPOTENT_OUTPUT";

    fn known(value: Option<&'static str>) -> Option<&'static str> {
        value.filter(|v| !v.is_empty() && *v != PLACEHOLDER)
    }

    /// The git SHA at compile time (if available).
    pub fn git_sha() -> Option<&'static str> {
        known(option_env!("VERGEN_GIT_SHA"))
    }

    /// The git commit date at compile time (if available).
    pub fn git_commit_date() -> Option<&'static str> {
        known(option_env!("VERGEN_GIT_COMMIT_DATE"))
    }

    /// The target triple clint was built for (if available).
    pub fn target() -> Option<&'static str> {
        known(option_env!("VERGEN_CARGO_TARGET_TRIPLE"))
    }

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (git_sha(), git_commit_date()) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }

}
