// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for clint.
//!
//! Configuration errors are raised while the rule table is loaded, before
//! any commit message is evaluated. Lint errors carry the outcome of a
//! failed evaluation so the CLI can turn it into a non-zero exit.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for clint operations.
#[derive(Error, Debug)]
pub enum ClintError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Lint outcome errors
    #[error("Lint failed: {0}")]
    Lint(#[from] LintError),

    // Commit message errors
    #[error("Commit error: {0}")]
    Commit(#[from] CommitError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Unknown rule '{rule}'")]
    UnknownRule { rule: String },

    #[error("Unknown preset '{preset}'")]
    UnknownPreset { preset: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Invalid commit reference: {reference}")]
    InvalidReference { reference: String },

    #[error("Git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },
}

/// Errors describing a failed lint run.
#[derive(Error, Debug)]
pub enum LintError {
    #[error("{errors} errors, {warnings} warnings")]
    Violations { errors: usize, warnings: usize },
}

/// Commit message errors.
#[derive(Error, Debug)]
pub enum CommitError {
    #[error("Empty commit message")]
    EmptyMessage,
}

/// Result type alias for clint operations.
pub type Result<T> = std::result::Result<T, ClintError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| ClintError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NotFound {
            path: PathBuf::from("/path/to/clint.toml"),
        };
        assert!(err.to_string().contains("/path/to/clint.toml"));
    }

    #[test]
    fn test_unknown_rule_display() {
        let err = ConfigError::UnknownRule {
            rule: "type-emum".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown rule 'type-emum'");
    }

    #[test]
    fn test_clint_error_from_config_error() {
        let config_err = ConfigError::UnknownPreset {
            preset: "config-angular".to_string(),
        };
        let err: ClintError = config_err.into();
        assert!(err.to_string().starts_with("Configuration error"));
        assert!(err.to_string().contains("config-angular"));
    }

    #[test]
    fn test_lint_error_display() {
        let err: ClintError = LintError::Violations {
            errors: 3,
            warnings: 1,
        }
        .into();
        assert_eq!(err.to_string(), "Lint failed: 3 errors, 1 warnings");
    }

    #[test]
    fn test_result_ext_context() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        let err = res.context("read message").unwrap_err();
        assert_eq!(err.to_string(), "read message: missing");
    }
}
