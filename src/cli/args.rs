// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// clint - declarative conventional-commit linter
///
/// Lints commit messages against a flat rule table.
#[derive(Parser, Debug)]
#[command(name = "clint")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Conventional commit message linter", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to lint if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Treat warnings as errors
    #[arg(long, global = true)]
    pub strict: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "CLINT_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Lint a commit message (default command)
    Lint(LintArgs),

    /// Lint existing commits
    Check(CheckArgs),

    /// Print the resolved configuration
    PrintConfig,

    /// Write the project configuration to clint.toml
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Arguments for the lint command.
#[derive(Parser, Debug, Default, Clone)]
pub struct LintArgs {
    /// Message to lint (reads stdin when neither this nor --edit is given)
    #[arg(conflicts_with = "edit")]
    pub message: Option<String>,

    /// Read the message from a file, default .git/COMMIT_EDITMSG
    #[arg(short, long, value_name = "FILE", num_args = 0..=1)]
    pub edit: Option<Option<PathBuf>>,
}

/// Arguments for the check command.
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Commit or range to check
    #[arg(default_value = "HEAD")]
    pub target: String,

    /// Check all commits in a range
    #[arg(long)]
    pub range: bool,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Default, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// Get the effective command, defaulting to Lint if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Lint(LintArgs::default()))
    }
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            target: "HEAD".to_string(),
            range: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_lint_message() {
        let args = Cli::parse_from(["clint", "lint", "feat(core): add thing"]);
        if let Some(Commands::Lint(lint)) = args.command {
            assert_eq!(lint.message.as_deref(), Some("feat(core): add thing"));
            assert!(lint.edit.is_none());
        } else {
            panic!("Expected Lint command");
        }
    }

    #[test]
    fn test_parse_lint_edit_default() {
        let args = Cli::parse_from(["clint", "lint", "--edit"]);
        if let Some(Commands::Lint(lint)) = args.command {
            assert_eq!(lint.edit, Some(None));
        } else {
            panic!("Expected Lint command");
        }
    }

    #[test]
    fn test_parse_lint_edit_path() {
        let args = Cli::parse_from(["clint", "lint", "--edit", "msg.txt"]);
        if let Some(Commands::Lint(lint)) = args.command {
            assert_eq!(lint.edit, Some(Some(PathBuf::from("msg.txt"))));
        } else {
            panic!("Expected Lint command");
        }
    }

    #[test]
    fn test_parse_check() {
        let args = Cli::parse_from(["clint", "check", "HEAD~5..HEAD", "--strict"]);
        assert!(args.strict);
        if let Some(Commands::Check(check_args)) = args.command {
            assert_eq!(check_args.target, "HEAD~5..HEAD");
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_parse_print_config() {
        let args = Cli::parse_from(["clint", "--format", "json", "print-config"]);
        assert!(matches!(args.command, Some(Commands::PrintConfig)));
        assert_eq!(args.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_default_command() {
        let args = Cli::parse_from(["clint"]);
        assert!(args.command.is_none());
        assert!(matches!(args.effective_command(), Commands::Lint(_)));
    }
}
