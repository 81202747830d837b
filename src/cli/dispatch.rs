// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use crate::config::{LintConfig, PROJECT_CONFIG};
use crate::error::{ClintError, ConfigError, LintError, Result, ResultExt};
use crate::rules::{LintReport, Linter};
use std::io::{IsTerminal, Read};
use std::path::Path;

use super::args::{CheckArgs, Cli, Commands, InitArgs, LintArgs, OutputFormat};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    match cli.effective_command() {
        Commands::Lint(args) => run_lint(&cli, args),
        Commands::Check(args) => run_check(&cli, args),
        Commands::PrintConfig => run_print_config(&cli),
        Commands::Init(args) => run_init(args),
        Commands::Version => run_version(),
    }
}

/// Load configuration from `--config` or the default locations.
fn load_config(cli: &Cli) -> Result<LintConfig> {
    if let Some(config_path) = &cli.config {
        LintConfig::load_from(config_path)
    } else {
        LintConfig::load()
    }
}

/// Run the lint command.
fn run_lint(cli: &Cli, args: LintArgs) -> Result<()> {
    tracing::debug!("Running lint command with args: {:?}", args);

    let linter = Linter::new(load_config(cli)?)?;
    let message = read_message(&args)?;
    let report = linter.lint(&message)?;

    finish(cli, &[report])
}

/// Run the check command.
fn run_check(cli: &Cli, args: CheckArgs) -> Result<()> {
    tracing::debug!("Running check command with args: {:?}", args);

    let linter = Linter::new(load_config(cli)?)?;

    let reports = if args.range || args.target.contains("..") {
        linter.check_range(&args.target)?
    } else {
        vec![linter.check_commit(&args.target)?]
    };

    finish(cli, &reports)
}

/// Print reports and turn violations into an error.
fn finish(cli: &Cli, reports: &[LintReport]) -> Result<()> {
    if cli.format == Some(OutputFormat::Json) && reports.len() > 1 {
        let all: Vec<_> = reports.iter().map(LintReport::to_json).collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&all).unwrap_or_default()
        );
    } else {
        for report in reports {
            report.print(cli.format);
        }
    }

    let errors: usize = reports.iter().map(|r| r.errors.len()).sum();
    let warnings: usize = reports.iter().map(|r| r.warnings.len()).sum();

    if errors > 0 || (cli.strict && warnings > 0) {
        Err(ClintError::Lint(LintError::Violations { errors, warnings }))
    } else {
        Ok(())
    }
}

/// Read the message from the argument, the edit file, or stdin.
fn read_message(args: &LintArgs) -> Result<String> {
    if let Some(ref message) = args.message {
        return Ok(message.clone());
    }

    if let Some(ref edit) = args.edit {
        let path = match edit {
            Some(path) => path.clone(),
            None => crate::git::edit_message_path()?,
        };
        tracing::debug!("Reading message from: {:?}", path);
        let raw = std::fs::read_to_string(&path)
            .context(format!("Failed to read {}", path.display()))?;
        return Ok(crate::commit::strip_comments(&raw));
    }

    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(ClintError::WithContext {
            context: "lint".to_string(),
            message: "No commit message given; pass one, use --edit, or pipe it on stdin"
                .to_string(),
        });
    }

    let mut message = String::new();
    stdin.read_to_string(&mut message)?;
    Ok(message)
}

/// Run the print-config command.
fn run_print_config(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;

    match cli.format {
        Some(OutputFormat::Json) => {
            let json = serde_json::to_string_pretty(&config).context("print-config")?;
            println!("{}", json);
        }
        _ => {
            let toml = toml::to_string_pretty(&config).context("print-config")?;
            print!("{}", toml);
        }
    }

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("clint {}", crate::version::version_string());

    if let Some(sha) = crate::version::git_sha() {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::git_commit_date() {
        println!("commit date: {}", date);
    }
    if let Some(target) = crate::version::target() {
        println!("target: {}", target);
    }

    Ok(())
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = Path::new("clint.toml");

    if config_path.exists() && !args.force {
        return Err(ClintError::Config(ConfigError::AlreadyExists {
            path: config_path.to_path_buf(),
        }));
    }

    std::fs::write(config_path, PROJECT_CONFIG).context("Failed to write configuration")?;

    println!("✔ Created clint.toml");

    Ok(())
}
