// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading, preset resolution and validation.

use crate::commit::Ignores;
use crate::error::{ClintError, ConfigError, Result};
use crate::rules::{Case, ParamKind, RuleName};
use std::path::{Path, PathBuf};

use super::preset::load_preset;
use super::schema::{LintConfig, RuleEntry, RuleValue};

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &["clint.toml", ".clint.toml", ".config/clint.toml"];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }

        // Try parent directory
        if !current.pop() {
            break;
        }
    }

    if let Some(home) = dirs::home_dir() {
        for config_name in CONFIG_FILES {
            let config_path = home.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }
    }

    // XDG config directory
    if let Some(config_dir) = dirs::config_dir() {
        let clint_config = config_dir.join("clint").join("config.toml");
        if clint_config.exists() {
            return Some(clint_config);
        }
    }

    None
}

/// Load configuration from the default locations, falling back to the
/// built-in project table.
pub fn load_config() -> Result<LintConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using the project defaults");
            super::default::default_config()
        }
    }
}

/// Load, resolve and validate configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<LintConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(ClintError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ClintError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    resolve_config(parse_config(&content)?)
}

/// Parse configuration from a TOML string. No presets are merged.
pub fn parse_config(content: &str) -> Result<LintConfig> {
    toml::from_str(content).map_err(|e| {
        ClintError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })
}

/// Merge the presets named in `extends` under `config`, then validate.
pub fn resolve_config(config: LintConfig) -> Result<LintConfig> {
    let resolved = resolve_extends(config, &mut Vec::new())?;
    validate_config(&resolved)?;
    Ok(resolved)
}

fn resolve_extends(config: LintConfig, chain: &mut Vec<String>) -> Result<LintConfig> {
    let mut base = LintConfig::default();

    for name in &config.extends {
        if chain.contains(name) {
            return Err(ClintError::Config(ConfigError::InvalidValue {
                key: "extends".to_string(),
                message: format!("preset '{}' extends itself", name),
            }));
        }

        chain.push(name.clone());
        let preset = resolve_extends(load_preset(name)?, chain)?;
        chain.pop();

        base = merge_configs(base, preset);
    }

    Ok(merge_configs(base, config))
}

/// Merge two configurations, with the overlay taking precedence per rule.
pub fn merge_configs(base: LintConfig, overlay: LintConfig) -> LintConfig {
    let mut rules = base.rules;
    rules.extend(overlay.rules);

    let mut ignores = base.ignores;
    ignores.extend(overlay.ignores);

    LintConfig {
        extends: overlay.extends,
        default_ignores: overlay.default_ignores,
        ignores,
        rules,
    }
}

/// Check every rule name and parameter against the registry.
pub fn validate_config(config: &LintConfig) -> Result<()> {
    for (name, entry) in &config.rules {
        let rule = name.parse::<RuleName>().map_err(|_| ConfigError::UnknownRule {
            rule: name.clone(),
        })?;
        validate_entry(rule, entry)?;
    }

    Ignores::new(config.default_ignores, &config.ignores)?;

    Ok(())
}

fn validate_entry(rule: RuleName, entry: &RuleEntry) -> Result<()> {
    let invalid = |message: String| -> ClintError {
        ConfigError::InvalidValue {
            key: rule.as_str().to_string(),
            message,
        }
        .into()
    };

    let value = match (&entry.value, rule.param_kind()) {
        (None, ParamKind::None | ParamKind::Text) => return Ok(()),
        (None, _) if !entry.is_enabled() => return Ok(()),
        (None, _) => return Err(invalid("missing parameter".to_string())),
        (Some(value), _) => value,
    };

    match (rule.param_kind(), value) {
        (ParamKind::None, value) => Err(invalid(format!(
            "takes no parameter, got {}",
            value.kind()
        ))),
        (ParamKind::List, RuleValue::List(items)) => {
            if rule == RuleName::TypeEnum {
                validate_type_tokens(items).map_err(invalid)?;
            }
            Ok(())
        }
        (ParamKind::Case, RuleValue::Text(case)) => {
            validate_case(case).map_err(invalid)
        }
        (ParamKind::Case, RuleValue::List(cases)) if !cases.is_empty() => cases
            .iter()
            .try_for_each(|case| validate_case(case))
            .map_err(invalid),
        (ParamKind::Length, RuleValue::Number(n)) if *n > 0 => Ok(()),
        (ParamKind::Length, RuleValue::Number(n)) => {
            Err(invalid(format!("must be a positive integer, got {}", n)))
        }
        (ParamKind::Text, RuleValue::Text(text)) if !text.is_empty() => Ok(()),
        (kind, value) => Err(invalid(format!(
            "expected {}, got {} '{}'",
            expected(kind),
            value.kind(),
            value
        ))),
    }
}

fn expected(kind: ParamKind) -> &'static str {
    match kind {
        ParamKind::None => "no parameter",
        ParamKind::List => "a list of strings",
        ParamKind::Case => "a case name or a non-empty list of case names",
        ParamKind::Length => "a positive integer",
        ParamKind::Text => "a non-empty string",
    }
}

fn validate_case(case: &str) -> std::result::Result<(), String> {
    case.parse::<Case>()
        .map(|_| ())
        .map_err(|_| format!("unknown case '{}'", case))
}

/// Types must be non-empty, lower-case and hyphen-free.
fn validate_type_tokens(items: &[String]) -> std::result::Result<(), String> {
    if items.is_empty() {
        return Err("type list must not be empty".to_string());
    }

    for item in items {
        if item.is_empty() {
            return Err("type names must not be empty".to_string());
        }
        if item.contains('-') {
            return Err(format!("type '{}' must not contain '-'", item));
        }
        if item.to_lowercase() != *item {
            return Err(format!("type '{}' must be lower-case", item));
        }
    }

    Ok(())
}
