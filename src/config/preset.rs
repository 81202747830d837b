// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in presets a configuration can extend.

use crate::error::{ConfigError, Result};

use super::loader::parse_config;
use super::schema::LintConfig;

/// Conventional-commit defaults.
const CONFIG_CONVENTIONAL: &str = r#"
[rules]
body-leading-blank = [1, "always"]
body-max-line-length = [2, "always", 100]
footer-leading-blank = [1, "always"]
footer-max-line-length = [2, "always", 100]
header-max-length = [2, "always", 100]
header-trim = [2, "always"]
subject-case = [2, "never", ["sentence-case", "start-case", "pascal-case", "upper-case"]]
subject-empty = [2, "never"]
subject-full-stop = [2, "never", "."]
type-case = [2, "always", "lower-case"]
type-empty = [2, "never"]
type-enum = [2, "always", [
    "build",
    "chore",
    "ci",
    "docs",
    "feat",
    "fix",
    "perf",
    "refactor",
    "revert",
    "style",
    "test",
]]
"#;

/// Names accepted in `extends`.
pub const KNOWN_PRESETS: &[&str] = &["config-conventional", "@commitlint/config-conventional"];

/// Load a preset by name.
pub fn load_preset(name: &str) -> Result<LintConfig> {
    tracing::debug!("Resolving preset: {}", name);

    match name {
        "config-conventional" | "@commitlint/config-conventional" => {
            parse_config(CONFIG_CONVENTIONAL)
        }
        _ => Err(ConfigError::UnknownPreset {
            preset: name.to_string(),
        }
        .into()),
    }
}
