// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The project rule table.
//!
//! Kept as a literal TOML document so it reads the same as a checked-in
//! `clint.toml` and diffs cleanly. Used when no configuration file is
//! found, and written out by `clint init`.

use crate::error::Result;

use super::loader::{parse_config, resolve_config};
use super::schema::LintConfig;

/// Project configuration, extending the conventional preset.
pub const PROJECT_CONFIG: &str = r#"# clint configuration
extends = ["config-conventional"]

[rules]
type-enum = [2, "always", [
    "feat",
    "fix",
    "docs",
    "style",
    "refactor",
    "test",
    "chore",
    "ci",
    "perf",
    "build",
    "revert",
]]
type-case = [2, "always", "lower-case"]
type-empty = [2, "never"]
scope-empty = [2, "never"]
subject-empty = [2, "never"]
subject-full-stop = [2, "never", "."]
header-max-length = [2, "always", 72]
"#;

/// The project configuration as written, before presets are merged in.
pub fn project_config() -> Result<LintConfig> {
    parse_config(PROJECT_CONFIG)
}

/// Get the default configuration: the project table resolved against its presets.
pub fn default_config() -> Result<LintConfig> {
    resolve_config(project_config()?)
}
