// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for clint.
//!
//! This module handles loading the rule table, merging it over the presets
//! it extends, and validating it before any message is linted.

pub mod default;
mod loader;
pub mod preset;
mod schema;

pub use default::{default_config, project_config, PROJECT_CONFIG};
pub use loader::{
    find_config_file, find_config_file_from, load_config, merge_configs, parse_config,
    resolve_config, validate_config,
};
pub use schema::*;
