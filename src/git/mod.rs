// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Read-only access to commit messages for `clint check` and the
//! `commit-msg` hook.

mod repo;

pub use repo::{edit_message_path, get_commit_message, get_commit_range, Repository};
