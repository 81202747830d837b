// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit linting.
//!
//! This module knows every rule a configuration may name, how each one
//! is evaluated, and how the results are reported.

mod builtin;
mod case;
mod engine;
mod registry;
mod report;

pub use builtin::evaluate;
pub use case::Case;
pub use engine::Linter;
pub use registry::{ParamKind, RuleName};
pub use report::{LintIssue, LintReport};
