// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message handling.
//!
//! Parsing a raw message into the parts the rules look at, and deciding
//! which messages are not linted at all.

mod ignore;
pub mod message;

pub use ignore::Ignores;
pub use message::{strip_comments, CommitMessage};
