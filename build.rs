// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use vergen::EmitBuilder;

/// Embed the git SHA, commit date and target triple for `clint version`.
/// Outside a git checkout vergen warns and emits a placeholder, which
/// `clint::version` filters out.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    EmitBuilder::builder()
        .git_sha(true)
        .git_commit_date()
        .cargo_target_triple()
        .emit()?;
    Ok(())
}
