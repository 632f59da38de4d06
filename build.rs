// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use vergen::EmitBuilder;

// Full SHA; `version::version_string` shortens it for display.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    EmitBuilder::builder()
        .git_sha(false)
        .git_commit_date()
        .emit()
        .map_err(Into::into)
}
