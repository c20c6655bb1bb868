// envgen: typed accessor generator for `.env` files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Init command: starter env file plus ignore entry.

use anyhow::Context;
use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::patch::{PatchOutcome, ensure_ignored};
use crate::utility::encoding::Encoding;
use crate::utility::fs::write_text;

/// Contents written by `envgen init` when the env file does not exist.
pub const DEFAULT_ENV_FILE: &str = "\
# Variables read by the generated accessor module.
# Run `envgen generate` after adding or removing keys.
APP_NAME=\"my-app\"
APP_DEBUG=true
";

/// Outcome of the init command per file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitReport {
    pub env_file: PatchOutcome,
    pub ignore_file: PatchOutcome,
}

/// Main handler for the init command.
///
/// An existing env file is never touched.
///
/// # Errors
///
/// Returns an error if the env file or the ignore file cannot be written.
pub fn run_init_command(config: &Config) -> Result<InitReport> {
    let dry = config.global.dry;
    let env_path = config.paths.env_file();

    let env_file = if env_path.exists() {
        info!(path = %env_path.display(), "env file already exists");
        PatchOutcome::Unchanged
    } else if dry {
        info!(path = %env_path.display(), "dry run: would create env file");
        PatchOutcome::Created
    } else {
        write_text(&env_path, DEFAULT_ENV_FILE, Encoding::Utf8)
            .with_context(|| format!("failed to create {}", env_path.display()))?;
        info!(path = %env_path.display(), "created env file");
        PatchOutcome::Created
    };

    let ignore_file = ensure_ignored(
        &config.paths.ignore_file(),
        &config.patch.ignore_pattern,
        dry,
    )?;

    Ok(InitReport {
        env_file,
        ignore_file,
    })
}
