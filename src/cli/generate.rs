// envgen: typed accessor generator for `.env` files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the commands that read an env file.
//!
//! ```text
//! generate [FOLDER] [--no-patch]  → write module, patch entry point and ignore file
//! check [FOLDER]                  → fail if the module on disk is stale
//! options [--json]                → print resolved configuration
//! ```

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `generate` command.
#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    /// Folder under the source directory that receives the module.
    #[arg(value_name = "FOLDER")]
    pub folder: Option<PathBuf>,

    /// Skips patching the entry point.
    #[arg(long = "no-patch")]
    pub no_patch: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, Args)]
pub struct CheckArgs {
    /// Folder under the source directory holding the module.
    #[arg(value_name = "FOLDER")]
    pub folder: Option<PathBuf>,
}

/// Arguments for the `options` command.
#[derive(Debug, Clone, Default, Args)]
pub struct OptionsArgs {
    /// Prints the configuration as JSON.
    #[arg(long)]
    pub json: bool,
}
