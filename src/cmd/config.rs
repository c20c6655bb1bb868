// envgen: typed accessor generator for `.env` files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config-related commands for envgen.

use anyhow::Context;

use crate::cli::generate::OptionsArgs;
use crate::config::Config;
use crate::error::Result;

/// Renders the resolved configuration as `options` prints it.
///
/// # Errors
///
/// Returns an error if the configuration cannot be serialized to JSON.
pub fn render_options(args: &OptionsArgs, config: &Config) -> Result<String> {
    if args.json {
        serde_json::to_string_pretty(config).context("failed to serialize configuration")
    } else {
        Ok(config.format_options().join("\n"))
    }
}

/// Display current configuration options.
///
/// # Errors
///
/// Returns an error if the configuration cannot be serialized to JSON.
pub fn run_options_command(args: &OptionsArgs, config: &Config) -> Result<()> {
    println!("{}", render_options(args, config)?);
    Ok(())
}
