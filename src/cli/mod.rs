// envgen: typed accessor generator for `.env` files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for envgen using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! envgen [global options] <command>
//! generate [FOLDER] [--no-patch]   (alias: gen)
//! init
//! check [FOLDER]
//! options [--json]
//! version
//! ```

pub mod generate;
pub mod global;


use crate::cli::generate::{CheckArgs, GenerateArgs, OptionsArgs};
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Typed accessor generator for `.env` files.
#[derive(Debug, Parser)]
#[command(
    name = "envgen",
    author,
    version,
    about = "Typed accessor generator for .env files",
    long_about = "envgen Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Reads the variable names of an env file and writes a Rust module\n\
                  with one accessor per name. Values are read again when the\n\
                  generated `init()` runs, so only adding or removing keys\n\
                  requires regenerating. `envgen generate` also wires the module\n\
                  into src/main.rs and adds the env file to .gitignore.",
    after_help = "CONFIGURATION:\n\n\
                  envgen reads `envgen.toml` from the project root (see --root) if\n\
                  present, then every --config file in order, then ENVGEN_*\n\
                  environment variables (ENVGEN_PATHS__ENV_FILE=.env.local), then\n\
                  --set options. Use `envgen options` to print the result."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Generates the accessor module and patches the project.
    #[command(visible_alias = "gen")]
    Generate(GenerateArgs),

    /// Creates a starter env file and ignores it.
    Init,

    /// Fails if the generated module is out of date.
    Check(CheckArgs),

    /// Lists all options and their resolved values.
    Options(OptionsArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
