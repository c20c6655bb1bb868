// envgen: typed accessor generator for `.env` files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Generate and check commands.
//!
//! ```text
//! generate:
//!   envfile::parse(env_file)        NotFound aborts the run
//!   codegen::generate()             collisions abort the run
//!   codegen::write_module()
//!   patch::patch_entry_point()      unless --no-patch or patch.entry_point = false
//!   patch::ensure_ignored()
//!
//! check:
//!   envfile::parse() --> codegen::generate() --> compare with module on disk
//! ```
//!
//! Steps run in order; a failing step does not undo earlier writes.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::cli::generate::{CheckArgs, GenerateArgs};
use crate::codegen::{generate, write_module};
use crate::config::Config;
use crate::envfile;
use crate::error::{self, EnvgenError, EnvgenResult, FsError, Result};
use crate::patch::{PatchOutcome, ensure_ignored, patch_entry_point};
use crate::utility::fs::read_text;

/// What `generate` did, step by step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub module_file: PathBuf,
    pub accessors: usize,
    /// `None` when entry-point patching was disabled.
    pub entry_point: Option<PatchOutcome>,
    pub ignore_file: PatchOutcome,
}

/// Main handler for the generate command.
///
/// # Errors
///
/// Returns an error if the env file is missing or unreadable, the keys
/// cannot be turned into accessors, the module would overwrite the entry
/// point, or a file cannot be written.
pub fn run_generate_command(args: &GenerateArgs, config: &Config) -> Result<GenerateReport> {
    let dry = config.global.dry;
    let (module_file, text, accessors) = render(args.folder.as_deref(), config)?;

    let entry_file = config.paths.entry_file();
    if module_file == entry_file {
        return Err(error::other(format!(
            "generated module {} would replace the entry point; change generate.file_name",
            module_file.display()
        ))
        .into());
    }

    write_module(&module_file, &text, dry).map_err(EnvgenError::from)?;
    info!(path = %module_file.display(), accessors, "wrote module");

    let entry_point = if args.no_patch || !config.patch.entry_point {
        info!("entry point patching disabled");
        None
    } else {
        let options = config.patch.to_options(&config.paths.env_file_literal());
        Some(patch_entry_point(&entry_file, &module_file, &options, dry)?)
    };

    let ignore_file = ensure_ignored(
        &config.paths.ignore_file(),
        &config.patch.ignore_pattern,
        dry,
    )?;

    Ok(GenerateReport {
        module_file,
        accessors,
        entry_point,
        ignore_file,
    })
}

/// Main handler for the check command.
///
/// # Errors
///
/// Returns an error if the module is missing or differs from what
/// `generate` would write now.
pub fn run_check_command(args: &CheckArgs, config: &Config) -> Result<()> {
    let (module_file, expected, accessors) = render(args.folder.as_deref(), config)?;

    let current = match read_text(&module_file) {
        Ok(file) => file.text,
        Err(FsError::NotFound(_)) => {
            return Err(error::other(format!(
                "{} does not exist; run `envgen generate`",
                module_file.display()
            ))
            .into());
        }
        Err(e) => return Err(EnvgenError::from(e).into()),
    };

    if current != expected {
        return Err(error::other(format!(
            "{} is out of date; run `envgen generate`",
            module_file.display()
        ))
        .into());
    }

    info!(path = %module_file.display(), accessors, "module is up to date");
    Ok(())
}

/// Parses the env file and renders the module text.
fn render(folder: Option<&Path>, config: &Config) -> EnvgenResult<(PathBuf, String, usize)> {
    let entries = envfile::parse(config.paths.env_file())?;

    let options = config
        .generate
        .to_options(&config.paths.env_file_literal());
    let text = generate(&entries, &options)?;

    let module_file = config
        .paths
        .module_file(folder, &config.generate.file_name);
    Ok((module_file, text, entries.len()))
}
