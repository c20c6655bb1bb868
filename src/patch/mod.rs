// envgen: typed accessor generator for `.env` files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Idempotent source patching.
//!
//! ```text
//! patch_entry_point(entry_file, module_file, options, dry)
//!   missing file        --> warn, Skipped(MissingFile)
//!   read_text()         --> text + encoding
//!   EntryPatch::apply() --> Patched(text)          --> write_text() --> Updated
//!                       --> Unchanged              --> Unchanged
//!                       --> MissingEntryFunction   --> warn, Skipped(..)
//!
//! ensure_ignored(ignore_file, pattern, dry)
//!   missing file        --> write "pattern\n"      --> Created
//!   append_pattern()    --> Some(text)             --> Updated
//!                       --> None                   --> Unchanged
//! ```
//!
//! Every patch is safe to re-run: a second run over its own output reports
//! [`PatchOutcome::Unchanged`] and does not touch the file.

mod entry;
mod ignore;
mod scan;


use std::fmt;
use std::path::Path;

use anyhow::Context;
use bon::Builder;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::utility::encoding::Encoding;
use crate::utility::fs::{read_text, write_text};

pub use entry::{EntryEdit, EntryPatch, relative_path};
pub use ignore::append_pattern;

/// What a patch step did to its file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    Created,
    Updated,
    Unchanged,
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingFile,
    MissingEntryFunction,
}

impl fmt::Display for PatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => f.write_str("created"),
            Self::Updated => f.write_str("updated"),
            Self::Unchanged => f.write_str("unchanged"),
            Self::Skipped(reason) => write!(f, "skipped ({reason})"),
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFile => f.write_str("file not found"),
            Self::MissingEntryFunction => f.write_str("entry function not found"),
        }
    }
}

/// Options for [`patch_entry_point`].
#[derive(Debug, Clone, Builder)]
pub struct PatchOptions {
    /// Function that receives the init call.
    #[builder(into, setters(name = with_entry_function), default = String::from("main"))]
    entry_function: String,
    /// Env file named in the init call's failure message.
    #[builder(into, setters(name = with_env_file), default = String::from(".env"))]
    env_file: String,
}

impl Default for PatchOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl PatchOptions {
    #[must_use]
    pub fn entry_function(&self) -> &str {
        &self.entry_function
    }

    #[must_use]
    pub fn env_file(&self) -> &str {
        &self.env_file
    }
}

/// Adds the module import and its `init()` call to `entry_file`.
///
/// # Errors
///
/// Returns an error if the entry file exists but cannot be read or written.
pub fn patch_entry_point(
    entry_file: &Path,
    module_file: &Path,
    options: &PatchOptions,
    dry: bool,
) -> Result<PatchOutcome> {
    if !entry_file.is_file() {
        warn!(path = %entry_file.display(), "entry point not found, skipping");
        return Ok(PatchOutcome::Skipped(SkipReason::MissingFile));
    }

    let patch = EntryPatch::for_files(
        entry_file,
        module_file,
        options.entry_function(),
        options.env_file(),
    )?;
    let file = read_text(entry_file)
        .with_context(|| format!("failed to read entry point {}", entry_file.display()))?;

    match patch.apply(&file.text) {
        EntryEdit::Patched(text) => {
            if dry {
                info!(path = %entry_file.display(), "dry run: would patch entry point");
            } else {
                write_text(entry_file, &text, file.encoding).with_context(|| {
                    format!("failed to write entry point {}", entry_file.display())
                })?;
                info!(
                    path = %entry_file.display(),
                    module = patch.module_name(),
                    "patched entry point"
                );
            }
            Ok(PatchOutcome::Updated)
        }
        EntryEdit::Unchanged => {
            debug!(path = %entry_file.display(), "entry point already patched");
            Ok(PatchOutcome::Unchanged)
        }
        EntryEdit::MissingEntryFunction => {
            warn!(
                path = %entry_file.display(),
                function = patch.entry_function(),
                "entry function not found, skipping"
            );
            Ok(PatchOutcome::Skipped(SkipReason::MissingEntryFunction))
        }
    }
}

/// Makes sure `ignore_file` has a line equal to `pattern`.
///
/// # Errors
///
/// Returns an error if the ignore file cannot be read or written.
pub fn ensure_ignored(ignore_file: &Path, pattern: &str, dry: bool) -> Result<PatchOutcome> {
    if !ignore_file.exists() {
        if dry {
            info!(path = %ignore_file.display(), "dry run: would create ignore file");
        } else {
            write_text(ignore_file, &format!("{pattern}\n"), Encoding::Utf8).with_context(
                || format!("failed to create ignore file {}", ignore_file.display()),
            )?;
            info!(path = %ignore_file.display(), pattern, "created ignore file");
        }
        return Ok(PatchOutcome::Created);
    }

    let file = read_text(ignore_file)
        .with_context(|| format!("failed to read ignore file {}", ignore_file.display()))?;

    let Some(text) = append_pattern(&file.text, pattern) else {
        debug!(path = %ignore_file.display(), pattern, "pattern already ignored");
        return Ok(PatchOutcome::Unchanged);
    };

    if dry {
        info!(path = %ignore_file.display(), pattern, "dry run: would append ignore pattern");
    } else {
        write_text(ignore_file, &text, file.encoding)
            .with_context(|| format!("failed to write ignore file {}", ignore_file.display()))?;
        info!(path = %ignore_file.display(), pattern, "appended ignore pattern");
    }
    Ok(PatchOutcome::Updated)
}
