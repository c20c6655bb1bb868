// envgen: typed accessor generator for `.env` files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path configuration.
//!
//! ```text
//! root/
//!   .env          (env_file)
//!   .gitignore    (ignore_file)
//!   src/          (source_dir)
//!     main.rs     (entry_file, relative to source_dir)
//!     [folder/]env.rs  (generate.file_name)
//! ```
//!
//! Relative paths resolve against `root`; absolute paths are used as is.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Project root.
    pub root: PathBuf,
    pub env_file: PathBuf,
    pub source_dir: PathBuf,
    /// Entry point, relative to `source_dir`.
    pub entry_file: PathBuf,
    pub ignore_file: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            env_file: PathBuf::from(".env"),
            source_dir: PathBuf::from("src"),
            entry_file: PathBuf::from("main.rs"),
            ignore_file: PathBuf::from(".gitignore"),
        }
    }
}

impl PathsConfig {
    /// Joins `path` to `root` unless it is absolute.
    #[must_use]
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    #[must_use]
    pub fn env_file(&self) -> PathBuf {
        self.resolve(&self.env_file)
    }

    #[must_use]
    pub fn source_dir(&self) -> PathBuf {
        self.resolve(&self.source_dir)
    }

    #[must_use]
    pub fn entry_file(&self) -> PathBuf {
        self.source_dir().join(&self.entry_file)
    }

    #[must_use]
    pub fn ignore_file(&self) -> PathBuf {
        self.resolve(&self.ignore_file)
    }

    /// Location of the generated module, optionally inside `folder` under the
    /// source directory.
    #[must_use]
    pub fn module_file(&self, folder: Option<&Path>, file_name: &str) -> PathBuf {
        let dir = self.source_dir();
        match folder {
            Some(folder) => dir.join(folder).join(file_name),
            None => dir.join(file_name),
        }
    }

    /// Env file path as written into generated code: as configured, with `/`
    /// separators.
    #[must_use]
    pub fn env_file_literal(&self) -> String {
        self.env_file.to_string_lossy().replace('\\', "/")
    }
}
