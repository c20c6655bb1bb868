// envgen: typed accessor generator for `.env` files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for envgen.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. <root>/envgen.toml
//! 3. --config FILE (repeatable)
//! 4. ENVGEN_* env vars
//! 5. --set section/key=value
//! 6. dedicated flags (--root, --dry)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! ENVGEN_GLOBAL__DRY=true             → global.dry = true
//! ENVGEN_PATHS__ENV_FILE=.env.local   → paths.env_file = ".env.local"
//! ENVGEN_GENERATE__ACCESSOR_CASE=snake → generate.accessor_case = "snake"
//! ```

pub mod loader;
pub mod paths;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::codegen::ident::is_keyword;
use crate::error::{ConfigError, EnvgenResult, Result};

use loader::ConfigLoader;
use paths::PathsConfig;
use types::{GenerateConfig, GlobalConfig, PatchConfig};

/// Default configuration file name, looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "envgen.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "ENVGEN";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub global: GlobalConfig,
    pub paths: PathsConfig,
    pub generate: GenerateConfig,
    pub patch: PatchConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use envgen::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("envgen.toml")
    ///     .with_env_prefix("ENVGEN")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Checks values that deserialize fine but cannot produce valid code.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` for the first offending value.
    pub fn validate(&self) -> EnvgenResult<()> {
        let invalid = |section: &str, key: &str, message: String| -> EnvgenResult<()> {
            Err(ConfigError::InvalidValue {
                section: section.to_string(),
                key: key.to_string(),
                message,
            }
            .into())
        };

        let file_name = &self.generate.file_name;
        match file_name.strip_suffix(".rs") {
            Some(stem) if !stem.is_empty() && !stem.contains(['/', '\\']) => {}
            _ => {
                return invalid(
                    "generate",
                    "file_name",
                    format!("expected a file name ending in '.rs', got '{file_name}'"),
                );
            }
        }
        if !is_rust_ident(&self.generate.type_name) {
            return invalid(
                "generate",
                "type_name",
                format!("'{}' is not a usable Rust identifier", self.generate.type_name),
            );
        }
        if self.generate.runtime_crate.trim().is_empty() {
            return invalid("generate", "runtime_crate", "must not be empty".to_string());
        }
        if !is_rust_ident(&self.patch.entry_function) {
            return invalid(
                "patch",
                "entry_function",
                format!("'{}' is not a usable Rust identifier", self.patch.entry_function),
            );
        }
        let pattern = &self.patch.ignore_pattern;
        if pattern.trim().is_empty() || pattern.contains(['\n', '\r']) {
            return invalid(
                "patch",
                "ignore_pattern",
                "must be a single non-empty line".to_string(),
            );
        }
        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// One `key = value` line per option, sorted by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        options.insert("global.dry", self.global.dry.to_string());
        self.format_paths_options(&mut options);
        self.format_generate_options(&mut options);
        self.format_patch_options(&mut options);

        let max_key_len = options.keys().map(|k| k.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_paths_options(&self, options: &mut BTreeMap<&'static str, String>) {
        let paths = &self.paths;
        options.insert("paths.root", paths.root.display().to_string());
        options.insert("paths.env_file", paths.env_file().display().to_string());
        options.insert("paths.source_dir", paths.source_dir().display().to_string());
        options.insert("paths.entry_file", paths.entry_file().display().to_string());
        options.insert(
            "paths.ignore_file",
            paths.ignore_file().display().to_string(),
        );
    }

    fn format_generate_options(&self, options: &mut BTreeMap<&'static str, String>) {
        let generate = &self.generate;
        options.insert("generate.file_name", generate.file_name.clone());
        options.insert("generate.accessor_case", generate.accessor_case.to_string());
        options.insert("generate.type_name", generate.type_name.clone());
        options.insert("generate.runtime_crate", generate.runtime_crate.clone());
    }

    fn format_patch_options(&self, options: &mut BTreeMap<&'static str, String>) {
        let patch = &self.patch;
        options.insert("patch.entry_point", patch.entry_point.to_string());
        options.insert("patch.entry_function", patch.entry_function.clone());
        options.insert("patch.ignore_pattern", patch.ignore_pattern.clone());
    }
}

fn is_rust_ident(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && name != "_"
        && !is_keyword(name)
}
