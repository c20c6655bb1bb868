// envgen: typed accessor generator for `.env` files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration sections other than `[paths]`.
//!
//! ```text
//! [global]    dry
//! [generate]  file_name, accessor_case, type_name, runtime_crate
//! [patch]     entry_point, entry_function, ignore_pattern
//! ```

use serde::{Deserialize, Serialize};

use crate::codegen::{AccessorCase, GenerateOptions};
use crate::patch::PatchOptions;

/// Global configuration options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Report what would change without writing any file.
    pub dry: bool,
}

/// Shape of the generated module.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateConfig {
    /// Module file name inside the source directory.
    pub file_name: String,
    pub accessor_case: AccessorCase,
    /// Name of the generated accessor struct.
    pub type_name: String,
    /// Crate path the generated module imports `runtime` from.
    pub runtime_crate: String,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            file_name: "env.rs".to_string(),
            accessor_case: AccessorCase::Camel,
            type_name: "Env".to_string(),
            runtime_crate: "envgen".to_string(),
        }
    }
}

impl GenerateConfig {
    /// Generator options reading `env_file` at runtime.
    #[must_use]
    pub fn to_options(&self, env_file: &str) -> GenerateOptions {
        GenerateOptions::builder()
            .with_env_file(env_file)
            .with_accessor_case(self.accessor_case)
            .with_type_name(self.type_name.as_str())
            .with_runtime_crate(self.runtime_crate.as_str())
            .build()
    }
}

/// Source patching.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PatchConfig {
    /// Insert the import and `init()` call into the entry point.
    pub entry_point: bool,
    /// Function receiving the `init()` call.
    pub entry_function: String,
    /// Line appended to the ignore file.
    pub ignore_pattern: String,
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            entry_point: true,
            entry_function: "main".to_string(),
            ignore_pattern: ".env".to_string(),
        }
    }
}

impl PatchConfig {
    #[must_use]
    pub fn to_options(&self, env_file: &str) -> PatchOptions {
        PatchOptions::builder()
            .with_entry_function(self.entry_function.as_str())
            .with_env_file(env_file)
            .build()
    }
}
