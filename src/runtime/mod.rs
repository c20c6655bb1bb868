// envgen: typed accessor generator for `.env` files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Backing store used by generated accessor modules.
//!
//! ```text
//! generated init() --> Env::load() --> EnvStore::load(ENV_FILE)
//!                                          |
//!                                   envfile::parse()
//!                                          |
//! generated accessor --> EnvStore::get(key) --> Option<&str>
//! ```
//!
//! A store is an ordinary value: tests build independent instances with
//! [`EnvStore::from_set`] instead of touching process-wide state.

#[cfg(test)]
mod tests;

use std::path::Path;

use crate::envfile;
use crate::error::EnvFileError;

pub use crate::envfile::EnvSet;

/// Result type returned by generated modules.
pub type Result<T> = std::result::Result<T, EnvFileError>;

/// Live env values behind a generated module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvStore {
    vars: EnvSet,
}

impl EnvStore {
    /// Parses the env file at `path` into a new store.
    ///
    /// # Errors
    ///
    /// Returns [`EnvFileError::NotFound`] if the file does not exist, or
    /// [`EnvFileError::Read`] if it cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        envfile::parse(path).map(Self::from_set)
    }

    #[must_use]
    pub const fn from_set(vars: EnvSet) -> Self {
        Self { vars }
    }

    /// Value for `key`, or `None` if the env file did not define it.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key)
    }

    /// Read-only view of every variable, in file order.
    #[must_use]
    pub const fn all(&self) -> &EnvSet {
        &self.vars
    }
}
