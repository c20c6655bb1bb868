// envgen: typed accessor generator for `.env` files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `.env` file parsing.
//!
//! ```text
//! parse(path)
//!   read bytes --> decode_text() (BOM aware)
//!        |
//!        v
//! parse_str(text) --> ParsedEnv
//!   entries    EnvSet (insertion ordered, last write wins)
//!   malformed  Vec<MalformedLine> (skipped, logged at warn)
//! ```
//!
//! # Line Grammar
//!
//! ```text
//! # full-line comment
//! [export] NAME = value        # inline comment (unquoted only)
//! [export] NAME = "value # kept"
//! [export] NAME = 'value'
//! ```

mod parser;


use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{EnvFileError, MalformedLine};
use crate::utility::encoding::decode_text;

pub use parser::{is_valid_key, parse_str};

/// Ordered mapping of env variable names to values, in first-seen order.
///
/// Built by the parser and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EnvSet {
    vars: IndexMap<String, String>,
}

impl EnvSet {
    /// Looks up the value for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterates `(name, value)` pairs in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterates names in file order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }

    /// Overwrites an existing value in place or appends a new name.
    pub(crate) fn insert(&mut self, name: String, value: String) {
        self.vars.insert(name, value);
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::default();
        for (name, value) in iter {
            set.insert(name.into(), value.into());
        }
        set
    }
}

/// Result of parsing env file text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedEnv {
    pub entries: EnvSet,
    /// Lines that were skipped; parsing never aborts on these.
    pub malformed: Vec<MalformedLine>,
}

/// Parses the env file at `path`.
///
/// Malformed lines are skipped and logged at `warn`.
///
/// # Errors
///
/// Returns [`EnvFileError::NotFound`] if the file does not exist, or
/// [`EnvFileError::Read`] if it cannot be read.
pub fn parse(path: impl AsRef<Path>) -> Result<EnvSet, EnvFileError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| EnvFileError::from_io(path, e))?;
    let decoded = decode_text(&bytes);
    let parsed = parse_str(&decoded.text);

    for line in &parsed.malformed {
        tracing::warn!(path = %path.display(), "skipping malformed env line {line}");
    }
    tracing::debug!(
        path = %path.display(),
        entries = parsed.entries.len(),
        skipped = parsed.malformed.len(),
        "parsed env file"
    );

    Ok(parsed.entries)
}
