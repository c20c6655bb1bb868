// envgen: typed accessor generator for `.env` files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            EnvgenError (~24 bytes)
//!                     |
//!   +--------+--------+--------+------+
//!   |        |        |        |      |
//!   v        v        v        v      v
//! EnvFile Generate  Config     Fs   Other
//!   Box     Box      Box      Box  Box<str>
//!
//! Sub-errors (unboxed internally):
//!   EnvFile   NotFound, Read
//!   Generate  IdentifierCollision, ReservedIdentifier, InvalidIdentifier
//!   Config    ParseError, InvalidValue
//!   Fs        NotFound, PermissionDenied, IoError
//!
//! Soft diagnostics (never raised):
//!   MalformedLine  MissingSeparator, MissingKey, InvalidKey
//! ```

use std::io::ErrorKind;
use std::path::Path;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`EnvgenError`].
pub type EnvgenResult<T> = std::result::Result<T, EnvgenError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum EnvgenError {
    /// Env file could not be loaded.
    #[error("env file error: {0}")]
    EnvFile(#[from] Box<EnvFileError>),

    /// Module generation failed.
    #[error("generate error: {0}")]
    Generate(#[from] Box<GenerateError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

/// Create a generic [`EnvgenError::Other`] from a message.
pub fn other(message: impl Into<String>) -> EnvgenError {
    EnvgenError::Other(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for EnvgenError {
                fn from(err: $error) -> Self {
                    EnvgenError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    EnvFileError => EnvFile,
    GenerateError => Generate,
    ConfigError => Config,
    FsError => Fs,
}

// --- Env File Errors ---

/// Errors raised while loading an env file.
#[derive(Debug, Error)]
pub enum EnvFileError {
    /// The env file does not exist.
    #[error("env file not found: {path}")]
    NotFound { path: String },

    /// The env file exists but could not be read.
    #[error("failed to read env file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl EnvFileError {
    /// Classify an I/O error raised while reading `path`.
    #[must_use]
    pub fn from_io(path: &Path, source: std::io::Error) -> Self {
        let path = path.display().to_string();
        if source.kind() == ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Read { path, source }
        }
    }
}

// --- Malformed Lines ---

/// Why an env file line was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedKind {
    /// No `=` on the line.
    MissingSeparator,
    /// Nothing before the `=`.
    MissingKey,
    /// Key contains characters outside `[A-Za-z0-9_]`.
    InvalidKey,
}

impl std::fmt::Display for MalformedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSeparator => write!(f, "missing '=' separator"),
            Self::MissingKey => write!(f, "missing key"),
            Self::InvalidKey => write!(f, "invalid key"),
        }
    }
}

/// A skipped env file line.
///
/// Soft error: parsing continues past it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}: {content}")]
pub struct MalformedLine {
    /// 1-based line number.
    pub line: usize,
    /// The trimmed line text.
    pub content: String,
    pub kind: MalformedKind,
}

// --- Generate Errors ---

/// Errors raised while rendering a module.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Two keys map to the same accessor name.
    #[error("keys '{first}' and '{second}' both map to accessor '{ident}'")]
    IdentifierCollision {
        ident: String,
        first: String,
        second: String,
    },

    /// A key maps to a method the generated type already defines.
    #[error("key '{key}' maps to reserved accessor '{ident}'")]
    ReservedIdentifier { key: String, ident: String },

    /// A key cannot be turned into a Rust identifier.
    #[error("key '{key}' does not produce a valid identifier")]
    InvalidIdentifier { key: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration input.
    #[error("failed to parse config '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// Permission denied.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Classify an I/O error raised while touching `path`.
    #[must_use]
    pub fn from_io(path: &Path, source: std::io::Error) -> Self {
        let path = path.display().to_string();
        match source.kind() {
            ErrorKind::NotFound => Self::NotFound(path),
            ErrorKind::PermissionDenied => Self::PermissionDenied(path),
            _ => Self::IoError { path, source },
        }
    }
}
