// envgen: typed accessor generator for `.env` files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Key → accessor identifier conversion.
//!
//! ```text
//! APP_NAME --lowercase--> app_name --case--> appName | app_name
//!                                               |
//!                                        make_rust_ident()
//!   1ST_KEY  --> _1stKey     (leading digit)
//!   TYPE     --> r#type      (keyword)
//!   SELF     --> self_       (keyword that cannot be raw)
//!   ___      --> error       (no usable characters)
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Naming convention for generated accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessorCase {
    /// `APP_NAME` → `appName`.
    #[default]
    Camel,
    /// `APP_NAME` → `app_name`.
    Snake,
}

impl std::fmt::Display for AccessorCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Camel => write!(f, "camel"),
            Self::Snake => write!(f, "snake"),
        }
    }
}

impl std::str::FromStr for AccessorCase {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "camel" | "camelcase" => Ok(Self::Camel),
            "snake" | "snake_case" => Ok(Self::Snake),
            _ => Err(ConfigError::InvalidValue {
                section: "generate".to_string(),
                key: "accessor_case".to_string(),
                message: format!("expected 'camel' or 'snake', got '{s}'"),
            }),
        }
    }
}

/// Converts a key to camelCase: lower-case everything, then drop each `_`
/// that precedes a letter and upper-case that letter.
#[must_use]
pub fn to_camel_case(key: &str) -> String {
    let lower = key.to_lowercase();
    let mut out = String::with_capacity(lower.len());
    let mut chars = lower.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '_'
            && let Some(&next) = chars.peek()
            && next.is_ascii_alphabetic()
        {
            out.push(next.to_ascii_uppercase());
            chars.next();
            continue;
        }
        out.push(ch);
    }

    out
}

/// Converts a key to snake_case (lower-cases it).
#[must_use]
pub fn to_snake_case(key: &str) -> String {
    key.to_lowercase()
}

/// Rust keywords usable as raw identifiers (`r#type`).
const RAW_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be written as raw identifiers.
const NON_RAW_KEYWORDS: &[&str] = &["self", "Self", "super", "crate"];

/// Whether `name` is a Rust keyword, strict or reserved.
#[must_use]
pub fn is_keyword(name: &str) -> bool {
    RAW_KEYWORDS.contains(&name) || NON_RAW_KEYWORDS.contains(&name)
}

/// Converts `key` to a legal Rust accessor name in the requested case.
///
/// Returns `None` if nothing usable remains (e.g. a key made of underscores).
#[must_use]
pub fn to_identifier(key: &str, case: AccessorCase) -> Option<String> {
    let converted = match case {
        AccessorCase::Camel => to_camel_case(key),
        AccessorCase::Snake => to_snake_case(key),
    };
    make_rust_ident(converted)
}

fn make_rust_ident(name: String) -> Option<String> {
    if name.chars().all(|ch| ch == '_') {
        return None;
    }
    if name.starts_with(|ch: char| ch.is_ascii_digit()) {
        return Some(format!("_{name}"));
    }
    if NON_RAW_KEYWORDS.contains(&name.as_str()) {
        return Some(format!("{name}_"));
    }
    if RAW_KEYWORDS.contains(&name.as_str()) {
        return Some(format!("r#{name}"));
    }
    Some(name)
}
