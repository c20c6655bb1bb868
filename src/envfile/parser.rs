// envgen: typed accessor generator for `.env` files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{EnvSet, ParsedEnv};
use crate::error::{MalformedKind, MalformedLine};

/// Parses env file text line by line.
///
/// Never fails: lines that cannot be parsed end up in
/// [`ParsedEnv::malformed`] and the rest of the input is still read.
#[must_use]
pub fn parse_str(input: &str) -> ParsedEnv {
    let mut entries = EnvSet::default();
    let mut malformed = Vec::new();

    for (idx, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match parse_line(line) {
            Ok((name, value)) => entries.insert(name.to_owned(), value),
            Err(kind) => malformed.push(MalformedLine {
                line: idx + 1,
                content: line.to_owned(),
                kind,
            }),
        }
    }

    ParsedEnv { entries, malformed }
}

/// Returns `true` if `name` is a usable variable name (`[A-Za-z0-9_]+`).
#[must_use]
pub fn is_valid_key(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

fn parse_line(line: &str) -> Result<(&str, String), MalformedKind> {
    let line = strip_export(line);

    let Some((name, raw_value)) = line.split_once('=') else {
        return Err(MalformedKind::MissingSeparator);
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(MalformedKind::MissingKey);
    }
    if !is_valid_key(name) {
        return Err(MalformedKind::InvalidKey);
    }

    Ok((name, parse_value(raw_value.trim())))
}

fn strip_export(line: &str) -> &str {
    match line.strip_prefix("export") {
        Some(rest) if rest.starts_with(char::is_whitespace) => rest.trim_start(),
        _ => line,
    }
}

fn parse_value(raw: &str) -> String {
    if let Some(inner) = quoted_inner(raw) {
        return inner.to_owned();
    }
    // Unquoted: everything from the first `#` on is a comment.
    let value = raw.split_once('#').map_or(raw, |(head, _)| head);
    value.trim_end().to_owned()
}

/// Text between an opening quote and the first matching quote that is
/// followed only by whitespace or a `# comment`.
///
/// `None` when `raw` does not start with a quote or no such closing quote
/// exists; the value is then read as unquoted.
fn quoted_inner(raw: &str) -> Option<&str> {
    let quote = raw.chars().next().filter(|ch| *ch == '"' || *ch == '\'')?;
    let inner = &raw[1..];
    inner.match_indices(quote).find_map(|(end, _)| {
        let tail = inner[end + 1..].trim_start();
        (tail.is_empty() || tail.starts_with('#')).then(|| &inner[..end])
    })
}
