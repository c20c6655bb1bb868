// envgen: typed accessor generator for `.env` files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::utility::encoding::LineEnding;

/// Returns `text` with `pattern` appended as its own line, or `None` if a line
/// already equals `pattern`.
///
/// A missing final newline is added before the pattern. The file's line
/// ending style is kept.
#[must_use]
pub fn append_pattern(text: &str, pattern: &str) -> Option<String> {
    if text.lines().any(|line| line.trim_end() == pattern) {
        return None;
    }

    let ending = LineEnding::detect(text).as_str();
    let mut out = String::with_capacity(text.len() + pattern.len() + 2 * ending.len());
    out.push_str(text);
    if !out.is_empty() && !out.ends_with('\n') {
        out.push_str(ending);
    }
    out.push_str(pattern);
    out.push_str(ending);
    Some(out)
}
