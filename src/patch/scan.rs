// envgen: typed accessor generator for `.env` files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shallow structural scan of Rust source.
//!
//! Tracks brace depth line by line while skipping line comments, block
//! comments (nested), string literals, raw strings and char literals. This is
//! enough to tell top-level items from code inside bodies without a parser.

/// Structural facts about one source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LineInfo {
    /// Brace depth before the first character of the line.
    pub(crate) depth_start: usize,
    /// Brace depth after the last character of the line.
    pub(crate) depth_end: usize,
    /// The line begins inside a block comment or a multi-line string.
    pub(crate) starts_in_literal: bool,
}

impl LineInfo {
    /// The line starts at file level, outside any body or literal.
    pub(crate) const fn is_top_level(&self) -> bool {
        self.depth_start == 0 && !self.starts_in_literal
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Code,
    BlockComment(usize),
    Str,
    RawStr(usize),
}

/// Scans `lines` and returns one [`LineInfo`] per line.
pub(crate) fn scan_lines<S: AsRef<str>>(lines: &[S]) -> Vec<LineInfo> {
    let mut state = State::Code;
    let mut depth = 0usize;

    lines
        .iter()
        .map(|line| {
            let depth_start = depth;
            let starts_in_literal = state != State::Code;
            let chars: Vec<char> = line.as_ref().chars().collect();
            state = scan_line(&chars, state, &mut depth);
            LineInfo {
                depth_start,
                depth_end: depth,
                starts_in_literal,
            }
        })
        .collect()
}

fn scan_line(chars: &[char], mut state: State, depth: &mut usize) -> State {
    let at = |i: usize| chars.get(i).copied();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        match state {
            State::Code => match ch {
                '/' if at(i + 1) == Some('/') => break,
                '/' if at(i + 1) == Some('*') => {
                    state = State::BlockComment(1);
                    i += 2;
                    continue;
                }
                '"' => state = State::Str,
                'r' if starts_raw_string(chars, i) => {
                    let hashes = count_hashes(chars, i + 1);
                    state = State::RawStr(hashes);
                    i += hashes + 2;
                    continue;
                }
                '\'' => {
                    i = skip_char_literal(chars, i);
                    continue;
                }
                '{' => *depth += 1,
                '}' => *depth = depth.saturating_sub(1),
                _ => {}
            },
            State::BlockComment(level) => {
                if ch == '/' && at(i + 1) == Some('*') {
                    state = State::BlockComment(level + 1);
                    i += 2;
                    continue;
                }
                if ch == '*' && at(i + 1) == Some('/') {
                    state = if level <= 1 {
                        State::Code
                    } else {
                        State::BlockComment(level - 1)
                    };
                    i += 2;
                    continue;
                }
            }
            State::Str => match ch {
                '\\' => {
                    i += 2;
                    continue;
                }
                '"' => state = State::Code,
                _ => {}
            },
            State::RawStr(hashes) => {
                if ch == '"' && (1..=hashes).all(|k| at(i + k) == Some('#')) {
                    state = State::Code;
                    i += hashes + 1;
                    continue;
                }
            }
        }
        i += 1;
    }

    state
}

fn is_ident_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// `r"..."`, `r#"..."#` or `br"..."` starting at `i`, not inside an identifier.
fn starts_raw_string(chars: &[char], i: usize) -> bool {
    let standalone = match i.checked_sub(1).map(|p| chars[p]) {
        None => true,
        Some('b') => i < 2 || !is_ident_char(chars[i - 2]),
        Some(prev) => !is_ident_char(prev),
    };
    if !standalone {
        return false;
    }
    let hashes = count_hashes(chars, i + 1);
    chars.get(i + 1 + hashes) == Some(&'"')
}

fn count_hashes(chars: &[char], from: usize) -> usize {
    chars
        .get(from..)
        .map_or(0, |rest| rest.iter().take_while(|ch| **ch == '#').count())
}

/// Returns the index just past a char literal, or past the quote of a
/// lifetime.
fn skip_char_literal(chars: &[char], i: usize) -> usize {
    match chars.get(i + 1) {
        Some('\\') => {
            // Escaped literal: '\n', '\'', '\u{..}'
            let mut j = i + 3;
            while j < chars.len() && chars[j] != '\'' {
                j += 1;
            }
            j + 1
        }
        Some(_) if chars.get(i + 2) == Some(&'\'') => i + 3,
        _ => i + 1,
    }
}
