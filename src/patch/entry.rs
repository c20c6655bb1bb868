// envgen: typed accessor generator for `.env` files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry-point patching.
//!
//! ```text
//! source text --lines--> scan_lines() --> LineInfo per line
//!                               |
//!        +----------------------+-----------------------+
//!        v                      v                       v
//!  top-level imports     entry fn declaration     init call in body?
//!        |                      |                       |
//!        v                      v                       v
//!  import missing?       body opening line       call missing?
//!  insert before first   (first `{` at depth 0)  insert after opener
//!  import (or after
//!  the file prelude)
//!
//! entry fn missing --> EntryEdit::MissingEntryFunction (nothing written)
//! nothing to insert --> EntryEdit::Unchanged
//! ```

use std::path::{Component, Path, PathBuf};

use anyhow::Context;
use regex::Regex;

use super::scan::{LineInfo, scan_lines};
use crate::error::Result;
use crate::utility::encoding::LineEnding;

const INDENT: &str = "    ";

/// Outcome of applying an [`EntryPatch`] to source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryEdit {
    /// At least one line was inserted; holds the new text.
    Patched(String),
    /// Import and init call are already present.
    Unchanged,
    /// No entry function declaration was found; the text must not be written.
    MissingEntryFunction,
}

/// Inserts a module import and its `init()` call into an entry point.
#[derive(Debug, Clone)]
pub struct EntryPatch {
    module_name: String,
    module_path: String,
    entry_function: String,
    env_file: String,
    import_re: Regex,
    entry_re: Regex,
    plain_mod_re: Regex,
    init_re: Regex,
}

impl EntryPatch {
    /// Creates a patch importing `module_path` (relative to the entry file's
    /// directory, `/`-separated) as `module_name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the matching patterns cannot be compiled.
    pub fn new(
        module_name: impl Into<String>,
        module_path: impl Into<String>,
        entry_function: impl Into<String>,
        env_file: impl Into<String>,
    ) -> Result<Self> {
        let module_name = module_name.into();
        let entry_function = entry_function.into();

        let import_re = Regex::new(
            r"^(?:pub(?:\([^)]*\))?\s+)?(?:use\s|mod\s+[A-Za-z_][A-Za-z0-9_]*\s*;|extern\s+crate\s)",
        )
        .context("failed to compile import regex")?;
        let entry_re = Regex::new(&format!(
            r"^(?:pub(?:\([^)]*\))?\s+)?(?:const\s+)?(?:async\s+)?(?:unsafe\s+)?fn\s+{}\b",
            regex::escape(&entry_function)
        ))
        .context("failed to compile entry function regex")?;
        let plain_mod_re = Regex::new(&format!(
            r"^(?:pub(?:\([^)]*\))?\s+)?mod\s+{}\s*;",
            regex::escape(&module_name)
        ))
        .context("failed to compile module declaration regex")?;
        let init_re = Regex::new(&format!(
            r"(?:^|[^A-Za-z0-9_:])(?:(?:crate|self)::)?{}::init\(",
            regex::escape(&module_name)
        ))
        .context("failed to compile init call regex")?;

        Ok(Self {
            module_name,
            module_path: module_path.into(),
            entry_function,
            env_file: env_file.into(),
            import_re,
            entry_re,
            plain_mod_re,
            init_re,
        })
    }

    /// Creates a patch for `module_file` as seen from `entry_file`.
    ///
    /// The module name is the file stem with `-` replaced by `_`.
    ///
    /// # Errors
    ///
    /// Returns an error if `module_file` has no usable file stem or the
    /// matching patterns cannot be compiled.
    pub fn for_files(
        entry_file: &Path,
        module_file: &Path,
        entry_function: &str,
        env_file: &str,
    ) -> Result<Self> {
        let module_name = module_file
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map(|stem| stem.replace('-', "_"))
            .filter(|stem| !stem.is_empty())
            .with_context(|| format!("no module name in {}", module_file.display()))?;

        let entry_dir = entry_file.parent().unwrap_or_else(|| Path::new(""));
        let relative = relative_path(entry_dir, module_file);
        let module_path = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        Self::new(module_name, module_path, entry_function, env_file)
    }

    #[must_use]
    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    #[must_use]
    pub fn entry_function(&self) -> &str {
        &self.entry_function
    }

    /// `true` when the module sits next to the entry file under its own name,
    /// so a bare `mod` declaration finds it.
    fn is_plain_module(&self) -> bool {
        self.module_path == format!("{}.rs", self.module_name)
    }

    /// The import line this patch inserts.
    #[must_use]
    pub fn import_line(&self) -> String {
        if self.is_plain_module() {
            format!("mod {};", self.module_name)
        } else {
            format!(
                "#[path = \"{}\"] mod {};",
                self.module_path, self.module_name
            )
        }
    }

    /// The initialization call this patch inserts.
    #[must_use]
    pub fn init_call(&self) -> String {
        format!(
            "{}::init().expect(\"failed to load {}\");",
            self.module_name, self.env_file
        )
    }

    /// Applies the patch to `source`.
    ///
    /// All original lines keep their order; line endings and the trailing
    /// newline are preserved.
    #[must_use]
    pub fn apply(&self, source: &str) -> EntryEdit {
        let ending = LineEnding::detect(source);
        let lines: Vec<&str> = source.lines().collect();
        let infos = scan_lines(&lines);

        let Some(entry_idx) = self.find_entry_function(&lines, &infos) else {
            tracing::debug!(entry = %self.entry_function, "entry function not found");
            return EntryEdit::MissingEntryFunction;
        };
        let Some(open_idx) = body_open_line(&lines, &infos, entry_idx) else {
            tracing::debug!(entry = %self.entry_function, "entry function has no body");
            return EntryEdit::MissingEntryFunction;
        };

        let mut insertions: Vec<(usize, String)> = Vec::new();

        if self.has_init_call(&lines, &infos, open_idx) {
            tracing::debug!("init call already present");
        } else {
            let indent = body_indent(&lines, open_idx);
            insertions.push((open_idx + 1, format!("{indent}{}", self.init_call())));
        }

        if self.has_import(&lines, &infos) {
            tracing::debug!("module import already present");
        } else {
            insertions.extend(self.import_insertion(&lines, &infos));
        }

        if insertions.is_empty() {
            return EntryEdit::Unchanged;
        }

        let mut out: Vec<String> = lines.iter().map(|line| (*line).to_string()).collect();
        // Bottom up keeps earlier indices valid. Lines planned for the same
        // index end up in reverse planning order.
        insertions.sort_by(|a, b| b.0.cmp(&a.0));
        for (idx, line) in insertions {
            out.insert(idx, line);
        }

        let mut text = out.join(ending.as_str());
        if source.ends_with('\n') || source.is_empty() {
            text.push_str(ending.as_str());
        }
        EntryEdit::Patched(text)
    }

    fn find_entry_function(&self, lines: &[&str], infos: &[LineInfo]) -> Option<usize> {
        lines
            .iter()
            .zip(infos)
            .position(|(line, info)| info.is_top_level() && self.entry_re.is_match(line.trim()))
    }

    fn has_init_call(&self, lines: &[&str], infos: &[LineInfo], open_idx: usize) -> bool {
        if self.init_re.is_match(code_part(lines[open_idx])) {
            return true;
        }
        lines
            .iter()
            .zip(infos)
            .skip(open_idx + 1)
            .take_while(|(_, info)| info.depth_start > 0)
            .any(|(line, info)| !info.starts_in_literal && self.init_re.is_match(code_part(line)))
    }

    fn has_import(&self, lines: &[&str], infos: &[LineInfo]) -> bool {
        let import_line = self.import_line();
        let path_attr = format!("#[path = \"{}\"]", self.module_path);
        let plain = self.is_plain_module();

        lines.iter().zip(infos).any(|(line, info)| {
            let trimmed = line.trim();
            info.is_top_level()
                && (trimmed == import_line
                    || trimmed.contains(&path_attr)
                    || (plain && self.plain_mod_re.is_match(trimmed)))
        })
    }

    fn is_import(&self, line: &str, info: &LineInfo) -> bool {
        info.is_top_level() && self.import_re.is_match(line.trim())
    }

    /// Plans where the import goes: before the first top-level import,
    /// keeping attributes and doc comments attached to it, or after the
    /// file prelude when there is no import at all.
    fn import_insertion(&self, lines: &[&str], infos: &[LineInfo]) -> Vec<(usize, String)> {
        let import = self.import_line();

        if let Some(first) = (0..lines.len()).find(|&i| self.is_import(lines[i], &infos[i])) {
            let mut idx = first;
            while idx > 0 && is_attached_to_next(lines[idx - 1]) && infos[idx - 1].is_top_level() {
                idx -= 1;
            }
            return vec![(idx, import)];
        }

        let idx = prelude_end(lines, infos);
        let mut planned = Vec::with_capacity(2);
        if lines.get(idx).is_some_and(|line| !line.trim().is_empty()) {
            planned.push((idx, String::new()));
        }
        planned.push((idx, import));
        planned
    }
}

/// Line that opens the body of the function declared at `decl_idx`.
///
/// Multi-line signatures put `{` on a later line. `None` when the body opens
/// and closes on one line or the declaration ends with `;`.
fn body_open_line(lines: &[&str], infos: &[LineInfo], decl_idx: usize) -> Option<usize> {
    for idx in decl_idx..lines.len() {
        if infos[idx].depth_end > 0 {
            return Some(idx);
        }
        let code = code_part(lines[idx]);
        if code.contains('{') || code.trim_end().ends_with(';') {
            return None;
        }
    }
    None
}

/// Attribute or doc comment lines directly above an item.
fn is_attached_to_next(line: &str) -> bool {
    let trimmed = line.trim_start();
    (trimmed.starts_with("#[") && !trimmed.starts_with("#![")) || trimmed.starts_with("///")
}

/// Index just past the leading `//!` docs, `#![..]` attributes, comments and
/// blank lines. Trailing blank lines of the prelude are not included.
fn prelude_end(lines: &[&str], infos: &[LineInfo]) -> usize {
    let mut end = 0;
    for (idx, (line, info)) in lines.iter().zip(infos).enumerate() {
        let trimmed = line.trim();
        if info.starts_in_literal {
            end = idx + 1;
            continue;
        }
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with("//") || trimmed.starts_with("#![") || trimmed.starts_with("/*") {
            end = idx + 1;
            continue;
        }
        break;
    }
    end
}

/// Line text before any `//` comment.
fn code_part(line: &str) -> &str {
    line.split_once("//").map_or(line, |(code, _)| code)
}

/// Indentation for a line inserted right after the body's opening line.
fn body_indent(lines: &[&str], open_idx: usize) -> String {
    let decl_indent = leading_whitespace(lines[open_idx]);
    lines
        .iter()
        .skip(open_idx + 1)
        .find(|line| !line.trim().is_empty())
        .map(|line| leading_whitespace(line))
        .filter(|indent| indent.len() > decl_indent.len())
        .map_or_else(|| format!("{decl_indent}{INDENT}"), str::to_string)
}

fn leading_whitespace(line: &str) -> &str {
    let trimmed = line.trim_start();
    &line[..line.len() - trimmed.len()]
}

/// Path of `target` relative to the directory `base`, using `..` where the
/// two diverge. `.` components are ignored.
#[must_use]
pub fn relative_path(base: &Path, target: &Path) -> PathBuf {
    let base = normal_components(base);
    let target_components = normal_components(target);

    let common = base
        .iter()
        .zip(&target_components)
        .take_while(|(a, b)| a == b)
        .count();

    let mut out = PathBuf::new();
    for _ in common..base.len() {
        out.push("..");
    }
    for component in &target_components[common..] {
        out.push(component.as_os_str());
    }
    out
}

fn normal_components(path: &Path) -> Vec<Component<'_>> {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}
