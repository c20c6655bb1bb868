// envgen: typed accessor generator for `.env` files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem helpers for text files.
//!
//! ```text
//! read_text()     bytes --decode_text()--> TextFile { text, encoding }
//! write_text()    TextFile --encode_text()--> write_atomic()
//! write_atomic()  tempfile in target dir --> persist over destination
//! replace_file()  remove existing --> write_atomic()
//! ```

use std::io::{ErrorKind, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::FsError;
use crate::utility::encoding::{Encoding, decode_text, encode_text};

/// Text content read from disk, remembering its on-disk encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFile {
    pub text: String,
    pub encoding: Encoding,
}

/// Reads a text file, decoding it according to its BOM.
///
/// # Errors
///
/// Returns an [`FsError`] if the file cannot be read.
pub fn read_text(path: &Path) -> Result<TextFile, FsError> {
    let bytes = std::fs::read(path).map_err(|e| FsError::from_io(path, e))?;
    let decoded = decode_text(&bytes);
    Ok(TextFile {
        text: decoded.text.into_owned(),
        encoding: decoded.encoding,
    })
}

/// Writes text in the given encoding through [`write_atomic`].
///
/// # Errors
///
/// Returns an [`FsError`] if the file cannot be written.
pub fn write_text(path: &Path, text: &str, encoding: Encoding) -> Result<(), FsError> {
    write_atomic(path, &encode_text(text, encoding))
}

/// Writes `contents` to a temporary file next to `path`, then renames it into
/// place. Parent directories are created as needed.
///
/// # Errors
///
/// Returns an [`FsError`] if the directory, the temporary file, or the final
/// rename fails.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), FsError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(|e| FsError::from_io(parent, e))?;

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| FsError::from_io(parent, e))?;
    if let Err(e) = temp.write_all(contents).and_then(|()| temp.flush()) {
        return Err(FsError::from_io(temp.path(), e));
    }
    // Temporary files are created owner-only; match what a plain write would give.
    if let Some(permissions) = target_permissions(path) {
        temp.as_file()
            .set_permissions(permissions)
            .map_err(|e| FsError::from_io(temp.path(), e))?;
    }
    temp.persist(path)
        .map_err(|e| FsError::from_io(path, e.error))?;
    Ok(())
}

fn target_permissions(path: &Path) -> Option<std::fs::Permissions> {
    if let Ok(metadata) = std::fs::metadata(path) {
        return Some(metadata.permissions());
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        Some(std::fs::Permissions::from_mode(0o644))
    }
    #[cfg(not(unix))]
    {
        None
    }
}

/// Deletes any existing file at `path`, then writes `contents` fresh.
///
/// # Errors
///
/// Returns an [`FsError`] if the old file cannot be removed or the new one
/// cannot be written.
pub fn replace_file(path: &Path, contents: &[u8]) -> Result<(), FsError> {
    match std::fs::remove_file(path) {
        Ok(()) => tracing::debug!(path = %path.display(), "removed previous file"),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(FsError::from_io(path, e)),
    }
    write_atomic(path, contents)
}
