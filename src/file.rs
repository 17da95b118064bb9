//! Loading and saving `.ini` files.
//!
//! The parser itself only sees text. This module checks the path extension,
//! moves whole files through a [`TextStore`], and maps failures onto
//! [`FileError`]. [`FsStore`] is the real filesystem; tests substitute a mock.
#![cfg_attr(test, allow(missing_docs, missing_debug_implementations))]

use std::io;
use std::path::Path;

use crate::document::Document;
use crate::error::{FileError, IniError};
use crate::parser::{ParseOptions, Parser};

/// Extension required on every path handled by this module.
pub const INI_EXTENSION: &str = "ini";

/// Whole-file text storage.
#[cfg_attr(test, mockall::automock)]
pub trait TextStore {
    /// Read the entire file at `path` as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the file is missing or unreadable.
    fn read_all_text(&self, path: &Path) -> io::Result<String>;

    /// Replace the contents of the file at `path` with `text`.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the file cannot be written.
    fn write_all_text(&self, path: &Path, text: &str) -> io::Result<()>;
}

/// [`TextStore`] backed by [`std::fs`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStore;

impl TextStore for FsStore {
    fn read_all_text(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write_all_text(&self, path: &Path, text: &str) -> io::Result<()> {
        std::fs::write(path, text)
    }
}

/// Whether `path` ends in `.ini`.
#[must_use]
pub fn has_ini_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == INI_EXTENSION)
}

fn check_extension(path: &Path) -> Result<(), FileError> {
    if has_ini_extension(path) {
        Ok(())
    } else {
        Err(FileError::InvalidExtension {
            path: path.to_path_buf(),
        })
    }
}

/// Load and parse an `.ini` file from disk with the default options.
///
/// # Errors
///
/// Returns [`FileError::InvalidExtension`] for a non-`.ini` path,
/// [`FileError::Io`] if the file cannot be read, or the parse error.
pub fn load_file(path: impl AsRef<Path>) -> Result<Document, IniError> {
    load_file_with(&FsStore, path.as_ref(), ParseOptions::default())
}

/// Load and parse an `.ini` file through `store`.
///
/// # Errors
///
/// See [`load_file`].
pub fn load_file_with<S: TextStore + ?Sized>(
    store: &S,
    path: &Path,
    options: ParseOptions,
) -> Result<Document, IniError> {
    check_extension(path)?;
    let text = store.read_all_text(path).map_err(|source| FileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "loaded file");
    Ok(Parser::with_options(options).parse(&text)?)
}

/// Render `document` and write it to an `.ini` file on disk.
///
/// # Errors
///
/// Returns [`FileError::InvalidExtension`] for a non-`.ini` path or
/// [`FileError::Io`] if the file cannot be written.
pub fn save_file(document: &Document, path: impl AsRef<Path>) -> Result<(), IniError> {
    save_file_with(&FsStore, document, path.as_ref())
}

/// Render `document` and write it through `store`.
///
/// # Errors
///
/// See [`save_file`].
pub fn save_file_with<S: TextStore + ?Sized>(
    store: &S,
    document: &Document,
    path: &Path,
) -> Result<(), IniError> {
    check_extension(path)?;
    let text = document.to_string();
    store
        .write_all_text(path, &text)
        .map_err(|source| FileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(path = %path.display(), sections = document.len(), "saved file");
    Ok(())
}
