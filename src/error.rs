//! Error types for parsing, lookup and file access.
//!
//! Each concern has its own [`thiserror`] enum. Library entry points return
//! the narrowest one; [`IniError`] aggregates them for callers (such as the
//! file entry points and the CLI) that cross more than one boundary.
//!
//! # Error hierarchy
//!
//! ```text
//! IniError
//! ├── Parse(ParseError): grammar and uniqueness violations
//! ├── Lookup(LookupError): missing sections or keys
//! └── File(FileError): extension checks, read/write failures
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the crate.
#[derive(Error, Debug)]
pub enum IniError {
    /// The text could not be parsed into a document.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// A lookup against a document failed.
    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    /// Reading or writing an INI file failed.
    #[error("File error: {0}")]
    File(#[from] FileError),
}

/// Errors raised while parsing INI text.
///
/// Line numbers are 1-based and refer to physical lines of the input.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The same `[name]` header appeared twice.
    #[error("repeated section name [{name}] at line {line}")]
    DuplicateSection {
        /// Section name that was repeated.
        name: String,
        /// Line of the second header.
        line: usize,
    },

    /// A section header with nothing between the brackets.
    #[error("empty section name at line {line}")]
    EmptySectionName {
        /// Line of the offending header.
        line: usize,
    },

    /// A key-value line whose key is empty after trimming.
    #[error("empty key at line {line}: {text}")]
    EmptyKey {
        /// Line of the offending entry.
        line: usize,
        /// The trimmed line text.
        text: String,
    },

    /// The same key appeared twice within one section.
    #[error("repeated key '{key}' in section [{section}] at line {line}")]
    DuplicateKey {
        /// Key that was repeated.
        key: String,
        /// Section the key belongs to.
        section: String,
        /// Line of the second occurrence.
        line: usize,
    },

    /// A line that is not blank, a comment, a header, or a key-value pair.
    #[error("missing key-value operator '=' at line {line}: {text}")]
    MissingOperator {
        /// Line of the malformed entry.
        line: usize,
        /// The trimmed line text.
        text: String,
    },

    /// A key-value line before any section header, under
    /// [`OrphanKeys::Reject`](crate::OrphanKeys::Reject).
    #[error("key '{key}' outside of any section at line {line}")]
    KeyOutsideSection {
        /// Key of the orphaned entry.
        key: String,
        /// Line of the orphaned entry.
        line: usize,
    },

    /// The input contained no section headers.
    #[error("no sections found")]
    NoSectionsFound,

    /// The underlying reader failed.
    #[error("failed to read input at line {line}: {source}")]
    Read {
        /// Line that was being read.
        line: usize,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Errors raised by queries against a [`Document`](crate::Document).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The document has no sections.
    #[error("no sections found")]
    NoSectionsFound,

    /// The requested section does not exist.
    #[error("section [{0}] not found")]
    SectionNotFound(String),

    /// The requested key does not exist in the section.
    #[error("key '{key}' not found in section [{section}]")]
    KeyNotFound {
        /// Key that was requested.
        key: String,
        /// Section that was searched.
        section: String,
    },
}

/// Errors raised by the file entry points.
#[derive(Error, Debug)]
pub enum FileError {
    /// The path does not carry an `.ini` extension.
    #[error("not an INI file path: {}", path.display())]
    InvalidExtension {
        /// Offending path.
        path: PathBuf,
    },

    /// Reading or writing the file failed.
    #[error("IO error on {}: {source}", path.display())]
    Io {
        /// Path that was being read or written.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
