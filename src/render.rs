//! Canonical text rendering of a [`Document`].
//!
//! Output is one `[name]` line per section followed by one `key=value` line
//! per entry, sections and keys in lexicographic order. Comments, blank lines
//! and original spacing are not reproduced, but parsing the output yields a
//! document equal to the one rendered.

use std::fmt;

use crate::document::Document;

/// Render `document` as INI text.
///
/// # Examples
///
/// ```
/// use iniparser::{Document, render};
///
/// let mut doc = Document::new();
/// doc.set("Email", "user", "hanya@mail.com");
/// assert_eq!(render(&doc), "[Email]\nuser=hanya@mail.com\n");
/// ```
#[must_use]
pub fn render(document: &Document) -> String {
    document.to_string()
}

/// Write the rendering of `document` to any [`fmt::Write`] sink.
///
/// # Errors
///
/// Propagates errors from the sink.
pub fn write_document<W: fmt::Write + ?Sized>(out: &mut W, document: &Document) -> fmt::Result {
    for (name, section) in document.iter() {
        writeln!(out, "[{name}]")?;
        for (key, value) in section {
            writeln!(out, "{key}={value}")?;
        }
    }
    Ok(())
}
