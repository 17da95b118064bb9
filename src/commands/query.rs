//! Commands that read a document without changing it.
use std::io::Write;

use anyhow::{Context as _, Result};

use crate::cli::{DumpOpts, FileOpts, GetOpts, GlobalOpts};

/// Print one section name per line.
///
/// # Errors
///
/// Returns the load error, or an error if `out` cannot be written.
pub fn sections(global: &GlobalOpts, opts: &FileOpts, out: &mut dyn Write) -> Result<()> {
    let doc = super::load(global, &opts.file)?;
    for name in doc.section_names()? {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

/// Print the value of one key. An empty value prints an empty line.
///
/// # Errors
///
/// Returns the load error, a lookup error if the section or key is missing,
/// or an error if `out` cannot be written.
pub fn get(global: &GlobalOpts, opts: &GetOpts, out: &mut dyn Write) -> Result<()> {
    let doc = super::load(global, &opts.file)?;
    let value = doc
        .get(&opts.section, &opts.key)
        .with_context(|| format!("reading {}", opts.file.display()))?;
    writeln!(out, "{value}")?;
    Ok(())
}

/// Print the whole document, as canonical INI or as pretty JSON.
///
/// # Errors
///
/// Returns the load error, or an error if serialization or `out` fails.
pub fn dump(global: &GlobalOpts, opts: &DumpOpts, out: &mut dyn Write) -> Result<()> {
    let doc = super::load(global, &opts.file)?;
    if opts.json {
        serde_json::to_writer_pretty(&mut *out, &doc).context("serializing document")?;
        writeln!(out)?;
    } else {
        write!(out, "{doc}")?;
    }
    Ok(())
}
