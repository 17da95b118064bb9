//! Commands that write a document back to disk.
use std::io::Write;

use anyhow::{Context as _, Result, bail};
use iniparser::{SetOutcome, file};

use crate::cli::{FmtOpts, GlobalOpts, SetOpts};

/// Upsert one key and save the document, in place unless `--output` is given.
///
/// # Errors
///
/// Returns an error if the section, key or value cannot be written back as
/// one INI line, the load error, or an error if the document cannot be saved.
pub fn set(global: &GlobalOpts, opts: &SetOpts) -> Result<()> {
    check_name("section", &opts.section)?;
    check_name("key", &opts.key)?;
    if opts.value.contains(['\n', '\r']) {
        bail!("value for key '{}' must be a single line", opts.key.trim());
    }

    let mut doc = super::load(global, &opts.file)?;

    match doc.set(opts.section.as_str(), opts.key.as_str(), opts.value.as_str()) {
        SetOutcome::InsertedSection => {
            tracing::info!("created section [{}] with key '{}'", opts.section, opts.key);
        }
        SetOutcome::InsertedKey => {
            tracing::info!("created key '{}' in section [{}]", opts.key, opts.section);
        }
        SetOutcome::Updated => {
            tracing::debug!("updated key '{}' in section [{}]", opts.key, opts.section);
        }
    }

    let target = opts.output.as_deref().unwrap_or(&opts.file);
    file::save_file(&doc, target).with_context(|| format!("saving {}", target.display()))
}

/// Reject a section name or key that would not read back as written.
fn check_name(kind: &str, name: &str) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        bail!("{kind} name must not be empty");
    }
    if name.starts_with([';', '#']) {
        bail!("{kind} name '{name}' would be read as a comment");
    }
    if name.contains(['=', '[', ']', '\n', '\r']) {
        bail!("{kind} name {name:?} must not contain '=', '[', ']' or a line break");
    }
    Ok(())
}

/// Print the canonical rendering, or write it to `--output`.
///
/// # Errors
///
/// Returns the load error, or an error if the output cannot be written.
pub fn fmt(global: &GlobalOpts, opts: &FmtOpts, out: &mut dyn Write) -> Result<()> {
    let doc = super::load(global, &opts.file)?;
    match &opts.output {
        Some(target) => {
            file::save_file(&doc, target).with_context(|| format!("saving {}", target.display()))
        }
        None => {
            write!(out, "{doc}")?;
            Ok(())
        }
    }
}
