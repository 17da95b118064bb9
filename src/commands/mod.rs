pub mod check;
pub mod edit;
pub mod query;
pub mod version;

use std::io::Write;
use std::path::Path;

use anyhow::{Context as _, Result};
use iniparser::{Document, file};

use crate::cli::{Cli, Command, GlobalOpts};

/// Dispatch the parsed command line, writing command output to `out`.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded, parsed or saved, or a
/// lookup fails.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    match &cli.command {
        Command::Check(opts) => check::run(&cli.global, opts, out),
        Command::Sections(opts) => query::sections(&cli.global, opts, out),
        Command::Get(opts) => query::get(&cli.global, opts, out),
        Command::Dump(opts) => query::dump(&cli.global, opts, out),
        Command::Set(opts) => edit::set(&cli.global, opts),
        Command::Fmt(opts) => edit::fmt(&cli.global, opts, out),
        Command::Version => version::run(out),
    }
}

/// Load and parse `path` with the parser options from the command line.
///
/// # Errors
///
/// Returns an error naming the file if loading or parsing fails.
pub fn load(global: &GlobalOpts, path: &Path) -> Result<Document> {
    tracing::debug!("loading {}", path.display());
    file::load_file_with(&file::FsStore, path, global.parse_options())
        .with_context(|| format!("loading {}", path.display()))
}
