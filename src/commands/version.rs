//! Command: print version information.
use std::io::Write;

use anyhow::Result;

/// Version string baked in by `build.rs`, or the crate version.
pub fn version() -> &'static str {
    option_env!("INIPARSER_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}

/// Print the version to `out`.
///
/// # Errors
///
/// Returns an error if `out` cannot be written.
pub fn run(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "iniparser {}", version())?;
    Ok(())
}
