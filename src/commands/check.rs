//! Command: validate a file and summarise it.
use std::io::Write;

use anyhow::Result;

use crate::cli::{FileOpts, GlobalOpts};

/// Parse the file and report how many sections and keys it declares.
///
/// # Errors
///
/// Returns the load or parse error, or an error if `out` cannot be written.
pub fn run(global: &GlobalOpts, opts: &FileOpts, out: &mut dyn Write) -> Result<()> {
    let doc = super::load(global, &opts.file)?;
    tracing::info!("{} is valid", opts.file.display());
    writeln!(
        out,
        "{} section(s), {} key(s)",
        doc.len(),
        doc.key_count()
    )?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use crate::commands::test_support::{ini_file, run_args};

    #[test]
    fn reports_counts() {
        let (_dir, path) = ini_file(
            "app.ini",
            "[Credentials]\nuser=root\nport=3000\n[Numbers]\n[Database]\nname=John\n",
        );
        let path = path.to_string_lossy();
        let out = run_args(&["iniparser", "check", &path]).expect("valid file should pass");
        assert_eq!(out, "3 section(s), 3 key(s)\n");
    }

    #[test]
    fn fails_on_duplicate_section() {
        let (_dir, path) = ini_file("dup.ini", "[A]\n[B]\n[A]\n");
        let path = path.to_string_lossy();
        let err = run_args(&["iniparser", "check", &path]).expect_err("duplicate should fail");
        assert!(format!("{err:#}").contains("repeated section name [A] at line 3"));
    }

    #[test]
    fn fails_on_wrong_extension() {
        let (_dir, path) = ini_file("app.conf", "[A]\n");
        let path = path.to_string_lossy();
        let err = run_args(&["iniparser", "check", &path]).expect_err("extension should fail");
        assert!(format!("{err:#}").contains("not an INI file path"));
    }
}
