use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use iniparser::{DuplicateKeys, OrphanKeys, ParseOptions};

/// Top-level CLI entry point.
#[derive(Parser, Debug)]
#[command(
    name = "iniparser",
    about = "Parse, query and rewrite INI files",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Parser options shared across all subcommands.
#[derive(Args, Debug, Clone)]
pub struct GlobalOpts {
    /// What to do when a key repeats inside one section
    #[arg(long, value_enum, default_value_t = DuplicateKeysArg::Reject, global = true)]
    pub duplicate_keys: DuplicateKeysArg,

    /// What to do with keys that appear before the first section header
    #[arg(long, value_enum, default_value_t = OrphanKeysArg::Ignore, global = true)]
    pub orphan_keys: OrphanKeysArg,
}

impl GlobalOpts {
    /// Translate the flags into library parser options.
    pub const fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            duplicate_keys: match self.duplicate_keys {
                DuplicateKeysArg::Reject => DuplicateKeys::Reject,
                DuplicateKeysArg::Overwrite => DuplicateKeys::Overwrite,
            },
            orphan_keys: match self.orphan_keys {
                OrphanKeysArg::Ignore => OrphanKeys::Ignore,
                OrphanKeysArg::Reject => OrphanKeys::Reject,
            },
        }
    }
}

/// `--duplicate-keys` values.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateKeysArg {
    /// Fail the parse
    Reject,
    /// Keep the last value and warn
    Overwrite,
}

/// `--orphan-keys` values.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrphanKeysArg {
    /// Skip them
    Ignore,
    /// Fail the parse
    Reject,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a file and summarise its contents
    Check(FileOpts),
    /// List section names
    Sections(FileOpts),
    /// Print the value of one key
    Get(GetOpts),
    /// Insert or overwrite one key and save the file
    Set(SetOpts),
    /// Rewrite a file in canonical form
    Fmt(FmtOpts),
    /// Print the whole document
    Dump(DumpOpts),
    /// Print version information
    Version,
}

/// Options for subcommands that only take a file.
#[derive(Args, Debug, Clone)]
pub struct FileOpts {
    /// Path to an .ini file
    pub file: PathBuf,
}

/// Options for the `get` subcommand.
#[derive(Args, Debug, Clone)]
pub struct GetOpts {
    /// Path to an .ini file
    pub file: PathBuf,
    /// Section name
    pub section: String,
    /// Key name
    pub key: String,
}

/// Options for the `set` subcommand.
#[derive(Args, Debug, Clone)]
pub struct SetOpts {
    /// Path to an .ini file
    pub file: PathBuf,
    /// Section name (created if missing)
    pub section: String,
    /// Key name (created if missing)
    pub key: String,
    /// New value
    pub value: String,
    /// Write to this file instead of updating FILE in place
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Options for the `fmt` subcommand.
#[derive(Args, Debug, Clone)]
pub struct FmtOpts {
    /// Path to an .ini file
    pub file: PathBuf,
    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Options for the `dump` subcommand.
#[derive(Args, Debug, Clone)]
pub struct DumpOpts {
    /// Path to an .ini file
    pub file: PathBuf,
    /// Emit JSON instead of INI
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_get() {
        let cli = Cli::parse_from(["iniparser", "get", "app.ini", "Database", "name"]);
        assert!(
            matches!(&cli.command, Command::Get(_)),
            "Expected Get command"
        );
        if let Command::Get(opts) = cli.command {
            assert_eq!(opts.file, PathBuf::from("app.ini"));
            assert_eq!(opts.section, "Database");
            assert_eq!(opts.key, "name");
        }
    }

    #[test]
    fn parse_set_with_output() {
        let cli = Cli::parse_from([
            "iniparser", "set", "in.ini", "Email", "user", "a@b.c", "--output", "out.ini",
        ]);
        assert!(
            matches!(&cli.command, Command::Set(_)),
            "Expected Set command"
        );
        if let Command::Set(opts) = cli.command {
            assert_eq!(opts.value, "a@b.c");
            assert_eq!(opts.output, Some(PathBuf::from("out.ini")));
        }
    }

    #[test]
    fn parse_set_accepts_empty_value() {
        let cli = Cli::parse_from(["iniparser", "set", "in.ini", "Auth", "password", ""]);
        if let Command::Set(opts) = cli.command {
            assert_eq!(opts.value, "");
        }
    }

    #[test]
    fn parse_dump_json() {
        let cli = Cli::parse_from(["iniparser", "dump", "--json", "app.ini"]);
        assert!(matches!(cli.command, Command::Dump(DumpOpts { json: true, .. })));
    }

    #[test]
    fn parse_version() {
        let cli = Cli::parse_from(["iniparser", "version"]);
        assert!(matches!(cli.command, Command::Version));
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::parse_from(["iniparser", "-v", "check", "app.ini"]);
        assert!(cli.verbose);
    }

    #[test]
    fn strict_options_by_default() {
        let cli = Cli::parse_from(["iniparser", "check", "app.ini"]);
        assert_eq!(cli.global.parse_options(), ParseOptions::default());
    }

    #[test]
    fn global_policy_flags() {
        let cli = Cli::parse_from([
            "iniparser",
            "check",
            "app.ini",
            "--duplicate-keys",
            "overwrite",
            "--orphan-keys",
            "reject",
        ]);
        let options = cli.global.parse_options();
        assert_eq!(options.duplicate_keys, DuplicateKeys::Overwrite);
        assert_eq!(options.orphan_keys, OrphanKeys::Reject);
    }

    #[test]
    fn rejects_unknown_policy() {
        let result = Cli::try_parse_from(["iniparser", "--duplicate-keys", "merge", "check", "a.ini"]);
        assert!(result.is_err());
    }
}
