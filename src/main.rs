//! `iniparser` command-line driver.
use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod logging;

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse();
    logging::init_subscriber(args.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(&args, &mut out)
}
