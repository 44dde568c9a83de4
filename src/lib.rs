//! crumbs - breadcrumb ancestry trails for markdown vaults

pub mod cli;
pub mod domain;
pub mod index;
pub mod infra;
pub mod render;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_backlinks, handle_check, handle_completions, handle_trail},
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Command::Completions(args) = &cli.command {
        return handle_completions(args);
    }

    let config = Config::load()?;
    let vault_dir = config.vault_dir(cli.dir.as_ref());
    let verbose = cli.verbose > 0;

    match &cli.command {
        Command::Trail(args) => handle_trail(args, &vault_dir, &config, verbose),
        Command::Backlinks(args) => handle_backlinks(args, &vault_dir, verbose),
        Command::Check(args) => handle_check(args, &vault_dir, &config, verbose),
        Command::Completions(args) => handle_completions(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG, when set, refines the level chosen by -v.
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}
