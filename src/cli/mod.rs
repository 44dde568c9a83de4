//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use config::SettingsOverrides;
use output::OutputFormat;

/// crumbs - breadcrumb ancestry trails for markdown vaults
#[derive(Parser, Debug)]
#[command(name = "crumbs", version, about, long_about = None)]
pub struct Cli {
    /// Vault directory (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the breadcrumb trail of a note
    Trail(TrailArgs),

    /// Show notes that link to a given note
    Backlinks(BacklinksArgs),

    /// Check the vault for broken parents, ambiguity and cycles
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Options controlling ancestry resolution, shared by `trail` and `check`
#[derive(Args, Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Home note at which trails stop
    #[arg(long)]
    pub home: Option<String>,

    /// Maximum number of breadcrumbs
    #[arg(long)]
    pub max_depth: Option<usize>,
}

impl ResolveOptions {
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            home: self.home.clone(),
            max_depth: self.max_depth,
            ..SettingsOverrides::default()
        }
    }
}

/// Arguments for the `trail` command
#[derive(Parser, Debug)]
pub struct TrailArgs {
    /// Note path or name
    pub note: String,

    #[command(flatten)]
    pub options: ResolveOptions,

    /// End the trail with the note itself
    #[arg(long, overrides_with = "no_include_self")]
    pub include_self: bool,

    /// Leave the note itself out of the trail
    #[arg(long, overrides_with = "include_self")]
    pub no_include_self: bool,

    /// Separator between breadcrumbs
    #[arg(long)]
    pub separator: Option<String>,

    /// Do not print ambiguity notices
    #[arg(long)]
    pub no_warn: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

impl TrailArgs {
    pub fn overrides(&self) -> SettingsOverrides {
        let include_self = if self.include_self {
            Some(true)
        } else if self.no_include_self {
            Some(false)
        } else {
            None
        };

        SettingsOverrides {
            include_self,
            no_warn: self.no_warn,
            separator: self.separator.clone(),
            ..self.options.overrides()
        }
    }
}

/// Arguments for the `backlinks` command
#[derive(Parser, Debug)]
pub struct BacklinksArgs {
    /// Note path or name
    pub note: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `check` command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Treat warnings as failures
    #[arg(long)]
    pub strict: bool,

    #[command(flatten)]
    pub options: ResolveOptions,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
