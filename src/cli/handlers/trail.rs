//! Trail command handler.

use std::path::Path;

use anyhow::Result;

use super::{load_vault, locate_home, note_file_path, require_note};
use crate::cli::TrailArgs;
use crate::cli::config::Config;
use crate::cli::output::{Output, OutputFormat, TrailListing};
use crate::domain::AncestryResolver;
use crate::render::{ambiguity_notice, render_strip};

pub fn handle_trail(args: &TrailArgs, vault_dir: &Path, config: &Config, verbose: bool) -> Result<()> {
    let settings = config.settings(&args.overrides())?;
    let index = load_vault(vault_dir, verbose)?;
    let settings = locate_home(&index, settings);
    let note = require_note(&index, &args.note)?;

    let ancestry = AncestryResolver::new(&index, &index, &settings).resolve(&note);

    if settings.warn_on_ambiguity() {
        for ambiguous in &ancestry.ambiguities {
            eprintln!("warning: {}", ambiguity_notice(ambiguous));
        }
    }

    match args.format {
        OutputFormat::Human => {
            if ancestry.trail.is_empty() {
                println!("No ancestors found.");
            } else {
                println!("{}", render_strip(&ancestry.trail, settings.separator()));
            }
        }
        OutputFormat::Json => {
            let output = Output::new(TrailListing::new(&note, &ancestry));
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Paths => {
            for crumb in &ancestry.trail {
                println!("{}", note_file_path(vault_dir, crumb).display());
            }
        }
    }
    Ok(())
}
