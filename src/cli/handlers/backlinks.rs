//! Backlinks command handler.

use std::path::Path;

use anyhow::Result;

use super::{load_vault, note_file_path, require_note};
use crate::cli::BacklinksArgs;
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::domain::LinkGraph;

pub fn handle_backlinks(args: &BacklinksArgs, vault_dir: &Path, verbose: bool) -> Result<()> {
    let index = load_vault(vault_dir, verbose)?;
    let note = require_note(&index, &args.note)?;
    let backlinks = index.backlinks_of(&note);

    match args.format {
        OutputFormat::Human => {
            if backlinks.is_empty() {
                println!("No backlinks found.");
            } else {
                for backlink in &backlinks {
                    println!("{:<30}  {}", backlink.name(), backlink);
                }
                println!();
                println!("{} backlink(s)", backlinks.len());
            }
        }
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = backlinks.iter().map(NoteListing::from).collect();
            let output = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Paths => {
            for backlink in &backlinks {
                println!("{}", note_file_path(vault_dir, backlink).display());
            }
        }
    }
    Ok(())
}
