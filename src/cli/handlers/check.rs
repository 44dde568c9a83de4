//! Check command handler.

use std::path::Path;

use anyhow::{Result, bail};

use super::{load_vault, locate_home};
use crate::cli::CheckArgs;
use crate::cli::config::Config;
use crate::domain::Severity;
use crate::index::validate_vault;

pub fn handle_check(args: &CheckArgs, vault_dir: &Path, config: &Config, verbose: bool) -> Result<()> {
    let settings = config.settings(&args.options.overrides())?;

    // 1. Index the vault
    let index = load_vault(vault_dir, verbose)?;
    if index.is_empty() {
        println!("No notes found.");
        return Ok(());
    }

    // 2. Resolve every note
    let settings = locate_home(&index, settings);
    let summary = validate_vault(&index, &settings);

    // 3. Display results
    if summary.is_ok() {
        println!("All {} notes OK.", index.len());
        return Ok(());
    }

    for issue in summary.issues_by_severity() {
        let prefix = match issue.severity() {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        println!("{}: {}", prefix, issue);
    }
    println!(
        "\nFound {} issue(s): {} error(s), {} warning(s)",
        summary.total(),
        summary.error_count(),
        summary.warning_count()
    );

    // 4. Exit code: errors fail, warnings fail only with --strict
    if summary.has_errors() || (args.strict && summary.warning_count() > 0) {
        bail!("check failed");
    }
    Ok(())
}
