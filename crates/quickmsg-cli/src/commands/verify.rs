use anyhow::Result;
use colored::Colorize;

use crate::app::App;

pub async fn run(app: &App, repair: bool) -> Result<()> {
    let report = app.storage.reconcile(repair).await?;

    if report.is_consistent() {
        println!("{}", "Storage indexes are consistent.".green());
        return Ok(());
    }

    for id in &report.missing_from_index {
        println!(
            "{}",
            format!("'{}' is stored but missing from the listing index", id).yellow()
        );
    }
    for record_id in &report.orphaned_index_entries {
        let action = if report.repaired { "removed" } else { "found" };
        println!(
            "{}",
            format!("Orphaned listing entry {} {}", record_id, action).yellow()
        );
    }

    if !report.repaired && !report.orphaned_index_entries.is_empty() {
        println!("{}", "Run with --repair to remove orphaned entries.".bright_black());
    }

    Ok(())
}
