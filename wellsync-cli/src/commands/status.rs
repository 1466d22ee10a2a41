//! Status Command
//!
//! Loads every domain and reports how fresh each snapshot is.

use anyhow::Result;
use serde_json::json;

use crate::config::CliConfig;
use crate::display;

/// Load all domains and show their sync status.
pub async fn run(config: &CliConfig) -> Result<()> {
    let manager = config.manager()?;
    let report = manager.load_all().await;
    let statuses = manager.status();

    if config.json {
        let domains: Vec<_> = statuses
            .iter()
            .map(|status| {
                json!({
                    "domain": status.kind,
                    "documentId": status.document_id,
                    "items": status.items,
                    "load": report.get(&status.kind),
                    "state": status.state,
                })
            })
            .collect();
        return display::print_json(&domains);
    }

    println!("Content directory: {}", config.content_dir.display());
    println!();
    display::display_status(&statuses);

    for (kind, status) in &report {
        display::load_warning(*kind, status);
    }

    Ok(())
}
