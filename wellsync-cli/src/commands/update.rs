//! Update Command
//!
//! Replaces a domain's document and reloads it.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::{json, Value};
use wellsync_core::DomainKind;

use crate::config::CliConfig;
use crate::display;

/// Push the JSON document in `file` for `kind`.
///
/// Fails (non-zero exit) when the update was not applied.
pub async fn run(config: &CliConfig, kind: DomainKind, file: &Path) -> Result<()> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let content: Value = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", file.display()))?;

    config.ensure_content_dir()?;
    let manager = config.manager()?;
    let outcome = manager.update(kind, content).await;

    if config.json {
        display::print_json(&json!({ "domain": kind, "outcome": outcome }))?;
    }

    if !outcome.success {
        bail!("Update of {} failed: {}", kind, outcome.message);
    }

    if !config.json {
        display::success(&outcome.message);
    }
    Ok(())
}
