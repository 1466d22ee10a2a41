//! Display Helpers
//!
//! Terminal output formatting and styling.

use std::time::{Duration, SystemTime};

use anyhow::Result;
use console::{style, Style};
use serde::Serialize;
use serde_json::Value;
use tabled::settings::Style as TableStyle;
use tabled::{Table, Tabled};
use wellsync_core::content::DomainStatus;
use wellsync_core::{ContentStats, DomainKind, LoadStatus};

/// Prints a success message.
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Prints a warning message.
///
/// Warnings go to stderr so `--json` output stays parseable.
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("⚠").yellow().bold(), msg);
}

/// Prints an info message.
pub fn info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Prints a value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Warns when a domain did not load from its source.
pub fn load_warning(kind: DomainKind, status: &LoadStatus) {
    if !status.is_loaded() {
        warning(&format!("{}: {}", kind, status));
    }
}

/// Title of an item: its name, or the question text for onboarding.
fn item_title(item: &Value) -> String {
    match item.get("name").or_else(|| item.get("question")) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "(untitled)".to_string(),
    }
}

fn item_id(item: &Value) -> String {
    match &item["id"] {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Displays an item in a compact format.
pub fn display_item_summary(item: &Value) {
    let category = item
        .get("category")
        .and_then(Value::as_str)
        .map(|c| style(format!("[{}]", c)).dim().to_string())
        .unwrap_or_default();

    println!(
        "  {:>6}  {}  {}",
        style(item_id(item)).dim(),
        style(item_title(item)).bold(),
        category
    );
}

/// Displays an item with every field.
pub fn display_item_details(item: &Value) {
    let width = 40;

    println!("{}", "─".repeat(width));
    println!("  {}", style(item_title(item)).bold().cyan());
    println!("  ID: {}", style(item_id(item)).dim());
    println!("{}", "─".repeat(width));

    let label_style = Style::new().dim();
    if let Value::Object(fields) = item {
        for (key, value) in fields {
            if key == "id" || key == "name" || key == "question" {
                continue;
            }
            match value {
                Value::Array(entries) => {
                    println!("  {}", label_style.apply_to(key));
                    for (index, entry) in entries.iter().enumerate() {
                        println!("    {}. {}", index + 1, plain(entry));
                    }
                }
                other => println!("  {:24} {}", label_style.apply_to(key), plain(other)),
            }
        }
    }

    println!("{}", "─".repeat(width));
}

fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Displays domain statistics.
pub fn display_stats(kind: DomainKind, stats: &ContentStats) {
    println!("{}", style(kind).bold().cyan());
    println!("  Items:   {}", stats.total_count);

    if let (Some(field), Some(average)) = (stats.numeric_field, stats.average) {
        println!("  Average {}: {:.1}", field, average);
    }

    if stats.per_category_count.is_empty() {
        println!("  Categories: {}", style("(none)").dim());
    } else {
        println!("  Categories:");
        for (category, count) in &stats.per_category_count {
            println!("    {:20} {}", category, count);
        }
    }

    println!("  Last sync: {}", format_sync_time(stats.last_sync_at));
}

#[derive(Tabled)]
struct StatusRow {
    #[tabled(rename = "Domain")]
    domain: String,
    #[tabled(rename = "Document")]
    document: String,
    #[tabled(rename = "Items")]
    items: usize,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Last sync")]
    last_sync: String,
    #[tabled(rename = "Fingerprint")]
    fingerprint: String,
}

/// Displays the sync status of every domain as a table.
pub fn display_status(statuses: &[DomainStatus]) {
    let rows: Vec<StatusRow> = statuses
        .iter()
        .map(|status| StatusRow {
            domain: status.kind.to_string(),
            document: status
                .document_id
                .clone()
                .unwrap_or_else(|| "-".to_string()),
            items: status.items,
            source: if status.state.source_available {
                "available".to_string()
            } else {
                "unavailable".to_string()
            },
            last_sync: format_sync_time(status.state.last_sync_at),
            fingerprint: status
                .state
                .fingerprint
                .as_deref()
                .map(short_fingerprint)
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(TableStyle::rounded());
    println!("{}", table);
}

/// Shortens "sha256:<hex>" to its first 12 hex digits.
fn short_fingerprint(fingerprint: &str) -> String {
    let hex = fingerprint.strip_prefix("sha256:").unwrap_or(fingerprint);
    hex.chars().take(12).collect()
}

/// Formats a sync time relative to now.
pub fn format_sync_time(time: Option<SystemTime>) -> String {
    let Some(time) = time else {
        return "never".to_string();
    };

    let elapsed = SystemTime::now()
        .duration_since(time)
        .unwrap_or(Duration::from_secs(0))
        .as_secs();

    if elapsed < 60 {
        "just now".to_string()
    } else if elapsed < 3600 {
        format!("{} minutes ago", elapsed / 60)
    } else if elapsed < 86400 {
        format!("{} hours ago", elapsed / 3600)
    } else {
        format!("{} days ago", elapsed / 86400)
    }
}
