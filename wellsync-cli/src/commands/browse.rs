//! Browse Commands
//!
//! Read-only views of one content domain: list, show, search and stats.

use anyhow::{anyhow, Result};
use wellsync_core::{ContentManager, DomainKind};

use crate::config::CliConfig;
use crate::display;

/// Opens the manager and loads one domain.
async fn open_domain(config: &CliConfig, kind: DomainKind) -> Result<ContentManager> {
    let manager = config.manager()?;
    let status = manager.reload(kind).await;
    display::load_warning(kind, &status);
    Ok(manager)
}

/// List the items of a domain.
pub async fn list(config: &CliConfig, kind: DomainKind, category: Option<&str>) -> Result<()> {
    let manager = open_domain(config, kind).await?;
    let language = config.display_language(manager.config());
    let store = manager.store(kind);

    let items = match category {
        Some(category) => store.by_category_json(category, language),
        None => store.all_json(language),
    };

    if config.json {
        return display::print_json(&items);
    }

    if items.is_empty() {
        display::info(&format!("No {} found", kind));
        return Ok(());
    }

    match category {
        Some(category) => println!(
            "{} in {} ({}):",
            kind,
            store_category_name(&manager, kind, category, language),
            items.len()
        ),
        None => println!("{} ({}):", kind, items.len()),
    }
    println!();
    for item in &items {
        display::display_item_summary(item);
    }

    Ok(())
}

/// Show one item.
pub async fn show(config: &CliConfig, kind: DomainKind, id: &str) -> Result<()> {
    let manager = open_domain(config, kind).await?;
    let language = config.display_language(manager.config());

    let item = manager
        .store(kind)
        .by_id_json(id, language)
        .ok_or_else(|| anyhow!("No item with id '{}' in {}", id, kind))?;

    if config.json {
        return display::print_json(&item);
    }

    display::display_item_details(&item);
    Ok(())
}

/// Search a domain.
pub async fn search(config: &CliConfig, kind: DomainKind, query: &str) -> Result<()> {
    let manager = open_domain(config, kind).await?;
    let language = config.display_language(manager.config());

    let items = manager.store(kind).search_json(query, language);

    if config.json {
        return display::print_json(&items);
    }

    if items.is_empty() {
        display::info(&format!("No {} matching '{}'", kind, query));
        return Ok(());
    }

    println!("Found {} match(es):", items.len());
    println!();
    for item in &items {
        display::display_item_summary(item);
    }

    Ok(())
}

/// Show aggregate statistics of a domain.
pub async fn stats(config: &CliConfig, kind: DomainKind) -> Result<()> {
    let manager = open_domain(config, kind).await?;
    let stats = manager.store(kind).stats();

    if config.json {
        return display::print_json(&stats);
    }

    display::display_stats(kind, &stats);
    Ok(())
}

/// Display name of a category, resolved through the domain's mapping.
fn store_category_name(
    manager: &ContentManager,
    kind: DomainKind,
    category: &str,
    language: Option<&str>,
) -> String {
    let language = language.unwrap_or(manager.config().default_language.as_str());
    match kind {
        DomainKind::Programs => manager.programs().category_name(category, language),
        DomainKind::MoodTypes => manager.mood_types().category_name(category, language),
        DomainKind::OnboardingQuestions => manager
            .onboarding_questions()
            .category_name(category, language),
        DomainKind::SocialNetworks => manager.social_networks().category_name(category, language),
        DomainKind::ActivityTypes => manager.activity_types().category_name(category, language),
    }
}
