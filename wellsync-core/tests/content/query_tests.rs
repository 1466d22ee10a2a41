// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the read-only query surface

use std::sync::Arc;

use serde_json::json;
use wellsync_core::content::{ContentSyncStore, LocalizedText, MemoryDocumentSource};
use wellsync_core::domains::{ActivityTypes, Programs, SocialNetworks};

use super::support::{programs_source, programs_store};

async fn loaded_programs() -> ContentSyncStore<Programs> {
    let store = programs_store(programs_source());
    store.load().await;
    store
}

#[tokio::test]
async fn test_get_all_without_language_keeps_localized_maps() {
    let store = loaded_programs().await;

    let items = store.get_all(None);

    assert!(matches!(items[0].name, LocalizedText::Localized(_)));
    assert_eq!(items[2].name, LocalizedText::from("Breathing Basics"));
}

#[tokio::test]
async fn test_get_all_with_language_resolves_text() {
    let store = loaded_programs().await;

    let names: Vec<String> = store
        .get_all(Some("ru-RU"))
        .iter()
        .map(|p| p.name.resolve("", "en"))
        .collect();

    assert_eq!(
        names,
        vec!["Лучший сон", "Утреннее спокойствие", "Breathing Basics"]
    );
}

#[tokio::test]
async fn test_get_by_id_numeric_and_text() {
    let store = loaded_programs().await;

    assert!(store.get_by_id("1", None).is_some());
    assert!(store.get_by_id("2", None).is_some());
    assert!(store.get_by_id("breath-101", None).is_some());
    assert!(store.get_by_id("42", None).is_none());

    let fr = store.get_by_id("1", Some("fr")).unwrap();
    assert_eq!(fr.name, LocalizedText::from("Sleep Better"));
}

#[tokio::test]
async fn test_get_by_category_preserves_order() {
    let store = loaded_programs().await;

    let ids: Vec<String> = store
        .get_by_category("mindfulness", None)
        .iter()
        .map(|p| p.id.to_string())
        .collect();

    assert_eq!(ids, vec!["2", "breath-101"]);
    assert!(store.get_by_category("unknown", None).is_empty());
}

#[tokio::test]
async fn test_stats_per_category_and_average() {
    let store = loaded_programs().await;

    let stats = store.get_stats();

    assert_eq!(stats.total_count, 3);
    assert_eq!(stats.per_category_count.get("sleep"), Some(&1));
    assert_eq!(stats.per_category_count.get("mindfulness"), Some(&2));
    assert_eq!(stats.numeric_field, Some("durationMinutes"));
    assert_eq!(stats.average, Some(30.0));
    assert!(stats.source_available);
}

#[tokio::test]
async fn test_stats_category_counts() {
    let source = Arc::new(MemoryDocumentSource::new().with_document(
        "activities",
        json!([
            {"id": 1, "name": "Run", "category": "a"},
            {"id": 2, "name": "Swim", "category": "a"},
            {"id": 3, "name": "Chat", "category": "b"}
        ]),
    ));
    let store: ContentSyncStore<ActivityTypes> =
        ContentSyncStore::new(source, Some("activities".into()), "en");
    store.load().await;

    let stats = store.get_stats();

    let counts: Vec<(&str, usize)> = stats
        .per_category_count
        .iter()
        .map(|(k, v)| (k.as_str(), *v))
        .collect();
    assert_eq!(counts, vec![("a", 2), ("b", 1)]);
    assert_eq!(stats.average, None);
}

#[tokio::test]
async fn test_stats_recomputed_after_reload() {
    let source = programs_source();
    let store = programs_store(source.clone());
    store.load().await;
    assert_eq!(store.get_stats().total_count, 3);

    source.insert(super::support::PROGRAMS_DOC, json!([{"id": 1, "name": "Solo"}]));
    store.load().await;

    let stats = store.get_stats();
    assert_eq!(stats.total_count, 1);
    assert!(stats.per_category_count.is_empty());
}

#[tokio::test]
async fn test_search_is_case_insensitive_over_all_languages() {
    let store = loaded_programs().await;

    let hits = |q: &str| -> Vec<String> {
        store
            .search(q, None)
            .iter()
            .map(|p| p.id.to_string())
            .collect()
    };

    assert_eq!(hits("SLEEP"), vec!["1"]);
    assert_eq!(hits("спокойствие"), vec!["2"]);
    assert_eq!(hits("deeper rest"), vec!["1"]);
    assert_eq!(hits("mindful"), vec!["2", "breath-101"]);
    assert_eq!(hits("   ").len(), 3);
    assert!(hits("yoga").is_empty());
}

#[tokio::test]
async fn test_category_name_resolution() {
    let store = loaded_programs().await;

    assert_eq!(store.category_name("sleep", "ru"), "Сон");
    assert_eq!(store.category_name("mindfulness", "ru"), "Mindfulness");
    assert_eq!(store.category_name("unmapped", "ru"), "unmapped");
}

#[tokio::test]
async fn test_queries_on_empty_store() {
    let store: ContentSyncStore<SocialNetworks> =
        ContentSyncStore::new(Arc::new(MemoryDocumentSource::new()), None, "en");

    assert!(store.get_all(Some("en")).is_empty());
    assert!(store.get_by_id("1", None).is_none());
    assert!(store.search("x", None).is_empty());
    let stats = store.get_stats();
    assert_eq!(stats.total_count, 0);
    assert_eq!(stats.average, None);
    assert!(!stats.source_available);
}
