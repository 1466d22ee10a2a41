// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! ContentManager integration tests

use std::sync::Arc;

use serde_json::json;
use wellsync_core::content::{
    ContentConfig, ContentManager, DomainKind, LoadStatus, MemoryDocumentSource,
};

fn seeded_source() -> Arc<MemoryDocumentSource> {
    Arc::new(
        MemoryDocumentSource::new()
            .with_document("programs", super::support::programs_document())
            .with_document(
                "onboarding-questions",
                json!({"questions": [
                    {"id": 1, "question": {"en": "How do you sleep?"}, "type": "single", "order": 1},
                    {"question": "Goals?", "type": "multi", "options": ["rest", "focus"]}
                ]}),
            ),
    )
}

fn manager(source: Arc<MemoryDocumentSource>) -> ContentManager {
    ContentManager::new(
        ContentConfig::default().with_default_documents().without_refresh(),
        source,
    )
}

#[tokio::test]
async fn test_load_all_reports_every_domain() {
    let manager = manager(seeded_source());

    let report = manager.load_all().await;

    assert_eq!(report.len(), DomainKind::ALL.len());
    assert_eq!(report[&DomainKind::Programs], LoadStatus::Loaded { items: 3 });
    assert_eq!(
        report[&DomainKind::OnboardingQuestions],
        LoadStatus::Loaded { items: 2 }
    );
    assert!(matches!(report[&DomainKind::MoodTypes], LoadStatus::Failed { .. }));
}

#[tokio::test]
async fn test_one_failing_domain_does_not_affect_others() {
    let manager = manager(seeded_source());
    manager.load_all().await;

    assert_eq!(manager.programs().get_all(None).len(), 3);
    assert!(manager.mood_types().get_all(None).is_empty());
    let second = manager.onboarding_questions().get_by_id("2", None).unwrap();
    assert_eq!(second.options.len(), 2);
}

#[tokio::test]
async fn test_ledger_tracks_successful_loads_only() {
    let manager = manager(seeded_source());

    manager.load_all().await;

    assert!(manager.last_sync(DomainKind::Programs).is_some());
    assert!(manager.last_sync(DomainKind::OnboardingQuestions).is_some());
    assert!(manager.last_sync(DomainKind::MoodTypes).is_none());
    assert_eq!(manager.ledger().entries().len(), 2);
}

#[tokio::test]
async fn test_status_lists_bindings_and_counts() {
    let manager = manager(seeded_source());
    manager.load_all().await;

    let status = manager.status();

    assert_eq!(status.len(), 5);
    let programs = status
        .iter()
        .find(|s| s.kind == DomainKind::Programs)
        .unwrap();
    assert_eq!(programs.document_id.as_deref(), Some("programs"));
    assert_eq!(programs.items, 3);
    assert!(programs.state.source_available);
    assert!(programs.state.fingerprint.is_some());
}

#[tokio::test]
async fn test_update_by_kind_reloads_that_domain() {
    let source = seeded_source();
    let manager = manager(source.clone());
    manager.load_all().await;

    let outcome = manager
        .update(
            DomainKind::MoodTypes,
            json!([{"id": 1, "name": "Happy", "score": 5}, {"id": 2, "name": "Sad", "score": 1}]),
        )
        .await;

    assert!(outcome.success, "{}", outcome.message);
    assert_eq!(manager.store(DomainKind::MoodTypes).item_count(), 2);
    assert_eq!(manager.mood_types().get_stats().average, Some(3.0));
    assert!(source.document("mood-types").is_some());
    assert_eq!(manager.programs().get_all(None).len(), 3);
}

#[tokio::test]
async fn test_unbound_domains_stay_empty() {
    let source = seeded_source();
    let config = ContentConfig::default()
        .with_document(DomainKind::Programs, "programs")
        .without_refresh();
    let manager = ContentManager::new(config, source.clone());

    let report = manager.load_all().await;

    assert_eq!(report[&DomainKind::Programs], LoadStatus::Loaded { items: 3 });
    assert_eq!(
        report[&DomainKind::OnboardingQuestions],
        LoadStatus::Unconfigured
    );
    let outcome = manager
        .update(DomainKind::ActivityTypes, json!([{"id": 1, "name": "Run"}]))
        .await;
    assert!(!outcome.success);
    assert_eq!(source.write_count(), 0);
}

#[tokio::test]
async fn test_reload_picks_up_external_edits() {
    let source = seeded_source();
    let manager = manager(source.clone());
    manager.load_all().await;

    source.insert("programs", json!([{"id": 7, "name": "Stretch"}]));
    let status = manager.reload(DomainKind::Programs).await;

    assert_eq!(status, LoadStatus::Loaded { items: 1 });
    assert!(manager.programs().get_by_id("7", None).is_some());
}

#[tokio::test]
async fn test_dyn_store_json_views() {
    let manager = manager(seeded_source());
    manager.load_all().await;
    let store = manager.store(DomainKind::Programs);

    let all = store.all_json(Some("ru"));
    assert_eq!(all[0]["name"], "Лучший сон");
    assert_eq!(all[1]["id"], 2);

    let hit = store.by_id_json("breath-101", None).unwrap();
    assert_eq!(hit["category"], "mindfulness");
    assert_eq!(store.by_category_json("sleep", None).len(), 1);
    assert_eq!(store.search_json("calm", None).len(), 1);
    assert_eq!(store.stats().total_count, 3);
}

#[tokio::test]
async fn test_refresh_disabled_spawns_nothing() {
    let manager = Arc::new(manager(seeded_source()));

    assert!(manager.spawn_refresh().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_refresh_reloads_on_interval() {
    let source = seeded_source();
    let mut config = ContentConfig::default().with_default_documents();
    config.refresh_interval = Some(std::time::Duration::from_secs(60));
    let manager = Arc::new(ContentManager::new(config, source.clone()));

    let handle = manager.clone().spawn_refresh().unwrap();
    assert!(manager.programs().get_all(None).is_empty());

    tokio::time::sleep(std::time::Duration::from_secs(61)).await;
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }

    assert_eq!(manager.programs().get_all(None).len(), 3);
    handle.abort();
}
