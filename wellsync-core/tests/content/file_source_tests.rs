// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the directory-backed document source

use std::sync::Arc;

use serde_json::json;
use tempfile::TempDir;
use wellsync_core::content::{
    ContentConfig, ContentManager, DocumentSource, DomainKind, FileDocumentSource, LoadStatus,
    SourceError,
};

fn write_document(dir: &TempDir, name: &str, contents: &str) {
    std::fs::write(dir.path().join(format!("{}.json", name)), contents).unwrap();
}

#[tokio::test]
async fn test_read_and_write_round_trip_on_disk() {
    let temp = TempDir::new().unwrap();
    let source = FileDocumentSource::new(temp.path());

    source
        .write("programs", &json!([{"id": 1, "name": "Walk"}]))
        .await
        .unwrap();

    let read = source.read("programs").await.unwrap();
    assert_eq!(read, json!([{"id": 1, "name": "Walk"}]));
    assert!(!temp.path().join("programs.json.tmp").exists());
}

#[tokio::test]
async fn test_missing_document_is_not_found() {
    let temp = TempDir::new().unwrap();
    let source = FileDocumentSource::new(temp.path());

    let err = source.read("programs").await.unwrap_err();

    assert!(matches!(err, SourceError::NotFound(_)));
}

#[tokio::test]
async fn test_oversized_document_is_rejected() {
    let temp = TempDir::new().unwrap();
    write_document(&temp, "programs", &format!("[\"{}\"]", "x".repeat(64)));
    let source = FileDocumentSource::new(temp.path()).with_max_content_size(16);

    let err = source.read("programs").await.unwrap_err();

    assert!(matches!(err, SourceError::TooLarge { max: 16, .. }));
}

#[tokio::test]
async fn test_invalid_json_is_a_parse_error() {
    let temp = TempDir::new().unwrap();
    write_document(&temp, "programs", "{ not json");
    let source = FileDocumentSource::new(temp.path());

    let err = source.read("programs").await.unwrap_err();

    assert!(matches!(err, SourceError::Parse(_)));
}

#[tokio::test]
async fn test_create_makes_directory_available() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("nested").join("content");

    let source = FileDocumentSource::create(&root).unwrap();

    assert!(source.is_available());
    assert_eq!(source.root(), root.as_path());
}

#[tokio::test]
async fn test_manager_over_content_directory() {
    let temp = TempDir::new().unwrap();
    write_document(
        &temp,
        "mood-types",
        r#"{"moodTypes": [{"id": "calm", "name": {"en": "Calm", "de": "Ruhig"}, "score": 4}]}"#,
    );
    let config = ContentConfig::default()
        .with_content_dir(temp.path())
        .with_default_documents()
        .without_refresh();
    let manager = ContentManager::from_config(config).unwrap();

    let report = manager.load_all().await;

    assert_eq!(report[&DomainKind::MoodTypes], LoadStatus::Loaded { items: 1 });
    assert!(matches!(report[&DomainKind::Programs], LoadStatus::Failed { .. }));
    let calm = manager.mood_types().get_by_id("calm", Some("de-CH")).unwrap();
    assert_eq!(calm.name.resolve("", "en"), "Ruhig");
}

#[tokio::test]
async fn test_manager_update_writes_document_file() {
    let temp = TempDir::new().unwrap();
    let config = ContentConfig::default()
        .with_content_dir(temp.path())
        .with_default_documents()
        .without_refresh();
    let manager = ContentManager::from_config(config).unwrap();

    let outcome = manager
        .update(
            DomainKind::SocialNetworks,
            json!([{"id": 1, "name": "Mastodon", "url": "https://mastodon.social/@{username}"}]),
        )
        .await;

    assert!(outcome.success, "{}", outcome.message);
    let path = temp.path().join("social-networks.json");
    let on_disk: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk[0]["name"], "Mastodon");
    assert!(!temp.path().join("social-networks.json.tmp").exists());
    assert_eq!(manager.social_networks().get_all(None).len(), 1);
}

#[tokio::test]
async fn test_missing_directory_degrades_every_domain() {
    let temp = TempDir::new().unwrap();
    let source = Arc::new(FileDocumentSource::new(temp.path().join("gone")));
    let manager = ContentManager::new(
        ContentConfig::default().with_default_documents().without_refresh(),
        source,
    );

    let report = manager.load_all().await;

    assert!(report.values().all(|s| *s == LoadStatus::Unavailable));
    assert!(manager.status().iter().all(|s| s.items == 0));
}
