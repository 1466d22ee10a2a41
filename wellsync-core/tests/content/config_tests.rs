// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration tests

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use wellsync_core::content::{ConfigError, ContentConfig, DomainKind};

fn from_pairs(pairs: &[(&str, &str)]) -> Result<ContentConfig, ConfigError> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ContentConfig::from_vars(|key| vars.get(key).cloned())
}

#[test]
fn test_defaults() {
    let config = ContentConfig::default();

    assert_eq!(config.default_language, "en");
    assert!(config.documents.is_empty());
    assert!(config.content_dir.is_none());
    assert!(config.remote_url.is_none());
    assert_eq!(config.refresh_interval, Some(Duration::from_secs(3600)));
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.max_content_size, 5 * 1024 * 1024);
}

#[test]
fn test_from_vars_reads_prefixed_keys() {
    let config = from_pairs(&[
        ("WELLSYNC_DEFAULT_LANGUAGE", "ru"),
        ("WELLSYNC_CONTENT_DIR", "/srv/content"),
        ("WELLSYNC_REFRESH_SECS", "120"),
        ("WELLSYNC_TIMEOUT_SECS", "5"),
        ("WELLSYNC_MAX_CONTENT_SIZE", "1024"),
        ("WELLSYNC_DOC_PROGRAMS", "programs-v2"),
        ("WELLSYNC_DOC_MOOD_TYPES", "moods"),
    ])
    .unwrap();

    assert_eq!(config.default_language, "ru");
    assert_eq!(config.content_dir, Some(PathBuf::from("/srv/content")));
    assert_eq!(config.refresh_interval, Some(Duration::from_secs(120)));
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(config.max_content_size, 1024);
    assert_eq!(config.document_id(DomainKind::Programs), Some("programs-v2"));
    assert_eq!(config.document_id(DomainKind::MoodTypes), Some("moods"));
    assert_eq!(config.document_id(DomainKind::SocialNetworks), None);
}

#[test]
fn test_blank_values_are_ignored() {
    let config = from_pairs(&[
        ("WELLSYNC_DEFAULT_LANGUAGE", "  "),
        ("WELLSYNC_DOC_PROGRAMS", ""),
    ])
    .unwrap();

    assert_eq!(config.default_language, "en");
    assert_eq!(config.document_id(DomainKind::Programs), None);
}

#[test]
fn test_zero_refresh_disables_refresh() {
    let config = from_pairs(&[("WELLSYNC_REFRESH_SECS", "0")]).unwrap();

    assert_eq!(config.refresh_interval, None);
}

#[test]
fn test_invalid_number_is_reported() {
    let err = from_pairs(&[("WELLSYNC_TIMEOUT_SECS", "soon")]).unwrap_err();

    let message = err.to_string();
    assert!(message.contains("WELLSYNC_TIMEOUT_SECS"));
    assert!(message.contains("soon"));
}

#[test]
fn test_zero_timeout_is_rejected() {
    let err = from_pairs(&[("WELLSYNC_TIMEOUT_SECS", "0")]).unwrap_err();

    assert!(matches!(err, ConfigError::MustBePositive { ref key } if key == "WELLSYNC_TIMEOUT_SECS"));
    assert!(err.to_string().contains("greater than zero"));
}

#[test]
fn test_default_documents_keep_explicit_bindings() {
    let config = ContentConfig::default()
        .with_document(DomainKind::Programs, "custom-programs")
        .with_default_documents();

    assert_eq!(config.document_id(DomainKind::Programs), Some("custom-programs"));
    assert_eq!(config.document_id(DomainKind::MoodTypes), Some("mood-types"));
    assert_eq!(
        config.document_id(DomainKind::OnboardingQuestions),
        Some("onboarding-questions")
    );
}

#[test]
fn test_remote_url_trailing_slash_trimmed() {
    let config = ContentConfig::default().with_remote("https://content.example.com/docs/", None);

    assert_eq!(
        config.remote_url.as_deref(),
        Some("https://content.example.com/docs")
    );
}
