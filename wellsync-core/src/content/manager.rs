// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Content Manager - owns every content domain
//!
//! The ContentManager is the main entry point for the content system.
//! It coordinates:
//! - One sync store per content domain, all sharing one document source
//! - Load-on-start and administrative reloads
//! - The sync ledger read by status pages
//! - An optional periodic background refresh

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::SystemTime;

use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::info;

use super::config::ContentConfig;
use super::dynamic::DynContentStore;
use super::error::{ContentError, ContentResult};
use super::ledger::SyncLedger;
use super::source::{DocumentSource, FileDocumentSource};
use super::sync::{ContentSyncStore, SyncMetadataSink};
use super::types::{DomainKind, LoadStatus, SyncState, UpdateOutcome};
use crate::domains::{ActivityTypes, MoodTypes, OnboardingQuestions, Programs, SocialNetworks};

/// Status of one domain, as shown on a settings/status page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainStatus {
    /// Domain
    pub kind: DomainKind,
    /// Bound document id, if any
    pub document_id: Option<String>,
    /// Items in the current snapshot
    pub items: usize,
    /// Freshness of the current snapshot
    pub state: SyncState,
}

/// Manages every content domain over one document source
pub struct ContentManager {
    config: ContentConfig,
    ledger: Arc<SyncLedger>,
    programs: ContentSyncStore<Programs>,
    mood_types: ContentSyncStore<MoodTypes>,
    onboarding_questions: ContentSyncStore<OnboardingQuestions>,
    social_networks: ContentSyncStore<SocialNetworks>,
    activity_types: ContentSyncStore<ActivityTypes>,
}

impl ContentManager {
    /// Create a new ContentManager over an explicit source
    pub fn new(config: ContentConfig, source: Arc<dyn DocumentSource>) -> Self {
        let ledger = Arc::new(SyncLedger::new());
        let sink: Arc<dyn SyncMetadataSink> = ledger.clone();

        Self {
            programs: ContentSyncStore::from_config(&config, source.clone())
                .with_sink(sink.clone()),
            mood_types: ContentSyncStore::from_config(&config, source.clone())
                .with_sink(sink.clone()),
            onboarding_questions: ContentSyncStore::from_config(&config, source.clone())
                .with_sink(sink.clone()),
            social_networks: ContentSyncStore::from_config(&config, source.clone())
                .with_sink(sink.clone()),
            activity_types: ContentSyncStore::from_config(&config, source).with_sink(sink),
            config,
            ledger,
        }
    }

    /// Create a ContentManager with the source described by the config
    ///
    /// A remote URL wins over a content directory (when built with the
    /// `remote-source` feature).
    pub fn from_config(config: ContentConfig) -> ContentResult<Self> {
        let source = source_from_config(&config)?;
        Ok(Self::new(config, source))
    }

    /// Programs domain
    pub fn programs(&self) -> &ContentSyncStore<Programs> {
        &self.programs
    }

    /// Mood types domain
    pub fn mood_types(&self) -> &ContentSyncStore<MoodTypes> {
        &self.mood_types
    }

    /// Onboarding questions domain
    pub fn onboarding_questions(&self) -> &ContentSyncStore<OnboardingQuestions> {
        &self.onboarding_questions
    }

    /// Social networks domain
    pub fn social_networks(&self) -> &ContentSyncStore<SocialNetworks> {
        &self.social_networks
    }

    /// Activity types domain
    pub fn activity_types(&self) -> &ContentSyncStore<ActivityTypes> {
        &self.activity_types
    }

    /// Store of a domain, addressed by kind
    pub fn store(&self, kind: DomainKind) -> &dyn DynContentStore {
        match kind {
            DomainKind::Programs => &self.programs,
            DomainKind::MoodTypes => &self.mood_types,
            DomainKind::OnboardingQuestions => &self.onboarding_questions,
            DomainKind::SocialNetworks => &self.social_networks,
            DomainKind::ActivityTypes => &self.activity_types,
        }
    }

    /// Loads every domain, one after the other.
    pub async fn load_all(&self) -> BTreeMap<DomainKind, LoadStatus> {
        let mut report = BTreeMap::new();
        for kind in DomainKind::ALL {
            let status = self.store(kind).load().await;
            report.insert(kind, status);
        }
        let loaded = report.values().filter(|s| s.is_loaded()).count();
        info!(loaded, total = report.len(), "content domains loaded");
        report
    }

    /// Reloads one domain.
    pub async fn reload(&self, kind: DomainKind) -> LoadStatus {
        self.store(kind).load().await
    }

    /// Pushes new content for one domain and reloads it.
    pub async fn update(&self, kind: DomainKind, content: serde_json::Value) -> UpdateOutcome {
        self.store(kind).update(content).await
    }

    /// Status of every domain
    pub fn status(&self) -> Vec<DomainStatus> {
        DomainKind::ALL
            .into_iter()
            .map(|kind| {
                let store = self.store(kind);
                DomainStatus {
                    kind,
                    document_id: store.document_id().map(str::to_string),
                    items: store.item_count(),
                    state: store.sync_state(),
                }
            })
            .collect()
    }

    /// Last successful sync of a domain, as recorded by the ledger
    pub fn last_sync(&self, kind: DomainKind) -> Option<SystemTime> {
        self.ledger.last_sync(kind)
    }

    /// The sync ledger shared by every domain
    pub fn ledger(&self) -> &SyncLedger {
        &self.ledger
    }

    /// Get the configuration
    pub fn config(&self) -> &ContentConfig {
        &self.config
    }

    /// Spawns the periodic refresh task on the current tokio runtime.
    ///
    /// Returns `None` when the config disables refresh. The first refresh
    /// happens one interval after spawning; load on start is the caller's job.
    pub fn spawn_refresh(self: Arc<Self>) -> Option<JoinHandle<()>> {
        let interval = self.config.refresh_interval?;
        Some(tokio::spawn(async move {
            loop {
                tokio::time::sleep(interval).await;
                self.load_all().await;
            }
        }))
    }
}

fn source_from_config(config: &ContentConfig) -> ContentResult<Arc<dyn DocumentSource>> {
    #[cfg(feature = "remote-source")]
    {
        use super::source::HttpDocumentSource;
        if let Some(source) = HttpDocumentSource::from_config(config)? {
            return Ok(Arc::new(source));
        }
    }

    match &config.content_dir {
        Some(dir) => Ok(Arc::new(
            FileDocumentSource::new(dir).with_max_content_size(config.max_content_size),
        )),
        None => Err(ContentError::Configuration(
            "no document source configured (set a content directory or remote URL)".into(),
        )),
    }
}
