// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Content Sync Store
//!
//! Mediates between a document source and the in-memory store of one
//! content domain:
//! - `load()` replaces the snapshot from the source, or degrades to the
//!   empty snapshot when the source is unbound, unavailable or broken
//! - `push()` writes a document verbatim without touching the snapshot
//! - `update()` validates, pushes, then reloads

use std::marker::PhantomData;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, warn};

use super::config::ContentConfig;
use super::domain::{parse_document, ContentDomain};
use super::error::{ContentError, ContentResult};
use super::integrity::document_fingerprint;
use super::source::DocumentSource;
use super::store::{ContentSnapshot, ContentStore};
use super::types::{DomainKind, LoadStatus, SyncState, UpdateOutcome};

/// Receiver of "domain synced" notifications (e.g., a settings/status page).
pub trait SyncMetadataSink: Send + Sync {
    /// Called after every successful load.
    fn record_sync(&self, domain: DomainKind);
}

/// Cache-and-sync component for one content domain
pub struct ContentSyncStore<D: ContentDomain> {
    store: ContentStore<D::Item>,
    source: Arc<dyn DocumentSource>,
    document_id: Option<String>,
    default_language: String,
    sink: Option<Arc<dyn SyncMetadataSink>>,
    _domain: PhantomData<fn() -> D>,
}

impl<D: ContentDomain> ContentSyncStore<D> {
    /// Creates a store serving the empty snapshot until the first load.
    pub fn new(
        source: Arc<dyn DocumentSource>,
        document_id: Option<String>,
        default_language: &str,
    ) -> Self {
        Self {
            store: ContentStore::new(),
            source,
            document_id: document_id.filter(|id| !id.is_empty()),
            default_language: default_language.to_string(),
            sink: None,
            _domain: PhantomData,
        }
    }

    /// Creates a store bound to the document configured for this domain.
    pub fn from_config(config: &ContentConfig, source: Arc<dyn DocumentSource>) -> Self {
        Self::new(
            source,
            config.document_id(D::KIND).map(str::to_string),
            &config.default_language,
        )
    }

    /// Attaches a sync metadata sink.
    pub fn with_sink(mut self, sink: Arc<dyn SyncMetadataSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Domain served by this store
    pub fn kind(&self) -> DomainKind {
        D::KIND
    }

    /// Bound document id, if any
    pub fn document_id(&self) -> Option<&str> {
        self.document_id.as_deref()
    }

    /// Fallback language for localized reads
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Current snapshot
    pub fn snapshot(&self) -> Arc<ContentSnapshot<D::Item>> {
        self.store.current()
    }

    /// Freshness of the current snapshot
    pub fn sync_state(&self) -> SyncState {
        self.store.sync_state()
    }

    /// Current snapshot and the sync state stored with it, read together
    pub fn snapshot_with_state(&self) -> (Arc<ContentSnapshot<D::Item>>, SyncState) {
        self.store.view()
    }

    /// Loads the domain document into the store.
    ///
    /// Never fails: any problem leaves the domain serving the empty snapshot
    /// and is reported through the returned status.
    pub async fn load(&self) -> LoadStatus {
        let Some(document_id) = self.document_id.as_deref() else {
            debug!(domain = %D::KIND, "no document bound, serving empty snapshot");
            self.store.degrade();
            return LoadStatus::Unconfigured;
        };

        if !self.source.is_available() {
            warn!(domain = %D::KIND, "document source unavailable, serving empty snapshot");
            self.store.degrade();
            return LoadStatus::Unavailable;
        }

        match self.fetch(document_id).await {
            Ok((snapshot, fingerprint)) => {
                let items = snapshot.len();
                self.store.replace_from_source(snapshot, fingerprint);
                info!(domain = %D::KIND, document_id, items, "content synced");
                if let Some(sink) = &self.sink {
                    sink.record_sync(D::KIND);
                }
                LoadStatus::Loaded { items }
            }
            Err(e) => {
                warn!(domain = %D::KIND, document_id, error = %e, "content load failed");
                self.store.degrade();
                LoadStatus::Failed {
                    error: e.to_string(),
                }
            }
        }
    }

    /// Administrative reload trigger.
    pub async fn reload(&self) -> LoadStatus {
        self.load().await
    }

    /// Writes `content` to the source verbatim.
    ///
    /// The store is left untouched; call [`load`](Self::load) to observe the
    /// change.
    pub async fn push(&self, content: &Value) -> ContentResult<()> {
        let document_id = self.bound_document_id()?;

        if !self.source.is_available() {
            return Err(ContentError::SourceUnavailable(D::KIND));
        }

        self.source.write(document_id, content).await?;
        debug!(domain = %D::KIND, document_id, "content pushed");
        Ok(())
    }

    /// Validates, pushes and reloads, reporting the result instead of
    /// returning an error.
    pub async fn update(&self, content: Value) -> UpdateOutcome {
        match self.try_update(&content).await {
            Ok(LoadStatus::Loaded { items }) => {
                UpdateOutcome::succeeded(format!("{} updated ({} items)", D::KIND, items))
            }
            Ok(status) => UpdateOutcome::succeeded(format!(
                "{} saved, but reload did not complete: {}",
                D::KIND,
                status
            )),
            Err(e) => {
                warn!(domain = %D::KIND, error = %e, "content update rejected");
                UpdateOutcome::failed(e.to_string())
            }
        }
    }

    async fn try_update(&self, content: &Value) -> ContentResult<LoadStatus> {
        self.bound_document_id()?;

        parse_document::<D>(content.clone())
            .map_err(|e| ContentError::Validation(e.to_string()))?;

        self.push(content).await?;
        Ok(self.load().await)
    }

    async fn fetch(
        &self,
        document_id: &str,
    ) -> ContentResult<(ContentSnapshot<D::Item>, String)> {
        let document = self.source.read(document_id).await?;
        let fingerprint = document_fingerprint(&document);
        let snapshot = parse_document::<D>(document)?;
        Ok((snapshot, fingerprint))
    }

    fn bound_document_id(&self) -> ContentResult<&str> {
        self.document_id.as_deref().ok_or_else(|| {
            ContentError::Configuration(format!("document for {} is not configured", D::KIND))
        })
    }
}
