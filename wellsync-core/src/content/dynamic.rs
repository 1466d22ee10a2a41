// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Domain-erased access to sync stores
//!
//! Lets callers that only know a [`DomainKind`] (admin routes, the CLI)
//! work with any domain through JSON values.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use super::domain::ContentDomain;
use super::sync::ContentSyncStore;
use super::types::{ContentStats, DomainKind, LoadStatus, SyncState, UpdateOutcome};

/// Object-safe view of a [`ContentSyncStore`]
#[async_trait]
pub trait DynContentStore: Send + Sync {
    /// Domain served by this store
    fn kind(&self) -> DomainKind;

    /// Bound document id, if any
    fn document_id(&self) -> Option<&str>;

    /// Freshness of the current snapshot
    fn sync_state(&self) -> SyncState;

    /// Number of items in the current snapshot
    fn item_count(&self) -> usize;

    /// See [`ContentSyncStore::load`]
    async fn load(&self) -> LoadStatus;

    /// See [`ContentSyncStore::update`]
    async fn update(&self, content: Value) -> UpdateOutcome;

    /// See [`ContentSyncStore::get_all`]
    fn all_json(&self, language: Option<&str>) -> Vec<Value>;

    /// See [`ContentSyncStore::get_by_id`]
    fn by_id_json(&self, id: &str, language: Option<&str>) -> Option<Value>;

    /// See [`ContentSyncStore::get_by_category`]
    fn by_category_json(&self, category: &str, language: Option<&str>) -> Vec<Value>;

    /// See [`ContentSyncStore::search`]
    fn search_json(&self, query: &str, language: Option<&str>) -> Vec<Value>;

    /// See [`ContentSyncStore::get_stats`]
    fn stats(&self) -> ContentStats;
}

#[async_trait]
impl<D: ContentDomain> DynContentStore for ContentSyncStore<D> {
    fn kind(&self) -> DomainKind {
        D::KIND
    }

    fn document_id(&self) -> Option<&str> {
        ContentSyncStore::document_id(self)
    }

    fn sync_state(&self) -> SyncState {
        ContentSyncStore::sync_state(self)
    }

    fn item_count(&self) -> usize {
        self.snapshot().len()
    }

    async fn load(&self) -> LoadStatus {
        ContentSyncStore::load(self).await
    }

    async fn update(&self, content: Value) -> UpdateOutcome {
        ContentSyncStore::update(self, content).await
    }

    fn all_json(&self, language: Option<&str>) -> Vec<Value> {
        to_values(self.get_all(language))
    }

    fn by_id_json(&self, id: &str, language: Option<&str>) -> Option<Value> {
        self.get_by_id(id, language)
            .and_then(|item| serde_json::to_value(item).ok())
    }

    fn by_category_json(&self, category: &str, language: Option<&str>) -> Vec<Value> {
        to_values(self.get_by_category(category, language))
    }

    fn search_json(&self, query: &str, language: Option<&str>) -> Vec<Value> {
        to_values(self.search(query, language))
    }

    fn stats(&self) -> ContentStats {
        self.get_stats()
    }
}

fn to_values<T: Serialize>(items: Vec<T>) -> Vec<Value> {
    items
        .into_iter()
        .filter_map(|item| serde_json::to_value(item).ok())
        .collect()
}
