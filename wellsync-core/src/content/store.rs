// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-memory content store
//!
//! Holds the current snapshot of one content domain. Snapshots are
//! immutable and shared with readers behind an `Arc`; replacing one is a
//! single pointer swap, so readers never observe a half-built snapshot.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::SystemTime;

use parking_lot::RwLock;
use serde::Serialize;

use super::localized::LocalizedText;
use super::types::SyncState;

/// Full, immutable representation of a content domain at a point in time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentSnapshot<T> {
    /// Items in document order
    pub items: Vec<T>,
    /// Category key → display name
    pub categories: BTreeMap<String, LocalizedText>,
}

impl<T> ContentSnapshot<T> {
    /// Snapshot with the given items and no category names
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            categories: BTreeMap::new(),
        }
    }

    /// Empty snapshot (no items, no categories)
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the snapshot has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for ContentSnapshot<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Holder of the current snapshot and sync state for one content domain
///
/// Snapshot and state sit behind one lock so a reader never pairs a new
/// snapshot with stale sync state.
pub struct ContentStore<T> {
    current: RwLock<Current<T>>,
}

struct Current<T> {
    snapshot: Arc<ContentSnapshot<T>>,
    state: SyncState,
}

impl<T> ContentStore<T> {
    /// Creates a store holding the empty snapshot.
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Current {
                snapshot: Arc::new(ContentSnapshot::empty()),
                state: SyncState::default(),
            }),
        }
    }

    /// Returns whatever was last stored.
    pub fn current(&self) -> Arc<ContentSnapshot<T>> {
        Arc::clone(&self.current.read().snapshot)
    }

    /// Returns a copy of the sync state.
    pub fn sync_state(&self) -> SyncState {
        self.current.read().state.clone()
    }

    /// Snapshot together with the sync state it was stored with.
    pub fn view(&self) -> (Arc<ContentSnapshot<T>>, SyncState) {
        let current = self.current.read();
        (Arc::clone(&current.snapshot), current.state.clone())
    }

    /// Replaces the snapshot without touching the sync state.
    pub fn replace(&self, snapshot: ContentSnapshot<T>) {
        self.current.write().snapshot = Arc::new(snapshot);
    }

    /// Replaces the snapshot after a successful remote read.
    pub fn replace_from_source(&self, snapshot: ContentSnapshot<T>, fingerprint: String) {
        let snapshot = Arc::new(snapshot);
        let mut current = self.current.write();
        current.snapshot = snapshot;
        current.state.last_sync_at = Some(SystemTime::now());
        current.state.source_available = true;
        current.state.fingerprint = Some(fingerprint);
    }

    /// Falls back to the empty snapshot.
    ///
    /// `last_sync_at` keeps the time of the last successful sync.
    pub fn degrade(&self) {
        let empty = Arc::new(ContentSnapshot::empty());
        let mut current = self.current.write();
        current.snapshot = empty;
        current.state.source_available = false;
        current.state.fingerprint = None;
    }
}

impl<T> Default for ContentStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
