// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Sync ledger
//!
//! Default [`SyncMetadataSink`]: remembers when each domain last synced so a
//! status page can show it without asking every store.

use std::collections::BTreeMap;
use std::time::SystemTime;

use parking_lot::Mutex;

use super::sync::SyncMetadataSink;
use super::types::DomainKind;

/// Last successful sync time per domain
#[derive(Debug, Default)]
pub struct SyncLedger {
    entries: Mutex<BTreeMap<DomainKind, SystemTime>>,
}

impl SyncLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last recorded sync for a domain
    pub fn last_sync(&self, domain: DomainKind) -> Option<SystemTime> {
        self.entries.lock().get(&domain).copied()
    }

    /// Every recorded domain with its last sync
    pub fn entries(&self) -> BTreeMap<DomainKind, SystemTime> {
        self.entries.lock().clone()
    }
}

impl SyncMetadataSink for SyncLedger {
    fn record_sync(&self, domain: DomainKind) {
        self.entries.lock().insert(domain, SystemTime::now());
    }
}
