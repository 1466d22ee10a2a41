// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Localized content cache-and-sync layer
//!
//! Each content domain (programs, mood types, onboarding questions, social
//! networks, activity types) is mastered as one JSON document in an external
//! document source. This module:
//! - Loads documents into immutable in-memory snapshots
//! - Repairs missing and duplicate item ids deterministically
//! - Serves read-only queries with localized text resolution
//! - Pushes administrative edits back to the source
//!
//! Load failures never take the application down: the domain serves an
//! empty snapshot until the next successful load. Write failures are always
//! reported to the caller.

mod config;
mod domain;
mod dynamic;
mod error;
mod integrity;
mod ledger;
mod localized;
mod manager;
mod query;
mod repair;
mod source;
mod store;
mod sync;
mod types;

pub use config::{ConfigError, ContentConfig, ENV_PREFIX};
pub use domain::{parse_document, ContentDomain};
pub use dynamic::DynContentStore;
pub use error::{ContentError, ContentResult};
pub use integrity::{compute_checksum, document_fingerprint};
pub use ledger::SyncLedger;
pub use localized::{base_subtag, normalize_language, resolve_text, LocalizedText};
pub use manager::{ContentManager, DomainStatus};
pub use repair::repair_ids;
#[cfg(feature = "remote-source")]
pub use source::HttpDocumentSource;
pub use source::{DocumentSource, FileDocumentSource, MemoryDocumentSource, SourceError};
pub use store::{ContentSnapshot, ContentStore};
pub use sync::{ContentSyncStore, SyncMetadataSink};
pub use types::{ContentStats, DomainKind, ItemId, LoadStatus, SyncState, UpdateOutcome};
