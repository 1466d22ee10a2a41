// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Wellsync Core Library
//!
//! Localized content cache-and-sync layer for wellness app reference data.
//! Each content domain is mastered as a JSON document in an external store,
//! loaded into an immutable in-memory snapshot and served from there.

pub mod content;
pub mod domains;

pub use content::{
    resolve_text, ContentConfig, ContentError, ContentManager, ContentSnapshot, ContentStats,
    ContentStore, ContentSyncStore, DocumentSource, DomainKind, DynContentStore, FileDocumentSource,
    ItemId, LoadStatus, LocalizedText, MemoryDocumentSource, SourceError, SyncLedger,
    SyncMetadataSink, SyncState, UpdateOutcome,
};
pub use domains::{ActivityType, MoodType, OnboardingQuestion, Program, SocialNetwork};
