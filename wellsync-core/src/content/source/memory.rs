// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-memory document source

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use super::{DocumentSource, SourceError};

/// Document source backed by an in-process map.
///
/// Availability can be toggled and reads can be made to fail, which makes
/// it the source of choice for exercising degraded sync paths.
#[derive(Debug)]
pub struct MemoryDocumentSource {
    documents: Mutex<HashMap<String, Value>>,
    available: AtomicBool,
    fail_reads: AtomicBool,
    writes: AtomicUsize,
}

impl MemoryDocumentSource {
    /// Creates an empty, available source.
    pub fn new() -> Self {
        Self {
            documents: Mutex::new(HashMap::new()),
            available: AtomicBool::new(true),
            fail_reads: AtomicBool::new(false),
            writes: AtomicUsize::new(0),
        }
    }

    /// Adds a document (builder style).
    pub fn with_document(self, document_id: &str, document: Value) -> Self {
        self.insert(document_id, document);
        self
    }

    /// Inserts or replaces a document without counting it as a write.
    pub fn insert(&self, document_id: &str, document: Value) {
        self.documents
            .lock()
            .insert(document_id.to_string(), document);
    }

    /// Returns a copy of a stored document.
    pub fn document(&self, document_id: &str) -> Option<Value> {
        self.documents.lock().get(document_id).cloned()
    }

    /// Marks the source as reachable or not.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Makes every subsequent read fail with a transport error.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl Default for MemoryDocumentSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentSource for MemoryDocumentSource {
    fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    async fn read(&self, document_id: &str) -> Result<Value, SourceError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(SourceError::Transport("simulated read failure".into()));
        }
        self.document(document_id)
            .ok_or_else(|| SourceError::NotFound(document_id.to_string()))
    }

    async fn write(&self, document_id: &str, document: &Value) -> Result<(), SourceError> {
        self.insert(document_id, document.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
