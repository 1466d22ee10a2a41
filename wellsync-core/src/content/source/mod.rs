// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remote document sources
//!
//! A document source is the authoritative store of a domain's JSON
//! document. The sync layer only needs three capabilities from it: an
//! availability check, a read and a write.
//!
//! Implementations:
//! - [`MemoryDocumentSource`]: in-process map, for tests and embedding
//! - [`FileDocumentSource`]: a directory of `<document-id>.json` files
//! - `HttpDocumentSource`: a remote HTTP document endpoint
//!   (`remote-source` feature)

mod file;
#[cfg(feature = "remote-source")]
mod http;
mod memory;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub use file::FileDocumentSource;
#[cfg(feature = "remote-source")]
pub use http::HttpDocumentSource;
pub use memory::MemoryDocumentSource;

/// External store holding the authoritative JSON for each content domain.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Returns false when the source is not reachable or not configured.
    fn is_available(&self) -> bool;

    /// Reads and parses the document with the given id.
    async fn read(&self, document_id: &str) -> Result<Value, SourceError>;

    /// Replaces the document with the given id.
    async fn write(&self, document_id: &str, document: &Value) -> Result<(), SourceError>;
}

/// Errors that can occur while talking to a document source
#[derive(Debug, Error)]
pub enum SourceError {
    /// Network or remote failure
    #[error("transport error: {0}")]
    Transport(String),

    /// HTTP error with status code
    #[error("HTTP error: {0}")]
    Http(u16),

    /// Document larger than the configured limit
    #[error("Document too large: {size} bytes (max {max})")]
    TooLarge {
        /// Actual size in bytes
        size: u64,
        /// Maximum allowed size in bytes
        max: u64,
    },

    /// Local I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Document is not valid JSON
    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Document id does not exist in the source
    #[error("document not found: {0}")]
    NotFound(String),

    /// Document id cannot be used by this source
    #[error("invalid document id: {0:?}")]
    InvalidDocumentId(String),
}
