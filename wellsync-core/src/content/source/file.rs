// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Directory-backed document source
//!
//! Each document lives in `<root>/<document-id>.json`. Writes are atomic
//! (temp file, then rename) so a crash never leaves a half-written document.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;

use super::{DocumentSource, SourceError};

/// Default maximum document size (5 MB)
pub const DEFAULT_MAX_DOCUMENT_SIZE: u64 = 5 * 1024 * 1024;

/// Document source reading JSON files from a local directory
#[derive(Debug, Clone)]
pub struct FileDocumentSource {
    root: PathBuf,
    max_content_size: u64,
}

impl FileDocumentSource {
    /// Creates a source over an existing directory.
    ///
    /// The source reports itself unavailable while the directory is missing.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            max_content_size: DEFAULT_MAX_DOCUMENT_SIZE,
        }
    }

    /// Creates the directory if needed, then the source.
    pub fn create(root: impl Into<PathBuf>) -> Result<Self, SourceError> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self::new(root))
    }

    /// Overrides the maximum document size.
    pub fn with_max_content_size(mut self, max: u64) -> Self {
        self.max_content_size = max;
        self
    }

    /// Root directory of the documents.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding a document.
    pub fn document_path(&self, document_id: &str) -> Result<PathBuf, SourceError> {
        let valid = !document_id.is_empty()
            && !document_id.starts_with('.')
            && !document_id.contains(['/', '\\'])
            && !document_id.contains("..");
        if !valid {
            return Err(SourceError::InvalidDocumentId(document_id.to_string()));
        }
        Ok(self.root.join(format!("{}.json", document_id)))
    }
}

#[async_trait]
impl DocumentSource for FileDocumentSource {
    fn is_available(&self) -> bool {
        self.root.is_dir()
    }

    async fn read(&self, document_id: &str) -> Result<Value, SourceError> {
        let path = self.document_path(document_id)?;

        let metadata = fs::metadata(&path).await.map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => SourceError::NotFound(document_id.to_string()),
            _ => SourceError::Io(e),
        })?;
        if metadata.len() > self.max_content_size {
            return Err(SourceError::TooLarge {
                size: metadata.len(),
                max: self.max_content_size,
            });
        }

        let data = fs::read(&path).await?;
        Ok(serde_json::from_slice(&data)?)
    }

    async fn write(&self, document_id: &str, document: &Value) -> Result<(), SourceError> {
        let path = self.document_path(document_id)?;
        let data = serde_json::to_vec_pretty(document)?;
        atomic_write(&path, &data).await?;
        Ok(())
    }
}

/// Atomic file write (write to temp, then rename)
async fn atomic_write(path: &Path, data: &[u8]) -> io::Result<()> {
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, data).await?;
    fs::rename(&temp_path, path).await
}
