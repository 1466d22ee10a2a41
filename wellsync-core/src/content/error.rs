// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Content Error Types

use thiserror::Error;

use super::source::SourceError;
use super::types::DomainKind;

/// Errors surfaced by the sync layer.
///
/// Only the write path returns these to callers; loads absorb them and
/// degrade to an empty snapshot.
#[derive(Debug, Error)]
pub enum ContentError {
    /// No document identifier is bound for the domain.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The document source is not reachable or not configured.
    #[error("document source unavailable for {0}")]
    SourceUnavailable(DomainKind),

    /// The document is not valid JSON or not in the domain shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// Network, I/O or remote failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// Submitted content was rejected before writing.
    #[error("validation error: {0}")]
    Validation(String),
}

impl From<SourceError> for ContentError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::Parse(e) => ContentError::Parse(e.to_string()),
            other => ContentError::Transport(other.to_string()),
        }
    }
}

/// Result type for content operations.
pub type ContentResult<T> = Result<T, ContentError>;
