// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Document fingerprints using SHA-256 checksums
//!
//! Every successfully loaded document is fingerprinted so callers can tell
//! whether two loads saw the same remote content.

use ring::digest::{digest, SHA256};
use serde_json::Value;

/// Compute SHA-256 checksum of content, formatted as "sha256:hexstring"
///
/// # Example
/// ```
/// use wellsync_core::content::compute_checksum;
///
/// assert!(compute_checksum(b"[]").starts_with("sha256:"));
/// ```
pub fn compute_checksum(data: &[u8]) -> String {
    format!("sha256:{}", hex::encode(digest(&SHA256, data).as_ref()))
}

/// Fingerprint of a JSON document in its compact serialized form.
///
/// Key order is preserved, so the same remote document always yields the
/// same fingerprint.
pub fn document_fingerprint(document: &Value) -> String {
    compute_checksum(document.to_string().as_bytes())
}
