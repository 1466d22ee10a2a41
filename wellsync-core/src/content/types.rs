// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared content type definitions
//!
//! Domain kinds, item identifiers, sync state and the shapes returned to
//! administrative callers.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::time::SystemTime;

/// Kinds of admin-managed content domains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DomainKind {
    /// Guided wellness programs
    Programs,
    /// Mood survey answer types
    MoodTypes,
    /// Onboarding flow questions
    OnboardingQuestions,
    /// Social network link definitions
    SocialNetworks,
    /// Activity categories for mood entries
    ActivityTypes,
}

impl DomainKind {
    /// Every domain, in load order
    pub const ALL: [DomainKind; 5] = [
        DomainKind::Programs,
        DomainKind::MoodTypes,
        DomainKind::OnboardingQuestions,
        DomainKind::SocialNetworks,
        DomainKind::ActivityTypes,
    ];

    /// Stable name, also the default document id
    pub fn dir_name(&self) -> &'static str {
        match self {
            DomainKind::Programs => "programs",
            DomainKind::MoodTypes => "mood-types",
            DomainKind::OnboardingQuestions => "onboarding-questions",
            DomainKind::SocialNetworks => "social-networks",
            DomainKind::ActivityTypes => "activity-types",
        }
    }

    /// Suffix of the `WELLSYNC_DOC_*` environment variable
    pub fn env_suffix(&self) -> &'static str {
        match self {
            DomainKind::Programs => "PROGRAMS",
            DomainKind::MoodTypes => "MOOD_TYPES",
            DomainKind::OnboardingQuestions => "ONBOARDING_QUESTIONS",
            DomainKind::SocialNetworks => "SOCIAL_NETWORKS",
            DomainKind::ActivityTypes => "ACTIVITY_TYPES",
        }
    }
}

impl fmt::Display for DomainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

impl FromStr for DomainKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        DomainKind::ALL
            .into_iter()
            .find(|kind| kind.dir_name() == wanted)
            .ok_or_else(|| format!("unknown content domain: {}", s))
    }
}

/// Identifier of an item within one snapshot
///
/// Documents carry either numeric or string ids; both are kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    /// Numeric id as written in the document
    Number(serde_json::Number),
    /// Non-empty string id
    Text(String),
}

impl ItemId {
    /// Returns the id if the value is a usable scalar (number or non-empty string).
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(ItemId::Number(n.clone())),
            Value::String(s) if !s.is_empty() => Some(ItemId::Text(s.clone())),
            _ => None,
        }
    }

    /// Returns the id as a positive integer, if it is one.
    ///
    /// Integral floats count: `3.0` is the integer 3.
    pub fn as_positive_integer(&self) -> Option<u64> {
        match self {
            ItemId::Number(n) => integral_value(n).filter(|v| *v > 0),
            ItemId::Text(_) => None,
        }
    }

    /// Key identifying this id within a document.
    ///
    /// Numbers are keyed by value (`1` and `1.0` are the same id) and never
    /// collide with strings (`1` and `"1"` are different ids).
    pub fn identity_key(&self) -> String {
        match self {
            ItemId::Number(n) => format!("n:{}", canonical_number(n)),
            ItemId::Text(s) => format!("s:{}", s),
        }
    }

    /// Returns true if `query` names this id.
    ///
    /// Numeric ids match any spelling of the same number.
    pub fn matches(&self, query: &str) -> bool {
        match self {
            ItemId::Number(n) => query
                .trim()
                .parse::<serde_json::Number>()
                .map(|q| canonical_number(&q) == canonical_number(n))
                .unwrap_or(false),
            ItemId::Text(s) => s == query,
        }
    }
}

fn integral_value(n: &serde_json::Number) -> Option<u64> {
    n.as_u64().or_else(|| {
        n.as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= u64::MAX as f64)
            .map(|f| f as u64)
    })
}

fn canonical_number(n: &serde_json::Number) -> String {
    if let Some(v) = integral_value(n) {
        return v.to_string();
    }
    if let Some(v) = n.as_i64() {
        return v.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 => (f as i64).to_string(),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        ItemId::Number(value.into())
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        ItemId::Text(value.to_string())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{}", n),
            ItemId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Freshness information for one content domain
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SyncState {
    /// When the snapshot was last replaced from a successful remote read
    pub last_sync_at: Option<SystemTime>,
    /// Whether the most recent load reached the source
    pub source_available: bool,
    /// Checksum of the last loaded document ("sha256:hexstring")
    pub fingerprint: Option<String>,
}

/// Outcome of one load attempt
///
/// Loads never fail; anything other than `Loaded` means the domain now
/// serves the empty snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum LoadStatus {
    /// Snapshot replaced from the source
    Loaded {
        /// Items in the new snapshot
        items: usize,
    },
    /// No document id bound for the domain
    Unconfigured,
    /// Source reported itself unavailable
    Unavailable,
    /// Read or parse failed
    Failed {
        /// Error description
        error: String,
    },
}

impl LoadStatus {
    /// Returns true if the snapshot came from the source.
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadStatus::Loaded { .. })
    }
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadStatus::Loaded { items } => write!(f, "loaded ({} items)", items),
            LoadStatus::Unconfigured => write!(f, "not configured"),
            LoadStatus::Unavailable => write!(f, "source unavailable"),
            LoadStatus::Failed { error } => write!(f, "failed: {}", error),
        }
    }
}

/// Aggregated statistics over the current snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentStats {
    /// Number of items in the snapshot
    pub total_count: usize,
    /// Item count per category key
    pub per_category_count: BTreeMap<String, usize>,
    /// Name of the averaged numeric field, if the domain has one
    pub numeric_field: Option<&'static str>,
    /// Average of the numeric field over items that carry it
    pub average: Option<f64>,
    /// Last successful sync
    pub last_sync_at: Option<SystemTime>,
    /// Whether the most recent load reached the source
    pub source_available: bool,
}

/// Result of an administrative update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateOutcome {
    /// Whether the content was written and reloaded
    pub success: bool,
    /// Human-readable summary
    pub message: String,
}

impl UpdateOutcome {
    pub(crate) fn succeeded(message: String) -> Self {
        Self {
            success: true,
            message,
        }
    }

    pub(crate) fn failed(message: String) -> Self {
        Self {
            success: false,
            message,
        }
    }
}
