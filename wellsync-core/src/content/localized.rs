// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Localized text resolution
//!
//! Content documents carry display text either as a plain string or as an
//! object keyed by language code. Resolution picks one string for a requested
//! language using a fixed fallback chain:
//!
//! 1. requested language, exact
//! 2. base subtag of the requested language (`en-us` → `en`)
//! 3. default language, exact
//! 4. base subtag of the default language
//! 5. `en`
//! 6. first non-empty string, in document order

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Display text that is either plain or keyed by language code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizedText {
    /// Same text for every language
    Plain(String),
    /// Language code → text, in document order
    Localized(Map<String, Value>),
}

impl LocalizedText {
    /// Resolves to a single display string.
    pub fn resolve(&self, requested: &str, default_language: &str) -> String {
        match self {
            LocalizedText::Plain(s) => s.clone(),
            LocalizedText::Localized(map) => resolve_map(map, requested, default_language),
        }
    }

    /// Returns a plain copy resolved for the given language.
    pub fn localized(&self, requested: &str, default_language: &str) -> Self {
        LocalizedText::Plain(self.resolve(requested, default_language))
    }

    /// Case-insensitive substring match over every language variant.
    ///
    /// `needle` must already be lowercase.
    pub fn contains_lowercase(&self, needle: &str) -> bool {
        match self {
            LocalizedText::Plain(s) => s.to_lowercase().contains(needle),
            LocalizedText::Localized(map) => map
                .values()
                .filter_map(Value::as_str)
                .any(|s| s.to_lowercase().contains(needle)),
        }
    }
}

impl From<&str> for LocalizedText {
    fn from(value: &str) -> Self {
        LocalizedText::Plain(value.to_string())
    }
}

impl Default for LocalizedText {
    fn default() -> Self {
        LocalizedText::Plain(String::new())
    }
}

/// Resolves a raw JSON value to a display string.
///
/// Strings are returned unchanged, objects go through the fallback chain and
/// anything else (including an absent value) resolves to an empty string.
pub fn resolve_text(value: Option<&Value>, requested: &str, default_language: &str) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Object(map)) => resolve_map(map, requested, default_language),
        _ => String::new(),
    }
}

/// Normalizes a language tag: trimmed, lowercase, `_` replaced by `-`.
pub fn normalize_language(tag: &str) -> String {
    tag.trim().to_lowercase().replace('_', "-")
}

/// Returns the primary subtag of a normalized language tag.
pub fn base_subtag(tag: &str) -> &str {
    tag.split('-').next().unwrap_or(tag)
}

fn resolve_map(map: &Map<String, Value>, requested: &str, default_language: &str) -> String {
    let requested = normalize_language(requested);
    let default_language = normalize_language(default_language);

    let mut candidates: Vec<&str> = Vec::with_capacity(5);
    if !requested.is_empty() {
        candidates.push(&requested);
        candidates.push(base_subtag(&requested));
    }
    if !default_language.is_empty() {
        candidates.push(&default_language);
        candidates.push(base_subtag(&default_language));
    }
    candidates.push("en");

    for candidate in candidates {
        if let Some(text) = lookup(map, candidate) {
            return text.to_string();
        }
    }

    map.values()
        .filter_map(Value::as_str)
        .find(|s| !s.is_empty())
        .unwrap_or_default()
        .to_string()
}

fn lookup<'a>(map: &'a Map<String, Value>, language: &str) -> Option<&'a str> {
    map.iter()
        .filter(|(key, _)| normalize_language(key) == language)
        .filter_map(|(_, value)| value.as_str())
        .find(|s| !s.is_empty())
}
