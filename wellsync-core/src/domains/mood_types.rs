// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mood survey answer types

use serde::{Deserialize, Serialize};

use super::localize_opt;
use crate::content::{ContentDomain, DomainKind, ItemId, LocalizedText};

/// One answer a user can pick in the mood survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodType {
    /// Unique id within the document
    pub id: ItemId,
    /// Display name
    #[serde(default, deserialize_with = "super::text_or_empty")]
    pub name: LocalizedText,
    /// Longer description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedText>,
    /// Group key (e.g., "positive", "negative")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Emoji shown next to the name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    /// Hex color for charts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Valence score used in mood statistics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// Mood types domain
pub struct MoodTypes;

impl ContentDomain for MoodTypes {
    type Item = MoodType;

    const KIND: DomainKind = DomainKind::MoodTypes;
    const COLLECTION_KEY: &'static str = "moodTypes";
    const NUMERIC_FIELD: Option<&'static str> = Some("score");

    fn item_id(item: &MoodType) -> &ItemId {
        &item.id
    }

    fn category(item: &MoodType) -> Option<&str> {
        item.category.as_deref()
    }

    fn text_fields(item: &MoodType) -> Vec<&LocalizedText> {
        std::iter::once(&item.name)
            .chain(item.description.as_ref())
            .collect()
    }

    fn numeric_value(item: &MoodType) -> Option<f64> {
        item.score
    }

    fn localize(item: &MoodType, language: &str, default_language: &str) -> MoodType {
        MoodType {
            name: item.name.localized(language, default_language),
            description: localize_opt(&item.description, language, default_language),
            ..item.clone()
        }
    }
}
