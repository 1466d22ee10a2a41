// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Activity types attached to mood entries

use serde::{Deserialize, Serialize};

use super::localize_opt;
use crate::content::{ContentDomain, DomainKind, ItemId, LocalizedText};

/// Something the user was doing when logging a mood.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityType {
    /// Unique id within the document
    pub id: ItemId,
    /// Display name
    #[serde(default, deserialize_with = "super::text_or_empty")]
    pub name: LocalizedText,
    /// Longer description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedText>,
    /// Grouping key (e.g., "sport", "social")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Icon identifier for UI rendering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Suggested duration when logging the activity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_duration_minutes: Option<f64>,
}

/// Activity types domain
pub struct ActivityTypes;

impl ContentDomain for ActivityTypes {
    type Item = ActivityType;

    const KIND: DomainKind = DomainKind::ActivityTypes;
    const COLLECTION_KEY: &'static str = "activityTypes";
    const NUMERIC_FIELD: Option<&'static str> = Some("defaultDurationMinutes");

    fn item_id(item: &ActivityType) -> &ItemId {
        &item.id
    }

    fn category(item: &ActivityType) -> Option<&str> {
        item.category.as_deref()
    }

    fn text_fields(item: &ActivityType) -> Vec<&LocalizedText> {
        std::iter::once(&item.name)
            .chain(item.description.as_ref())
            .collect()
    }

    fn numeric_value(item: &ActivityType) -> Option<f64> {
        item.default_duration_minutes
    }

    fn localize(item: &ActivityType, language: &str, default_language: &str) -> ActivityType {
        ActivityType {
            name: item.name.localized(language, default_language),
            description: localize_opt(&item.description, language, default_language),
            ..item.clone()
        }
    }
}
