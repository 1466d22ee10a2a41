// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Wellness programs

use serde::{Deserialize, Serialize};

use super::localize_opt;
use crate::content::{ContentDomain, DomainKind, ItemId, LocalizedText};

/// A guided wellness program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    /// Unique id within the document
    pub id: ItemId,
    /// Display name
    #[serde(default, deserialize_with = "super::text_or_empty")]
    pub name: LocalizedText,
    /// Longer description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedText>,
    /// Category key (see the document's `categories` map)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Total length of the program
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<f64>,
    /// Cover image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Available to subscribers only
    #[serde(default)]
    pub premium: bool,
    /// Ordered step titles
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<LocalizedText>,
}

/// Programs domain
pub struct Programs;

impl ContentDomain for Programs {
    type Item = Program;

    const KIND: DomainKind = DomainKind::Programs;
    const COLLECTION_KEY: &'static str = "programs";
    const NUMERIC_FIELD: Option<&'static str> = Some("durationMinutes");

    fn item_id(item: &Program) -> &ItemId {
        &item.id
    }

    fn category(item: &Program) -> Option<&str> {
        item.category.as_deref()
    }

    fn text_fields(item: &Program) -> Vec<&LocalizedText> {
        std::iter::once(&item.name)
            .chain(item.description.as_ref())
            .collect()
    }

    fn numeric_value(item: &Program) -> Option<f64> {
        item.duration_minutes
    }

    fn localize(item: &Program, language: &str, default_language: &str) -> Program {
        Program {
            name: item.name.localized(language, default_language),
            description: localize_opt(&item.description, language, default_language),
            steps: item
                .steps
                .iter()
                .map(|step| step.localized(language, default_language))
                .collect(),
            ..item.clone()
        }
    }
}
