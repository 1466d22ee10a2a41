// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Onboarding flow questions

use serde::{Deserialize, Serialize};

use super::localize_opt;
use crate::content::{ContentDomain, DomainKind, ItemId, LocalizedText};

/// A question asked during onboarding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingQuestion {
    /// Unique id within the document
    pub id: ItemId,
    /// Question text
    #[serde(default, deserialize_with = "super::text_or_empty")]
    pub question: LocalizedText,
    /// Helper text under the question
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedText>,
    /// Onboarding step the question belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Answer widget ("single", "multiple", "text", ...)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub question_type: Option<String>,
    /// Answer options, in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<LocalizedText>,
    /// Position within the step
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

/// Onboarding questions domain
pub struct OnboardingQuestions;

impl ContentDomain for OnboardingQuestions {
    type Item = OnboardingQuestion;

    const KIND: DomainKind = DomainKind::OnboardingQuestions;
    const COLLECTION_KEY: &'static str = "questions";

    fn item_id(item: &OnboardingQuestion) -> &ItemId {
        &item.id
    }

    fn category(item: &OnboardingQuestion) -> Option<&str> {
        item.category.as_deref()
    }

    fn text_fields(item: &OnboardingQuestion) -> Vec<&LocalizedText> {
        std::iter::once(&item.question)
            .chain(item.description.as_ref())
            .collect()
    }

    fn localize(
        item: &OnboardingQuestion,
        language: &str,
        default_language: &str,
    ) -> OnboardingQuestion {
        OnboardingQuestion {
            question: item.question.localized(language, default_language),
            description: localize_opt(&item.description, language, default_language),
            options: item
                .options
                .iter()
                .map(|option| option.localized(language, default_language))
                .collect(),
            ..item.clone()
        }
    }
}
