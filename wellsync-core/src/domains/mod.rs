// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Content domains
//!
//! Item shapes of the admin-managed reference data, each paired with a
//! marker type implementing [`ContentDomain`](crate::content::ContentDomain).

mod activity_types;
mod mood_types;
mod onboarding;
mod programs;
mod social_networks;

pub use activity_types::{ActivityType, ActivityTypes};
pub use mood_types::{MoodType, MoodTypes};
pub use onboarding::{OnboardingQuestion, OnboardingQuestions};
pub use programs::{Program, Programs};
pub use social_networks::{SocialNetwork, SocialNetworks};

use serde::{Deserialize, Deserializer};

use crate::content::LocalizedText;

/// Reads an absent or `null` text field as empty text.
///
/// One nameless item must not fail the whole document.
fn text_or_empty<'de, D>(deserializer: D) -> Result<LocalizedText, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<LocalizedText>::deserialize(deserializer)?.unwrap_or_default())
}

/// Resolves an optional localized field.
fn localize_opt(
    text: &Option<LocalizedText>,
    language: &str,
    default_language: &str,
) -> Option<LocalizedText> {
    text.as_ref()
        .map(|t| t.localized(language, default_language))
}
