// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Social Networks
//!
//! Social network links shown on the app's "follow us" screen, with
//! profile URL templates.

use serde::{Deserialize, Serialize};

use crate::content::{ContentDomain, DomainKind, ItemId, LocalizedText};

/// A social network definition with profile URL template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialNetwork {
    /// Unique id within the document
    pub id: ItemId,
    /// Display name
    #[serde(default, deserialize_with = "super::text_or_empty")]
    pub name: LocalizedText,
    /// Profile URL or template with a `{username}` placeholder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Icon identifier for UI rendering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Grouping key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Hidden from the app while false
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl SocialNetwork {
    /// Generates a profile URL from a username.
    ///
    /// Removes a leading `@` and preserves full URLs if already provided.
    /// Returns `None` when the network has no URL.
    ///
    /// # Examples
    ///
    /// ```
    /// use wellsync_core::SocialNetwork;
    ///
    /// let network: SocialNetwork = serde_json::from_str(
    ///     r#"{"id": "x", "name": "X", "url": "https://x.com/{username}"}"#,
    /// ).unwrap();
    /// assert_eq!(network.profile_url("@alice").as_deref(), Some("https://x.com/alice"));
    /// ```
    pub fn profile_url(&self, username: &str) -> Option<String> {
        let template = self.url.as_deref()?;
        let username = username.trim();

        if username.starts_with("http://") || username.starts_with("https://") {
            return Some(username.to_string());
        }

        let username = username.strip_prefix('@').unwrap_or(username);
        Some(template.replace("{username}", username))
    }
}

/// Social networks domain
pub struct SocialNetworks;

impl ContentDomain for SocialNetworks {
    type Item = SocialNetwork;

    const KIND: DomainKind = DomainKind::SocialNetworks;
    const COLLECTION_KEY: &'static str = "networks";

    fn item_id(item: &SocialNetwork) -> &ItemId {
        &item.id
    }

    fn category(item: &SocialNetwork) -> Option<&str> {
        item.category.as_deref()
    }

    fn text_fields(item: &SocialNetwork) -> Vec<&LocalizedText> {
        vec![&item.name]
    }

    fn localize(item: &SocialNetwork, language: &str, default_language: &str) -> SocialNetwork {
        SocialNetwork {
            name: item.name.localized(language, default_language),
            ..item.clone()
        }
    }
}
