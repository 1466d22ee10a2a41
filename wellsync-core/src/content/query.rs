// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Read-only queries over the current snapshot
//!
//! Every query works on the snapshot held at call time and recomputes its
//! result; nothing is cached beyond the snapshot itself.

use std::collections::BTreeMap;

use super::domain::ContentDomain;
use super::sync::ContentSyncStore;
use super::types::ContentStats;

impl<D: ContentDomain> ContentSyncStore<D> {
    /// All items in document order, localized when a language is given.
    pub fn get_all(&self, language: Option<&str>) -> Vec<D::Item> {
        let snapshot = self.snapshot();
        snapshot
            .items
            .iter()
            .map(|item| self.present(item, language))
            .collect()
    }

    /// Item whose id has the given text form.
    pub fn get_by_id(&self, id: &str, language: Option<&str>) -> Option<D::Item> {
        let snapshot = self.snapshot();
        snapshot
            .items
            .iter()
            .find(|item| D::item_id(item).matches(id))
            .map(|item| self.present(item, language))
    }

    /// Items in a category, in document order.
    pub fn get_by_category(&self, category: &str, language: Option<&str>) -> Vec<D::Item> {
        let snapshot = self.snapshot();
        snapshot
            .items
            .iter()
            .filter(|item| D::category(item) == Some(category))
            .map(|item| self.present(item, language))
            .collect()
    }

    /// Case-insensitive substring search over names, descriptions and
    /// categories. A blank query matches everything.
    pub fn search(&self, query: &str, language: Option<&str>) -> Vec<D::Item> {
        let needle = query.trim().to_lowercase();
        let snapshot = self.snapshot();
        snapshot
            .items
            .iter()
            .filter(|item| {
                needle.is_empty()
                    || D::text_fields(item)
                        .iter()
                        .any(|text| text.contains_lowercase(&needle))
                    || D::category(item)
                        .map(|c| c.to_lowercase().contains(&needle))
                        .unwrap_or(false)
            })
            .map(|item| self.present(item, language))
            .collect()
    }

    /// Display name of a category key; the key itself when unmapped.
    pub fn category_name(&self, category: &str, language: &str) -> String {
        self.snapshot()
            .categories
            .get(category)
            .map(|name| name.resolve(language, self.default_language()))
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| category.to_string())
    }

    /// Aggregates over the current snapshot.
    pub fn get_stats(&self) -> ContentStats {
        let (snapshot, state) = self.snapshot_with_state();

        let mut per_category_count = BTreeMap::new();
        for category in snapshot.items.iter().filter_map(|item| D::category(item)) {
            *per_category_count.entry(category.to_string()).or_insert(0) += 1;
        }

        let values: Vec<f64> = snapshot
            .items
            .iter()
            .filter_map(|item| D::numeric_value(item))
            .filter(|v| v.is_finite())
            .collect();
        let average = if values.is_empty() {
            None
        } else {
            Some(values.iter().sum::<f64>() / values.len() as f64)
        };

        ContentStats {
            total_count: snapshot.len(),
            per_category_count,
            numeric_field: D::NUMERIC_FIELD,
            average,
            last_sync_at: state.last_sync_at,
            source_available: state.source_available,
        }
    }

    fn present(&self, item: &D::Item, language: Option<&str>) -> D::Item {
        match language {
            Some(language) => D::localize(item, language, self.default_language()),
            None => item.clone(),
        }
    }
}
