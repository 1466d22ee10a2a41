// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Identifier repair
//!
//! Documents are edited by hand upstream, so ids may be missing, empty or
//! duplicated. Repair walks the items in document order: the first
//! occurrence of a usable id (number or non-empty string) is kept, every
//! other item gets the smallest positive integer not used as a numeric id
//! anywhere in the document.

use std::collections::HashSet;

use serde_json::Value;
use tracing::debug;

use super::types::ItemId;

/// Repairs ids in place. Returns the number of items that got a new id.
pub fn repair_ids(items: &mut [Value], id_field: &str) -> usize {
    let mut used: HashSet<u64> = items
        .iter()
        .filter_map(|item| item.get(id_field))
        .filter_map(ItemId::from_value)
        .filter_map(|id| id.as_positive_integer())
        .collect();

    let mut seen: HashSet<String> = HashSet::new();
    let mut next = 1u64;
    let mut repaired = 0;

    for (index, item) in items.iter_mut().enumerate() {
        let Value::Object(object) = item else {
            continue;
        };

        if let Some(id) = object.get(id_field).and_then(ItemId::from_value) {
            if seen.insert(id.identity_key()) {
                continue;
            }
        }

        while used.contains(&next) {
            next += 1;
        }
        used.insert(next);

        let id = ItemId::from(next);
        seen.insert(id.identity_key());
        debug!(
            index,
            previous = ?object.get(id_field),
            assigned = next,
            "repaired item id"
        );
        object.insert(id_field.to_string(), Value::from(next));
        repaired += 1;
    }

    repaired
}
