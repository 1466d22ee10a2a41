// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Property tests for id repair

use std::collections::HashSet;

use proptest::prelude::*;
use serde_json::{json, Value};
use wellsync_core::content::{repair_ids, ItemId};

fn id_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        (0u64..8).prop_map(|n| json!(n)),
        (0u64..8).prop_map(|n| json!(n as f64)),
        "[a-c]{0,2}".prop_map(|s| json!(s)),
        Just(Value::Null),
        Just(json!(true)),
    ]
}

fn items_strategy() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(
        prop::option::of(id_strategy()).prop_map(|id| match id {
            Some(id) => json!({"id": id}),
            None => json!({}),
        }),
        0..24,
    )
}

proptest! {
    #[test]
    fn repaired_ids_are_unique_and_usable(mut items in items_strategy()) {
        repair_ids(&mut items, "id");

        let mut seen = HashSet::new();
        for item in &items {
            let id = ItemId::from_value(&item["id"]);
            prop_assert!(id.is_some());
            prop_assert!(seen.insert(id.unwrap().identity_key()));
        }
    }

    #[test]
    fn first_occurrences_are_kept(items in items_strategy()) {
        let mut repaired = items.clone();
        repair_ids(&mut repaired, "id");

        let mut seen = HashSet::new();
        for (before, after) in items.iter().zip(&repaired) {
            if let Some(id) = ItemId::from_value(&before["id"]) {
                if seen.insert(id.identity_key()) {
                    prop_assert_eq!(&before["id"], &after["id"]);
                }
            }
        }
    }

    #[test]
    fn repair_is_deterministic(items in items_strategy()) {
        let mut a = items.clone();
        let mut b = items;
        repair_ids(&mut a, "id");
        repair_ids(&mut b, "id");
        prop_assert_eq!(a, b);
    }
}
