// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Content domain hooks
//!
//! Every content domain shares the same load/push/query machinery and only
//! differs in its item shape and a handful of hooks described here.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::error::{ContentError, ContentResult};
use super::localized::LocalizedText;
use super::repair::repair_ids;
use super::store::ContentSnapshot;
use super::types::{DomainKind, ItemId};

/// Per-domain hooks for the generic sync store
pub trait ContentDomain: Send + Sync + 'static {
    /// Item shape as stored in the document
    type Item: DeserializeOwned + Serialize + Clone + Send + Sync + 'static;

    /// Which domain this is
    const KIND: DomainKind;

    /// Object key holding the items when the document is not a bare array
    const COLLECTION_KEY: &'static str;

    /// Field holding the item id
    const ID_FIELD: &'static str = "id";

    /// Name of the field averaged in stats, if any
    const NUMERIC_FIELD: Option<&'static str> = None;

    /// Whether ids are repaired on load
    const REPAIRS_IDS: bool = true;

    /// Id of an item
    fn item_id(item: &Self::Item) -> &ItemId;

    /// Category key of an item
    fn category(item: &Self::Item) -> Option<&str>;

    /// Display texts searched by `search` (name, description, ...)
    fn text_fields(item: &Self::Item) -> Vec<&LocalizedText>;

    /// Value of [`Self::NUMERIC_FIELD`] for an item
    fn numeric_value(_item: &Self::Item) -> Option<f64> {
        None
    }

    /// Copy of an item with every localized field resolved to plain text
    fn localize(item: &Self::Item, language: &str, default_language: &str) -> Self::Item;
}

/// Parses a raw document into the domain shape.
///
/// Accepted shapes: a bare array of items, or an object holding the items
/// under the domain's collection key (or `"items"`) with an optional
/// `"categories"` map.
pub fn parse_document<D: ContentDomain>(
    document: Value,
) -> ContentResult<ContentSnapshot<D::Item>> {
    let (mut items, categories) = match document {
        Value::Array(items) => (items, None),
        Value::Object(mut object) => {
            let items = object
                .remove(D::COLLECTION_KEY)
                .or_else(|| object.remove("items"))
                .ok_or_else(|| {
                    ContentError::Parse(format!(
                        "document has neither {:?} nor \"items\"",
                        D::COLLECTION_KEY
                    ))
                })?;
            let Value::Array(items) = items else {
                return Err(ContentError::Parse(format!(
                    "{:?} must be an array",
                    D::COLLECTION_KEY
                )));
            };
            (items, object.remove("categories"))
        }
        other => {
            return Err(ContentError::Parse(format!(
                "expected an array or object, got {}",
                json_type(&other)
            )))
        }
    };

    if D::REPAIRS_IDS {
        repair_ids(&mut items, D::ID_FIELD);
    }

    let items = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item)
                .map_err(|e| ContentError::Parse(format!("item {}: {}", index, e)))
        })
        .collect::<ContentResult<Vec<D::Item>>>()?;

    let categories = match categories {
        None | Some(Value::Null) => BTreeMap::new(),
        Some(value) => serde_json::from_value(value)
            .map_err(|e| ContentError::Parse(format!("categories: {}", e)))?,
    };

    Ok(ContentSnapshot { items, categories })
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
