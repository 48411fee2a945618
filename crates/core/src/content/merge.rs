//! Building blocks of the defaults merge.
//!
//! Each page's `merge` composes these, one nesting level at a time. None of
//! them fail: anything that does not fit the default's shape is dropped and
//! the default value stays in place.

use std::collections::HashMap;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use super::{ImageRef, PageKey, SectionEntry, SectionKey};

/// Override content indexed by section. Unknown section names are dropped.
#[derive(Debug, Clone)]
pub struct Overrides<S> {
    by_section: HashMap<S, Value>,
}

impl<S: SectionKey> Overrides<S> {
    pub fn empty() -> Self {
        Self {
            by_section: HashMap::new(),
        }
    }

    /// Index `entries` by section. A later entry for the same section
    /// replaces an earlier one.
    pub fn from_entries(page: PageKey, entries: &[SectionEntry]) -> Self {
        let mut by_section = HashMap::with_capacity(entries.len());
        for entry in entries {
            match S::parse(&entry.section) {
                Some(section) => {
                    by_section.insert(section, entry.content.clone());
                }
                None => {
                    tracing::debug!(%page, section = %entry.section, "ignoring override for unknown section");
                }
            }
        }
        Self { by_section }
    }

    pub fn get(&self, section: S) -> Option<&Value> {
        self.by_section.get(&section)
    }

    /// Field `key` of a section override, when the override is an object.
    pub fn field(&self, section: S, key: &str) -> Option<&Value> {
        field(self.get(section), key)
    }

    pub fn len(&self) -> usize {
        self.by_section.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_section.is_empty()
    }
}

impl<S: SectionKey> Default for Overrides<S> {
    fn default() -> Self {
        Self::empty()
    }
}

/// `value` as a JSON object. Arrays, primitives and null are not records.
pub fn as_record(value: Option<&Value>) -> Option<&Map<String, Value>> {
    value.and_then(Value::as_object)
}

pub fn field<'a>(value: Option<&'a Value>, key: &str) -> Option<&'a Value> {
    as_record(value).and_then(|record| record.get(key))
}

/// Shallow-merge the scalar fields of `value` onto `fallback`.
///
/// Only keys the fallback already has are considered, and only when the
/// incoming value has the same JSON type as the current one. Nested objects
/// and lists are left at the fallback; callers merge them explicitly.
pub fn merge_record<T>(fallback: &T, value: Option<&Value>) -> T
where
    T: Serialize + DeserializeOwned + Clone,
{
    let Some(patch) = as_record(value) else {
        return fallback.clone();
    };
    let Ok(Value::Object(mut base)) = serde_json::to_value(fallback) else {
        return fallback.clone();
    };

    let mut merged: Option<T> = None;
    for (key, incoming) in patch {
        let Some(slot) = base.get(key) else {
            continue;
        };
        if !same_scalar_kind(slot, incoming) || *slot == *incoming {
            continue;
        }
        let previous = base.insert(key.clone(), incoming.clone());
        // Integers the field type cannot hold (e.g. 900 stars) fail here and
        // only this key is reverted.
        match serde_json::from_value::<T>(Value::Object(base.clone())) {
            Ok(record) => merged = Some(record),
            Err(err) => {
                tracing::debug!(field = %key, error = %err, "override does not fit field, keeping default");
                if let Some(previous) = previous {
                    base.insert(key.clone(), previous);
                }
            }
        }
    }
    merged.unwrap_or_else(|| fallback.clone())
}

fn same_scalar_kind(current: &Value, incoming: &Value) -> bool {
    match (current, incoming) {
        (Value::String(_), Value::String(_)) => true,
        (Value::Bool(_), Value::Bool(_)) => true,
        (Value::Number(current), Value::Number(incoming)) => {
            if current.is_u64() {
                incoming.is_u64()
            } else if current.is_i64() {
                incoming.is_i64()
            } else {
                true
            }
        }
        _ => false,
    }
}

/// Merge an image reference. `src` and `alt` take strings; `path` takes a
/// string or `null`.
pub fn merge_image(fallback: &ImageRef, value: Option<&Value>) -> ImageRef {
    let Some(patch) = as_record(value) else {
        return fallback.clone();
    };
    let mut merged = fallback.clone();
    if let Some(Value::String(src)) = patch.get("src") {
        merged.src = src.clone();
    }
    if let Some(Value::String(alt)) = patch.get("alt") {
        merged.alt = alt.clone();
    }
    match patch.get("path") {
        Some(Value::String(path)) => merged.path = Some(path.clone()),
        Some(Value::Null) => merged.path = None,
        _ => {}
    }
    merged
}

/// All-or-nothing: the override replaces the list only when every element
/// is a string. The override's length is kept.
pub fn merge_string_list(fallback: &[String], value: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(items)) = value else {
        return fallback.to_vec();
    };
    items
        .iter()
        .map(|item| item.as_str().map(str::to_owned))
        .collect::<Option<Vec<_>>>()
        .unwrap_or_else(|| fallback.to_vec())
}

/// Positional merge anchored to the fallback's length. Object entries are
/// merged onto the item at the same index with `merge_item`; missing or
/// non-object entries leave the item as is; extra entries are ignored.
pub fn merge_list<T, F>(fallback: &[T], value: Option<&Value>, merge_item: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &Value) -> T,
{
    let Some(Value::Array(entries)) = value else {
        return fallback.to_vec();
    };
    fallback
        .iter()
        .enumerate()
        .map(|(index, item)| match entries.get(index) {
            Some(entry) if entry.is_object() => merge_item(item, entry),
            _ => item.clone(),
        })
        .collect()
}

/// `merge_list` for records with scalar fields only.
pub fn merge_records<T>(fallback: &[T], value: Option<&Value>) -> Vec<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    merge_list(fallback, value, |item, entry| merge_record(item, Some(entry)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Review {
        stars: u8,
        text: String,
        tags: Vec<String>,
    }

    fn review() -> Review {
        Review {
            stars: 5,
            text: "Great".into(),
            tags: vec!["a".into()],
        }
    }

    #[test]
    fn record_takes_matching_scalars() {
        let merged = merge_record(&review(), Some(&json!({"text": "Fine", "stars": 4})));
        assert_eq!(merged.text, "Fine");
        assert_eq!(merged.stars, 4);
        assert_eq!(merged.tags, vec!["a".to_string()]);
    }

    #[test]
    fn record_rejects_mismatched_types() {
        let merged = merge_record(&review(), Some(&json!({"text": 42, "stars": "4"})));
        assert_eq!(merged, review());
    }

    #[test]
    fn record_ignores_unknown_keys_and_nested_values() {
        let merged = merge_record(
            &review(),
            Some(&json!({"extra": "x", "tags": ["b", "c"]})),
        );
        assert_eq!(merged, review());
    }

    #[test]
    fn record_rejects_numbers_that_do_not_fit() {
        let merged = merge_record(&review(), Some(&json!({"stars": 4.5, "text": "Ok"})));
        assert_eq!(merged.stars, 5);
        assert_eq!(merged.text, "Ok");

        let merged = merge_record(&review(), Some(&json!({"stars": 900, "text": "Ok"})));
        assert_eq!(merged.stars, 5);
        assert_eq!(merged.text, "Ok");

        let merged = merge_record(&review(), Some(&json!({"stars": -1, "text": "Ok"})));
        assert_eq!(merged.stars, 5);
        assert_eq!(merged.text, "Ok");
    }

    #[test]
    fn record_ignores_non_objects() {
        for value in [json!(null), json!("text"), json!([1, 2]), json!(3)] {
            assert_eq!(merge_record(&review(), Some(&value)), review());
        }
        assert_eq!(merge_record(&review(), None), review());
    }

    #[test]
    fn image_path_accepts_null_and_strings() {
        let base = ImageRef {
            src: "/a.jpg".into(),
            alt: "a".into(),
            path: Some("stored/a.jpg".into()),
        };
        let cleared = merge_image(&base, Some(&json!({"src": "", "path": null})));
        assert_eq!(cleared.src, "");
        assert_eq!(cleared.alt, "a");
        assert_eq!(cleared.path, None);

        let moved = merge_image(&base, Some(&json!({"path": "b.jpg", "alt": 7})));
        assert_eq!(moved.path.as_deref(), Some("b.jpg"));
        assert_eq!(moved.alt, "a");
    }

    #[test]
    fn string_list_is_all_or_nothing() {
        let fallback = vec!["x".to_string(), "y".to_string()];
        assert_eq!(
            merge_string_list(&fallback, Some(&json!(["a", "b", "c"]))),
            vec!["a", "b", "c"]
        );
        assert_eq!(
            merge_string_list(&fallback, Some(&json!(["a", 1]))),
            fallback
        );
        assert_eq!(merge_string_list(&fallback, Some(&json!("a"))), fallback);
        assert!(merge_string_list(&fallback, Some(&json!([]))).is_empty());
    }

    #[test]
    fn list_is_anchored_to_fallback_length() {
        let fallback = vec![review(), review(), review()];
        let merged = merge_records(
            &fallback,
            Some(&json!([{"text": "one"}, "junk", {"text": "three"}, {"text": "four"}])),
        );
        assert_eq!(merged.len(), 3);
        assert_eq!(merged[0].text, "one");
        assert_eq!(merged[1], review());
        assert_eq!(merged[2].text, "three");

        let short = merge_records(&fallback, Some(&json!([{"stars": 1}])));
        assert_eq!(short[0].stars, 1);
        assert_eq!(&short[1..], &fallback[1..]);

        assert_eq!(merge_records(&fallback, Some(&json!({"0": {}}))), fallback);
    }
}
