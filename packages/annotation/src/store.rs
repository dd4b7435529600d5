//! Annotation Store
//!
//! Name-keyed accumulation of every annotation found in one piece of text.

use indexmap::IndexMap;
use serde::Serialize;

use crate::injector::{Annotation, Injector};
use crate::introspect::Introspect;
use crate::value::{AnnotationMap, AnnotationValue};

/// Slot a scalar occupies once its annotation also carries properties
pub const SINGLE_VALUE_KEY: &str = "value";
/// Slot a sequence occupies once its annotation also carries properties
pub const MULTIPLE_VALUES_KEY: &str = "values";

/// Annotations extracted from a single comment
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AnnotationStore {
    annotations: IndexMap<String, AnnotationValue>,
}

impl AnnotationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, name: &str) -> bool {
        self.annotations.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&AnnotationValue> {
        self.annotations.get(name)
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// Annotation names in the order they were first seen
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.annotations.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnnotationValue)> {
        self.annotations.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.annotations
                .iter()
                .map(|(name, value)| (name.clone(), value.clone().into()))
                .collect(),
        )
    }

    /// Inject this store's payload for `destination` using the default injector
    pub fn inject<'d, D>(&self, destination: &'d mut D) -> Option<&'d mut D>
    where
        D: Annotation + Introspect,
    {
        Injector::new().inject(self, destination)
    }

    /// Record a scalar occurrence
    ///
    /// Repeated scalars accumulate into a sequence in encounter order. A scalar
    /// arriving after property occurrences takes the map's `value` slot.
    pub(crate) fn merge_scalar(&mut self, name: &str, value: AnnotationValue) {
        let Some(existing) = self.annotations.get_mut(name) else {
            self.annotations.insert(name.to_string(), value);
            return;
        };

        match existing {
            AnnotationValue::Sequence(items) => items.push(value),
            AnnotationValue::Map(map) => {
                map.insert(SINGLE_VALUE_KEY.to_string(), value);
            }
            scalar => {
                let first = std::mem::replace(scalar, AnnotationValue::Null);
                *scalar = AnnotationValue::Sequence(vec![first, value]);
            }
        }
    }

    /// Record a property-list occurrence
    ///
    /// Properties merge into one map per annotation, later keys overwriting
    /// earlier ones. An earlier scalar is kept under `value` (a sequence under
    /// `values`).
    pub(crate) fn merge_properties<I>(&mut self, name: &str, properties: I)
    where
        I: IntoIterator<Item = (String, AnnotationValue)>,
    {
        let existing = self
            .annotations
            .entry(name.to_string())
            .or_insert_with(|| AnnotationValue::Map(AnnotationMap::new()));

        if !existing.is_map() {
            let previous = std::mem::replace(existing, AnnotationValue::Null);
            let key = if previous.is_sequence() {
                MULTIPLE_VALUES_KEY
            } else {
                SINGLE_VALUE_KEY
            };
            let mut map = AnnotationMap::new();
            map.insert(key.to_string(), previous);
            *existing = AnnotationValue::Map(map);
        }

        if let AnnotationValue::Map(map) = existing {
            map.extend(properties);
        }
    }
}

impl<'a> IntoIterator for &'a AnnotationStore {
    type Item = (&'a String, &'a AnnotationValue);
    type IntoIter = indexmap::map::Iter<'a, String, AnnotationValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.annotations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(pairs: &[(&str, AnnotationValue)]) -> AnnotationMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_scalars_accumulate() {
        let mut store = AnnotationStore::new();
        store.merge_scalar("alias", "a".into());
        assert_eq!(store.get("alias"), Some(&AnnotationValue::from("a")));
        store.merge_scalar("alias", "b".into());
        store.merge_scalar("alias", "c".into());
        assert_eq!(
            store.get("alias"),
            Some(&AnnotationValue::from(vec!["a", "b", "c"]))
        );
    }

    #[test]
    fn test_scalar_after_properties_takes_value_slot() {
        let mut store = AnnotationStore::new();
        store.merge_properties("mixed", props(&[("foo", "x".into())]));
        store.merge_scalar("mixed", 1i64.into());
        store.merge_scalar("mixed", 2i64.into());
        let map = store.get("mixed").and_then(AnnotationValue::as_map).unwrap();
        assert_eq!(map.get("foo"), Some(&AnnotationValue::from("x")));
        assert_eq!(map.get("value"), Some(&AnnotationValue::from(2i64)));
    }

    #[test]
    fn test_properties_after_scalars_keep_sequence() {
        let mut store = AnnotationStore::new();
        store.merge_scalar("mixed", "a".into());
        store.merge_scalar("mixed", "b".into());
        store.merge_properties("mixed", props(&[("foo", true.into())]));
        let value = store.get("mixed").unwrap();
        assert_eq!(value.get("values"), Some(&AnnotationValue::from(vec!["a", "b"])));
        assert_eq!(value.get("foo"), Some(&AnnotationValue::Bool(true)));
    }
}
