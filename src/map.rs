//! Ordered map type for object values.
//!
//! [`ObjectMap`] wraps an [`IndexMap`] so that objects keep their insertion
//! order for iteration and debugging. Insertion order never reaches the
//! canonical text: the encoder walks [`ObjectMap::sorted_entries`] instead.
//!
//! ## Examples
//!
//! ```rust
//! use serde_canon::{ObjectMap, Value};
//!
//! let mut map = ObjectMap::new();
//! map.insert("name".to_string(), Value::from("Alice"));
//! map.insert("age".to_string(), Value::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//!
//! let keys: Vec<_> = map.sorted_entries().into_iter().map(|(k, _)| k.as_str()).collect();
//! assert_eq!(keys, vec!["age", "name"]);
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

use crate::Value;

/// An insertion-ordered map of string keys to values.
///
/// Equality ignores order: two maps are equal when they hold the same pairs.
#[derive(Debug, Clone, Default)]
pub struct ObjectMap(IndexMap<String, Value>);

impl ObjectMap {
    /// Creates an empty `ObjectMap`.
    #[must_use]
    pub fn new() -> Self {
        ObjectMap(IndexMap::new())
    }

    /// Creates an empty `ObjectMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        ObjectMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the value is replaced in place
    /// and the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_canon::{ObjectMap, Value};
    ///
    /// let mut map = ObjectMap::new();
    /// assert!(map.insert("key".to_string(), Value::from(42)).is_none());
    /// assert!(map.insert("key".to_string(), Value::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    /// Removes a key, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of elements in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }

    /// Returns the entries ordered by ascending key (ordinal comparison).
    ///
    /// Keys are unique, so an unstable sort yields a single deterministic order.
    #[must_use]
    pub fn sorted_entries(&self) -> Vec<(&String, &Value)> {
        let mut entries: Vec<_> = self.0.iter().collect();
        entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
        entries
    }
}

impl PartialEq for ObjectMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).map_or(false, |v| v == value))
    }
}

impl From<HashMap<String, Value>> for ObjectMap {
    fn from(map: HashMap<String, Value>) -> Self {
        ObjectMap(map.into_iter().collect())
    }
}

impl From<ObjectMap> for HashMap<String, Value> {
    fn from(map: ObjectMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for ObjectMap {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ObjectMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for ObjectMap {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        ObjectMap(IndexMap::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_entries_ignore_insertion_order() {
        let forward: ObjectMap = [("foo", 1), ("bar", 2), ("baz", 3)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), Value::from(v)))
            .collect();
        let keys: Vec<_> = forward.sorted_entries().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["bar", "baz", "foo"]);

        // insertion order survives plain iteration
        let keys: Vec<_> = forward.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["foo", "bar", "baz"]);
    }

    #[test]
    fn test_sort_is_ordinal() {
        let map: ObjectMap = ["b", "B", "a", "10", "9", "é"]
            .into_iter()
            .map(|k| (k.to_string(), Value::Null))
            .collect();
        let keys: Vec<_> = map.sorted_entries().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["10", "9", "B", "a", "b", "é"]);
    }

    #[test]
    fn test_equality_ignores_order() {
        let a: ObjectMap = vec![
            ("x".to_string(), Value::from(1)),
            ("y".to_string(), Value::from(2)),
        ]
        .into_iter()
        .collect();
        let b: ObjectMap = vec![
            ("y".to_string(), Value::from(2)),
            ("x".to_string(), Value::from(1)),
        ]
        .into_iter()
        .collect();
        assert_eq!(a, b);

        let mut c = b.clone();
        c.insert("y".to_string(), Value::from(3));
        assert_ne!(a, c);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut map: ObjectMap = ["a", "b", "c"]
            .into_iter()
            .map(|k| (k.to_string(), Value::Null))
            .collect();
        assert!(map.remove("b").is_some());
        assert!(!map.contains_key("b"));
        let keys: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "c"]);
    }
}
