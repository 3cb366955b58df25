//! Ordered map type for INI documents and sections.
//!
//! This module provides [`IniMap`], a wrapper around [`IndexMap`] that
//! maintains insertion order. Order matters twice in this crate: the
//! stringify engine emits properties in the order they were inserted, and
//! duplicate-key promotion appends array elements in assignment order.
//!
//! ## Why IndexMap?
//!
//! `IniMap` uses `IndexMap` instead of `HashMap` to ensure:
//!
//! - **Deterministic output**: stringify emits properties in a stable order
//! - **Single-pass insertion order**: parsed documents reflect the order
//!   keys first appeared in the source
//!
//! ## Examples
//!
//! ```rust
//! use typed_ini::{IniMap, IniValue};
//!
//! let mut doc = IniMap::new();
//! doc.insert("host".to_string(), IniValue::from("localhost"));
//! doc.insert("port".to_string(), IniValue::from(5432));
//!
//! assert_eq!(doc.len(), 2);
//! assert_eq!(doc.get("host").and_then(|v| v.as_str()), Some("localhost"));
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

/// An ordered map of string keys to INI values.
///
/// Both a parsed document and each of its sections are an `IniMap`. In a
/// parsed document, values are scalars or [`Section`](crate::IniValue::Section)s
/// whose own values are scalars; deeper nesting never comes out of the
/// parser, though trees built by hand may carry it (and are rejected by
/// the stringify engine).
///
/// # Examples
///
/// ```rust
/// use typed_ini::{IniMap, IniValue};
///
/// let mut map = IniMap::new();
/// map.insert("first".to_string(), IniValue::from(1));
/// map.insert("second".to_string(), IniValue::from(2));
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IniMap(IndexMap<String, crate::IniValue>);

impl IniMap {
    /// Creates an empty `IniMap`.
    #[must_use]
    pub fn new() -> Self {
        IniMap(IndexMap::new())
    }

    /// Creates an empty `IniMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        IniMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned
    /// and the key keeps its original position.
    pub fn insert(&mut self, key: String, value: crate::IniValue) -> Option<crate::IniValue> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::IniValue> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut crate::IniValue> {
        self.0.get_mut(key)
    }

    /// Returns `true` if the map contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes a key, shifting all later entries down one index.
    ///
    /// This is the removal the alias rewriter relies on: removing the old
    /// name and inserting the new one moves the property to the end of the
    /// map, matching delete-then-assign semantics.
    pub fn shift_remove(&mut self, key: &str) -> Option<crate::IniValue> {
        self.0.shift_remove(key)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::IniValue> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::IniValue> {
        self.0.values()
    }

    /// Returns an iterator over the entries of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::IniValue> {
        self.0.iter()
    }
}

impl From<HashMap<String, crate::IniValue>> for IniMap {
    fn from(map: HashMap<String, crate::IniValue>) -> Self {
        IniMap(map.into_iter().collect())
    }
}

impl From<IniMap> for HashMap<String, crate::IniValue> {
    fn from(map: IniMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for IniMap {
    type Item = (String, crate::IniValue);
    type IntoIter = indexmap::map::IntoIter<String, crate::IniValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a IniMap {
    type Item = (&'a String, &'a crate::IniValue);
    type IntoIter = indexmap::map::Iter<'a, String, crate::IniValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, crate::IniValue)> for IniMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::IniValue)>>(iter: T) -> Self {
        IniMap(IndexMap::from_iter(iter))
    }
}

impl serde::Serialize for IniMap {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> serde::Deserialize<'de> for IniMap {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{MapAccess, Visitor};
        use std::fmt;

        struct IniMapVisitor;

        impl<'de> Visitor<'de> for IniMapVisitor {
            type Value = IniMap;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of string keys to INI values")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut map = IniMap::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry()? {
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(IniMapVisitor)
    }
}
