//! The mutable, insertion-ordered map backing a [`SafeMap`](crate::SafeMap).
//!
//! A [`RawMap`] maps string keys to slots that may or may not hold a value.
//! Absent slots never leak past an observation point: the bridge functions
//! [`raw_map_to_entries`] and [`raw_map_to_array`], as well as [`RawMap::get`]
//! and [`RawMap::iter`], all skip them.
//!
//! # Ordering
//!
//! Keys enumerate in the order they were last inserted. Re-inserting a key
//! moves it to the end, and folding a sequence with duplicate keys places
//! each key at its last occurrence.
//!
//! # Examples
//!
//! ```rust
//! use safemap::raw_map::{RawMap, raw_map_to_array, raw_map_to_entries};
//!
//! let mut raw_map = RawMap::new();
//! raw_map.insert("alice", 42);
//! raw_map.insert_nullable("ghost", None);
//! raw_map.insert("bob", 12);
//!
//! assert_eq!(raw_map.len(), 3);
//! assert_eq!(raw_map_to_array(&raw_map), vec![42, 12]);
//! assert_eq!(
//!     raw_map_to_entries(&raw_map),
//!     vec![("alice".to_string(), 42), ("bob".to_string(), 12)]
//! );
//! ```

use std::fmt;

use indexmap::IndexMap;

use crate::entries::Entries;
use crate::maybe::{from_nullable, is_just};

// =============================================================================
// Key Hasher
// =============================================================================

/// Hasher used to index keys.
///
/// Selected at compile time: `fxhash` picks `rustc_hash::FxBuildHasher`,
/// `ahash` picks `ahash::RandomState`, and the default is the standard
/// library's `RandomState`. `fxhash` wins when both features are enabled.
#[cfg(feature = "fxhash")]
pub type KeyHasher = rustc_hash::FxBuildHasher;

/// Hasher used to index keys.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type KeyHasher = ahash::RandomState;

/// Hasher used to index keys.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type KeyHasher = std::collections::hash_map::RandomState;

type Slots<V> = IndexMap<String, Option<V>, KeyHasher>;

// =============================================================================
// RawMap Definition
// =============================================================================

/// An insertion-ordered map from string keys to possibly-absent values.
///
/// `RawMap` is the only mutable structure in this crate. A `SafeMap` owns one
/// privately and only ever hands out copies of it.
#[derive(Clone)]
pub struct RawMap<V> {
    slots: Slots<V>,
}

impl<V> RawMap<V> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty map with room for `capacity` keys.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: IndexMap::with_capacity_and_hasher(capacity, KeyHasher::default()),
        }
    }

    /// Stores `value` under `key`, moving the key to the end of the order.
    ///
    /// Returns the value previously stored under `key`, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        self.insert_nullable(key, Some(value))
    }

    /// Stores a possibly-absent value under `key`.
    ///
    /// An absent value still occupies a slot (it counts towards [`len`]) but
    /// is invisible to every read.
    ///
    /// [`len`]: RawMap::len
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safemap::raw_map::RawMap;
    ///
    /// let mut raw_map: RawMap<i32> = RawMap::new();
    /// raw_map.insert_nullable("ghost", None);
    ///
    /// assert_eq!(raw_map.len(), 1);
    /// assert_eq!(raw_map.get("ghost"), None);
    /// assert!(!raw_map.contains_key("ghost"));
    /// ```
    pub fn insert_nullable(&mut self, key: impl Into<String>, value: Option<V>) -> Option<V> {
        let key = key.into();
        let previous = self.slots.shift_remove(&key).flatten();
        self.slots.insert(key, value);
        previous
    }

    /// Removes `key`, keeping the order of the remaining keys.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.slots.shift_remove(key).flatten()
    }

    /// Returns the value under `key`, treating an absent slot as missing.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        from_nullable(self.slots.get(key))
    }

    /// Returns `true` if `key` holds a value.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.slots.get(key).is_some_and(is_just)
    }

    /// Returns the number of slots, including absent ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the map has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterates over the keys that hold a value, in order.
    #[must_use]
    pub fn iter(&self) -> RawMapIterator<'_, V> {
        RawMapIterator {
            slots: self.slots.iter(),
        }
    }

    /// Iterates over every slot, absent ones included.
    pub fn slots(&self) -> impl Iterator<Item = (&str, Option<&V>)> {
        self.slots
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_ref()))
    }
}

// =============================================================================
// Bridge
// =============================================================================

/// Enumerates the present slots of `raw_map` as owned entries.
///
/// Absent slots are skipped.
#[must_use]
pub fn raw_map_to_entries<V: Clone>(raw_map: &RawMap<V>) -> Entries<String, V> {
    raw_map
        .slots
        .iter()
        .filter_map(|(key, slot)| {
            from_nullable(Some(slot)).map(|value| (key.clone(), value.clone()))
        })
        .collect()
}

/// Enumerates the present values of `raw_map`.
///
/// Absent slots are skipped.
#[must_use]
pub fn raw_map_to_array<V: Clone>(raw_map: &RawMap<V>) -> Vec<V> {
    raw_map
        .slots
        .values()
        .filter_map(|value| from_nullable(Some(value)))
        .cloned()
        .collect()
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// A borrowing iterator over the present entries of a [`RawMap`].
pub struct RawMapIterator<'a, V> {
    slots: indexmap::map::Iter<'a, String, Option<V>>,
}

impl<'a, V> Iterator for RawMapIterator<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.slots
            .by_ref()
            .find_map(|(key, value)| value.as_ref().map(|value| (key.as_str(), value)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.slots.size_hint().1)
    }
}

/// An owning iterator over the present entries of a [`RawMap`].
pub struct RawMapIntoIterator<V> {
    slots: indexmap::map::IntoIter<String, Option<V>>,
}

impl<V> Iterator for RawMapIntoIterator<V> {
    type Item = (String, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.slots
            .by_ref()
            .find_map(|(key, value)| value.map(|value| (key, value)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.slots.size_hint().1)
    }
}

impl<V> IntoIterator for RawMap<V> {
    type Item = (String, V);
    type IntoIter = RawMapIntoIterator<V>;

    fn into_iter(self) -> Self::IntoIter {
        RawMapIntoIterator {
            slots: self.slots.into_iter(),
        }
    }
}

impl<'a, V> IntoIterator for &'a RawMap<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = RawMapIterator<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<V> Default for RawMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, Option<V>)> for RawMap<V> {
    /// Folds nullable pairs left to right; the last occurrence of a key wins
    /// both the value and the position.
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        let pairs: Vec<(String, Option<V>)> = iter
            .into_iter()
            .map(|(key, value)| (key.into(), value))
            .collect();
        let mut slots: Slots<V> =
            IndexMap::with_capacity_and_hasher(pairs.len(), KeyHasher::default());
        for (key, value) in pairs.into_iter().rev() {
            slots.entry(key).or_insert(value);
        }
        slots.reverse();
        Self { slots }
    }
}

impl<V: PartialEq> PartialEq for RawMap<V> {
    /// Order-sensitive: two maps are equal only if their slots appear in the
    /// same order.
    fn eq(&self, other: &Self) -> bool {
        self.slots.iter().eq(other.slots.iter())
    }
}

impl<V: Eq> Eq for RawMap<V> {}

impl<V: fmt::Debug> fmt::Debug for RawMap<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.slots.iter()).finish()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<V: serde::Serialize> serde::Serialize for RawMap<V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.slots.len()))?;
        for (key, value) in &self.slots {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct RawMapVisitor<V> {
    marker: std::marker::PhantomData<V>,
}

#[cfg(feature = "serde")]
impl<'de, V: serde::Deserialize<'de>> serde::de::Visitor<'de> for RawMapVisitor<V> {
    type Value = RawMap<V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map with string keys")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = access.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut pairs: Vec<(String, Option<V>)> = Vec::with_capacity(capacity);
        while let Some(pair) = access.next_entry()? {
            pairs.push(pair);
        }
        Ok(pairs.into_iter().collect())
    }
}

#[cfg(feature = "serde")]
impl<'de, V: serde::Deserialize<'de>> serde::Deserialize<'de> for RawMap<V> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(RawMapVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
