//! A safe and immutable string-keyed map.
//!
//! This module provides [`SafeMap`], an ordered map whose lookups always
//! return an explicit [`Option`] and whose "mutating" operations always
//! return a new map.
//!
//! # Overview
//!
//! A `SafeMap` owns a private [`RawMap`] built from a sequence of entries.
//! Every transformation (`set`, `delete`, `concat`, `filter_keys`, `map`)
//! enumerates the current entries, derives a new sequence and builds a fresh
//! `RawMap` from it. Nothing is ever shared or mutated in place.
//!
//! - O(1) expected `get` and `has`
//! - O(n) `set`, `delete`, `concat`, `filter_keys`, `map`, `find`
//! - O(1) `size` and `is_empty`
//!
//! # Ordering
//!
//! Entries enumerate in the order their keys were last written. When the
//! same key appears more than once in the input, the last occurrence wins
//! both the value and the position.
//!
//! # Examples
//!
//! ```rust
//! use safemap::SafeMap;
//!
//! let people = SafeMap::of(vec![("alice", 42), ("bob", 12)]);
//!
//! assert_eq!(people.get("alice"), Some(&42));
//! assert_eq!(people.get("mallory"), None);
//! assert_eq!(people.find(|age| *age >= 50), None);
//!
//! // Transformations return a new map; the original is untouched
//! let without_alice = people.delete("alice");
//! assert!(people.has("alice"));
//! assert!(!without_alice.has("alice"));
//!
//! // filter_keys keeps the map's own order, not the order of the argument
//! let filtered = people.filter_keys(["bob", "alice"]);
//! assert_eq!(filtered.to_array(), vec![42, 12]);
//! ```

use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::entries::{Entries, Entry, create_entry, entries_to_raw_map};
use crate::maybe::safe_find;
use crate::raw_map::{
    KeyHasher, RawMap, RawMapIntoIterator, RawMapIterator, raw_map_to_array, raw_map_to_entries,
};

#[cfg(feature = "typeclass")]
use crate::typeclass::{Foldable, FunctorMut, Monoid, Semigroup, TypeConstructor};

/// A borrowing iterator over the entries of a [`SafeMap`].
pub type SafeMapIterator<'a, A> = RawMapIterator<'a, A>;

/// An owning iterator over the entries of a [`SafeMap`].
pub type SafeMapIntoIterator<A> = RawMapIntoIterator<A>;

// =============================================================================
// SafeMap Definition
// =============================================================================

/// An immutable, insertion-ordered map from string keys to values.
///
/// `SafeMap` never hands out a nullable value: [`get`](SafeMap::get) and
/// [`find`](SafeMap::find) return `Option`, and [`has`](SafeMap::has)
/// returns `bool`. None of its methods take `&mut self`.
///
/// Equality is structural over the ordered entries, so two maps holding the
/// same entries in a different order are not equal.
///
/// # Time Complexity
///
/// | Operation                               | Complexity |
/// |-----------------------------------------|------------|
/// | `get`, `has`                            | O(1)       |
/// | `size`, `is_empty`                      | O(1)       |
/// | `set`, `delete`, `concat`               | O(n)       |
/// | `filter_keys`                           | O(n + k)   |
/// | `map`, `find`                           | O(n)       |
/// | `to_array`, `to_entries`, `to_unsafe_map` | O(n)     |
///
/// # Examples
///
/// ```rust
/// use safemap::SafeMap;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Person {
///     id: String,
///     age: u32,
/// }
///
/// let alice = Person { id: "alice".to_string(), age: 42 };
/// let bob = Person { id: "bob".to_string(), age: 12 };
///
/// let people = SafeMap::from_array(|person: &Person| person.id.clone(), vec![alice.clone(), bob.clone()]);
/// assert_eq!(people, SafeMap::of(vec![("alice", alice), ("bob", bob)]));
/// ```
#[derive(Clone)]
pub struct SafeMap<A> {
    raw_map: RawMap<A>,
}

impl<A> SafeMap<A> {
    /// Builds a map from `entries`; the last entry for a key wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safemap::SafeMap;
    ///
    /// let map = SafeMap::of(vec![("a", 1), ("b", 2), ("a", 3)]);
    /// assert_eq!(map.to_entries(), vec![("b".to_string(), 2), ("a".to_string(), 3)]);
    /// ```
    #[must_use]
    pub fn of<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = Entry<K, A>>,
    {
        Self {
            raw_map: entries_to_raw_map(entries),
        }
    }

    /// Builds a map from `entries`. Same as [`SafeMap::of`].
    #[must_use]
    pub fn new<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = Entry<K, A>>,
    {
        Self::of(entries)
    }

    /// Builds a map from `items`, keying each one with `get_key`.
    ///
    /// Keys are extracted in the order of `items`, so a later item with a
    /// duplicate key replaces an earlier one.
    #[must_use]
    pub fn from_array<K, F, I>(mut get_key: F, items: I) -> Self
    where
        K: Into<String>,
        F: FnMut(&A) -> K,
        I: IntoIterator<Item = A>,
    {
        Self::of(
            items
                .into_iter()
                .map(|item| create_entry(get_key(&item), item)),
        )
    }

    /// Builds a map from a raw map, dropping its absent slots.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safemap::SafeMap;
    /// use safemap::raw_map::RawMap;
    ///
    /// let mut raw_map = RawMap::new();
    /// raw_map.insert("alice", 42);
    /// raw_map.insert_nullable("ghost", None);
    ///
    /// let map = SafeMap::from_unsafe_map(raw_map);
    /// assert_eq!(map.size(), 1);
    /// assert!(!map.has("ghost"));
    /// ```
    #[must_use]
    pub fn from_unsafe_map(raw_map: RawMap<A>) -> Self {
        Self::of(raw_map)
    }

    /// Returns the value under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&A> {
        self.raw_map.get(key)
    }

    /// Returns `true` if `key` holds a value.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns the first value, in enumeration order, satisfying `predicate`.
    ///
    /// With `typeclass::Foldable` in scope, `map.find(..)`
    /// on an owned map resolves to the consuming `Foldable::find` instead.
    /// Call `(&map).find(..)` or `SafeMap::find(&map, ..)` to reach this
    /// method there.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safemap::SafeMap;
    ///
    /// let people = SafeMap::of(vec![("alice", 42), ("bob", 12)]);
    /// assert_eq!(SafeMap::find(&people, |age| *age < 20), Some(&12));
    /// assert_eq!(people.find(|age| *age > 50), None);
    /// ```
    #[must_use]
    pub fn find<P>(&self, predicate: P) -> Option<&A>
    where
        P: FnMut(&A) -> bool,
    {
        safe_find(self.values(), predicate)
    }

    /// Returns a new map with `transformer` applied to every value.
    ///
    /// Keys and order are preserved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safemap::SafeMap;
    ///
    /// let ages = SafeMap::of(vec![("alice", 42), ("bob", 12)]);
    /// let labels = ages.map(|age| format!("{age} years"));
    ///
    /// assert_eq!(labels.get("bob").map(String::as_str), Some("12 years"));
    /// ```
    #[must_use]
    pub fn map<B, F>(&self, mut transformer: F) -> SafeMap<B>
    where
        F: FnMut(&A) -> B,
    {
        SafeMap::of(
            self.iter()
                .map(|(key, value)| create_entry(key, transformer(value))),
        )
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn size(&self) -> usize {
        self.raw_map.len()
    }

    /// Returns `true` if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw_map.is_empty()
    }

    /// Iterates over the entries in order.
    #[must_use]
    pub fn iter(&self) -> SafeMapIterator<'_, A> {
        self.raw_map.iter()
    }

    /// Iterates over the keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(key, _)| key)
    }

    /// Iterates over the values in order.
    pub fn values(&self) -> impl Iterator<Item = &A> {
        self.iter().map(|(_, value)| value)
    }
}

impl<A: Clone> SafeMap<A> {
    /// Returns a new map with `entry` written last.
    ///
    /// An existing key is overwritten and moves to the end of the order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safemap::SafeMap;
    ///
    /// let map = SafeMap::of(vec![("a", 1), ("b", 2)]);
    /// let updated = map.set(("a", 10));
    ///
    /// assert_eq!(map.get("a"), Some(&1));
    /// assert_eq!(updated.to_array(), vec![2, 10]);
    /// ```
    #[must_use]
    pub fn set<K: Into<String>>(&self, entry: Entry<K, A>) -> Self {
        let (key, value) = entry;
        let mut entries = self.to_entries();
        entries.push(create_entry(key.into(), value));
        Self::of(entries)
    }

    /// Returns a new map without `key`.
    ///
    /// Deleting a missing key yields an equal map.
    #[must_use]
    pub fn delete(&self, key: &str) -> Self {
        Self::of(
            self.to_entries()
                .into_iter()
                .filter(|(existing, _)| existing.as_str() != key),
        )
    }

    /// Returns a new map with `entries` appended after the current ones.
    ///
    /// Appended entries override current entries with the same key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safemap::SafeMap;
    ///
    /// let people = SafeMap::of(vec![("alice", 42), ("bob", 12)]);
    /// let updated = people.concat(vec![("bob", 13)]);
    ///
    /// assert_eq!(updated, SafeMap::of(vec![("alice", 42), ("bob", 13)]));
    /// ```
    #[must_use]
    pub fn concat<K, I>(&self, entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = Entry<K, A>>,
    {
        Self::of(
            self.to_entries().into_iter().chain(
                entries
                    .into_iter()
                    .map(|(key, value)| create_entry(key.into(), value)),
            ),
        )
    }

    /// Returns a new map holding only the entries whose key is in `keys`.
    ///
    /// The result keeps this map's order; the order of `keys` is irrelevant.
    #[must_use]
    pub fn filter_keys<I, S>(&self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keys: Vec<S> = keys.into_iter().collect();
        let wanted: HashSet<&str, KeyHasher> = keys.iter().map(AsRef::as_ref).collect();
        Self::of(
            self.to_entries()
                .into_iter()
                .filter(|(key, _)| wanted.contains(key.as_str())),
        )
    }

    /// Returns the values in order.
    #[must_use]
    pub fn to_array(&self) -> Vec<A> {
        raw_map_to_array(&self.raw_map)
    }

    /// Returns the entries in order.
    #[must_use]
    pub fn to_entries(&self) -> Entries<String, A> {
        raw_map_to_entries(&self.raw_map)
    }

    /// Returns a copy of the underlying raw map.
    ///
    /// The copy is a snapshot: changing it never affects this map.
    #[must_use]
    pub fn to_unsafe_map(&self) -> RawMap<A> {
        self.raw_map.clone()
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

impl<A> IntoIterator for SafeMap<A> {
    type Item = (String, A);
    type IntoIter = SafeMapIntoIterator<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.raw_map.into_iter()
    }
}

impl<'a, A> IntoIterator for &'a SafeMap<A> {
    type Item = (&'a str, &'a A);
    type IntoIter = SafeMapIterator<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<A> Default for SafeMap<A> {
    fn default() -> Self {
        Self {
            raw_map: RawMap::new(),
        }
    }
}

impl<K: Into<String>, A> FromIterator<Entry<K, A>> for SafeMap<A> {
    fn from_iter<I: IntoIterator<Item = Entry<K, A>>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl<K: Into<String>, A> From<Entries<K, A>> for SafeMap<A> {
    fn from(entries: Entries<K, A>) -> Self {
        Self::of(entries)
    }
}

impl<A> From<RawMap<A>> for SafeMap<A> {
    fn from(raw_map: RawMap<A>) -> Self {
        Self::from_unsafe_map(raw_map)
    }
}

impl<A: PartialEq> PartialEq for SafeMap<A> {
    fn eq(&self, other: &Self) -> bool {
        self.raw_map == other.raw_map
    }
}

impl<A: Eq> Eq for SafeMap<A> {}

impl<A: Hash> Hash for SafeMap<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size().hash(state);
        for (key, value) in self {
            key.hash(state);
            value.hash(state);
        }
    }
}

impl<A: fmt::Debug> fmt::Debug for SafeMap<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<A: fmt::Display> fmt::Display for SafeMap<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

static_assertions::assert_impl_all!(SafeMap<i32>: Send, Sync);
static_assertions::assert_impl_all!(SafeMap<String>: Send, Sync);

// =============================================================================
// Type Class Implementations
// =============================================================================

#[cfg(feature = "typeclass")]
impl<A> TypeConstructor for SafeMap<A> {
    type Inner = A;
    type WithType<B> = SafeMap<B>;
}

#[cfg(feature = "typeclass")]
impl<A> FunctorMut for SafeMap<A> {
    fn fmap_mut<B, F>(self, mut function: F) -> SafeMap<B>
    where
        F: FnMut(A) -> B,
    {
        SafeMap::of(
            self.into_iter()
                .map(|(key, value)| create_entry(key, function(value))),
        )
    }

    fn fmap_ref_mut<B, F>(&self, function: F) -> SafeMap<B>
    where
        F: FnMut(&A) -> B,
    {
        self.map(function)
    }
}

#[cfg(feature = "typeclass")]
impl<A> Foldable for SafeMap<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        self.into_iter()
            .fold(init, |accumulator, (_, value)| function(accumulator, value))
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        let mut values: Vec<A> = self.into_iter().map(|(_, value)| value).collect();
        values.reverse();
        values
            .into_iter()
            .fold(init, |accumulator, value| function(value, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.raw_map.is_empty()
    }

    #[inline]
    fn length(&self) -> usize {
        self.size()
    }
}

#[cfg(feature = "typeclass")]
impl<A: Clone> Semigroup for SafeMap<A> {
    /// Right-biased union: entries of `other` win on shared keys.
    fn combine(self, other: Self) -> Self {
        self.concat(other)
    }
}

#[cfg(feature = "typeclass")]
impl<A: Clone> Monoid for SafeMap<A> {
    fn empty() -> Self {
        Self::default()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<A: serde::Serialize> serde::Serialize for SafeMap<A> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.size()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct SafeMapVisitor<A> {
    marker: std::marker::PhantomData<A>,
}

#[cfg(feature = "serde")]
impl<'de, A: serde::Deserialize<'de>> serde::de::Visitor<'de> for SafeMapVisitor<A> {
    type Value = SafeMap<A>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map with string keys")
    }

    fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: serde::de::MapAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = access.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut entries: Entries<String, A> = Vec::with_capacity(capacity);
        while let Some(entry) = access.next_entry()? {
            entries.push(entry);
        }
        Ok(SafeMap::of(entries))
    }
}

#[cfg(feature = "serde")]
impl<'de, A: serde::Deserialize<'de>> serde::Deserialize<'de> for SafeMap<A> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(SafeMapVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
