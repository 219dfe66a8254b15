//! Key-value pairs and ordered sequences of them.
//!
//! [`Entries`] is the canonical "list of pairs" representation: it is what
//! a [`SafeMap`](crate::SafeMap) is built from and what it enumerates back
//! out. Order matters and duplicate keys are allowed; when entries are
//! folded into a [`RawMap`] the last occurrence of a key wins.

use crate::raw_map::RawMap;

/// A single key-value pair.
pub type Entry<K, V> = (K, V);

/// An ordered sequence of key-value pairs.
pub type Entries<K, V> = Vec<Entry<K, V>>;

/// Pairs `key` with `value`.
#[inline]
#[must_use]
pub const fn create_entry<K, V>(key: K, value: V) -> Entry<K, V> {
    (key, value)
}

/// Folds `entries` left to right into a [`RawMap`].
///
/// A later entry overwrites an earlier one with the same key and takes its
/// place in the enumeration order.
///
/// # Examples
///
/// ```rust
/// use safemap::entries::entries_to_raw_map;
///
/// let raw_map = entries_to_raw_map(vec![("a", 1), ("b", 2), ("a", 3)]);
///
/// let keys: Vec<&str> = raw_map.iter().map(|(key, _)| key).collect();
/// assert_eq!(keys, vec!["b", "a"]);
/// assert_eq!(raw_map.get("a"), Some(&3));
/// ```
pub fn entries_to_raw_map<K, V, I>(entries: I) -> RawMap<V>
where
    K: Into<String>,
    I: IntoIterator<Item = Entry<K, V>>,
{
    entries
        .into_iter()
        .map(|(key, value)| create_entry(key, Some(value)))
        .collect()
}
