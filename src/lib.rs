//! # safemap
//!
//! A safe and immutable string-keyed map that works with [`Option`] instead
//! of nullable lookups.
//!
//! ## Overview
//!
//! - **`SafeMap`**: An insertion-ordered, immutable map. Lookups return
//!   `Option`, and every "mutation" returns a new map.
//! - **`RawMap`**: The mutable ordered map backing a `SafeMap`. Its slots may
//!   be absent; absence never survives a read.
//! - **Entries**: `(key, value)` pairs and ordered sequences of them, the
//!   form a `SafeMap` is built from and enumerated back into.
//! - **Type Classes**: `Functor`, `Foldable`, `Semigroup` and `Monoid`
//!   instances for `SafeMap` and `Option`.
//!
//! ## Feature Flags
//!
//! - `typeclass` (default): Type class traits and instances
//! - `serde`: `Serialize`/`Deserialize` for `SafeMap` and `RawMap`
//! - `fxhash`: Index keys with `rustc-hash`
//! - `ahash`: Index keys with `ahash`
//!
//! ## Example
//!
//! ```rust
//! use safemap::prelude::*;
//!
//! let people = SafeMap::of(vec![("alice", 42), ("bob", 12)]);
//!
//! assert_eq!(people.get("mallory"), None);
//! assert_eq!(people.to_array(), vec![42, 12]);
//!
//! let updated = people.concat(vec![("bob", 13)]);
//! assert_eq!(updated.size(), 2);
//! assert_eq!(updated.get("bob"), Some(&13));
//! assert_eq!(people.get("bob"), Some(&12));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the container, its raw backing map and the entry helpers.
/// Type class traits are not re-exported: with `Foldable` in scope, `find` on
/// an owned [`SafeMap`] resolves to `Foldable::find`.
///
/// # Usage
///
/// ```rust
/// use safemap::prelude::*;
/// ```
pub mod prelude {
    pub use crate::entries::{Entries, Entry, create_entry};
    pub use crate::maybe::{is_just, safe_find};
    pub use crate::raw_map::RawMap;
    pub use crate::safe_map::SafeMap;
}

pub mod entries;
pub mod maybe;
pub mod raw_map;
pub mod safe_map;

#[cfg(feature = "typeclass")]
pub mod typeclass;

pub use safe_map::SafeMap;
