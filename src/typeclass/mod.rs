//! Type class traits for functional programming abstractions.
//!
//! This module provides the type classes that [`SafeMap`](crate::SafeMap)
//! and the explicit-absence wrapper [`Option`] take part in:
//!
//! - [`TypeConstructor`]: Emulation of higher-kinded types via GATs
//! - [`Functor`]: Mapping over a single optional value
//! - [`FunctorMut`]: Mapping over every element of a multi-element container
//! - [`Foldable`]: Folding a structure down to a summary value
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with an identity element
//!
//! # Examples
//!
//! ```rust
//! use safemap::SafeMap;
//! use safemap::typeclass::{Foldable, FunctorMut, Monoid, Semigroup};
//!
//! let ages = SafeMap::of(vec![("alice", 42), ("bob", 12)]);
//!
//! let total = ages.clone().fold_left(0, |accumulator, age| accumulator + age);
//! assert_eq!(total, 54);
//!
//! let older = ages.fmap_mut(|age| age + 1);
//! assert_eq!(older.get("bob"), Some(&13));
//!
//! let merged = older.combine(SafeMap::of(vec![("carol", 30)]));
//! assert_eq!(merged.size(), 3);
//! assert_eq!(SafeMap::<i32>::empty().size(), 0);
//! ```

mod foldable;
mod functor;
mod higher;
mod monoid;
mod semigroup;

pub use foldable::Foldable;
pub use functor::{Functor, FunctorMut};
pub use higher::TypeConstructor;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
