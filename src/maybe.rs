//! Glue between raw, possibly-absent values and [`Option`].
//!
//! `Option` is the explicit-absence wrapper used throughout this crate. The
//! helpers here are what the raw-map bridge and [`SafeMap`](crate::SafeMap)
//! use to turn nullable slots and linear searches into `Option` results.
//!
//! # Examples
//!
//! ```rust
//! use safemap::maybe::{is_just, safe_find};
//!
//! assert!(is_just(&Some(1)));
//! assert!(!is_just(&None::<i32>));
//!
//! let ages = [42, 12];
//! assert_eq!(safe_find(&ages, |age| *age >= 18), Some(&42));
//! assert_eq!(safe_find(&ages, |age| *age >= 50), None);
//! ```

/// Returns `true` if a raw slot holds a value.
///
/// Used as the filter when raw slots are read out through the bridge.
#[inline]
#[must_use]
pub const fn is_just<A>(nullable: &Option<A>) -> bool {
    nullable.is_some()
}

/// Collapses a looked-up slot into a single explicit-absence value.
///
/// A missing slot and a slot holding no value are both absent.
///
/// # Examples
///
/// ```rust
/// use safemap::maybe::from_nullable;
///
/// let slot = Some(7);
/// assert_eq!(from_nullable(Some(&slot)), Some(&7));
/// assert_eq!(from_nullable::<i32>(Some(&None)), None);
/// assert_eq!(from_nullable::<i32>(None), None);
/// ```
#[inline]
#[must_use]
pub fn from_nullable<A>(slot: Option<&Option<A>>) -> Option<&A> {
    slot.and_then(Option::as_ref)
}

/// Returns the first element satisfying `predicate`, in iteration order.
///
/// An empty input or no match yields `None`.
pub fn safe_find<'a, A, I, P>(values: I, mut predicate: P) -> Option<&'a A>
where
    A: 'a,
    I: IntoIterator<Item = &'a A>,
    P: FnMut(&A) -> bool,
{
    values.into_iter().find(|value| predicate(value))
}
