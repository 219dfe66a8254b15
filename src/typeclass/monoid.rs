//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! ```text
//! T::empty().combine(a) == a
//! a.combine(T::empty()) == a
//! ```

use super::Semigroup;

/// A [`Semigroup`] with an identity element.
///
/// # Examples
///
/// ```rust
/// use safemap::typeclass::{Monoid, Semigroup};
///
/// assert_eq!(String::empty().combine(String::from("map")), "map");
/// assert_eq!(Vec::combine_all(vec![vec![1], vec![2, 3]]), vec![1, 2, 3]);
/// ```
pub trait Monoid: Semigroup {
    /// The identity element.
    fn empty() -> Self;

    /// Combines every item, starting from [`Monoid::empty`].
    fn combine_all<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        items.into_iter().fold(Self::empty(), Self::combine)
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}
