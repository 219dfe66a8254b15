//! Functor type classes - mapping over values inside a container.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! [`Functor`] takes an `FnOnce`, so it only fits containers holding at most
//! one value, such as [`Option`]. Containers with many elements implement
//! [`FunctorMut`] instead.

use super::TypeConstructor;

/// A container holding at most one value that can be mapped over.
///
/// # Examples
///
/// ```rust
/// use safemap::typeclass::Functor;
///
/// let present: Option<i32> = Some(5);
/// assert_eq!(present.fmap(|n| n.to_string()), Some("5".to_string()));
///
/// let absent: Option<i32> = None;
/// assert_eq!(absent.fmap(|n| n * 2), None);
/// ```
pub trait Functor: TypeConstructor {
    /// Applies `function` to the contained value.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies `function` to a reference to the contained value.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the contained value with `value`.
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }
}

/// A container of any number of elements that can be mapped over.
///
/// # Examples
///
/// ```rust
/// use safemap::typeclass::FunctorMut;
///
/// let doubled: Vec<i32> = vec![1, 2, 3].fmap_mut(|n| n * 2);
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub trait FunctorMut: TypeConstructor {
    /// Applies `function` to every element.
    fn fmap_mut<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Applies `function` to a reference to every element.
    fn fmap_ref_mut<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Option<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Vec<T> Implementation
// =============================================================================

impl<T> FunctorMut for Vec<T> {
    #[inline]
    fn fmap_mut<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }

    #[inline]
    fn fmap_ref_mut<B, F>(&self, function: F) -> Vec<B>
    where
        F: FnMut(&T) -> B,
    {
        self.iter().map(function).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn option_fmap_ref_keeps_original() {
        let value = Some("hello".to_string());
        assert_eq!(value.fmap_ref(String::len), Some(5));
        assert_eq!(value, Some("hello".to_string()));
    }

    #[rstest]
    fn option_replace() {
        assert_eq!(Functor::replace(Some(1), "one"), Some("one"));
        assert_eq!(Functor::replace(None::<i32>, "one"), None);
    }

    #[rstest]
    fn option_identity_law() {
        let value = Some(7);
        assert_eq!(value.fmap(|x| x), value);
    }

    #[rstest]
    fn option_composition_law() {
        let add_one = |x: i32| x + 1;
        let double = |x: i32| x * 2;
        assert_eq!(
            Some(3).fmap(add_one).fmap(double),
            Some(3).fmap(|x| double(add_one(x)))
        );
    }

    #[rstest]
    fn vec_fmap_ref_mut_counts_calls() {
        let mut calls = 0;
        let lengths = vec!["a", "bb"].fmap_ref_mut(|text| {
            calls += 1;
            text.len()
        });
        assert_eq!(lengths, vec![1, 2]);
        assert_eq!(calls, 2);
    }
}
