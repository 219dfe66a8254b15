//! Higher-kinded type emulation through generic associated types.
//!
//! Rust cannot abstract over `Option<_>` or `SafeMap<_>` as type
//! constructors directly. [`TypeConstructor`] records the applied type
//! parameter and how to swap it, which is enough to express [`Functor`]
//! and [`Foldable`].
//!
//! [`Functor`]: super::Functor
//! [`Foldable`]: super::Foldable

/// A type constructor applied to some type `Inner`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
///
/// # Examples
///
/// ```rust
/// use safemap::typeclass::TypeConstructor;
///
/// fn rewrap<T: TypeConstructor>(_value: T) -> T::WithType<String>
/// where
///     T::WithType<String>: Default,
/// {
///     Default::default()
/// }
///
/// let absent: Option<String> = rewrap(Some(42));
/// assert_eq!(absent, None);
/// ```
pub trait TypeConstructor {
    /// The type this constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}
