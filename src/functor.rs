//! Transformation functors and their per-space calling conventions.
//!
//! A [`UnaryFunction`] describes *what* happens to one element. It is pure
//! and knows nothing about where it runs. Backends disagree on *how* they
//! want to be handed such a function, so each [`ExecutionSpace`] selects a
//! wrapper for it:
//!
//! | space        | wrapper           | invocation                         |
//! |--------------|-------------------|------------------------------------|
//! | `Sequential` | [`PerElement`]    | one call per element, in order     |
//! | `Parallel`   | [`PerElement`]    | one call per element, any order    |
//! | `Device`     | [`Blocked`]       | one launch per block of elements   |
//! | `Any`        | the bare callable | re-selected once the space is known|
//!
//! The wrapper never changes the result for any element; it only changes
//! the granularity at which the backend invokes it.
//!
//! [`ExecutionSpace`]: crate::ops::ExecutionSpace

use crate::ops::device::DEVICE_BLOCK_LEN;
use crate::space::Space;
use core::fmt;
use core::marker::PhantomData;

/// A pure function of one argument.
pub trait UnaryFunction<A> {
    /// Result type.
    type Output;

    /// Applies the function.
    fn call(&self, arg: A) -> Self::Output;
}

/// Returns its argument unchanged.
pub struct Identity<T>(PhantomData<fn(T) -> T>);

impl<T> Identity<T> {
    /// The identity on `T`.
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> UnaryFunction<T> for Identity<T> {
    type Output = T;

    #[inline]
    fn call(&self, arg: T) -> T {
        arg
    }
}

impl<T> Clone for Identity<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Identity<T> {}

impl<T> Default for Identity<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Identity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identity<{}>", core::any::type_name::<T>())
    }
}

/// Adapts a closure into a [`UnaryFunction`].
#[derive(Debug, Clone, Copy)]
pub struct FnFunction<F>(F);

/// Wraps `f` as a [`UnaryFunction`].
pub const fn from_fn<F>(f: F) -> FnFunction<F> {
    FnFunction(f)
}

impl<A, B, F: Fn(A) -> B> UnaryFunction<A> for FnFunction<F> {
    type Output = B;

    #[inline]
    fn call(&self, arg: A) -> B {
        (self.0)(arg)
    }
}

/// How a space's primitives invoke the function they are given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Called once per element.
    Element,
    /// Called once per block of at most this many elements.
    Block(usize),
    /// Not decided until the space is made concrete.
    Deferred,
}

impl Shape {
    /// Elements handed to one invocation of the function.
    ///
    /// A deferred shape counts as per-element until it is resolved.
    #[must_use]
    pub const fn granularity(self) -> usize {
        match self {
            Self::Element | Self::Deferred => 1,
            Self::Block(len) => len,
        }
    }
}

/// The invocation shape `space`'s primitives expect.
#[must_use]
pub const fn shape_for(space: Space) -> Shape {
    match space {
        Space::Sequential | Space::Parallel => Shape::Element,
        Space::Device => Shape::Block(DEVICE_BLOCK_LEN),
        Space::Any => Shape::Deferred,
    }
}

/// Per-element calling convention.
#[derive(Debug, Clone, Copy)]
pub struct PerElement<F>(F);

impl<F> PerElement<F> {
    /// Wraps `f`.
    pub const fn new(f: F) -> Self {
        Self(f)
    }

    /// Invokes the wrapped callable on one element.
    #[inline]
    pub fn apply<T>(&self, item: T)
    where
        F: Fn(T),
    {
        (self.0)(item);
    }
}

/// Block-at-a-time calling convention.
#[derive(Debug, Clone, Copy)]
pub struct Blocked<F> {
    f: F,
    len: usize,
}

impl<F> Blocked<F> {
    /// Wraps `f` for blocks of at most `len` elements.
    ///
    /// # Panics
    /// Panics if `len` is zero.
    pub fn new(f: F, len: usize) -> Self {
        assert!(len > 0, "block length must be positive");
        Self { f, len }
    }

    /// Maximum number of elements per launch.
    pub const fn block_len(&self) -> usize {
        self.len
    }

    /// Invokes the wrapped callable on every element of one block.
    pub fn launch<T>(&self, block: Vec<T>)
    where
        F: Fn(T),
    {
        debug_assert!(block.len() <= self.len);
        block.into_iter().for_each(&self.f);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn identity_returns_its_argument() {
        let id = Identity::<String>::new();
        assert_eq!(id.call("spaces".to_owned()), "spaces");
        assert_eq!(Identity::<i32>::default().call(-7), -7);
    }

    #[test]
    fn closures_adapt() {
        let double = from_fn(|x: u32| x * 2);
        assert_eq!(double.call(21), 42);
    }

    #[test]
    fn wrappers_do_not_change_results() {
        let seen = Mutex::new(Vec::new());
        let record = |x: i32| seen.lock().unwrap().push(x);

        let element = PerElement::new(&record);
        (0..5).for_each(|x| element.apply(x));

        let blocked = Blocked::new(&record, 2);
        blocked.launch(vec![5, 6]);
        blocked.launch(vec![7]);

        assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn shapes_follow_space() {
        assert_eq!(shape_for(Space::Sequential), Shape::Element);
        assert_eq!(shape_for(Space::Parallel), Shape::Element);
        assert_eq!(shape_for(Space::Device), Shape::Block(DEVICE_BLOCK_LEN));
        assert_eq!(shape_for(Space::Any), Shape::Deferred);
        assert_eq!(shape_for(Space::Device).granularity(), DEVICE_BLOCK_LEN);
        assert_eq!(shape_for(Space::Parallel).granularity(), 1);
    }
}
