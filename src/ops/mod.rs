//! # Operation Dispatch Layer
//!
//! This module defines the execution primitives every space provides and
//! the copy algorithms built once on top of them.
//!
//! ## Submodules
//!
//! - [`sequential`]: in-thread backend
//! - [`parallel`]: rayon backend, one element per task
//! - [`device`]: block-launch backend over the rayon pool
//! - [`any`]: unconstrained space, forwards to the configured default
//! - [`dispatch`]: picks the backend from the cursors' space tags
//! - [`generic`]: `copy` and `copy_n` written against the primitives only
//!
//! ## Space Selection
//!
//! The free functions here never take a space argument. The space comes from
//! the cursor types: for two cursors it is the lattice minimum of their tags,
//! computed at build time. A pair with no common space does not compile.
//!
//! ```rust
//! use spacecopy::cursor::{Sink, Source};
//! use spacecopy::space::{Parallel, Sequential};
//!
//! let input = [1, 2, 3, 4, 5];
//! let mut output = [0; 5];
//! let first = Source::<_, Sequential>::new(&input);
//! let end = spacecopy::ops::copy(first, first.end(), Sink::<_, Parallel>::new(&mut output));
//! assert_eq!(end.capacity(), 0);
//! assert_eq!(output, input);
//! ```
//!
//! ## Extending the Backends
//!
//! To add a space:
//!
//! 1. Add a tag in [`crate::space`] and its rows in the lattice table
//! 2. Implement [`ExecutionSpace`] for it and [`Traverse`] for the cursors
//!    it can drive
//! 3. Implement [`dispatch::CopyDispatch`], overriding methods for which
//!    the space has something better than the generic path

pub mod any;
pub mod device;
pub mod dispatch;
pub mod generic;
pub mod parallel;
pub mod sequential;

use crate::cursor::{Cursor, Readable, Writable, Zip, make_zip};
use crate::functor::{Identity, Shape, UnaryFunction};
use crate::space::{MinimumSpace, Space};
use core::fmt;
use dispatch::{CopyDispatch, Resolved};

/// A backend able to run the execution primitives.
pub trait ExecutionSpace: Copy + Default + fmt::Debug + Send + Sync + 'static {
    /// Runtime value of this tag.
    const SPACE: Space;

    /// How this space's primitives invoke their function.
    const SHAPE: Shape;

    /// The calling convention this space's primitives require.
    type Functor<F: Send + Sync>: Send + Sync;

    /// Packages `f` the way this space's primitives call it.
    fn select<F: Send + Sync>(f: F) -> Self::Functor<F>;

    /// Applies `f` to the next `n` items of `cursor` and returns the cursor
    /// advanced past them.
    fn for_each_n<C, F>(self, cursor: C, n: usize, f: Self::Functor<F>) -> C
    where
        C: Traverse<Self>,
        F: Fn(C::Item) + Send + Sync,
    {
        cursor.traverse(n, f)
    }

    /// Writes `op(x)` to `result` for every `x` in `[first, last)` and returns
    /// `result` advanced past the last write.
    ///
    /// The default fuses input and output and runs [`Self::for_each_n`].
    fn transform<I, O, Op>(self, first: I, last: I, result: O, op: Op) -> O
    where
        I: Readable,
        O: Writable,
        I::Space: MinimumSpace<O::Space>,
        Zip<I, O>: Traverse<Self> + Cursor<Item = (I::Item, O::Item)>,
        Op: UnaryFunction<I::Value, Output = O::Value> + Send + Sync,
    {
        let n = first.distance(&last);
        let functor = Self::select(move |(x, y): (I::Item, O::Item)| O::store(y, op.call(I::load(x))));
        self.for_each_n(make_zip(first, result), n, functor).into_parts().1
    }
}

/// A cursor that space `S` knows how to walk.
///
/// Each backend implements this for every cursor it can drive: the
/// sequential space for any [`Cursor`], the parallel and device spaces only
/// for [`ParCursor`](crate::cursor::ParCursor)s.
pub trait Traverse<S: ExecutionSpace>: Cursor {
    /// Applies `f` to the next `n` items and returns the cursor advanced
    /// past them.
    fn traverse<F>(self, n: usize, f: S::Functor<F>) -> Self
    where
        F: Fn(Self::Item) + Send + Sync;
}

/// Applies `f` to the next `n` items of `cursor` in the cursor's own space.
pub fn for_each_n<C, F>(cursor: C, n: usize, f: F) -> C
where
    C: Cursor + Traverse<<C as Cursor>::Space>,
    F: Fn(C::Item) + Send + Sync,
{
    let space = <C::Space>::default();
    space.for_each_n(cursor, n, <C::Space as ExecutionSpace>::select(f))
}

/// Writes `op(x)` for every `x` in `[first, last)` to `result`, in the
/// minimum common space of input and output.
pub fn transform<I, O, Op>(first: I, last: I, result: O, op: Op) -> O
where
    I: Readable,
    O: Writable,
    I::Space: MinimumSpace<O::Space>,
    Zip<I, O>: Traverse<Resolved<I, O>> + Cursor<Item = (I::Item, O::Item)>,
    Op: UnaryFunction<I::Value, Output = O::Value> + Send + Sync,
{
    <Resolved<I, O>>::default().transform(first, last, result, op)
}

/// Copies `[first, last)` to `result`.
///
/// Returns `result` advanced by `last - first`.
pub fn copy<I, O>(first: I, last: I, result: O) -> O
where
    I: Readable,
    O: Writable<Value = I::Value>,
    I::Space: MinimumSpace<O::Space>,
    Zip<I, O>: Traverse<Resolved<I, O>> + Cursor<Item = (I::Item, O::Item)>,
{
    <Resolved<I, O>>::default().copy(first, last, result)
}

/// Copies `n` elements starting at `first` to `result`.
///
/// Returns `result` advanced by `n`.
pub fn copy_n<I, O>(first: I, n: usize, result: O) -> O
where
    I: Readable,
    O: Writable<Value = I::Value>,
    I::Space: MinimumSpace<O::Space>,
    Zip<I, O>: Traverse<Resolved<I, O>> + Cursor<Item = (I::Item, O::Item)>,
{
    <Resolved<I, O>>::default().copy_n(first, n, result)
}

/// The identity over a cursor's value type.
pub(crate) const fn identity_for<I: Cursor>() -> Identity<I::Value> {
    Identity::new()
}
