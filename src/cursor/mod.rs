//! Cursor capability facade.
//!
//! A cursor is a non-owning position over caller-owned data. Algorithms in
//! this crate never see the data directly. They only ask a cursor for its
//! capabilities:
//!
//! - [`Cursor::Value`]: the element type it stands for (`value_type`)
//! - [`Cursor::Space`]: the execution space tag it belongs to (`space_tag`)
//! - a window over its next `n` positions as a sequential [`Iterator`],
//!   together with the cursor positioned just past that window
//!
//! [`ParCursor`] adds the same window as a rayon [`IndexedParallelIterator`]
//! for cursors whose items may cross threads. Only the parallel and device
//! spaces ask for it, so a sequential cursor over `Rc` or `Cell` data is
//! still a cursor. [`Readable`] and [`Writable`] add the load and store
//! halves on top.
//!
//! ## Cursors
//!
//! - [`Source`]: reads a `&[T]`
//! - [`Sink`]: writes a `&mut [T]`
//! - [`Counting`], [`Constant`], [`Discard`]: data-less cursors in the
//!   `Any` space
//! - [`Zip`]: two cursors fused into one lockstep traversal
//!
//! ## Contract
//!
//! Asking for a window longer than the data that remains panics with the
//! usual slice bounds message. Counts are never checked beyond that.

use crate::ops::ExecutionSpace;
use crate::space::Space;
use rayon::iter::IndexedParallelIterator;

mod fancy;
pub use self::fancy::{Constant, Counting, Discard};

mod slice;
pub use self::slice::{Sink, Source};

mod zip;
pub use self::zip::{Zip, make_zip};

/// A position that can be advanced in bulk, sequentially or in parallel.
pub trait Cursor: Sized {
    /// What one step of the cursor yields.
    type Item;
    /// The element type the cursor stands for.
    type Value;
    /// Execution space tag.
    type Space: ExecutionSpace;
    /// Sequential window over the next positions.
    type Seq: Iterator<Item = Self::Item>;

    /// Absolute offset of the cursor within its underlying sequence.
    fn position(&self) -> usize;

    /// Splits off the next `n` positions as a sequential window.
    ///
    /// Returns the window and the cursor advanced by `n`.
    fn split_seq(self, n: usize) -> (Self::Seq, Self);

    /// Number of steps from `self` to `last`.
    ///
    /// `last` must not lie before `self`.
    fn distance(&self, last: &Self) -> usize {
        debug_assert!(last.position() >= self.position(), "range end precedes start");
        last.position() - self.position()
    }

    /// Runtime value of [`Self::Space`].
    fn space(&self) -> Space {
        <Self::Space as ExecutionSpace>::SPACE
    }
}

/// A cursor whose items can be handed to other threads.
pub trait ParCursor: Cursor<Item: Send> {
    /// Parallel window over the next positions.
    type Par: IndexedParallelIterator<Item = Self::Item>;

    /// Splits off the next `n` positions as a parallel window.
    ///
    /// Returns the window and the cursor advanced by `n`.
    fn split_par(self, n: usize) -> (Self::Par, Self);
}

/// A cursor whose items can be read as values.
pub trait Readable: Cursor {
    /// Reads the value behind one item.
    fn load(item: Self::Item) -> Self::Value;
}

/// A cursor whose items can be overwritten with values.
pub trait Writable: Cursor {
    /// Writes `value` through one item.
    fn store(item: Self::Item, value: Self::Value);
}

/// Runtime space of a cursor, without consuming it.
pub fn space_of<C: Cursor>(cursor: &C) -> Space {
    cursor.space()
}

/// Name of a cursor's value type, for diagnostics.
pub fn value_type<C: Cursor>(_cursor: &C) -> &'static str {
    core::any::type_name::<C::Value>()
}
