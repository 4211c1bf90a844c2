//! Generic copy algorithms.
//!
//! These are the implementations every space falls back to. They know
//! nothing about any backend: `copy` is a `transform` with the identity, and
//! `copy_n` fuses input and output and walks them with `for_each_n`. The
//! `tag` argument records which space's dispatch chose this path; the work
//! itself runs in the minimum common space of the two cursors.
//!
//! # Contract
//!
//! - Source and destination must not overlap except as the very same range.
//!   Safe code cannot build such cursors; the order in which elements are
//!   written is unspecified.
//! - The destination must have room for every element copied. Running out
//!   panics.

use super::dispatch::Resolved;
use super::{ExecutionSpace, Traverse, identity_for};
use crate::cursor::{Cursor, Readable, Writable, Zip, make_zip};
use crate::functor::UnaryFunction;
use crate::space::MinimumSpace;
use tracing::debug;

/// Copies `[first, last)` to `result` and returns `result` advanced by
/// `last - first`.
///
/// Element `k` of the output equals element `k` of the input for every
/// `0 <= k < last - first`; nothing outside that range is written.
pub fn copy<S, I, O>(tag: S, first: I, last: I, result: O) -> O
where
    S: ExecutionSpace,
    I: Readable,
    O: Writable<Value = I::Value>,
    I::Space: MinimumSpace<O::Space>,
    Zip<I, O>: Traverse<Resolved<I, O>> + Cursor<Item = (I::Item, O::Item)>,
{
    debug!(
        ?tag,
        source = %first.space(),
        destination = %result.space(),
        n = first.distance(&last),
        "generic copy"
    );
    super::transform(first, last, result, identity_for::<I>())
}

/// Copies exactly `n` elements starting at `first` to `result` and returns
/// `result` advanced by `n`.
///
/// Same outcome as [`copy`] over `[first, first + n)`, for callers that have
/// a count rather than an end position.
pub fn copy_n<S, I, O>(tag: S, first: I, n: usize, result: O) -> O
where
    S: ExecutionSpace,
    I: Readable,
    O: Writable<Value = I::Value>,
    I::Space: MinimumSpace<O::Space>,
    Zip<I, O>: Traverse<Resolved<I, O>> + Cursor<Item = (I::Item, O::Item)>,
{
    let space = <Resolved<I, O>>::default();
    let resolved = <Resolved<I, O> as ExecutionSpace>::SPACE;
    debug!(
        ?tag,
        source = %first.space(),
        destination = %result.space(),
        %resolved,
        n,
        "generic copy_n"
    );

    let xfrm = identity_for::<I>();
    let functor = <Resolved<I, O>>::select(move |(x, y): (I::Item, O::Item)| {
        O::store(y, xfrm.call(I::load(x)));
    });

    let zipped = make_zip(first, result);
    space.for_each_n(zipped, n, functor).into_parts().1
}
