//! In-thread backend.
//!
//! Elements are visited in order by the calling thread. This is the space
//! host data lands in by default, and the fallback for `Any` work.

use super::dispatch::CopyDispatch;
use super::{ExecutionSpace, Traverse};
use crate::cursor::{Cursor, Readable, Writable, Zip};
use crate::functor::{PerElement, Shape, UnaryFunction};
use crate::space::{MinimumSpace, Sequential, Space};
use tracing::trace;

impl ExecutionSpace for Sequential {
    const SPACE: Space = Space::Sequential;
    const SHAPE: Shape = Shape::Element;

    type Functor<F: Send + Sync> = PerElement<F>;

    fn select<F: Send + Sync>(f: F) -> Self::Functor<F> {
        PerElement::new(f)
    }

    /// Direct loop over both windows, without fusing or wrapping `op`.
    fn transform<I, O, Op>(self, first: I, last: I, result: O, op: Op) -> O
    where
        I: Readable,
        O: Writable,
        I::Space: MinimumSpace<O::Space>,
        Zip<I, O>: Traverse<Self> + Cursor<Item = (I::Item, O::Item)>,
        Op: UnaryFunction<I::Value, Output = O::Value> + Send + Sync,
    {
        let n = first.distance(&last);
        trace!(n, "sequential transform");
        let (input, _) = first.split_seq(n);
        let (output, rest) = result.split_seq(n);
        for (x, y) in input.zip(output) {
            O::store(y, op.call(I::load(x)));
        }
        rest
    }
}

impl<C: Cursor> Traverse<Sequential> for C {
    fn traverse<F>(self, n: usize, f: PerElement<F>) -> Self
    where
        F: Fn(Self::Item) + Send + Sync,
    {
        trace!(n, "sequential for_each_n");
        let (window, rest) = self.split_seq(n);
        window.for_each(|item| f.apply(item));
        rest
    }
}

impl CopyDispatch for Sequential {}
