//! Parallel backend on the rayon global pool.
//!
//! Each element is an independent unit of work. Elements may be processed
//! in any order and on any worker; only the offset-to-offset mapping is
//! fixed. Panics raised by the function on a worker resurface in the caller.

use super::dispatch::CopyDispatch;
use super::{ExecutionSpace, Traverse};
use crate::cursor::ParCursor;
use crate::functor::{PerElement, Shape};
use crate::space::{Parallel, Space};
use rayon::prelude::*;
use tracing::trace;

impl ExecutionSpace for Parallel {
    const SPACE: Space = Space::Parallel;
    const SHAPE: Shape = Shape::Element;

    type Functor<F: Send + Sync> = PerElement<F>;

    fn select<F: Send + Sync>(f: F) -> Self::Functor<F> {
        PerElement::new(f)
    }
}

impl<C: ParCursor> Traverse<Parallel> for C {
    fn traverse<F>(self, n: usize, f: PerElement<F>) -> Self
    where
        F: Fn(Self::Item) + Send + Sync,
    {
        trace!(n, threads = rayon::current_num_threads(), "parallel for_each_n");
        let (window, rest) = self.split_par(n);
        window.for_each(|item| f.apply(item));
        rest
    }
}

impl CopyDispatch for Parallel {}
