//! The unconstrained space.
//!
//! Cursors tagged `Any` carry no data of their own, so work made only of them
//! has no natural home. It runs in the process-wide default space (see
//! [`crate::space::set_default_space`]), which is looked up once per call,
//! before any element is touched.
//!
//! The function is kept bare until then and wrapped for the chosen backend
//! at the last moment.

use super::dispatch::CopyDispatch;
use super::{ExecutionSpace, Traverse};
use crate::cursor::ParCursor;
use crate::functor::{Shape, shape_for};
use crate::space::{AnySpace, Device, Parallel, Sequential, Space};
use tracing::trace;

impl ExecutionSpace for AnySpace {
    const SPACE: Space = Space::Any;
    const SHAPE: Shape = Shape::Deferred;

    type Functor<F: Send + Sync> = F;

    fn select<F: Send + Sync>(f: F) -> Self::Functor<F> {
        f
    }
}

impl<C: ParCursor> Traverse<AnySpace> for C {
    fn traverse<F>(self, n: usize, f: F) -> Self
    where
        F: Fn(Self::Item) + Send + Sync,
    {
        let space = Space::Any.concrete();
        trace!(n, %space, shape = ?shape_for(space), "any-space for_each_n");
        match space {
            Space::Parallel => Parallel.for_each_n(self, n, Parallel::select(f)),
            Space::Device => Device.for_each_n(self, n, Device::select(f)),
            Space::Sequential | Space::Any => Sequential.for_each_n(self, n, Sequential::select(f)),
        }
    }
}

impl CopyDispatch for AnySpace {}
