//! Block-launch backend.
//!
//! The device space models an accelerator: its data is kept apart from host
//! data (the lattice refuses to mix them), and its primitives are issued as
//! launches over fixed-size blocks rather than one call per element. Blocks
//! run on the rayon pool; elements inside a block run in order.

use super::dispatch::CopyDispatch;
use super::{ExecutionSpace, Traverse};
use crate::cursor::ParCursor;
use crate::functor::{Blocked, Shape};
use crate::space::{Device, Space};
use rayon::prelude::*;
use tracing::trace;

/// Number of elements handed to one launch.
pub const DEVICE_BLOCK_LEN: usize = 256;

impl ExecutionSpace for Device {
    const SPACE: Space = Space::Device;
    const SHAPE: Shape = Shape::Block(DEVICE_BLOCK_LEN);

    type Functor<F: Send + Sync> = Blocked<F>;

    fn select<F: Send + Sync>(f: F) -> Self::Functor<F> {
        Blocked::new(f, Self::SHAPE.granularity())
    }
}

impl<C: ParCursor> Traverse<Device> for C {
    fn traverse<F>(self, n: usize, f: Blocked<F>) -> Self
    where
        F: Fn(Self::Item) + Send + Sync,
    {
        let block_len = f.block_len();
        trace!(n, block_len, launches = n.div_ceil(block_len), "device for_each_n");
        let (window, rest) = self.split_par(n);
        window.chunks(block_len).for_each(|block| f.launch(block));
        rest
    }
}

impl CopyDispatch for Device {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{Counting, Cursor, Sink};

    #[test]
    fn launches_cover_partial_last_block() {
        let n = DEVICE_BLOCK_LEN * 2 + 3;
        let mut buf = vec![0usize; n];
        let rest = Device.for_each_n(
            crate::cursor::make_zip(Counting::new(0), Sink::<_, Device>::new(&mut buf)),
            n,
            Device::select(|(i, slot): (usize, &mut usize)| *slot = i),
        );
        assert_eq!(rest.second().position(), n);
        assert!(buf.iter().enumerate().all(|(i, &x)| i == x));
    }

    #[test]
    fn selector_packages_blocks() {
        assert_eq!(Device::SHAPE, crate::functor::shape_for(Space::Device));
        assert_eq!(Device::select(|_: usize| {}).block_len(), DEVICE_BLOCK_LEN);
    }
}
