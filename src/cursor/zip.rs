//! Lockstep fusion of two cursors.
//!
//! A [`Zip`] advances both of its parts by the same number of steps and
//! yields their items as a pair. Its space is the lattice minimum of the two
//! parts' spaces, so a `Zip` over a sequential source and a parallel sink is
//! itself parallel, and a `Zip` over host and device cursors does not exist.
//!
//! Fusing more than two cursors nests: `make_zip(make_zip(a, b), c)` yields
//! `((a, b), c)` items in the space `min(min(A, B), C)`.

use super::{Cursor, ParCursor, Readable, Writable};
use crate::space::{Minimum, MinimumSpace};

/// Two cursors driven as one.
#[derive(Debug, Clone, Copy)]
pub struct Zip<A, B> {
    a: A,
    b: B,
}

/// Fuses `a` and `b` into a single cursor.
pub const fn make_zip<A, B>(a: A, b: B) -> Zip<A, B> {
    Zip { a, b }
}

impl<A, B> Zip<A, B> {
    /// The first fused cursor.
    pub const fn first(&self) -> &A {
        &self.a
    }

    /// The second fused cursor.
    pub const fn second(&self) -> &B {
        &self.b
    }

    /// Splits the fused cursor back into its parts.
    pub fn into_parts(self) -> (A, B) {
        (self.a, self.b)
    }
}

impl<A, B> Cursor for Zip<A, B>
where
    A: Cursor,
    B: Cursor,
    A::Space: MinimumSpace<B::Space>,
{
    type Item = (A::Item, B::Item);
    type Value = (A::Value, B::Value);
    type Space = Minimum<A::Space, B::Space>;
    type Seq = core::iter::Zip<A::Seq, B::Seq>;

    fn position(&self) -> usize {
        self.a.position()
    }

    fn split_seq(self, n: usize) -> (Self::Seq, Self) {
        let (wa, a) = self.a.split_seq(n);
        let (wb, b) = self.b.split_seq(n);
        (wa.zip(wb), Zip { a, b })
    }
}

impl<A, B> ParCursor for Zip<A, B>
where
    A: ParCursor,
    B: ParCursor,
    A::Space: MinimumSpace<B::Space>,
{
    type Par = rayon::iter::Zip<A::Par, B::Par>;

    fn split_par(self, n: usize) -> (Self::Par, Self) {
        use rayon::iter::IndexedParallelIterator;

        let (wa, a) = self.a.split_par(n);
        let (wb, b) = self.b.split_par(n);
        (wa.zip(wb), Zip { a, b })
    }
}

impl<A, B> Readable for Zip<A, B>
where
    A: Readable,
    B: Readable,
    A::Space: MinimumSpace<B::Space>,
{
    fn load((x, y): Self::Item) -> Self::Value {
        (A::load(x), B::load(y))
    }
}

impl<A, B> Writable for Zip<A, B>
where
    A: Writable,
    B: Writable,
    A::Space: MinimumSpace<B::Space>,
{
    fn store((x, y): Self::Item, (u, v): Self::Value) {
        A::store(x, u);
        B::store(y, v);
    }
}
