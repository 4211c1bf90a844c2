//! Cursors that carry no data and belong to the `Any` space.
//!
//! None of these touch memory owned by a particular space, so fusing them
//! with a host or device cursor never changes where the work runs.

use super::{Cursor, ParCursor, Readable, Writable};
use crate::space::AnySpace;
use core::iter::{Repeat, Take};
use core::marker::PhantomData;
use core::ops::RangeInclusive;
use rayon::prelude::*;

/// Yields `start, start + 1, start + 2, ...`.
///
/// The last value a counter can yield is `usize::MAX`. A counter that has
/// yielded it wraps its position to zero, so [`Cursor::distance`] stays
/// exact across the top of the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counting {
    next: usize,
}

impl Counting {
    /// Counter whose first value is `start`.
    #[must_use]
    pub const fn new(start: usize) -> Self {
        Self { next: start }
    }

    /// The next `n` values, inclusive of the last so that a window may end
    /// on `usize::MAX`.
    ///
    /// # Panics
    /// Panics if the window would run past `usize::MAX`.
    fn values(self, n: usize) -> RangeInclusive<usize> {
        let Some(steps) = n.checked_sub(1) else {
            return 1..=0;
        };
        match self.next.checked_add(steps) {
            Some(last) => self.next..=last,
            None => panic!("counter window of {n} from {} overflows usize", self.next),
        }
    }

    fn skip(self, n: usize) -> Self {
        Self::new(self.next.wrapping_add(n))
    }
}

impl Cursor for Counting {
    type Item = usize;
    type Value = usize;
    type Space = AnySpace;
    type Seq = RangeInclusive<usize>;

    fn position(&self) -> usize {
        self.next
    }

    fn split_seq(self, n: usize) -> (Self::Seq, Self) {
        (self.values(n), self.skip(n))
    }

    fn distance(&self, last: &Self) -> usize {
        last.next.wrapping_sub(self.next)
    }
}

impl ParCursor for Counting {
    type Par = rayon::iter::MapWith<rayon::range::Iter<usize>, usize, fn(&mut usize, usize) -> usize>;

    fn split_par(self, n: usize) -> (Self::Par, Self) {
        let start = *self.values(n).start();
        let offset: fn(&mut usize, usize) -> usize = |start, k| *start + k;
        ((0..n).into_par_iter().map_with(start, offset), self.skip(n))
    }
}

impl Readable for Counting {
    fn load(item: usize) -> usize {
        item
    }
}

/// Yields the same value at every position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constant<T> {
    value: T,
    pos: usize,
}

impl<T> Constant<T> {
    /// Cursor that repeats `value`.
    pub const fn new(value: T) -> Self {
        Self { value, pos: 0 }
    }
}

impl<T: Clone> Cursor for Constant<T> {
    type Item = T;
    type Value = T;
    type Space = AnySpace;
    type Seq = Take<Repeat<T>>;

    fn position(&self) -> usize {
        self.pos
    }

    fn split_seq(self, n: usize) -> (Self::Seq, Self) {
        let rest = Self { value: self.value.clone(), pos: self.pos + n };
        (core::iter::repeat(self.value).take(n), rest)
    }
}

impl<T: Clone + Send> ParCursor for Constant<T> {
    type Par = rayon::iter::RepeatN<T>;

    fn split_par(self, n: usize) -> (Self::Par, Self) {
        let rest = Self { value: self.value.clone(), pos: self.pos + n };
        (rayon::iter::repeatn(self.value, n), rest)
    }
}

impl<T: Clone> Readable for Constant<T> {
    fn load(item: T) -> T {
        item
    }
}

/// Accepts and drops every value written through it.
pub struct Discard<T> {
    pos: usize,
    _value: PhantomData<fn(T)>,
}

impl<T> Discard<T> {
    /// Discarding cursor at position zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { pos: 0, _value: PhantomData }
    }
}

impl<T> Default for Discard<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Discard<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Discard<T> {}

impl<T> core::fmt::Debug for Discard<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Discard").field("pos", &self.pos).finish()
    }
}

impl<T> Cursor for Discard<T> {
    type Item = ();
    type Value = T;
    type Space = AnySpace;
    type Seq = Take<Repeat<()>>;

    fn position(&self) -> usize {
        self.pos
    }

    fn split_seq(self, n: usize) -> (Self::Seq, Self) {
        (core::iter::repeat(()).take(n), Self { pos: self.pos + n, _value: PhantomData })
    }
}

impl<T> ParCursor for Discard<T> {
    type Par = rayon::iter::RepeatN<()>;

    fn split_par(self, n: usize) -> (Self::Par, Self) {
        (rayon::iter::repeatn((), n), Self { pos: self.pos + n, _value: PhantomData })
    }
}

impl<T> Writable for Discard<T> {
    fn store((): (), _value: T) {}
}
