//! Cursors over borrowed slices.

use super::{Cursor, ParCursor, Readable, Writable};
use crate::ops::ExecutionSpace;
use crate::space::Sequential;
use core::fmt;
use core::marker::PhantomData;
use rayon::prelude::*;

/// Read cursor over a borrowed slice, tagged with space `S`.
///
/// The whole slice is kept so that `begin`, `end` and any position in
/// between share the same underlying range.
pub struct Source<'a, T, S = Sequential> {
    data: &'a [T],
    pos: usize,
    _space: PhantomData<S>,
}

impl<'a, T, S: ExecutionSpace> Source<'a, T, S> {
    /// Cursor at the start of `data`.
    #[must_use]
    pub const fn new(data: &'a [T]) -> Self {
        Self { data, pos: 0, _space: PhantomData }
    }

    /// Cursor one past the last element of `data`.
    #[must_use]
    pub const fn end_of(data: &'a [T]) -> Self {
        Self { data, pos: data.len(), _space: PhantomData }
    }

    /// Cursor one past the last element of the underlying slice.
    #[must_use]
    pub const fn end(&self) -> Self {
        Self::end_of(self.data)
    }

    /// Cursor moved forward by `n` positions.
    ///
    /// # Panics
    /// Panics if that would move past the end of the slice.
    #[must_use]
    pub fn advance(&self, n: usize) -> Self {
        let pos = self.pos + n;
        assert!(pos <= self.data.len(), "cursor advanced past end ({pos} > {})", self.data.len());
        Self { data: self.data, pos, _space: PhantomData }
    }

    /// Elements left between the cursor and the end of the slice.
    #[must_use]
    pub fn remaining(&self) -> &'a [T] {
        &self.data[self.pos..]
    }
}

impl<T, S> Clone for Source<'_, T, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, S> Copy for Source<'_, T, S> {}

impl<T, S: ExecutionSpace> fmt::Debug for Source<'_, T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Source")
            .field("pos", &self.pos)
            .field("len", &self.data.len())
            .field("space", &S::SPACE)
            .finish()
    }
}

impl<'a, T, S: ExecutionSpace> Cursor for Source<'a, T, S> {
    type Item = &'a T;
    type Value = T;
    type Space = S;
    type Seq = core::slice::Iter<'a, T>;

    fn position(&self) -> usize {
        self.pos
    }

    fn split_seq(self, n: usize) -> (Self::Seq, Self) {
        let window = &self.data[self.pos..self.pos + n];
        (window.iter(), self.advance(n))
    }
}

impl<'a, T: Sync, S: ExecutionSpace> ParCursor for Source<'a, T, S> {
    type Par = rayon::slice::Iter<'a, T>;

    fn split_par(self, n: usize) -> (Self::Par, Self) {
        let window = &self.data[self.pos..self.pos + n];
        (window.par_iter(), self.advance(n))
    }
}

impl<T: Clone, S: ExecutionSpace> Readable for Source<'_, T, S> {
    fn load(item: Self::Item) -> T {
        item.clone()
    }
}

/// Write cursor over a mutably borrowed slice, tagged with space `S`.
///
/// A sink only holds the part of the slice it has not passed yet; the
/// absolute position is tracked separately.
pub struct Sink<'a, T, S = Sequential> {
    rest: &'a mut [T],
    pos: usize,
    _space: PhantomData<S>,
}

impl<'a, T, S: ExecutionSpace> Sink<'a, T, S> {
    /// Cursor at the start of `data`.
    #[must_use]
    pub const fn new(data: &'a mut [T]) -> Self {
        Self { rest: data, pos: 0, _space: PhantomData }
    }

    /// Cursor at `offset` within `data`.
    ///
    /// # Panics
    /// Panics if `offset > data.len()`.
    #[must_use]
    pub fn at(data: &'a mut [T], offset: usize) -> Self {
        Self { rest: &mut data[offset..], pos: offset, _space: PhantomData }
    }

    /// Slots left in front of the cursor.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.rest.len()
    }

    /// Gives back the unwritten tail of the slice.
    #[must_use]
    pub fn into_rest(self) -> &'a mut [T] {
        self.rest
    }
}

impl<T, S: ExecutionSpace> fmt::Debug for Sink<'_, T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink")
            .field("pos", &self.pos)
            .field("capacity", &self.rest.len())
            .field("space", &S::SPACE)
            .finish()
    }
}

impl<'a, T, S: ExecutionSpace> Cursor for Sink<'a, T, S> {
    type Item = &'a mut T;
    type Value = T;
    type Space = S;
    type Seq = core::slice::IterMut<'a, T>;

    fn position(&self) -> usize {
        self.pos
    }

    fn split_seq(self, n: usize) -> (Self::Seq, Self) {
        let (head, tail) = self.rest.split_at_mut(n);
        (head.iter_mut(), Self { rest: tail, pos: self.pos + n, _space: PhantomData })
    }
}

impl<'a, T: Send, S: ExecutionSpace> ParCursor for Sink<'a, T, S> {
    type Par = rayon::slice::IterMut<'a, T>;

    fn split_par(self, n: usize) -> (Self::Par, Self) {
        let (head, tail) = self.rest.split_at_mut(n);
        (head.par_iter_mut(), Self { rest: tail, pos: self.pos + n, _space: PhantomData })
    }
}

impl<T, S: ExecutionSpace> Writable for Sink<'_, T, S> {
    fn store(item: Self::Item, value: T) {
        *item = value;
    }
}
