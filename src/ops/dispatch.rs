//! Copy Dispatch Layer
//!
//! This module selects which implementation of `copy` and `copy_n` runs for
//! a pair of cursors, based on the execution space tags they carry.
//!
//! Selection happens in two steps, both at build time:
//!
//! 1. [`Resolved`] computes the minimum common space of the input and output
//!    cursor types. No common space, no build.
//! 2. The resolved space's [`CopyDispatch`] methods run. A backend that has
//!    a better way to copy overrides the method in its impl; every method it
//!    leaves alone falls back to [`super::generic`].
//!
//! [`resolve`] is the runtime mirror of step 1, for callers holding
//! [`Space`] values rather than cursor types.
//!
//! # Example
//! ```rust
//! use spacecopy::ops::dispatch::resolve;
//! use spacecopy::space::Space;
//!
//! assert_eq!(resolve(Space::Sequential, Space::Parallel), Ok(Space::Parallel));
//! assert!(resolve(Space::Parallel, Space::Device).is_err());
//! ```

use super::{ExecutionSpace, Traverse, generic};
use crate::cursor::{Cursor, Readable, Writable, Zip};
use crate::error::SpaceError;
use crate::space::{Minimum, MinimumSpace, Space};

/// The space an algorithm reading `I` and writing `O` runs in.
pub type Resolved<I, O> = Minimum<<I as Cursor>::Space, <O as Cursor>::Space>;

/// Copy algorithms as seen from one execution space.
///
/// Both methods have generic default bodies; implementing the trait with an
/// empty body opts a space into them.
pub trait CopyDispatch: ExecutionSpace {
    /// Copies `[first, last)` to `result`; see [`generic::copy`].
    fn copy<I, O>(self, first: I, last: I, result: O) -> O
    where
        I: Readable,
        O: Writable<Value = I::Value>,
        I::Space: MinimumSpace<O::Space>,
        Zip<I, O>: Traverse<Resolved<I, O>> + Cursor<Item = (I::Item, O::Item)>,
    {
        generic::copy(self, first, last, result)
    }

    /// Copies `n` elements from `first` to `result`; see [`generic::copy_n`].
    fn copy_n<I, O>(self, first: I, n: usize, result: O) -> O
    where
        I: Readable,
        O: Writable<Value = I::Value>,
        I::Space: MinimumSpace<O::Space>,
        Zip<I, O>: Traverse<Resolved<I, O>> + Cursor<Item = (I::Item, O::Item)>,
    {
        generic::copy_n(self, first, n, result)
    }
}

/// Concrete space that runs work reading from `source` and writing to
/// `destination`.
///
/// `Any` on both sides resolves to the configured default space.
///
/// # Errors
///
/// [`SpaceError::Incompatible`] if the two spaces share no common space.
pub fn resolve(source: Space, destination: Space) -> Result<Space, SpaceError> {
    Ok(source.minimum(destination)?.concrete())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{Sink, Source};
    use crate::functor::{PerElement, Shape};
    use crate::space::{Parallel, Sequential};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// A host space with its own `copy_n`, counting how often it runs.
    #[derive(Debug, Clone, Copy, Default)]
    struct Staged;

    static STAGED_COPIES: AtomicUsize = AtomicUsize::new(0);

    impl ExecutionSpace for Staged {
        const SPACE: Space = Space::Sequential;
        const SHAPE: Shape = Shape::Element;

        type Functor<F: Send + Sync> = PerElement<F>;

        fn select<F: Send + Sync>(f: F) -> Self::Functor<F> {
            PerElement::new(f)
        }
    }

    impl<C: Cursor> Traverse<Staged> for C {
        fn traverse<F>(self, n: usize, f: PerElement<F>) -> Self
        where
            F: Fn(Self::Item) + Send + Sync,
        {
            Sequential.for_each_n(self, n, f)
        }
    }

    impl MinimumSpace<Staged> for Staged {
        type Output = Staged;
    }

    impl CopyDispatch for Staged {
        fn copy_n<I, O>(self, first: I, n: usize, result: O) -> O
        where
            I: Readable,
            O: Writable<Value = I::Value>,
            I::Space: MinimumSpace<O::Space>,
            Zip<I, O>: Traverse<Resolved<I, O>> + Cursor<Item = (I::Item, O::Item)>,
        {
            STAGED_COPIES.fetch_add(1, Ordering::SeqCst);
            let (input, _) = first.split_seq(n);
            let (output, rest) = result.split_seq(n);
            for (x, y) in input.zip(output) {
                O::store(y, I::load(x));
            }
            rest
        }
    }

    #[test]
    fn backend_override_wins_over_generic() {
        let input = [4, 5, 6];
        let mut output = [0; 3];

        let end = crate::ops::copy_n(
            Source::<_, Staged>::new(&input),
            3,
            Sink::<_, Staged>::new(&mut output),
        );
        assert_eq!(end.position(), 3);
        assert_eq!(output, input);
        assert_eq!(STAGED_COPIES.load(Ordering::SeqCst), 1);

        // `copy` is not overridden and takes the generic path.
        let mut again = [0; 3];
        let first = Source::<_, Staged>::new(&input);
        crate::ops::copy(first, first.end(), Sink::<_, Staged>::new(&mut again));
        assert_eq!(again, input);
        assert_eq!(STAGED_COPIES.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn resolves_from_cursor_types() {
        let input = [1];
        let mut output = [0];
        let first = Source::<_, Sequential>::new(&input);
        let result = Sink::<_, Parallel>::new(&mut output);
        let expected = resolve(first.space(), result.space()).unwrap();
        assert_eq!(<Resolved<Source<'static, i32, Sequential>, Sink<'static, i32, Parallel>>>::SPACE, expected);
    }

    #[test]
    fn resolution_is_deterministic() {
        let first = resolve(Space::Sequential, Space::Parallel);
        for _ in 0..100 {
            assert_eq!(resolve(Space::Sequential, Space::Parallel), first);
        }
    }
}
