//! # `spacecopy`
//!
//! Element-wise copy over cursors that live in different execution spaces.
//!
//! `copy` and `copy_n` are written exactly once, against two primitives
//! (`transform` and `for_each_n`) that every execution space supplies. The
//! space a call runs in is never passed in; it is derived from the space tags
//! the cursors carry:
//!
//! - same space on both sides: that space
//! - different spaces: their minimum common space, e.g. a sequential source
//!   copied into a parallel sink runs in parallel
//! - no common space (host and device): the call does not compile
//!
//! ## Modules
//!
//! - [`space`]: space tags, the lattice, and the default-space setting
//! - [`cursor`]: the cursor capability facade, shipped cursors, and fusion
//! - [`functor`]: pure functors and their per-space wrappers
//! - [`ops`]: execution primitives, backends, dispatch, generic algorithms
//! - [`error`]: value-level lattice errors
//!
//! ## Example
//!
//! ```rust
//! use spacecopy::cursor::{Cursor, Sink, Source};
//! use spacecopy::space::{Parallel, Sequential};
//!
//! let input = [10, 20, 30, 40];
//! let mut output = [0; 4];
//!
//! let end = spacecopy::copy_n(
//!     Source::<_, Sequential>::new(&input),
//!     2,
//!     Sink::<_, Parallel>::new(&mut output),
//! );
//! assert_eq!(end.position(), 2);
//! assert_eq!(output, [10, 20, 0, 0]);
//! ```
//!
//! ## Logging
//!
//! Dispatch decisions are emitted as `tracing` events (`debug` for the
//! algorithm and the space it resolved to, `trace` inside backends). The
//! crate installs no subscriber.

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]
#![warn(missing_docs)]
#![forbid(unused_must_use)]

pub mod cursor;
pub mod error;
pub mod functor;
pub mod ops;
pub mod space;

pub use error::SpaceError;
pub use ops::{copy, copy_n, for_each_n, transform};
pub use space::{Space, minimum_space};
