//! Error types for execution space arbitration.
//!
//! Most mistakes in this crate are caught by the type system: copying
//! between cursors whose spaces share no common space simply does not
//! build. [`SpaceError`] covers the value-level mirror of those checks,
//! i.e. lattice lookups on [`Space`] values and decoding of stored tags.

use crate::space::Space;

/// Failure to arbitrate or decode an execution space.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpaceError {
    /// The two spaces have no common space that can run an algorithm over both.
    #[error("no common execution space for {left} and {right}")]
    Incompatible {
        /// Space of the first (source) side.
        left: Space,
        /// Space of the second (destination) side.
        right: Space,
    },
    /// A raw tag byte that does not name any space.
    #[error("invalid execution space tag: {0}")]
    InvalidTag(u8),
    /// A space name that could not be parsed.
    #[error("unknown execution space: {0:?}")]
    UnknownName(String),
}
