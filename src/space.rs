//! Execution spaces and the lattice that arbitrates between them.
//!
//! An execution space names where a cursor's data lives and, by extension,
//! which backend runs algorithms over it. Every cursor type carries one of
//! the zero-sized tags defined here ([`AnySpace`], [`Sequential`],
//! [`Parallel`], [`Device`]), and each tag mirrors a runtime [`Space`] value.
//!
//! # Lattice
//!
//! When two cursors from different spaces meet in one algorithm, the
//! algorithm runs in their *minimum common space*, the least powerful
//! space compatible with both:
//!
//! ```text
//!            Parallel        Device
//!               |              |
//!           Sequential         |
//!                 \           /
//!                  \         /
//!                     Any
//! ```
//!
//! - `Any` is the bottom: it joins with anything and yields the other side.
//! - `Sequential` data may be promoted into `Parallel` execution.
//! - `Device` shares no space with host data, so mixing them is an error.
//!
//! The lattice exists twice. [`Space::minimum`] is the value-level lookup
//! table, and [`MinimumSpace`] is its type-level mirror, implemented only for
//! compatible pairs so that incompatible copies fail to build.
//!
//! # Default Space
//!
//! Work over `Any` cursors alone (for example counting into a discard sink)
//! still needs a concrete space. It is taken from a process-wide default
//! stored in an `AtomicU8`, settable with [`set_default_space`].

use crate::error::SpaceError;
use crate::ops::dispatch::CopyDispatch;
use briny::traits::{InteriorImmutable, RawConvert, StableLayout, Unaligned};
use core::convert::TryFrom;
use core::fmt;
use core::str::FromStr;
#[cfg(target_has_atomic = "8")]
use core::sync::atomic::{AtomicU8, Ordering};

/// Runtime value of an execution space tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Space {
    /// Unconstrained; compatible with every other space.
    #[default]
    Any = 0,
    /// Host memory, executed in the calling thread.
    Sequential = 1,
    /// Host memory, executed on the worker pool one element at a time.
    Parallel = 2,
    /// Accelerator memory, executed in fixed-size blocks.
    Device = 3,
}

unsafe impl StableLayout for Space {}
unsafe impl RawConvert for Space {}
unsafe impl Unaligned for Space {}
unsafe impl InteriorImmutable for Space {}

impl Space {
    /// Every known space, in tag order.
    pub const ALL: [Self; 4] = [Self::Any, Self::Sequential, Self::Parallel, Self::Device];

    /// Looks up the minimum common space of `self` and `other`.
    ///
    /// # Errors
    ///
    /// [`SpaceError::Incompatible`] if the two spaces share no common space.
    pub const fn minimum(self, other: Self) -> Result<Self, SpaceError> {
        match (self, other) {
            (Self::Any, x) | (x, Self::Any) => Ok(x),
            (Self::Sequential, Self::Sequential) => Ok(Self::Sequential),
            (Self::Parallel, Self::Parallel)
            | (Self::Sequential, Self::Parallel)
            | (Self::Parallel, Self::Sequential) => Ok(Self::Parallel),
            (Self::Device, Self::Device) => Ok(Self::Device),
            (left, right) => Err(SpaceError::Incompatible { left, right }),
        }
    }

    /// Returns `true` if an algorithm can run over data from both spaces.
    #[must_use]
    pub fn is_compatible(self, other: Self) -> bool {
        self.minimum(other).is_ok()
    }

    /// Resolves `Any` to the configured default space.
    ///
    /// Every other space is already concrete and is returned unchanged. A
    /// default of `Any` itself falls back to `Sequential`.
    #[must_use]
    pub fn concrete(self) -> Self {
        match self {
            Self::Any => match default_space() {
                Self::Any => Self::Sequential,
                space => space,
            },
            space => space,
        }
    }

    /// Lower-case name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Sequential => "sequential",
            Self::Parallel => "parallel",
            Self::Device => "device",
        }
    }
}

impl TryFrom<u8> for Space {
    type Error = SpaceError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Any),
            1 => Ok(Self::Sequential),
            2 => Ok(Self::Parallel),
            3 => Ok(Self::Device),
            _ => Err(SpaceError::InvalidTag(value)),
        }
    }
}

impl FromStr for Space {
    type Err = SpaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "any" => Ok(Self::Any),
            "sequential" | "seq" | "host" => Ok(Self::Sequential),
            "parallel" | "par" => Ok(Self::Parallel),
            "device" => Ok(Self::Device),
            _ => Err(SpaceError::UnknownName(s.to_owned())),
        }
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Minimum common space of two spaces; see [`Space::minimum`].
///
/// # Errors
///
/// [`SpaceError::Incompatible`] if `a` and `b` share no common space.
pub const fn minimum_space(a: Space, b: Space) -> Result<Space, SpaceError> {
    a.minimum(b)
}

/// Folds [`minimum_space`] over any number of spaces.
///
/// An empty input yields `Any`, the bottom of the lattice.
///
/// # Errors
///
/// The first incompatibility met while folding.
pub fn minimum_space_of<I>(spaces: I) -> Result<Space, SpaceError>
where
    I: IntoIterator<Item = Space>,
{
    spaces
        .into_iter()
        .try_fold(Space::Any, |acc, space| acc.minimum(space))
}

/// Process-wide default for work that resolves to `Any`.
#[cfg(target_has_atomic = "8")]
static GLOBAL_DEFAULT_SPACE: AtomicU8 = AtomicU8::new(Space::Sequential as u8);

/// Unsynchronized default for targets without 8-bit atomics.
///
/// Such targets are single-threaded in practice, which is the only case
/// where writing this is sound.
#[cfg(not(target_has_atomic = "8"))]
static mut UNSAFE_DEFAULT_SPACE: u8 = Space::Sequential as u8;

/// Sets the space that runs work whose cursors are all `Any`.
///
/// # Example
/// ```
/// use spacecopy::space::{default_space, set_default_space, Space};
/// set_default_space(Space::Parallel);
/// assert_eq!(default_space(), Space::Parallel);
/// set_default_space(Space::Sequential);
/// ```
pub fn set_default_space(space: Space) {
    #[cfg(not(target_has_atomic = "8"))]
    unsafe {
        UNSAFE_DEFAULT_SPACE = space as u8;
    }
    #[cfg(target_has_atomic = "8")]
    GLOBAL_DEFAULT_SPACE.store(space as u8, Ordering::Release);
}

/// Returns the configured default space.
///
/// If the stored value is invalid, defaults to [`Space::Sequential`].
pub fn default_space() -> Space {
    #[cfg(not(target_has_atomic = "8"))]
    let raw = unsafe { UNSAFE_DEFAULT_SPACE };
    #[cfg(target_has_atomic = "8")]
    let raw = GLOBAL_DEFAULT_SPACE.load(Ordering::Acquire);
    Space::try_from(raw).unwrap_or(Space::Sequential)
}

/// Tag for cursors that impose no space of their own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AnySpace;

/// Tag for host data processed in the calling thread.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Sequential;

/// Tag for host data processed on the rayon worker pool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Parallel;

/// Tag for accelerator data processed in fixed-size blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Device;

/// Type-level lattice: `Self ⊔ Rhs`.
///
/// Only compatible pairs implement this trait. Asking for the common space
/// of, say, [`Sequential`] and [`Device`] is a build error rather than a
/// runtime one:
///
/// ```compile_fail
/// use spacecopy::cursor::{Sink, Source};
/// use spacecopy::space::{Device, Sequential};
///
/// let input = [1, 2, 3];
/// let mut output = [0; 3];
/// let first = Source::<_, Sequential>::new(&input);
/// spacecopy::copy(first, first.end(), Sink::<_, Device>::new(&mut output));
/// ```
///
/// The same holds in the other direction and for counted copies:
///
/// ```compile_fail
/// use spacecopy::cursor::{Sink, Source};
/// use spacecopy::space::{Device, Parallel};
///
/// let input = [1, 2, 3];
/// let mut output = [0; 3];
/// spacecopy::copy_n(Source::<_, Device>::new(&input), 3, Sink::<_, Parallel>::new(&mut output));
/// ```
pub trait MinimumSpace<Rhs> {
    /// The minimum common space.
    type Output: CopyDispatch;
}

/// The space an algorithm over spaces `A` and `B` runs in.
pub type Minimum<A, B> = <A as MinimumSpace<B>>::Output;

macro_rules! lattice {
    ($($a:ty, $b:ty => $out:ty;)*) => {
        $(
            impl MinimumSpace<$b> for $a {
                type Output = $out;
            }
        )*
    };
}

lattice! {
    AnySpace, AnySpace => AnySpace;
    AnySpace, Sequential => Sequential;
    AnySpace, Parallel => Parallel;
    AnySpace, Device => Device;
    Sequential, AnySpace => Sequential;
    Parallel, AnySpace => Parallel;
    Device, AnySpace => Device;
    Sequential, Sequential => Sequential;
    Sequential, Parallel => Parallel;
    Parallel, Sequential => Parallel;
    Parallel, Parallel => Parallel;
    Device, Device => Device;
}
