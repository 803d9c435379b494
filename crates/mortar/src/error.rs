//! Allocator error types.

use std::error::Error;
use std::fmt;

/// Errors raised when constructing an [`Arena`](crate::Arena).
///
/// These are the only error values in the crate: allocation failure is
/// signalled by `None` from [`Arena::alloc`](crate::Arena::alloc), not by
/// an error, matching the check-every-call contract of a minimal-overhead
/// allocator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The supplied region cannot hold even the sentinel header after the
    /// base is rounded up to the alignment boundary.
    RegionTooSmall {
        /// Length of the region the caller supplied.
        region_len: usize,
        /// Minimum length that would have succeeded for this region start.
        required: usize,
    },
    /// The supplied region pointer was null.
    NullRegion,
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RegionTooSmall {
                region_len,
                required,
            } => {
                write!(
                    f,
                    "region too small: {region_len} bytes supplied, at least {required} required"
                )
            }
            Self::NullRegion => write!(f, "region pointer is null"),
        }
    }
}

impl Error for ArenaError {}
