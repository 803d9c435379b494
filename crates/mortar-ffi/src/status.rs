//! C-compatible status codes.
//!
//! [`MortarStatus`] is a `repr(i32)` enum covering every error condition
//! the C API can report. Conversions from [`ArenaError`] are provided.

use mortar::ArenaError;

/// C-compatible status code returned by handle-level FFI functions.
///
/// `Ok` = 0, all errors are negative. Values are ABI-stable.
/// `mortar_alloc` does not use statuses: it returns null on failure,
/// preserving the check-the-pointer contract of the original allocator.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MortarStatus {
    /// Success.
    Ok = 0,
    /// The supplied region pointer was null.
    NullRegion = -1,
    /// The supplied region cannot hold even one header.
    RegionTooSmall = -2,
    /// The arena handle is null.
    InvalidHandle = -3,
    /// An out-pointer argument is null.
    InvalidArgument = -4,
    /// A Rust panic was caught at the FFI boundary.
    Panicked = -128,
}

impl From<&ArenaError> for MortarStatus {
    fn from(e: &ArenaError) -> Self {
        match e {
            ArenaError::RegionTooSmall { .. } => MortarStatus::RegionTooSmall,
            ArenaError::NullRegion => MortarStatus::NullRegion,
        }
    }
}
