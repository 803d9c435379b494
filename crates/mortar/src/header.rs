//! Intrusive allocation headers.
//!
//! A [`Header`] is written into the arena region immediately before the
//! bytes handed to the caller. Headers form an address-ordered doubly-linked
//! list starting at the sentinel; the `size` field records the full span of
//! the block, header included. The caller pointer is always
//! `header + HEADER_SIZE`, so `free` recovers the header by a fixed-offset
//! subtraction and never walks the list.

use std::mem;
use std::ptr;

use crate::layout;

/// Magic word stamped into every live header when the `magic` feature is
/// enabled. Cleared on free, so a double-free trips the check too.
#[cfg(feature = "magic")]
pub(crate) const MAGIC: usize = 0x4d52_5452;

/// Per-allocation metadata, written in-region directly before the bytes
/// returned to the caller.
///
/// `repr(C)` keeps the layout independent of field declaration luck; the
/// struct must fit inside [`HEADER_SIZE`] with or without the magic word.
#[repr(C)]
pub(crate) struct Header {
    /// Previous header in address order. Never null for a live allocation
    /// (the sentinel precedes everything); unused on the sentinel itself.
    pub prev: *mut Header,
    /// Next header in address order, or null at the end of the list.
    pub next: *mut Header,
    /// Total bytes this block occupies, header included, rounded up to the
    /// alignment boundary. On the sentinel: distance from the arena base to
    /// the end of the caller's region (the end-of-arena marker).
    pub size: usize,
    #[cfg(feature = "magic")]
    pub magic: usize,
}

/// Bytes a header occupies in the region: `size_of::<Header>()` rounded up
/// to the alignment boundary. This is also the fixed offset between a
/// header and the pointer handed to the caller.
pub(crate) const HEADER_SIZE: usize = layout::align_up_const(mem::size_of::<Header>());

impl Header {
    /// Header for a live allocation spliced between `prev` and `next`.
    pub(crate) fn live(prev: *mut Header, next: *mut Header, size: usize) -> Self {
        Self {
            prev,
            next,
            size,
            #[cfg(feature = "magic")]
            magic: MAGIC,
        }
    }

    /// The permanent sentinel installed at the arena base. `size` spans
    /// from the base to the end of the caller's region.
    pub(crate) fn sentinel(size: usize) -> Self {
        Self {
            prev: ptr::null_mut(),
            next: ptr::null_mut(),
            size,
            #[cfg(feature = "magic")]
            magic: MAGIC,
        }
    }
}

/// Pointer handed to the caller for the given header.
///
/// # Safety
///
/// `header` must point at a header inside a region with at least
/// `HEADER_SIZE` bytes following it.
pub(crate) unsafe fn user_part(header: *mut Header) -> *mut u8 {
    (header as *mut u8).add(HEADER_SIZE)
}

/// Recover the header for a pointer previously produced by [`user_part`].
///
/// # Safety
///
/// `ptr` must have been derived from a live header via [`user_part`] and
/// passed back unmodified. No validation is performed (the `magic` feature
/// adds an opt-in check at the free site).
pub(crate) unsafe fn from_user_part(ptr: *mut u8) -> *mut Header {
    ptr.sub(HEADER_SIZE) as *mut Header
}
