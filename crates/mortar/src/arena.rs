//! The arena allocator: sentinel install, first-fit search, O(1) free.
//!
//! An [`Arena`] manages one caller-supplied contiguous region and never
//! asks the environment for more memory. Live allocations are tracked by
//! an address-ordered doubly-linked list of in-region [`Header`]s rooted
//! at a permanent sentinel; free space is whatever lies between two
//! adjacent headers, so there is no free list and nothing to coalesce.
//!
//! The walk per allocation is:
//!
//! ```text
//! base                                              base + capacity
//! ┌────────┬─────────┬── gap ──┬─────────┬─ gap ─┐
//! │sentinel│ block A │         │ block B │       │
//! └────────┴─────────┴─────────┴─────────┴───────┘
//!           ▲ hpos after sentinel span    ▲ tail gap checked last
//! ```
//!
//! The first gap (in ascending address order) large enough for
//! `align16(request + header)` wins.

use std::ptr::{self, NonNull};

use crate::error::ArenaError;
use crate::header::{self, Header, HEADER_SIZE};
use crate::layout;
#[cfg(feature = "stats")]
use crate::stats::Stats;

/// A fixed-region first-fit allocator.
///
/// Construct one with [`Arena::new`] over a region you own; the region
/// must outlive every use of the arena and every pointer it hands out.
/// Dropping the arena releases nothing — the backing memory was never
/// the arena's to release.
///
/// `Arena` is deliberately neither `Send` nor `Sync`: all state is
/// unsynchronized by design, and sharing one arena across threads
/// requires external mutual exclusion around every call.
#[derive(Debug)]
pub struct Arena {
    /// The sentinel header at the aligned region base. Its `size` field
    /// spans to the end of the caller's region and doubles as the
    /// end-of-arena marker.
    sentinel: NonNull<Header>,
    /// Bytes from the sentinel to the end of the caller's region.
    total: usize,
    #[cfg(feature = "stats")]
    used: usize,
    #[cfg(feature = "stats")]
    peak: usize,
}

impl Arena {
    /// Fixed per-allocation overhead in bytes: the aligned header size.
    ///
    /// Every allocation, including a zero-byte one, consumes at least this
    /// much arena space, and the sentinel consumes it once up front. Useful
    /// for sizing a region to hold a known set of allocations.
    pub const HEADER_OVERHEAD: usize = HEADER_SIZE;

    /// Construct an arena over the raw region `[region, region + len)`.
    ///
    /// The base is `region` rounded up to the alignment boundary; the
    /// rounding slack is lost from usable space. A sentinel header is
    /// written at the base. Constructing a new arena over a region that
    /// was already in use by another arena discards all prior allocations;
    /// pointers from before are invalid.
    ///
    /// # Errors
    ///
    /// [`ArenaError::NullRegion`] if `region` is null, and
    /// [`ArenaError::RegionTooSmall`] if the region cannot hold the
    /// sentinel after base alignment. On error nothing is written.
    ///
    /// # Safety
    ///
    /// `region` must be valid for reads and writes of `len` bytes, not
    /// accessed through any other path while the arena (or any pointer it
    /// returned) is in use, and must outlive that use.
    pub unsafe fn new(region: *mut u8, len: usize) -> Result<Self, ArenaError> {
        if region.is_null() {
            return Err(ArenaError::NullRegion);
        }
        let start = region as usize;
        let too_small = |required| ArenaError::RegionTooSmall {
            region_len: len,
            required,
        };

        let end = start.checked_add(len).ok_or(too_small(usize::MAX))?;
        let base = layout::align_up(start).ok_or(too_small(usize::MAX))?;
        // Alignment slack plus one header must fit inside the region.
        let required = (base - start) + HEADER_SIZE;
        if len < required {
            return Err(too_small(required));
        }

        let total = end - base;
        let sentinel = base as *mut Header;
        // SAFETY: base..base+HEADER_SIZE lies inside the caller's region
        // per the check above, and base is 16-aligned (a multiple of the
        // header's alignment).
        ptr::write(sentinel, Header::sentinel(total));

        Ok(Self {
            // SAFETY: base was rounded up from a non-null pointer.
            sentinel: NonNull::new_unchecked(sentinel),
            total,
            #[cfg(feature = "stats")]
            used: HEADER_SIZE,
            #[cfg(feature = "stats")]
            peak: HEADER_SIZE,
        })
    }

    /// Allocate `size` bytes, returning a 16-byte-aligned pointer.
    ///
    /// First-fit: headers are walked in ascending address order and the
    /// first gap that can hold `size` plus a header (rounded up to the
    /// boundary) is taken, even if a tighter gap exists later. A `size`
    /// of zero is not special-cased and still consumes one aligned
    /// header's worth of space.
    ///
    /// Returns `None` when no gap anywhere, including the tail, is large
    /// enough. There is no other failure mode — no retry, no compaction.
    pub fn alloc(&mut self, size: usize) -> Option<NonNull<u8>> {
        let need = layout::align_up(size.checked_add(HEADER_SIZE)?)?;
        let base = self.sentinel.as_ptr() as usize;
        let end = base + self.total;

        let mut prev = self.sentinel.as_ptr();
        // Candidate position: directly after the span the current header
        // occupies. The sentinel occupies exactly one aligned header (its
        // `size` field is the arena span, not an occupied span).
        let mut hpos = base + HEADER_SIZE;
        loop {
            // SAFETY: `prev` is a live header of this arena; the list is
            // only ever mutated by alloc/free below, which keep it
            // well-formed.
            let next = unsafe { (*prev).next };
            let gap_end = if next.is_null() { end } else { next as usize };
            if hpos.checked_add(need).is_some_and(|top| top <= gap_end) {
                let inserted = hpos as *mut Header;
                // SAFETY: [hpos, hpos + need) is a gap: it lies between
                // two linked headers (or between the last header and the
                // region end) and overlaps no live block.
                unsafe {
                    ptr::write(inserted, Header::live(prev, next, need));
                    (*prev).next = inserted;
                    if !next.is_null() {
                        (*next).prev = inserted;
                    }
                    #[cfg(feature = "stats")]
                    {
                        self.used += need;
                        self.peak = self.peak.max(self.used);
                    }
                    return Some(NonNull::new_unchecked(header::user_part(inserted)));
                }
            }
            if next.is_null() {
                return None;
            }
            // SAFETY: `next` is a live header; its span is in-region.
            hpos = next as usize + unsafe { (*next).size };
            prev = next;
        }
    }

    /// Free an allocation previously returned by [`Arena::alloc`].
    ///
    /// O(1): the header is recovered by fixed-offset subtraction and
    /// unlinked. The freed bytes are not zeroed and the span is not merged
    /// with neighbouring gaps — it becomes available only to a later
    /// allocation whose first-fit search lands on it, so long
    /// allocate/free sequences accumulate fragmentation.
    ///
    /// # Safety
    ///
    /// `ptr` must be a still-live allocation from this arena, passed back
    /// unmodified. Double-free or a foreign pointer is undefined
    /// behaviour; no validation is performed (enable the `magic` feature
    /// for an opt-in header check).
    pub unsafe fn free(&mut self, ptr: NonNull<u8>) {
        let freed = header::from_user_part(ptr.as_ptr());
        #[cfg(feature = "magic")]
        {
            assert_eq!(
                (*freed).magic,
                header::MAGIC,
                "pointer does not refer to a live mortar allocation"
            );
            (*freed).magic = 0;
        }
        #[cfg(feature = "stats")]
        {
            self.used -= (*freed).size;
        }
        let prev = (*freed).prev;
        let next = (*freed).next;
        // `prev` is never null: the sentinel precedes every allocation.
        (*prev).next = next;
        if !next.is_null() {
            (*next).prev = prev;
        }
    }

    /// Total arena capacity in bytes: from the aligned base to the end of
    /// the caller's region, including space lost to tail padding.
    pub fn capacity(&self) -> usize {
        self.total
    }

    /// Usage counters: bytes in use (header overhead included), total
    /// capacity, and the high-water mark of bytes ever in use at once.
    #[cfg(feature = "stats")]
    pub fn stat(&self) -> Stats {
        Stats {
            used: self.used,
            capacity: self.total,
            peak: self.peak,
        }
    }
}
