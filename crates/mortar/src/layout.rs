//! Alignment arithmetic for the fixed 16-byte allocation boundary.
//!
//! Every placement decision in the allocator — the arena base, the header
//! size, and each block size — is rounded up to [`ALIGNMENT`]. The boundary
//! is fixed at compile time; the allocator makes no stronger guarantee.

/// Allocation alignment boundary in bytes.
///
/// The arena base, every header, and every returned pointer are aligned
/// to this boundary. Block sizes are multiples of it.
pub const ALIGNMENT: usize = 16;

const MASK: usize = ALIGNMENT - 1;

/// Round `n` up to the next multiple of [`ALIGNMENT`].
///
/// Returns `None` on overflow, which can only happen for requests within
/// `ALIGNMENT - 1` bytes of `usize::MAX`.
pub fn align_up(n: usize) -> Option<usize> {
    n.checked_add(MASK).map(|v| v & !MASK)
}

/// Round `n` up to the next multiple of [`ALIGNMENT`], without overflow
/// checking. Const-context variant used to size the header.
pub(crate) const fn align_up_const(n: usize) -> usize {
    (n + MASK) & !MASK
}
