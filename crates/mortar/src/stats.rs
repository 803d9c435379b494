//! Usage counters, compiled in only with the `stats` feature.

/// Point-in-time usage snapshot returned by
/// [`Arena::stat`](crate::Arena::stat).
///
/// Purely observational; reading it never affects allocator behaviour.
/// All figures include header overhead, so a freshly constructed arena
/// reports one header's worth of `used` bytes for the sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stats {
    /// Bytes currently occupied by the sentinel and all live blocks.
    pub used: usize,
    /// Total arena capacity: bytes from the aligned base to the end of the
    /// caller's region.
    pub capacity: usize,
    /// High-water mark of `used` since the arena was constructed.
    pub peak: usize,
}
