//! Fixed-region first-fit allocator with intrusive headers.
//!
//! `mortar` carves variably-sized allocations out of a single contiguous
//! region supplied by the caller and never requests memory from the
//! environment. It targets hosts with no general-purpose allocator
//! (embedded targets, freestanding runtimes, console homebrew) where one
//! memory arena serves the whole process lifetime.
//!
//! # Architecture
//!
//! ```text
//! Arena (one per region; explicit handle, no global state)
//! ├── sentinel Header at the 16-byte-aligned region base
//! │     size = base..end of caller region (end-of-arena marker)
//! └── live Headers, address-ordered doubly-linked list
//!       each directly precedes the bytes handed to the caller
//! ```
//!
//! Free space is implicit: it is whatever lies between two adjacent
//! linked headers. Allocation walks the list in address order and takes
//! the first sufficient gap (classic first-fit); free unlinks in O(1) by
//! recovering the header at a fixed offset before the caller's pointer.
//!
//! # Deliberate limitations
//!
//! Faithful to the original design, not accidents: no splitting of
//! blocks on free, no thread safety (external mutual exclusion is the
//! caller's job), one fixed backing region per arena, alignment fixed at
//! 16 bytes, no realloc. Long allocate/free sequences fragment; see
//! [`Arena::free`].
//!
//! # Features
//!
//! - `stats` (default): usage counters and [`Arena::stat`]. Absent
//!   entirely when disabled, not stubbed.
//! - `magic`: opt-in magic-word validation of headers on free. The
//!   default free contract is unchecked.
//!
//! This crate contains `unsafe` code by necessity: headers live inside
//! the caller's raw region.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod arena;
pub mod error;
mod header;
mod layout;
#[cfg(feature = "stats")]
pub mod stats;

pub use arena::Arena;
pub use error::ArenaError;
pub use layout::ALIGNMENT;
#[cfg(feature = "stats")]
pub use stats::Stats;
