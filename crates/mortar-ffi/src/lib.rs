//! C API for the mortar fixed-region allocator.
//!
//! Exposes arena construction, allocation, and free over an explicit
//! opaque handle — the original C library kept one hidden process-global
//! arena; here every call names its arena, and a process that wants the
//! old behaviour keeps a single handle in a global of its own choosing.
//! This crate contains `unsafe` code at the C boundary only.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

/// Contain panics at the C boundary: a caught unwind becomes
/// `MORTAR_PANICKED` instead of undefined behaviour in the caller.
macro_rules! ffi_guard {
    ($body:block) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $body)) {
            Ok(status) => status,
            Err(_) => $crate::status::MortarStatus::Panicked as i32,
        }
    };
}

pub mod arena;
pub mod status;

pub use arena::MortarArena;
pub use status::MortarStatus;
