//! Arena lifecycle FFI: create, destroy, alloc, free, stat.
//!
//! The handle is a `Box`-allocated opaque struct passed by pointer. There
//! is no global handle table: [`mortar::Arena`] holds raw pointers into
//! the caller's region and is deliberately single-threaded, so lifetime
//! discipline across the boundary is the caller's responsibility exactly
//! as it was in the original C library. Destroying a handle twice, or
//! using it after destroy, is undefined behaviour.

use std::ptr::NonNull;

use mortar::Arena;

use crate::status::MortarStatus;

/// Opaque arena handle for the C API.
///
/// Create with [`mortar_arena_create`], release with
/// [`mortar_arena_destroy`]. The handle owns no memory beyond its own
/// bookkeeping — the backing region stays the caller's.
pub struct MortarArena {
    inner: Arena,
}

/// Construct an arena over `region[0..len]` and write its handle to `out`.
///
/// The region must stay valid, and must not be accessed through any other
/// path, until the handle is destroyed. Returns `MORTAR_OK` on success; on
/// any error nothing is written to the region or to `out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn mortar_arena_create(
    region: *mut u8,
    len: usize,
    out: *mut *mut MortarArena,
) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return MortarStatus::InvalidArgument as i32;
        }
        // SAFETY: region validity and exclusivity are the caller's
        // contract; null is rejected by Arena::new.
        let inner = match unsafe { Arena::new(region, len) } {
            Ok(a) => a,
            Err(e) => return MortarStatus::from(&e) as i32,
        };
        let handle = Box::into_raw(Box::new(MortarArena { inner }));
        // SAFETY: out is non-null per the check above and valid per the
        // caller contract.
        unsafe { *out = handle };
        MortarStatus::Ok as i32
    })
}

/// Destroy an arena handle.
///
/// Frees only the handle itself; the backing region and its contents are
/// untouched. Pointers obtained from the arena are invalid afterwards.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn mortar_arena_destroy(arena: *mut MortarArena) -> i32 {
    ffi_guard!({
        if arena.is_null() {
            return MortarStatus::InvalidHandle as i32;
        }
        // SAFETY: arena came from mortar_arena_create and is not used
        // again per the caller contract.
        drop(unsafe { Box::from_raw(arena) });
        MortarStatus::Ok as i32
    })
}

/// Allocate `size` bytes from the arena.
///
/// Returns a 16-byte-aligned pointer, or null if no sufficient gap exists
/// or `arena` is null. Null-on-failure is the only failure signal; check
/// the result on every call.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn mortar_alloc(arena: *mut MortarArena, size: usize) -> *mut u8 {
    std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        if arena.is_null() {
            return std::ptr::null_mut();
        }
        // SAFETY: arena is a live handle per the caller contract.
        let arena = unsafe { &mut *arena };
        match arena.inner.alloc(size) {
            Some(p) => p.as_ptr(),
            None => std::ptr::null_mut(),
        }
    }))
    .unwrap_or(std::ptr::null_mut())
}

/// Free an allocation previously returned by [`mortar_alloc`] on this
/// arena. A null `ptr` or null `arena` is a no-op.
///
/// No validation is performed: double-free or a foreign pointer is
/// undefined behaviour, as in the original allocator.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn mortar_free(arena: *mut MortarArena, ptr: *mut u8) {
    let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        if arena.is_null() {
            return;
        }
        let Some(ptr) = NonNull::new(ptr) else {
            return;
        };
        // SAFETY: arena is a live handle and ptr a live allocation from it
        // per the caller contract.
        unsafe { (*arena).inner.free(ptr) };
    }));
}

/// Read usage counters: bytes in use (header overhead included), total
/// capacity, and the high-water mark. Out-pointers may individually be
/// null to skip a counter.
#[cfg(feature = "stats")]
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn mortar_stat(
    arena: *const MortarArena,
    used: *mut usize,
    capacity: *mut usize,
    peak: *mut usize,
) -> i32 {
    ffi_guard!({
        if arena.is_null() {
            return MortarStatus::InvalidHandle as i32;
        }
        // SAFETY: arena is a live handle per the caller contract.
        let stats = unsafe { (*arena).inner.stat() };
        // SAFETY: non-null out-pointers are valid per the caller contract.
        unsafe {
            if !used.is_null() {
                *used = stats.used;
            }
            if !capacity.is_null() {
                *capacity = stats.capacity;
            }
            if !peak.is_null() {
                *peak = stats.peak;
            }
        }
        MortarStatus::Ok as i32
    })
}
