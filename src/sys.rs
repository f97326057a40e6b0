//! Raw native library bindings.

#[cfg(not(any(test, feature = "mock")))]
#[path = "sys/native.rs"]
mod bindings;

#[cfg(any(test, feature = "mock"))]
#[path = "sys/mock.rs"]
mod bindings;

pub use self::bindings::*;

/// An opaque native array handle.
///
/// Only ever observed behind a pointer; the storage behind it belongs to the
/// native library for the whole lifetime of the handle.
#[repr(C)]
pub struct RawArray {
    _opaque: [u8; 0],
}
