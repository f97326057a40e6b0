//! Low-level bridge between the native msgcore messaging library and Rust 🦀
//!
//! The native library owns all of the heavy machinery (message storage, sync,
//! encryption); this crate only converts between its representations --
//! NUL-terminated UTF-8 buffers owned by the native allocator and opaque
//! array handles -- and host Rust types, releasing native-owned memory
//! deterministically on every path.

mod ffi;
mod logger;
pub mod sys;

pub use self::ffi::{
    array::{Iter, NativeArray},
    string::{from_native, from_native_opt, NativeString},
};
pub use self::logger::init as init_logger;
pub use self::sys::RawArray;
pub use log;
