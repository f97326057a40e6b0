//! Mock native function bindings.
//!
//! Stands in for the native library when it is not linked (tests and
//! host-side tooling), with the same contract: strings are NUL-terminated
//! buffers that must be released exactly once, arrays are opaque handles
//! with count and per-index id accessors. Release bookkeeping is tracked so
//! tests can assert on it, and any misuse that would corrupt the real
//! allocator panics here instead.

use super::RawArray;
use std::{
    ffi::{CStr, CString},
    os::raw::{c_char, c_int},
    sync::Mutex,
};

/// Pointers of native strings handed out and not yet released.
static STRINGS: Mutex<Vec<usize>> = Mutex::new(Vec::new());

/// Array registry, indexed by handle. An entry goes to `None` once the
/// handle is released.
static ARRAYS: Mutex<Vec<Option<Vec<u32>>>> = Mutex::new(Vec::new());

/// Lines received through the native log sink.
static LOG_LINES: Mutex<Vec<(c_int, String)>> = Mutex::new(Vec::new());

pub mod string {
    use super::*;

    /// Allocates a NUL-terminated buffer as the native library would,
    /// registering it for release bookkeeping.
    pub fn new(bytes: impl Into<Vec<u8>>) -> *mut c_char {
        let ptr = CString::new(bytes)
            .expect("mock native strings must not contain NUL bytes")
            .into_raw();
        STRINGS.lock().unwrap().push(ptr as usize);
        ptr
    }

    /// Number of allocated buffers not yet released.
    pub fn live() -> usize {
        STRINGS.lock().unwrap().len()
    }

    pub unsafe fn unref(s: *mut c_char) {
        let mut strings = STRINGS.lock().unwrap();
        let index = strings
            .iter()
            .position(|p| *p == s as usize)
            .expect("released a string the native library does not own");
        strings.remove(index);
        drop(CString::from_raw(s));
    }
}

pub mod array {
    use super::*;

    /// Registers a new native array holding the given element ids. Handles
    /// are encoded as one-based indices into the registry.
    pub fn new(ids: impl Into<Vec<u32>>) -> *mut RawArray {
        let mut arrays = ARRAYS.lock().unwrap();
        arrays.push(Some(ids.into()));
        arrays.len() as *mut RawArray
    }

    /// Whether the given handle has not been released yet.
    pub fn live(array: *const RawArray) -> bool {
        ARRAYS.lock().unwrap()[array as usize - 1].is_some()
    }

    pub unsafe fn get_cnt(array: *const RawArray) -> usize {
        lookup(array, |ids| ids.len())
    }

    pub unsafe fn get_id(array: *const RawArray, index: usize) -> u32 {
        lookup(array, |ids| ids[index])
    }

    pub unsafe fn unref(array: *mut RawArray) {
        let mut arrays = ARRAYS.lock().unwrap();
        let slot = &mut arrays[array as usize - 1];
        assert!(slot.take().is_some(), "released an array handle twice");
    }

    fn lookup<R>(array: *const RawArray, f: impl FnOnce(&[u32]) -> R) -> R {
        let arrays = ARRAYS.lock().unwrap();
        let ids = arrays[array as usize - 1]
            .as_ref()
            .expect("used an array handle after release");
        f(ids)
    }
}

pub mod log {
    use super::*;

    pub unsafe fn log(level: c_int, message: *const c_char) {
        let line = CStr::from_ptr(message).to_string_lossy().into_owned();
        LOG_LINES.lock().unwrap().push((level, line));
    }

    /// Drains the lines received through the log sink so far.
    pub fn drain() -> Vec<(c_int, String)> {
        std::mem::take(&mut *LOG_LINES.lock().unwrap())
    }
}
