//! msgcore string conversions.

use crate::sys;
use std::{
    ffi::{CStr, CString},
    fmt::{self, Debug, Formatter},
    os::raw::c_char,
    ptr,
    str::Utf8Error,
};

/// An owned, NUL-terminated string for passing into the native library, or
/// the native null sentinel.
///
/// The host owns the bytes for the duration of the native call; the native
/// library copies or borrows them as it sees fit and never frees them.
pub struct NativeString {
    inner: Option<CString>,
}

impl NativeString {
    /// Creates a native string from anything convertible into one.
    pub fn new(value: impl Into<NativeString>) -> Self {
        value.into()
    }

    /// The native null sentinel. No allocation is performed.
    pub fn null() -> Self {
        NativeString { inner: None }
    }

    /// Returns the pointer to pass to the native library: null for the
    /// sentinel, otherwise a NUL-terminated buffer valid for as long as
    /// `self` is alive.
    pub fn as_ptr(&self) -> *const c_char {
        match &self.inner {
            Some(s) => s.as_ptr(),
            None => ptr::null(),
        }
    }

    /// Returns the bytes without the terminating NUL, or `None` for the
    /// null sentinel.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        self.inner.as_deref().map(CStr::to_bytes)
    }
}

impl From<&str> for NativeString {
    fn from(s: &str) -> Self {
        NativeString {
            inner: Some(terminate(s.as_bytes().to_vec())),
        }
    }
}

impl From<String> for NativeString {
    fn from(s: String) -> Self {
        NativeString {
            inner: Some(terminate(s.into_bytes())),
        }
    }
}

impl From<&[u8]> for NativeString {
    fn from(bytes: &[u8]) -> Self {
        NativeString {
            inner: Some(terminate(bytes.to_vec())),
        }
    }
}

impl From<Vec<u8>> for NativeString {
    fn from(bytes: Vec<u8>) -> Self {
        NativeString {
            inner: Some(terminate(bytes)),
        }
    }
}

impl<T> From<Option<T>> for NativeString
where
    T: Into<NativeString>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => NativeString::null(),
        }
    }
}

impl Debug for NativeString {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match &self.inner {
            Some(s) => Debug::fmt(s, f),
            None => f.write_str("<null>"),
        }
    }
}

/// Appends the terminating NUL the native convention expects. Interior NUL
/// bytes violate the caller contract for native strings.
fn terminate(bytes: Vec<u8>) -> CString {
    CString::new(bytes).expect("strings passed to the native library must not contain NUL bytes")
}

/// Decodes a string allocated by the native library into an owned host
/// `String` and releases the native buffer.
///
/// The buffer is released exactly once on every path out of this function,
/// including when the bytes are not valid UTF-8 and the error propagates.
///
/// # Safety
///
/// `ptr` must be a non-null, NUL-terminated buffer returned by the native
/// library, not yet released, and it must not be used again afterwards.
pub unsafe fn from_native(ptr: *mut c_char) -> Result<String, Utf8Error> {
    let guard = StrGuard(ptr);
    let decoded = CStr::from_ptr(guard.0).to_str()?.to_owned();
    Ok(decoded)
}

/// Nullable variant of [`from_native`], for native getters that return the
/// null sentinel instead of an empty string.
///
/// # Safety
///
/// Same as [`from_native`], except that `ptr` may be null.
pub unsafe fn from_native_opt(ptr: *mut c_char) -> Result<Option<String>, Utf8Error> {
    if ptr.is_null() {
        Ok(None)
    } else {
        from_native(ptr).map(Some)
    }
}

/// Releases the wrapped native string when dropped, so the release also
/// happens when decoding bails out early.
struct StrGuard(*mut c_char);

impl Drop for StrGuard {
    fn drop(&mut self) {
        unsafe { sys::string::unref(self.0) }
    }
}
