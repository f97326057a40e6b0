//! Module containing FFI utilities for mapping between the native msgcore
//! C ABI and host Rust types.

pub mod array;
pub mod string;
