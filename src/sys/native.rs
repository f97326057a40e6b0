//! msgcore import function bindings.

use super::RawArray;
use std::os::raw::{c_char, c_int};

pub mod string {
    use super::*;

    #[link(name = "msgcore")]
    extern "C" {
        /// Releases a string buffer previously returned by the native
        /// library. Must be called exactly once per buffer.
        #[link_name = "msgcore_str_unref"]
        pub fn unref(s: *mut c_char);
    }
}

pub mod array {
    use super::*;

    #[link(name = "msgcore")]
    extern "C" {
        #[link_name = "msgcore_array_get_cnt"]
        pub fn get_cnt(array: *const RawArray) -> usize;

        #[link_name = "msgcore_array_get_id"]
        pub fn get_id(array: *const RawArray, index: usize) -> u32;

        #[link_name = "msgcore_array_unref"]
        pub fn unref(array: *mut RawArray);
    }
}

pub mod log {
    use super::*;

    #[link(name = "msgcore")]
    extern "C" {
        #[link_name = "msgcore_log"]
        pub fn log(level: c_int, message: *const c_char);
    }
}
