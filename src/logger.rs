//! Module containing logger implementation.

use crate::{ffi::string::NativeString, sys};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::os::raw::c_int;

/// The main logger implementation for the `log` facade crate, forwarding
/// records to the native library's log sink.
pub struct Logger;

impl Log for Logger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let level = match record.level() {
            Level::Error => ERROR,
            Level::Warn => WARNING,
            Level::Info => INFO,
            Level::Debug | Level::Trace => DEBUG,
        };
        let message = NativeString::new(record.args().to_string());

        unsafe {
            sys::log::log(level, message.as_ptr());
        }
    }

    fn flush(&self) {}
}

/// Initialize logging.
pub fn init() {
    static LOGGER: Logger = Logger;
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Debug);
}

const ERROR: c_int = 1;
const WARNING: c_int = 2;
const INFO: c_int = 3;
const DEBUG: c_int = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forwards_records_to_native_sink() {
        Logger.log(
            &Record::builder()
                .args(format_args!("syncing {} messages", 3))
                .level(Level::Warn)
                .build(),
        );

        let lines = sys::log::drain();
        assert!(lines.contains(&(WARNING, "syncing 3 messages".to_string())));
    }
}
