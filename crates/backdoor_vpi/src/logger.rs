//! `log` records printed on the simulator console.

use std::ffi::CString;

use log::{LevelFilter, Log, Metadata, Record};

use crate::ffi::{vpi_printf, PLI_BYTE8};

/// Prints `message` verbatim through `vpi_printf`.
pub fn vpi_print(message: &str) {
    let Ok(text) = CString::new(message.replace('\0', "")) else {
        return;
    };
    // SAFETY: both strings are NUL-terminated; the "%s" format consumes
    // exactly one `char *` argument.
    unsafe {
        vpi_printf(c"%s".as_ptr() as *mut PLI_BYTE8, text.as_ptr());
    }
}

/// Forwards log records to the simulator transcript.
struct VpiLogger;

static LOGGER: VpiLogger = VpiLogger;

impl Log for VpiLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            vpi_print(&format!("backdoor: [{}] {}\n", record.level(), record.args()));
        }
    }

    fn flush(&self) {}
}

/// Installs the console logger at `level`.
///
/// If another logger already owns the process (e.g. a second Rust plugin),
/// records keep going there and only the level is left alone.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
