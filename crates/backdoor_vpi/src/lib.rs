//! DPI-C backdoor entry points for simulators, built on the VPI.
//!
//! The library is loaded into a simulator (e.g. `vsim -sv_lib`, `xrun
//! -sv_lib`) and exports the three functions the register layer imports:
//!
//! ```systemverilog
//! import "DPI-C" function int  uvm_register_check_hdl(string path);
//! import "DPI-C" function void uvm_register_set_hdl(string path, logic [MAX-1:0] value);
//! import "DPI-C" function void uvm_register_get_hdl(string path, output logic [MAX-1:0] value);
//! ```
//!
//! Value buffers follow the fixed-size convention: the SystemVerilog side
//! always passes `MAX` bits, where `MAX` matches the effective maximum width.
//! Any failed read or write is fatal: the diagnostic is printed on the
//! simulator console and `$finish` is requested.
//!
//! Settings come from the file named by `HDL_BACKDOOR_CONFIG`, else
//! `./backdoor.toml`, else the defaults; `HDL_BACKDOOR_ENCODING` overrides the
//! chunk encoding (`swapped` for simulators with inverted `aval`/`bval`).

#![warn(missing_docs)]

mod ffi;
pub mod host;
pub mod logger;

use std::ffi::{c_char, c_int};
use std::path::Path;
use std::sync::OnceLock;

use backdoor_bridge::{dpi, BackdoorError, SignalBridge};
use backdoor_common::VecVal;
use backdoor_config::{
    apply_env_overrides, load_config_from_path, load_config_or_default, BackdoorConfig,
    ConfigError, CONFIG_ENV,
};

pub use host::{VpiHandle, VpiHost};

static BRIDGE: OnceLock<SignalBridge> = OnceLock::new();

/// Returns the process-wide bridge, loading configuration on first use.
pub fn bridge() -> &'static SignalBridge {
    BRIDGE.get_or_init(|| {
        let config = load_settings().unwrap_or_else(|e| {
            logger::vpi_print(&format!("backdoor: {e}; using default settings\n"));
            BackdoorConfig::default()
        });
        logger::init(config.log.level.to_level_filter());
        log::debug!("chunk encoding is {}", config.bridge.encoding);
        SignalBridge::from_config(&config.bridge)
    })
}

fn load_settings() -> Result<BackdoorConfig, ConfigError> {
    let config = match std::env::var_os(CONFIG_ENV) {
        Some(path) => load_config_from_path(Path::new(&path))?,
        None => load_config_or_default(Path::new("."))?,
    };
    apply_env_overrides(config, |k| std::env::var(k).ok())
}

/// Prints the diagnostic for `err` and asks the simulator to finish.
fn fatal(err: &BackdoorError) {
    logger::vpi_print(&err.diagnostic());
    let diagnostic_level: ffi::PLI_INT32 = 1;
    // SAFETY: `vpiFinish` takes one `PLI_INT32` diagnostic level argument.
    unsafe {
        ffi::vpi_control(ffi::vpiFinish, diagnostic_level);
    }
}

/// Returns 1 if `path` names an object visible through the VPI, else 0.
///
/// # Safety
///
/// `path` must be null or point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn uvm_register_check_hdl(path: *const c_char) -> c_int {
    dpi::check(bridge(), &VpiHost, path)
}

/// Deposits `value` into the object at `path` with no delay.
///
/// # Safety
///
/// `path` must be null or a NUL-terminated string, and `value` must point to
/// a buffer of `chunk_count(max_width)` `svLogicVecVal` chunks.
#[no_mangle]
pub unsafe extern "C" fn uvm_register_set_hdl(path: *const c_char, value: *const VecVal) {
    dpi::set(bridge(), &mut VpiHost, path, value, fatal);
}

/// Copies the current value of the object at `path` into `value`.
///
/// # Safety
///
/// `path` must be null or a NUL-terminated string, and `value` must point to
/// a writable buffer of `chunk_count(max_width)` `svLogicVecVal` chunks.
#[no_mangle]
pub unsafe extern "C" fn uvm_register_get_hdl(path: *const c_char, value: *mut VecVal) {
    dpi::get(bridge(), &VpiHost, path, value, fatal);
}
