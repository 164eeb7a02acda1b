//! DPI-C argument handling for the exported backdoor functions.
//!
//! A simulator plugin receives raw pointers from the SystemVerilog side. The
//! functions here turn them into a path and a value buffer sized by the
//! fixed-size convention (`chunk_count(max_width)` chunks), run the bridge
//! operation against any [`SimHost`], and hand failures to `on_fatal`. On
//! failure the caller's buffer is never touched.

use std::ffi::{c_char, c_int, CStr};

use backdoor_common::VecVal;

use crate::bridge::SignalBridge;
use crate::error::BackdoorError;
use crate::host::SimHost;

/// Converts a DPI string argument; `None` for a null pointer.
///
/// # Safety
///
/// `path` must be null or point to a NUL-terminated string.
pub unsafe fn path_arg(path: *const c_char) -> Option<String> {
    if path.is_null() {
        return None;
    }
    Some(CStr::from_ptr(path).to_string_lossy().into_owned())
}

/// `uvm_register_check_hdl`: 1 if `path` resolves, else 0.
///
/// # Safety
///
/// `path` must be null or point to a NUL-terminated string.
pub unsafe fn check<H: SimHost>(bridge: &SignalBridge, host: &H, path: *const c_char) -> c_int {
    match path_arg(path) {
        Some(path) => c_int::from(bridge.exists(host, &path)),
        None => 0,
    }
}

/// `uvm_register_set_hdl`: deposits the buffer at `value` into `path`.
///
/// # Safety
///
/// `path` must be null or a NUL-terminated string, and `value` must be null
/// or point to `bridge.buffer_chunks(host, path)` readable chunks.
pub unsafe fn set<H, F>(
    bridge: &SignalBridge,
    host: &mut H,
    path: *const c_char,
    value: *const VecVal,
    on_fatal: F,
) where
    H: SimHost,
    F: FnOnce(&BackdoorError),
{
    if let Err(e) = try_set(bridge, host, path, value) {
        on_fatal(&e);
    }
}

/// `uvm_register_get_hdl`: copies the value of `path` into the buffer at `value`.
///
/// # Safety
///
/// `path` must be null or a NUL-terminated string, and `value` must be null
/// or point to `bridge.buffer_chunks(host, path)` writable chunks.
pub unsafe fn get<H, F>(
    bridge: &SignalBridge,
    host: &H,
    path: *const c_char,
    value: *mut VecVal,
    on_fatal: F,
) where
    H: SimHost,
    F: FnOnce(&BackdoorError),
{
    if let Err(e) = try_get(bridge, host, path, value) {
        on_fatal(&e);
    }
}

unsafe fn try_set<H: SimHost>(
    bridge: &SignalBridge,
    host: &mut H,
    path: *const c_char,
    value: *const VecVal,
) -> Result<(), BackdoorError> {
    let path = required_path(path)?;
    let chunks = bridge.buffer_chunks(host, &path)?;
    let buffer: &[VecVal] = if value.is_null() {
        &[]
    } else {
        std::slice::from_raw_parts(value, chunks)
    };
    bridge.write(host, &path, buffer)
}

unsafe fn try_get<H: SimHost>(
    bridge: &SignalBridge,
    host: &H,
    path: *const c_char,
    value: *mut VecVal,
) -> Result<(), BackdoorError> {
    let path = required_path(path)?;
    let chunks = bridge.buffer_chunks(host, &path)?;
    let buffer: &mut [VecVal] = if value.is_null() {
        Default::default()
    } else {
        std::slice::from_raw_parts_mut(value, chunks)
    };
    bridge.read(host, &path, buffer)
}

/// A null path never resolves.
unsafe fn required_path(path: *const c_char) -> Result<String, BackdoorError> {
    path_arg(path).ok_or(BackdoorError::PathNotFound {
        path: String::new(),
    })
}
