//! The subset of `vpi_user.h` (IEEE 1364-2005 / 1800-2017) used by the plugin.
//!
//! Symbols are resolved at load time against the simulator process.

#![allow(non_camel_case_types, non_upper_case_globals, dead_code)]

use std::ffi::{c_char, c_void};

use backdoor_common::VecVal;

pub type PLI_INT32 = i32;
pub type PLI_UINT32 = u32;
pub type PLI_BYTE8 = c_char;
pub type vpiHandle = *mut PLI_UINT32;

/// `vpi_get` property: object width in bits.
pub const vpiSize: PLI_INT32 = 4;

/// Value format: 32-bit integer.
pub const vpiIntVal: PLI_INT32 = 6;
/// Value format: array of `s_vpi_vecval`.
pub const vpiVectorVal: PLI_INT32 = 9;

/// Time type: simulation time in `high`/`low`.
pub const vpiSimTime: PLI_INT32 = 2;

/// `vpi_put_value` flag: deposit immediately.
pub const vpiNoDelay: PLI_INT32 = 1;

/// `vpi_control` operation: `$finish`.
pub const vpiFinish: PLI_INT32 = 67;

#[repr(C)]
pub struct s_vpi_time {
    pub type_: PLI_INT32,
    pub high: PLI_UINT32,
    pub low: PLI_UINT32,
    pub real: f64,
}

#[repr(C)]
pub union t_vpi_value_union {
    pub str_: *mut PLI_BYTE8,
    pub scalar: PLI_INT32,
    pub integer: PLI_INT32,
    pub real: f64,
    pub time: *mut s_vpi_time,
    pub vector: *mut VecVal,
    pub strength: *mut c_void,
    pub misc: *mut PLI_BYTE8,
}

#[repr(C)]
pub struct s_vpi_value {
    pub format: PLI_INT32,
    pub value: t_vpi_value_union,
}

extern "C" {
    pub fn vpi_handle_by_name(name: *mut PLI_BYTE8, scope: vpiHandle) -> vpiHandle;
    pub fn vpi_get(property: PLI_INT32, object: vpiHandle) -> PLI_INT32;
    pub fn vpi_get_value(expr: vpiHandle, value_p: *mut s_vpi_value);
    pub fn vpi_put_value(
        object: vpiHandle,
        value_p: *mut s_vpi_value,
        time_p: *mut s_vpi_time,
        flags: PLI_INT32,
    ) -> vpiHandle;
    pub fn vpi_printf(format: *mut PLI_BYTE8, ...) -> PLI_INT32;
    pub fn vpi_control(operation: PLI_INT32, ...) -> PLI_INT32;
}
