//! [`SimHost`] over the simulator's VPI.

use std::borrow::Cow;
use std::ffi::CString;
use std::ptr;

use backdoor_bridge::SimHost;
use backdoor_common::{chunk_count, VecVal};

use crate::ffi::*;

/// A VPI object handle, owned by the simulator.
#[derive(Debug, Clone, Copy)]
pub struct VpiHandle(vpiHandle);

/// The simulator the library is loaded into.
///
/// Only meaningful on the simulator thread, inside a VPI or DPI call.
#[derive(Debug, Default)]
pub struct VpiHost;

impl SimHost for VpiHost {
    type Handle = VpiHandle;

    fn handle_by_name(&self, path: &str) -> Option<VpiHandle> {
        let name = CString::new(path).ok()?;
        // SAFETY: `name` is NUL-terminated and outlives the call; the
        // simulator does not write through the name pointer.
        let handle = unsafe { vpi_handle_by_name(name.as_ptr() as *mut PLI_BYTE8, ptr::null_mut()) };
        (!handle.is_null()).then_some(VpiHandle(handle))
    }

    fn size(&self, handle: &VpiHandle) -> u32 {
        // SAFETY: the handle came from `vpi_handle_by_name` in this callback.
        let size = unsafe { vpi_get(vpiSize, handle.0) };
        size.max(0) as u32
    }

    fn int_value(&self, handle: &VpiHandle) -> i64 {
        let mut value = s_vpi_value {
            format: vpiIntVal,
            value: t_vpi_value_union { integer: 0 },
        };
        // SAFETY: `value` is a valid, initialized `s_vpi_value`; with
        // `vpiIntVal` the simulator fills `value.integer`.
        unsafe {
            vpi_get_value(handle.0, &mut value);
            value.value.integer as i64
        }
    }

    fn put_vector(&mut self, handle: &VpiHandle, chunks: &[VecVal]) {
        let mut value = s_vpi_value {
            format: vpiVectorVal,
            value: t_vpi_value_union {
                vector: chunks.as_ptr() as *mut VecVal,
            },
        };
        let mut time = s_vpi_time {
            type_: vpiSimTime,
            high: 0,
            low: 0,
            real: 0.0,
        };
        // SAFETY: `VecVal` is layout-compatible with `s_vpi_vecval` and
        // `chunks` holds one entry per 32 bits of the object. The simulator
        // copies the vector and does not write through it.
        unsafe {
            vpi_put_value(handle.0, &mut value, &mut time, vpiNoDelay);
        }
    }

    fn get_vector(&self, handle: &VpiHandle) -> Cow<'_, [VecVal]> {
        let chunks = chunk_count(self.size(handle));
        let mut value = s_vpi_value {
            format: vpiVectorVal,
            value: t_vpi_value_union {
                vector: ptr::null_mut(),
            },
        };
        // SAFETY: with `vpiVectorVal` the simulator points `value.vector` at
        // an array of `chunk_count(size)` entries it owns, valid until the
        // next VPI call. The bridge copies out of the slice before then.
        unsafe {
            vpi_get_value(handle.0, &mut value);
            let vector = value.value.vector;
            if vector.is_null() {
                log::warn!("simulator returned no vector value");
                return Cow::Owned(Vec::new());
            }
            Cow::Borrowed(std::slice::from_raw_parts(vector, chunks))
        }
    }
}
