//! The host simulator interface used by the bridge.

use backdoor_common::VecVal;
use std::borrow::Cow;

/// A simulator that can resolve hierarchical names and move vector values.
///
/// Handles are issued and owned by the host; the bridge only resolves and
/// uses them for the duration of one operation. All calls happen on the
/// simulator's own thread from inside a host-invoked callback.
pub trait SimHost {
    /// Opaque reference to a resolved object.
    type Handle;

    /// Resolves a hierarchical name, returning `None` if it is not visible.
    fn handle_by_name(&self, path: &str) -> Option<Self::Handle>;

    /// Returns the object's width in bits.
    fn size(&self, handle: &Self::Handle) -> u32;

    /// Returns the object's current value as an integer.
    ///
    /// Used to read named configuration values such as the width override.
    fn int_value(&self, handle: &Self::Handle) -> i64;

    /// Deposits a vector value with no scheduling delay.
    ///
    /// `value` is in host field layout and holds `chunk_count(size)` chunks.
    fn put_vector(&mut self, handle: &Self::Handle, value: &[VecVal]);

    /// Returns the object's current value in host field layout.
    fn get_vector(&self, handle: &Self::Handle) -> Cow<'_, [VecVal]>;
}
