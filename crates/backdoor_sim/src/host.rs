//! The in-memory host: a flat signal table plus integer parameters.
//!
//! Signal values are stored as logical [`LogicVec`]s. The host's
//! [`ChunkEncoding`] decides how they are laid out when they cross the
//! [`SimHost`] boundary: a `Swapped` host reports and accepts chunks with
//! `aval`/`bval` exchanged, like simulators whose VPI layout is inverted
//! relative to DPI.

use std::borrow::Cow;
use std::cell::Cell;
use std::collections::{BTreeMap, HashMap};

use backdoor_bridge::SimHost;
use backdoor_common::{ChunkEncoding, LogicVec, VecVal};
use serde::Serialize;

use crate::error::HostError;
use crate::value::{SimSignalId, SimSignalState};

/// Width reported for integer parameters.
const PARAM_WIDTH: u32 = 32;

/// A resolved object in the host namespace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostHandle {
    /// A signal in the signal table.
    Signal(SimSignalId),
    /// A named integer parameter.
    Param(String),
}

/// Snapshot of how often the host has been queried through [`SimHost`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct HostStats {
    /// Name lookups, successful or not.
    pub lookups: u64,
    /// Integer value reads.
    pub int_reads: u64,
    /// Vector value reads.
    pub value_reads: u64,
    /// Vector value writes.
    pub value_writes: u64,
}

impl HostStats {
    /// Vector reads plus vector writes.
    pub fn value_accesses(&self) -> u64 {
        self.value_reads + self.value_writes
    }
}

/// A simulator stand-in holding named signals and integer parameters.
#[derive(Debug, Default)]
pub struct MemoryHost {
    layout: ChunkEncoding,
    signals: Vec<SimSignalState>,
    by_name: HashMap<String, SimSignalId>,
    params: BTreeMap<String, i64>,
    lookups: Cell<u64>,
    int_reads: Cell<u64>,
    value_reads: Cell<u64>,
    value_writes: u64,
}

impl MemoryHost {
    /// Creates an empty host using the native chunk layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty host with the given chunk layout.
    pub fn with_layout(layout: ChunkEncoding) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    /// Returns the chunk layout this host uses at the `SimHost` boundary.
    pub fn layout(&self) -> ChunkEncoding {
        self.layout
    }

    /// Adds a signal initialized to all-X.
    pub fn add_signal(&mut self, name: &str, width: u32) -> Result<SimSignalId, HostError> {
        if width == 0 {
            return Err(HostError::ZeroWidth(name.to_string()));
        }
        self.insert(SimSignalState::new_unknown(name.to_string(), width))
    }

    /// Adds a signal with an initial value; the width is taken from the value.
    pub fn add_signal_with_value(
        &mut self,
        name: &str,
        value: LogicVec,
    ) -> Result<SimSignalId, HostError> {
        if value.width() == 0 {
            return Err(HostError::ZeroWidth(name.to_string()));
        }
        self.insert(SimSignalState::new(name.to_string(), value))
    }

    fn insert(&mut self, state: SimSignalState) -> Result<SimSignalId, HostError> {
        validate_name(&state.name)?;
        if self.by_name.contains_key(&state.name) {
            return Err(HostError::DuplicateSignal(state.name));
        }
        let id = SimSignalId::from_raw(self.signals.len() as u32);
        self.by_name.insert(state.name.clone(), id);
        self.signals.push(state);
        Ok(id)
    }

    /// Defines or updates a named integer parameter.
    pub fn set_param(&mut self, name: &str, value: i64) -> Result<(), HostError> {
        validate_name(name)?;
        self.params.insert(name.to_string(), value);
        Ok(())
    }

    /// Removes a named integer parameter, returning its value.
    pub fn remove_param(&mut self, name: &str) -> Option<i64> {
        self.params.remove(name)
    }

    /// Finds a signal by its hierarchical name without counting a lookup.
    pub fn find_signal(&self, name: &str) -> Option<SimSignalId> {
        self.by_name.get(name).copied()
    }

    /// Returns the state of a signal.
    pub fn signal(&self, id: SimSignalId) -> &SimSignalState {
        &self.signals[id.as_raw() as usize]
    }

    /// Returns the number of signals.
    pub fn signal_count(&self) -> usize {
        self.signals.len()
    }

    /// Returns the current logical value of a signal.
    pub fn value(&self, name: &str) -> Option<&LogicVec> {
        self.find_signal(name).map(|id| &self.signal(id).value)
    }

    /// Returns a signal's value as chunks in this host's layout.
    pub fn raw_value(&self, name: &str) -> Option<Vec<VecVal>> {
        self.value(name).map(|v| self.encode(v))
    }

    /// Sets a signal from the design side, as a driver inside the simulation would.
    pub fn drive(&mut self, name: &str, value: LogicVec) -> Result<(), HostError> {
        let id = self
            .find_signal(name)
            .ok_or_else(|| HostError::UnknownSignal(name.to_string()))?;
        let state = &mut self.signals[id.as_raw() as usize];
        if state.width != value.width() {
            return Err(HostError::WidthMismatch {
                name: name.to_string(),
                expected: state.width,
                actual: value.width(),
            });
        }
        state.value = value;
        Ok(())
    }

    /// Returns a snapshot of the access counters.
    pub fn stats(&self) -> HostStats {
        HostStats {
            lookups: self.lookups.get(),
            int_reads: self.int_reads.get(),
            value_reads: self.value_reads.get(),
            value_writes: self.value_writes,
        }
    }

    /// Resets all access counters to zero.
    pub fn reset_stats(&mut self) {
        self.lookups.set(0);
        self.int_reads.set(0);
        self.value_reads.set(0);
        self.value_writes = 0;
    }

    fn encode(&self, value: &LogicVec) -> Vec<VecVal> {
        value
            .as_vecvals()
            .iter()
            .map(|c| self.layout.convert(*c))
            .collect()
    }
}

impl SimHost for MemoryHost {
    type Handle = HostHandle;

    fn handle_by_name(&self, path: &str) -> Option<HostHandle> {
        self.lookups.set(self.lookups.get() + 1);
        if let Some(id) = self.find_signal(path) {
            return Some(HostHandle::Signal(id));
        }
        self.params
            .contains_key(path)
            .then(|| HostHandle::Param(path.to_string()))
    }

    fn size(&self, handle: &HostHandle) -> u32 {
        match handle {
            HostHandle::Signal(id) => self.signal(*id).width,
            HostHandle::Param(_) => PARAM_WIDTH,
        }
    }

    fn int_value(&self, handle: &HostHandle) -> i64 {
        self.int_reads.set(self.int_reads.get() + 1);
        match handle {
            HostHandle::Signal(id) => self.signal(*id).value.to_u64().unwrap_or(0) as i64,
            HostHandle::Param(name) => self.params.get(name).copied().unwrap_or(0),
        }
    }

    fn put_vector(&mut self, handle: &HostHandle, value: &[VecVal]) {
        self.value_writes += 1;
        match handle {
            HostHandle::Signal(id) => {
                let layout = self.layout;
                let state = &mut self.signals[id.as_raw() as usize];
                let logical: Vec<VecVal> = value.iter().map(|c| layout.convert(*c)).collect();
                state.value = LogicVec::from_vecvals(state.width, &logical);
                state.deposits += 1;
            }
            HostHandle::Param(name) => {
                log::warn!("ignoring deposit to parameter '{name}'");
            }
        }
    }

    fn get_vector(&self, handle: &HostHandle) -> Cow<'_, [VecVal]> {
        self.value_reads.set(self.value_reads.get() + 1);
        match handle {
            HostHandle::Signal(id) => Cow::Owned(self.encode(&self.signal(*id).value)),
            HostHandle::Param(name) => {
                let v = self.params.get(name).copied().unwrap_or(0);
                let chunk = VecVal::from_u32(v as u32);
                Cow::Owned(vec![self.layout.convert(chunk)])
            }
        }
    }
}

fn validate_name(name: &str) -> Result<(), HostError> {
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        return Err(HostError::InvalidName(name.to_string()));
    }
    Ok(())
}
