//! Maximum signal width resolution.
//!
//! The bridge refuses to touch signals wider than a fixed limit. The limit
//! defaults to 1024 bits and can be overridden by a named integer value in
//! the host's namespace (by default `uvm_register_pkg::UVM_REGISTER_MAX_WIDTH`).
//! It is resolved once and never re-queried.

use backdoor_common::chunk_count;
use backdoor_config::DEFAULT_MAX_WIDTH;

use crate::error::BackdoorError;
use crate::host::SimHost;

/// Where the effective maximum width came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidthSource {
    /// The built-in or configured default.
    Default,
    /// A named value found in the host namespace.
    HostOverride,
    /// Supplied directly by the embedder.
    Explicit,
}

/// The resolved width limit applied to every read and write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccessLimits {
    max_width: u32,
    source: WidthSource,
}

impl Default for AccessLimits {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            source: WidthSource::Default,
        }
    }
}

impl AccessLimits {
    /// Creates limits with an explicit maximum width.
    pub fn new(max_width: u32) -> Self {
        Self {
            max_width,
            source: WidthSource::Explicit,
        }
    }

    /// Looks up `param` in the host and adopts its value as the maximum width.
    ///
    /// Falls back to `default_max_width` when the name does not resolve or
    /// holds a value outside `0..=u32::MAX`. An override of 0 is adopted, so
    /// every signal of nonzero width is then rejected.
    pub fn resolve<H: SimHost>(host: &H, param: &str, default_max_width: u32) -> Self {
        let fallback = Self {
            max_width: default_max_width,
            source: WidthSource::Default,
        };
        let Some(handle) = host.handle_by_name(param) else {
            log::debug!("'{param}' not found, maximum width is {default_max_width}");
            return fallback;
        };
        let value = host.int_value(&handle);
        // A negative value cannot be a width.
        match u32::try_from(value) {
            Ok(max_width) => {
                log::info!(
                    "lookup of '{param}' successful, setting new maximum width to {max_width}"
                );
                Self {
                    max_width,
                    source: WidthSource::HostOverride,
                }
            }
            Err(_) => {
                log::warn!(
                    "ignoring '{param}' = {value}, keeping maximum width {default_max_width}"
                );
                fallback
            }
        }
    }

    /// Returns the effective maximum width in bits.
    pub fn max_width(&self) -> u32 {
        self.max_width
    }

    /// Returns where the maximum width came from.
    pub fn source(&self) -> WidthSource {
        self.source
    }

    /// Checks a signal width against the limit and returns its chunk count.
    pub fn check(&self, path: &str, width: u32) -> Result<usize, BackdoorError> {
        if width > self.max_width {
            return Err(BackdoorError::WidthExceeded {
                path: path.to_string(),
                width,
                max_width: self.max_width,
            });
        }
        Ok(chunk_count(width))
    }
}
