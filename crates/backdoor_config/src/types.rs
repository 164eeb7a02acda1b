//! Configuration types deserialized from `backdoor.toml`.

use backdoor_common::ChunkEncoding;
use serde::Deserialize;

/// Maximum signal width used when the host does not define an override.
pub const DEFAULT_MAX_WIDTH: u32 = 1024;

/// Host-side name of the value that overrides the maximum signal width.
pub const DEFAULT_MAX_WIDTH_PARAM: &str = "uvm_register_pkg::UVM_REGISTER_MAX_WIDTH";

/// The top-level configuration parsed from `backdoor.toml`.
///
/// Every table is optional; an empty file yields [`BackdoorConfig::default`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BackdoorConfig {
    /// Signal bridge settings.
    #[serde(default)]
    pub bridge: BridgeConfig,
    /// Diagnostic log settings.
    #[serde(default)]
    pub log: LogConfig,
}

/// Settings for the signal bridge.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BridgeConfig {
    /// How the host lays out `aval`/`bval` relative to the testbench.
    #[serde(default)]
    pub encoding: ChunkEncoding,
    /// Width limit used when the host has no override value.
    #[serde(default = "default_max_width")]
    pub default_max_width: u32,
    /// Hierarchical name of the host value overriding the width limit.
    #[serde(default = "default_max_width_param")]
    pub max_width_param: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            encoding: ChunkEncoding::default(),
            default_max_width: DEFAULT_MAX_WIDTH,
            max_width_param: DEFAULT_MAX_WIDTH_PARAM.to_string(),
        }
    }
}

fn default_max_width() -> u32 {
    DEFAULT_MAX_WIDTH
}

fn default_max_width_param() -> String {
    DEFAULT_MAX_WIDTH_PARAM.to_string()
}

/// Diagnostic log settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LogConfig {
    /// Most verbose level forwarded to the simulator console.
    #[serde(default)]
    pub level: LogLevel,
}

/// Log verbosity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// No log output.
    Off,
    /// Errors only.
    Error,
    /// Warnings and errors.
    #[default]
    Warn,
    /// Informational messages such as an adopted width override.
    Info,
    /// Debug output.
    Debug,
    /// Every backdoor access.
    Trace,
}

impl LogLevel {
    /// Converts to the `log` crate's filter.
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}
