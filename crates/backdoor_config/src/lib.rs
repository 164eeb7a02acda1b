//! Parsing and validation of `backdoor.toml` bridge configuration files.
//!
//! This crate reads the optional configuration file and produces a
//! strongly-typed [`BackdoorConfig`] carrying the chunk encoding, the
//! maximum-width defaults, and the log level for the simulator plugin.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{
    apply_env_overrides, load_config, load_config_from_path, load_config_from_str,
    load_config_or_default, CONFIG_ENV, CONFIG_FILE_NAME, ENCODING_ENV,
};
pub use types::*;
