//! Error types for configuration loading and validation.

/// Errors that can occur when loading or validating a `backdoor.toml` configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading the configuration file.
    #[error("failed to read configuration: {0}")]
    IoError(#[from] std::io::Error),

    /// The TOML content could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ParseError(String),

    /// A configuration value failed validation.
    #[error("validation error: {0}")]
    ValidationError(String),

    /// An environment variable override held an unusable value.
    #[error("invalid value for {var}: {reason}")]
    InvalidEnv {
        /// The environment variable name.
        var: String,
        /// Why the value was rejected.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_parse_error() {
        let err = ConfigError::ParseError("expected '=' at line 3".to_string());
        assert_eq!(
            format!("{err}"),
            "failed to parse configuration: expected '=' at line 3"
        );
    }

    #[test]
    fn display_validation_error() {
        let err = ConfigError::ValidationError("bridge.default_max_width must be positive".into());
        assert_eq!(
            format!("{err}"),
            "validation error: bridge.default_max_width must be positive"
        );
    }

    #[test]
    fn display_invalid_env() {
        let err = ConfigError::InvalidEnv {
            var: "HDL_BACKDOOR_ENCODING".into(),
            reason: "unknown chunk encoding 'nc'".into(),
        };
        assert_eq!(
            format!("{err}"),
            "invalid value for HDL_BACKDOOR_ENCODING: unknown chunk encoding 'nc'"
        );
    }

    #[test]
    fn display_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = ConfigError::IoError(io_err);
        let display = format!("{err}");
        assert!(display.starts_with("failed to read configuration:"));
    }
}
