//! Error types for backdoor signal access.
//!
//! Every failure is a setup problem (wrong path, missing simulator
//! visibility, or a too-small width limit), so none of them is retried.
//! [`BackdoorError::diagnostic`] renders the console text, including
//! remediation hints, that a simulator plugin prints before finishing.

/// Errors that can occur while reading or writing a signal by path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackdoorError {
    /// The path does not name any object visible to the host.
    #[error("unable to locate hdl path '{path}'")]
    PathNotFound {
        /// The hierarchical path that failed to resolve.
        path: String,
    },

    /// The signal is wider than the resolved maximum width.
    #[error("hdl path '{path}' is {width} bits, but the maximum size is {max_width}")]
    WidthExceeded {
        /// The hierarchical path of the signal.
        path: String,
        /// The signal width reported by the host.
        width: u32,
        /// The resolved maximum width.
        max_width: u32,
    },

    /// The caller's chunk buffer cannot hold the signal.
    #[error("buffer for hdl path '{path}' holds {provided} chunks, but {needed} are required")]
    BufferTooShort {
        /// The hierarchical path of the signal.
        path: String,
        /// Chunks required for the signal width.
        needed: usize,
        /// Chunks supplied by the caller.
        provided: usize,
    },
}

impl BackdoorError {
    /// Returns the path the failed operation was addressed to.
    pub fn path(&self) -> &str {
        match self {
            BackdoorError::PathNotFound { path }
            | BackdoorError::WidthExceeded { path, .. }
            | BackdoorError::BufferTooShort { path, .. } => path,
        }
    }

    /// Renders the fatal console message with remediation hints.
    pub fn diagnostic(&self) -> String {
        match self {
            BackdoorError::PathNotFound { path } => format!(
                "FATAL backdoor : unable to locate hdl path ({path})\n \
                 Either the name is incorrect, or you may not have PLI visibility to that name\n \
                 To gain PLI visibility, make sure you use +acc=rmb when you invoke vlog\n   \
                 vlog +acc=rmb ....\n"
            ),
            BackdoorError::WidthExceeded {
                path,
                width,
                max_width,
            } => format!(
                "FATAL backdoor : hdl path '{path}' is {width} bits,\n \
                 but the maximum size is {max_width}, redefine using a compile\n \
                 flag. i.e. vlog ... +define+UVM_REGISTER_MAX_WIDTH=<value>\n"
            ),
            BackdoorError::BufferTooShort {
                path,
                needed,
                provided,
            } => format!(
                "FATAL backdoor : hdl path '{path}' needs {needed} 32-bit chunks,\n \
                 but the caller supplied {provided}. Size the value buffer for the full signal width.\n"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_not_found_display() {
        let e = BackdoorError::PathNotFound {
            path: "top.dut.missing".into(),
        };
        assert_eq!(e.to_string(), "unable to locate hdl path 'top.dut.missing'");
        assert_eq!(e.path(), "top.dut.missing");
    }

    #[test]
    fn width_exceeded_display() {
        let e = BackdoorError::WidthExceeded {
            path: "top.mem".into(),
            width: 2048,
            max_width: 1024,
        };
        assert_eq!(
            e.to_string(),
            "hdl path 'top.mem' is 2048 bits, but the maximum size is 1024"
        );
    }

    #[test]
    fn buffer_too_short_display() {
        let e = BackdoorError::BufferTooShort {
            path: "top.wide".into(),
            needed: 3,
            provided: 1,
        };
        assert_eq!(
            e.to_string(),
            "buffer for hdl path 'top.wide' holds 1 chunks, but 3 are required"
        );
    }

    #[test]
    fn path_not_found_diagnostic_has_visibility_hint() {
        let e = BackdoorError::PathNotFound {
            path: "top.x".into(),
        };
        let text = e.diagnostic();
        assert!(text.starts_with("FATAL backdoor : unable to locate hdl path (top.x)"));
        assert!(text.contains("PLI visibility"));
        assert!(text.contains("vlog +acc=rmb"));
    }

    #[test]
    fn width_exceeded_diagnostic_has_redefine_hint() {
        let e = BackdoorError::WidthExceeded {
            path: "top.mem".into(),
            width: 4096,
            max_width: 1024,
        };
        let text = e.diagnostic();
        assert!(text.contains("'top.mem' is 4096 bits"));
        assert!(text.contains("maximum size is 1024"));
        assert!(text.contains("+define+UVM_REGISTER_MAX_WIDTH=<value>"));
    }
}
