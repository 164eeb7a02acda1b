//! Error types for building and driving the in-memory host.
//!
//! All errors that can occur while populating a [`MemoryHost`](crate::MemoryHost)
//! or depositing host-side values are represented as variants of [`HostError`].

/// Errors that can occur while populating or driving the host.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    /// A signal or parameter name is empty or contains whitespace.
    #[error("invalid hierarchical name '{0}'")]
    InvalidName(String),

    /// A signal with the same name already exists.
    #[error("signal '{0}' is already defined")]
    DuplicateSignal(String),

    /// Signals must be at least one bit wide.
    #[error("signal '{0}' has zero width")]
    ZeroWidth(String),

    /// No signal with this name exists.
    #[error("signal '{0}' not found")]
    UnknownSignal(String),

    /// A deposited value does not match the signal width.
    #[error("width mismatch for '{name}': signal is {expected} bits, value is {actual} bits")]
    WidthMismatch {
        /// The signal name.
        name: String,
        /// The signal width.
        expected: u32,
        /// The width of the rejected value.
        actual: u32,
    },
}
