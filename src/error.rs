//! Error types for the workload driver
//!
//! Cache operations are infallible; only configuration can fail.

use thiserror::Error;

// == Config Error Enum ==
/// Errors raised while loading or validating a [`crate::Config`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable is set but cannot be parsed
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue {
        /// Name of the environment variable
        var: &'static str,
        /// The raw value that failed to parse
        value: String,
    },

    /// A setting parsed but is outside its allowed range
    #[error("Invalid {field}: {reason}")]
    OutOfRange {
        /// Name of the offending field
        field: &'static str,
        /// What the field must satisfy
        reason: &'static str,
    },
}

// == Result Type Alias ==
/// Convenience Result type for configuration loading.
pub type Result<T> = std::result::Result<T, ConfigError>;
