//! Error types for neat-series

use thiserror::Error;

/// Result type for neat-series operations
pub type Result<T> = std::result::Result<T, CleanError>;

/// Errors raised while cleaning a series
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CleanError {
    /// Digit-stripped text could not be cast to the target numeric type
    #[error("cannot convert {value:?} at position {position} to {target}: {reason}")]
    Conversion {
        position: usize,
        value: String,
        target: &'static str,
        reason: String,
    },

    /// Element is missing or not text
    #[error("element at position {position} is not text")]
    InputType { position: usize },

    /// Index and values differ in length
    #[error("index has {index} labels but series has {values} values")]
    IndexLength { index: usize, values: usize },

    /// Unrecognised numeric type name
    #[error("unknown numeric type: {0}")]
    UnknownNumericKind(String),
}
