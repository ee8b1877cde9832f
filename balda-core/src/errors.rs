//! Error types for argument marshalling, arithmetic, and config.

use std::path::PathBuf;

/// Failure to turn host call arguments into native values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ArgumentError {
    #[error("{function}() expects {expected} arguments, received {received}")]
    ArityMismatch {
        function: &'static str,
        expected: usize,
        received: usize,
    },

    #[error("{function}() argument {index} is missing")]
    Missing { function: &'static str, index: usize },

    #[error("{function}() argument {index} is not a 32-bit integer: {value}")]
    NotInt32 {
        function: &'static str,
        index: usize,
        value: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArithmeticError {
    #[error("integer overflow: {lhs} + {rhs} does not fit in 32 bits")]
    Overflow { lhs: i32, rhs: i32 },
}

/// Any failure raised while invoking an exported callable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CallError {
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {message}")]
    Parse { message: String },
}
