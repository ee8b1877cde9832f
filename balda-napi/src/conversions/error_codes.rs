//! Error codes surfaced to JavaScript.
//!
//! Every error crossing the NAPI boundary carries a `[CODE]` prefix in its
//! message so TypeScript callers can match on it without parsing prose.

use balda_core::errors::{CallError, ConfigError};
use napi::Status;

pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
pub const OVERFLOW: &str = "OVERFLOW";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";

/// Map a failed call to a thrown JS error.
///
/// Argument errors keep `Status::InvalidArg` so the JS `code` is `"InvalidArg"`.
pub fn call_error(err: CallError) -> napi::Error {
    match err {
        CallError::Argument(e) => {
            napi::Error::new(Status::InvalidArg, format!("[{INVALID_ARGUMENT}] {e}"))
        }
        CallError::Arithmetic(e) => napi::Error::from_reason(format!("[{OVERFLOW}] {e}")),
    }
}

pub fn config_error(err: ConfigError) -> napi::Error {
    napi::Error::from_reason(format!("[{CONFIG_ERROR}] {err}"))
}
