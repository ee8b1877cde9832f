//! # balda-napi
//!
//! NAPI-RS v3 bindings for the balda addon. Exposes a single function,
//! `addNumbers`, to Node.js.
//!
//! Architecture:
//! - `runtime`: `BaldaRuntime` singleton via `OnceLock` (config + tracing, set up on first call)
//! - `conversions`: error code mapping from core errors to `napi::Error`
//! - `bindings`: NAPI-exported functions

pub mod bindings;
pub mod conversions;
pub mod runtime;
