//! # balda-core
//!
//! Host-agnostic core of the balda addon: argument marshalling, 32-bit
//! addition, and the exported callable, plus errors, configuration, and
//! tracing setup shared with the NAPI layer.

pub mod args;
pub mod arithmetic;
pub mod config;
pub mod errors;
pub mod exports;
pub mod telemetry;

pub use args::CallArgs;
pub use config::BaldaConfig;
pub use exports::{Callable, ADD_NUMBERS};
