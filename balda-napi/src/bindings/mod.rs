//! NAPI-exported functions.

pub mod arithmetic;
