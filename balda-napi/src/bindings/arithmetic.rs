//! `addNumbers(a, b)` binding.
//!
//! This is the module's only export. napi-rs generates the module initializer
//! from the attribute: on load it creates the JS function and sets it on
//! `exports` under `addNumbers`, throwing and aborting the load if either
//! step fails. Arguments arrive as optional numbers so that missing operands
//! reach the core marshalling layer instead of failing inside the generated
//! conversion.

use balda_core::ADD_NUMBERS;
use napi_derive::napi;

use crate::conversions::error_codes;
use crate::runtime;

/// Add two 32-bit integers.
///
/// Values are converted with `napi_get_value_int32` semantics unless the
/// runtime config selects strict coercion. The sum wraps on overflow unless
/// the config selects checked arithmetic.
///
/// @param a - First operand.
/// @param b - Second operand.
/// @throws INVALID_ARGUMENT if an operand is missing, `undefined` or `null`. The
/// error names the operand's position, so `addNumbers(1)` and
/// `addNumbers(1, null)` both report argument 1.
/// @throws OVERFLOW if checked arithmetic is configured and the sum overflows.
#[napi(js_name = "addNumbers")]
pub fn add_numbers(a: Option<f64>, b: Option<f64>) -> napi::Result<i32> {
    let rt = runtime::get()?;
    ADD_NUMBERS.invoke([a, b], &rt.config).map_err(|e| {
        tracing::debug!(export = ADD_NUMBERS.name(), error = %e, "call rejected");
        error_codes::call_error(e)
    })
}
