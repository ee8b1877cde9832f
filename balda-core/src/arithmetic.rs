//! 32-bit integer addition.

use crate::config::OverflowPolicy;
use crate::errors::ArithmeticError;

/// Add two `i32`s under the given overflow policy.
pub fn add(lhs: i32, rhs: i32, policy: OverflowPolicy) -> Result<i32, ArithmeticError> {
    match policy {
        OverflowPolicy::Wrapping => Ok(lhs.wrapping_add(rhs)),
        OverflowPolicy::Checked => lhs
            .checked_add(rhs)
            .ok_or(ArithmeticError::Overflow { lhs, rhs }),
    }
}
