//! Host → native argument marshalling.
//!
//! A host call arrives as positional slots. A slot is `None` when the host
//! value was `undefined`/`null` or the caller never supplied it. Slots are kept
//! as given, so an absent operand is reported by its position wherever it is.

use smallvec::SmallVec;

use crate::config::Coercion;
use crate::errors::ArgumentError;

const TWO_POW_32: f64 = 4_294_967_296.0;

/// Positional arguments of one host call.
#[derive(Debug, Clone, PartialEq)]
pub struct CallArgs {
    function: &'static str,
    slots: SmallVec<[Option<f64>; 2]>,
}

impl CallArgs {
    pub fn new<I>(function: &'static str, slots: I) -> Self
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        Self {
            function,
            slots: slots.into_iter().collect(),
        }
    }

    pub fn function(&self) -> &'static str {
        self.function
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Fail unless at least `expected` slots were supplied.
    ///
    /// Extra arguments are allowed and ignored.
    pub fn require_arity(&self, expected: usize) -> Result<(), ArgumentError> {
        if self.slots.len() < expected {
            return Err(ArgumentError::ArityMismatch {
                function: self.function,
                expected,
                received: self.slots.len(),
            });
        }
        Ok(())
    }

    /// Extract slot `index` as an `i32`.
    pub fn int32(&self, index: usize, coercion: Coercion) -> Result<i32, ArgumentError> {
        let value = self
            .slots
            .get(index)
            .copied()
            .flatten()
            .ok_or(ArgumentError::Missing {
                function: self.function,
                index,
            })?;

        match coercion {
            Coercion::Int32 => Ok(to_int32(value)),
            Coercion::Strict => to_int32_strict(value).ok_or(ArgumentError::NotInt32 {
                function: self.function,
                index,
                value,
            }),
        }
    }
}

/// ECMAScript `ToInt32`, as applied by `napi_get_value_int32`.
pub fn to_int32(value: f64) -> i32 {
    if !value.is_finite() {
        return 0;
    }
    let wrapped = value.trunc().rem_euclid(TWO_POW_32);
    wrapped as u32 as i32
}

/// Exact conversion: `None` for fractional, non-finite, or out-of-range values.
pub fn to_int32_strict(value: f64) -> Option<i32> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if value < i32::MIN as f64 || value > i32::MAX as f64 {
        return None;
    }
    Some(value as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(slots: &[Option<f64>]) -> CallArgs {
        CallArgs::new("addNumbers", slots.iter().copied())
    }

    #[test]
    fn test_slots_kept_as_given() {
        assert_eq!(args(&[Some(1.0), None]).len(), 2);
        assert_eq!(args(&[None, Some(2.0)]).len(), 2);
        assert!(args(&[]).is_empty());
    }

    #[test]
    fn test_arity_mismatch() {
        let err = args(&[Some(1.0)]).require_arity(2).unwrap_err();
        assert_eq!(
            err,
            ArgumentError::ArityMismatch {
                function: "addNumbers",
                expected: 2,
                received: 1,
            }
        );
        assert_eq!(err.to_string(), "addNumbers() expects 2 arguments, received 1");
    }

    #[test]
    fn test_extra_arguments_allowed() {
        assert!(args(&[Some(1.0), Some(2.0), Some(3.0)]).require_arity(2).is_ok());
    }

    #[test]
    fn test_trailing_hole_is_missing() {
        let call = args(&[Some(1.0), None]);
        assert!(call.require_arity(2).is_ok());
        assert_eq!(
            call.int32(1, Coercion::Int32),
            Err(ArgumentError::Missing {
                function: "addNumbers",
                index: 1,
            })
        );
    }

    #[test]
    fn test_hole_is_missing() {
        let call = args(&[None, Some(2.0)]);
        assert!(call.require_arity(2).is_ok());
        assert_eq!(
            call.int32(0, Coercion::Int32),
            Err(ArgumentError::Missing {
                function: "addNumbers",
                index: 0,
            })
        );
        assert_eq!(call.int32(1, Coercion::Int32), Ok(2));
    }

    #[test]
    fn test_to_int32_truncates_toward_zero() {
        assert_eq!(to_int32(1.9), 1);
        assert_eq!(to_int32(-1.9), -1);
        assert_eq!(to_int32(-0.0), 0);
    }

    #[test]
    fn test_to_int32_wraps() {
        assert_eq!(to_int32(TWO_POW_32 + 5.0), 5);
        assert_eq!(to_int32(2_147_483_648.0), i32::MIN);
        assert_eq!(to_int32(-2_147_483_649.0), i32::MAX);
        assert_eq!(to_int32(1e20), 1_661_992_960);
    }

    #[test]
    fn test_to_int32_non_finite_is_zero() {
        assert_eq!(to_int32(f64::NAN), 0);
        assert_eq!(to_int32(f64::INFINITY), 0);
        assert_eq!(to_int32(f64::NEG_INFINITY), 0);
    }

    #[test]
    fn test_strict_rejects_inexact() {
        assert_eq!(to_int32_strict(42.0), Some(42));
        assert_eq!(to_int32_strict(i32::MIN as f64), Some(i32::MIN));
        assert_eq!(to_int32_strict(1.5), None);
        assert_eq!(to_int32_strict(TWO_POW_32 + 5.0), None);
        assert_eq!(to_int32_strict(f64::NAN), None);

        let err = args(&[Some(1.5), Some(1.0)]).int32(0, Coercion::Strict).unwrap_err();
        assert!(matches!(err, ArgumentError::NotInt32 { index: 0, .. }));
    }
}
