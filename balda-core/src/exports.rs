//! Exported callables.
//!
//! A [`Callable`] pairs the JS-visible name and arity of an export with its
//! native handler. The NAPI layer registers `addNumbers` on `exports` when
//! the module loads and forwards every call to [`ADD_NUMBERS`].

use crate::args::CallArgs;
use crate::arithmetic;
use crate::config::BaldaConfig;
use crate::errors::CallError;

/// Native entry point of an exported callable.
pub type Handler = fn(&CallArgs, &BaldaConfig) -> Result<i32, CallError>;

/// A named native function with a fixed arity.
#[derive(Debug)]
pub struct Callable {
    name: &'static str,
    arity: usize,
    handler: Handler,
}

impl Callable {
    pub const fn new(name: &'static str, arity: usize, handler: Handler) -> Self {
        Self {
            name,
            arity,
            handler,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Validate arity, then run the handler on the given argument slots.
    pub fn invoke<I>(&self, slots: I, config: &BaldaConfig) -> Result<i32, CallError>
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        let args = CallArgs::new(self.name, slots);
        args.require_arity(self.arity)?;
        (self.handler)(&args, config)
    }
}

/// `addNumbers(a, b)`: the sum of two 32-bit integers.
pub static ADD_NUMBERS: Callable = Callable::new("addNumbers", 2, add_numbers);

fn add_numbers(args: &CallArgs, config: &BaldaConfig) -> Result<i32, CallError> {
    let coercion = config.arguments.coercion;
    let a = args.int32(0, coercion)?;
    let b = args.int32(1, coercion)?;
    Ok(arithmetic::add(a, b, config.arithmetic.overflow)?)
}
