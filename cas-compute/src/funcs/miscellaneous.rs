//! Miscellaneous functions: absolute value, rounding, and the factorial.

use crate::error::EvalError;
use crate::numerical::builtin::{from_integer, integer_arg, real_arg, Arity, Builtin};
use crate::primitive::{complex, int};
use rug::{Complex, Integer};

/// The largest argument accepted by [`Factorial`]. Larger factorials have hundreds of thousands of
/// digits, and are never useful.
pub const MAX_FACTORIAL: u32 = 10_000;

/// The absolute value of a number. For complex numbers, this is the magnitude.
#[derive(Debug)]
pub struct Abs;

impl Abs {
    pub fn eval_static(n: Complex) -> Complex {
        complex(n.abs().real())
    }
}

impl Builtin for Abs {
    fn name(&self) -> &'static str {
        "Abs"
    }

    fn arity(&self) -> Arity {
        Arity::Exact(1)
    }

    fn eval(&self, args: &[Complex]) -> Result<Complex, EvalError> {
        Ok(Self::eval_static(args[0].clone()))
    }
}

/// The lowercase spelling of [`Abs`].
#[derive(Debug)]
pub struct AbsLower;

impl Builtin for AbsLower {
    fn name(&self) -> &'static str {
        "abs"
    }

    fn arity(&self) -> Arity {
        Arity::Exact(1)
    }

    fn eval(&self, args: &[Complex]) -> Result<Complex, EvalError> {
        Ok(Abs::eval_static(args[0].clone()))
    }
}

/// Rounds a real number down.
#[derive(Debug)]
pub struct Floor;

impl Builtin for Floor {
    fn name(&self) -> &'static str {
        "floor"
    }

    fn arity(&self) -> Arity {
        Arity::Exact(1)
    }

    fn eval(&self, args: &[Complex]) -> Result<Complex, EvalError> {
        Ok(complex(real_arg(self.name(), &args[0])?.floor()))
    }
}

/// Rounds a real number up.
#[derive(Debug)]
pub struct Ceiling;

impl Builtin for Ceiling {
    fn name(&self) -> &'static str {
        "ceiling"
    }

    fn arity(&self) -> Arity {
        Arity::Exact(1)
    }

    fn eval(&self, args: &[Complex]) -> Result<Complex, EvalError> {
        Ok(complex(real_arg(self.name(), &args[0])?.ceil()))
    }
}

/// The factorial of a non-negative integer.
#[derive(Debug)]
pub struct Factorial;

impl Factorial {
    pub fn eval_static(n: &Integer) -> Result<Integer, EvalError> {
        if n.is_negative() {
            return Err(EvalError::Domain(String::from("the factorial of a negative number is undefined")));
        }

        match n.to_u32().filter(|n| *n <= MAX_FACTORIAL) {
            Some(n) => Ok(int(Integer::factorial(n))),
            None => Err(EvalError::Domain(format!(
                "`factorial` is limited to arguments of at most {}",
                MAX_FACTORIAL,
            ))),
        }
    }
}

impl Builtin for Factorial {
    fn name(&self) -> &'static str {
        "factorial"
    }

    fn arity(&self) -> Arity {
        Arity::Exact(1)
    }

    fn eval(&self, args: &[Complex]) -> Result<Complex, EvalError> {
        let n = integer_arg(self.name(), &args[0])?;
        Ok(from_integer(Self::eval_static(&n)?))
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use super::*;

    #[test]
    fn factorials() {
        assert_eq!(Factorial::eval_static(&int(0)).unwrap(), 1);
        assert_eq!(Factorial::eval_static(&int(10)).unwrap(), 3_628_800);
        assert!(Factorial::eval_static(&int(-1)).is_err());
        assert!(Factorial::eval_static(&int(1_000_000)).is_err());
    }

    #[test]
    fn factorial_rejects_fractions() {
        assert!(Factorial.call(&[complex(2.5)]).is_err());
    }

    #[test]
    fn magnitude_of_complex() {
        let result = AbsLower.call(&[complex((3, 4))]).unwrap();
        assert_float_absolute_eq!(result.real().to_f64(), 5.0);
        assert_float_absolute_eq!(result.imag().to_f64(), 0.0);
    }

    #[test]
    fn rounding() {
        assert_eq!(Floor.call(&[complex(-2.5)]).unwrap().real().to_f64(), -3.0);
        assert_eq!(Ceiling.call(&[complex(2.1)]).unwrap().real().to_f64(), 3.0);
    }
}
