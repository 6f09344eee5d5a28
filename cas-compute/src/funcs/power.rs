//! Exponential, logarithmic, and root functions.

use crate::error::EvalError;
use crate::numerical::builtin::{Arity, Builtin};
use crate::primitive::complex;
use rug::{ops::Pow, Complex};
use super::trigonometry::build_unary;

build_unary! {
    "exp" Exp; Complex::exp,
    "ln" Ln; Complex::ln,
    "sqrt" Sqrt; Complex::sqrt,
    "cbrt" Cbrt; |n: Complex| n.pow(complex(1) / 3),
}

/// The logarithm of a number, with an optional base. If the base is omitted, the natural
/// logarithm is returned.
#[derive(Debug)]
pub struct Log;

impl Log {
    pub fn eval_static(n: Complex, base: Option<Complex>) -> Complex {
        match base {
            Some(base) => n.ln() / base.ln(),
            None => n.ln(),
        }
    }
}

impl Builtin for Log {
    fn name(&self) -> &'static str {
        "log"
    }

    fn arity(&self) -> Arity {
        Arity::Between(1, 2)
    }

    fn eval(&self, args: &[Complex]) -> Result<Complex, EvalError> {
        if args[0].is_zero() {
            return Err(EvalError::Domain(String::from("the logarithm of zero is undefined")));
        }
        Ok(Self::eval_static(args[0].clone(), args.get(1).cloned()))
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use crate::consts::E;
    use super::*;

    #[test]
    fn logarithm_with_base() {
        let result = Log.call(&[complex(8), complex(2)]).unwrap();
        assert_float_absolute_eq!(result.real().to_f64(), 3.0);
    }

    #[test]
    fn natural_logarithm_of_e() {
        let result = Log.call(&[complex(&*E)]).unwrap();
        assert_float_absolute_eq!(result.real().to_f64(), 1.0);
    }

    #[test]
    fn logarithm_of_zero() {
        assert!(Log.call(&[complex(0)]).is_err());
    }

    #[test]
    fn square_root_of_negative() {
        let result = Sqrt::eval_static(complex(-4));
        assert_float_absolute_eq!(result.real().to_f64(), 0.0);
        assert_float_absolute_eq!(result.imag().to_f64(), 2.0);
    }

    #[test]
    fn cube_root() {
        let result = Cbrt::eval_static(complex(27));
        assert_float_absolute_eq!(result.real().to_f64(), 3.0, 1e-12);
    }
}
