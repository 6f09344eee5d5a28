//! General trigonometric and hyperbolic trigonometric functions. All angles are in radians.

use crate::error::EvalError;
use crate::numerical::builtin::{Arity, Builtin};
use rug::Complex;

/// Build a function that takes in a single complex argument.
macro_rules! build_unary {
    ($($name:literal $upname:ident; $func:expr),* $(,)?) => {
        $(
            #[derive(Debug)]
            pub struct $upname;

            impl $upname {
                pub fn eval_static(n: Complex) -> Complex {
                    // NOTE: the closure call is contained within the macro, so we allow
                    // the clippy::redundant_closure_call lint
                    #[allow(clippy::redundant_closure_call)]
                    ($func)(n)
                }
            }

            impl Builtin for $upname {
                fn name(&self) -> &'static str {
                    $name
                }

                fn arity(&self) -> Arity {
                    Arity::Exact(1)
                }

                fn eval(&self, args: &[Complex]) -> Result<Complex, EvalError> {
                    Ok(Self::eval_static(args[0].clone()))
                }
            }
        )*
    };
}

pub(crate) use build_unary;

build_unary! {
    "sin" Sin; Complex::sin,
    "cos" Cos; Complex::cos,
    "tan" Tan; Complex::tan,
    "cot" Cot; |n: Complex| n.tan().recip(),
    "sec" Sec; |n: Complex| n.cos().recip(),
    "csc" Csc; |n: Complex| n.sin().recip(),
    "asin" Asin; Complex::asin,
    "acos" Acos; Complex::acos,
    "atan" Atan; Complex::atan,
    "sinh" Sinh; Complex::sinh,
    "cosh" Cosh; Complex::cosh,
    "tanh" Tanh; Complex::tanh,
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use crate::consts::PI;
    use crate::primitive::complex;
    use super::*;

    #[test]
    fn sin_of_half_pi() {
        let result = Sin::eval_static(complex(&*PI) / 2);
        assert_float_absolute_eq!(result.real().to_f64(), 1.0);
        assert_float_absolute_eq!(result.imag().to_f64(), 0.0);
    }

    #[test]
    fn reciprocal_functions() {
        let x = complex(0.7);
        let sec = Sec.call(&[x.clone()]).unwrap();
        let cos = Cos.call(&[x]).unwrap();
        assert_float_absolute_eq!(sec.real().to_f64(), 1.0 / cos.real().to_f64());
    }

    #[test]
    fn wrong_argument_count() {
        let err = Tan.call(&[complex(1), complex(2)]).unwrap_err();
        assert_eq!(err.to_string(), "`tan` takes 1 argument(s), but 2 were given");
    }
}
