//! The [`Builtin`] trait, implemented by every function that can be numerically evaluated.

use crate::error::EvalError;
use crate::primitive::float;
use rug::{Complex, Float, Integer};
use std::fmt::{self, Debug};

/// The number of arguments a builtin function accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many arguments.
    Exact(usize),

    /// Any number of arguments in this inclusive range.
    Between(usize, usize),
}

impl Arity {
    /// Returns true if a call with `count` arguments is valid.
    pub fn accepts(&self, count: usize) -> bool {
        match *self {
            Self::Exact(n) => count == n,
            Self::Between(min, max) => (min..=max).contains(&count),
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{}", n),
            Self::Between(min, max) if max - min == 1 => write!(f, "{} or {}", min, max),
            Self::Between(min, max) => write!(f, "{} to {}", min, max),
        }
    }
}

/// A function that can be called with numeric arguments.
pub trait Builtin: Debug + Send + Sync {
    /// The name of the function.
    fn name(&self) -> &'static str;

    /// The number of arguments the function accepts.
    fn arity(&self) -> Arity;

    /// Evaluates the function. The number of arguments has already been checked.
    fn eval(&self, args: &[Complex]) -> Result<Complex, EvalError>;

    /// Checks the number of arguments, then evaluates the function.
    fn call(&self, args: &[Complex]) -> Result<Complex, EvalError> {
        let arity = self.arity();
        if !arity.accepts(args.len()) {
            return Err(EvalError::WrongArgumentCount {
                name: self.name().to_string(),
                expected: arity.to_string(),
                given: args.len(),
            });
        }
        self.eval(args)
    }
}

/// Returns true if the imaginary part of the value is zero.
pub(crate) fn is_real(value: &Complex) -> bool {
    value.imag().is_zero()
}

/// Extracts a real argument, failing with a domain error if it has an imaginary part.
pub(crate) fn real_arg(name: &str, arg: &Complex) -> Result<Float, EvalError> {
    if is_real(arg) {
        Ok(arg.real().clone())
    } else {
        Err(EvalError::Domain(format!("`{}` expects real arguments", name)))
    }
}

/// Extracts an integer argument, failing with a domain error if the argument is not an integer.
pub(crate) fn integer_arg(name: &str, arg: &Complex) -> Result<Integer, EvalError> {
    let real = real_arg(name, arg)?;
    match real.is_integer().then(|| real.to_integer()).flatten() {
        Some(int) => Ok(int),
        None => Err(EvalError::Domain(format!("`{}` expects integer arguments", name))),
    }
}

/// Converts an integer result into a [`Complex`].
pub(crate) fn from_integer(n: Integer) -> Complex {
    crate::primitive::complex(float(n))
}

#[cfg(test)]
mod tests {
    use crate::primitive::complex;
    use super::*;

    #[test]
    fn arity_text() {
        assert_eq!(Arity::Exact(1).to_string(), "1");
        assert_eq!(Arity::Between(1, 2).to_string(), "1 or 2");
        assert!(Arity::Between(1, 2).accepts(2));
        assert!(!Arity::Exact(2).accepts(3));
    }

    #[test]
    fn integer_arguments() {
        assert_eq!(integer_arg("gcd", &complex(12)).unwrap(), 12);
        assert!(integer_arg("gcd", &complex(1.5)).is_err());
        assert!(integer_arg("gcd", &complex((1, 1))).is_err());
    }
}
