//! Counting functions.

use crate::error::EvalError;
use crate::numerical::builtin::{from_integer, integer_arg, Arity, Builtin};
use crate::primitive::int;
use rug::{Complex, Integer};

/// The largest index accepted by [`Fibonacci`] and [`Catalan`].
pub const MAX_INDEX: u32 = 100_000;

/// Converts an index argument to a `u32`, rejecting negative and huge values.
fn index(name: &str, n: &Integer) -> Result<u32, EvalError> {
    if n.is_negative() {
        return Err(EvalError::Domain(format!("`{}` is undefined for negative arguments", name)));
    }
    n.to_u32()
        .filter(|n| *n <= MAX_INDEX)
        .ok_or_else(|| EvalError::Domain(format!("`{}` is limited to arguments of at most {}", name, MAX_INDEX)))
}

/// The binomial coefficient `n choose k`, the number of ways to choose `k` items from `n`.
///
/// `n` can be any integer, including negative ones; `k` must fit in a `u32`. For `k < 0`, the
/// result is zero.
#[derive(Debug)]
pub struct Binomial;

impl Binomial {
    pub fn eval_static(n: &Integer, k: &Integer) -> Result<Integer, EvalError> {
        if k.is_negative() {
            return Ok(int(0));
        }
        match k.to_u32() {
            Some(k) => Ok(int(n.binomial_ref(k))),
            None => Err(EvalError::Domain(String::from("`binomial` argument is too large"))),
        }
    }
}

impl Builtin for Binomial {
    fn name(&self) -> &'static str {
        "binomial"
    }

    fn arity(&self) -> Arity {
        Arity::Exact(2)
    }

    fn eval(&self, args: &[Complex]) -> Result<Complex, EvalError> {
        let n = integer_arg(self.name(), &args[0])?;
        let k = integer_arg(self.name(), &args[1])?;
        Ok(from_integer(Self::eval_static(&n, &k)?))
    }
}

/// The `n`th Fibonacci number, with `fibonacci(0) = 0` and `fibonacci(1) = 1`.
#[derive(Debug)]
pub struct Fibonacci;

impl Fibonacci {
    pub fn eval_static(n: &Integer) -> Result<Integer, EvalError> {
        let n = index("fibonacci", n)?;
        Ok(int(Integer::fibonacci(n)))
    }
}

impl Builtin for Fibonacci {
    fn name(&self) -> &'static str {
        "fibonacci"
    }

    fn arity(&self) -> Arity {
        Arity::Exact(1)
    }

    fn eval(&self, args: &[Complex]) -> Result<Complex, EvalError> {
        let n = integer_arg(self.name(), &args[0])?;
        Ok(from_integer(Self::eval_static(&n)?))
    }
}

/// The `n`th Catalan number, `binomial(2n, n) / (n + 1)`.
#[derive(Debug)]
pub struct Catalan;

impl Catalan {
    pub fn eval_static(n: &Integer) -> Result<Integer, EvalError> {
        let n = index("catalan", n)?;
        let central = int(Integer::binomial_u(2 * n, n));
        Ok(central / (n + 1))
    }
}

impl Builtin for Catalan {
    fn name(&self) -> &'static str {
        "catalan"
    }

    fn arity(&self) -> Arity {
        Arity::Exact(1)
    }

    fn eval(&self, args: &[Complex]) -> Result<Complex, EvalError> {
        let n = integer_arg(self.name(), &args[0])?;
        Ok(from_integer(Self::eval_static(&n)?))
    }
}
