//! Number theory functions: divisibility, modular arithmetic, and prime factorization.

use crate::error::EvalError;
use crate::numerical::builtin::{from_integer, integer_arg, is_real, real_arg, Arity, Builtin};
use crate::primitive::{complex, int};
use rug::{integer::IsPrime, ops::Pow, Complex, Integer};

/// Trial division stops after this many candidate divisors.
const MAX_TRIAL_DIVISOR: u32 = 1_000_000;

/// Returns the prime factorization of a positive integer as `(prime, multiplicity)` pairs, in
/// increasing order of the primes.
///
/// Returns [`None`] if `n` is not positive, or if `n` has a composite cofactor too large to split
/// by trial division.
pub fn prime_factorization(mut n: Integer) -> Option<Vec<(Integer, u32)>> {
    if n.cmp0().is_le() {
        return None;
    }

    let mut factors = Vec::new();
    let mut divisor = 2u32;
    while divisor <= MAX_TRIAL_DIVISOR {
        if n == 1 {
            return Some(factors);
        }
        if int(divisor).square() > n {
            factors.push((n, 1));
            return Some(factors);
        }

        let mut count = 0;
        while n.is_divisible_u(divisor) {
            n /= divisor;
            count += 1;
        }
        if count > 0 {
            factors.push((int(divisor), count));
        }

        divisor += if divisor == 2 { 1 } else { 2 };
    }

    if n == 1 {
        Some(factors)
    } else if n.is_probably_prime(30) != IsPrime::No {
        factors.push((n, 1));
        Some(factors)
    } else {
        None
    }
}

/// Extracts every argument as an integer.
fn integer_args(name: &str, args: &[Complex]) -> Result<Vec<Integer>, EvalError> {
    args.iter().map(|arg| integer_arg(name, arg)).collect()
}

/// The greatest common divisor of two integers.
#[derive(Debug)]
pub struct Gcd;

impl Gcd {
    pub fn eval_static(a: &Integer, b: &Integer) -> Integer {
        int(a.gcd_ref(b))
    }
}

impl Builtin for Gcd {
    fn name(&self) -> &'static str {
        "gcd"
    }

    fn arity(&self) -> Arity {
        Arity::Exact(2)
    }

    fn eval(&self, args: &[Complex]) -> Result<Complex, EvalError> {
        let args = integer_args(self.name(), args)?;
        Ok(from_integer(Self::eval_static(&args[0], &args[1])))
    }
}

/// The least common multiple of two integers.
#[derive(Debug)]
pub struct Lcm;

impl Lcm {
    pub fn eval_static(a: &Integer, b: &Integer) -> Integer {
        int(a.lcm_ref(b))
    }
}

impl Builtin for Lcm {
    fn name(&self) -> &'static str {
        "lcm"
    }

    fn arity(&self) -> Arity {
        Arity::Exact(2)
    }

    fn eval(&self, args: &[Complex]) -> Result<Complex, EvalError> {
        let args = integer_args(self.name(), args)?;
        Ok(from_integer(Self::eval_static(&args[0], &args[1])))
    }
}

/// The remainder of floored division. The result has the same sign as the divisor, so
/// `Mod(-7, 3) = 2` and `Mod(7, -3) = -2`.
#[derive(Debug)]
pub struct Mod;

impl Mod {
    pub fn eval_static(a: &Integer, b: &Integer) -> Result<Integer, EvalError> {
        if b.is_zero() {
            return Err(EvalError::Domain(String::from("`Mod` by zero is undefined")));
        }
        let (_, rem) = a.clone().div_rem_floor(b.clone());
        Ok(rem)
    }
}

impl Builtin for Mod {
    fn name(&self) -> &'static str {
        "Mod"
    }

    fn arity(&self) -> Arity {
        Arity::Exact(2)
    }

    fn eval(&self, args: &[Complex]) -> Result<Complex, EvalError> {
        if let (Ok(a), Ok(b)) = (integer_arg(self.name(), &args[0]), integer_arg(self.name(), &args[1])) {
            return Ok(from_integer(Self::eval_static(&a, &b)?));
        }

        if !args.iter().all(is_real) {
            return Err(EvalError::Domain(String::from("`Mod` expects real arguments")));
        }
        let a = real_arg(self.name(), &args[0])?;
        let b = real_arg(self.name(), &args[1])?;
        if b.is_zero() {
            return Err(EvalError::Domain(String::from("`Mod` by zero is undefined")));
        }
        let quotient = (a.clone() / &b).floor();
        Ok(complex(a - b * quotient))
    }
}

/// Euler's totient function: the number of integers in `1..=n` that are coprime to `n`.
#[derive(Debug)]
pub struct Totient;

impl Totient {
    pub fn eval_static(n: &Integer) -> Result<Integer, EvalError> {
        if n.cmp0().is_le() {
            return Err(EvalError::Domain(String::from("`totient` expects a positive integer")));
        }

        let factors = prime_factorization(n.clone())
            .ok_or_else(|| EvalError::Domain(String::from("`totient` argument is too large to factor")))?;
        Ok(factors.into_iter().fold(int(1), |acc, (prime, count)| {
            let power = int(prime.clone().pow(count - 1));
            acc * power * (prime - 1u32)
        }))
    }
}

impl Builtin for Totient {
    fn name(&self) -> &'static str {
        "totient"
    }

    fn arity(&self) -> Arity {
        Arity::Exact(1)
    }

    fn eval(&self, args: &[Complex]) -> Result<Complex, EvalError> {
        let n = integer_arg(self.name(), &args[0])?;
        Ok(from_integer(Self::eval_static(&n)?))
    }
}
