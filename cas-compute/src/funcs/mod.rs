//! All built-in functions provided by the numerical and symbolic libraries.
//!
//! Each function is implemented as a unit `struct`. Functions with an exact integer meaning (such
//! as `factorial` or `gcd`) also have an associated `eval_static` method working on [`Integer`]s,
//! which the simplifier uses to compute exact results. Every function implements the
//! [`Builtin`] trait, so it can be evaluated numerically with arbitrary arguments at runtime.
//!
//! # Example
//!
//! ```
//! use cas_compute::funcs::miscellaneous::Factorial;
//! use cas_compute::primitive::int;
//!
//! assert_eq!(Factorial::eval_static(&int(5)).unwrap(), 120);
//! ```
//!
//! [`Integer`]: rug::Integer

pub mod combinatoric;
pub mod miscellaneous;
pub mod number_theory;
pub mod power;
pub mod trigonometry;

use crate::numerical::builtin::Builtin;
use levenshtein::levenshtein;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// All builtin functions that can be numerically evaluated, keyed by name.
static ALL: Lazy<HashMap<&'static str, Box<dyn Builtin>>> = Lazy::new(|| {
    use combinatoric::*;
    use miscellaneous::*;
    use number_theory::*;
    use power::*;
    use trigonometry::*;

    macro_rules! build {
        ($($upname:ident),* $(,)?) => {
            [
                $(
                    Box::new($upname) as Box<dyn Builtin>,
                )*
            ]
                .into_iter()
                .map(|builtin| (builtin.name(), builtin))
                .collect()
        };
    }

    build! {
        Sin, Cos, Tan, Cot, Sec, Csc,
        Asin, Acos, Atan,
        Sinh, Cosh, Tanh,
        Exp, Ln, Log, Sqrt, Cbrt,
        Abs, AbsLower, Floor, Ceiling, Factorial,
        Binomial, Fibonacci, Catalan,
        Gcd, Lcm, Mod, Totient,
    }
});

/// Returns all builtin functions that can be numerically evaluated.
pub fn all() -> &'static HashMap<&'static str, Box<dyn Builtin>> {
    &ALL
}

/// Returns the builtin function with the given name.
pub fn get(name: &str) -> Option<&'static dyn Builtin> {
    ALL.get(name).map(|builtin| &**builtin)
}

/// Returns the names of builtin functions that are similar to the given name, sorted by
/// similarity and then alphabetically.
pub fn suggestions(name: &str) -> Vec<String> {
    let mut similar = ALL.keys()
        .map(|candidate| (levenshtein(name, candidate), *candidate))
        .filter(|(distance, _)| *distance <= 2)
        .collect::<Vec<_>>();
    similar.sort();
    similar.into_iter().map(|(_, candidate)| candidate.to_string()).collect()
}
