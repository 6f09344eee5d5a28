//! Derivatives of the functions listed in `src/funcs/mod.rs`.

use crate::error::DerivativeError;
use crate::primitive::rational;
use crate::symbolic::expr::SymExpr;
use super::{raw_derivative, MultBuilder};

/// `u^exp`
fn power(u: &SymExpr, exp: i32) -> SymExpr {
    SymExpr::pow(u.clone(), SymExpr::int(exp))
}

/// `1 + sign * u^2`
fn one_plus_square(u: &SymExpr, sign: i32) -> SymExpr {
    SymExpr::Add(vec![SymExpr::int(1), SymExpr::Mul(vec![SymExpr::int(sign), power(u, 2)])])
}

fn call(name: &str, u: &SymExpr) -> SymExpr {
    SymExpr::call(name, vec![u.clone()])
}

/// Returns `f'(u)` for a function of one argument, without the chain rule factor.
fn outer_derivative(func: &str, u: &SymExpr) -> Option<SymExpr> {
    Some(match func {
        "sin" => call("cos", u),
        "cos" => -call("sin", u),
        "tan" => SymExpr::Add(vec![SymExpr::int(1), power(&call("tan", u), 2)]),
        "cot" => SymExpr::Mul(vec![
            SymExpr::int(-1),
            SymExpr::Add(vec![SymExpr::int(1), power(&call("cot", u), 2)]),
        ]),
        "sec" => SymExpr::Mul(vec![call("sec", u), call("tan", u)]),
        "csc" => SymExpr::Mul(vec![SymExpr::int(-1), call("csc", u), call("cot", u)]),
        "log" => power(u, -1),
        "asin" => SymExpr::pow(one_plus_square(u, -1), SymExpr::rational(rational((-1, 2)))),
        "acos" => SymExpr::Mul(vec![
            SymExpr::int(-1),
            SymExpr::pow(one_plus_square(u, -1), SymExpr::rational(rational((-1, 2)))),
        ]),
        "atan" => SymExpr::pow(one_plus_square(u, 1), SymExpr::int(-1)),
        "sinh" => call("cosh", u),
        "cosh" => call("sinh", u),
        "tanh" => one_plus_square(&call("tanh", u), -1),
        _ => return None,
    })
}

/// Computes the derivative of a function call, applying the chain rule.
pub(super) fn function_derivative(func: &str, args: &[SymExpr], with: &str) -> Result<SymExpr, DerivativeError> {
    let unsupported = || DerivativeError::UnsupportedFunction(func.to_string());

    match (func, args) {
        // log(a, b) = log(a) / log(b)
        ("log", [arg, base]) => {
            raw_derivative(&SymExpr::fraction(call("log", arg), call("log", base)), with)
        },
        (_, [arg]) => {
            let outer = outer_derivative(func, arg).ok_or_else(unsupported)?;
            let mut mult_group = MultBuilder::default();
            mult_group.mult(outer);
            mult_group.mult(raw_derivative(arg, with)?);
            Ok(mult_group.into())
        },
        _ => Err(unsupported()),
    }
}
