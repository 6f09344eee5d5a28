//! Indefinite integration of elementary expressions.
//!
//! Integration is rule based: linearity, the power rule, and the antiderivatives of a few
//! functions of a linear argument. Products that no rule covers are expanded and tried again.
//! The constant of integration is omitted.

use crate::error::IntegrateError;
use super::{
    expand::expand,
    expr::{Primary, SymExpr, E},
    poly::coefficients,
    simplify::simplify,
};

/// If `u` is `a*var + b` with `a` not depending on `var`, returns `a`.
fn linear_slope(u: &SymExpr, var: &str) -> Option<SymExpr> {
    let expanded = expand(u).ok()?;
    match coefficients(&expanded, var)?.as_slice() {
        [_, slope] => Some(simplify(slope)).filter(|slope| !slope.is_int(0)),
        _ => None,
    }
}

fn log(u: SymExpr) -> SymExpr {
    SymExpr::call("log", vec![u])
}

/// `∫ u^n dx`, `∫ c^u dx`
fn integrate_power(base: &SymExpr, exp: &SymExpr, var: &str) -> Option<SymExpr> {
    match (base.contains_symbol(var), exp.contains_symbol(var)) {
        (true, false) => {
            let slope = linear_slope(base, var)?;
            if exp.is_int(-1) {
                // ∫ 1/(ax + b) dx = log(ax + b)/a
                return Some(SymExpr::fraction(log(base.clone()), slope));
            }
            let n_plus_one = simplify(&(exp.clone() + SymExpr::int(1)));
            Some(SymExpr::fraction(
                SymExpr::pow(base.clone(), n_plus_one.clone()),
                SymExpr::Mul(vec![n_plus_one, slope]),
            ))
        },
        (false, true) => {
            let slope = linear_slope(exp, var)?;
            let power = SymExpr::pow(base.clone(), exp.clone());
            if base.is_symbol(E) {
                Some(SymExpr::fraction(power, slope))
            } else {
                Some(SymExpr::fraction(power, SymExpr::Mul(vec![slope, log(base.clone())])))
            }
        },
        _ => None,
    }
}

/// `∫ f(ax + b) dx`
fn integrate_call(name: &str, args: &[SymExpr], var: &str) -> Option<SymExpr> {
    if let ("log", [u, base]) = (name, args) {
        if base.contains_symbol(var) {
            return None;
        }
        return integrate_inner(&SymExpr::fraction(log(u.clone()), log(base.clone())), var);
    }

    let [u] = args else {
        return None;
    };
    let slope = linear_slope(u, var)?;
    let call = |name: &str| SymExpr::call(name, vec![u.clone()]);
    let antiderivative = match name {
        "sin" => -call("cos"),
        "cos" => call("sin"),
        "tan" => -log(call("cos")),
        "sinh" => call("cosh"),
        "cosh" => call("sinh"),
        "tanh" => log(call("cosh")),
        // ∫ log(u) du = u log(u) - u
        "log" => SymExpr::Mul(vec![u.clone(), call("log")]) + -u.clone(),
        _ => return None,
    };
    Some(SymExpr::fraction(antiderivative, slope))
}

/// Integrates without expanding, returning [`None`] if no rule applies.
fn integrate_inner(expr: &SymExpr, var: &str) -> Option<SymExpr> {
    if !expr.contains_symbol(var) {
        return Some(expr.clone() * SymExpr::symbol(var));
    }

    match expr {
        SymExpr::Primary(Primary::Symbol(_)) => Some(SymExpr::fraction(
            SymExpr::pow(expr.clone(), SymExpr::int(2)),
            SymExpr::int(2),
        )),
        SymExpr::Primary(Primary::Call(name, args)) => integrate_call(name, args, var),
        SymExpr::Primary(_) => None,
        SymExpr::Add(terms) => terms.iter()
            .map(|term| integrate_inner(term, var))
            .collect::<Option<Vec<_>>>()
            .map(SymExpr::Add),
        SymExpr::Mul(factors) => {
            // constant factors move outside of the integral
            let (dependent, constant): (Vec<_>, Vec<_>) = factors.iter()
                .cloned()
                .partition(|factor| factor.contains_symbol(var));
            match dependent.as_slice() {
                [single] => Some(SymExpr::Mul(constant) * integrate_inner(single, var)?),
                _ => None,
            }
        },
        SymExpr::Exp(base, exp) => integrate_power(base, exp, var),
    }
}

/// Computes an antiderivative of the expression with respect to `var`, without a constant of
/// integration.
///
/// Returns [`Err`] if no integration rule applies, even after expanding the integrand.
pub fn integrate(expr: &SymExpr, var: &str) -> Result<SymExpr, IntegrateError> {
    let simplified = simplify(expr);
    let integral = match integrate_inner(&simplified, var) {
        Some(integral) => Some(integral),
        None => {
            let expanded = expand(&simplified)?;
            if expanded == simplified {
                None
            } else {
                integrate_inner(&expanded, var)
            }
        },
    };

    match integral {
        Some(integral) => Ok(simplify(&integral)),
        None => Err(IntegrateError::Unsupported {
            integrand: simplified.to_string(),
            var: var.to_string(),
        }),
    }
}
