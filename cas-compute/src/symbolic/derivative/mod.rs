//! Symbolic differentiation.
//!
//! The derivative is built with the sum, product, power, and chain rules, then simplified.

mod function;

use crate::error::DerivativeError;
use super::expr::{Primary, SymExpr, E};
use super::simplify::simplify;
use rug::Integer;

/// Returns `true` if the given [`SymExpr`] is "clearly" zero. This is intended to clean up the
/// built expression and is not mathematically rigorous.
fn is_trivially_zero(e: &SymExpr) -> bool {
    match e {
        SymExpr::Primary(Primary::Float(f)) => f.is_zero(),
        SymExpr::Primary(Primary::Integer(i)) => i.is_zero(),
        SymExpr::Add(sum) => sum.iter().all(is_trivially_zero),
        SymExpr::Mul(mul) => mul.iter().any(is_trivially_zero),
        SymExpr::Exp(base, exponent) => is_trivially_zero(base) && !is_trivially_zero(exponent),
        _ => false,
    }
}

/// Returns `true` if the given [`SymExpr`] is "clearly" one. This is intended to clean up the
/// built expression and is not mathematically rigorous.
fn is_trivially_unity(e: &SymExpr) -> bool {
    match e {
        SymExpr::Primary(Primary::Integer(i)) => *i == 1,
        SymExpr::Mul(exprs) => exprs.iter().all(is_trivially_unity),
        SymExpr::Exp(base, exponent) => is_trivially_zero(exponent) || is_trivially_unity(base),
        SymExpr::Add(exprs) => exprs.len() == 1 && is_trivially_unity(&exprs[0]),
        _ => false,
    }
}

/// Helper struct to build a product of expressions while applying basic simplification rules. If
/// any of the expressions are zero, the product is reduced to zero.
#[derive(Default)]
struct MultBuilder(Vec<SymExpr>);

impl From<MultBuilder> for SymExpr {
    fn from(value: MultBuilder) -> Self {
        SymExpr::Mul(value.0).downgrade()
    }
}

impl MultBuilder {
    fn mult(&mut self, e: SymExpr) {
        if is_trivially_zero(&e) || self.0.first().is_some_and(is_trivially_zero) {
            self.0 = vec![SymExpr::int(0)];
            return;
        }

        if !is_trivially_unity(&e) {
            self.0.push(e)
        }
    }
}

/// Helper struct to build a summation of expressions while applying basic simplification rules.
/// Only non-zero expressions are added to the sum.
#[derive(Default)]
struct SumBuilder(Vec<SymExpr>);

impl From<SumBuilder> for SymExpr {
    fn from(value: SumBuilder) -> Self {
        SymExpr::Add(value.0).downgrade()
    }
}

impl SumBuilder {
    fn add(&mut self, e: SymExpr) {
        if !is_trivially_zero(&e) {
            self.0.push(e)
        }
    }
}

/// `(f + g)' = f' + g'`
fn sum_rule(exprs: &[SymExpr], with: &str) -> Result<SymExpr, DerivativeError> {
    let mut sum = SumBuilder::default();
    for elem in exprs {
        sum.add(raw_derivative(elem, with)?);
    }
    Ok(sum.into())
}

/// `(f * g * h)' = f' * g * h + f * g' * h + f * g * h'`
fn product_rule(product: &[SymExpr], with: &str) -> Result<SymExpr, DerivativeError> {
    let mut outer_sum = SumBuilder::default();

    for derivative_index in 0..product.len() {
        let mut inner_mult = MultBuilder::default();
        for (term_index, term) in product.iter().enumerate() {
            if derivative_index == term_index {
                inner_mult.mult(raw_derivative(term, with)?);
            } else {
                inner_mult.mult(term.clone());
            }
        }

        outer_sum.add(inner_mult.into());
    }

    Ok(outer_sum.into())
}

/// Power rules for `base^exp`:
///
/// - `(f^c)' = c * f^(c - 1) * f'`, when `c` does not depend on the variable
/// - `(c^g)' = c^g * log(c) * g'`, when `c` does not depend on the variable
/// - `(f^g)' = f^g * (g' * log(f) + g * f' / f)` otherwise
fn power_rule(base: &SymExpr, exp: &SymExpr, with: &str) -> Result<SymExpr, DerivativeError> {
    let mut mult_group = MultBuilder::default();

    if !exp.contains_symbol(with) {
        let exp_minus_one = match exp.as_integer() {
            Some(n) => SymExpr::from(Integer::from(n - 1)),
            None => exp.clone() + SymExpr::int(-1),
        };
        mult_group.mult(exp.clone());
        mult_group.mult(SymExpr::pow(base.clone(), exp_minus_one));
        mult_group.mult(raw_derivative(base, with)?);
    } else if !base.contains_symbol(with) {
        mult_group.mult(SymExpr::pow(base.clone(), exp.clone()));
        if !base.is_symbol(E) {
            mult_group.mult(SymExpr::call("log", vec![base.clone()]));
        }
        mult_group.mult(raw_derivative(exp, with)?);
    } else {
        let mut inner = SumBuilder::default();

        let mut log_term = MultBuilder::default();
        log_term.mult(raw_derivative(exp, with)?);
        log_term.mult(SymExpr::call("log", vec![base.clone()]));
        inner.add(log_term.into());

        let mut ratio_term = MultBuilder::default();
        ratio_term.mult(exp.clone());
        ratio_term.mult(raw_derivative(base, with)?);
        ratio_term.mult(SymExpr::pow(base.clone(), SymExpr::int(-1)));
        inner.add(ratio_term.into());

        mult_group.mult(SymExpr::pow(base.clone(), exp.clone()));
        mult_group.mult(inner.into());
    }

    Ok(mult_group.into())
}

/// Computes the derivative without simplifying it.
fn raw_derivative(f: &SymExpr, with: &str) -> Result<SymExpr, DerivativeError> {
    if !f.contains_symbol(with) {
        return Ok(SymExpr::int(0));
    }

    let expr = match f {
        SymExpr::Primary(Primary::Symbol(_)) => SymExpr::int(1),
        SymExpr::Primary(Primary::Call(func, args)) => function::function_derivative(func, args, with)?,
        SymExpr::Primary(_) => SymExpr::int(0),
        SymExpr::Add(exprs) => sum_rule(exprs, with)?,
        SymExpr::Mul(exprs) => product_rule(exprs, with)?,
        SymExpr::Exp(base, exp) => power_rule(base, exp, with)?,
    };

    if is_trivially_zero(&expr) {
        Ok(SymExpr::int(0))
    } else {
        Ok(expr)
    }
}

/// Computes the derivative of the given expression with respect to `with`, and simplifies it.
/// Returns [`Err`] if the expression calls a function whose derivative is not known.
pub fn derivative(f: &SymExpr, with: &str) -> Result<SymExpr, DerivativeError> {
    Ok(simplify(&raw_derivative(f, with)?))
}
