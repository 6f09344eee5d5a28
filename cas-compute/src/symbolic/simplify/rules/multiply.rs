//! Simplification rules for expressions involving multiplication, including combining like
//! factors.

use crate::symbolic::{
    expr::{Primary, SymExpr},
    number::Number,
    simplify::{rules::do_multiply, step::Step},
    step_collector::StepCollector,
};
use rug::Integer;

/// `a*(b*c) = a*b*c`
pub fn flatten(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_multiply(expr, |factors| {
        if !factors.iter().any(|factor| matches!(factor, SymExpr::Mul(_))) {
            return None;
        }

        let mut new_factors = Vec::with_capacity(factors.len());
        for factor in factors {
            match factor {
                SymExpr::Mul(inner) => new_factors.extend(inner.iter().cloned()),
                factor => new_factors.push(factor.clone()),
            }
        }
        Some(SymExpr::Mul(new_factors).downgrade())
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::FlattenProduct);
    Some(opt)
}

/// `0*a = 0`
/// `a*0 = 0`
pub fn multiply_zero(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_multiply(expr, |factors| {
        if factors.iter().any(|factor| Number::from_expr(factor).is_some_and(|n| n.is_zero())) {
            Some(SymExpr::int(0))
        } else {
            None
        }
    })?;

    step_collector.push(Step::MultiplyZero);
    Some(opt)
}

/// Multiplies the numeric factors of a product into one coefficient in canonical form.
///
/// `1*a = a`
/// `2*3*a = 6a`
/// `3/12 = 1/4`
/// `2*0.5 = 1.0`
pub fn combine_numeric_factors(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_multiply(expr, |factors| {
        let (numeric, rest): (Vec<_>, Vec<_>) = factors.iter()
            .cloned()
            .partition(|factor| Number::from_expr(factor).is_some());
        if numeric.is_empty() {
            return None;
        }

        let product = Number::from_expr(&SymExpr::Mul(numeric.clone()))?;
        let canonical = if product.is_one() {
            Vec::new()
        } else {
            match product.into_expr() {
                SymExpr::Mul(factors) => factors,
                factor => vec![factor],
            }
        };

        if SymExpr::Mul(canonical.clone()) == SymExpr::Mul(numeric) {
            return None;
        }

        let mut new_factors = canonical;
        new_factors.extend(rest);
        Some(SymExpr::Mul(new_factors).downgrade())
    })?;

    step_collector.push(Step::CombineNumericFactors);
    Some(opt)
}

/// Returns the base and exponent of a factor. If the factor is not [`SymExpr::Exp`], the exponent
/// is `1`.
///
/// - `a^b` -> `(a, b)`
/// - `a` -> `(a, 1)`
fn base_and_exponent(expr: &SymExpr) -> (SymExpr, SymExpr) {
    match expr {
        SymExpr::Exp(base, exp) => (*base.clone(), *exp.clone()),
        expr => (expr.clone(), SymExpr::int(1)),
    }
}

/// If the factor is a positive integer raised to a non-integer rational power, returns the base
/// and the exponent.
fn integer_root(factor: &SymExpr) -> Option<(&Integer, &SymExpr)> {
    match factor {
        SymExpr::Exp(base, exp) => {
            let base = base.as_integer().filter(|base| **base > 1)?;
            let exp_value = exp.as_rational()?;
            if *exp_value.denom() == 1 {
                None
            } else {
                Some((base, &**exp))
            }
        },
        _ => None,
    }
}

/// Combines like factors.
///
/// `a^b*a^c = a^(b+c)`
/// `a*a = a^2`
/// `sqrt(2)*sqrt(3) = sqrt(6)`
pub fn combine_like_factors(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_multiply(expr, |factors| {
        let mut numeric = Vec::new();

        // (base, exponents) pairs, in order of first appearance
        let mut groups: Vec<(SymExpr, Vec<SymExpr>)> = Vec::new();
        let mut changed = false;

        for factor in factors {
            if Number::from_expr(factor).is_some() {
                numeric.push(factor.clone());
                continue;
            }

            let (base, exp) = base_and_exponent(factor);
            match groups.iter_mut().find(|(other, _)| *other == base) {
                Some((_, exps)) => {
                    exps.push(exp);
                    changed = true;
                },
                None => groups.push((base, vec![exp])),
            }
        }

        let mut new_factors = numeric;
        let mut roots: Vec<(Integer, SymExpr)> = Vec::new();
        for (base, mut exps) in groups {
            let factor = if exps.len() == 1 {
                let exp = exps.remove(0);
                if exp.is_int(1) {
                    base
                } else {
                    SymExpr::pow(base, exp)
                }
            } else {
                SymExpr::pow(base, SymExpr::Add(exps))
            };

            // integer roots with equal exponents are merged: `2^(1/2)*3^(1/2) = 6^(1/2)`
            if let Some((base, exp)) = integer_root(&factor) {
                if let Some((product, _)) = roots.iter_mut().find(|(_, other)| other == exp) {
                    *product *= base;
                    changed = true;
                } else {
                    roots.push((base.clone(), exp.clone()));
                }
                continue;
            }

            new_factors.push(factor);
        }

        if !changed {
            return None;
        }

        new_factors.extend(roots.into_iter()
            .map(|(base, exp)| SymExpr::pow(SymExpr::Primary(Primary::Integer(base)), exp)));
        Some(SymExpr::Mul(new_factors).downgrade())
    })?;

    step_collector.push(Step::CombineLikeFactors);
    Some(opt)
}

/// Applies all multiplication rules.
///
/// All multiplication rules will reduce the complexity of the expression.
pub fn all(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    flatten(expr, step_collector)
        .or_else(|| multiply_zero(expr, step_collector))
        .or_else(|| combine_numeric_factors(expr, step_collector))
        .or_else(|| combine_like_factors(expr, step_collector))
}
