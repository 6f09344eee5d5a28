//! Cancellation of common factors in rational functions of one variable.

use crate::symbolic::{
    expr::SymExpr,
    number::{with_coefficient, Number},
    poly::together,
    step_collector::StepCollector,
};
use super::{default_complexity, step::Step};

/// Returns true if `var` appears in the base of a power with a negative exponent.
fn has_denominator(expr: &SymExpr, var: &str) -> bool {
    match expr {
        SymExpr::Exp(base, exp) => {
            let negative = Number::from_expr(exp).is_some_and(|n| n.is_negative());
            (negative && base.contains_symbol(var))
                || has_denominator(base, var)
                || has_denominator(exp, var)
        },
        expr => expr.children().into_iter().any(|child| has_denominator(child, var)),
    }
}

/// Writes a rational function of a single variable as one reduced fraction, if that makes the
/// expression simpler.
///
/// `(x^2 - 1)/(x - 1) = x + 1`
/// `1/(x - 1) - 1/(x + 1) = 2/(x^2 - 1)`
pub(crate) fn cancel(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let symbols = expr.free_symbols();
    let mut symbols = symbols.iter();
    let (Some(var), None) = (symbols.next(), symbols.next()) else {
        return None;
    };
    if !has_denominator(expr, var) {
        return None;
    }

    let (numer, denom) = together(expr, var)?;
    let (numer_content, numer) = numer.content_primitive();
    let (denom_content, denom) = denom.content_primitive();
    let coefficient = numer_content / denom_content;

    let result = if denom.degree() == 0 {
        numer.scale(&coefficient).to_expr(var)
    } else {
        let fraction = SymExpr::fraction(numer.to_expr(var), denom.to_expr(var));
        with_coefficient(Number::Rational(coefficient), fraction)
    };

    if default_complexity(&result) >= default_complexity(expr) {
        return None;
    }

    step_collector.push(Step::CancelCommonFactors);
    Some(result)
}
