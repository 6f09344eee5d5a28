//! Distribution of a numeric coefficient over a sum.

use crate::symbolic::{
    expr::SymExpr,
    number::Number,
    simplify::{rules::do_multiply, step::Step},
    step_collector::StepCollector,
};

/// `2(a+b) = 2a + 2b`
///
/// Only a product of numbers and exactly one sum is distributed, so that factored forms such
/// as `x*(x + 1)` or `2*(x - 1)*(x + 1)` are left alone.
pub fn distribute_coefficient(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_multiply(expr, |factors| {
        let (numeric, rest): (Vec<_>, Vec<_>) = factors.iter()
            .partition(|factor| Number::from_expr(factor).is_some());
        let ([SymExpr::Add(terms)], false) = (rest.as_slice(), numeric.is_empty()) else {
            return None;
        };
        let coefficient = Number::from_expr(&SymExpr::Mul(numeric.into_iter().cloned().collect()))?;

        Some(SymExpr::Add(
            terms.iter()
                .map(|term| coefficient.clone().into_expr() * term.clone())
                .collect()
        ))
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::DistributeCoefficient);
    Some(opt)
}

/// Applies all distribution rules.
pub fn all(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    distribute_coefficient(expr, step_collector)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn number_times_sum() {
        let x = SymExpr::symbol("x");
        let expr = SymExpr::Mul(vec![SymExpr::int(2), x.clone() + SymExpr::int(1)]);
        assert_eq!(distribute_coefficient(&expr, &mut ()), Some(SymExpr::Add(vec![
            SymExpr::Mul(vec![SymExpr::int(2), x.clone()]),
            SymExpr::Mul(vec![SymExpr::int(2), SymExpr::int(1)]),
        ])));
    }

    #[test]
    fn products_of_sums_stay_factored() {
        let x = SymExpr::symbol("x");
        let expr = SymExpr::Mul(vec![x.clone(), x.clone() + SymExpr::int(1)]);
        assert_eq!(distribute_coefficient(&expr, &mut ()), None);
    }
}
