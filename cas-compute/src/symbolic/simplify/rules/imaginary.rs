//! Simplification rules for powers of the imaginary unit.

use crate::symbolic::{
    expr::{SymExpr, I},
    simplify::{rules::do_power, step::Step},
    step_collector::StepCollector,
};

/// `I^2 = -1`
/// `I^3 = -I`
/// `I^4 = 1`
/// `I^-1 = -I`
pub fn imaginary_power(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_power(expr, |base, exp| {
        if !base.is_symbol(I) {
            return None;
        }

        let exp = exp.as_integer()?;
        Some(match exp.mod_u(4) {
            0 => SymExpr::int(1),
            1 => SymExpr::symbol(I),
            2 => SymExpr::int(-1),
            _ => SymExpr::Mul(vec![SymExpr::int(-1), SymExpr::symbol(I)]),
        })
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::ImaginaryPower);
    Some(opt)
}

/// Applies all imaginary unit rules.
pub fn all(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    imaginary_power(expr, step_collector)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn cycle_of_four() {
        let power = |n: i32| SymExpr::pow(SymExpr::symbol(I), SymExpr::int(n));
        assert_eq!(imaginary_power(&power(2), &mut ()), Some(SymExpr::int(-1)));
        assert_eq!(imaginary_power(&power(8), &mut ()), Some(SymExpr::int(1)));
        assert_eq!(
            imaginary_power(&power(-1), &mut ()),
            Some(SymExpr::Mul(vec![SymExpr::int(-1), SymExpr::symbol(I)])),
        );
    }
}
