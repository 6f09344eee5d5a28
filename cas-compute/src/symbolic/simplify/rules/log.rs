//! Simplification rules for logarithms and their interaction with exponentials.

use crate::symbolic::{
    expr::{SymExpr, E},
    simplify::{rules::{do_call, do_power}, step::Step},
    step_collector::StepCollector,
};
use rug::Integer;

/// If `x = base^k` for some non-negative integer `k`, returns `k`.
fn exact_log(x: &Integer, base: &Integer) -> Option<u32> {
    if *base <= 1 || x.cmp0().is_le() {
        return None;
    }

    let mut x = x.clone();
    let mut k = 0;
    while x.is_divisible(base) {
        x /= base;
        k += 1;
    }
    (x == 1).then_some(k)
}

/// `log(1) = 0`
/// `log(E) = 1`
/// `log(E^a) = a`
/// `log(1/n) = -log(n)`
pub fn natural_log(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_call(expr, "log", |args| {
        let [arg] = args else {
            return None;
        };

        if arg.is_int(1) {
            Some(SymExpr::int(0))
        } else if arg.is_symbol(E) {
            Some(SymExpr::int(1))
        } else if let SymExpr::Exp(base, exp) = arg {
            if base.is_symbol(E) {
                Some(*exp.clone())
            } else if exp.is_int(-1) && base.as_integer().is_some_and(|n| *n > 1) {
                Some(-SymExpr::call("log", vec![*base.clone()]))
            } else {
                None
            }
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::Logarithm);
    Some(opt)
}

/// `log(a, a) = 1`
/// `log(8, 2) = 3`
/// `log(a, b) = log(a)/log(b)`
pub fn log_with_base(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_call(expr, "log", |args| {
        let [arg, base] = args else {
            return None;
        };

        if arg == base {
            return Some(SymExpr::int(1));
        }
        if let (Some(arg), Some(base)) = (arg.as_integer(), base.as_integer()) {
            if let Some(k) = exact_log(arg, base) {
                return Some(SymExpr::int(k));
            }
        }

        Some(SymExpr::fraction(
            SymExpr::call("log", vec![arg.clone()]),
            SymExpr::call("log", vec![base.clone()]),
        ))
    })?;

    step_collector.push(Step::Logarithm);
    Some(opt)
}

/// `E^log(a) = a`
pub fn exp_of_log(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_power(expr, |base, exp| {
        if !base.is_symbol(E) {
            return None;
        }
        match exp.as_call("log")? {
            [arg] => Some(arg.clone()),
            _ => None,
        }
    })?;

    step_collector.push(Step::Logarithm);
    Some(opt)
}

/// Applies all logarithm rules.
pub fn all(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    natural_log(expr, step_collector)
        .or_else(|| log_with_base(expr, step_collector))
        .or_else(|| exp_of_log(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn log(args: Vec<SymExpr>) -> SymExpr {
        SymExpr::call("log", args)
    }

    #[test]
    fn special_values() {
        assert_eq!(natural_log(&log(vec![SymExpr::int(1)]), &mut ()), Some(SymExpr::int(0)));
        assert_eq!(natural_log(&log(vec![SymExpr::symbol(E)]), &mut ()), Some(SymExpr::int(1)));

        let x = SymExpr::symbol("x");
        let exp = SymExpr::pow(SymExpr::symbol(E), x.clone());
        assert_eq!(natural_log(&log(vec![exp]), &mut ()), Some(x.clone()));
        assert_eq!(natural_log(&log(vec![x]), &mut ()), None);
    }

    #[test]
    fn integer_base() {
        let expr = log(vec![SymExpr::int(8), SymExpr::int(2)]);
        assert_eq!(log_with_base(&expr, &mut ()), Some(SymExpr::int(3)));

        let expr = log(vec![SymExpr::int(10), SymExpr::int(3)]);
        assert_eq!(log_with_base(&expr, &mut ()), Some(SymExpr::fraction(
            log(vec![SymExpr::int(10)]),
            log(vec![SymExpr::int(3)]),
        )));
    }

    #[test]
    fn exponential_of_logarithm() {
        let x = SymExpr::symbol("x");
        let expr = SymExpr::pow(SymExpr::symbol(E), log(vec![x.clone()]));
        let mut steps = Vec::new();
        assert_eq!(exp_of_log(&expr, &mut steps), Some(x));
        assert_eq!(steps, vec![Step::Logarithm]);
    }
}
