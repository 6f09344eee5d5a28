//! Simplification rules for powers.

use crate::primitive::float;
use crate::symbolic::{
    expr::SymExpr,
    number::Number,
    simplify::{rules::do_power, step::Step},
    step_collector::StepCollector,
};
use rug::{ops::Pow, Integer, Rational};

/// The largest number of bits a numeric power is allowed to produce. Larger powers are left
/// unevaluated.
const MAX_POWER_BITS: u64 = 1 << 16;

/// `a^0 = 1`
/// `a^1 = a`
/// `1^a = 1`
/// `0^a = 0`, `a > 0`
pub fn power_identity(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_power(expr, |base, exp| {
        let exp_number = Number::from_expr(exp);
        if exp_number.as_ref().is_some_and(Number::is_zero) {
            Some(SymExpr::int(1))
        } else if exp.is_int(1) {
            Some(base.clone())
        } else if base.is_int(1) {
            Some(SymExpr::int(1))
        } else if base.is_int(0) && exp_number.is_some_and(|n| !n.is_negative()) {
            Some(SymExpr::int(0))
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::PowerIdentity);
    Some(opt)
}

/// Raises an exact rational number to an integer power, unless the result would be too large.
fn rational_pow(base: &Rational, exp: &Integer) -> Option<Rational> {
    if base.cmp0().is_eq() && exp.is_negative() {
        return None;
    }

    let magnitude = exp.clone().abs().to_u32()?;
    let bits = u64::from(base.numer().significant_bits() + base.denom().significant_bits());
    if bits.saturating_mul(u64::from(magnitude)) > MAX_POWER_BITS {
        return None;
    }

    let result = base.clone().pow(magnitude);
    if exp.is_negative() {
        Some(result.recip())
    } else {
        Some(result)
    }
}

/// Evaluates powers of numbers.
///
/// `2^3 = 8`
/// `(1/2)^2 = 1/4`
/// `2^-2 = 1/4`
/// `4^0.5 = 2.0`
pub fn numeric_power(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_power(expr, |base, exp| {
        let base_number = Number::from_expr(base)?;
        let result = match (&base_number, exp.as_integer(), Number::from_expr(exp)?) {
            (Number::Rational(base), Some(exp), _) => {
                SymExpr::rational(rational_pow(base, exp)?)
            },
            (Number::Float(base), Some(exp), _) => {
                SymExpr::float(base.clone().pow(exp))
            },
            (base, _, Number::Float(exp)) if !base.is_negative() => {
                SymExpr::float(base.to_float().pow(&exp))
            },
            (Number::Float(base), _, Number::Rational(exp)) if !base.is_sign_negative() => {
                SymExpr::float(base.clone().pow(&float(&exp)))
            },
            _ => return None,
        };

        if result == *expr {
            None
        } else {
            Some(result)
        }
    })?;

    step_collector.push(Step::NumericPower);
    Some(opt)
}

/// Splits a fraction raised to a non-integer power.
///
/// `(2/3)^(1/2) = 2^(1/2) * 3^(-1/2)`
pub fn fraction_power(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_power(expr, |base, exp| {
        let base = base.as_rational()?;
        let exp_value = exp.as_rational()?;
        if *base.denom() == 1 || *exp_value.denom() == 1 {
            return None;
        }

        let (numer, denom) = base.into_numer_denom();
        Some(SymExpr::Mul(vec![
            SymExpr::pow(SymExpr::from(numer), exp.clone()),
            SymExpr::pow(SymExpr::from(denom), SymExpr::rational(-exp_value)),
        ]))
    })?;

    step_collector.push(Step::NumericPower);
    Some(opt)
}

/// `(a^b)^c = a^(b*c)`, where `c` is an integer
pub fn power_of_power(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_power(expr, |base, exp| {
        let SymExpr::Exp(inner_base, inner_exp) = base else {
            return None;
        };
        if !exp.is_integer() {
            return None;
        }

        Some(SymExpr::pow(
            *inner_base.clone(),
            SymExpr::Mul(vec![*inner_exp.clone(), exp.clone()]),
        ))
    })?;

    step_collector.push(Step::PowerOfPower);
    Some(opt)
}

/// `(a*b)^c = a^c*b^c`, where `c` is an integer
/// `(4a)^c = 4^c*a^c`, for any `c`
pub fn power_of_product(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_power(expr, |base, exp| {
        let SymExpr::Mul(factors) = base else {
            return None;
        };

        if exp.is_integer() {
            return Some(SymExpr::Mul(
                factors.iter()
                    .map(|factor| SymExpr::pow(factor.clone(), exp.clone()))
                    .collect()
            ));
        }

        // only positive numbers can be pulled out of a non-integer power
        let (positive, rest): (Vec<_>, Vec<_>) = factors.iter()
            .cloned()
            .partition(|factor| Number::from_expr(factor).is_some_and(|n| !n.is_negative()));
        if positive.is_empty() || rest.is_empty() {
            return None;
        }

        Some(SymExpr::Mul(vec![
            SymExpr::pow(SymExpr::Mul(positive).downgrade(), exp.clone()),
            SymExpr::pow(SymExpr::Mul(rest).downgrade(), exp.clone()),
        ]))
    })?;

    step_collector.push(Step::PowerOfProduct);
    Some(opt)
}

/// Applies all power rules.
pub fn all(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    power_identity(expr, step_collector)
        .or_else(|| numeric_power(expr, step_collector))
        .or_else(|| fraction_power(expr, step_collector))
        .or_else(|| power_of_power(expr, step_collector))
        .or_else(|| power_of_product(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use crate::primitive::rational;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn integer_powers() {
        let expr = SymExpr::pow(SymExpr::int(2), SymExpr::int(10));
        assert_eq!(numeric_power(&expr, &mut ()), Some(SymExpr::int(1024)));

        let expr = SymExpr::pow(SymExpr::int(2), SymExpr::int(-2));
        assert_eq!(numeric_power(&expr, &mut ()), Some(SymExpr::rational(rational((1, 4)))));
    }

    #[test]
    fn reciprocal_is_already_simplified() {
        let expr = SymExpr::rational(rational((1, 4)));
        assert_eq!(all(&expr, &mut ()), None);
    }

    #[test]
    fn huge_powers_are_left_alone() {
        let expr = SymExpr::pow(SymExpr::int(10), SymExpr::int(1_000_000));
        assert_eq!(numeric_power(&expr, &mut ()), None);
    }

    #[test]
    fn identities() {
        let x = SymExpr::symbol("x");
        assert_eq!(power_identity(&SymExpr::pow(x.clone(), SymExpr::int(0)), &mut ()), Some(SymExpr::int(1)));
        assert_eq!(power_identity(&SymExpr::pow(x.clone(), SymExpr::int(1)), &mut ()), Some(x.clone()));
        assert_eq!(power_identity(&SymExpr::pow(SymExpr::int(0), x.clone()), &mut ()), None);
    }

    #[test]
    fn product_to_integer_power() {
        let x = SymExpr::symbol("x");
        let y = SymExpr::symbol("y");
        let expr = SymExpr::pow(SymExpr::Mul(vec![x.clone(), y.clone()]), SymExpr::int(2));
        assert_eq!(power_of_product(&expr, &mut ()), Some(SymExpr::Mul(vec![
            SymExpr::pow(x, SymExpr::int(2)),
            SymExpr::pow(y, SymExpr::int(2)),
        ])));
    }
}
