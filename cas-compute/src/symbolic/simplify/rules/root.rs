//! Simplification rules for square, cube, and higher roots of integers.

use crate::funcs::number_theory::prime_factorization;
use crate::primitive::{int, rational};
use crate::symbolic::{
    expr::{SymExpr, I},
    simplify::{rules::do_power, step::Step},
    step_collector::StepCollector,
};
use rug::{ops::Pow, Integer};

/// Pulls perfect powers out of the root of an integer.
///
/// Returns the factors that have been moved outside of the root and the factors that remain
/// inside the root, such that `n^(p/q) = outside * inside^(1/q)`, where `0 < p < q`.
fn do_root(n: &Integer, p: u32, q: u32) -> Option<(Integer, Integer)> {
    let mut outside = int(1);
    let mut inside = int(1);
    for (prime, count) in prime_factorization(n.clone())? {
        let total = count.checked_mul(p)?;
        outside *= prime.clone().pow(total / q);
        inside *= prime.pow(total % q);
    }
    Some((outside, inside))
}

/// `n^(p/q) = n^k * n^(r/q)`, where `p = kq + r` and `0 <= r < q`
/// `sqrt(8) = 2*sqrt(2)`
/// `sqrt(-4) = 2*I`
pub fn integer_root(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_power(expr, |base, exp| {
        let n = base.as_integer()?;
        let exp_value = exp.as_rational()?;
        if *exp_value.denom() == 1 {
            return None;
        }

        if n.is_negative() {
            // only square roots of negative numbers are rewritten, with `sqrt(-1) = I`
            if *exp_value.denom() != 2 {
                return None;
            }
            return Some(SymExpr::Mul(vec![
                SymExpr::pow(SymExpr::symbol(I), SymExpr::from(exp_value.numer().clone())),
                SymExpr::pow(SymExpr::from(Integer::from(-n)), exp.clone()),
            ]));
        }
        if *n <= 1 {
            return None;
        }

        let (numer, denom) = exp_value.into_numer_denom();
        let (whole, remainder) = numer.div_rem_floor(denom.clone());
        if !whole.is_zero() {
            return Some(SymExpr::Mul(vec![
                SymExpr::pow(base.clone(), SymExpr::from(whole)),
                SymExpr::pow(base.clone(), SymExpr::rational(rational((remainder, denom)))),
            ]));
        }

        let (outside, inside) = do_root(n, remainder.to_u32()?, denom.to_u32()?)?;
        if outside == 1 {
            // nothing was pulled out of the root
            return None;
        }
        Some(SymExpr::Mul(vec![
            SymExpr::from(outside),
            SymExpr::pow(SymExpr::from(inside), SymExpr::rational(rational((int(1), denom)))),
        ]))
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::Root);
    Some(opt)
}

/// Applies all root rules.
///
/// Root simplification may or may not reduce the complexity of the expression, since it can
/// introduce additional operations. However, it may be necessary for future rules to apply.
pub fn all(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    integer_root(expr, step_collector)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn perfect_square_factor() {
        let expr = SymExpr::int(8).sqrt();
        assert_eq!(integer_root(&expr, &mut ()), Some(SymExpr::Mul(vec![
            SymExpr::int(2),
            SymExpr::int(2).sqrt(),
        ])));
    }

    #[test]
    fn square_free_is_left_alone() {
        assert_eq!(integer_root(&SymExpr::int(6).sqrt(), &mut ()), None);
        assert_eq!(
            integer_root(&SymExpr::pow(SymExpr::int(4), SymExpr::rational(rational((1, 3)))), &mut ()),
            None,
        );
    }

    #[test]
    fn improper_exponent() {
        let expr = SymExpr::pow(SymExpr::int(2), SymExpr::rational(rational((3, 2))));
        assert_eq!(integer_root(&expr, &mut ()), Some(SymExpr::Mul(vec![
            SymExpr::pow(SymExpr::int(2), SymExpr::int(1)),
            SymExpr::int(2).sqrt(),
        ])));
    }

    #[test]
    fn negative_radicand() {
        let expr = SymExpr::int(-4).sqrt();
        assert_eq!(integer_root(&expr, &mut ()), Some(SymExpr::Mul(vec![
            SymExpr::pow(SymExpr::symbol("I"), SymExpr::int(1)),
            SymExpr::int(4).sqrt(),
        ])));
    }
}
