//! Simplification rules for trigonometric functions.

mod table;

use crate::primitive::rational;
use crate::symbolic::{
    expr::{SymExpr, PI},
    number::{term_coefficient, with_coefficient, Number},
    simplify::{rules::{do_add, do_call}, step::Step},
    step_collector::StepCollector,
};
use rug::Rational;

/// If the expression is a rational multiple of `pi`, returns the multiple.
fn pi_coefficient(expr: &SymExpr) -> Option<Rational> {
    if expr.is_int(0) {
        return Some(Rational::new());
    }
    if expr.is_symbol(PI) {
        return Some(rational(1));
    }

    let SymExpr::Mul(factors) = expr else {
        return None;
    };
    let pi_position = factors.iter().position(|factor| factor.is_symbol(PI))?;
    let mut rest = factors.clone();
    rest.remove(pi_position);
    SymExpr::Mul(rest).as_rational()
}

/// Evaluates a trigonometric function at a rational multiple of `pi` using the given table
/// lookup.
fn simplify_trig(args: &[SymExpr], lookup: fn(&Rational) -> Option<SymExpr>) -> Option<SymExpr> {
    let [arg] = args else {
        return None;
    };

    // example: sin(pi/6): the angle is 1/12 of a turn
    let turn = table::normalize(pi_coefficient(arg)? / 2);
    lookup(&turn)
}

/// `sin(pi/6) = 1/2`
pub fn sin(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_call(expr, "sin", |args| simplify_trig(args, table::sin))?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::Sin);
    Some(opt)
}

/// `cos(pi/3) = 1/2`
pub fn cos(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_call(expr, "cos", |args| simplify_trig(args, table::cos))?;

    step_collector.push(Step::Cos);
    Some(opt)
}

/// `tan(pi/4) = 1`
pub fn tan(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_call(expr, "tan", |args| simplify_trig(args, table::tan))?;

    step_collector.push(Step::Tan);
    Some(opt)
}

/// If a minus sign can be pulled out of the expression, returns the negated expression.
///
/// This is the case for negative numbers, products with a negative coefficient, and sums where
/// every term has a negative coefficient.
fn extract_minus_sign(expr: &SymExpr) -> Option<SymExpr> {
    match expr {
        SymExpr::Add(terms) => {
            let negated = terms.iter()
                .map(|term| {
                    let (coefficient, rest) = term_coefficient(term);
                    coefficient.is_negative().then(|| with_coefficient(coefficient.neg(), rest))
                })
                .collect::<Option<Vec<_>>>()?;
            Some(SymExpr::Add(negated))
        },
        term => {
            let (coefficient, rest) = term_coefficient(term);
            coefficient.is_negative().then(|| with_coefficient(coefficient.neg(), rest))
        },
    }
}

/// `sin(-x) = -sin(x)`
/// `cos(-x) = cos(x)`
pub fn symmetry(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    const ODD: [&str; 6] = ["sin", "tan", "asin", "atan", "sinh", "tanh"];
    const EVEN: [&str; 2] = ["cos", "cosh"];

    let reflect = |name: &'static str, odd: bool| {
        do_call(expr, name, |args| {
            let [arg] = args else {
                return None;
            };
            let call = SymExpr::call(name, vec![extract_minus_sign(arg)?]);
            Some(if odd { -call } else { call })
        })
    };

    let opt = ODD.iter().find_map(|name| reflect(*name, true))
        .or_else(|| EVEN.iter().find_map(|name| reflect(*name, false)))?;

    step_collector.push(Step::TrigSymmetry);
    Some(opt)
}

/// `asin(1) = pi/2`
/// `acos(1/2) = pi/3`
/// `atan(1) = pi/4`
/// `sinh(0) = 0`, `cosh(0) = 1`, `tanh(0) = 0`
pub fn inverse_trig(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let single = |args: &[SymExpr]| match args {
        [arg] => Some(arg.clone()),
        _ => None,
    };

    let opt = do_call(expr, "asin", |args| {
        let turn = table::asin(&single(args)?)?;
        Some(table::pi_multiple(turn * 2))
    })
        .or_else(|| do_call(expr, "acos", |args| {
            let turn = table::asin(&single(args)?)?;
            Some(table::pi_multiple(rational((1, 2)) - turn * 2))
        }))
        .or_else(|| do_call(expr, "atan", |args| {
            let turn = table::atan(&single(args)?)?;
            Some(table::pi_multiple(turn * 2))
        }))
        .or_else(|| {
            ["sinh", "tanh"].into_iter().find_map(|name| do_call(expr, name, |args| {
                single(args)?.is_int(0).then(|| SymExpr::int(0))
            }))
        })
        .or_else(|| do_call(expr, "cosh", |args| {
            single(args)?.is_int(0).then(|| SymExpr::int(1))
        }))?;

    step_collector.push(Step::InverseTrig);
    Some(opt)
}

/// If the term is `c*f(u)^2`, returns `c` and `u`.
fn squared_call(term: &SymExpr, name: &str) -> Option<(Number, SymExpr)> {
    let (coefficient, rest) = term_coefficient(term);
    let SymExpr::Exp(base, exp) = rest else {
        return None;
    };
    if !exp.is_int(2) {
        return None;
    }
    match base.as_call(name)? {
        [arg] => Some((coefficient, arg.clone())),
        _ => None,
    }
}

/// `c*sin(x)^2 + c*cos(x)^2 = c`
pub fn pythagorean_identity(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_add(expr, |terms| {
        for (i, term) in terms.iter().enumerate() {
            let Some((coefficient, arg)) = squared_call(term, "sin") else {
                continue;
            };

            let partner = terms.iter().enumerate().position(|(j, other)| {
                j != i && squared_call(other, "cos")
                    .is_some_and(|(other_coefficient, other_arg)| {
                        other_coefficient == coefficient && other_arg == arg
                    })
            });
            let Some(partner) = partner else {
                continue;
            };

            let mut new_terms = terms.iter()
                .enumerate()
                .filter(|(j, _)| *j != i && *j != partner)
                .map(|(_, term)| term.clone())
                .collect::<Vec<_>>();
            new_terms.push(coefficient.into_expr());
            return Some(SymExpr::Add(new_terms).downgrade());
        }
        None
    })?;

    step_collector.push(Step::PythagoreanIdentity);
    Some(opt)
}

/// Applies all trigonometric rules.
pub fn all(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    sin(expr, step_collector)
        .or_else(|| cos(expr, step_collector))
        .or_else(|| tan(expr, step_collector))
        .or_else(|| symmetry(expr, step_collector))
        .or_else(|| inverse_trig(expr, step_collector))
        .or_else(|| pythagorean_identity(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn pi_times(n: i32, d: i32) -> SymExpr {
        SymExpr::rational(rational((n, d))) * SymExpr::symbol(PI)
    }

    #[test]
    fn special_angles() {
        let expr = SymExpr::call("sin", vec![pi_times(1, 6)]);
        assert_eq!(sin(&expr, &mut ()), Some(SymExpr::rational(rational((1, 2)))));

        let expr = SymExpr::call("cos", vec![SymExpr::symbol(PI)]);
        assert_eq!(cos(&expr, &mut ()), Some(SymExpr::int(-1)));

        let expr = SymExpr::call("tan", vec![pi_times(9, 4)]);
        assert_eq!(tan(&expr, &mut ()), Some(SymExpr::int(1)));

        let expr = SymExpr::call("sin", vec![pi_times(1, 5)]);
        assert_eq!(all(&expr, &mut ()), None);
    }

    #[test]
    fn odd_and_even() {
        let x = SymExpr::symbol("x");
        let neg_x = SymExpr::Mul(vec![SymExpr::int(-1), x.clone()]);
        assert_eq!(
            symmetry(&SymExpr::call("sin", vec![neg_x.clone()]), &mut ()),
            Some(-SymExpr::call("sin", vec![x.clone()])),
        );
        assert_eq!(
            symmetry(&SymExpr::call("cos", vec![neg_x]), &mut ()),
            Some(SymExpr::call("cos", vec![x.clone()])),
        );
        assert_eq!(symmetry(&SymExpr::call("cos", vec![x]), &mut ()), None);
    }

    #[test]
    fn inverse_values() {
        let expr = SymExpr::call("asin", vec![SymExpr::int(1)]);
        assert_eq!(inverse_trig(&expr, &mut ()), Some(pi_times(1, 2)));

        let expr = SymExpr::call("acos", vec![SymExpr::rational(rational((1, 2)))]);
        assert_eq!(inverse_trig(&expr, &mut ()), Some(pi_times(1, 3)));

        let expr = SymExpr::call("acos", vec![SymExpr::int(1)]);
        assert_eq!(inverse_trig(&expr, &mut ()), Some(SymExpr::int(0)));

        let expr = SymExpr::call("cosh", vec![SymExpr::int(0)]);
        assert_eq!(inverse_trig(&expr, &mut ()), Some(SymExpr::int(1)));
    }

    #[test]
    fn pythagorean() {
        let x = SymExpr::symbol("x");
        let square = |name: &str| SymExpr::pow(SymExpr::call(name, vec![x.clone()]), SymExpr::int(2));
        let expr = SymExpr::Add(vec![square("sin"), SymExpr::int(3), square("cos")]);
        let mut steps = Vec::new();
        assert_eq!(
            pythagorean_identity(&expr, &mut steps),
            Some(SymExpr::Add(vec![SymExpr::int(3), SymExpr::int(1)])),
        );
        assert_eq!(steps, vec![Step::PythagoreanIdentity]);
    }
}
