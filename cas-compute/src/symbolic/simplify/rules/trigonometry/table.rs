//! Exact values of the trigonometric functions at multiples of `pi/12` and `pi/4`.
//!
//! Angles are given as a **turn**: the angle divided by `2pi`, reduced into `[0, 1)`. For example,
//! `pi/6` is the turn `1/12`. Using turns lets one table serve every input angle.

use crate::primitive::rational;
use crate::symbolic::expr::{SymExpr, PI};
use rug::Rational;

/// `sqrt(n)/d`
fn root_over(n: i32, d: i32) -> SymExpr {
    SymExpr::Mul(vec![
        SymExpr::rational(rational((1, d))),
        SymExpr::int(n).sqrt(),
    ])
}

/// The value of `sin` at `k/24` turns, for `k` in the first quadrant `0..=6`.
fn first_quadrant_sin(k: u32) -> Option<SymExpr> {
    Some(match k {
        0 => SymExpr::int(0),
        2 => SymExpr::rational(rational((1, 2))),
        3 => root_over(2, 2),
        4 => root_over(3, 2),
        6 => SymExpr::int(1),
        _ => return None,
    })
}

/// The value of `tan` at `k/24` turns, for `k` in `0..6`.
fn first_quadrant_tan(k: u32) -> Option<SymExpr> {
    Some(match k {
        0 => SymExpr::int(0),
        2 => root_over(3, 3),
        3 => SymExpr::int(1),
        4 => SymExpr::int(3).sqrt(),
        _ => return None,
    })
}

/// Returns `24 * turn` if it is an integer.
fn twenty_fourths(turn: &Rational) -> Option<u32> {
    let scaled: Rational = turn.clone() * 24;
    if *scaled.denom() == 1 {
        scaled.numer().to_u32()
    } else {
        None
    }
}

/// Reduces a turn into `[0, 1)`.
pub fn normalize(turn: Rational) -> Rational {
    let whole = turn.clone().floor();
    turn - whole
}

/// The exact value of `sin` at the given turn in `[0, 1)`.
pub fn sin(turn: &Rational) -> Option<SymExpr> {
    let k = twenty_fourths(turn)?;
    match k {
        0..=6 => first_quadrant_sin(k),
        7..=12 => first_quadrant_sin(12 - k),
        _ => first_quadrant_sin(k - 12).map(|value| -value),
    }
}

/// The exact value of `cos` at the given turn in `[0, 1)`.
pub fn cos(turn: &Rational) -> Option<SymExpr> {
    sin(&normalize(turn.clone() + rational((1, 4))))
}

/// The exact value of `tan` at the given turn in `[0, 1)`. Returns [`None`] where `tan` is
/// undefined.
pub fn tan(turn: &Rational) -> Option<SymExpr> {
    // tan has a period of half a turn
    let k = twenty_fourths(turn)? % 12;
    match k {
        0..=5 => first_quadrant_tan(k),
        6 => None,
        _ => first_quadrant_tan(12 - k).map(|value| -value),
    }
}

/// `coefficient * pi`, where `coefficient` is a rational number.
pub fn pi_multiple(coefficient: Rational) -> SymExpr {
    if coefficient == 0 {
        SymExpr::int(0)
    } else if coefficient == 1 {
        SymExpr::symbol(PI)
    } else {
        SymExpr::rational(coefficient) * SymExpr::symbol(PI)
    }
}

/// Returns the turn `x` in `[-1/4, 1/4]` with `sin(x) = value`, if `value` is one of the exact
/// values in the table.
pub fn asin(value: &SymExpr) -> Option<Rational> {
    (-6..=6)
        .find(|k: &i32| {
            let k_abs = k.unsigned_abs();
            first_quadrant_sin(k_abs).is_some_and(|known| {
                let known = if *k < 0 { -known } else { known };
                known == *value
            })
        })
        .map(|k| rational((k, 24)))
}

/// Returns the turn `x` in `(-1/4, 1/4)` with `tan(x) = value`, if `value` is one of the exact
/// values in the table.
pub fn atan(value: &SymExpr) -> Option<Rational> {
    (-5..=5)
        .find(|k: &i32| {
            let k_abs = k.unsigned_abs();
            first_quadrant_tan(k_abs).is_some_and(|known| {
                let known = if *k < 0 { -known } else { known };
                known == *value
            })
        })
        .map(|k| rational((k, 24)))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn quadrants() {
        assert_eq!(sin(&rational((1, 12))), Some(SymExpr::rational(rational((1, 2)))));
        assert_eq!(sin(&rational((5, 12))), Some(SymExpr::rational(rational((1, 2)))));
        assert_eq!(sin(&rational((3, 4))), Some(SymExpr::int(-1)));
        assert_eq!(cos(&rational((1, 2))), Some(SymExpr::int(-1)));
        assert_eq!(cos(&rational((1, 4))), Some(SymExpr::int(0)));
        assert_eq!(tan(&rational((1, 4))), None);
        assert_eq!(tan(&rational((3, 8))), Some(SymExpr::int(-1)));
        assert_eq!(sin(&rational((1, 5))), None);
    }

    #[test]
    fn normalized_turns() {
        assert_eq!(normalize(rational((5, 4))), rational((1, 4)));
        assert_eq!(normalize(rational((-1, 4))), rational((3, 4)));
    }

    #[test]
    fn inverse_lookup() {
        assert_eq!(asin(&SymExpr::int(1)), Some(rational((1, 4))));
        assert_eq!(asin(&root_over(3, 2)), Some(rational((1, 6))));
        assert_eq!(atan(&SymExpr::int(-1)), Some(rational((-1, 8))));
        assert_eq!(asin(&SymExpr::int(2)), None);
    }
}
