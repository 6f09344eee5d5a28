use rug::{Float, Integer, Rational};
use super::primitive::float;

/// The maximum number of terms in a continued fraction before giving up.
const MAX_TERMS: usize = 64;

/// Computes the [`Rational`] from the continued fraction form of a float.
fn rational_from_continued_fraction(continued_fraction_form: &[Integer]) -> Rational {
    let mut terms = continued_fraction_form.iter().rev();
    let mut rational = match terms.next() {
        Some(last) => Rational::from(last),
        None => return Rational::new(),
    };
    for integer in terms {
        rational = rational.recip() + integer;
    }
    rational
}

/// Approximates the given float as a rational fraction.
///
/// This function applies the continued fraction algorithm to the given float until the error is
/// less than `1e-60`. Decimal literals such as `0.1` are not exactly representable in binary, so
/// [`Float::to_rational`] would produce a huge, useless fraction for them.
///
/// Returns [`None`] for non-finite values, or if no good approximation is found.
///
/// See
/// [Wikipedia](https://en.wikipedia.org/wiki/Continued_fraction#Calculating_continued_fraction_representations)
/// for more information.
pub fn approximate_rational(n: &Float) -> Option<Rational> {
    if !n.is_finite() {
        return None;
    }

    let orig = n;
    let mut continued_fraction_form = Vec::new();
    let mut n = n.clone();
    while continued_fraction_form.len() < MAX_TERMS {
        let floor = n.clone().floor();
        let fractional = float(&n - &floor);
        continued_fraction_form.push(floor.to_integer()?);

        // check how close we are to the original number
        let rational = rational_from_continued_fraction(&continued_fraction_form);
        let error = float(orig - &rational).abs();
        if fractional.is_zero() || error < 1e-60 {
            return Some(rational);
        }

        n = fractional.recip();
    }

    None
}

#[cfg(test)]
mod tests {
    use crate::primitive::{float_from_str, rational};
    use super::*;

    #[test]
    fn decimal_literals() {
        assert_eq!(approximate_rational(&float_from_str("0.1")), Some(rational((1, 10))));
        assert_eq!(approximate_rational(&float_from_str("2.5")), Some(rational((5, 2))));
        assert_eq!(approximate_rational(&float_from_str("-0.75")), Some(rational((-3, 4))));
        assert_eq!(approximate_rational(&float(7)), Some(rational(7)));
    }
}
