//! Decimal formatting of [`Float`]s.
//!
//! Values are rounded to [`DIGITS`] significant digits. Fixed-point notation is used when the
//! decimal exponent lies strictly between [`MIN_FIXED`] and [`MAX_FIXED`], scientific notation
//! (`1.5e+20`, `2.0e-7`) otherwise.

use rug::{float::Round, Float};

/// The number of significant digits printed.
pub const DIGITS: usize = 15;

/// Decimal exponents at or below this value use scientific notation.
pub const MIN_FIXED: i32 = -5;

/// Decimal exponents at or above this value use scientific notation.
pub const MAX_FIXED: i32 = DIGITS as i32;

/// Formats a float with [`DIGITS`] significant digits.
///
/// If `strip_zeros` is true, trailing zeros after the decimal point are removed, keeping at least
/// one digit after it (`2.50000000000000` becomes `2.5`, `120.000000000000` becomes `120.0`).
pub fn fmt_float(value: &Float, strip_zeros: bool) -> String {
    if value.is_zero() {
        return String::from("0");
    }
    if value.is_nan() {
        return String::from("nan");
    }
    if value.is_infinite() {
        return String::from(if value.is_sign_negative() { "-oo" } else { "oo" });
    }

    let (negative, mut digits, exp) = value.to_sign_string_exp_round(10, Some(DIGITS), Round::Nearest);
    while digits.len() < DIGITS {
        digits.push('0');
    }

    // `rug` gives `0.ddd * 10^exp`; shift to `d.dd * 10^exponent`
    let exponent = exp.unwrap_or(0) - 1;
    let (digits, split, exponent) = if MIN_FIXED < exponent && exponent < MAX_FIXED {
        if exponent < 0 {
            (format!("{}{}", "0".repeat(exponent.unsigned_abs() as usize), digits), 1, 0)
        } else {
            (digits, exponent as usize + 1, 0)
        }
    } else {
        (digits, 1, exponent)
    };

    let mut out = format!("{}.{}", &digits[..split], &digits[split..]);
    if strip_zeros {
        out.truncate(out.trim_end_matches('0').len());
        if out.ends_with('.') {
            out.push('0');
        }
    }

    let sign = if negative { "-" } else { "" };
    match exponent {
        0 => format!("{}{}", sign, out),
        e if e > 0 => format!("{}{}e+{}", sign, out, e),
        e => format!("{}{}e{}", sign, out, e),
    }
}

#[cfg(test)]
mod tests {
    use crate::primitive::{float, float_from_str};
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn fixed_notation() {
        assert_eq!(fmt_float(&float(120), false), "120.000000000000");
        assert_eq!(fmt_float(&float(-2.5), false), "-2.50000000000000");
        assert_eq!(fmt_float(&float_from_str("0.1"), false), "0.100000000000000");
        assert_eq!(fmt_float(&float_from_str("0.0001"), false), "0.000100000000000000");
    }

    #[test]
    fn pi_times_twelve() {
        let value = float(crate::consts::PI.clone() * 12);
        assert_eq!(fmt_float(&value, false), "37.6991118430775");
    }

    #[test]
    fn scientific_notation() {
        assert_eq!(fmt_float(&float_from_str("1e20"), false), "1.00000000000000e+20");
        assert_eq!(fmt_float(&float_from_str("0.0000025"), false), "2.50000000000000e-6");
        assert_eq!(fmt_float(&float_from_str("1e20"), true), "1.0e+20");
    }

    #[test]
    fn stripped() {
        assert_eq!(fmt_float(&float(2.5), true), "2.5");
        assert_eq!(fmt_float(&float(120), true), "120.0");
        assert_eq!(fmt_float(&float(0), true), "0");
    }
}
