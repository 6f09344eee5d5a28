//! Text rendering of [`SymExpr`]s.
//!
//! The output uses `**` for powers and `*` for products, prints negative exponents as
//! denominators (`3*x/(2*y)`), square roots as `sqrt(..)`, and powers of `E` as `exp(..)`.

use crate::numerical::fmt::fmt_float;
use crate::symbolic::number::{split_coefficient, term_coefficient, with_coefficient, Number};
use rug::Integer;
use std::fmt;
use super::{Primary, SymExpr, E};

/// Renders an expression. Floats at the top level print all their digits; floats nested inside
/// a larger expression drop trailing zeros.
fn render(expr: &SymExpr, top: bool) -> String {
    match expr {
        SymExpr::Primary(Primary::Integer(int)) => int.to_string(),
        SymExpr::Primary(Primary::Float(float)) => fmt_float(float, !top),
        SymExpr::Primary(Primary::Symbol(sym)) => sym.clone(),
        SymExpr::Primary(Primary::Call(name, args)) => format!(
            "{}({})",
            name,
            args.iter().map(|arg| render(arg, false)).collect::<Vec<_>>().join(", "),
        ),
        SymExpr::Add(terms) => render_sum(terms),
        SymExpr::Mul(factors) => render_product(factors),
        SymExpr::Exp(base, exp) => render_power(base, exp),
    }
}

fn render_sum(terms: &[SymExpr]) -> String {
    let mut out = String::new();
    for (i, term) in terms.iter().enumerate() {
        let (coefficient, rest) = term_coefficient(term);
        if i == 0 {
            out.push_str(&render_term(term));
        } else if coefficient.is_negative() {
            out.push_str(" - ");
            out.push_str(&render_term(&with_coefficient(coefficient.neg(), rest)));
        } else {
            out.push_str(" + ");
            out.push_str(&render_term(term));
        }
    }
    out
}

fn render_term(term: &SymExpr) -> String {
    match term {
        SymExpr::Add(_) => format!("({})", render(term, false)),
        _ => render(term, false),
    }
}

fn render_factor(factor: &SymExpr) -> String {
    match factor {
        SymExpr::Add(_) | SymExpr::Mul(_) => format!("({})", render(factor, false)),
        _ => render(factor, false),
    }
}

/// Returns the negative exponent of a factor as a positive number, if it has one.
fn negative_exponent(factor: &SymExpr) -> Option<(&SymExpr, Number)> {
    match factor {
        SymExpr::Exp(base, exp) if !base.is_symbol(E) => {
            let exp = Number::from_expr(exp)?;
            exp.is_negative().then(|| (&**base, exp.neg()))
        },
        _ => None,
    }
}

fn render_product(factors: &[SymExpr]) -> String {
    let (coefficient, rest) = split_coefficient(factors);

    let mut numer = Vec::new();
    let mut denom = Vec::new();
    let (negative, coefficient) = match coefficient {
        Number::Rational(r) => {
            let negative = r.cmp0().is_lt();
            let (n, d) = r.into_numer_denom();
            let n = n.abs();
            if n != 1 {
                numer.push(n.to_string());
            }
            if d != 1 {
                denom.push(d.to_string());
            }
            (negative, Some(n))
        },
        Number::Float(f) => {
            let negative = f.is_sign_negative();
            numer.push(fmt_float(&f.abs(), true));
            (negative, None)
        },
    };

    for factor in &rest {
        match negative_exponent(factor) {
            Some((base, exp)) if exp.is_one() => denom.push(render_factor(base)),
            Some((base, exp)) => denom.push(render_factor(&SymExpr::pow(base.clone(), exp.into_expr()))),
            None => numer.push(render_factor(factor)),
        }
    }

    if numer.is_empty() {
        numer.push(coefficient.unwrap_or_else(|| Integer::from(1)).to_string());
    }

    let sign = if negative { "-" } else { "" };
    let numer = numer.join("*");
    match denom.len() {
        0 => format!("{}{}", sign, numer),
        1 => format!("{}{}/{}", sign, numer, denom[0]),
        _ => format!("{}{}/({})", sign, numer, denom.join("*")),
    }
}

fn render_power(base: &SymExpr, exp: &SymExpr) -> String {
    if base.is_symbol(E) {
        return format!("exp({})", render(exp, false));
    }

    let number = Number::from_expr(exp);
    if number.as_ref().is_some_and(Number::is_negative) {
        return render_product(&[SymExpr::pow(base.clone(), exp.clone())]);
    }
    if matches!(&number, Some(Number::Rational(r)) if *r.numer() == 1 && *r.denom() == 2) {
        return format!("sqrt({})", render(base, false));
    }

    let base_needs_parens = match base {
        SymExpr::Add(_) | SymExpr::Mul(_) | SymExpr::Exp(..) => true,
        SymExpr::Primary(Primary::Integer(int)) => int.is_negative(),
        SymExpr::Primary(Primary::Float(float)) => float.is_sign_negative(),
        SymExpr::Primary(_) => false,
    };
    let exp_needs_parens = match exp {
        SymExpr::Primary(Primary::Integer(int)) => int.is_negative(),
        SymExpr::Primary(Primary::Float(float)) => float.is_sign_negative(),
        SymExpr::Primary(_) => false,
        _ => true,
    };

    let base = render(base, false);
    let exp = render(exp, false);
    format!(
        "{}**{}",
        if base_needs_parens { format!("({})", base) } else { base },
        if exp_needs_parens { format!("({})", exp) } else { exp },
    )
}

impl fmt::Display for SymExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", render(self, true))
    }
}

impl fmt::Display for Primary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", render(&SymExpr::Primary(self.clone()), true))
    }
}

#[cfg(test)]
mod tests {
    use crate::primitive::{float, rational};
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> SymExpr {
        SymExpr::symbol("x")
    }

    #[test]
    fn sum_with_subtraction() {
        let expr = SymExpr::Add(vec![
            SymExpr::pow(x(), SymExpr::int(2)),
            SymExpr::Mul(vec![SymExpr::int(-1), x()]),
            SymExpr::int(2),
        ]);
        assert_eq!(expr.to_string(), "x**2 - x + 2");
    }

    #[test]
    fn fractions() {
        let expr = SymExpr::Mul(vec![
            SymExpr::int(3),
            x(),
            SymExpr::pow(SymExpr::int(2), SymExpr::int(-1)),
            SymExpr::pow(SymExpr::symbol("y"), SymExpr::int(-1)),
        ]);
        assert_eq!(expr.to_string(), "3*x/(2*y)");
        assert_eq!(SymExpr::rational(rational((-1, 2))).to_string(), "-1/2");
        assert_eq!(
            SymExpr::pow(x() + SymExpr::int(1), SymExpr::int(-1)).to_string(),
            "1/(x + 1)",
        );
        assert_eq!(SymExpr::pow(x(), SymExpr::int(-2)).to_string(), "1/x**2");
    }

    #[test]
    fn roots_and_exponentials() {
        assert_eq!(SymExpr::int(2).sqrt().to_string(), "sqrt(2)");
        assert_eq!(SymExpr::pow(x(), SymExpr::rational(rational((1, 3)))).to_string(), "x**(1/3)");
        assert_eq!(SymExpr::pow(SymExpr::symbol("E"), x()).to_string(), "exp(x)");
        assert_eq!(SymExpr::pow(x() + SymExpr::int(1), SymExpr::int(3)).to_string(), "(x + 1)**3");
    }

    #[test]
    fn imaginary_terms() {
        let expr = SymExpr::Add(vec![
            SymExpr::int(-1),
            SymExpr::Mul(vec![SymExpr::int(-2), SymExpr::symbol("I")]),
        ]);
        assert_eq!(expr.to_string(), "-1 - 2*I");
    }

    #[test]
    fn floats() {
        assert_eq!(SymExpr::float(float(120)).to_string(), "120.000000000000");
        assert_eq!(SymExpr::Mul(vec![SymExpr::float(float(2.5)), x()]).to_string(), "2.5*x");
        assert_eq!((x() + SymExpr::float(float(-0.5))).to_string(), "x - 0.5");
    }
}
