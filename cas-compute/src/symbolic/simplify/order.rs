//! Canonical ordering of terms and factors.
//!
//! Terms of a sum are ordered by descending degree in their free symbols, with numbers after
//! symbolic terms, and imaginary terms last: `x**2 + 5*x + 6`, `-1 + sqrt(2)`, `2 - sqrt(3)*I`.
//!
//! Factors of a product are ordered numbers first, then roots of numbers, constants, symbols,
//! function calls, and finally sums: `2*sqrt(3)*pi*x*sin(x)*(x + 1)`.

use crate::symbolic::{
    expr::{is_constant, Primary, SymExpr, E, I},
    number::{term_coefficient, Number},
};
use rug::Rational;
use std::cmp::{Ordering, Reverse};

/// The degree of a term in its free symbols, and the number of function calls it contains.
fn degree(term: &SymExpr) -> (Rational, usize) {
    let factors = match term {
        SymExpr::Mul(factors) => factors.iter().collect(),
        term => vec![term],
    };

    let mut degree = Rational::new();
    let mut calls = 0;
    for factor in factors {
        match factor {
            SymExpr::Primary(Primary::Symbol(sym)) if !is_constant(sym) => degree += 1,
            SymExpr::Primary(Primary::Call(..)) => calls += 1,
            SymExpr::Exp(base, exp) => match (&**base, exp.as_rational()) {
                (SymExpr::Primary(Primary::Symbol(sym)), Some(exp)) if !is_constant(sym) => degree += exp,
                (SymExpr::Primary(Primary::Call(..)), _) => calls += 1,
                (base, _) if base.is_symbol(E) && !exp.is_number() => calls += 1,
                _ => (),
            },
            _ => (),
        }
    }
    (degree, calls)
}

/// Sort key of a term in a sum.
fn term_key(term: &SymExpr) -> (u8, Reverse<Rational>, Reverse<usize>, String) {
    let (_, rest) = term_coefficient(term);
    let class = if !rest.is_number() {
        0
    } else if rest.is_int(1) {
        1
    } else if rest.contains_symbol(I) {
        3
    } else {
        2
    };
    let (degree, calls) = degree(&rest);
    (class, Reverse(degree), Reverse(calls), rest.to_string())
}

/// Sort key of a factor in a product.
fn factor_key(factor: &SymExpr) -> (u8, String, Option<Number>) {
    let (base, exp) = match factor {
        SymExpr::Exp(base, exp) => (&**base, Some(&**exp)),
        factor => (factor, None),
    };

    let class = match base {
        _ if Number::from_expr(factor).is_some() => 0,
        SymExpr::Primary(Primary::Integer(_) | Primary::Float(_)) => 1,
        SymExpr::Primary(Primary::Symbol(sym)) if sym == I => 3,
        SymExpr::Primary(Primary::Symbol(sym)) if sym == E => match exp {
            Some(exp) if !exp.is_number() => 5,
            _ => 2,
        },
        SymExpr::Primary(Primary::Symbol(sym)) if is_constant(sym) => 2,
        SymExpr::Primary(Primary::Symbol(_)) => 4,
        SymExpr::Primary(Primary::Call(..)) => 5,
        _ => 6,
    };

    match base {
        // sums are ordered by their non-constant part, then by their constant:
        // `(x - 2)*(x - 1)*(x + 1)`
        SymExpr::Add(terms) => {
            let (constants, rest): (Vec<_>, Vec<_>) = terms.iter()
                .cloned()
                .partition(|term| Number::from_expr(term).is_some());
            let constant = constants.iter()
                .filter_map(Number::from_expr)
                .fold(Number::zero(), |acc, n| acc.add(&n));
            (class, SymExpr::Add(rest).downgrade().to_string(), Some(constant))
        },
        base => (class, base.to_string(), exp.and_then(Number::from_expr)),
    }
}

fn cmp_factor_keys(a: &(u8, String, Option<Number>), b: &(u8, String, Option<Number>)) -> Ordering {
    a.0.cmp(&b.0)
        .then_with(|| a.1.cmp(&b.1))
        .then_with(|| match (&a.2, &b.2) {
            (Some(a), Some(b)) => a.cmp_value(b),
            (a, b) => a.is_some().cmp(&b.is_some()),
        })
}

/// Sorts the terms and factors of the expression, and all of its subexpressions, into canonical
/// order.
pub fn sort(expr: &SymExpr) -> SymExpr {
    match expr.map_children(sort) {
        SymExpr::Add(mut terms) => {
            terms.sort_by_cached_key(term_key);
            SymExpr::Add(terms)
        },
        SymExpr::Mul(factors) => {
            let mut keyed = factors.into_iter()
                .map(|factor| (factor_key(&factor), factor))
                .collect::<Vec<_>>();
            keyed.sort_by(|(a, _), (b, _)| cmp_factor_keys(a, b));
            SymExpr::Mul(keyed.into_iter().map(|(_, factor)| factor).collect())
        },
        expr => expr,
    }
}

#[cfg(test)]
mod tests {
    use cas_parser::parser::Parser;
    use pretty_assertions::assert_eq;
    use super::*;

    fn sorted(input: &str) -> String {
        let expr = SymExpr::try_from(Parser::new(input).parse_full().unwrap()).unwrap();
        sort(&expr).to_string()
    }

    #[test]
    fn descending_degree() {
        assert_eq!(sorted("6 + 5x + x^2"), "x**2 + 5*x + 6");
        assert_eq!(sorted("y^2 + x^2 + x*y"), "x**2 + x*y + y**2");
        assert_eq!(sorted("sin(x) + x"), "x + sin(x)");
    }

    #[test]
    fn numbers_after_symbols() {
        assert_eq!(sorted("sqrt(2) - 1"), "-1 + sqrt(2)");
        assert_eq!(sorted("sqrt(3)*I + 2"), "2 + sqrt(3)*I");
    }

    #[test]
    fn factor_order() {
        assert_eq!(sorted("x*pi*2"), "2*pi*x");
        assert_eq!(sorted("(x + 1)*(x - 2)*x"), "x*(x - 2)*(x + 1)");
        assert_eq!(sorted("exp(x)*x"), "x*exp(x)");
    }
}
