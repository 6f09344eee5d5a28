//! Factoring over the rationals.
//!
//! Univariate polynomials are split into their content, repeated factors, linear factors from
//! rational roots, and quadratic factors of biquadratics. What remains is left as one factor.
//! Rational functions have their numerator and denominator factored separately. Expressions in
//! more than one symbol only have their common numeric and monomial factor pulled out.

use rug::{ops::Pow, Integer, Rational};
use super::{
    expr::SymExpr,
    number::{term_coefficient, with_coefficient, Number},
    poly::{together, Poly},
    simplify::{simplify, sort},
};

/// Factors of a polynomial, each with its multiplicity.
type Factors = Vec<(Poly, u32)>;

/// Adds a factor to the list, merging it with an equal factor already present.
fn push_factor(factors: &mut Factors, factor: Poly, multiplicity: u32) {
    let (_, factor) = factor.content_primitive();
    match factors.iter_mut().find(|(other, _)| *other == factor) {
        Some((_, count)) => *count += multiplicity,
        None => factors.push((factor, multiplicity)),
    }
}

/// Splits a polynomial into its numeric content and primitive factors with integer
/// coefficients.
fn factor_poly(p: &Poly) -> (Rational, Factors) {
    let mut factors = Factors::new();
    for (part, multiplicity) in p.square_free() {
        let (roots, rest) = part.split_rational_roots();
        for (root, count) in roots {
            let linear = Poly::new(vec![-root, Rational::from(1)]);
            push_factor(&mut factors, linear, count * multiplicity);
        }

        if rest.degree() == 0 {
            continue;
        }
        match rest.split_biquadratic() {
            Some((a, b)) => {
                push_factor(&mut factors, a, multiplicity);
                push_factor(&mut factors, b, multiplicity);
            },
            None => push_factor(&mut factors, rest, multiplicity),
        }
    }

    let content = factors.iter().fold(p.leading(), |content, (factor, multiplicity)| {
        content / factor.leading().pow(*multiplicity as i32)
    });
    (content, factors)
}

/// Converts the factors into expressions, raising them to their multiplicity. The multiplicity
/// is negated for factors of a denominator.
fn factor_exprs(factors: Factors, var: &str, sign: i64) -> impl Iterator<Item = SymExpr> + '_ {
    factors.into_iter().map(move |(factor, multiplicity)| {
        let exp = sign * i64::from(multiplicity);
        if exp == 1 {
            factor.to_expr(var)
        } else {
            SymExpr::pow(factor.to_expr(var), SymExpr::int(exp))
        }
    })
}

/// Factors a rational function of `var`.
fn factor_univariate(expr: &SymExpr, var: &str) -> Option<SymExpr> {
    let (numer, denom) = together(expr, var)?;
    if numer.is_zero() {
        return Some(SymExpr::int(0));
    }

    let (numer_content, numer_factors) = factor_poly(&numer);
    let (denom_content, denom_factors) = factor_poly(&denom);
    let factors = factor_exprs(numer_factors, var, 1)
        .chain(factor_exprs(denom_factors, var, -1))
        .collect::<Vec<_>>();

    let coefficient = Number::Rational(numer_content / denom_content);
    Some(with_coefficient(coefficient, SymExpr::Mul(factors).downgrade()))
}

/// Returns the base and integer exponent of a factor. A factor that is not a power has exponent
/// one.
fn base_and_power(factor: &SymExpr) -> (SymExpr, Integer) {
    match factor {
        SymExpr::Exp(base, exp) => match exp.as_integer() {
            Some(exp) => (*base.clone(), exp.clone()),
            None => (factor.clone(), Integer::from(1)),
        },
        factor => (factor.clone(), Integer::from(1)),
    }
}

/// The non-numeric factors of a term, paired with their exponents.
fn monomial(term: &SymExpr) -> (Number, Vec<(SymExpr, Integer)>) {
    let (coefficient, rest) = term_coefficient(term);
    let factors = match rest {
        SymExpr::Mul(factors) => factors,
        rest if rest.is_int(1) => Vec::new(),
        rest => vec![rest],
    };
    (coefficient, factors.iter().map(base_and_power).collect())
}

/// `gcd(a/b, c/d) = gcd(a, c) / lcm(b, d)`
fn rational_gcd(a: &Rational, b: &Rational) -> Rational {
    let numer = Integer::from(a.numer().gcd_ref(b.numer()));
    let denom = Integer::from(a.denom().lcm_ref(b.denom()));
    Rational::from((numer, denom))
}

/// Pulls the common numeric factor and the common monomial out of a sum.
///
/// `2xy + 4x = 2x(y + 2)`
fn common_factor(expr: &SymExpr) -> Option<SymExpr> {
    let SymExpr::Add(terms) = expr else {
        return None;
    };
    let monomials = terms.iter().map(monomial).collect::<Vec<_>>();

    // one if any coefficient is a float
    let gcd = monomials.iter()
        .map(|(coefficient, _)| match coefficient {
            Number::Rational(r) => Some(r.clone()),
            Number::Float(_) => None,
        })
        .try_fold(Rational::new(), |acc, r| Some(rational_gcd(&acc, &r?)))
        .filter(|gcd| gcd.cmp0().is_gt())
        .unwrap_or_else(|| Rational::from(1));

    // bases present in every term with a positive exponent, with their smallest exponent
    let (_, first) = &monomials[0];
    let common = first.iter()
        .filter(|(_, exp)| exp.cmp0().is_gt())
        .filter_map(|(base, exp)| {
            monomials[1..].iter().try_fold(exp.clone(), |min, (_, factors)| {
                let (_, other) = factors.iter().find(|(other, exp)| other == base && exp.cmp0().is_gt())?;
                Some(min.min(other.clone()))
            })
            .map(|min| (base.clone(), min))
        })
        .collect::<Vec<_>>();

    if gcd == 1 && common.is_empty() {
        return None;
    }

    let new_terms = monomials.into_iter()
        .map(|(coefficient, factors)| {
            let coefficient = match coefficient {
                Number::Rational(r) => Number::Rational(r / &gcd),
                float => float,
            };
            let factors = factors.into_iter()
                .filter_map(|(base, exp)| {
                    let exp = match common.iter().find(|(other, _)| *other == base) {
                        Some((_, min)) => exp - min,
                        None => exp,
                    };
                    match exp.to_i32() {
                        Some(0) => None,
                        Some(1) => Some(base),
                        _ => Some(SymExpr::pow(base, SymExpr::from(exp))),
                    }
                })
                .collect::<Vec<_>>();
            with_coefficient(coefficient, SymExpr::Mul(factors).downgrade())
        })
        .collect::<Vec<_>>();

    let mut factors = common.into_iter()
        .map(|(base, exp)| if exp == 1 { base } else { SymExpr::pow(base, SymExpr::from(exp)) })
        .collect::<Vec<_>>();
    factors.push(SymExpr::Add(new_terms));
    Some(with_coefficient(Number::Rational(gcd), SymExpr::Mul(factors).downgrade()))
}

/// Factors the expression over the rationals.
///
/// The expression is simplified first. The factored result is put into canonical order, but not
/// simplified again, since that would multiply the factors back out.
pub fn factor(expr: &SymExpr) -> SymExpr {
    let simplified = simplify(expr);
    let symbols = simplified.free_symbols();
    let factored = match symbols.len() {
        0 => None,
        1 => symbols.first().and_then(|var| factor_univariate(&simplified, var)),
        _ => common_factor(&simplified),
    };

    match factored {
        Some(factored) => sort(&factored),
        None => simplified,
    }
}

#[cfg(test)]
mod tests {
    use cas_parser::parser::Parser;
    use pretty_assertions::assert_eq;
    use super::*;

    fn factored(input: &str) -> String {
        let expr = SymExpr::try_from(Parser::new(input).parse_full().unwrap()).unwrap();
        factor(&expr).to_string()
    }

    #[test]
    fn quadratics() {
        assert_eq!(factored("x^2 + 5x + 6"), "(x + 2)*(x + 3)");
        assert_eq!(factored("x^2 - 1"), "(x - 1)*(x + 1)");
        assert_eq!(factored("2x^2 + 3x + 1"), "(2*x + 1)*(x + 1)");
    }

    #[test]
    fn content_and_monomials() {
        assert_eq!(factored("2x^2 - 2"), "2*(x - 1)*(x + 1)");
        assert_eq!(factored("x^3 - x"), "x*(x - 1)*(x + 1)");
    }

    #[test]
    fn repeated_factors() {
        assert_eq!(factored("x^2 + 2x + 1"), "(x + 1)**2");
        assert_eq!(factored("x^3 + x^2"), "x**2*(x + 1)");
    }

    #[test]
    fn quartics() {
        assert_eq!(factored("x^4 - 1"), "(x - 1)*(x + 1)*(x**2 + 1)");
        assert_eq!(factored("x^4 - 5x^2 + 6"), "(x**2 - 3)*(x**2 - 2)");
    }

    #[test]
    fn irreducible() {
        assert_eq!(factored("x^2 + 1"), "x**2 + 1");
    }

    #[test]
    fn rational_functions() {
        assert_eq!(factored("(x^2 - 1)/(x + 2)"), "(x - 1)*(x + 1)/(x + 2)");
    }

    #[test]
    fn multivariate() {
        assert_eq!(factored("2x*y + 4x"), "2*x*(y + 2)");
        assert_eq!(factored("x + y"), "x + y");
    }

    #[test]
    fn numbers() {
        assert_eq!(factored("12"), "12");
    }
}
