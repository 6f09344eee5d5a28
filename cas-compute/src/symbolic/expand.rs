//! Expansion of products and integer powers of sums.

use crate::error::{ExpandError, MAX_EXPAND_EXPONENT, MAX_EXPAND_TERMS};
use super::expr::{Primary, SymExpr};
use super::simplify::{simplify, simplify_rules};

/// Returns the terms of an expression, treating anything other than a sum as a single term.
fn terms(expr: SymExpr) -> Vec<SymExpr> {
    match expr {
        SymExpr::Add(terms) => terms,
        expr => vec![expr],
    }
}

/// Multiplies two expanded expressions, distributing every term of one over every term of the
/// other.
fn multiply(lhs: SymExpr, rhs: SymExpr) -> Result<SymExpr, ExpandError> {
    let lhs = terms(lhs);
    let rhs = terms(rhs);
    let count = lhs.len().saturating_mul(rhs.len());
    if count > MAX_EXPAND_TERMS {
        return Err(ExpandError::TooManyTerms { terms: count });
    }

    let products = lhs.iter()
        .flat_map(|a| rhs.iter().map(move |b| a.clone() * b.clone()))
        .collect();
    Ok(simplify_rules(&SymExpr::Add(products).downgrade()))
}

/// Raises an expanded sum to a positive integer power by repeated multiplication.
fn power_of_sum(base: SymExpr, exp: u32) -> Result<SymExpr, ExpandError> {
    let mut result = base.clone();
    for _ in 1..exp {
        result = multiply(result, base.clone())?;
    }
    Ok(result)
}

fn expand_inner(expr: &SymExpr) -> Result<SymExpr, ExpandError> {
    match expr {
        SymExpr::Primary(Primary::Call(..)) => expr.try_map_children(expand_inner),
        SymExpr::Primary(_) => Ok(expr.clone()),
        SymExpr::Add(terms) => {
            let terms = terms.iter().map(expand_inner).collect::<Result<Vec<_>, _>>()?;
            Ok(simplify_rules(&SymExpr::Add(terms)))
        },
        SymExpr::Mul(factors) => factors.iter()
            .try_fold(SymExpr::int(1), |acc, factor| multiply(acc, expand_inner(factor)?)),
        SymExpr::Exp(base, exp) => {
            let base = expand_inner(base)?;
            let exp = expand_inner(exp)?;
            let (SymExpr::Add(_), Some(n)) = (&base, exp.as_integer()) else {
                return Ok(simplify_rules(&SymExpr::pow(base, exp)));
            };

            let magnitude = n.clone().abs();
            let Some(magnitude) = magnitude.to_u32().filter(|m| *m <= MAX_EXPAND_EXPONENT) else {
                return Err(ExpandError::ExponentTooLarge { exponent: n.to_string() });
            };

            let expanded = power_of_sum(base, magnitude)?;
            if n.is_negative() {
                // the expansion happens inside the denominator
                Ok(SymExpr::pow(expanded, SymExpr::int(-1)))
            } else {
                Ok(expanded)
            }
        },
    }
}

/// Expands products of sums and positive integer powers of sums, then simplifies the result.
///
/// `(x + 1)^2 = x^2 + 2x + 1`
/// `x(x - 3) = x^2 - 3x`
///
/// Returns [`Err`] if a sum is raised to a power larger than
/// [`MAX_EXPAND_EXPONENT`](crate::error::MAX_EXPAND_EXPONENT), or if the expansion would contain
/// more than [`MAX_EXPAND_TERMS`](crate::error::MAX_EXPAND_TERMS) terms.
pub fn expand(expr: &SymExpr) -> Result<SymExpr, ExpandError> {
    Ok(simplify(&expand_inner(expr)?))
}

#[cfg(test)]
mod tests {
    use cas_parser::parser::Parser;
    use pretty_assertions::assert_eq;
    use super::*;

    fn expanded(input: &str) -> Result<String, ExpandError> {
        let expr = SymExpr::try_from(Parser::new(input).parse_full().unwrap()).unwrap();
        expand(&expr).map(|expr| expr.to_string())
    }

    #[test]
    fn squares() {
        assert_eq!(expanded("(x + 1)^2").unwrap(), "x**2 + 2*x + 1");
        assert_eq!(expanded("(x + y)^2").unwrap(), "x**2 + 2*x*y + y**2");
    }

    #[test]
    fn products() {
        assert_eq!(expanded("(x + 1)(x - 1)").unwrap(), "x**2 - 1");
        assert_eq!(expanded("x*(x + 2)").unwrap(), "x**2 + 2*x");
        assert_eq!(expanded("(x + 1)^3").unwrap(), "x**3 + 3*x**2 + 3*x + 1");
    }

    #[test]
    fn nested_in_calls() {
        assert_eq!(expanded("sin((x + 1)^2)").unwrap(), "sin(x**2 + 2*x + 1)");
    }

    #[test]
    fn denominators() {
        assert_eq!(expanded("1/(x + 1)^2").unwrap(), "1/(x**2 + 2*x + 1)");
    }

    #[test]
    fn exponent_too_large() {
        assert_eq!(
            expanded("(x + 1)^100"),
            Err(ExpandError::ExponentTooLarge { exponent: String::from("100") }),
        );
    }

    #[test]
    fn already_expanded() {
        assert_eq!(expanded("x^2 + 1").unwrap(), "x**2 + 1");
    }
}
