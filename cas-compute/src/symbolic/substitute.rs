//! Replacing symbols with expressions.

use super::expr::{Primary, SymExpr};
use super::simplify::simplify;

/// Replaces every listed symbol at once, without simplifying. A replacement is never itself
/// searched for symbols, so `x -> y, y -> x` swaps the two.
pub fn replace(expr: &SymExpr, replacements: &[(String, SymExpr)]) -> SymExpr {
    match expr {
        SymExpr::Primary(Primary::Symbol(sym)) => replacements.iter()
            .find(|(name, _)| name == sym)
            .map(|(_, value)| value.clone())
            .unwrap_or_else(|| expr.clone()),
        expr => expr.map_children(|child| replace(child, replacements)),
    }
}

/// Replaces every listed symbol at once, then simplifies the result.
pub fn substitute(expr: &SymExpr, replacements: &[(String, SymExpr)]) -> SymExpr {
    simplify(&replace(expr, replacements))
}

#[cfg(test)]
mod tests {
    use cas_parser::parser::Parser;
    use pretty_assertions::assert_eq;
    use super::*;

    fn parse(input: &str) -> SymExpr {
        SymExpr::try_from(Parser::new(input).parse_full().unwrap()).unwrap()
    }

    fn with(pairs: &[(&str, &str)]) -> Vec<(String, SymExpr)> {
        pairs.iter().map(|(name, value)| (name.to_string(), parse(value))).collect()
    }

    #[test]
    fn substitutes_numbers() {
        assert_eq!(substitute(&parse("x^2 + 3x"), &with(&[("x", "2")])).to_string(), "10");
    }

    #[test]
    fn substitutes_expressions() {
        assert_eq!(substitute(&parse("x + 1"), &with(&[("x", "y - 1")])).to_string(), "y");
    }

    #[test]
    fn replacements_are_simultaneous() {
        let swapped = substitute(&parse("x - 2y"), &with(&[("x", "y"), ("y", "x")]));
        assert_eq!(swapped.to_string(), "-2*x + y");
    }

    #[test]
    fn unrelated_symbols_are_kept() {
        assert_eq!(substitute(&parse("a*b"), &with(&[("c", "1")])).to_string(), "a*b");
    }
}
