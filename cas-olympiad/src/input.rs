//! Turning the strings in request bodies into expressions and symbol names.

use std::collections::BTreeMap;

use cas_compute::symbolic::{expr::is_constant, SymExpr};
use cas_parser::parser::Parser;

use crate::error::{AppError, AppResult};

/// Parses an expression sent by a client. An equation `lhs = rhs` becomes `lhs - rhs`.
pub fn parse_expression(input: &str) -> AppResult<SymExpr> {
    let ast = Parser::new(input)
        .parse_full()
        .map_err(|err| AppError::parse(&err, input))?;
    SymExpr::try_from(ast).map_err(|err| AppError::parse(&err, input))
}

/// Checks that `name` can be used as a variable: a plain identifier that is not one of the
/// constants `pi`, `E`, `I`.
pub fn parse_symbol(name: &str) -> AppResult<&str> {
    let mut chars = name.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !valid {
        return Err(AppError::BadRequest(format!("`{}` is not a valid symbol name", name)));
    }
    if is_constant(name) {
        return Err(AppError::BadRequest(format!("`{}` is a constant, not a symbol", name)));
    }
    Ok(name)
}

/// Parses a `symbol -> expression` map into substitution pairs.
pub fn parse_substitutions(map: &BTreeMap<String, String>) -> AppResult<Vec<(String, SymExpr)>> {
    map.iter()
        .map(|(name, value)| Ok((parse_symbol(name.trim())?.to_string(), parse_expression(value)?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn equations_become_differences() {
        assert_eq!(parse_expression("x^2 = 4").unwrap().to_string(), "x**2 - 4");
    }

    #[test]
    fn parse_errors_carry_a_report() {
        match parse_expression("(x + 1") {
            Err(AppError::Parse { report, .. }) => assert!(report.contains("(x + 1")),
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn symbol_names() {
        assert_eq!(parse_symbol("theta").unwrap(), "theta");
        assert_eq!(parse_symbol("x_1").unwrap(), "x_1");
        assert!(parse_symbol("").is_err());
        assert!(parse_symbol("2x").is_err());
        assert!(parse_symbol("x y").is_err());
        assert!(parse_symbol("pi").is_err());
    }

    #[test]
    fn substitutions() {
        let map = BTreeMap::from([
            ("a".to_string(), "2".to_string()),
            ("b".to_string(), "c + 1".to_string()),
        ]);
        let pairs = parse_substitutions(&map).unwrap();
        assert_eq!(pairs[0].0, "a");
        assert_eq!(pairs[1].1.to_string(), "c + 1");
    }
}
