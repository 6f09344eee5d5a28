//! Tokenizer and parser for the expression language accepted by the CAS Olympiad API.
//!
//! The language is the small, SymPy-flavored subset of math notation that clients send in request
//! bodies: numbers, names, the arithmetic operators, `^` / `**` for powers, postfix `!`, function
//! calls, implicit multiplication (`2x`, `(x + 1)(x - 1)`), and at most one top-level equation
//! (`lhs = rhs`).
//!
//! ```
//! use cas_parser::parser::{ast::Expr, Parser};
//!
//! let mut parser = Parser::new("x^2 - 4 = 0");
//! let expr = parser.parse_full().unwrap();
//! assert!(matches!(expr, Expr::Equation(_)));
//! ```

pub mod parser;
pub mod tokenizer;
