//! Algebraic manipulation of expressions.
//!
//! # Expression representation
//!
//! Algebraic expressions in this module are represented as a tree of [`SymExpr`] nodes. It's
//! similar to the [`cas_parser::parser::ast::Expr`] nodes produced by [`cas_parser`], with the
//! main difference being that [`SymExpr`] nodes **flatten** out the tree structure.
//!
//! For example, the expression `x + (y + z)` would be represented internally as a single
//! [`SymExpr::Add`] node with _three_ children, `x`, `y`, and `z`, where as the
//! [`cas_parser::parser::ast::Expr`] node would have two children, `x` and `(y + z)`.
//!
//! Conversion from [`cas_parser::parser::ast::Expr`] is done with [`TryFrom`]. It is lossy, as
//! [`SymExpr`] does not store span information, but the result is semantically equivalent to the
//! original. An equation `a = b` becomes the expression `a - b`, whose zeros are the solutions of
//! the equation.
//!
//! ```
//! use cas_compute::symbolic::expr::{Primary, SymExpr};
//! use cas_parser::parser::Parser;
//!
//! let ast_expr = Parser::new("x + (y + z)").parse_full().unwrap();
//! let expr = SymExpr::try_from(ast_expr).unwrap();
//! assert_eq!(expr, SymExpr::Add(vec![
//!     SymExpr::Primary(Primary::Symbol("x".to_string())),
//!     SymExpr::Primary(Primary::Symbol("y".to_string())),
//!     SymExpr::Primary(Primary::Symbol("z".to_string())),
//! ]));
//! ```
//!
//! # Simplification
//!
//! A primary use case for algebraic manipulation is to reduce expressions to some canonical form.
//! This is done with the [`simplify()`] function, which accepts an expression and returns a
//! "simplified" version of it. Simplification applies the rules in [`simplify::rules`] in
//! multiple passes, until none of them apply.
//!
//! ```
//! use cas_compute::symbolic::{expr::SymExpr, simplify};
//! use cas_parser::parser::Parser;
//!
//! let ast_expr = Parser::new("x + x + x").parse_full().unwrap();
//! let simplified = simplify(&SymExpr::try_from(ast_expr).unwrap());
//! assert_eq!(simplified.to_string(), "3*x");
//! ```
//!
//! # Other routines
//!
//! The remaining modules build on simplification: [`expand()`], [`factor()`], [`solve()`],
//! [`substitute()`], [`derivative()`], and [`integrate()`].

pub mod derivative;
pub mod expand;
pub mod expr;
pub mod factor;
pub mod integrate;
pub mod number;
pub mod poly;
pub mod simplify;
pub mod solve;
pub mod step_collector;
pub mod substitute;

pub use derivative::derivative;
pub use expand::expand;
pub use expr::SymExpr;
pub use factor::factor;
pub use integrate::integrate;
pub use simplify::{simplify, simplify_with_steps};
pub use solve::solve;
pub use step_collector::StepCollector;
pub use substitute::substitute;
