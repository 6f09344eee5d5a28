//! Symbolic and numeric algebra on parsed expressions.
//!
//! Expressions are parsed with [`cas_parser`] and converted into a
//! [`SymExpr`](symbolic::SymExpr). The [`symbolic`] module manipulates them exactly; the
//! [`numerical`] module evaluates them with arbitrary precision floats from [`rug`].
//!
//! ```
//! use cas_compute::symbolic::{expr::SymExpr, solve};
//! use cas_parser::parser::Parser;
//!
//! let ast_expr = Parser::new("x^2 - 5x + 6 = 0").parse_full().unwrap();
//! let roots = solve(&SymExpr::try_from(ast_expr).unwrap(), "x").unwrap();
//! assert_eq!(roots, vec![SymExpr::int(2), SymExpr::int(3)]);
//! ```

pub mod approx;
pub mod consts;
pub mod error;
pub mod funcs;
pub mod numerical;
pub mod primitive;
pub mod symbolic;

pub use error::Error;
