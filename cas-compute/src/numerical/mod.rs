//! Numeric evaluation of expressions with arbitrary precision.
//!
//! Values are computed as [`rug::Complex`] numbers with [`PRECISION`](crate::primitive::PRECISION)
//! bits of precision, and printed with [`fmt::fmt_float`].

pub mod builtin;
pub mod eval;
pub mod fmt;

pub use eval::{eval_complex, evalf};
