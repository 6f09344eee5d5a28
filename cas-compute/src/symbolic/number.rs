//! Exact and approximate numbers appearing inside a [`SymExpr`].
//!
//! A [`SymExpr`] has no dedicated rational variant: `3/4` is stored as `3 * 4^-1`. [`Number`]
//! recognizes these forms so that simplification rules can do arithmetic on them.

use crate::primitive::float;
use rug::{Float, Rational};
use std::cmp::Ordering;
use super::expr::{Primary, SymExpr};

/// A numeric value extracted from a [`SymExpr`].
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    /// An exact rational number.
    Rational(Rational),

    /// An approximate floating-point number.
    Float(Float),
}

impl Number {
    /// Extracts the number an expression represents, if the expression is an integer, a float, the
    /// reciprocal of an integer, or a product of these.
    pub fn from_expr(expr: &SymExpr) -> Option<Self> {
        match expr {
            SymExpr::Primary(Primary::Integer(int)) => Some(Self::Rational(Rational::from(int))),
            SymExpr::Primary(Primary::Float(float)) => Some(Self::Float(float.clone())),
            SymExpr::Exp(..) => expr.as_rational().map(Self::Rational),
            SymExpr::Mul(factors) => factors.iter()
                .try_fold(Self::one(), |acc, factor| Some(acc.mul(&Self::from_expr(factor)?))),
            _ => None,
        }
    }

    /// The number one.
    pub fn one() -> Self {
        Self::Rational(Rational::from(1))
    }

    /// The number zero.
    pub fn zero() -> Self {
        Self::Rational(Rational::new())
    }

    /// Converts the number back into its canonical [`SymExpr`] form.
    pub fn into_expr(self) -> SymExpr {
        match self {
            Self::Rational(r) => SymExpr::rational(r),
            Self::Float(f) => SymExpr::float(f),
        }
    }

    /// Returns true if the number is exactly zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Rational(r) => r.cmp0() == Ordering::Equal,
            Self::Float(f) => f.is_zero(),
        }
    }

    /// Returns true if the number is the exact rational one. `1.0` is not considered one, so it
    /// is kept as a marker that the expression is approximate.
    pub fn is_one(&self) -> bool {
        matches!(self, Self::Rational(r) if *r == 1)
    }

    /// Returns true if the number is less than zero.
    pub fn is_negative(&self) -> bool {
        match self {
            Self::Rational(r) => r.cmp0() == Ordering::Less,
            Self::Float(f) => f.is_sign_negative() && !f.is_zero(),
        }
    }

    /// Returns the value as a [`Float`].
    pub fn to_float(&self) -> Float {
        match self {
            Self::Rational(r) => float(r),
            Self::Float(f) => f.clone(),
        }
    }

    /// Adds two numbers. The result is a float if either operand is.
    pub fn add(&self, other: &Self) -> Self {
        match (self, other) {
            (Self::Rational(a), Self::Rational(b)) => Self::Rational(Rational::from(a + b)),
            (a, b) => Self::Float(float(a.to_float() + b.to_float())),
        }
    }

    /// Multiplies two numbers. The result is a float if either operand is.
    pub fn mul(&self, other: &Self) -> Self {
        match (self, other) {
            (Self::Rational(a), Self::Rational(b)) => Self::Rational(Rational::from(a * b)),
            (a, b) => Self::Float(float(a.to_float() * b.to_float())),
        }
    }

    /// Negates the number.
    pub fn neg(&self) -> Self {
        match self {
            Self::Rational(r) => Self::Rational(-r.clone()),
            Self::Float(f) => Self::Float(-f.clone()),
        }
    }

    /// Returns the absolute value of the number.
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            self.neg()
        } else {
            self.clone()
        }
    }

    /// Compares two numbers by value.
    pub fn cmp_value(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Rational(a), Self::Rational(b)) => a.cmp(b),
            (a, b) => a.to_float().partial_cmp(&b.to_float()).unwrap_or(Ordering::Equal),
        }
    }
}

/// Splits the numeric factors of a product from the rest. The numeric factors are multiplied
/// into a single coefficient.
pub fn split_coefficient(factors: &[SymExpr]) -> (Number, Vec<SymExpr>) {
    let mut coefficient = Number::one();
    let mut rest = Vec::new();
    for factor in factors {
        match Number::from_expr(factor) {
            Some(n) => coefficient = coefficient.mul(&n),
            None => rest.push(factor.clone()),
        }
    }
    (coefficient, rest)
}

/// Splits a term into its numeric coefficient and the rest of the term.
pub fn term_coefficient(term: &SymExpr) -> (Number, SymExpr) {
    if let Some(n) = Number::from_expr(term) {
        return (n, SymExpr::int(1));
    }

    match term {
        SymExpr::Mul(factors) => {
            let (coefficient, rest) = split_coefficient(factors);
            (coefficient, SymExpr::Mul(rest).downgrade())
        },
        _ => (Number::one(), term.clone()),
    }
}

/// Rebuilds the term `coefficient * rest`, leaving out a coefficient of one and a rest of one.
pub fn with_coefficient(coefficient: Number, rest: SymExpr) -> SymExpr {
    if rest.is_int(1) {
        coefficient.into_expr()
    } else if coefficient.is_one() {
        rest
    } else {
        coefficient.into_expr() * rest
    }
}
