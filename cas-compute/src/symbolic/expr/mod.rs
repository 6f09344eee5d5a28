//! A representation of mathematical expressions that is easier to manipulate than an AST.
//!
//! The [`Expr`](cas_parser::parser::ast::expr::Expr) type from `cas_parser` is a recursive `enum`
//! that represents the AST of a mathematical expression. It's convenient for parsing, but not so
//! much for algebraic manipulation.
//!
//! This module defines [`SymExpr`], which recursively flattens the AST into lists of terms and
//! factors, and normalizes the operations it does not need: subtraction becomes addition of a
//! negated term, division becomes multiplication by a power of `-1`, `sqrt(u)` becomes `u^(1/2)`,
//! `exp(u)` becomes `E^u`, and an equation `a = b` becomes `a - b`.
//!
//! # Strict equality
//!
//! Determining whether two expressions are mathematically equal is as hard as simplifying them.
//! Instead, we define a subset of semantic equality called **strict equality**. Two expressions
//! are strictly equal if:
//!
//! - They are the same type of expression (i.e. both [`SymExpr::Primary`], both [`SymExpr::Add`],
//!   etc.).
//! - If both are [`SymExpr::Primary`], both expressions must have strictly equal values.
//! - If both are [`SymExpr::Add`] or [`SymExpr::Mul`], both expressions must have strictly equal
//!   terms / factors, in any order.
//! - If both are [`SymExpr::Exp`], both expressions must have strictly equal base and exponent.
//!
//! Strict equality can **never** report false positives, and it does not depend on any
//! simplification to work. Simplification rules use it to decide whether terms / factors are
//! similar enough to be combined.
//!
//! The [`PartialEq`] and [`Eq`] implementations for [`SymExpr`] implement **strict equality**.

pub mod error;
mod fmt;

use cas_error::Error;
use cas_parser::parser::{
    ast::{expr::Expr as AstExpr, literal::Literal},
    op::{BinOpKind, UnaryOpKind},
};
use crate::primitive::{float_from_str, int, int_from_str};
use error::WrongArgumentCount;
use rug::{Float, Integer, Rational};
use std::{collections::BTreeSet, ops::{Add, AddAssign, Mul, MulAssign, Neg}};

/// The name of the constant `pi`.
pub const PI: &str = "pi";

/// The name of Euler's number.
pub const E: &str = "E";

/// The name of the imaginary unit.
pub const I: &str = "I";

/// Returns true if the symbol with the given name is one of the constants [`PI`], [`E`], or [`I`].
pub fn is_constant(name: &str) -> bool {
    matches!(name, PI | E | I)
}

/// A single term / factor, such as a number, variable, or function call.
#[derive(Debug, Clone, PartialEq)]
pub enum Primary {
    /// An integer, such as `2` or `144`.
    Integer(Integer),

    /// A floating-point number, such as `3.14` or `0.5`.
    Float(Float),

    /// A variable or constant, such as `x`, `pi`, or `I`.
    Symbol(String),

    /// A function call, such as `sin(x)` or `f(x, y)`.
    Call(String, Vec<SymExpr>),
}

/// This module **must never** produce non-normal [`Float`]s (such as `NaN` or `Infinity`) inside
/// a [`SymExpr`].
impl Eq for Primary {}

/// A mathematical expression with information about its terms and factors.
///
/// This type should be distinguished from the [`cas_parser::parser::ast::Expr`] type, which is
/// produced by [`cas_parser`]. The main difference is that this type **flattens** out the tree
/// structure. For example, the expression `x + (y + z)` is represented as a single
/// [`SymExpr::Add`] node with _three_ children, `x`, `y`, and `z`.
///
/// For more information about this type, see the [module-level documentation](self).
#[derive(Debug, Clone, Eq)]
pub enum SymExpr {
    /// A single term or factor.
    Primary(Primary),

    /// Multiple terms added together.
    Add(Vec<SymExpr>),

    /// Multiple factors multiplied together.
    Mul(Vec<SymExpr>),

    /// An expression raised to a power.
    Exp(Box<SymExpr>, Box<SymExpr>),
}

impl SymExpr {
    /// Creates an integer expression.
    pub fn int<T>(n: T) -> Self
    where
        Integer: From<T>,
    {
        Self::Primary(Primary::Integer(int(n)))
    }

    /// Creates a floating-point expression.
    pub fn float(n: Float) -> Self {
        Self::Primary(Primary::Float(n))
    }

    /// Creates a symbol expression.
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Primary(Primary::Symbol(name.into()))
    }

    /// Creates a function call expression.
    pub fn call(name: impl Into<String>, args: Vec<SymExpr>) -> Self {
        Self::Primary(Primary::Call(name.into(), args))
    }

    /// Creates `base^exp`. No simplification is done.
    pub fn pow(base: SymExpr, exp: SymExpr) -> Self {
        Self::Exp(Box::new(base), Box::new(exp))
    }

    /// Creates the canonical form of a rational number: an integer, `d^-1`, or `n * d^-1`.
    pub fn rational(r: Rational) -> Self {
        let (numer, denom) = r.into_numer_denom();
        if denom == 1 {
            Self::Primary(Primary::Integer(numer))
        } else if numer == 1 {
            Self::pow(Self::Primary(Primary::Integer(denom)), Self::int(-1))
        } else {
            Self::Mul(vec![
                Self::Primary(Primary::Integer(numer)),
                Self::pow(Self::Primary(Primary::Integer(denom)), Self::int(-1)),
            ])
        }
    }

    /// Creates the fraction `numerator / denominator`. No simplification is done.
    pub fn fraction(numerator: SymExpr, denominator: SymExpr) -> Self {
        numerator * Self::pow(denominator, Self::int(-1))
    }

    /// Returns the square root of this expression. No simplification is done.
    pub fn sqrt(self) -> Self {
        Self::pow(self, Self::rational(Rational::from((1, 2))))
    }

    /// If the expression is a [`Primary::Integer`], returns a reference to the contained integer.
    pub fn as_integer(&self) -> Option<&Integer> {
        match self {
            Self::Primary(Primary::Integer(int)) => Some(int),
            _ => None,
        }
    }

    /// If the expression is a [`Primary::Integer`], returns the contained integer.
    pub fn into_integer(self) -> Option<Integer> {
        match self {
            Self::Primary(Primary::Integer(int)) => Some(int),
            _ => None,
        }
    }

    /// Returns true if the expression is a [`Primary::Integer`].
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Primary(Primary::Integer(_)))
    }

    /// Returns true if the expression is the integer `n`.
    pub fn is_int(&self, n: i32) -> bool {
        self.as_integer().is_some_and(|int| *int == n)
    }

    /// Returns true if the expression is a [`Primary::Float`].
    pub fn is_float(&self) -> bool {
        matches!(self, Self::Primary(Primary::Float(_)))
    }

    /// If the expression is a [`Primary::Symbol`], returns a reference to the contained symbol.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Self::Primary(Primary::Symbol(sym)) => Some(sym),
            _ => None,
        }
    }

    /// Returns true if the expression is the symbol with the given name.
    pub fn is_symbol(&self, name: &str) -> bool {
        self.as_symbol() == Some(name)
    }

    /// If the expression is a call to the function with the given name, returns its arguments.
    pub fn as_call(&self, name: &str) -> Option<&[SymExpr]> {
        match self {
            Self::Primary(Primary::Call(target, args)) if target == name => Some(args),
            _ => None,
        }
    }

    /// If the expression is an exact rational number (an integer, or an integer multiplied by the
    /// reciprocal of an integer), returns its value.
    pub fn as_rational(&self) -> Option<Rational> {
        match self {
            Self::Primary(Primary::Integer(n)) => Some(Rational::from(n)),
            Self::Exp(base, exp) if exp.is_int(-1) => {
                let base = base.as_integer()?;
                if base.is_zero() {
                    None
                } else {
                    Some(Rational::from((int(1), base.clone())))
                }
            },
            Self::Mul(factors) => factors.iter()
                .try_fold(Rational::from(1), |acc, factor| Some(acc * factor.as_rational()?)),
            _ => None,
        }
    }

    /// Returns the children of this expression: the terms of a sum, the factors of a product, the
    /// base and exponent of a power, or the arguments of a call.
    pub fn children(&self) -> Vec<&SymExpr> {
        match self {
            Self::Primary(Primary::Call(_, args)) => args.iter().collect(),
            Self::Primary(_) => Vec::new(),
            Self::Add(children) | Self::Mul(children) => children.iter().collect(),
            Self::Exp(base, exp) => vec![base, exp],
        }
    }

    /// Rebuilds this expression with every child transformed by `f`.
    pub fn map_children(&self, mut f: impl FnMut(&SymExpr) -> SymExpr) -> SymExpr {
        match self {
            Self::Primary(Primary::Call(name, args)) => {
                Self::call(name.clone(), args.iter().map(&mut f).collect())
            },
            Self::Primary(_) => self.clone(),
            Self::Add(terms) => Self::Add(terms.iter().map(&mut f).collect()),
            Self::Mul(factors) => Self::Mul(factors.iter().map(&mut f).collect()),
            Self::Exp(base, exp) => Self::pow(f(base), f(exp)),
        }
    }

    /// Like [`SymExpr::map_children`], but `f` can fail.
    pub fn try_map_children<E>(
        &self,
        mut f: impl FnMut(&SymExpr) -> Result<SymExpr, E>,
    ) -> Result<SymExpr, E> {
        Ok(match self {
            Self::Primary(Primary::Call(name, args)) => {
                Self::call(name.clone(), args.iter().map(&mut f).collect::<Result<_, _>>()?)
            },
            Self::Primary(_) => self.clone(),
            Self::Add(terms) => Self::Add(terms.iter().map(&mut f).collect::<Result<_, _>>()?),
            Self::Mul(factors) => Self::Mul(factors.iter().map(&mut f).collect::<Result<_, _>>()?),
            Self::Exp(base, exp) => Self::pow(f(base)?, f(exp)?),
        })
    }

    /// Returns the names of the symbols in the expression that are not constants.
    pub fn free_symbols(&self) -> BTreeSet<String> {
        let mut symbols = BTreeSet::new();
        let mut stack = vec![self];
        while let Some(expr) = stack.pop() {
            match expr {
                Self::Primary(Primary::Symbol(sym)) if !is_constant(sym) => {
                    symbols.insert(sym.clone());
                },
                expr => stack.extend(expr.children()),
            }
        }
        symbols
    }

    /// Returns true if the symbol with the given name appears anywhere in the expression.
    pub fn contains_symbol(&self, name: &str) -> bool {
        match self {
            Self::Primary(Primary::Symbol(sym)) => sym == name,
            expr => expr.children().into_iter().any(|child| child.contains_symbol(name)),
        }
    }

    /// Returns true if the expression has no free symbols, i.e. it denotes a single number.
    pub fn is_number(&self) -> bool {
        match self {
            Self::Primary(Primary::Symbol(sym)) => is_constant(sym),
            expr => expr.children().into_iter().all(Self::is_number),
        }
    }

    /// Trivially downgrades the expression into a simpler form.
    ///
    /// Some operations may result in an [`SymExpr::Add`] with zero / one term, or an
    /// [`SymExpr::Mul`] with zero / one factor. This function checks for these cases and
    /// simplifies the expression into the single term / factor, or an [`SymExpr::Primary`]
    /// containing the integer 0 or 1.
    pub fn downgrade(self) -> Self {
        match self {
            Self::Add(mut terms) => {
                if terms.is_empty() {
                    Self::int(0)
                } else if terms.len() == 1 {
                    terms.remove(0)
                } else {
                    Self::Add(terms)
                }
            },
            Self::Mul(mut factors) => {
                if factors.is_empty() {
                    Self::int(1)
                } else if factors.len() == 1 {
                    factors.remove(0)
                } else {
                    Self::Mul(factors)
                }
            },
            _ => self,
        }
    }

    /// Converts a parsed expression into a [`SymExpr`].
    ///
    /// Functions that [`SymExpr`] rewrites into other forms (`sqrt`, `cbrt`, `exp`, `Eq`) are
    /// checked for their argument count here, so the error can point at the call.
    pub fn try_from_ast(expr: AstExpr) -> Result<Self, Error> {
        Self::try_from(expr)
    }
}

impl From<Integer> for SymExpr {
    fn from(int: Integer) -> Self {
        Self::Primary(Primary::Integer(int))
    }
}

/// Checks if two expressions are **strictly** equal.
///
/// For more information about strict equality, see the [module-level documentation](self).
impl PartialEq for SymExpr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Primary(lhs), Self::Primary(rhs)) => lhs == rhs,
            (Self::Add(lhs), Self::Add(rhs)) | (Self::Mul(lhs), Self::Mul(rhs)) => {
                if lhs.len() != rhs.len() {
                    return false;
                }

                // match each element with a distinct partner, so that `[a, a, b]` and `[a, b, b]`
                // are not considered equal
                let mut used = vec![false; rhs.len()];
                lhs.iter().all(|l| {
                    match rhs.iter().enumerate().position(|(i, r)| !used[i] && l == r) {
                        Some(i) => {
                            used[i] = true;
                            true
                        },
                        None => false,
                    }
                })
            },
            (Self::Exp(lhs_base, lhs_exp), Self::Exp(rhs_base, rhs_exp)) => {
                lhs_base == rhs_base && lhs_exp == rhs_exp
            },
            _ => false,
        }
    }
}

/// Checks the argument count of a function that is rewritten during conversion.
fn expect_args(
    call: &cas_parser::parser::ast::call::Call,
    expected: usize,
) -> Result<(), Error> {
    if call.args.len() == expected {
        Ok(())
    } else {
        Err(Error::new(call.outer_span().to_vec(), WrongArgumentCount {
            name: call.name.name.clone(),
            expected,
            given: call.args.len(),
        }))
    }
}

impl TryFrom<AstExpr> for SymExpr {
    type Error = Error;

    fn try_from(expr: AstExpr) -> Result<Self, Self::Error> {
        Ok(match expr {
            AstExpr::Literal(literal) => match literal {
                Literal::Integer(int) => Self::Primary(Primary::Integer(int_from_str(&int.value))),
                Literal::Float(float) => Self::Primary(Primary::Float(float_from_str(&float.value))),
                Literal::Symbol(sym) => Self::Primary(Primary::Symbol(sym.name)),
            },
            AstExpr::Paren(paren) => Self::try_from(*paren.expr)?,
            AstExpr::Call(call) => {
                let name = call.name.name.as_str();
                match name {
                    "Eq" => expect_args(&call, 2)?,
                    "sqrt" | "cbrt" | "exp" => expect_args(&call, 1)?,
                    _ => (),
                }

                let name = call.name.name.clone();
                let mut args = call.args.into_iter()
                    .map(Self::try_from)
                    .collect::<Result<Vec<_>, _>>()?;
                match name.as_str() {
                    "Eq" => {
                        let rhs = args.pop().unwrap_or_else(|| Self::int(0));
                        let lhs = args.pop().unwrap_or_else(|| Self::int(0));
                        lhs + rhs.neg()
                    },
                    "sqrt" => Self::pow(args.remove(0), Self::rational(Rational::from((1, 2)))),
                    "cbrt" => Self::pow(args.remove(0), Self::rational(Rational::from((1, 3)))),
                    "exp" => Self::pow(Self::symbol(E), args.remove(0)),
                    "ln" => Self::call("log", args),
                    "abs" => Self::call("Abs", args),
                    "ceil" => Self::call("ceiling", args),
                    _ => Self::call(name, args),
                }
            },
            AstExpr::Unary(unary) => {
                let operand = Self::try_from(*unary.operand)?;
                match unary.op.kind {
                    UnaryOpKind::Neg => operand.neg(),
                    UnaryOpKind::Pos => operand,
                    UnaryOpKind::Factorial => Self::call("factorial", vec![operand]),
                }
            },
            AstExpr::Binary(bin) => {
                let lhs = Self::try_from(*bin.lhs)?;
                let rhs = Self::try_from(*bin.rhs)?;
                match bin.op.kind {
                    BinOpKind::Exp => Self::pow(lhs, rhs),
                    BinOpKind::Mul => lhs * rhs,
                    BinOpKind::Div => Self::fraction(lhs, rhs),
                    BinOpKind::Add => lhs + rhs,
                    BinOpKind::Sub => lhs + rhs.neg(),
                }
            },
            AstExpr::Equation(equation) => {
                let lhs = Self::try_from(*equation.lhs)?;
                let rhs = Self::try_from(*equation.rhs)?;
                lhs + rhs.neg()
            },
        })
    }
}

/// Adds two [`SymExpr`]s together. No simplification is done, except flattening: if either
/// operand is a [`SymExpr::Add`], its terms are spliced into the result.
impl Add for SymExpr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Add(mut terms), Self::Add(rhs_terms)) => {
                terms.extend(rhs_terms);
                Self::Add(terms)
            },
            (Self::Add(mut terms), other) => {
                terms.push(other);
                Self::Add(terms)
            },
            (other, Self::Add(mut terms)) => {
                terms.insert(0, other);
                Self::Add(terms)
            },
            (lhs, rhs) => Self::Add(vec![lhs, rhs]),
        }
    }
}

impl AddAssign for SymExpr {
    fn add_assign(&mut self, rhs: Self) {
        let lhs = std::mem::replace(self, Self::Add(Vec::new()));
        *self = lhs + rhs;
    }
}

/// Multiplies two [`SymExpr`]s together. No simplification is done, except flattening: if either
/// operand is a [`SymExpr::Mul`], its factors are spliced into the result.
impl Mul for SymExpr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Mul(mut factors), Self::Mul(other)) => {
                factors.extend(other);
                Self::Mul(factors)
            },
            (Self::Mul(mut factors), other) => {
                factors.push(other);
                Self::Mul(factors)
            },
            (other, Self::Mul(mut factors)) => {
                factors.insert(0, other);
                Self::Mul(factors)
            },
            (lhs, rhs) => Self::Mul(vec![lhs, rhs]),
        }
    }
}

impl MulAssign for SymExpr {
    fn mul_assign(&mut self, rhs: Self) {
        let lhs = std::mem::replace(self, Self::Mul(Vec::new()));
        *self = lhs * rhs;
    }
}

/// Multiplies this expression by -1. No simplification is done, except for the case where the
/// expression is a number, in which case the number is negated.
impl Neg for SymExpr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Self::Primary(Primary::Integer(int)) => Self::Primary(Primary::Integer(-int)),
            Self::Primary(Primary::Float(float)) => Self::Primary(Primary::Float(-float)),
            expr => Self::int(-1) * expr,
        }
    }
}

#[cfg(test)]
mod tests {
    use cas_parser::parser::Parser;
    use pretty_assertions::assert_eq;
    use super::*;

    /// Parse the given expression and return the [`SymExpr`] representation.
    fn parse_expr(input: &str) -> SymExpr {
        let expr = Parser::new(input).parse_full().unwrap();
        SymExpr::try_from(expr).unwrap()
    }

    #[test]
    fn strict_equality() {
        let a = parse_expr("2(x + (y - 5))");
        let b = parse_expr("(y - 5 + x) * 2");
        assert_eq!(a, b);
    }

    #[test]
    fn strict_equality_2() {
        // these are NOT strictly equal (but are semantically equal)
        let a = parse_expr("2(x + (y - 5))");
        let b = parse_expr("2x + 2y - 10");
        assert_ne!(a, b);
    }

    #[test]
    fn strict_equality_counts_duplicates() {
        assert_ne!(parse_expr("x + x + y"), parse_expr("x + y + y"));
    }

    #[test]
    fn simple_expr() {
        let expr = parse_expr("x^2 + 5x + 6");
        assert_eq!(expr, SymExpr::Add(vec![
            SymExpr::int(6),
            SymExpr::Mul(vec![SymExpr::symbol("x"), SymExpr::int(5)]),
            SymExpr::pow(SymExpr::symbol("x"), SymExpr::int(2)),
        ]));
    }

    #[test]
    fn factors_only() {
        let expr = parse_expr("-2x^2y^-3/5");
        assert_eq!(expr, SymExpr::Mul(vec![
            SymExpr::pow(SymExpr::symbol("y"), SymExpr::int(-3)),
            SymExpr::pow(SymExpr::symbol("x"), SymExpr::int(2)),
            SymExpr::int(-2),
            SymExpr::pow(SymExpr::int(5), SymExpr::int(-1)),
        ]));
    }

    #[test]
    fn rewritten_functions() {
        assert_eq!(parse_expr("sqrt(x)"), SymExpr::pow(
            SymExpr::symbol("x"),
            SymExpr::rational(Rational::from((1, 2))),
        ));
        assert_eq!(parse_expr("exp(2)"), SymExpr::pow(SymExpr::symbol("E"), SymExpr::int(2)));
        assert_eq!(parse_expr("ln(x)"), SymExpr::call("log", vec![SymExpr::symbol("x")]));
        assert_eq!(parse_expr("3!"), SymExpr::call("factorial", vec![SymExpr::int(3)]));
    }

    #[test]
    fn equations_become_differences() {
        assert_eq!(parse_expr("x^2 = 4"), parse_expr("x^2 - 4"));
        assert_eq!(parse_expr("Eq(x, 5)"), parse_expr("x - 5"));
    }

    #[test]
    fn wrong_argument_count() {
        let ast = Parser::new("sqrt(1, 2)").parse_full().unwrap();
        let err = SymExpr::try_from(ast).unwrap_err();
        assert_eq!(err.message(), "`sqrt` takes 1 argument(s), but 2 were given");
        assert_eq!(err.spans, vec![0..5, 9..10]);
    }

    #[test]
    fn rationals() {
        let half = SymExpr::rational(Rational::from((1, 2)));
        assert_eq!(half.as_rational(), Some(Rational::from((1, 2))));
        assert_eq!(parse_expr("-3/4").as_rational(), Some(Rational::from((-3, 4))));
        assert_eq!(parse_expr("x/4").as_rational(), None);
    }

    #[test]
    fn free_symbols_skip_constants() {
        let expr = parse_expr("pi*r^2*h + E + I*y");
        assert_eq!(
            expr.free_symbols().into_iter().collect::<Vec<_>>(),
            vec!["h", "r", "y"],
        );
        assert!(parse_expr("2*pi + sqrt(2)").is_number());
    }
}
