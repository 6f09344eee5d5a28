use cas_attrs::ErrorKind;
use crate::tokenizer::TokenKind;

pub use cas_error::ErrorKind;

/// The source code contained nothing but whitespace.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "nothing to parse",
    labels = [""],
    help = "send an expression such as `x^2 - 4`",
)]
pub struct EmptyInput;

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of file",
    labels = ["you might need to add another expression here"],
)]
pub struct UnexpectedEof;

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of file",
    labels = ["I could not understand the remaining expression here"],
)]
pub struct ExpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!("expected one of: {}", expected.iter().map(|t| format!("{:?}", t)).collect::<Vec<_>>().join(", "))],
    help = format!("found {:?}", found),
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

/// A parenthesis was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed"],
    help = if *opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

/// There was no expression inside a pair of parentheses.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing expression inside parenthesis",
    labels = ["add an expression here"],
)]
pub struct EmptyParenthesis;

/// An equation sign appeared somewhere other than the top level, or more than once.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "an expression can contain at most one equation",
    labels = ["this `=` is not allowed here"],
    help = "write the equation as `lhs = rhs`, or use `Eq(lhs, rhs)`",
)]
pub struct NestedEquation;

/// The expression nests parentheses, calls, or operators deeper than the parser allows.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expression is nested too deeply",
    labels = ["the parser gave up here"],
    help = format!("expressions can nest at most {} levels deep", limit),
)]
pub struct NestingTooDeep {
    /// The nesting limit that was reached.
    pub limit: usize,
}
