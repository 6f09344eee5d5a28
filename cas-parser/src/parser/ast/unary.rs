use crate::{
    parser::{
        ast::{binary::Binary, expr::Expr},
        error::Error,
        op::{UnaryOp, UnaryOpKind},
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A unary expression, such as `-x` or `5!`. Unary expressions can include nested expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Unary {
    /// The operand of the unary expression (left or right, depending on the associativity).
    pub operand: Box<Expr>,

    /// The operator of the unary expression.
    pub op: UnaryOp,

    /// The region of the source code that this unary expression was parsed from.
    pub span: Range<usize>,
}

impl Unary {
    /// Returns the span of the unary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Parses a prefix unary expression if there is a prefix operator, or a postfix unary
    /// expression / operand otherwise.
    ///
    /// The operand of a prefix operator takes every operator of higher precedence with it, so
    /// `-x^2` is `-(x^2)`.
    pub fn parse_or_lower(input: &mut Parser) -> Result<Expr, Error> {
        input.nested(Self::parse_prefix)
    }

    fn parse_prefix(input: &mut Parser) -> Result<Expr, Error> {
        let kind = match input.peek_kind() {
            Some(TokenKind::Sub) => UnaryOpKind::Neg,
            Some(TokenKind::Add) => UnaryOpKind::Pos,
            _ => return Self::parse_left_or_operand(input),
        };

        let op_token = input.next_token()?;
        let op = UnaryOp { kind, span: op_token.span };
        let operand = {
            let lhs = Unary::parse_or_lower(input)?;
            Binary::parse_expr(input, lhs, kind.precedence())?
        };

        Ok(Expr::Unary(Self {
            span: op.span.start..operand.span().end,
            operand: Box::new(operand),
            op,
        }))
    }

    /// Parses an operand followed by any number of postfix factorial operators.
    pub fn parse_left_or_operand(input: &mut Parser) -> Result<Expr, Error> {
        let mut operand = Expr::parse_operand(input)?;
        while let Some(token) = input.eat(TokenKind::Factorial) {
            operand = Expr::Unary(Self {
                span: operand.span().start..token.span.end,
                operand: Box::new(operand),
                op: UnaryOp { kind: UnaryOpKind::Factorial, span: token.span },
            });
        }
        Ok(operand)
    }
}

impl fmt::Display for Unary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.op.kind {
            UnaryOpKind::Neg => write!(f, "-{}", self.operand),
            UnaryOpKind::Pos => write!(f, "+{}", self.operand),
            UnaryOpKind::Factorial => write!(f, "{}!", self.operand),
        }
    }
}
