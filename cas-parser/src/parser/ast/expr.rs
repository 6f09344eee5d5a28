use crate::{
    parser::{
        ast::{
            binary::Binary,
            call::Call,
            equation::Equation,
            literal::Literal,
            paren::Paren,
            unary::Unary,
        },
        error::{kind, Error},
        op::Precedence,
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents any kind of expression a client can send.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A literal value.
    Literal(Literal),

    /// A parenthesized expression, such as `(1 + 2)`.
    Paren(Paren),

    /// A function call, such as `abs(-1)`.
    Call(Call),

    /// A unary operation, such as `-1` or `5!`.
    Unary(Unary),

    /// A binary operation, such as `1 + 2`.
    Binary(Binary),

    /// An equation, such as `x^2 = 4`. Only allowed at the top level.
    Equation(Equation),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Literal(literal) => literal.span(),
            Expr::Paren(paren) => paren.span(),
            Expr::Call(call) => call.span(),
            Expr::Unary(unary) => unary.span(),
            Expr::Binary(binary) => binary.span(),
            Expr::Equation(equation) => equation.span(),
        }
    }

    /// If this expression is a [`Expr::Paren`], returns the innermost expression in the
    /// parenthesized expression. Otherwise, returns `self`.
    pub fn innermost(&self) -> &Expr {
        let mut inner = self;
        while let Expr::Paren(paren) = inner {
            inner = &paren.expr;
        }
        inner
    }

    /// Parses an operand: a literal, a call, or a parenthesized expression.
    pub fn parse_operand(input: &mut Parser) -> Result<Self, Error> {
        match input.peek_kind() {
            Some(TokenKind::Int | TokenKind::Float) => input.try_parse().map(Self::Literal),
            Some(TokenKind::Name) if input.peek_call() => input.try_parse().map(Self::Call),
            Some(TokenKind::Name) => input.try_parse().map(Self::Literal),
            Some(TokenKind::OpenParen) => input.try_parse().map(Self::Paren),
            Some(TokenKind::CloseParen) => Err(input.error(kind::UnclosedParenthesis { opening: false })),
            Some(found) => Err(input.error(kind::UnexpectedToken {
                expected: &[
                    TokenKind::Int,
                    TokenKind::Float,
                    TokenKind::Name,
                    TokenKind::OpenParen,
                    TokenKind::Sub,
                ],
                found,
            })),
            None => Err(input.error(kind::UnexpectedEof)),
        }
    }

    /// Parses an expression made of operators and operands, stopping at anything else (such as
    /// `,`, `)`, or `=`).
    pub fn parse_operation(input: &mut Parser) -> Result<Self, Error> {
        let lhs = Unary::parse_or_lower(input)?;
        Binary::parse_expr(input, lhs, Precedence::Any)
    }
}

impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let lhs = Expr::parse_operation(input)?;
        if input.peek_kind() != Some(TokenKind::Assign) {
            return Ok(lhs);
        }

        let op = input.next_token()?;
        let rhs = Expr::parse_operation(input)?;
        if input.peek_kind() == Some(TokenKind::Assign) {
            return Err(input.error(kind::NestedEquation));
        }

        Ok(Expr::Equation(Equation {
            span: lhs.span().start..rhs.span().end,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            op_span: op.span,
        }))
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Literal(literal) => literal.fmt(f),
            Expr::Paren(paren) => paren.fmt(f),
            Expr::Call(call) => call.fmt(f),
            Expr::Unary(unary) => unary.fmt(f),
            Expr::Binary(binary) => binary.fmt(f),
            Expr::Equation(equation) => equation.fmt(f),
        }
    }
}
