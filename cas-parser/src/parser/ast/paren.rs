use crate::{
    parser::{ast::expr::Expr, error::{kind, Error}, Parse, Parser},
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A parenthesized expression. A [`Paren`] can only contain a single expression.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Paren {
    /// The inner expression.
    pub expr: Box<Expr>,

    /// The region of the source code that this [`Paren`] was parsed from, including both
    /// parentheses.
    pub span: Range<usize>,
}

impl Paren {
    /// Returns the span of the parenthesized expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl Parse for Paren {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let open = input.next_token()?;
        if open.kind != TokenKind::OpenParen {
            return Err(Error::new(vec![open.span], kind::UnexpectedToken {
                expected: &[TokenKind::OpenParen],
                found: open.kind,
            }));
        }

        if let Some(close) = input.eat(TokenKind::CloseParen) {
            return Err(Error::new(vec![open.span.start..close.span.end], kind::EmptyParenthesis));
        }

        let expr = Expr::parse_operation(input)?;
        match input.peek_kind() {
            Some(TokenKind::CloseParen) => {
                let close = input.next_token()?;
                Ok(Self {
                    expr: Box::new(expr),
                    span: open.span.start..close.span.end,
                })
            },
            Some(TokenKind::Assign) => Err(input.error(kind::NestedEquation)),
            Some(found) => Err(input.error(kind::UnexpectedToken {
                expected: &[TokenKind::CloseParen],
                found,
            })),
            None => Err(Error::new(vec![open.span], kind::UnclosedParenthesis { opening: true })),
        }
    }
}

impl fmt::Display for Paren {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({})", self.expr)
    }
}
