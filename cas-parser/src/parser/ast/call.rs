use crate::{
    parser::{ast::{expr::Expr, literal::LitSym}, error::{kind, Error}, Parse, Parser},
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A function call, such as `log(x, 2)`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Call {
    /// The name of the function to call.
    pub name: LitSym,

    /// The arguments to the function.
    pub args: Vec<Expr>,

    /// The region of the source code that this function call was parsed from.
    pub span: Range<usize>,

    /// The span of the parentheses that surround the arguments.
    pub paren_span: Range<usize>,
}

impl Call {
    /// Returns the span of the function call.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Returns a set of two spans, where the first is the span of the function name (with the
    /// opening parenthesis) and the second is the span of the closing parenthesis.
    pub fn outer_span(&self) -> [Range<usize>; 2] {
        [
            self.name.span.start..self.paren_span.start + 1,
            self.paren_span.end - 1..self.paren_span.end,
        ]
    }
}

impl Parse for Call {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let name = input.next_token()?;
        if name.kind != TokenKind::Name {
            return Err(Error::new(vec![name.span], kind::UnexpectedToken {
                expected: &[TokenKind::Name],
                found: name.kind,
            }));
        }
        let open = input.next_token()?;
        if open.kind != TokenKind::OpenParen {
            return Err(Error::new(vec![open.span], kind::UnexpectedToken {
                expected: &[TokenKind::OpenParen],
                found: open.kind,
            }));
        }

        let mut args = Vec::new();
        let close = match input.eat(TokenKind::CloseParen) {
            Some(close) => close,
            None => loop {
                args.push(Expr::parse_operation(input)?);
                match input.peek_kind() {
                    Some(TokenKind::Comma) => {
                        input.next_token()?;
                    },
                    Some(TokenKind::CloseParen) => break input.next_token()?,
                    Some(TokenKind::Assign) => return Err(input.error(kind::NestedEquation)),
                    Some(found) => return Err(input.error(kind::UnexpectedToken {
                        expected: &[TokenKind::Comma, TokenKind::CloseParen],
                        found,
                    })),
                    None => return Err(Error::new(
                        vec![open.span],
                        kind::UnclosedParenthesis { opening: true },
                    )),
                }
            },
        };

        Ok(Self {
            name: LitSym {
                name: name.lexeme.to_owned(),
                span: name.span.clone(),
            },
            args,
            span: name.span.start..close.span.end,
            paren_span: open.span.start..close.span.end,
        })
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, ")")
    }
}
