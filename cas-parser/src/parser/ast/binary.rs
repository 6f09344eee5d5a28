use crate::parser::{
    ast::{expr::Expr, unary::Unary},
    error::Error,
    op::{Associativity, BinOp, BinOpKind, Precedence},
    Parser,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A binary operator, including the operator and both operands.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary {
    /// The left-hand side of the binary operator.
    pub lhs: Box<Expr>,

    /// The binary operator.
    pub op: BinOp,

    /// The right-hand side of the binary operator.
    pub rhs: Box<Expr>,

    /// The region of the source code that this binary operator was parsed from.
    pub span: Range<usize>,
}

impl Binary {
    /// Returns the span of the binary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Returns the binary operator that follows, without consuming it. Two operands next to each
    /// other produce an implicit multiplication.
    fn peek_op(input: &Parser, lhs: &Expr) -> Option<BinOp> {
        let token = input.peek_token()?;
        if let Some(kind) = BinOpKind::from_token(token.kind) {
            Some(BinOp { kind, implicit: false, span: token.span.clone() })
        } else if token.kind.starts_operand() {
            let end = lhs.span().end;
            Some(BinOp { kind: BinOpKind::Mul, implicit: true, span: end..end })
        } else {
            None
        }
    }

    /// Parses the operators following `lhs` using precedence climbing, and returns the resulting
    /// expression.
    ///
    /// Only operators binding tighter than `precedence` are consumed (or, for right-associative
    /// operators, operators of equal precedence), so the caller can resume with the operators it
    /// owns.
    pub fn parse_expr(input: &mut Parser, mut lhs: Expr, precedence: Precedence) -> Result<Expr, Error> {
        while let Some(op) = Self::peek_op(input, &lhs) {
            let op_precedence = op.precedence();
            let binds = op_precedence > precedence
                || (op_precedence == precedence && op.associativity() == Associativity::Right);
            if !binds {
                break;
            }

            if !op.implicit {
                input.next_token()?;
            }

            let rhs = input.nested(|input| {
                let operand = Unary::parse_or_lower(input)?;
                Self::parse_expr(input, operand, op_precedence)
            })?;

            lhs = Expr::Binary(Self {
                span: lhs.span().start..rhs.span().end,
                lhs: Box::new(lhs),
                op,
                rhs: Box::new(rhs),
            });
        }

        Ok(lhs)
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.op.implicit {
            return write!(f, "{}{}", self.lhs, self.rhs);
        }
        let op = match self.op.kind {
            BinOpKind::Exp => "^",
            BinOpKind::Mul => "*",
            BinOpKind::Div => "/",
            BinOpKind::Add => "+",
            BinOpKind::Sub => "-",
        };
        write!(f, "{} {} {}", self.lhs, op, self.rhs)
    }
}
