pub mod ast;
pub mod error;
pub mod op;

use ast::expr::Expr;
use error::{kind::{self, ErrorKind}, Error};
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use std::ops::Range;

/// The maximum number of nested parentheses, calls, and operators the parser will descend into.
pub const MAX_DEPTH: usize = 128;

/// A high-level parser for the language. This is the type to use to parse an expression sent by
/// a client into an abstract syntax tree.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,

    /// How many nested expressions are currently being parsed.
    depth: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
            depth: 0,
        }
    }

    /// Creates an error that points at the next token, or the end of the source code if there are
    /// no more tokens.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the next non-whitespace token, or the end of the source code if there
    /// is none.
    pub fn span(&self) -> Range<usize> {
        self.peek_token().map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the index of the next non-whitespace token, starting from the cursor.
    fn peek_index(&self) -> Option<usize> {
        (self.cursor..self.tokens.len()).find(|&i| !self.tokens[i].is_whitespace())
    }

    /// Returns the next non-whitespace token without moving the cursor.
    pub fn peek_token(&self) -> Option<&Token<'source>> {
        self.peek_index().map(|i| &self.tokens[i])
    }

    /// Returns the kind of the next non-whitespace token without moving the cursor.
    pub fn peek_kind(&self) -> Option<TokenKind> {
        self.peek_token().map(|token| token.kind)
    }

    /// Returns true if the next non-whitespace token is a name immediately followed by an opening
    /// parenthesis, as in `sin(`. A space in between makes it an implicit multiplication instead.
    pub fn peek_call(&self) -> bool {
        self.peek_index()
            .filter(|&i| self.tokens[i].kind == TokenKind::Name)
            .and_then(|i| self.tokens.get(i + 1))
            .is_some_and(|token| token.kind == TokenKind::OpenParen)
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        while self.cursor < self.tokens.len() {
            let token = &self.tokens[self.cursor];
            self.cursor += 1;
            if token.is_whitespace() {
                continue;
            } else {
                // cloning is cheap: only Range<_> is cloned
                return Ok(token.clone());
            }
        }

        Err(self.error(kind::UnexpectedEof))
    }

    /// Consumes the next token if it is of the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> Option<Token<'source>> {
        if self.peek_kind() == Some(kind) {
            self.next_token().ok()
        } else {
            None
        }
    }

    /// Speculatively parses a value from the given stream of tokens. The cursor is moved back to
    /// where it was if parsing fails.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        let start = self.cursor;
        match T::parse(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Runs `f` one nesting level deeper. Fails with [`kind::NestingTooDeep`] once
    /// [`MAX_DEPTH`] levels are already open.
    pub fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T, Error>) -> Result<T, Error> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error(kind::NestingTooDeep { limit: MAX_DEPTH }));
        }

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Parses the whole source as exactly one expression, optionally an equation. All the tokens
    /// must be consumed by the parser; if not, an error is returned.
    pub fn parse_full(&mut self) -> Result<Expr, Error> {
        if self.peek_token().is_none() {
            return Err(Error::new(vec![self.eof_span()], kind::EmptyInput));
        }

        let expr = Expr::parse(self)?;
        match self.peek_token() {
            None => Ok(expr),
            Some(token) if token.kind == TokenKind::CloseParen => {
                Err(self.error(kind::UnclosedParenthesis { opening: false }))
            },
            Some(token) => Err(Error::new(
                vec![token.span.start..self.eof_span().end],
                kind::ExpectedEof,
            )),
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use ast::{binary::Binary, literal::Literal, unary::Unary};
    use op::{BinOpKind, UnaryOpKind};

    /// Parses the source and renders the tree with every operation parenthesized, so tests can
    /// check grouping at a glance.
    fn grouped(source: &str) -> String {
        fn render(expr: &Expr) -> String {
            match expr {
                Expr::Literal(Literal::Integer(int)) => int.value.clone(),
                Expr::Literal(Literal::Float(float)) => float.value.clone(),
                Expr::Literal(Literal::Symbol(sym)) => sym.name.clone(),
                Expr::Paren(paren) => render(&paren.expr),
                Expr::Call(call) => format!(
                    "{}[{}]",
                    call.name.name,
                    call.args.iter().map(render).collect::<Vec<_>>().join(", "),
                ),
                Expr::Unary(Unary { operand, op, .. }) => match op.kind {
                    UnaryOpKind::Neg => format!("(-{})", render(operand)),
                    UnaryOpKind::Pos => format!("(+{})", render(operand)),
                    UnaryOpKind::Factorial => format!("({}!)", render(operand)),
                },
                Expr::Binary(Binary { lhs, op, rhs, .. }) => {
                    let symbol = match op.kind {
                        BinOpKind::Exp => "^",
                        BinOpKind::Mul if op.implicit => "·",
                        BinOpKind::Mul => "*",
                        BinOpKind::Div => "/",
                        BinOpKind::Add => "+",
                        BinOpKind::Sub => "-",
                    };
                    format!("({} {} {})", render(lhs), symbol, render(rhs))
                },
                Expr::Equation(eq) => format!("{} = {}", render(&eq.lhs), render(&eq.rhs)),
            }
        }

        render(&Parser::new(source).parse_full().unwrap())
    }

    fn error_message(source: &str) -> (String, Vec<Range<usize>>) {
        let err = Parser::new(source).parse_full().unwrap_err();
        (err.message(), err.spans)
    }

    #[test]
    fn literal_int() {
        assert_eq!(grouped("16"), "16");
    }

    #[test]
    fn scientific_notation() {
        assert_eq!(grouped("2.5e-3"), "2.5e-3");
        assert_eq!(grouped("1e5 + 1E3"), "(1e5 + 1E3)");
        assert_eq!(grouped("2e-3x"), "(2e-3 · x)");
        assert_eq!(grouped("2e - 3"), "((2 · e) - 3)");
    }

    #[test]
    fn precedence_of_terms_and_factors() {
        assert_eq!(grouped("1 + 2 * 3 - 4 / x"), "((1 + (2 * 3)) - (4 / x))");
    }

    #[test]
    fn power_is_right_associative() {
        assert_eq!(grouped("2^3^4"), "(2 ^ (3 ^ 4))");
        assert_eq!(grouped("2**3**4"), "(2 ^ (3 ^ 4))");
    }

    #[test]
    fn negation_binds_looser_than_power() {
        assert_eq!(grouped("-x**2"), "(-(x ^ 2))");
        assert_eq!(grouped("2**-1"), "(2 ^ (-1))");
        assert_eq!(grouped("-2*x"), "((-2) * x)");
    }

    #[test]
    fn factorial_binds_tightest() {
        assert_eq!(grouped("2^3!"), "(2 ^ (3!))");
        assert_eq!(grouped("n!!"), "((n!)!)");
    }

    #[test]
    fn implicit_multiplication() {
        assert_eq!(grouped("2x"), "(2 · x)");
        assert_eq!(grouped("3(x + 1)"), "(3 · (x + 1))");
        assert_eq!(grouped("(x + 1)(x - 1)"), "((x + 1) · (x - 1))");
        assert_eq!(grouped("2x^2"), "(2 · (x ^ 2))");
        assert_eq!(grouped("x (y)"), "(x · y)");
    }

    #[test]
    fn calls() {
        assert_eq!(grouped("sin(x)cos(x)"), "(sin[x] · cos[x])");
        assert_eq!(grouped("log(8, 2) + f()"), "(log[8, 2] + f[])");
    }

    #[test]
    fn equation() {
        assert_eq!(grouped("x**2 - 4 = 0"), "((x ^ 2) - 4) = 0");
        assert_eq!(grouped("V = pi*r**2*h"), "V = ((pi * (r ^ 2)) * h)");
    }

    #[test]
    fn empty_input() {
        assert_eq!(error_message("   ").0, "nothing to parse");
    }

    #[test]
    fn unexpected_eof() {
        assert_eq!(error_message("1 +"), ("unexpected end of file".to_string(), vec![3..3]));
    }

    #[test]
    fn unclosed_parenthesis() {
        assert_eq!(error_message("(x + 1"), ("unclosed parenthesis".to_string(), vec![0..1]));
        assert_eq!(error_message("x + 1)"), ("unclosed parenthesis".to_string(), vec![5..6]));
        assert_eq!(error_message("f(x, 2"), ("unclosed parenthesis".to_string(), vec![1..2]));
    }

    #[test]
    fn empty_parenthesis() {
        assert_eq!(error_message("2 * ()"), ("missing expression inside parenthesis".to_string(), vec![4..6]));
    }

    #[test]
    fn nested_equation() {
        assert_eq!(error_message("x = 1 = 2").0, "an expression can contain at most one equation");
        assert_eq!(error_message("(x = 1)").0, "an expression can contain at most one equation");
    }

    #[test]
    fn unexpected_token() {
        assert_eq!(error_message("2 + $"), ("unexpected token".to_string(), vec![4..5]));
        assert_eq!(error_message("2 + *").0, "unexpected token");
    }

    #[test]
    fn trailing_garbage() {
        assert_eq!(error_message("x $ y"), ("expected end of file".to_string(), vec![2..5]));
    }

    #[test]
    fn deep_nesting_is_an_error() {
        let source = format!("{}x{}", "(".repeat(10_000), ")".repeat(10_000));
        let (message, spans) = error_message(&source);
        assert_eq!(message, "expression is nested too deeply");
        assert_eq!(spans, vec![MAX_DEPTH..MAX_DEPTH + 1]);

        assert_eq!(error_message(&"-".repeat(10_000)).0, "expression is nested too deeply");
        assert_eq!(error_message(&"2^".repeat(10_000)).0, "expression is nested too deeply");
        assert_eq!(
            error_message(&format!("{}x{}", "f(".repeat(10_000), ")".repeat(10_000))).0,
            "expression is nested too deeply",
        );
    }

    #[test]
    fn moderate_nesting_is_fine() {
        let source = format!("{}x{}", "(".repeat(100), ")".repeat(100));
        assert_eq!(grouped(&source), "x");
        assert_eq!(grouped(&format!("{}1", "-".repeat(100))).len(), 100 * 3 + 1);
    }

    #[test]
    fn report_points_into_source() {
        let source = "(x + 1";
        let err = Parser::new(source).parse_full().unwrap_err();
        let report = err.report_to_string("expression", source);
        assert!(report.contains("this parenthesis is not closed"));
        assert!(report.contains("add a closing parenthesis"));
    }
}
