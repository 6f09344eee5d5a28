pub mod token;

use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer. This allows us
/// to backtrack in case of an error.
///
/// Input the lexer cannot classify becomes a [`TokenKind::Symbol`] token, so the parser can point
/// at it.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        tokens.push(Token {
            span: lexer.span(),
            kind: result.unwrap_or(TokenKind::Symbol),
            lexeme: lexer.slice(),
        });
    }

    tokens.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(input: &'source str, expected: [(TokenKind, &'source str); N]) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "1 + 2",
            [
                (TokenKind::Int, "1"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Add, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Int, "2"),
            ],
        );
    }

    #[test]
    fn python_power() {
        compare_tokens(
            "x**2*y",
            [
                (TokenKind::Name, "x"),
                (TokenKind::DoubleStar, "**"),
                (TokenKind::Int, "2"),
                (TokenKind::Mul, "*"),
                (TokenKind::Name, "y"),
            ],
        );
    }

    #[test]
    fn names_with_digits() {
        compare_tokens(
            "2x1 + a_b",
            [
                (TokenKind::Int, "2"),
                (TokenKind::Name, "x1"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Add, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Name, "a_b"),
            ],
        );
    }

    #[test]
    fn floats() {
        compare_tokens(
            "3.14 .5 2.",
            [
                (TokenKind::Float, "3.14"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Float, ".5"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Float, "2."),
            ],
        );
    }

    #[test]
    fn scientific_floats() {
        compare_tokens(
            "2.5e-3 1e5 1E3 .5e+2",
            [
                (TokenKind::Float, "2.5e-3"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Float, "1e5"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Float, "1E3"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Float, ".5e+2"),
            ],
        );
    }

    #[test]
    fn exponent_needs_digits() {
        compare_tokens(
            "2e 3ex",
            [
                (TokenKind::Int, "2"),
                (TokenKind::Name, "e"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Int, "3"),
                (TokenKind::Name, "ex"),
            ],
        );
    }

    #[test]
    fn equation_and_call() {
        compare_tokens(
            "Eq(x, 5!) = $",
            [
                (TokenKind::Name, "Eq"),
                (TokenKind::OpenParen, "("),
                (TokenKind::Name, "x"),
                (TokenKind::Comma, ","),
                (TokenKind::Whitespace, " "),
                (TokenKind::Int, "5"),
                (TokenKind::Factorial, "!"),
                (TokenKind::CloseParen, ")"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Assign, "="),
                (TokenKind::Whitespace, " "),
                (TokenKind::Symbol, "$"),
            ],
        );
    }

    #[test]
    fn complete_keeps_spans() {
        let tokens = tokenize_complete("a\n+ 1");
        let kinds = tokens.iter().map(|token| token.kind).collect::<Vec<_>>();
        assert_eq!(kinds, vec![
            TokenKind::Name,
            TokenKind::NewLine,
            TokenKind::Add,
            TokenKind::Whitespace,
            TokenKind::Int,
        ]);
        assert_eq!(tokens[4].span, 4..5);
    }
}
