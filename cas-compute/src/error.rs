//! Errors produced by the algebra routines.
//!
//! Errors tied to a region of the input expression (such as calling `sqrt` with two arguments)
//! are [`cas_error::Error`]s, reported with `ariadne`. Once an expression is converted into a
//! [`SymExpr`](crate::symbolic::SymExpr), spans are gone, and failures are described by the
//! plain enums below.

use thiserror::Error;

/// The largest exponent [`expand`](crate::symbolic::expand) will multiply out.
pub const MAX_EXPAND_EXPONENT: u32 = 64;

/// The largest number of terms [`expand`](crate::symbolic::expand) will produce.
pub const MAX_EXPAND_TERMS: usize = 10_000;

/// Renders the "did you mean" part of an [`EvalError::UndefinedFunction`] message.
fn did_you_mean(suggestions: &[String]) -> String {
    match suggestions {
        [] => String::new(),
        [one] => format!("; did you mean `{}`?", one),
        many => format!(
            "; did you mean one of: {}?",
            many.iter().map(|s| format!("`{}`", s)).collect::<Vec<_>>().join(", "),
        ),
    }
}

/// An error that occurred while numerically evaluating an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The expression calls a function that does not exist.
    #[error("undefined function `{name}`{}", did_you_mean(.suggestions))]
    UndefinedFunction {
        /// The name of the function.
        name: String,

        /// Existing functions with a similar name.
        suggestions: Vec<String>,
    },

    /// A function was called with the wrong number of arguments.
    #[error("`{name}` takes {expected} argument(s), but {given} were given")]
    WrongArgumentCount {
        /// The name of the function.
        name: String,

        /// A description of the accepted number of arguments, such as `1` or `1 or 2`.
        expected: String,

        /// The number of arguments given.
        given: usize,
    },

    /// A function was called outside of its domain.
    #[error("{0}")]
    Domain(String),

    /// The expression still contains a symbol, so it has no numeric value.
    #[error("cannot compute a numeric value: `{0}` has no value")]
    FreeSymbol(String),
}

/// An error that occurred while expanding an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpandError {
    /// A sum was raised to a power larger than [`MAX_EXPAND_EXPONENT`].
    #[error("cannot expand a sum raised to the power {exponent}; the largest supported exponent is {}", MAX_EXPAND_EXPONENT)]
    ExponentTooLarge {
        /// The offending exponent.
        exponent: String,
    },

    /// Expanding would produce more than [`MAX_EXPAND_TERMS`] terms.
    #[error("expanding this expression would produce {terms} terms, more than the limit of {}", MAX_EXPAND_TERMS)]
    TooManyTerms {
        /// The number of terms the expansion would produce.
        terms: usize,
    },
}

/// An error that occurred while differentiating an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DerivativeError {
    /// The expression contains a function whose derivative is not known.
    #[error("cannot differentiate the function `{0}`")]
    UnsupportedFunction(String),
}

/// An error that occurred while integrating an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrateError {
    /// No integration rule applies to the expression.
    #[error("cannot integrate `{integrand}` with respect to `{var}`")]
    Unsupported {
        /// The integrand that could not be integrated.
        integrand: String,

        /// The variable of integration.
        var: String,
    },

    /// Expanding the integrand failed.
    #[error(transparent)]
    Expand(#[from] ExpandError),
}

/// An error that occurred while solving an equation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The expression is not a polynomial or rational function in the variable.
    #[error("cannot solve `{expr} = 0` for `{var}`: it is not a polynomial in `{var}`")]
    NotPolynomial {
        /// The expression whose zeros were requested.
        expr: String,

        /// The variable to solve for.
        var: String,
    },

    /// The polynomial has no closed form this solver can find.
    #[error("cannot solve `{expr} = 0` for `{var}`: no exact solution for a polynomial of degree {degree}")]
    DegreeTooHigh {
        /// The expression whose zeros were requested.
        expr: String,

        /// The variable to solve for.
        var: String,

        /// The degree of the polynomial factor that could not be solved.
        degree: usize,
    },

    /// Expanding the expression failed.
    #[error(transparent)]
    Expand(#[from] ExpandError),
}

/// Any error produced by this crate's routines.
#[derive(Debug, Error)]
pub enum Error {
    /// The expression could not be converted into a symbolic expression.
    #[error(transparent)]
    Convert(#[from] cas_error::Error),

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error(transparent)]
    Expand(#[from] ExpandError),

    #[error(transparent)]
    Derivative(#[from] DerivativeError),

    #[error(transparent)]
    Integrate(#[from] IntegrateError),

    #[error(transparent)]
    Solve(#[from] SolveError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undefined_function_suggestions() {
        let err = EvalError::UndefinedFunction {
            name: String::from("sinn"),
            suggestions: vec![String::from("sin"), String::from("sinh")],
        };
        assert_eq!(err.to_string(), "undefined function `sinn`; did you mean one of: `sin`, `sinh`?");

        let err = EvalError::UndefinedFunction { name: String::from("zeta"), suggestions: vec![] };
        assert_eq!(err.to_string(), "undefined function `zeta`");
    }
}
