//! Numeric evaluation of [`SymExpr`]s.

use crate::consts::{E, I, PI};
use crate::error::EvalError;
use crate::funcs;
use crate::primitive::{complex, float};
use crate::symbolic::{
    expr::{Primary, SymExpr, E as E_NAME, I as I_NAME, PI as PI_NAME},
    simplify::sort,
};
use rug::{ops::Pow, Complex};

/// Components smaller than `2^-CHOP_BITS` times the magnitude of the value are rounding noise,
/// and are set to zero.
const CHOP_BITS: i32 = 400;

/// Sets the real or imaginary part of the value to zero if it is negligible compared to the
/// magnitude of the value. For example, `(-4)^(1/2)` is computed as `exp(log(-4)/2)`, which has a
/// real part on the order of `1e-154`.
fn chop(mut value: Complex) -> Complex {
    let magnitude = float(value.abs_ref());
    let threshold = magnitude * float(2).pow(-CHOP_BITS);
    if float(value.real().abs_ref()) < threshold {
        *value.mut_real() = float(0);
    }
    if float(value.imag().abs_ref()) < threshold {
        *value.mut_imag() = float(0);
    }
    value
}

/// Evaluates an expression to a complex number.
///
/// Fails if the expression contains a free symbol, calls a function that is not a builtin, or
/// has no finite value.
pub fn eval_complex(expr: &SymExpr) -> Result<Complex, EvalError> {
    let value = eval_inner(expr)?;
    if !value.real().is_finite() || !value.imag().is_finite() {
        return Err(EvalError::Domain(format!("`{}` has no finite value", expr)));
    }
    Ok(chop(value))
}

fn eval_inner(expr: &SymExpr) -> Result<Complex, EvalError> {
    Ok(match expr {
        SymExpr::Primary(Primary::Integer(int)) => complex(int),
        SymExpr::Primary(Primary::Float(float)) => complex(float),
        SymExpr::Primary(Primary::Symbol(sym)) => match sym.as_str() {
            PI_NAME => complex(&*PI),
            E_NAME => complex(&*E),
            I_NAME => I.clone(),
            _ => return Err(EvalError::FreeSymbol(sym.clone())),
        },
        SymExpr::Primary(Primary::Call(name, args)) => {
            let Some(builtin) = funcs::get(name) else {
                return Err(EvalError::UndefinedFunction {
                    name: name.clone(),
                    suggestions: funcs::suggestions(name),
                });
            };
            let args = args.iter().map(eval_inner).collect::<Result<Vec<_>, _>>()?;
            builtin.call(&args)?
        },
        SymExpr::Add(terms) => terms.iter()
            .try_fold(complex(0), |acc, term| Ok::<_, EvalError>(acc + eval_inner(term)?))?,
        SymExpr::Mul(factors) => factors.iter()
            .try_fold(complex(1), |acc, factor| Ok::<_, EvalError>(acc * eval_inner(factor)?))?,
        SymExpr::Exp(base, exp) => {
            let base = eval_inner(base)?;
            match exp.as_integer().and_then(|n| n.to_i32()) {
                Some(n) => base.pow(n),
                None => {
                    let exp = eval_inner(exp)?;
                    if base.is_zero() && exp.real().is_sign_positive() && !exp.real().is_zero() {
                        complex(0)
                    } else {
                        base.pow(exp)
                    }
                },
            }
        },
    })
}

/// Converts a complex value into an expression: a float, an imaginary float times `I`, or their
/// sum.
fn complex_to_expr(value: Complex) -> SymExpr {
    let (re, im) = value.into_real_imag();
    let imaginary = || SymExpr::Mul(vec![SymExpr::float(im.clone()), SymExpr::symbol(I_NAME)]);
    match (re.is_zero(), im.is_zero()) {
        (_, true) => SymExpr::float(re),
        (true, false) => imaginary(),
        (false, false) => SymExpr::Add(vec![SymExpr::float(re), imaginary()]),
    }
}

/// Numerically evaluates every symbol-free subexpression, leaving free symbols in place.
///
/// Integer exponents are kept exact, so `evalf(x^2/2)` is `0.5*x**2`. Complex values become
/// `a + b*I`.
pub fn evalf(expr: &SymExpr) -> Result<SymExpr, EvalError> {
    Ok(sort(&evalf_inner(expr)?))
}

fn evalf_inner(expr: &SymExpr) -> Result<SymExpr, EvalError> {
    if expr.is_number() {
        return Ok(complex_to_expr(eval_complex(expr)?));
    }

    Ok(match expr {
        SymExpr::Add(terms) => {
            let terms = terms.iter().map(evalf_inner).collect::<Result<Vec<_>, _>>()?;
            fold_numbers(terms, SymExpr::Add, |a, b| a + b, complex(0))
        },
        SymExpr::Mul(factors) => {
            let factors = factors.iter().map(evalf_inner).collect::<Result<Vec<_>, _>>()?;
            fold_numbers(factors, SymExpr::Mul, |a, b| a * b, complex(1))
        },
        SymExpr::Exp(base, exp) if exp.is_integer() => SymExpr::pow(evalf_inner(base)?, *exp.clone()),
        expr => expr.try_map_children(evalf_inner)?,
    })
}

/// Combines the number-valued children of a sum or product into one number.
fn fold_numbers(
    children: Vec<SymExpr>,
    build: fn(Vec<SymExpr>) -> SymExpr,
    op: fn(Complex, Complex) -> Complex,
    identity: Complex,
) -> SymExpr {
    let (numbers, mut rest): (Vec<_>, Vec<_>) = children.into_iter().partition(SymExpr::is_number);
    if !numbers.is_empty() {
        // every number-valued child was already evaluated, so this cannot fail
        let value = numbers.iter()
            .filter_map(|number| eval_complex(number).ok())
            .fold(identity.clone(), op);
        if value != identity {
            rest.insert(0, complex_to_expr(value));
        }
    }
    build(rest).downgrade()
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use cas_parser::parser::Parser;
    use pretty_assertions::assert_eq;
    use super::*;

    fn parse(input: &str) -> SymExpr {
        SymExpr::try_from(Parser::new(input).parse_full().unwrap()).unwrap()
    }

    #[test]
    fn constants() {
        let value = eval_complex(&parse("2*pi")).unwrap();
        assert_float_absolute_eq!(value.real().to_f64(), std::f64::consts::TAU);
        assert_eq!(evalf(&parse("factorial(5)")).unwrap().to_string(), "120.000000000000");
        assert_eq!(evalf(&parse("12*pi")).unwrap().to_string(), "37.6991118430775");
    }

    #[test]
    fn complex_values() {
        assert_eq!(evalf(&parse("sqrt(-4)")).unwrap().to_string(), "2.0*I");
        assert_eq!(evalf(&parse("(-2)^2")).unwrap().to_string(), "4.00000000000000");
        assert_eq!(evalf(&parse("1 + 2I")).unwrap().to_string(), "1.0 + 2.0*I");
    }

    #[test]
    fn scientific_notation() {
        assert_eq!(evalf(&parse("2.5e-3")).unwrap().to_string(), "0.00250000000000000");
        assert_eq!(evalf(&parse("1e5")).unwrap().to_string(), "100000.000000000");
        assert_eq!(evalf(&parse("1E3 + 1")).unwrap().to_string(), "1001.00000000000");
    }

    #[test]
    fn free_symbols_stay_symbolic() {
        assert_eq!(evalf(&parse("x^2/2")).unwrap().to_string(), "0.5*x**2");
        assert_eq!(evalf(&parse("pi*x")).unwrap().to_string(), "3.14159265358979*x");
        assert_eq!(eval_complex(&parse("x + 1")), Err(EvalError::FreeSymbol(String::from("x"))));
    }

    #[test]
    fn undefined_function() {
        let err = eval_complex(&parse("sinn(1)")).unwrap_err();
        assert_eq!(err, EvalError::UndefinedFunction {
            name: String::from("sinn"),
            suggestions: vec![String::from("sin"), String::from("sinh"), String::from("asin")],
        });
    }

    #[test]
    fn no_finite_value() {
        assert!(eval_complex(&parse("1/0")).is_err());
    }
}
