//! Exact evaluation of builtin functions with integer arguments, such as `factorial(5) = 120`.
//!
//! Failures (such as `factorial(-1)`) leave the call unevaluated; numeric evaluation reports them.

use crate::error::EvalError;
use crate::funcs::{combinatoric::*, miscellaneous::Factorial, number_theory::*};
use crate::symbolic::{
    expr::{Primary, SymExpr},
    number::Number,
    simplify::{rules::do_call, step::Step},
    step_collector::StepCollector,
};
use rug::Integer;

/// If every argument is an integer, calls `f` with the arguments and wraps its result.
fn with_integers(
    expr: &SymExpr,
    name: &str,
    f: impl Fn(&[&Integer]) -> Result<Integer, EvalError>,
) -> Option<SymExpr> {
    do_call(expr, name, |args| {
        let ints = args.iter()
            .map(SymExpr::as_integer)
            .collect::<Option<Vec<_>>>()?;
        f(&ints).ok().map(SymExpr::from)
    })
}

/// `factorial(5) = 120`, `binomial(5, 2) = 10`, `gcd(12, 18) = 6`, ...
pub fn integer_function(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let SymExpr::Primary(Primary::Call(name, _)) = expr else {
        return None;
    };

    let opt = match name.as_str() {
        "factorial" => with_integers(expr, name, |args| match args {
            [n] => Factorial::eval_static(n),
            _ => Err(EvalError::Domain(String::new())),
        }),
        "binomial" => with_integers(expr, name, |args| match args {
            [n, k] => Binomial::eval_static(n, k),
            _ => Err(EvalError::Domain(String::new())),
        }),
        "fibonacci" => with_integers(expr, name, |args| match args {
            [n] => Fibonacci::eval_static(n),
            _ => Err(EvalError::Domain(String::new())),
        }),
        "catalan" => with_integers(expr, name, |args| match args {
            [n] => Catalan::eval_static(n),
            _ => Err(EvalError::Domain(String::new())),
        }),
        "gcd" => with_integers(expr, name, |args| match args {
            [a, b] => Ok(Gcd::eval_static(a, b)),
            _ => Err(EvalError::Domain(String::new())),
        }),
        "lcm" => with_integers(expr, name, |args| match args {
            [a, b] => Ok(Lcm::eval_static(a, b)),
            _ => Err(EvalError::Domain(String::new())),
        }),
        "Mod" => with_integers(expr, name, |args| match args {
            [a, b] => Mod::eval_static(a, b),
            _ => Err(EvalError::Domain(String::new())),
        }),
        "totient" => with_integers(expr, name, |args| match args {
            [n] => Totient::eval_static(n),
            _ => Err(EvalError::Domain(String::new())),
        }),
        _ => None,
    }?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::IntegerFunction);
    Some(opt)
}

/// `Abs(-3/2) = 3/2`
/// `floor(7/2) = 3`
/// `ceiling(-2.5) = -2`
pub fn numeric_rounding(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let number_arg = |args: &[SymExpr]| match args {
        [arg] => Number::from_expr(arg),
        _ => None,
    };

    let opt = do_call(expr, "Abs", |args| Some(number_arg(args)?.abs().into_expr()))
        .or_else(|| do_call(expr, "abs", |args| Some(number_arg(args)?.abs().into_expr())))
        .or_else(|| do_call(expr, "floor", |args| match number_arg(args)? {
            Number::Rational(r) => Some(SymExpr::from(r.floor().into_numer_denom().0)),
            Number::Float(f) => f.floor().to_integer().map(SymExpr::from),
        }))
        .or_else(|| do_call(expr, "ceiling", |args| match number_arg(args)? {
            Number::Rational(r) => Some(SymExpr::from(r.ceil().into_numer_denom().0)),
            Number::Float(f) => f.ceil().to_integer().map(SymExpr::from),
        }))?;

    step_collector.push(Step::IntegerFunction);
    Some(opt)
}

/// Applies all integer function rules.
pub fn all(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    integer_function(expr, step_collector)
        .or_else(|| numeric_rounding(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use crate::primitive::{float, rational};
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn exact_functions() {
        let call = |name: &str, args: Vec<i32>| {
            SymExpr::call(name, args.into_iter().map(SymExpr::int).collect())
        };
        assert_eq!(integer_function(&call("factorial", vec![5]), &mut ()), Some(SymExpr::int(120)));
        assert_eq!(integer_function(&call("binomial", vec![6, 2]), &mut ()), Some(SymExpr::int(15)));
        assert_eq!(integer_function(&call("gcd", vec![12, 18]), &mut ()), Some(SymExpr::int(6)));
        assert_eq!(integer_function(&call("Mod", vec![-7, 3]), &mut ()), Some(SymExpr::int(2)));
        assert_eq!(integer_function(&call("factorial", vec![-1]), &mut ()), None);
    }

    #[test]
    fn symbolic_arguments_are_left_alone() {
        let expr = SymExpr::call("factorial", vec![SymExpr::symbol("n")]);
        assert_eq!(all(&expr, &mut ()), None);
    }

    #[test]
    fn rounding() {
        let half = |n: i32| SymExpr::rational(rational((n, 2)));
        assert_eq!(numeric_rounding(&SymExpr::call("floor", vec![half(7)]), &mut ()), Some(SymExpr::int(3)));
        assert_eq!(numeric_rounding(&SymExpr::call("ceiling", vec![half(-5)]), &mut ()), Some(SymExpr::int(-2)));
        assert_eq!(
            numeric_rounding(&SymExpr::call("Abs", vec![half(-3)]), &mut ()),
            Some(half(3)),
        );
        assert_eq!(
            numeric_rounding(&SymExpr::call("floor", vec![SymExpr::float(float(2.5))]), &mut ()),
            Some(SymExpr::int(2)),
        );
    }
}
