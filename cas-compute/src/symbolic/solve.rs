//! Finding the zeros of an expression.

use crate::approx::approximate_rational;
use crate::error::SolveError;
use crate::numerical::{eval_complex, evalf};
use std::cmp::Ordering;
use super::{
    expand::expand,
    expr::{Primary, SymExpr},
    poly::{coefficients, together, Poly},
    simplify::simplify,
};

/// Replaces every float with a close rational number. Returns true if any float was replaced.
fn rationalize(expr: &SymExpr) -> (SymExpr, bool) {
    match expr {
        SymExpr::Primary(Primary::Float(f)) => match approximate_rational(f) {
            Some(r) => (SymExpr::rational(r), true),
            None => (expr.clone(), true),
        },
        expr => {
            let mut replaced = false;
            let expr = expr.map_children(|child| {
                let (child, child_replaced) = rationalize(child);
                replaced |= child_replaced;
                child
            });
            (expr, replaced)
        },
    }
}

/// The two roots of `a x^2 + b x + c`, smaller square root term first.
fn quadratic(a: SymExpr, b: SymExpr, c: SymExpr) -> [SymExpr; 2] {
    let discriminant = SymExpr::pow(b.clone(), SymExpr::int(2))
        + SymExpr::Mul(vec![SymExpr::int(-4), a.clone(), c]);
    let root = discriminant.sqrt();
    let two_a = SymExpr::Mul(vec![SymExpr::int(2), a]);
    [
        simplify(&SymExpr::fraction(-b.clone() + -root.clone(), two_a.clone())),
        simplify(&SymExpr::fraction(-b + root, two_a)),
    ]
}

/// Finds the roots of a square-free polynomial with no rational roots.
fn irrational_roots(p: &Poly, expr: &SymExpr, var: &str) -> Result<Vec<SymExpr>, SolveError> {
    let coeff = |k| SymExpr::rational(p.coeff(k));
    match p.degree() {
        0 => Ok(Vec::new()),
        1 => Ok(vec![simplify(&SymExpr::fraction(-coeff(0), coeff(1)))]),
        2 => Ok(quadratic(coeff(2), coeff(1), coeff(0)).into()),
        // a x^4 + b x^2 + c, solved as a quadratic in x^2
        4 if p.coeff(1).cmp0().is_eq() && p.coeff(3).cmp0().is_eq() => {
            Ok(quadratic(coeff(4), coeff(2), coeff(0))
                .into_iter()
                .flat_map(|square| {
                    let root = square.sqrt();
                    [simplify(&-root.clone()), simplify(&root)]
                })
                .collect())
        },
        degree => Err(SolveError::DegreeTooHigh {
            expr: expr.to_string(),
            var: var.to_string(),
            degree,
        }),
    }
}

/// Solves `numer / denom = 0` for a rational function with rational coefficients.
fn solve_rational(numer: &Poly, denom: &Poly, expr: &SymExpr, var: &str) -> Result<Vec<SymExpr>, SolveError> {
    if numer.is_zero() {
        return Ok(Vec::new());
    }

    let (roots, rest) = numer.split_rational_roots();
    let mut solutions = roots.into_iter()
        .filter(|(root, _)| denom.eval(root).cmp0().is_ne())
        .map(|(root, _)| SymExpr::rational(root))
        .collect::<Vec<_>>();

    for (part, _) in rest.square_free() {
        solutions.extend(irrational_roots(&part, expr, var)?);
    }
    Ok(solutions)
}

/// Solves a polynomial in `var` whose coefficients may contain other symbols.
fn solve_symbolic(expr: &SymExpr, var: &str) -> Result<Vec<SymExpr>, SolveError> {
    let not_polynomial = || SolveError::NotPolynomial {
        expr: expr.to_string(),
        var: var.to_string(),
    };
    let expanded = expand(expr)?;
    let coeffs = coefficients(&expanded, var).ok_or_else(not_polynomial)?;
    let coeffs = coeffs.iter().map(simplify).collect::<Vec<_>>();

    match coeffs.as_slice() {
        [] | [_] => Ok(Vec::new()),
        [c, b] => Ok(vec![simplify(&SymExpr::fraction(-c.clone(), b.clone()))]),
        [c, b, a] => Ok(quadratic(a.clone(), b.clone(), c.clone()).into()),
        _ => Err(SolveError::DegreeTooHigh {
            expr: expr.to_string(),
            var: var.to_string(),
            degree: coeffs.len() - 1,
        }),
    }
}

/// Sort key of a root: its numeric value, if it has one.
fn numeric_key(root: &SymExpr) -> Option<(f64, f64)> {
    let value = eval_complex(root).ok()?;
    Some((value.real().to_f64(), value.imag().to_f64()))
}

fn cmp_keys(a: &Option<(f64, f64)>, b: &Option<(f64, f64)>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.0.total_cmp(&b.0).then_with(|| a.1.total_cmp(&b.1)),
        (a, b) => b.is_some().cmp(&a.is_some()),
    }
}

/// Finds the values of `var` that make the expression zero.
///
/// Polynomials and rational functions with rational coefficients are solved exactly for roots
/// of degree at most two, or of biquadratic factors. Polynomials with symbolic coefficients are
/// solved up to degree two. The returned roots are unique and sorted by value, real part first.
///
/// If the expression contains floats, they are treated as exact during solving, and the roots
/// are numerically evaluated.
pub fn solve(expr: &SymExpr, var: &str) -> Result<Vec<SymExpr>, SolveError> {
    let simplified = simplify(expr);
    if !simplified.contains_symbol(var) {
        return Ok(Vec::new());
    }

    let (exact, approximate) = rationalize(&simplified);
    let roots = match together(&exact, var) {
        Some((numer, denom)) => solve_rational(&numer, &denom, &simplified, var)?,
        None => solve_symbolic(&exact, var)?,
    };

    let mut unique: Vec<SymExpr> = Vec::with_capacity(roots.len());
    for root in roots {
        let root = if approximate {
            evalf(&root).unwrap_or(root)
        } else {
            root
        };
        if !unique.contains(&root) {
            unique.push(root);
        }
    }

    let mut keyed = unique.into_iter()
        .map(|root| (numeric_key(&root), root))
        .collect::<Vec<_>>();
    keyed.sort_by(|(a, _), (b, _)| cmp_keys(a, b));
    Ok(keyed.into_iter().map(|(_, root)| root).collect())
}
