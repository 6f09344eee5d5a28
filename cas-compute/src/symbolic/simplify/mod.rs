//! Module to simplify expressions.
//!
//! This module provides the [`simplify`] function, which attempts to reduce the complexity of an
//! expression. It does this by repeatedly applying rewriting rules to the expression in multiple
//! passes, until no more rules apply. Afterwards, rational functions of a single variable have
//! their common factors cancelled, and the terms and factors are sorted into canonical order.
//!
//! Complexity is an informal, arbitrary metric that is used to determine whether one expression is
//! simpler than another; see [`default_complexity`].

mod fraction;
mod order;
pub mod rules;
pub mod step;

use crate::symbolic::step_collector::StepCollector;
use step::Step;
use super::expr::{Primary, SymExpr};

pub(crate) use order::sort;

/// The maximum number of passes over a single node. Rules always reduce complexity, so this limit
/// is only reached by pathological inputs.
const MAX_PASSES: usize = 64;

/// The default complexity heuristic function.
///
/// This function computes complexity using these simple rules:
///
/// - `complexity(integer) = number of bits`
/// - `complexity(float) = 1`
/// - `complexity(symbol) = length(symbol)`
/// - `complexity(call) = length(name) + length(args) + sum(complexity(args))`
/// - `complexity(add) = 3 + sum(complexity(terms))`
/// - `complexity(mul) = 2 + sum(complexity(factors))`
/// - `complexity(exp) = 1 + complexity(lhs) + complexity(rhs)`
pub fn default_complexity(expr: &SymExpr) -> usize {
    let mut complexity = 0;
    let mut stack = vec![expr];
    while let Some(expr) = stack.pop() {
        complexity += match expr {
            SymExpr::Primary(primary) => match primary {
                Primary::Integer(int) => int.significant_bits().max(1) as usize,
                Primary::Float(_) => 1,
                Primary::Symbol(sym) => sym.len(),
                Primary::Call(name, args) => {
                    stack.extend(args.iter());
                    name.len() + args.len()
                },
            },
            SymExpr::Add(terms) => {
                stack.extend(terms.iter());
                3
            },
            SymExpr::Mul(factors) => {
                stack.extend(factors.iter());
                2
            },
            SymExpr::Exp(lhs, rhs) => {
                stack.push(lhs);
                stack.push(rhs);
                1
            },
        };
    }
    complexity
}

/// Base implementation of the simplification algorithm.
fn inner_simplify(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> (SymExpr, bool) {
    let mut expr = expr.clone();
    let mut changed_at_least_once = false;

    for _ in 0..MAX_PASSES {
        let mut changed_in_this_pass = false;

        // try to simplify this expression using all rules
        if let Some(new_expr) = rules::all(&expr, step_collector) {
            expr = new_expr;
            changed_in_this_pass = true;
            changed_at_least_once = true;
        }

        // then begin recursing into the expression's children
        match expr {
            SymExpr::Primary(Primary::Call(_, ref mut args)) => {
                for arg in args.iter_mut() {
                    let result = inner_simplify(arg, step_collector);
                    *arg = result.0;
                    // use |= instead of = to not reset these variables to false if already true
                    changed_in_this_pass |= result.1;
                    changed_at_least_once |= result.1;
                }
            },
            SymExpr::Primary(primary) => return (SymExpr::Primary(primary), changed_at_least_once),
            SymExpr::Add(ref mut children) | SymExpr::Mul(ref mut children) => {
                for child in children.iter_mut() {
                    let result = inner_simplify(child, step_collector);
                    *child = result.0;
                    changed_in_this_pass |= result.1;
                    changed_at_least_once |= result.1;
                }
            },
            SymExpr::Exp(ref mut lhs, ref mut rhs) => {
                let result_l = inner_simplify(lhs, step_collector);
                let result_r = inner_simplify(rhs, step_collector);

                **lhs = result_l.0;
                **rhs = result_r.0;
                changed_in_this_pass |= result_l.1 || result_r.1;
                changed_at_least_once |= result_l.1 || result_r.1;
            },
        }

        if !changed_in_this_pass {
            break;
        }
    }

    (expr, changed_at_least_once)
}

/// Applies the rules, cancels common factors, and sorts the result.
fn simplify_with(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> SymExpr {
    let (expr, _) = inner_simplify(expr, step_collector);
    let expr = match fraction::cancel(&expr, step_collector) {
        Some(cancelled) => inner_simplify(&cancelled, step_collector).0,
        None => expr,
    };
    sort(&expr)
}

/// Simplify the given expression.
pub fn simplify(expr: &SymExpr) -> SymExpr {
    simplify_with(expr, &mut ())
}

/// Simplify the given expression. The steps taken by the simplifier will also be collected and
/// returned. This is useful for debugging, and also for displaying the steps taken to the user.
pub fn simplify_with_steps(expr: &SymExpr) -> (SymExpr, Vec<Step>) {
    let mut steps = Vec::new();
    let expr = simplify_with(expr, &mut steps);
    (expr, steps)
}

/// Simplifies the expression without sorting it or cancelling common factors. Used by routines
/// that need a cheap normalization of intermediate results.
pub(crate) fn simplify_rules(expr: &SymExpr) -> SymExpr {
    inner_simplify(expr, &mut ()).0
}
