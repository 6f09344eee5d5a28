//! Simplification rules for expressions involving addition, including combining like terms.

use crate::symbolic::{
    expr::SymExpr,
    number::{term_coefficient, with_coefficient, Number},
    simplify::{rules::do_add, step::Step},
    step_collector::StepCollector,
};

/// `a + (b + c) = a + b + c`
pub fn flatten(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_add(expr, |terms| {
        if !terms.iter().any(|term| matches!(term, SymExpr::Add(_))) {
            return None;
        }

        let mut new_terms = Vec::with_capacity(terms.len());
        for term in terms {
            match term {
                SymExpr::Add(inner) => new_terms.extend(inner.iter().cloned()),
                term => new_terms.push(term.clone()),
            }
        }
        Some(SymExpr::Add(new_terms).downgrade())
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::FlattenSum);
    Some(opt)
}

/// Combines like terms, which also folds the numbers in the sum and removes zeros.
///
/// `a+0 = a`
/// `a+a = 2a`
/// `2a+3a = 5a`
/// `1/2 + 0.25 = 0.75`
pub fn combine_like_terms(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_add(expr, |terms| {
        // (coefficient, rest) pairs, in order of first appearance
        let mut groups: Vec<(Number, SymExpr)> = Vec::with_capacity(terms.len());
        let mut changed = false;

        // O(n^2), but sums are short
        for term in terms {
            let (coefficient, rest) = term_coefficient(term);
            match groups.iter_mut().find(|(_, other)| *other == rest) {
                Some((sum, _)) => {
                    *sum = sum.add(&coefficient);
                    changed = true;
                },
                None => groups.push((coefficient, rest)),
            }
        }

        let new_terms = groups.into_iter()
            .filter(|(coefficient, _)| {
                let keep = !coefficient.is_zero();
                changed |= !keep;
                keep
            })
            .map(|(coefficient, rest)| with_coefficient(coefficient, rest))
            .collect::<Vec<_>>();

        if changed {
            Some(SymExpr::Add(new_terms).downgrade())
        } else {
            None
        }
    })?;

    step_collector.push(Step::CombineLikeTerms);
    Some(opt)
}

/// Applies all addition rules.
///
/// All addition rules will reduce the complexity of the expression.
pub fn all(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    flatten(expr, step_collector)
        .or_else(|| combine_like_terms(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use crate::primitive::float;
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> SymExpr {
        SymExpr::symbol("x")
    }

    #[test]
    fn like_terms() {
        let expr = SymExpr::Add(vec![
            x(),
            SymExpr::int(3),
            SymExpr::Mul(vec![SymExpr::int(2), x()]),
            SymExpr::int(-1),
        ]);
        let mut steps = Vec::new();
        let simplified = combine_like_terms(&expr, &mut steps).unwrap();
        assert_eq!(simplified, SymExpr::Add(vec![
            SymExpr::Mul(vec![SymExpr::int(3), x()]),
            SymExpr::int(2),
        ]));
        assert_eq!(steps, vec![Step::CombineLikeTerms]);
    }

    #[test]
    fn cancels_to_zero() {
        let expr = SymExpr::Add(vec![x(), SymExpr::Mul(vec![SymExpr::int(-1), x()])]);
        assert_eq!(combine_like_terms(&expr, &mut ()), Some(SymExpr::int(0)));
    }

    #[test]
    fn floats_fold_with_rationals() {
        let expr = SymExpr::Add(vec![SymExpr::float(float(0.5)), SymExpr::int(2)]);
        assert_eq!(combine_like_terms(&expr, &mut ()), Some(SymExpr::float(float(2.5))));
    }

    #[test]
    fn nothing_to_combine() {
        let expr = SymExpr::Add(vec![x(), SymExpr::int(1)]);
        assert_eq!(all(&expr, &mut ()), None);
    }
}
