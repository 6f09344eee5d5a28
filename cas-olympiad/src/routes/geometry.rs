//! `/geometry/*`: plane formulas are simplified; solid formulas are evaluated at given
//! measurements.

use axum::{routing::post, Json, Router};

use cas_compute::numerical::evalf;
use cas_compute::symbolic::{substitute::replace, SymExpr};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::input::{parse_expression, parse_symbol};
use crate::pipeline::Operation;

use super::algebra::rewrite;
use super::{blocking, ExpressionRequest, ResultResponse};

/// A solid-geometry problem: `V = a*b*c; a = 1; b = 2; c = 3`.
#[derive(Debug)]
struct SolidProblem {
    formula: SymExpr,
    measurements: Vec<(String, SymExpr)>,
}

impl SolidProblem {
    /// Parses the `;`-separated problem text. The first part is `name = formula` or a bare
    /// formula; later parts of the form `symbol = value` give the measurements, and other later
    /// parts are ignored.
    fn parse(input: &str) -> AppResult<Self> {
        let mut parts = input.split(';');
        let head = parts.next().unwrap_or_default();
        let formula = match head.split_once('=') {
            Some((_, formula)) => formula,
            None => head,
        };
        if formula.trim().is_empty() {
            return Err(AppError::BadRequest("missing formula before the first `;`".to_string()));
        }
        let formula = parse_expression(formula.trim())?;

        let measurements = parts
            .filter_map(|part| part.split_once('='))
            .map(|(name, value)| {
                let name = parse_symbol(name.trim())?;
                let value = parse_expression(value.trim())?;
                if !value.is_number() {
                    return Err(AppError::BadRequest(format!(
                        "the value of `{}` must be a number, got `{}`",
                        name, value,
                    )));
                }
                Ok((name.to_string(), value))
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self { formula, measurements })
    }

    /// Substitutes the measurements into the formula and evaluates it numerically.
    fn evaluate(&self) -> AppResult<SymExpr> {
        let expr = replace(&self.formula, &self.measurements);
        Ok(evalf(&expr).map_err(cas_compute::Error::from)?)
    }
}

/// POST /geometry/plane
#[tracing::instrument(skip_all, fields(expression = %request.expression))]
async fn plane(AppJson(request): AppJson<ExpressionRequest>) -> AppResult<Json<ResultResponse>> {
    rewrite(Operation::Simplify, request.expression).await
}

/// POST /geometry/solid
#[tracing::instrument(skip_all, fields(expression = %request.expression))]
async fn solid(AppJson(request): AppJson<ExpressionRequest>) -> AppResult<Json<ResultResponse>> {
    let result = blocking(move || SolidProblem::parse(&request.expression)?.evaluate()).await?;
    Ok(Json(ResultResponse::new(result)))
}

pub fn router() -> Router {
    Router::new()
        .route("/geometry/plane", post(plane))
        .route("/geometry/solid", post(solid))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn solve_solid(input: &str) -> String {
        SolidProblem::parse(input).unwrap().evaluate().unwrap().to_string()
    }

    #[test]
    fn named_formula() {
        assert_eq!(solve_solid("V = a*b*c; a = 1; b = 2; c = 3"), "6.00000000000000");
    }

    #[test]
    fn bare_formula_and_stray_parts() {
        assert_eq!(solve_solid("4*r^2 ; r = 0.5; cube"), "1.00000000000000");
    }

    #[test]
    fn constants_in_formula_and_values() {
        assert_eq!(solve_solid("V = pi*r^2*h; r = 1; h = 1"), "3.14159265358979");
        assert_eq!(solve_solid("V = s^3; s = sqrt(4)"), "8.00000000000000");
    }

    #[test]
    fn unknown_measurements_stay_symbolic() {
        assert_eq!(solve_solid("V = a*b; a = 2"), "2.0*b");
    }

    #[test]
    fn values_must_be_numbers() {
        let err = SolidProblem::parse("V = a*b; a = b").unwrap_err();
        assert_eq!(err.to_string(), "the value of `a` must be a number, got `b`");
    }

    #[test]
    fn missing_formula() {
        assert!(SolidProblem::parse("V = ; a = 1").is_err());
        assert!(SolidProblem::parse("").is_err());
    }
}
