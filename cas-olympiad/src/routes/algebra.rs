//! `/algebra/*`: solving equations and rewriting expressions.

use axum::{routing::post, Json, Router};
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::input::{parse_expression, parse_symbol};
use crate::pipeline::{Context, Operation};

use super::{blocking, ExpressionRequest, ResultResponse, VariableRequest};

/// Response body of `/algebra/solve`.
#[derive(Debug, Serialize)]
pub struct SolutionsResponse {
    pub solutions: Vec<String>,
}

/// POST /algebra/solve -- solves `expression = 0` (or the given equation) for `variable`.
#[tracing::instrument(skip_all, fields(expression = %request.expression, variable = %request.variable))]
async fn solve(AppJson(request): AppJson<VariableRequest>) -> AppResult<Json<SolutionsResponse>> {
    let solutions = blocking(move || {
        let expr = parse_expression(&request.expression)?;
        let ctx = Context::new(parse_symbol(&request.variable)?);
        Ok(Operation::Solve.apply_expr(&expr, &ctx)?.into_vec())
    })
    .await?;

    Ok(Json(SolutionsResponse {
        solutions: solutions.iter().map(ToString::to_string).collect(),
    }))
}

/// Parses the expression and applies a variable-free operation to it.
pub(crate) async fn rewrite(operation: Operation, input: String) -> AppResult<Json<ResultResponse>> {
    let value = blocking(move || {
        let expr = parse_expression(&input)?;
        Ok(operation.apply_expr(&expr, &Context::new("x"))?)
    })
    .await?;
    Ok(Json(ResultResponse::new(value)))
}

/// POST /algebra/simplify
#[tracing::instrument(skip_all, fields(expression = %request.expression))]
async fn simplify(AppJson(request): AppJson<ExpressionRequest>) -> AppResult<Json<ResultResponse>> {
    rewrite(Operation::Simplify, request.expression).await
}

/// POST /algebra/expand
#[tracing::instrument(skip_all, fields(expression = %request.expression))]
async fn expand(AppJson(request): AppJson<ExpressionRequest>) -> AppResult<Json<ResultResponse>> {
    rewrite(Operation::Expand, request.expression).await
}

/// POST /algebra/factor
#[tracing::instrument(skip_all, fields(expression = %request.expression))]
async fn factor(AppJson(request): AppJson<ExpressionRequest>) -> AppResult<Json<ResultResponse>> {
    rewrite(Operation::Factor, request.expression).await
}

pub fn router() -> Router {
    Router::new()
        .route("/algebra/solve", post(solve))
        .route("/algebra/simplify", post(simplify))
        .route("/algebra/expand", post(expand))
        .route("/algebra/factor", post(factor))
}
