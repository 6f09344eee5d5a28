use axum::{routing::post, Json, Router};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::input::{parse_expression, parse_symbol};
use crate::pipeline::{Context, Operation};

use super::{blocking, ResultResponse, VariableRequest};

/// Parses the expression and applies an operation taken with respect to `request.variable`.
async fn with_respect_to(operation: Operation, request: VariableRequest) -> AppResult<Json<ResultResponse>> {
    let value = blocking(move || {
        let expr = parse_expression(&request.expression)?;
        let ctx = Context::new(parse_symbol(&request.variable)?);
        Ok(operation.apply_expr(&expr, &ctx)?)
    })
    .await?;
    Ok(Json(ResultResponse::new(value)))
}

/// POST /calculus/differentiate
#[tracing::instrument(skip_all, fields(expression = %request.expression, variable = %request.variable))]
async fn differentiate(AppJson(request): AppJson<VariableRequest>) -> AppResult<Json<ResultResponse>> {
    with_respect_to(Operation::Differentiate, request).await
}

/// POST /calculus/integrate -- the antiderivative, without a constant of integration.
#[tracing::instrument(skip_all, fields(expression = %request.expression, variable = %request.variable))]
async fn integrate(AppJson(request): AppJson<VariableRequest>) -> AppResult<Json<ResultResponse>> {
    with_respect_to(Operation::Integrate, request).await
}

pub fn router() -> Router {
    Router::new()
        .route("/calculus/differentiate", post(differentiate))
        .route("/calculus/integrate", post(integrate))
}
