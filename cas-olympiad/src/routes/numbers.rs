//! `/combinatorics` and `/number-theory`: numeric evaluation of counting and divisibility
//! expressions such as `binomial(10, 3)`, `factorial(6)/2`, `gcd(84, 36)` or `totient(36)`.

use axum::{routing::post, Json, Router};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::pipeline::Operation;

use super::algebra::rewrite;
use super::{ExpressionRequest, ResultResponse};

/// POST /combinatorics
#[tracing::instrument(skip_all, fields(expression = %request.expression))]
async fn combinatorics(AppJson(request): AppJson<ExpressionRequest>) -> AppResult<Json<ResultResponse>> {
    rewrite(Operation::Evaluate, request.expression).await
}

/// POST /number-theory
#[tracing::instrument(skip_all, fields(expression = %request.expression))]
async fn number_theory(AppJson(request): AppJson<ExpressionRequest>) -> AppResult<Json<ResultResponse>> {
    rewrite(Operation::Evaluate, request.expression).await
}

pub fn router() -> Router {
    Router::new()
        .route("/combinatorics", post(combinatorics))
        .route("/number-theory", post(number_theory))
}
