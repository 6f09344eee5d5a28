use axum::{routing::post, Json, Router};
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::pipeline::{self, StepRequest};

use super::{blocking, ResultResponse};

/// Request body of `/olympiad/advanced`.
#[derive(Debug, Deserialize)]
pub struct AdvancedRequest {
    pub steps: Vec<StepRequest>,
}

/// POST /olympiad/advanced -- runs a multi-step pipeline and renders the final value.
#[tracing::instrument(skip_all, fields(steps = request.steps.len()))]
async fn advanced(AppJson(request): AppJson<AdvancedRequest>) -> AppResult<Json<ResultResponse>> {
    let value = blocking(move || pipeline::run(&request.steps)).await?;
    Ok(Json(ResultResponse::new(value)))
}

pub fn router() -> Router {
    Router::new().route("/olympiad/advanced", post(advanced))
}
