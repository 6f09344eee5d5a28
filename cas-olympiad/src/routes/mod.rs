//! HTTP routes. Each submodule exposes a `router()` that is merged into the application router.

pub mod algebra;
pub mod calculus;
pub mod geometry;
pub mod health;
pub mod numbers;
pub mod olympiad;

use axum::{routing::get, Router};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;

/// Request body carrying a single expression.
#[derive(Debug, Deserialize)]
pub struct ExpressionRequest {
    pub expression: String,
}

/// Request body carrying an expression and the variable to operate on.
#[derive(Debug, Deserialize)]
pub struct VariableRequest {
    pub expression: String,

    /// Defaults to `x`.
    #[serde(default = "default_variable")]
    pub variable: String,
}

fn default_variable() -> String {
    "x".to_string()
}

/// Response body carrying one rendered result.
#[derive(Debug, Serialize)]
pub struct ResultResponse {
    pub result: String,
}

impl ResultResponse {
    pub fn new(result: impl ToString) -> Self {
        Self { result: result.to_string() }
    }
}

/// Runs a computation on the blocking thread pool, so long-running algebra does not hold up
/// other requests.
pub async fn blocking<T, F>(f: F) -> AppResult<T>
where
    F: FnOnce() -> AppResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await?
}

/// GET / -- plain-text liveness banner.
async fn home() -> &'static str {
    "SymPy Olympiad API is live!"
}

/// All application routes.
pub fn router() -> Router {
    Router::new()
        .route("/", get(home))
        .merge(health::router())
        .merge(algebra::router())
        .merge(calculus::router())
        .merge(geometry::router())
        .merge(numbers::router())
        .merge(olympiad::router())
}
