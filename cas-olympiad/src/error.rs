use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::pipeline::Operation;

/// Application-level error type for HTTP handlers.
///
/// Every variant a client can cause is answered with `400 Bad Request` and a JSON body of the
/// form `{"error": "<message>"}`. Parse errors also carry a `"report"` field: a plain-text
/// diagnostic that points into the offending expression.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request body is not valid JSON, or does not have the expected shape.
    #[error("{}", .0.body_text())]
    Json(#[from] JsonRejection),

    /// An expression could not be parsed.
    #[error("{message}")]
    Parse {
        /// One-line summary of the problem.
        message: String,

        /// The rendered diagnostic, without terminal colors.
        report: String,
    },

    /// An algebra routine failed.
    #[error(transparent)]
    Compute(#[from] cas_compute::Error),

    /// A pipeline step named an operation that does not exist.
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// A pipeline step had nothing to operate on.
    #[error("no expression to {0}")]
    NoExpression(Operation),

    /// A bad request with a human-readable message.
    #[error("{0}")]
    BadRequest(String),

    /// The blocking task running a computation panicked or was cancelled.
    #[error("computation task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Builds a [`AppError::Parse`] from a spanned error in `input`.
    pub fn parse(err: &cas_error::Error, input: &str) -> Self {
        Self::Parse {
            message: err.message(),
            report: err.report_to_string("expression", input),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match &self {
            AppError::Task(err) => {
                tracing::error!(error = %err, "Computation task failed");
                let body = json!({ "error": "An internal error occurred" });
                return (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response();
            },
            AppError::Parse { message, report } => json!({
                "error": message,
                "report": report,
            }),
            other => json!({ "error": other.to_string() }),
        };

        tracing::warn!(error = %self, "Request failed");
        (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use cas_compute::error::SolveError;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(AppError::UnknownOperation("foo".into()).to_string(), "Unknown operation: foo");
        assert_eq!(AppError::NoExpression(Operation::Factor).to_string(), "no expression to factor");

        let err = AppError::from(cas_compute::Error::from(SolveError::DegreeTooHigh {
            expr: "x**5 + x + 1".into(),
            var: "x".into(),
            degree: 5,
        }));
        assert_eq!(
            err.to_string(),
            "cannot solve `x**5 + x + 1 = 0` for `x`: no exact solution for a polynomial of degree 5",
        );
    }

    #[test]
    fn everything_but_task_failures_is_a_bad_request() {
        let response = AppError::BadRequest("nope".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = AppError::UnknownOperation("foo".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
