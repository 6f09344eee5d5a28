//! Integration tests for the `/olympiad/advanced` step pipeline.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json};
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: the running value carries from step to step
// ---------------------------------------------------------------------------

#[tokio::test]
async fn expand_then_differentiate_then_factor() {
    let app = common::build_test_app();
    let body = json!({
        "steps": [
            { "operation": "expand", "expression": "(x + 1)^2" },
            { "operation": "differentiate" },
            { "operation": "factor" },
        ]
    });
    let response = post_json(app, "/olympiad/advanced", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "result": "2*(x + 1)" }));
}

// ---------------------------------------------------------------------------
// Test: substitute then solve
// ---------------------------------------------------------------------------

#[tokio::test]
async fn substitute_then_solve() {
    let app = common::build_test_app();
    let body = json!({
        "steps": [
            { "operation": "substitute", "expression": "x^2 - 5x + k", "substitutions": { "k": "6" } },
            { "operation": "solve" },
        ]
    });
    let response = post_json(app, "/olympiad/advanced", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "result": "[2, 3]" }));
}

// ---------------------------------------------------------------------------
// Test: operations after solve apply to each solution
// ---------------------------------------------------------------------------

#[tokio::test]
async fn solutions_are_evaluated_element_wise() {
    let app = common::build_test_app();
    let body = json!({
        "steps": [
            { "operation": "solve", "expression": "x^2 - 2" },
            { "operation": "evaluate" },
        ]
    });
    let response = post_json(app, "/olympiad/advanced", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "result": "[-1.41421356237310, 1.41421356237310]" }),
    );
}

// ---------------------------------------------------------------------------
// Test: a later expression replaces the running value
// ---------------------------------------------------------------------------

#[tokio::test]
async fn later_expression_replaces_value() {
    let app = common::build_test_app();
    let body = json!({
        "steps": [
            { "operation": "simplify", "expression": "x + x" },
            { "operation": "integrate", "expression": "sin(t)", "variable": "t" },
        ]
    });
    let response = post_json(app, "/olympiad/advanced", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "result": "-cos(t)" }));
}

// ---------------------------------------------------------------------------
// Test: an empty pipeline renders as None
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_pipeline_is_none() {
    let app = common::build_test_app();
    let response = post_json(app, "/olympiad/advanced", json!({ "steps": [] })).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "result": "None" }));
}

// ---------------------------------------------------------------------------
// Test: unknown operations are rejected
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_operation_is_bad_request() {
    let app = common::build_test_app();
    let body = json!({
        "steps": [
            { "operation": "simplify", "expression": "x" },
            { "operation": "telepathy" },
        ]
    });
    let response = post_json(app, "/olympiad/advanced", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({ "error": "Unknown operation: telepathy" }));
}

// ---------------------------------------------------------------------------
// Test: an operation with nothing to work on is rejected
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_expression_is_bad_request() {
    let app = common::build_test_app();
    let body = json!({ "steps": [{ "operation": "solve" }] });
    let response = post_json(app, "/olympiad/advanced", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({ "error": "no expression to solve" }));
}

// ---------------------------------------------------------------------------
// Test: a failing step aborts the whole pipeline
// ---------------------------------------------------------------------------

#[tokio::test]
async fn failing_step_aborts_pipeline() {
    let app = common::build_test_app();
    let body = json!({
        "steps": [
            { "operation": "integrate", "expression": "exp(x^2)" },
            { "operation": "simplify" },
        ]
    });
    let response = post_json(app, "/olympiad/advanced", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "cannot integrate `exp(x**2)` with respect to `x`");
}
