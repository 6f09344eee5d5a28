//! Integration tests for the `/algebra/*` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json};
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: solve an equation, default variable
// ---------------------------------------------------------------------------

#[tokio::test]
async fn solve_quadratic_equation() {
    let app = common::build_test_app();
    let response = post_json(app, "/algebra/solve", json!({ "expression": "x^2 - 5x + 6 = 0" })).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "solutions": ["2", "3"] }));
}

// ---------------------------------------------------------------------------
// Test: solve for an explicit variable
// ---------------------------------------------------------------------------

#[tokio::test]
async fn solve_for_named_variable() {
    let app = common::build_test_app();
    let body = json!({ "expression": "y^2 - 2", "variable": "y" });
    let response = post_json(app, "/algebra/solve", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "solutions": ["-sqrt(2)", "sqrt(2)"] }));
}

// ---------------------------------------------------------------------------
// Test: complex roots
// ---------------------------------------------------------------------------

#[tokio::test]
async fn solve_with_complex_roots() {
    let app = common::build_test_app();
    let response = post_json(app, "/algebra/solve", json!({ "expression": "x^2 + 1" })).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "solutions": ["-I", "I"] }));
}

// ---------------------------------------------------------------------------
// Test: an expression without the variable has no solutions
// ---------------------------------------------------------------------------

#[tokio::test]
async fn solve_without_variable_is_empty() {
    let app = common::build_test_app();
    let response = post_json(app, "/algebra/solve", json!({ "expression": "y + 1" })).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "solutions": [] }));
}

// ---------------------------------------------------------------------------
// Test: transcendental equations are rejected
// ---------------------------------------------------------------------------

#[tokio::test]
async fn solve_transcendental_is_bad_request() {
    let app = common::build_test_app();
    let response = post_json(app, "/algebra/solve", json!({ "expression": "sin(x)" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("not a polynomial"));
}

// ---------------------------------------------------------------------------
// Test: invalid variable names are rejected
// ---------------------------------------------------------------------------

#[tokio::test]
async fn solve_with_invalid_variable() {
    let app = common::build_test_app();
    let body = json!({ "expression": "x - 1", "variable": "2x" });
    let response = post_json(app, "/algebra/solve", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({ "error": "`2x` is not a valid symbol name" }));
}

// ---------------------------------------------------------------------------
// Test: simplify
// ---------------------------------------------------------------------------

#[tokio::test]
async fn simplify_expression() {
    let app = common::build_test_app();
    let body = json!({ "expression": "sin(x)^2 + cos(x)^2" });
    let response = post_json(app, "/algebra/simplify", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "result": "1" }));
}

#[tokio::test]
async fn simplify_rational_function() {
    let app = common::build_test_app();
    let body = json!({ "expression": "(x^2 - 1)/(x - 1)" });
    let response = post_json(app, "/algebra/simplify", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "result": "x + 1" }));
}

// ---------------------------------------------------------------------------
// Test: expand
// ---------------------------------------------------------------------------

#[tokio::test]
async fn expand_binomial() {
    let app = common::build_test_app();
    let response = post_json(app, "/algebra/expand", json!({ "expression": "(x + 1)^3" })).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "result": "x**3 + 3*x**2 + 3*x + 1" }));
}

#[tokio::test]
async fn expand_too_large_is_bad_request() {
    let app = common::build_test_app();
    let response = post_json(app, "/algebra/expand", json!({ "expression": "(x + 1)^100" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("power 100"));
}

// ---------------------------------------------------------------------------
// Test: factor
// ---------------------------------------------------------------------------

#[tokio::test]
async fn factor_quadratic() {
    let app = common::build_test_app();
    let response = post_json(app, "/algebra/factor", json!({ "expression": "x^2 + 5x + 6" })).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "result": "(x + 2)*(x + 3)" }));
}

#[tokio::test]
async fn factor_common_factor_of_several_variables() {
    let app = common::build_test_app();
    let response = post_json(app, "/algebra/factor", json!({ "expression": "2x*y + 4x" })).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "result": "2*x*(y + 2)" }));
}
