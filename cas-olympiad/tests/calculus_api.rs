//! Integration tests for the `/calculus/*` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json};
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: differentiate with the default variable
// ---------------------------------------------------------------------------

#[tokio::test]
async fn differentiate_polynomial() {
    let app = common::build_test_app();
    let body = json!({ "expression": "x^3 + 2x^2 - 5" });
    let response = post_json(app, "/calculus/differentiate", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "result": "3*x**2 + 4*x" }));
}

// ---------------------------------------------------------------------------
// Test: chain rule
// ---------------------------------------------------------------------------

#[tokio::test]
async fn differentiate_composition() {
    let app = common::build_test_app();
    let response = post_json(app, "/calculus/differentiate", json!({ "expression": "sin(x^2)" })).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "result": "2*x*cos(x**2)" }));
}

// ---------------------------------------------------------------------------
// Test: differentiate with respect to another variable
// ---------------------------------------------------------------------------

#[tokio::test]
async fn differentiate_with_respect_to_other_variable() {
    let app = common::build_test_app();
    let body = json!({ "expression": "x^2", "variable": "t" });
    let response = post_json(app, "/calculus/differentiate", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "result": "0" }));
}

// ---------------------------------------------------------------------------
// Test: unknown functions of the variable cannot be differentiated
// ---------------------------------------------------------------------------

#[tokio::test]
async fn differentiate_unknown_function() {
    let app = common::build_test_app();
    let response = post_json(app, "/calculus/differentiate", json!({ "expression": "f(x)" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "cannot differentiate the function `f`" }),
    );
}

// ---------------------------------------------------------------------------
// Test: integrate
// ---------------------------------------------------------------------------

#[tokio::test]
async fn integrate_polynomial() {
    let app = common::build_test_app();
    let response = post_json(app, "/calculus/integrate", json!({ "expression": "2x + 1" })).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "result": "x**2 + x" }));
}

#[tokio::test]
async fn integrate_by_parts_rule() {
    let app = common::build_test_app();
    let response = post_json(app, "/calculus/integrate", json!({ "expression": "log(x)" })).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "result": "x*log(x) - x" }));
}

// ---------------------------------------------------------------------------
// Test: integrals with no elementary rule are a bad request
// ---------------------------------------------------------------------------

#[tokio::test]
async fn integrate_unsupported() {
    let app = common::build_test_app();
    let response = post_json(app, "/calculus/integrate", json!({ "expression": "exp(x^2)" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "cannot integrate `exp(x**2)` with respect to `x`" }),
    );
}
