//! Integration tests for `/combinatorics` and `/number-theory`.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json};
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: combinatorics expressions are evaluated numerically
// ---------------------------------------------------------------------------

#[tokio::test]
async fn binomial_coefficient() {
    let app = common::build_test_app();
    let response = post_json(app, "/combinatorics", json!({ "expression": "binomial(5, 2)" })).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "result": "10.0000000000000" }));
}

#[tokio::test]
async fn factorial_postfix() {
    let app = common::build_test_app();
    let response = post_json(app, "/combinatorics", json!({ "expression": "5!" })).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "result": "120.000000000000" }));
}

// ---------------------------------------------------------------------------
// Test: number theory functions
// ---------------------------------------------------------------------------

#[tokio::test]
async fn totient() {
    let app = common::build_test_app();
    let response = post_json(app, "/number-theory", json!({ "expression": "totient(36)" })).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "result": "12.0000000000000" }));
}

#[tokio::test]
async fn gcd_and_lcm() {
    let app = common::build_test_app();
    let response = post_json(app, "/number-theory", json!({ "expression": "gcd(12, 18) + lcm(4, 6)" })).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "result": "18.0000000000000" }));
}

// ---------------------------------------------------------------------------
// Test: integer functions reject non-integers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn gcd_of_non_integer_is_bad_request() {
    let app = common::build_test_app();
    let response = post_json(app, "/number-theory", json!({ "expression": "gcd(1.5, 3)" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "`gcd` expects integer arguments" }),
    );
}

// ---------------------------------------------------------------------------
// Test: misspelled functions suggest the intended name
// ---------------------------------------------------------------------------

#[tokio::test]
async fn undefined_function_suggests_names() {
    let app = common::build_test_app();
    let response = post_json(app, "/combinatorics", json!({ "expression": "factorail(5)" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "undefined function `factorail`; did you mean `factorial`?" }),
    );
}
