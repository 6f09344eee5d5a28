//! HTTP API over the `cas-compute` algebra routines.
//!
//! Every endpoint parses the expression(s) in a JSON request body, hands them to one routine
//! (solve, simplify, expand, factor, differentiate, integrate, or numeric evaluation), and renders
//! the result as text. `/olympiad/advanced` chains several routines together; see [`pipeline`].

pub mod config;
pub mod error;
pub mod extract;
pub mod input;
pub mod pipeline;
pub mod routes;

use std::time::Duration;

use axum::http::StatusCode;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use config::ServerConfig;

/// Builds the application router with its middleware stack.
pub fn build_router(config: &ServerConfig) -> Router {
    routes::router()
        // -- Middleware stack (applied bottom-up) --
        // Panic recovery: catch panics and return 500.
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
}
