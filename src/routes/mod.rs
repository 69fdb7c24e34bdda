//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! JSON API routes live under `/api`. Everything else falls through to the
//! static site directory, which hosts the single-page front end that drives
//! hash navigation.

pub mod estimate;
pub mod site;

use std::any::Any;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::{get, post};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// API routes without the static fallback.
fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/route", get(site::resolve_route))
        .route("/api/site", get(site::site_profile))
        .route("/api/work/{service}", get(site::work_page))
        .route("/api/coverage", get(site::coverage))
        .route("/api/estimate", post(estimate::submit_estimate))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Full application router: API, static site fallback, and middleware.
pub fn app(state: AppState) -> Router {
    let website = ServeDir::new(&state.config.website_dir).append_index_html_on_directories(true);
    let cors_allow_any = state.config.cors_allow_any;

    let mut router = api_routes(state)
        .fallback_service(website)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    if cors_allow_any {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(AnyOrigin)
                .allow_methods(AnyOrigin)
                .allow_headers(AnyOrigin),
        );
    }
    router
}

/// Turn a handler panic into the generic estimate-style error body.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(error = %detail, "handler panicked");
    estimate::reply_error(StatusCode::INTERNAL_SERVER_ERROR, "Server error.")
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
