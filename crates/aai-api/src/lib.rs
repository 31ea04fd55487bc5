//! aai-api
//!
//! JSON HTTP adapter over `aai-scoring` for the calculator wizard. Holds no
//! scoring logic and no state; every route is a direct call into the engine.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use config::ApiConfig;

pub fn app(config: &ApiConfig) -> Router {
    let origin = match &config.allowed_origin {
        Some(origin) => AllowOrigin::exact(origin.clone()),
        None => AllowOrigin::from(Any),
    };
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/instruments", get(routes::instruments::list_instruments))
        .route(
            "/instruments/{id}",
            get(routes::instruments::get_instrument_detail),
        )
        .route(
            "/instruments/{id}/empty-input",
            get(routes::instruments::empty_input),
        )
        .route(
            "/instruments/{id}/validate",
            post(routes::scores::validate_input),
        )
        .route(
            "/instruments/{id}/compute",
            post(routes::scores::compute_score),
        )
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
}
