pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod envelope;
pub mod error;
pub mod fallback;
pub mod models;
pub mod routes;
pub mod scoring;
pub mod state;
pub mod validation;
pub mod views;

use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderName, HeaderValue, Method};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::Database;
use crate::state::{AppState, SharedState};

pub fn build_app(db: Database, config: Config) -> (Router, SharedState) {
    let cors = cors_layer(&config.cors_origins);
    let max_body_size = config.max_body_size;

    let state: SharedState = Arc::new(AppState { db, config });

    let app = Router::new()
        .merge(routes::api_routes())
        .merge(views::view_routes())
        .nest_service("/static", ServeDir::new("static"))
        .route("/health", axum::routing::get(health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(max_body_size))
                // Security headers
                .layer(SetResponseHeaderLayer::overriding(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    HeaderName::from_static("x-frame-options"),
                    HeaderValue::from_static("DENY"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    HeaderName::from_static("referrer-policy"),
                    HeaderValue::from_static("strict-origin-when-cross-origin"),
                )),
        );

    let app = match cors {
        Some(cors) => app.layer(cors),
        None => app,
    };

    (app.with_state(state.clone()), state)
}

fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring invalid CORS origin {origin:?}: {e}");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([axum::http::header::CONTENT_TYPE]),
    )
}

async fn health() -> &'static str {
    "ok"
}
