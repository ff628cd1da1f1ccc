pub mod dashboard;
pub mod pages;

use axum::Router;
use axum::routing::get;

use crate::state::SharedState;

pub fn view_routes() -> Router<SharedState> {
    Router::new()
        // Public pages
        .route("/", get(pages::home))
        .route("/services", get(pages::services))
        .route("/portfolio", get(pages::portfolio))
        .route("/talent", get(pages::talent))
        // Client dashboard
        .route("/dashboard/{client_id}", get(dashboard::show))
}

pub(crate) fn money(amount: f64, currency: &str) -> String {
    format!("{currency} {amount:.2}")
}
