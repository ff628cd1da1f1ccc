pub mod catalog;
pub mod clients;
pub mod dashboard;
pub mod ledger;
pub mod profiles;
pub mod projects;
pub mod teams;
pub mod transactions;

use axum::Router;
use axum::extract::FromRequest;
use axum::routing::get;
use uuid::Uuid;

use crate::db::DataSourceError;
use crate::error::AppError;
use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Clients
        .route("/api/clients", get(clients::list).post(clients::create))
        .route(
            "/api/clients/{id}",
            get(clients::get).put(clients::update).delete(clients::delete),
        )
        .route("/api/clients/{id}/completion", get(clients::completion))
        // Projects
        .route("/api/projects", get(projects::list).post(projects::create))
        .route(
            "/api/projects/{id}",
            get(projects::get).put(projects::update).delete(projects::delete),
        )
        // Teams
        .route("/api/teams", get(teams::list).post(teams::create))
        .route(
            "/api/teams/{id}",
            get(teams::get).put(teams::update).delete(teams::delete),
        )
        // Escrow transactions
        .route(
            "/api/transactions",
            get(transactions::list).post(transactions::create),
        )
        .route(
            "/api/transactions/{id}",
            get(transactions::get)
                .put(transactions::update)
                .delete(transactions::delete),
        )
        // Consultant profiles
        .route("/api/profiles", get(profiles::list).post(profiles::create))
        .route(
            "/api/profiles/{id}",
            get(profiles::get).put(profiles::update).delete(profiles::delete),
        )
        // Ledger
        .route("/api/ledger", get(ledger::list).post(ledger::create))
        .route(
            "/api/ledger/{id}",
            get(ledger::get).put(ledger::update).delete(ledger::delete),
        )
        // Dashboard
        .route("/api/dashboard/{client_id}", get(dashboard::show))
        // Static content
        .route("/api/services", get(catalog::services))
        .route("/api/portfolio", get(catalog::portfolio))
        .route("/api/talent", get(catalog::talent))
        .route("/api/notifications", get(catalog::notifications))
}

/// JSON body extractor whose rejections use the API error envelope.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Parse an id path segment; anything that is not a UUID is a bad request
/// rather than a lookup miss.
pub fn parse_id(raw: &str, resource: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest(format!("Invalid {resource} id")))
}

/// Map a failed insert or update, turning a duplicate key into a conflict.
pub fn write_error(err: DataSourceError, conflict: &str) -> AppError {
    if err.is_unique_violation() {
        AppError::Conflict(conflict.to_string())
    } else {
        AppError::DataSource(err)
    }
}
