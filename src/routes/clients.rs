use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Serialize;
use uuid::Uuid;

use crate::dashboard;
use crate::db::{self, DataSourceError};
use crate::envelope::{DataSource, Envelope};
use crate::error::AppError;
use crate::fallback;
use crate::models::{Client, NewClient};
use crate::routes::{ApiJson, parse_id, write_error};
use crate::scoring::{ProfileSnapshot, completion_score};
use crate::state::SharedState;
use crate::validation;

const DUPLICATE_EMAIL: &str = "A client with this email already exists";

#[derive(Debug, Serialize)]
pub struct Completion {
    pub client_id: Uuid,
    pub score: u8,
}

pub async fn list(State(state): State<SharedState>) -> Result<Json<Envelope<Vec<Client>>>, AppError> {
    let result = async {
        let pool = state.db.connect().await?;
        Ok::<_, DataSourceError>(db::clients::list(pool).await?)
    }
    .await;

    let envelope = match result {
        Ok(clients) => Envelope::live(clients),
        Err(err) => state.degrade("clients", err, fallback::clients)?,
    };
    Ok(Json(envelope))
}

pub async fn get(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Client>>, AppError> {
    let id = parse_id(&id, "client")?;

    let result = async {
        let pool = state.db.connect().await?;
        Ok::<_, DataSourceError>(db::clients::find_by_id(pool, id).await?)
    }
    .await;

    let envelope = match result {
        Ok(client) => Envelope::live(client),
        Err(err) => state.degrade("client", err, || fallback::client(id))?,
    };
    Ok(Json(envelope.require("Client not found")?))
}

pub async fn create(
    State(state): State<SharedState>,
    ApiJson(req): ApiJson<NewClient>,
) -> Result<(StatusCode, Json<Envelope<Client>>), AppError> {
    validate(&req)?;

    let result = async {
        let pool = state.db.connect().await?;
        Ok::<_, DataSourceError>(db::clients::create(pool, &req).await?)
    }
    .await;

    let envelope = match result {
        Ok(client) => {
            tracing::info!(client_id = %client.id, "Client created");
            Envelope::live(client)
        }
        Err(err) if state.can_synthesize(&err) => {
            tracing::warn!(error = %err, "Database unavailable, synthesizing client");
            Envelope::mock(fallback::synthesize_client(req))
        }
        Err(err) => return Err(write_error(err, DUPLICATE_EMAIL)),
    };
    Ok((StatusCode::CREATED, Json(envelope)))
}

pub async fn update(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<NewClient>,
) -> Result<Json<Envelope<Client>>, AppError> {
    let id = parse_id(&id, "client")?;
    validate(&req)?;

    let client = async {
        let pool = state.db.connect().await?;
        Ok::<_, DataSourceError>(db::clients::update(pool, id, &req).await?)
    }
    .await
    .map_err(|err| write_error(err, DUPLICATE_EMAIL))?
    .ok_or_else(|| AppError::NotFound("Client not found".to_string()))?;

    tracing::info!(client_id = %client.id, "Client updated");
    Ok(Json(Envelope::live(client)))
}

pub async fn delete(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<()>>, AppError> {
    let id = parse_id(&id, "client")?;

    let deleted = async {
        let pool = state.db.connect().await?;
        Ok::<_, DataSourceError>(db::clients::delete(pool, id).await?)
    }
    .await?;

    if !deleted {
        return Err(AppError::NotFound("Client not found".to_string()));
    }
    tracing::info!(client_id = %id, "Client deleted");
    Ok(Json(Envelope::message("Client deleted", DataSource::Db)))
}

pub async fn completion(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Completion>>, AppError> {
    let id = parse_id(&id, "client")?;

    let envelope = match dashboard::load_client_records(&state.db, id).await {
        Ok(records) => Envelope::live(records),
        Err(err) => state.degrade("client completion", err, || {
            dashboard::fallback_client_records(id)
        })?,
    };

    let envelope = envelope.require("Client not found")?.map(|records| {
        let snapshot =
            ProfileSnapshot::of_client(&records.client, &records.projects, &records.transactions);
        Completion {
            client_id: records.client.id,
            score: completion_score(Some(&snapshot)),
        }
    });
    Ok(Json(envelope))
}

fn validate(req: &NewClient) -> Result<(), AppError> {
    validation::required("name", &req.name)?;
    validation::email(&req.email)?;
    Ok(())
}
