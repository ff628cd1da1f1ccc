use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::db::{self, DataSourceError};
use crate::envelope::{DataSource, Envelope};
use crate::error::AppError;
use crate::fallback;
use crate::models::{LedgerEntry, NewLedgerEntry};
use crate::routes::{ApiJson, parse_id};
use crate::state::SharedState;
use crate::validation;

pub async fn list(
    State(state): State<SharedState>,
) -> Result<Json<Envelope<Vec<LedgerEntry>>>, AppError> {
    let result = async {
        let pool = state.db.connect().await?;
        Ok::<_, DataSourceError>(db::ledger::list(pool).await?)
    }
    .await;

    let envelope = match result {
        Ok(entries) => Envelope::live(entries),
        Err(err) => state.degrade("ledger", err, fallback::ledger_entries)?,
    };
    Ok(Json(envelope))
}

pub async fn get(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<LedgerEntry>>, AppError> {
    let id = parse_id(&id, "ledger entry")?;

    let result = async {
        let pool = state.db.connect().await?;
        Ok::<_, DataSourceError>(db::ledger::find_by_id(pool, id).await?)
    }
    .await;

    let envelope = match result {
        Ok(entry) => Envelope::live(entry),
        Err(err) => state.degrade("ledger entry", err, || fallback::ledger_entry(id))?,
    };
    Ok(Json(envelope.require("Ledger entry not found")?))
}

pub async fn create(
    State(state): State<SharedState>,
    ApiJson(req): ApiJson<NewLedgerEntry>,
) -> Result<(StatusCode, Json<Envelope<LedgerEntry>>), AppError> {
    validate(&req)?;

    let result = async {
        let pool = state.db.connect().await?;
        Ok::<_, DataSourceError>(db::ledger::create(pool, &req).await?)
    }
    .await;

    let envelope = match result {
        Ok(entry) => {
            tracing::info!(entry_id = %entry.id, kind = ?entry.kind, "Ledger entry recorded");
            Envelope::live(entry)
        }
        Err(err) if state.can_synthesize(&err) => {
            tracing::warn!(error = %err, "Database unavailable, synthesizing ledger entry");
            Envelope::mock(fallback::synthesize_ledger_entry(req))
        }
        Err(err) => return Err(err.into()),
    };
    Ok((StatusCode::CREATED, Json(envelope)))
}

pub async fn update(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<NewLedgerEntry>,
) -> Result<Json<Envelope<LedgerEntry>>, AppError> {
    let id = parse_id(&id, "ledger entry")?;
    validate(&req)?;

    let entry = async {
        let pool = state.db.connect().await?;
        Ok::<_, DataSourceError>(db::ledger::update(pool, id, &req).await?)
    }
    .await?
    .ok_or_else(|| AppError::NotFound("Ledger entry not found".to_string()))?;

    tracing::info!(entry_id = %entry.id, "Ledger entry updated");
    Ok(Json(Envelope::live(entry)))
}

pub async fn delete(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<()>>, AppError> {
    let id = parse_id(&id, "ledger entry")?;

    let deleted = async {
        let pool = state.db.connect().await?;
        Ok::<_, DataSourceError>(db::ledger::delete(pool, id).await?)
    }
    .await?;

    if !deleted {
        return Err(AppError::NotFound("Ledger entry not found".to_string()));
    }
    tracing::info!(entry_id = %id, "Ledger entry deleted");
    Ok(Json(Envelope::message("Ledger entry deleted", DataSource::Db)))
}

fn validate(req: &NewLedgerEntry) -> Result<(), AppError> {
    validation::positive_amount("amount", req.amount)?;
    validation::currency(&req.currency)?;
    Ok(())
}
