use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::db::{self, DataSourceError};
use crate::envelope::{DataSource, Envelope};
use crate::error::AppError;
use crate::fallback;
use crate::models::{NewTransaction, Transaction};
use crate::routes::{ApiJson, parse_id};
use crate::state::SharedState;
use crate::validation;

pub async fn list(
    State(state): State<SharedState>,
) -> Result<Json<Envelope<Vec<Transaction>>>, AppError> {
    let result = async {
        let pool = state.db.connect().await?;
        Ok::<_, DataSourceError>(db::transactions::list(pool).await?)
    }
    .await;

    let envelope = match result {
        Ok(transactions) => Envelope::live(transactions),
        Err(err) => state.degrade("transactions", err, fallback::transactions)?,
    };
    Ok(Json(envelope))
}

pub async fn get(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Transaction>>, AppError> {
    let id = parse_id(&id, "transaction")?;

    let result = async {
        let pool = state.db.connect().await?;
        Ok::<_, DataSourceError>(db::transactions::find_by_id(pool, id).await?)
    }
    .await;

    let envelope = match result {
        Ok(tx) => Envelope::live(tx),
        Err(err) => state.degrade("transaction", err, || fallback::transaction(id))?,
    };
    Ok(Json(envelope.require("Transaction not found")?))
}

pub async fn create(
    State(state): State<SharedState>,
    ApiJson(req): ApiJson<NewTransaction>,
) -> Result<(StatusCode, Json<Envelope<Transaction>>), AppError> {
    validate(&req)?;

    let result = async {
        let pool = state.db.connect().await?;
        Ok::<_, DataSourceError>(db::transactions::create(pool, &req).await?)
    }
    .await;

    let envelope = match result {
        Ok(tx) => {
            tracing::info!(transaction_id = %tx.id, status = ?tx.status, "Escrow transaction created");
            Envelope::live(tx)
        }
        Err(err) if state.can_synthesize(&err) => {
            tracing::warn!(error = %err, "Database unavailable, synthesizing transaction");
            Envelope::mock(fallback::synthesize_transaction(req))
        }
        Err(err) => return Err(err.into()),
    };
    Ok((StatusCode::CREATED, Json(envelope)))
}

pub async fn update(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<NewTransaction>,
) -> Result<Json<Envelope<Transaction>>, AppError> {
    let id = parse_id(&id, "transaction")?;
    validate(&req)?;

    let tx = async {
        let pool = state.db.connect().await?;
        Ok::<_, DataSourceError>(db::transactions::update(pool, id, &req).await?)
    }
    .await?
    .ok_or_else(|| AppError::NotFound("Transaction not found".to_string()))?;

    tracing::info!(transaction_id = %tx.id, status = ?tx.status, "Escrow transaction updated");
    Ok(Json(Envelope::live(tx)))
}

pub async fn delete(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<()>>, AppError> {
    let id = parse_id(&id, "transaction")?;

    let deleted = async {
        let pool = state.db.connect().await?;
        Ok::<_, DataSourceError>(db::transactions::delete(pool, id).await?)
    }
    .await?;

    if !deleted {
        return Err(AppError::NotFound("Transaction not found".to_string()));
    }
    tracing::info!(transaction_id = %id, "Escrow transaction deleted");
    Ok(Json(Envelope::message("Transaction deleted", DataSource::Db)))
}

fn validate(req: &NewTransaction) -> Result<(), AppError> {
    validation::positive_amount("amount", req.amount)?;
    validation::currency(&req.currency)?;
    Ok(())
}
