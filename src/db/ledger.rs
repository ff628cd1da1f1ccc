use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{LedgerEntry, NewLedgerEntry};

pub async fn list(pool: &PgPool) -> Result<Vec<LedgerEntry>, sqlx::Error> {
    sqlx::query_as::<_, LedgerEntry>("SELECT * FROM ledger_entries ORDER BY recorded_at DESC")
        .fetch_all(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<LedgerEntry>, sqlx::Error> {
    sqlx::query_as::<_, LedgerEntry>("SELECT * FROM ledger_entries WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create(pool: &PgPool, entry: &NewLedgerEntry) -> Result<LedgerEntry, sqlx::Error> {
    sqlx::query_as::<_, LedgerEntry>(
        "INSERT INTO ledger_entries (transaction_id, client_id, kind, amount, currency, description, recorded_at)
         VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, now())) RETURNING *",
    )
    .bind(entry.transaction_id)
    .bind(entry.client_id)
    .bind(entry.kind)
    .bind(entry.amount)
    .bind(&entry.currency)
    .bind(&entry.description)
    .bind(entry.recorded_at)
    .fetch_one(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    id: Uuid,
    entry: &NewLedgerEntry,
) -> Result<Option<LedgerEntry>, sqlx::Error> {
    sqlx::query_as::<_, LedgerEntry>(
        "UPDATE ledger_entries SET transaction_id = $2, client_id = $3, kind = $4, amount = $5,
                currency = $6, description = $7, recorded_at = COALESCE($8, recorded_at),
                updated_at = now()
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(entry.transaction_id)
    .bind(entry.client_id)
    .bind(entry.kind)
    .bind(entry.amount)
    .bind(&entry.currency)
    .bind(&entry.description)
    .bind(entry.recorded_at)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM ledger_entries WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
