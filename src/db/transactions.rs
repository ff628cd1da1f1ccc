use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{NewTransaction, Transaction};

pub async fn list(pool: &PgPool) -> Result<Vec<Transaction>, sqlx::Error> {
    sqlx::query_as::<_, Transaction>(
        "SELECT * FROM escrow_transactions ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Transaction>, sqlx::Error> {
    sqlx::query_as::<_, Transaction>("SELECT * FROM escrow_transactions WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn find_many(pool: &PgPool, ids: &[Uuid]) -> Result<Vec<Transaction>, sqlx::Error> {
    sqlx::query_as::<_, Transaction>(
        "SELECT * FROM escrow_transactions WHERE id = ANY($1) ORDER BY created_at DESC",
    )
    .bind(ids)
    .fetch_all(pool)
    .await
}

pub async fn create(pool: &PgPool, tx: &NewTransaction) -> Result<Transaction, sqlx::Error> {
    sqlx::query_as::<_, Transaction>(
        "INSERT INTO escrow_transactions (project_id, client_id, amount, currency, status, description, milestone)
         VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
    )
    .bind(tx.project_id)
    .bind(tx.client_id)
    .bind(tx.amount)
    .bind(&tx.currency)
    .bind(tx.status)
    .bind(&tx.description)
    .bind(&tx.milestone)
    .fetch_one(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    id: Uuid,
    tx: &NewTransaction,
) -> Result<Option<Transaction>, sqlx::Error> {
    sqlx::query_as::<_, Transaction>(
        "UPDATE escrow_transactions SET project_id = $2, client_id = $3, amount = $4,
                currency = $5, status = $6, description = $7, milestone = $8, updated_at = now()
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(tx.project_id)
    .bind(tx.client_id)
    .bind(tx.amount)
    .bind(&tx.currency)
    .bind(tx.status)
    .bind(&tx.description)
    .bind(&tx.milestone)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM escrow_transactions WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
