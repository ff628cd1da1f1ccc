use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Client, NewClient};

pub async fn list(pool: &PgPool) -> Result<Vec<Client>, sqlx::Error> {
    sqlx::query_as::<_, Client>("SELECT * FROM clients ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Client>, sqlx::Error> {
    sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create(pool: &PgPool, client: &NewClient) -> Result<Client, sqlx::Error> {
    sqlx::query_as::<_, Client>(
        "INSERT INTO clients (name, email, company_name, industry, location, phone,
                              projects, consultants, escrow_transactions, invitations)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING *",
    )
    .bind(&client.name)
    .bind(&client.email)
    .bind(&client.company_name)
    .bind(&client.industry)
    .bind(&client.location)
    .bind(&client.phone)
    .bind(&client.projects)
    .bind(&client.consultants)
    .bind(&client.escrow_transactions)
    .bind(&client.invitations)
    .fetch_one(pool)
    .await
}

/// Replace every field of the client. Returns `None` when no such client exists.
pub async fn update(
    pool: &PgPool,
    id: Uuid,
    client: &NewClient,
) -> Result<Option<Client>, sqlx::Error> {
    sqlx::query_as::<_, Client>(
        "UPDATE clients SET name = $2, email = $3, company_name = $4, industry = $5,
                location = $6, phone = $7, projects = $8, consultants = $9,
                escrow_transactions = $10, invitations = $11, updated_at = now()
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(&client.name)
    .bind(&client.email)
    .bind(&client.company_name)
    .bind(&client.industry)
    .bind(&client.location)
    .bind(&client.phone)
    .bind(&client.projects)
    .bind(&client.consultants)
    .bind(&client.escrow_transactions)
    .bind(&client.invitations)
    .fetch_optional(pool)
    .await
}

/// Returns whether a row was deleted.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM clients WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
