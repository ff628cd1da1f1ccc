use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::models::{NewTeam, Team};

pub async fn list(pool: &PgPool) -> Result<Vec<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>("SELECT * FROM teams ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>("SELECT * FROM teams WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Teams assigned to at least one of the given projects.
pub async fn list_by_projects(pool: &PgPool, project_ids: &[Uuid]) -> Result<Vec<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>(
        "SELECT * FROM teams WHERE projects && $1 ORDER BY name",
    )
    .bind(project_ids)
    .fetch_all(pool)
    .await
}

pub async fn create(pool: &PgPool, team: &NewTeam) -> Result<Team, sqlx::Error> {
    sqlx::query_as::<_, Team>(
        "INSERT INTO teams (name, description, members, projects)
         VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(&team.name)
    .bind(&team.description)
    .bind(Json(&team.members))
    .bind(&team.projects)
    .fetch_one(pool)
    .await
}

pub async fn update(pool: &PgPool, id: Uuid, team: &NewTeam) -> Result<Option<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>(
        "UPDATE teams SET name = $2, description = $3, members = $4, projects = $5,
                updated_at = now()
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(&team.name)
    .bind(&team.description)
    .bind(Json(&team.members))
    .bind(&team.projects)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM teams WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
