use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{NewProject, Project};

pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>("SELECT * FROM projects ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Projects whose id is in `ids`. Ids with no matching row are skipped.
pub async fn find_many(pool: &PgPool, ids: &[Uuid]) -> Result<Vec<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        "SELECT * FROM projects WHERE id = ANY($1) ORDER BY created_at DESC",
    )
    .bind(ids)
    .fetch_all(pool)
    .await
}

pub async fn create(pool: &PgPool, project: &NewProject) -> Result<Project, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        "INSERT INTO projects (title, description, client_id, status, budget, deadline, skills, progress)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
    )
    .bind(&project.title)
    .bind(&project.description)
    .bind(project.client_id)
    .bind(project.status)
    .bind(project.budget)
    .bind(project.deadline)
    .bind(&project.skills)
    .bind(project.progress)
    .fetch_one(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    id: Uuid,
    project: &NewProject,
) -> Result<Option<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        "UPDATE projects SET title = $2, description = $3, client_id = $4, status = $5,
                budget = $6, deadline = $7, skills = $8, progress = $9, updated_at = now()
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(&project.title)
    .bind(&project.description)
    .bind(project.client_id)
    .bind(project.status)
    .bind(project.budget)
    .bind(project.deadline)
    .bind(&project.skills)
    .bind(project.progress)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM projects WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
