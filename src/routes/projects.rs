use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::db::{self, DataSourceError};
use crate::envelope::{DataSource, Envelope};
use crate::error::AppError;
use crate::fallback;
use crate::models::{NewProject, Project};
use crate::routes::{ApiJson, parse_id};
use crate::state::SharedState;
use crate::validation;

pub async fn list(State(state): State<SharedState>) -> Result<Json<Envelope<Vec<Project>>>, AppError> {
    let result = async {
        let pool = state.db.connect().await?;
        Ok::<_, DataSourceError>(db::projects::list(pool).await?)
    }
    .await;

    let envelope = match result {
        Ok(projects) => Envelope::live(projects),
        Err(err) => state.degrade("projects", err, fallback::projects)?,
    };
    Ok(Json(envelope))
}

pub async fn get(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Project>>, AppError> {
    let id = parse_id(&id, "project")?;

    let result = async {
        let pool = state.db.connect().await?;
        Ok::<_, DataSourceError>(db::projects::find_by_id(pool, id).await?)
    }
    .await;

    let envelope = match result {
        Ok(project) => Envelope::live(project),
        Err(err) => state.degrade("project", err, || fallback::project(id))?,
    };
    Ok(Json(envelope.require("Project not found")?))
}

pub async fn create(
    State(state): State<SharedState>,
    ApiJson(req): ApiJson<NewProject>,
) -> Result<(StatusCode, Json<Envelope<Project>>), AppError> {
    validate(&req)?;

    let result = async {
        let pool = state.db.connect().await?;
        Ok::<_, DataSourceError>(db::projects::create(pool, &req).await?)
    }
    .await;

    let envelope = match result {
        Ok(project) => {
            tracing::info!(project_id = %project.id, "Project created");
            Envelope::live(project)
        }
        Err(err) if state.can_synthesize(&err) => {
            tracing::warn!(error = %err, "Database unavailable, synthesizing project");
            Envelope::mock(fallback::synthesize_project(req))
        }
        Err(err) => return Err(err.into()),
    };
    Ok((StatusCode::CREATED, Json(envelope)))
}

pub async fn update(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<NewProject>,
) -> Result<Json<Envelope<Project>>, AppError> {
    let id = parse_id(&id, "project")?;
    validate(&req)?;

    let project = async {
        let pool = state.db.connect().await?;
        Ok::<_, DataSourceError>(db::projects::update(pool, id, &req).await?)
    }
    .await?
    .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

    tracing::info!(project_id = %project.id, "Project updated");
    Ok(Json(Envelope::live(project)))
}

pub async fn delete(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<()>>, AppError> {
    let id = parse_id(&id, "project")?;

    let deleted = async {
        let pool = state.db.connect().await?;
        Ok::<_, DataSourceError>(db::projects::delete(pool, id).await?)
    }
    .await?;

    if !deleted {
        return Err(AppError::NotFound("Project not found".to_string()));
    }
    tracing::info!(project_id = %id, "Project deleted");
    Ok(Json(Envelope::message("Project deleted", DataSource::Db)))
}

fn validate(req: &NewProject) -> Result<(), AppError> {
    validation::required("title", &req.title)?;
    validation::non_negative("budget", req.budget)?;
    validation::percentage("progress", req.progress)?;
    Ok(())
}
