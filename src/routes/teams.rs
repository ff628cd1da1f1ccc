use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::db::{self, DataSourceError};
use crate::envelope::{DataSource, Envelope};
use crate::error::AppError;
use crate::fallback;
use crate::models::{NewTeam, Team};
use crate::routes::{ApiJson, parse_id};
use crate::state::SharedState;
use crate::validation;

pub async fn list(State(state): State<SharedState>) -> Result<Json<Envelope<Vec<Team>>>, AppError> {
    let result = async {
        let pool = state.db.connect().await?;
        Ok::<_, DataSourceError>(db::teams::list(pool).await?)
    }
    .await;

    let envelope = match result {
        Ok(teams) => Envelope::live(teams),
        Err(err) => state.degrade("teams", err, fallback::teams)?,
    };
    Ok(Json(envelope))
}

pub async fn get(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Team>>, AppError> {
    let id = parse_id(&id, "team")?;

    let result = async {
        let pool = state.db.connect().await?;
        Ok::<_, DataSourceError>(db::teams::find_by_id(pool, id).await?)
    }
    .await;

    let envelope = match result {
        Ok(team) => Envelope::live(team),
        Err(err) => state.degrade("team", err, || fallback::team(id))?,
    };
    Ok(Json(envelope.require("Team not found")?))
}

pub async fn create(
    State(state): State<SharedState>,
    ApiJson(req): ApiJson<NewTeam>,
) -> Result<(StatusCode, Json<Envelope<Team>>), AppError> {
    validate(&req)?;

    let result = async {
        let pool = state.db.connect().await?;
        Ok::<_, DataSourceError>(db::teams::create(pool, &req).await?)
    }
    .await;

    let envelope = match result {
        Ok(team) => {
            tracing::info!(team_id = %team.id, members = team.members.len(), "Team created");
            Envelope::live(team)
        }
        Err(err) if state.can_synthesize(&err) => {
            tracing::warn!(error = %err, "Database unavailable, synthesizing team");
            Envelope::mock(fallback::synthesize_team(req))
        }
        Err(err) => return Err(err.into()),
    };
    Ok((StatusCode::CREATED, Json(envelope)))
}

pub async fn update(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<NewTeam>,
) -> Result<Json<Envelope<Team>>, AppError> {
    let id = parse_id(&id, "team")?;
    validate(&req)?;

    let team = async {
        let pool = state.db.connect().await?;
        Ok::<_, DataSourceError>(db::teams::update(pool, id, &req).await?)
    }
    .await?
    .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;

    tracing::info!(team_id = %team.id, "Team updated");
    Ok(Json(Envelope::live(team)))
}

pub async fn delete(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<()>>, AppError> {
    let id = parse_id(&id, "team")?;

    let deleted = async {
        let pool = state.db.connect().await?;
        Ok::<_, DataSourceError>(db::teams::delete(pool, id).await?)
    }
    .await?;

    if !deleted {
        return Err(AppError::NotFound("Team not found".to_string()));
    }
    tracing::info!(team_id = %id, "Team deleted");
    Ok(Json(Envelope::message("Team deleted", DataSource::Db)))
}

fn validate(req: &NewTeam) -> Result<(), AppError> {
    validation::required("name", &req.name)?;
    for member in &req.members {
        validation::required("member name", &member.name)?;
        validation::required("member role", &member.role)?;
        if let Some(email) = &member.email {
            validation::email(email)?;
        }
    }
    Ok(())
}
