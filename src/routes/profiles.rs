use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::db::{self, DataSourceError};
use crate::envelope::{DataSource, Envelope};
use crate::error::AppError;
use crate::fallback;
use crate::models::{NewProfile, Profile};
use crate::routes::{ApiJson, parse_id, write_error};
use crate::state::SharedState;
use crate::validation;

const DUPLICATE_EMAIL: &str = "A profile with this email already exists";

pub async fn list(State(state): State<SharedState>) -> Result<Json<Envelope<Vec<Profile>>>, AppError> {
    let result = async {
        let pool = state.db.connect().await?;
        Ok::<_, DataSourceError>(db::profiles::list(pool).await?)
    }
    .await;

    let envelope = match result {
        Ok(profiles) => Envelope::live(profiles),
        Err(err) => state.degrade("profiles", err, fallback::profiles)?,
    };
    Ok(Json(envelope))
}

pub async fn get(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Profile>>, AppError> {
    let id = parse_id(&id, "profile")?;

    let result = async {
        let pool = state.db.connect().await?;
        Ok::<_, DataSourceError>(db::profiles::find_by_id(pool, id).await?)
    }
    .await;

    let envelope = match result {
        Ok(profile) => Envelope::live(profile),
        Err(err) => state.degrade("profile", err, || fallback::profile(id))?,
    };
    Ok(Json(envelope.require("Profile not found")?))
}

pub async fn create(
    State(state): State<SharedState>,
    ApiJson(req): ApiJson<NewProfile>,
) -> Result<(StatusCode, Json<Envelope<Profile>>), AppError> {
    validate(&req)?;

    let result = async {
        let pool = state.db.connect().await?;
        Ok::<_, DataSourceError>(db::profiles::create(pool, &req).await?)
    }
    .await;

    let envelope = match result {
        Ok(profile) => {
            tracing::info!(profile_id = %profile.id, "Profile created");
            Envelope::live(profile)
        }
        Err(err) if state.can_synthesize(&err) => {
            tracing::warn!(error = %err, "Database unavailable, synthesizing profile");
            Envelope::mock(fallback::synthesize_profile(req))
        }
        Err(err) => return Err(write_error(err, DUPLICATE_EMAIL)),
    };
    Ok((StatusCode::CREATED, Json(envelope)))
}

pub async fn update(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<NewProfile>,
) -> Result<Json<Envelope<Profile>>, AppError> {
    let id = parse_id(&id, "profile")?;
    validate(&req)?;

    let profile = async {
        let pool = state.db.connect().await?;
        Ok::<_, DataSourceError>(db::profiles::update(pool, id, &req).await?)
    }
    .await
    .map_err(|err| write_error(err, DUPLICATE_EMAIL))?
    .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;

    tracing::info!(profile_id = %profile.id, "Profile updated");
    Ok(Json(Envelope::live(profile)))
}

pub async fn delete(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<()>>, AppError> {
    let id = parse_id(&id, "profile")?;

    let deleted = async {
        let pool = state.db.connect().await?;
        Ok::<_, DataSourceError>(db::profiles::delete(pool, id).await?)
    }
    .await?;

    if !deleted {
        return Err(AppError::NotFound("Profile not found".to_string()));
    }
    tracing::info!(profile_id = %id, "Profile deleted");
    Ok(Json(Envelope::message("Profile deleted", DataSource::Db)))
}

fn validate(req: &NewProfile) -> Result<(), AppError> {
    validation::required("name", &req.name)?;
    validation::email(&req.email)?;
    validation::non_negative("hourly_rate", req.hourly_rate)?;
    Ok(())
}
