use axum::Json;
use axum::extract::{Path, State};

use crate::dashboard::{self, Dashboard};
use crate::envelope::Envelope;
use crate::error::AppError;
use crate::routes::parse_id;
use crate::state::SharedState;

pub async fn show(
    State(state): State<SharedState>,
    Path(client_id): Path<String>,
) -> Result<Json<Envelope<Dashboard>>, AppError> {
    let client_id = parse_id(&client_id, "client")?;
    let envelope = dashboard::load(&state, client_id).await?;
    Ok(Json(envelope))
}
