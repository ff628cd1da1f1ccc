use axum::Json;

use crate::catalog::{self, CaseStudy, Notification, Service, Talent};
use crate::envelope::Envelope;

pub async fn services() -> Json<Envelope<Vec<Service>>> {
    Json(Envelope::mock(catalog::services()))
}

pub async fn portfolio() -> Json<Envelope<Vec<CaseStudy>>> {
    Json(Envelope::mock(catalog::portfolio()))
}

pub async fn talent() -> Json<Envelope<Vec<Talent>>> {
    Json(Envelope::mock(catalog::talent()))
}

pub async fn notifications() -> Json<Envelope<Vec<Notification>>> {
    Json(Envelope::mock(catalog::notifications()))
}
