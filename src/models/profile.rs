use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "availability_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    #[default]
    Available,
    Busy,
    Unavailable,
}

impl Availability {
    pub fn label(self) -> &'static str {
        match self {
            Availability::Available => "Available",
            Availability::Busy => "Busy",
            Availability::Unavailable => "Unavailable",
        }
    }
}

/// A consultant's public profile.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub title: String,
    pub bio: String,
    pub skills: Vec<String>,
    pub hourly_rate: Option<f64>,
    pub location: Option<String>,
    pub availability: Availability,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewProfile {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub hourly_rate: Option<f64>,
    pub location: Option<String>,
    #[serde(default)]
    pub availability: Availability,
    pub avatar_url: Option<String>,
}
