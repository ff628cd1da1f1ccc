use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "project_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Planning,
    InProgress,
    Review,
    Completed,
    Cancelled,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Planning",
            ProjectStatus::InProgress => "In progress",
            ProjectStatus::Review => "In review",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub client_id: Option<Uuid>,
    pub status: ProjectStatus,
    pub budget: Option<f64>,
    pub deadline: Option<DateTime<Utc>>,
    pub skills: Vec<String>,
    pub progress: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewProject {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub client_id: Option<Uuid>,
    #[serde(default)]
    pub status: ProjectStatus,
    pub budget: Option<f64>,
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub progress: i32,
}
