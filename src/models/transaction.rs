use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Escrow status is a stored label; nothing drives transitions between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "escrow_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EscrowStatus {
    #[default]
    Pending,
    Funded,
    Released,
    Cancelled,
    Disputed,
    Completed,
}

impl EscrowStatus {
    pub fn label(self) -> &'static str {
        match self {
            EscrowStatus::Pending => "Pending",
            EscrowStatus::Funded => "Funded",
            EscrowStatus::Released => "Released",
            EscrowStatus::Cancelled => "Cancelled",
            EscrowStatus::Disputed => "Disputed",
            EscrowStatus::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub project_id: Option<Uuid>,
    pub client_id: Option<Uuid>,
    pub amount: f64,
    pub currency: String,
    pub status: EscrowStatus,
    pub description: String,
    pub milestone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewTransaction {
    pub project_id: Option<Uuid>,
    pub client_id: Option<Uuid>,
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub status: EscrowStatus,
    #[serde(default)]
    pub description: String,
    pub milestone: Option<String>,
}

pub(crate) fn default_currency() -> String {
    "USD".to_string()
}
