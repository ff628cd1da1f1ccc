use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub company_name: Option<String>,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub projects: Vec<Uuid>,
    pub consultants: Vec<Uuid>,
    pub escrow_transactions: Vec<Uuid>,
    pub invitations: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating a client or replacing one wholesale.
#[derive(Debug, Clone, Deserialize)]
pub struct NewClient {
    pub name: String,
    pub email: String,
    pub company_name: Option<String>,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub projects: Vec<Uuid>,
    #[serde(default)]
    pub consultants: Vec<Uuid>,
    #[serde(default)]
    pub escrow_transactions: Vec<Uuid>,
    #[serde(default)]
    pub invitations: Vec<Uuid>,
}
