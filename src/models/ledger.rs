use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::transaction::default_currency;

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "ledger_entry_kind", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum LedgerEntryKind {
    Credit,
    Debit,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: Uuid,
    pub transaction_id: Option<Uuid>,
    pub client_id: Option<Uuid>,
    pub kind: LedgerEntryKind,
    pub amount: f64,
    pub currency: String,
    pub description: String,
    pub recorded_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewLedgerEntry {
    pub transaction_id: Option<Uuid>,
    pub client_id: Option<Uuid>,
    pub kind: LedgerEntryKind,
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub description: String,
    /// Defaults to the time of insertion.
    pub recorded_at: Option<DateTime<Utc>>,
}
