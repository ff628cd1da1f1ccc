//! Client dashboard: everything the portal shows a client on one page.

use serde::Serialize;
use uuid::Uuid;

use crate::catalog::{self, Notification};
use crate::db::{self, DataSourceError, Database};
use crate::envelope::Envelope;
use crate::error::AppError;
use crate::fallback;
use crate::models::{Client, EscrowStatus, Project, Team, Transaction};
use crate::scoring::{ProfileSnapshot, completion_score};
use crate::state::AppState;

/// A client with the projects and escrow transactions it references.
#[derive(Debug, Clone)]
pub struct ClientRecords {
    pub client: Client,
    pub projects: Vec<Project>,
    pub transactions: Vec<Transaction>,
}

/// Escrow totals across a client's transactions. Cancelled transactions are
/// not counted anywhere.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EscrowSummary {
    pub pending: f64,
    /// Funded or disputed: money the escrow still holds.
    pub held: f64,
    pub released: f64,
}

#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub client: Client,
    pub completion: u8,
    pub projects: Vec<Project>,
    pub transactions: Vec<Transaction>,
    pub escrow: EscrowSummary,
    pub teams: Vec<Team>,
    pub notifications: Vec<Notification>,
}

pub async fn load_client_records(
    database: &Database,
    client_id: Uuid,
) -> Result<Option<ClientRecords>, DataSourceError> {
    let pool = database.connect().await?;
    let Some(client) = db::clients::find_by_id(pool, client_id).await? else {
        return Ok(None);
    };
    let projects = db::projects::find_many(pool, &client.projects).await?;
    let transactions = db::transactions::find_many(pool, &client.escrow_transactions).await?;
    Ok(Some(ClientRecords {
        client,
        projects,
        transactions,
    }))
}

pub fn fallback_client_records(client_id: Uuid) -> Option<ClientRecords> {
    let client = fallback::client(client_id)?;
    let projects = fallback::projects()
        .into_iter()
        .filter(|p| client.projects.contains(&p.id))
        .collect();
    let transactions = fallback::transactions()
        .into_iter()
        .filter(|t| client.escrow_transactions.contains(&t.id))
        .collect();
    Some(ClientRecords {
        client,
        projects,
        transactions,
    })
}

fn fallback_teams(project_ids: &[Uuid]) -> Vec<Team> {
    fallback::teams()
        .into_iter()
        .filter(|t| t.projects.iter().any(|id| project_ids.contains(id)))
        .collect()
}

async fn load_live(
    database: &Database,
    client_id: Uuid,
) -> Result<Option<(ClientRecords, Vec<Team>)>, DataSourceError> {
    let Some(records) = load_client_records(database, client_id).await? else {
        return Ok(None);
    };
    let pool = database.connect().await?;
    let teams = db::teams::list_by_projects(pool, &records.client.projects).await?;
    Ok(Some((records, teams)))
}

/// Assemble the dashboard for a client, degrading to fallback data when the
/// database is unavailable.
pub async fn load(state: &AppState, client_id: Uuid) -> Result<Envelope<Dashboard>, AppError> {
    let envelope = match load_live(&state.db, client_id).await {
        Ok(found) => Envelope::live(found),
        Err(err) => state.degrade("dashboard", err, || {
            fallback_client_records(client_id).map(|records| {
                let teams = fallback_teams(&records.client.projects);
                (records, teams)
            })
        })?,
    };

    Ok(envelope
        .require("Client not found")?
        .map(|(records, teams)| assemble(records, teams)))
}

fn assemble(records: ClientRecords, teams: Vec<Team>) -> Dashboard {
    let snapshot =
        ProfileSnapshot::of_client(&records.client, &records.projects, &records.transactions);
    let completion = completion_score(Some(&snapshot));
    let escrow = summarize_escrow(&records.transactions);

    Dashboard {
        client: records.client,
        completion,
        projects: records.projects,
        transactions: records.transactions,
        escrow,
        teams,
        notifications: catalog::notifications(),
    }
}

pub fn summarize_escrow(transactions: &[Transaction]) -> EscrowSummary {
    transactions
        .iter()
        .fold(EscrowSummary::default(), |mut summary, tx| {
            match tx.status {
                EscrowStatus::Pending => summary.pending += tx.amount,
                EscrowStatus::Funded | EscrowStatus::Disputed => summary.held += tx.amount,
                EscrowStatus::Released | EscrowStatus::Completed => summary.released += tx.amount,
                EscrowStatus::Cancelled => {}
            }
            summary
        })
}
