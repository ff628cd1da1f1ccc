use askama::Template;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

use crate::catalog::NotificationKind;
use crate::dashboard::{self, Dashboard};
use crate::envelope::DataSource;
use crate::error::AppError;
use crate::routes::parse_id;
use crate::state::SharedState;
use crate::views::money;
use crate::views::pages::render;

#[derive(Template)]
#[template(path = "dashboard/index.html")]
struct DashboardTemplate {
    client_name: String,
    company_name: String,
    completion: u8,
    sample_data: bool,
    pending: String,
    held: String,
    released: String,
    projects: Vec<ProjectRow>,
    transactions: Vec<TransactionRow>,
    teams: Vec<TeamRow>,
    notifications: Vec<NotificationRow>,
}

struct ProjectRow {
    title: String,
    status: &'static str,
    progress: i32,
    budget: String,
}

struct TransactionRow {
    milestone: String,
    amount: String,
    status: &'static str,
}

struct TeamRow {
    name: String,
    members: String,
}

struct NotificationRow {
    title: &'static str,
    body: &'static str,
    kind: &'static str,
    read: bool,
}

pub async fn show(
    State(state): State<SharedState>,
    Path(client_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let client_id = parse_id(&client_id, "client")?;
    let envelope = dashboard::load(&state, client_id).await?;
    let sample_data = envelope.source == DataSource::Mock;
    let Some(dashboard) = envelope.data else {
        return Err(AppError::NotFound("Client not found".to_string()));
    };
    render(&template_for(dashboard, sample_data))
}

fn template_for(dashboard: Dashboard, sample_data: bool) -> DashboardTemplate {
    // Escrow totals are shown in the currency of the first transaction.
    let currency = dashboard
        .transactions
        .first()
        .map(|tx| tx.currency.clone())
        .unwrap_or_else(|| "USD".to_string());

    DashboardTemplate {
        company_name: dashboard.client.company_name.clone().unwrap_or_default(),
        client_name: dashboard.client.name,
        completion: dashboard.completion,
        sample_data,
        pending: money(dashboard.escrow.pending, &currency),
        held: money(dashboard.escrow.held, &currency),
        released: money(dashboard.escrow.released, &currency),
        projects: dashboard
            .projects
            .into_iter()
            .map(|p| ProjectRow {
                title: p.title,
                status: p.status.label(),
                progress: p.progress,
                budget: p
                    .budget
                    .map(|b| money(b, &currency))
                    .unwrap_or_else(|| "-".to_string()),
            })
            .collect(),
        transactions: dashboard
            .transactions
            .into_iter()
            .map(|tx| TransactionRow {
                milestone: tx.milestone.unwrap_or(tx.description),
                amount: money(tx.amount, &tx.currency),
                status: tx.status.label(),
            })
            .collect(),
        teams: dashboard
            .teams
            .into_iter()
            .map(|t| TeamRow {
                members: t
                    .members
                    .iter()
                    .map(|m| format!("{} ({})", m.name, m.role))
                    .collect::<Vec<_>>()
                    .join(", "),
                name: t.name,
            })
            .collect(),
        notifications: dashboard
            .notifications
            .into_iter()
            .map(|n| NotificationRow {
                title: n.title,
                body: n.body,
                kind: match n.kind {
                    NotificationKind::Info => "info",
                    NotificationKind::Success => "success",
                    NotificationKind::Warning => "warning",
                },
                read: n.read,
            })
            .collect(),
    }
}
