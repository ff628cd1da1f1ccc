//! Sample records served in place of database results.
//!
//! The records reference each other the same way live data does, so a
//! dashboard assembled from them is coherent.

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use uuid::Uuid;

use crate::models::{
    Availability, Client, EscrowStatus, LedgerEntry, LedgerEntryKind, NewClient, NewLedgerEntry,
    NewProfile, NewProject, NewTeam, NewTransaction, Profile, Project, ProjectStatus, Team,
    TeamMember, Transaction,
};

pub mod ids {
    use uuid::Uuid;

    pub const NORTHWIND: Uuid = Uuid::from_u128(0x6f1c_2a10_0000_4c00_8000_0000_0000_0001);
    pub const HELIOS: Uuid = Uuid::from_u128(0x6f1c_2a10_0000_4c00_8000_0000_0000_0002);

    pub const STOREFRONT: Uuid = Uuid::from_u128(0x6f1c_2a10_0000_4a00_8000_0000_0000_0001);
    pub const FORECASTING: Uuid = Uuid::from_u128(0x6f1c_2a10_0000_4a00_8000_0000_0000_0002);
    pub const PATIENT_PORTAL: Uuid = Uuid::from_u128(0x6f1c_2a10_0000_4a00_8000_0000_0000_0003);

    pub const PLATFORM_SQUAD: Uuid = Uuid::from_u128(0x6f1c_2a10_0000_4b00_8000_0000_0000_0001);
    pub const DISCOVERY_CREW: Uuid = Uuid::from_u128(0x6f1c_2a10_0000_4b00_8000_0000_0000_0002);

    pub const MVP_ESCROW: Uuid = Uuid::from_u128(0x6f1c_2a10_0000_4e00_8000_0000_0000_0001);
    pub const PROTOTYPE_ESCROW: Uuid = Uuid::from_u128(0x6f1c_2a10_0000_4e00_8000_0000_0000_0002);
    pub const RESEARCH_ESCROW: Uuid = Uuid::from_u128(0x6f1c_2a10_0000_4e00_8000_0000_0000_0003);

    pub const PRIYA: Uuid = Uuid::from_u128(0x6f1c_2a10_0000_4f00_8000_0000_0000_0001);
    pub const MARCO: Uuid = Uuid::from_u128(0x6f1c_2a10_0000_4f00_8000_0000_0000_0002);
    pub const LENA: Uuid = Uuid::from_u128(0x6f1c_2a10_0000_4f00_8000_0000_0000_0003);

    pub const NORTHWIND_INVITE: Uuid = Uuid::from_u128(0x6f1c_2a10_0000_4d00_8000_0000_0000_0001);

    pub const LEDGER_MVP_FUNDED: Uuid = Uuid::from_u128(0x6f1c_2a10_0000_4100_8000_0000_0000_0001);
    pub const LEDGER_MVP_RELEASED: Uuid = Uuid::from_u128(0x6f1c_2a10_0000_4100_8000_0000_0000_0002);
    pub const LEDGER_PROTOTYPE_FUNDED: Uuid =
        Uuid::from_u128(0x6f1c_2a10_0000_4100_8000_0000_0000_0003);
}

fn at(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}

// 2025-01-06T09:00:00Z
const EPOCH: i64 = 1_736_154_000;
const DAY: i64 = 86_400;

pub fn clients() -> Vec<Client> {
    vec![
        Client {
            id: ids::NORTHWIND,
            name: "Maya Chen".to_string(),
            email: "maya.chen@northwind.example".to_string(),
            company_name: Some("Northwind Retail".to_string()),
            industry: Some("Retail".to_string()),
            location: Some("Seattle, WA".to_string()),
            phone: Some("+1 206 555 0142".to_string()),
            projects: vec![ids::STOREFRONT, ids::FORECASTING],
            consultants: vec![ids::PRIYA, ids::MARCO],
            escrow_transactions: vec![ids::MVP_ESCROW, ids::PROTOTYPE_ESCROW],
            invitations: vec![ids::NORTHWIND_INVITE],
            created_at: at(EPOCH),
            updated_at: at(EPOCH + 40 * DAY),
        },
        Client {
            id: ids::HELIOS,
            name: "Daniel Okafor".to_string(),
            email: "daniel.okafor@helioshealth.example".to_string(),
            company_name: Some("Helios Health".to_string()),
            industry: Some("Healthcare".to_string()),
            location: None,
            phone: None,
            projects: vec![ids::PATIENT_PORTAL],
            consultants: Vec::new(),
            escrow_transactions: vec![ids::RESEARCH_ESCROW],
            invitations: Vec::new(),
            created_at: at(EPOCH + 21 * DAY),
            updated_at: at(EPOCH + 21 * DAY),
        },
    ]
}

pub fn client(id: Uuid) -> Option<Client> {
    clients().into_iter().find(|c| c.id == id)
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: ids::STOREFRONT,
            title: "Storefront platform rebuild".to_string(),
            description: "Replace the legacy storefront with a headless commerce stack."
                .to_string(),
            client_id: Some(ids::NORTHWIND),
            status: ProjectStatus::Completed,
            budget: Some(48_000.0),
            deadline: Some(at(EPOCH + 30 * DAY)),
            skills: vec!["Rust".to_string(), "React".to_string(), "PostgreSQL".to_string()],
            progress: 100,
            created_at: at(EPOCH),
            updated_at: at(EPOCH + 30 * DAY),
        },
        Project {
            id: ids::FORECASTING,
            title: "Inventory forecasting".to_string(),
            description: "Demand forecasting models for seasonal stock planning.".to_string(),
            client_id: Some(ids::NORTHWIND),
            status: ProjectStatus::InProgress,
            budget: Some(32_000.0),
            deadline: Some(at(EPOCH + 90 * DAY)),
            skills: vec!["Python".to_string(), "Machine Learning".to_string()],
            progress: 60,
            created_at: at(EPOCH + 14 * DAY),
            updated_at: at(EPOCH + 40 * DAY),
        },
        Project {
            id: ids::PATIENT_PORTAL,
            title: "Patient portal discovery".to_string(),
            description: "User research and service design for a patient self-service portal."
                .to_string(),
            client_id: Some(ids::HELIOS),
            status: ProjectStatus::Planning,
            budget: Some(15_000.0),
            deadline: None,
            skills: vec!["UX Research".to_string(), "Service Design".to_string()],
            progress: 10,
            created_at: at(EPOCH + 21 * DAY),
            updated_at: at(EPOCH + 21 * DAY),
        },
    ]
}

pub fn project(id: Uuid) -> Option<Project> {
    projects().into_iter().find(|p| p.id == id)
}

pub fn teams() -> Vec<Team> {
    vec![
        Team {
            id: ids::PLATFORM_SQUAD,
            name: "Platform Squad".to_string(),
            description: "Commerce and data engineering.".to_string(),
            members: Json(vec![
                TeamMember {
                    name: "Priya Raman".to_string(),
                    role: "Tech Lead".to_string(),
                    email: Some("priya@consultancy.example".to_string()),
                    avatar_url: None,
                },
                TeamMember {
                    name: "Marco Silva".to_string(),
                    role: "Data Engineer".to_string(),
                    email: Some("marco@consultancy.example".to_string()),
                    avatar_url: None,
                },
            ]),
            projects: vec![ids::STOREFRONT, ids::FORECASTING],
            created_at: at(EPOCH),
            updated_at: at(EPOCH),
        },
        Team {
            id: ids::DISCOVERY_CREW,
            name: "Discovery Crew".to_string(),
            description: "Research and product design.".to_string(),
            members: Json(vec![TeamMember {
                name: "Lena Novak".to_string(),
                role: "Product Designer".to_string(),
                email: Some("lena@consultancy.example".to_string()),
                avatar_url: None,
            }]),
            projects: vec![ids::PATIENT_PORTAL],
            created_at: at(EPOCH + 21 * DAY),
            updated_at: at(EPOCH + 21 * DAY),
        },
    ]
}

pub fn team(id: Uuid) -> Option<Team> {
    teams().into_iter().find(|t| t.id == id)
}

pub fn transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: ids::MVP_ESCROW,
            project_id: Some(ids::STOREFRONT),
            client_id: Some(ids::NORTHWIND),
            amount: 24_000.0,
            currency: "USD".to_string(),
            status: EscrowStatus::Released,
            description: "Milestone payment".to_string(),
            milestone: Some("MVP launch".to_string()),
            created_at: at(EPOCH + 2 * DAY),
            updated_at: at(EPOCH + 30 * DAY),
        },
        Transaction {
            id: ids::PROTOTYPE_ESCROW,
            project_id: Some(ids::FORECASTING),
            client_id: Some(ids::NORTHWIND),
            amount: 16_000.0,
            currency: "USD".to_string(),
            status: EscrowStatus::Funded,
            description: "Milestone payment".to_string(),
            milestone: Some("Model prototype".to_string()),
            created_at: at(EPOCH + 15 * DAY),
            updated_at: at(EPOCH + 15 * DAY),
        },
        Transaction {
            id: ids::RESEARCH_ESCROW,
            project_id: Some(ids::PATIENT_PORTAL),
            client_id: Some(ids::HELIOS),
            amount: 7_500.0,
            currency: "USD".to_string(),
            status: EscrowStatus::Pending,
            description: "Discovery phase deposit".to_string(),
            milestone: Some("Research phase".to_string()),
            created_at: at(EPOCH + 22 * DAY),
            updated_at: at(EPOCH + 22 * DAY),
        },
    ]
}

pub fn transaction(id: Uuid) -> Option<Transaction> {
    transactions().into_iter().find(|t| t.id == id)
}

pub fn profiles() -> Vec<Profile> {
    vec![
        Profile {
            id: ids::LENA,
            name: "Lena Novak".to_string(),
            email: "lena@consultancy.example".to_string(),
            title: "Product Designer".to_string(),
            bio: "Service designer focused on healthcare and public sector products.".to_string(),
            skills: vec!["UX Research".to_string(), "Figma".to_string(), "Service Design".to_string()],
            hourly_rate: Some(120.0),
            location: Some("Berlin".to_string()),
            availability: Availability::Available,
            avatar_url: None,
            created_at: at(EPOCH),
            updated_at: at(EPOCH),
        },
        Profile {
            id: ids::MARCO,
            name: "Marco Silva".to_string(),
            email: "marco@consultancy.example".to_string(),
            title: "Data Engineer".to_string(),
            bio: "Builds forecasting pipelines and analytics platforms.".to_string(),
            skills: vec!["Python".to_string(), "Spark".to_string(), "Machine Learning".to_string()],
            hourly_rate: Some(140.0),
            location: Some("Lisbon".to_string()),
            availability: Availability::Available,
            avatar_url: None,
            created_at: at(EPOCH),
            updated_at: at(EPOCH),
        },
        Profile {
            id: ids::PRIYA,
            name: "Priya Raman".to_string(),
            email: "priya@consultancy.example".to_string(),
            title: "Principal Engineer".to_string(),
            bio: "Leads platform rebuilds from architecture through launch.".to_string(),
            skills: vec!["Rust".to_string(), "Distributed Systems".to_string(), "React".to_string()],
            hourly_rate: Some(165.0),
            location: Some("Toronto".to_string()),
            availability: Availability::Busy,
            avatar_url: None,
            created_at: at(EPOCH),
            updated_at: at(EPOCH),
        },
    ]
}

pub fn profile(id: Uuid) -> Option<Profile> {
    profiles().into_iter().find(|p| p.id == id)
}

pub fn ledger_entries() -> Vec<LedgerEntry> {
    vec![
        LedgerEntry {
            id: ids::LEDGER_PROTOTYPE_FUNDED,
            transaction_id: Some(ids::PROTOTYPE_ESCROW),
            client_id: Some(ids::NORTHWIND),
            kind: LedgerEntryKind::Credit,
            amount: 16_000.0,
            currency: "USD".to_string(),
            description: "Escrow funded: Model prototype".to_string(),
            recorded_at: at(EPOCH + 15 * DAY),
            created_at: at(EPOCH + 15 * DAY),
            updated_at: at(EPOCH + 15 * DAY),
        },
        LedgerEntry {
            id: ids::LEDGER_MVP_RELEASED,
            transaction_id: Some(ids::MVP_ESCROW),
            client_id: Some(ids::NORTHWIND),
            kind: LedgerEntryKind::Debit,
            amount: 24_000.0,
            currency: "USD".to_string(),
            description: "Escrow released: MVP launch".to_string(),
            recorded_at: at(EPOCH + 30 * DAY),
            created_at: at(EPOCH + 30 * DAY),
            updated_at: at(EPOCH + 30 * DAY),
        },
        LedgerEntry {
            id: ids::LEDGER_MVP_FUNDED,
            transaction_id: Some(ids::MVP_ESCROW),
            client_id: Some(ids::NORTHWIND),
            kind: LedgerEntryKind::Credit,
            amount: 24_000.0,
            currency: "USD".to_string(),
            description: "Escrow funded: MVP launch".to_string(),
            recorded_at: at(EPOCH + 2 * DAY),
            created_at: at(EPOCH + 2 * DAY),
            updated_at: at(EPOCH + 2 * DAY),
        },
    ]
}

pub fn ledger_entry(id: Uuid) -> Option<LedgerEntry> {
    ledger_entries().into_iter().find(|e| e.id == id)
}

// Stand-ins for records the database would have created.

pub fn synthesize_client(input: NewClient) -> Client {
    let now = Utc::now();
    Client {
        id: Uuid::now_v7(),
        name: input.name,
        email: input.email,
        company_name: input.company_name,
        industry: input.industry,
        location: input.location,
        phone: input.phone,
        projects: input.projects,
        consultants: input.consultants,
        escrow_transactions: input.escrow_transactions,
        invitations: input.invitations,
        created_at: now,
        updated_at: now,
    }
}

pub fn synthesize_project(input: NewProject) -> Project {
    let now = Utc::now();
    Project {
        id: Uuid::now_v7(),
        title: input.title,
        description: input.description,
        client_id: input.client_id,
        status: input.status,
        budget: input.budget,
        deadline: input.deadline,
        skills: input.skills,
        progress: input.progress,
        created_at: now,
        updated_at: now,
    }
}

pub fn synthesize_team(input: NewTeam) -> Team {
    let now = Utc::now();
    Team {
        id: Uuid::now_v7(),
        name: input.name,
        description: input.description,
        members: Json(input.members),
        projects: input.projects,
        created_at: now,
        updated_at: now,
    }
}

pub fn synthesize_transaction(input: NewTransaction) -> Transaction {
    let now = Utc::now();
    Transaction {
        id: Uuid::now_v7(),
        project_id: input.project_id,
        client_id: input.client_id,
        amount: input.amount,
        currency: input.currency,
        status: input.status,
        description: input.description,
        milestone: input.milestone,
        created_at: now,
        updated_at: now,
    }
}

pub fn synthesize_profile(input: NewProfile) -> Profile {
    let now = Utc::now();
    Profile {
        id: Uuid::now_v7(),
        name: input.name,
        email: input.email,
        title: input.title,
        bio: input.bio,
        skills: input.skills,
        hourly_rate: input.hourly_rate,
        location: input.location,
        availability: input.availability,
        avatar_url: input.avatar_url,
        created_at: now,
        updated_at: now,
    }
}

pub fn synthesize_ledger_entry(input: NewLedgerEntry) -> LedgerEntry {
    let now = Utc::now();
    LedgerEntry {
        id: Uuid::now_v7(),
        transaction_id: input.transaction_id,
        client_id: input.client_id,
        kind: input.kind,
        amount: input.amount,
        currency: input.currency,
        description: input.description,
        recorded_at: input.recorded_at.unwrap_or(now),
        created_at: now,
        updated_at: now,
    }
}
