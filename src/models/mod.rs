pub mod client;
pub mod ledger;
pub mod profile;
pub mod project;
pub mod team;
pub mod transaction;

pub use client::{Client, NewClient};
pub use ledger::{LedgerEntry, LedgerEntryKind, NewLedgerEntry};
pub use profile::{Availability, NewProfile, Profile};
pub use project::{NewProject, Project, ProjectStatus};
pub use team::{NewTeam, Team, TeamMember};
pub use transaction::{EscrowStatus, NewTransaction, Transaction};
