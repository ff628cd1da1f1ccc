//! Profile completion score.
//!
//! A client profile scores 0 to 100 from five ratios, each in `[0, 1]`:
//!
//! | ratio | weight |
//! |---|---|
//! | scalar fields present (name, email, company, industry, location) | 0.35 |
//! | projects with status `completed` | 0.35 |
//! | escrow transactions with status `released` | 0.15 |
//! | has at least one consultant | 0.10 |
//! | has at least one invitation | 0.05 |

use crate::models::{Client, EscrowStatus, Project, ProjectStatus, Transaction};

const SCALAR_WEIGHT: f64 = 0.35;
const PROJECT_WEIGHT: f64 = 0.35;
const ESCROW_WEIGHT: f64 = 0.15;
const CONSULTANT_WEIGHT: f64 = 0.10;
const INVITATION_WEIGHT: f64 = 0.05;

/// What the scorer looks at. Related collections are reduced to the part that
/// matters: statuses for projects and escrow transactions, counts for the rest.
#[derive(Debug, Clone, Default)]
pub struct ProfileSnapshot<'a> {
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub company_name: Option<&'a str>,
    pub industry: Option<&'a str>,
    pub location: Option<&'a str>,
    pub project_statuses: Vec<ProjectStatus>,
    pub escrow_statuses: Vec<EscrowStatus>,
    pub consultants: usize,
    pub invitations: usize,
}

impl<'a> ProfileSnapshot<'a> {
    /// Snapshot a client together with the projects and escrow transactions it
    /// references. Only records whose id appears on the client are counted.
    pub fn of_client(client: &'a Client, projects: &[Project], transactions: &[Transaction]) -> Self {
        Self {
            name: Some(client.name.as_str()),
            email: Some(client.email.as_str()),
            company_name: client.company_name.as_deref(),
            industry: client.industry.as_deref(),
            location: client.location.as_deref(),
            project_statuses: projects
                .iter()
                .filter(|p| client.projects.contains(&p.id))
                .map(|p| p.status)
                .collect(),
            escrow_statuses: transactions
                .iter()
                .filter(|t| client.escrow_transactions.contains(&t.id))
                .map(|t| t.status)
                .collect(),
            consultants: client.consultants.len(),
            invitations: client.invitations.len(),
        }
    }
}

/// Completion percentage in `0..=100`; an absent profile scores 0.
pub fn completion_score(profile: Option<&ProfileSnapshot<'_>>) -> u8 {
    let Some(profile) = profile else {
        return 0;
    };

    let scalars = [
        profile.name,
        profile.email,
        profile.company_name,
        profile.industry,
        profile.location,
    ];
    let present = scalars
        .iter()
        .filter(|field| field.is_some_and(|v| !v.trim().is_empty()))
        .count();
    let scalar_ratio = present as f64 / scalars.len() as f64;

    let project_ratio = ratio(
        profile
            .project_statuses
            .iter()
            .filter(|s| **s == ProjectStatus::Completed)
            .count(),
        profile.project_statuses.len(),
    );
    let escrow_ratio = ratio(
        profile
            .escrow_statuses
            .iter()
            .filter(|s| **s == EscrowStatus::Released)
            .count(),
        profile.escrow_statuses.len(),
    );
    let consultant_ratio = if profile.consultants > 0 { 1.0 } else { 0.0 };
    let invitation_ratio = if profile.invitations > 0 { 1.0 } else { 0.0 };

    let weighted = scalar_ratio * SCALAR_WEIGHT
        + project_ratio * PROJECT_WEIGHT
        + escrow_ratio * ESCROW_WEIGHT
        + consultant_ratio * CONSULTANT_WEIGHT
        + invitation_ratio * INVITATION_WEIGHT;

    (weighted * 100.0).round().clamp(0.0, 100.0) as u8
}

fn ratio(hits: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        hits as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalars_only() -> ProfileSnapshot<'static> {
        ProfileSnapshot {
            name: Some("Ada Lovelace"),
            email: Some("ada@example.com"),
            company_name: Some("Analytical Engines"),
            industry: Some("Computing"),
            location: Some("London"),
            ..Default::default()
        }
    }

    #[test]
    fn absent_profile_scores_zero() {
        assert_eq!(completion_score(None), 0);
    }

    #[test]
    fn empty_profile_scores_zero() {
        assert_eq!(completion_score(Some(&ProfileSnapshot::default())), 0);
    }

    #[test]
    fn scalar_fields_alone_score_35() {
        assert_eq!(completion_score(Some(&scalars_only())), 35);
    }

    #[test]
    fn fully_complete_profile_scores_100() {
        let profile = ProfileSnapshot {
            project_statuses: vec![ProjectStatus::Completed, ProjectStatus::Completed],
            escrow_statuses: vec![EscrowStatus::Released],
            consultants: 3,
            invitations: 1,
            ..scalars_only()
        };
        assert_eq!(completion_score(Some(&profile)), 100);
    }

    #[test]
    fn partial_ratios_are_weighted() {
        // 3/5 scalars, 1/2 projects, 1/4 escrow, consultant, no invitation:
        // 0.21 + 0.175 + 0.0375 + 0.10 = 0.5225
        let profile = ProfileSnapshot {
            name: Some("Grace"),
            email: Some("grace@example.com"),
            company_name: None,
            industry: Some("Navy"),
            location: None,
            project_statuses: vec![ProjectStatus::Completed, ProjectStatus::InProgress],
            escrow_statuses: vec![
                EscrowStatus::Released,
                EscrowStatus::Funded,
                EscrowStatus::Pending,
                EscrowStatus::Disputed,
            ],
            consultants: 1,
            invitations: 0,
        };
        assert_eq!(completion_score(Some(&profile)), 52);
    }

    #[test]
    fn blank_scalars_do_not_count() {
        let profile = ProfileSnapshot {
            company_name: Some("   "),
            location: Some(""),
            ..scalars_only()
        };
        assert_eq!(completion_score(Some(&profile)), 21);
    }

    #[test]
    fn completed_escrow_is_not_released() {
        let profile = ProfileSnapshot {
            escrow_statuses: vec![EscrowStatus::Completed],
            ..scalars_only()
        };
        assert_eq!(completion_score(Some(&profile)), 35);
    }

    #[test]
    fn score_stays_in_range_for_mixed_inputs() {
        let statuses = [
            ProjectStatus::Planning,
            ProjectStatus::InProgress,
            ProjectStatus::Review,
            ProjectStatus::Completed,
            ProjectStatus::Cancelled,
        ];
        for n in 0..statuses.len() {
            for consultants in 0..2 {
                let profile = ProfileSnapshot {
                    project_statuses: statuses[..n].to_vec(),
                    escrow_statuses: vec![EscrowStatus::Released; n],
                    consultants,
                    invitations: n % 2,
                    ..scalars_only()
                };
                let score = completion_score(Some(&profile));
                assert!(score <= 100, "score {score} out of range");
            }
        }
    }
}
