//! Marketing content and dashboard notifications. None of this lives in the
//! database; it ships with the binary.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::fallback;
use crate::models::Availability;

#[derive(Debug, Clone, Serialize)]
pub struct Service {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub highlights: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CaseStudy {
    pub slug: &'static str,
    pub title: &'static str,
    pub client: &'static str,
    pub industry: &'static str,
    pub summary: &'static str,
    pub outcome: &'static str,
    pub tags: Vec<&'static str>,
}

/// Public card for a consultant on the talent page. Contact details stay private.
#[derive(Debug, Clone, Serialize)]
pub struct Talent {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub skills: Vec<String>,
    pub hourly_rate: Option<f64>,
    pub location: Option<String>,
    pub availability: Availability,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub title: &'static str,
    pub body: &'static str,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

pub fn services() -> Vec<Service> {
    vec![
        Service {
            slug: "product-engineering",
            title: "Product Engineering",
            summary: "Senior teams that design, build and ship web platforms end to end.",
            highlights: vec!["Architecture reviews", "Full-stack delivery", "Launch support"],
        },
        Service {
            slug: "data-and-ai",
            title: "Data & AI",
            summary: "Forecasting, analytics and machine learning grounded in your own data.",
            highlights: vec!["Data pipelines", "Predictive models", "Dashboards"],
        },
        Service {
            slug: "product-design",
            title: "Product Design",
            summary: "Research-led design for products people return to.",
            highlights: vec!["User research", "Service design", "Design systems"],
        },
        Service {
            slug: "staff-augmentation",
            title: "Staff Augmentation",
            summary: "Vetted consultants who join your team for as long as you need them.",
            highlights: vec!["Flexible engagements", "Escrow-backed milestones"],
        },
    ]
}

pub fn portfolio() -> Vec<CaseStudy> {
    vec![
        CaseStudy {
            slug: "northwind-storefront",
            title: "Headless storefront for Northwind Retail",
            client: "Northwind Retail",
            industry: "Retail",
            summary: "Rebuilt a ten-year-old storefront on a headless commerce stack.",
            outcome: "Page loads dropped from 4.1s to 0.9s; conversion rose 18%.",
            tags: vec!["Rust", "React", "PostgreSQL"],
        },
        CaseStudy {
            slug: "helios-discovery",
            title: "Patient portal discovery for Helios Health",
            client: "Helios Health",
            industry: "Healthcare",
            summary: "Six weeks of patient and clinician research ahead of a portal build.",
            outcome: "A validated roadmap and prototype tested with 40 patients.",
            tags: vec!["UX Research", "Service Design"],
        },
        CaseStudy {
            slug: "atlas-logistics-forecasting",
            title: "Demand forecasting for Atlas Logistics",
            client: "Atlas Logistics",
            industry: "Logistics",
            summary: "Replaced spreadsheet planning with weekly demand forecasts.",
            outcome: "Stock-outs fell by a third in the first season.",
            tags: vec!["Python", "Machine Learning"],
        },
    ]
}

pub fn talent() -> Vec<Talent> {
    fallback::profiles()
        .into_iter()
        .map(|p| Talent {
            id: p.id,
            name: p.name,
            title: p.title,
            skills: p.skills,
            hourly_rate: p.hourly_rate,
            location: p.location,
            availability: p.availability,
        })
        .collect()
}

pub fn notifications() -> Vec<Notification> {
    let at = |secs: i64| DateTime::from_timestamp(secs, 0).unwrap_or_default();
    vec![
        Notification {
            id: Uuid::from_u128(0x6f1c_2a10_0000_4900_8000_0000_0000_0001),
            kind: NotificationKind::Success,
            title: "Milestone released",
            body: "Escrow for \"MVP launch\" was released to the delivery team.",
            read: true,
            created_at: at(1_738_746_000),
        },
        Notification {
            id: Uuid::from_u128(0x6f1c_2a10_0000_4900_8000_0000_0000_0002),
            kind: NotificationKind::Info,
            title: "New consultant assigned",
            body: "Marco Silva joined the Inventory forecasting project.",
            read: false,
            created_at: at(1_739_350_800),
        },
        Notification {
            id: Uuid::from_u128(0x6f1c_2a10_0000_4900_8000_0000_0000_0003),
            kind: NotificationKind::Warning,
            title: "Escrow awaiting funding",
            body: "Fund the next milestone to keep the project on schedule.",
            read: false,
            created_at: at(1_739_437_200),
        },
    ]
}
