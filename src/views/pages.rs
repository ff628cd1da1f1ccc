use askama::Template;
use axum::response::{Html, IntoResponse};

use crate::catalog::{self, CaseStudy, Service};
use crate::error::AppError;
use crate::views::money;

#[derive(Template)]
#[template(path = "pages/home.html")]
struct HomeTemplate {
    services: Vec<Service>,
    featured: Vec<CaseStudy>,
}

#[derive(Template)]
#[template(path = "pages/services.html")]
struct ServicesTemplate {
    services: Vec<Service>,
}

#[derive(Template)]
#[template(path = "pages/portfolio.html")]
struct PortfolioTemplate {
    case_studies: Vec<CaseStudy>,
}

#[derive(Template)]
#[template(path = "pages/talent.html")]
struct TalentTemplate {
    consultants: Vec<TalentCard>,
}

struct TalentCard {
    name: String,
    title: String,
    skills: String,
    rate: String,
    location: String,
    availability: &'static str,
}

pub async fn home() -> Result<impl IntoResponse, AppError> {
    let template = HomeTemplate {
        services: catalog::services(),
        featured: catalog::portfolio().into_iter().take(2).collect(),
    };
    render(&template)
}

pub async fn services() -> Result<impl IntoResponse, AppError> {
    render(&ServicesTemplate {
        services: catalog::services(),
    })
}

pub async fn portfolio() -> Result<impl IntoResponse, AppError> {
    render(&PortfolioTemplate {
        case_studies: catalog::portfolio(),
    })
}

pub async fn talent() -> Result<impl IntoResponse, AppError> {
    let consultants = catalog::talent()
        .into_iter()
        .map(|t| TalentCard {
            name: t.name,
            title: t.title,
            skills: t.skills.join(", "),
            rate: t
                .hourly_rate
                .map(|rate| format!("{}/hr", money(rate, "USD")))
                .unwrap_or_else(|| "Rate on request".to_string()),
            location: t.location.unwrap_or_else(|| "Remote".to_string()),
            availability: t.availability.label(),
        })
        .collect();
    render(&TalentTemplate { consultants })
}

pub(crate) fn render(template: &impl Template) -> Result<Html<String>, AppError> {
    template
        .render()
        .map(Html)
        .map_err(|e| AppError::Internal(format!("Template render failed: {e}")))
}
