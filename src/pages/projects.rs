//! Projects page: funded research projects with optionally bilingual fields.

use crate::core::config::SiteConfig;
use crate::core::error::SiteError;
use crate::core::view::View;
use crate::core::{assets, output};
use crate::pages::text::Text;
use serde::{Deserialize, Serialize};

pub const CONTENT_FILE: &str = "projects.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Ongoing,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: Text,
    pub period: Text,
    pub role: Text,
    pub funding_agency: Text,
    pub funding_amount: Option<Text>,
    pub status: ProjectStatus,
}

pub fn load() -> Result<Vec<Project>, SiteError> {
    assets::parse_content(CONTENT_FILE)
}

pub fn view(_config: &SiteConfig) -> Result<View, SiteError> {
    let projects = load()?;

    let render_group = |status: ProjectStatus| -> Vec<String> {
        projects
            .iter()
            .filter(|p| p.status == status)
            .map(|p| {
                let mut line = format!(
                    "{} | {} | {} | {}",
                    p.title.render(),
                    p.period.render(),
                    p.role.render(),
                    p.funding_agency.render()
                );
                if let Some(amount) = &p.funding_amount {
                    line.push_str(&format!(" | {}", amount.render()));
                }
                line
            })
            .collect()
    };

    let ongoing = render_group(ProjectStatus::Ongoing);
    let completed = render_group(ProjectStatus::Completed);

    let mut body = String::new();
    if !ongoing.is_empty() {
        body.push_str(&output::section("Ongoing Projects", &ongoing));
    }
    if !completed.is_empty() {
        body.push_str(&output::section("Completed Projects", &completed));
    }

    Ok(View::new("/projects", "Projects", body))
}

pub fn schema() -> serde_json::Value {
    serde_json::json!({
        "name": "projects",
        "content_file": CONTENT_FILE,
        "type": "array",
        "items": {
            "type": "object",
            "required": ["id", "title", "period", "role", "funding_agency", "status"],
            "properties": {
                "title": { "type": "Text (string | {primary, english})" },
                "period": { "type": "Text (string | {primary, english})" },
                "role": { "type": "Text (string | {primary, english})" },
                "funding_agency": { "type": "Text (string | {primary, english})" },
                "funding_amount": { "type": "Text (string | {primary, english})" },
                "status": { "enum": ["ongoing", "completed"] }
            }
        }
    })
}
