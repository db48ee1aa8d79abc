//! Achievements page: publications, patents, and awards.

use crate::core::config::SiteConfig;
use crate::core::error::SiteError;
use crate::core::view::View;
use crate::core::{assets, output};
use serde::{Deserialize, Serialize};

pub const CONTENT_FILE: &str = "achievements.json";

/// Publication venue discriminator. Records without a tag render the same
/// as journal papers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublicationType {
    Journal,
    Conference,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Publication {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: Option<PublicationType>,
    pub title: String,
    /// Author list in the published order.
    pub authors: Vec<String>,
    pub journal: Option<String>,
    pub conference: Option<String>,
    pub year: u32,
    pub volume: Option<String>,
    pub pages: Option<String>,
    pub doi: Option<String>,
    pub link: Option<String>,
    #[serde(default)]
    pub featured: bool,
    pub impact_factor: Option<f64>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patent {
    pub id: String,
    pub title: String,
    pub inventors: Vec<String>,
    pub patent_number: String,
    pub date: String,
    pub country: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Award {
    pub id: String,
    pub title: String,
    pub recipient: String,
    pub organization: String,
    pub date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementsData {
    pub publications: Vec<Publication>,
    pub patents: Vec<Patent>,
    pub awards: Vec<Award>,
}

pub fn load() -> Result<AchievementsData, SiteError> {
    assets::parse_content(CONTENT_FILE)
}

pub fn publication_line(p: &Publication) -> String {
    let venue = p
        .journal
        .as_deref()
        .or(p.conference.as_deref())
        .unwrap_or("unpublished");
    let mut line = format!("{} ({}). {}. {}", p.authors.join(", "), p.year, p.title, venue);
    // Impact factor rides directly on the venue name.
    if let Some(impact) = p.impact_factor {
        line.push_str(&format!(" (IF {})", impact));
    }
    if let Some(volume) = &p.volume {
        line.push_str(&format!(" {}", volume));
    }
    if let Some(pages) = &p.pages {
        line.push_str(&format!(", {}", pages));
    }
    if let Some(doi) = &p.doi {
        line.push_str(&format!(". doi:{}", doi));
    }
    if let Some(link) = &p.link {
        line.push_str(&format!(" <{}>", link));
    }
    if let Some(status) = &p.status {
        line.push_str(&format!(" [{}]", status));
    }
    line
}

pub fn view(_config: &SiteConfig) -> Result<View, SiteError> {
    let data = load()?;

    let journals: Vec<String> = data
        .publications
        .iter()
        .filter(|p| p.kind != Some(PublicationType::Conference))
        .map(publication_line)
        .collect();
    let conferences: Vec<String> = data
        .publications
        .iter()
        .filter(|p| p.kind == Some(PublicationType::Conference))
        .map(publication_line)
        .collect();
    let patents: Vec<String> = data
        .patents
        .iter()
        .map(|p| {
            format!(
                "{} | {} ({}, {}) | {}",
                p.title,
                p.patent_number,
                p.country,
                p.date,
                p.inventors.join(", ")
            )
        })
        .collect();
    let awards: Vec<String> = data
        .awards
        .iter()
        .map(|a| format!("{} - {} ({}, {})", a.title, a.recipient, a.organization, a.date))
        .collect();

    let mut body = output::section("Journal Papers", &journals);
    if !conferences.is_empty() {
        body.push_str(&output::section("Conference Papers", &conferences));
    }
    if !patents.is_empty() {
        body.push_str(&output::section("Patents", &patents));
    }
    if !awards.is_empty() {
        body.push_str(&output::section("Awards", &awards));
    }

    Ok(View::new("/achievements", "Achievements", body))
}

pub fn schema() -> serde_json::Value {
    serde_json::json!({
        "name": "achievements",
        "content_file": CONTENT_FILE,
        "type": "object",
        "properties": {
            "publications": {
                "type": "array",
                "items": {
                    "type": "object",
                    "required": ["id", "title", "authors", "year"],
                    "properties": {
                        "type": { "enum": ["journal", "conference"] },
                        "authors": { "type": "array", "items": "string (ordered)" },
                        "featured": { "type": "boolean" }
                    }
                }
            },
            "patents": { "type": "array", "items": "Patent" },
            "awards": { "type": "array", "items": "Award" }
        }
    })
}
