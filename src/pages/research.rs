//! Research areas page.

use crate::core::config::SiteConfig;
use crate::core::error::SiteError;
use crate::core::view::View;
use crate::core::{assets, output};
use serde::{Deserialize, Serialize};

pub const CONTENT_FILE: &str = "research.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchArea {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    /// Bullet points expanding the area, in display order.
    pub details: Vec<String>,
}

pub fn load() -> Result<Vec<ResearchArea>, SiteError> {
    assets::parse_content(CONTENT_FILE)
}

pub fn view(config: &SiteConfig) -> Result<View, SiteError> {
    let areas = load()?;
    let mut body = String::new();
    for area in &areas {
        let mut lines = vec![area.description.clone()];
        lines.extend(area.details.iter().map(|d| format!("- {}", d)));
        lines.push(format!("[{}]", config.asset_url(&area.image)));
        body.push_str(&output::section(&area.title, &lines));
    }
    Ok(View::new("/research", "Research Areas", body))
}

pub fn schema() -> serde_json::Value {
    serde_json::json!({
        "name": "research",
        "content_file": CONTENT_FILE,
        "type": "array",
        "items": {
            "type": "object",
            "required": ["id", "title", "description", "image", "details"],
            "properties": {
                "details": { "type": "array", "items": "string (ordered)" }
            }
        }
    })
}
