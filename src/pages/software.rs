//! Software page: tools released by the lab.

use crate::core::config::SiteConfig;
use crate::core::error::SiteError;
use crate::core::view::View;
use crate::core::{assets, output};
use serde::{Deserialize, Serialize};

pub const CONTENT_FILE: &str = "software.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Software {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Source repository link.
    pub github: String,
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub year: Option<String>,
}

pub fn load() -> Result<Vec<Software>, SiteError> {
    assets::parse_content(CONTENT_FILE)
}

pub fn view(config: &SiteConfig) -> Result<View, SiteError> {
    let tools = load()?;
    let mut body = String::new();
    for tool in &tools {
        let mut lines = vec![tool.description.clone(), tool.github.clone()];
        if !tool.tags.is_empty() {
            lines.push(tool.tags.join(", "));
        }
        if let Some(image) = &tool.image {
            lines.push(format!("[{}]", config.asset_url(image)));
        }
        let title = match &tool.year {
            Some(year) => format!("{} ({})", tool.name, year),
            None => tool.name.clone(),
        };
        body.push_str(&output::section(&title, &lines));
    }
    Ok(View::new("/software", "Software", body))
}

pub fn schema() -> serde_json::Value {
    serde_json::json!({
        "name": "software",
        "content_file": CONTENT_FILE,
        "type": "array",
        "items": {
            "type": "object",
            "required": ["id", "name", "description", "github"],
            "properties": {
                "tags": { "type": "array", "items": "string" }
            }
        }
    })
}
