//! Gallery page: photo entries, each with an ordered image list.

use crate::core::config::SiteConfig;
use crate::core::error::SiteError;
use crate::core::view::View;
use crate::core::{assets, output};
use serde::{Deserialize, Serialize};

pub const CONTENT_FILE: &str = "gallery.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: String,
    pub title: String,
    /// Image paths in display order.
    pub images: Vec<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub category: Option<String>,
}

pub fn load() -> Result<Vec<GalleryImage>, SiteError> {
    assets::parse_content(CONTENT_FILE)
}

pub fn view(config: &SiteConfig) -> Result<View, SiteError> {
    let entries = load()?;
    let mut body = String::new();
    for entry in &entries {
        let mut lines = Vec::new();
        if let Some(date) = &entry.date {
            lines.push(date.clone());
        }
        if let Some(category) = &entry.category {
            lines.push(format!("Category: {}", category));
        }
        if let Some(description) = &entry.description {
            lines.push(description.clone());
        }
        lines.extend(entry.images.iter().map(|i| format!("[{}]", config.asset_url(i))));
        body.push_str(&output::section(&entry.title, &lines));
    }
    Ok(View::new("/gallery", "Gallery", body))
}

pub fn schema() -> serde_json::Value {
    serde_json::json!({
        "name": "gallery",
        "content_file": CONTENT_FILE,
        "type": "array",
        "items": {
            "type": "object",
            "required": ["id", "title", "images"],
            "properties": {
                "images": { "type": "array", "items": "string (ordered)" },
                "category": { "type": "string" },
                "date": { "type": "string" }
            }
        }
    })
}
