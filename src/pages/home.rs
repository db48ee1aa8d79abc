//! Home page: site intro plus publications flagged as featured.

use crate::core::config::SiteConfig;
use crate::core::error::SiteError;
use crate::core::view::View;
use crate::core::{assets, output};
use crate::pages::achievements;
use serde::{Deserialize, Serialize};

pub const CONTENT_FILE: &str = "home.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeData {
    pub title: String,
    pub tagline: String,
    /// Intro paragraphs in display order.
    pub intro: Vec<String>,
}

pub fn load() -> Result<HomeData, SiteError> {
    assets::parse_content(CONTENT_FILE)
}

pub fn view(_config: &SiteConfig) -> Result<View, SiteError> {
    let data = load()?;

    let mut lines = vec![data.tagline.clone()];
    lines.extend(data.intro.iter().cloned());
    let mut body = output::section(&data.title, &lines);

    let featured: Vec<String> = achievements::load()?
        .publications
        .iter()
        .filter(|p| p.featured)
        .map(achievements::publication_line)
        .collect();
    if !featured.is_empty() {
        body.push_str(&output::section("Featured Publications", &featured));
    }

    Ok(View::new("/", "Home", body))
}

pub fn schema() -> serde_json::Value {
    serde_json::json!({
        "name": "home",
        "content_file": CONTENT_FILE,
        "type": "object",
        "required": ["title", "tagline", "intro"],
        "properties": {
            "intro": { "type": "array", "items": "string (ordered)" }
        }
    })
}
