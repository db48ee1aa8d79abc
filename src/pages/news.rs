//! News page: lab announcements, newest first in the bundled data.

use crate::core::config::SiteConfig;
use crate::core::error::SiteError;
use crate::core::view::View;
use crate::core::{assets, output};
use serde::{Deserialize, Serialize};

pub const CONTENT_FILE: &str = "news.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub date: String,
    pub body: String,
    pub link: Option<String>,
}

pub fn load() -> Result<Vec<NewsItem>, SiteError> {
    assets::parse_content(CONTENT_FILE)
}

pub fn view(_config: &SiteConfig) -> Result<View, SiteError> {
    let items = load()?;
    let mut body = String::new();
    for item in &items {
        let mut lines = vec![item.date.clone(), item.body.clone()];
        if let Some(link) = &item.link {
            lines.push(link.clone());
        }
        body.push_str(&output::section(&item.title, &lines));
    }
    Ok(View::new("/news", "News", body))
}

pub fn schema() -> serde_json::Value {
    serde_json::json!({
        "name": "news",
        "content_file": CONTENT_FILE,
        "type": "array",
        "items": {
            "type": "object",
            "required": ["id", "title", "date", "body"],
            "properties": {
                "link": { "type": "string" }
            }
        }
    })
}
