//! Facilities page: lab instruments and equipment.

use crate::core::config::SiteConfig;
use crate::core::error::SiteError;
use crate::core::view::View;
use crate::core::{assets, output};
use serde::{Deserialize, Serialize};

pub const CONTENT_FILE: &str = "facilities.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Facility {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub specifications: Vec<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
}

pub fn load() -> Result<Vec<Facility>, SiteError> {
    assets::parse_content(CONTENT_FILE)
}

pub fn view(config: &SiteConfig) -> Result<View, SiteError> {
    let facilities = load()?;
    let mut body = String::new();
    for f in &facilities {
        let mut lines = vec![f.description.clone()];
        match (&f.manufacturer, &f.model) {
            (Some(maker), Some(model)) => lines.push(format!("{} {}", maker, model)),
            (Some(maker), None) => lines.push(maker.clone()),
            (None, Some(model)) => lines.push(model.clone()),
            (None, None) => {}
        }
        lines.extend(f.specifications.iter().map(|s| format!("- {}", s)));
        lines.push(format!("[{}]", config.asset_url(&f.image)));
        body.push_str(&output::section(&f.name, &lines));
    }
    Ok(View::new("/facilities", "Facilities", body))
}

pub fn schema() -> serde_json::Value {
    serde_json::json!({
        "name": "facilities",
        "content_file": CONTENT_FILE,
        "type": "array",
        "items": {
            "type": "object",
            "required": ["id", "name", "description", "image"],
            "properties": {
                "specifications": { "type": "array", "items": "string" },
                "manufacturer": { "type": "string" },
                "model": { "type": "string" }
            }
        }
    })
}
