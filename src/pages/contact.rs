//! Contact page: the lab's singleton contact record.

use crate::core::config::SiteConfig;
use crate::core::error::SiteError;
use crate::core::view::View;
use crate::core::{assets, output};
use serde::{Deserialize, Serialize};

pub const CONTENT_FILE: &str = "contact.json";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapCoordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
    pub address: String,
    pub phone: String,
    pub fax: Option<String>,
    pub email: String,
    pub map_coordinates: Option<MapCoordinates>,
}

pub fn load() -> Result<ContactInfo, SiteError> {
    assets::parse_content(CONTENT_FILE)
}

pub fn view(_config: &SiteConfig) -> Result<View, SiteError> {
    let info = load()?;
    let mut lines = vec![info.address.clone(), format!("Tel {}", info.phone)];
    if let Some(fax) = &info.fax {
        lines.push(format!("Fax {}", fax));
    }
    lines.push(info.email.clone());
    if let Some(coords) = &info.map_coordinates {
        lines.push(format!("Map: {}, {}", coords.lat, coords.lng));
    }
    let body = output::section("Contact", &lines);
    Ok(View::new("/contact", "Contact", body))
}

pub fn schema() -> serde_json::Value {
    serde_json::json!({
        "name": "contact",
        "content_file": CONTENT_FILE,
        "type": "object",
        "required": ["address", "phone", "email"],
        "properties": {
            "fax": { "type": "string" },
            "map_coordinates": {
                "type": "object",
                "properties": { "lat": "number", "lng": "number" }
            }
        }
    })
}
