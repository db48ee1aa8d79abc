//! Embedded site content.
//!
//! All content collections are baked into the binary at compile time for
//! hermetic deployment - no external data files required at runtime. Each
//! page owns one JSON file under `content/`.

use crate::core::error::SiteError;
use rust_embed::RustEmbed;
use serde::de::DeserializeOwned;
use sha2::{Digest, Sha256};

#[derive(RustEmbed)]
#[folder = "content/"]
#[include = "*.json"]
struct Content;

/// Raw lookup of an embedded content file by name (e.g. `members.json`).
pub fn get_content(name: &str) -> Option<Vec<u8>> {
    Content::get(name).map(|f| f.data.into_owned())
}

/// Names of all embedded content files, sorted for deterministic output.
pub fn list_content() -> Vec<String> {
    let mut names: Vec<String> = Content::iter().map(|n| n.to_string()).collect();
    names.sort();
    names
}

/// SHA256 fingerprint of an embedded content file.
pub fn content_digest(name: &str) -> Option<String> {
    let data = get_content(name)?;
    let hash = Sha256::digest(&data);
    Some(format!("{:x}", hash))
}

/// Parse an embedded content file into its record shape.
pub fn parse_content<T: DeserializeOwned>(name: &str) -> Result<T, SiteError> {
    let data = get_content(name)
        .ok_or_else(|| SiteError::NotFound(format!("embedded content not found: {}", name)))?;
    serde_json::from_slice(&data).map_err(SiteError::JsonError)
}
