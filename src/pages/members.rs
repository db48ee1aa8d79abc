//! Members page: the professor's profile plus current members and alumni.
//!
//! This page owns the richest content shape on the site. The professor
//! record nests ordered education and experience histories; the remaining
//! members are grouped by position.

use crate::core::config::SiteConfig;
use crate::core::error::SiteError;
use crate::core::view::View;
use crate::core::{assets, output};
use serde::{Deserialize, Serialize};

pub const CONTENT_FILE: &str = "members.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub field: String,
    pub institution: String,
    /// Period range, human-curated (e.g. `2003 - 2008`).
    pub period: String,
    pub thesis: Option<String>,
    pub advisor: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub period: String,
    pub position: String,
    pub department: Option<String>,
    pub institution: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Professor {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: Option<String>,
    pub image: String,
    pub bio: Option<String>,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub grants_and_awards: Vec<String>,
    #[serde(default)]
    pub memberships: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub position: String,
    pub email: String,
    pub image: String,
    pub research: Option<String>,
    pub year: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembersData {
    pub professor: Professor,
    pub researchers: Vec<Member>,
    pub phd_students: Vec<Member>,
    pub ms_students: Vec<Member>,
    pub alumni: Vec<Member>,
}

pub fn load() -> Result<MembersData, SiteError> {
    assets::parse_content(CONTENT_FILE)
}

fn member_line(config: &SiteConfig, m: &Member) -> String {
    let mut line = format!("{} - {} <{}>", m.name, m.position, m.email);
    if let Some(research) = &m.research {
        line.push_str(&format!(" | {}", research));
    }
    line.push_str(&format!(" [{}]", config.asset_url(&m.image)));
    line
}

pub fn view(config: &SiteConfig) -> Result<View, SiteError> {
    let data = load()?;
    let p = &data.professor;

    let mut profile = vec![format!("{}, {} <{}>", p.name, p.title, p.email)];
    if let Some(phone) = &p.phone {
        profile.push(format!("Tel {}", phone));
    }
    profile.push(format!("[{}]", config.asset_url(&p.image)));
    if let Some(bio) = &p.bio {
        profile.push(bio.clone());
    }

    let education: Vec<String> = p
        .education
        .iter()
        .map(|e| {
            let mut line = format!("{} | {} in {}, {}", e.period, e.degree, e.field, e.institution);
            if let Some(thesis) = &e.thesis {
                line.push_str(&format!(" | Thesis: {}", thesis));
            }
            if let Some(advisor) = &e.advisor {
                line.push_str(&format!(" (advisor: {})", advisor));
            }
            line
        })
        .collect();

    let experience: Vec<String> = p
        .experience
        .iter()
        .map(|e| {
            let department = e
                .department
                .as_deref()
                .map(|d| format!("{}, ", d))
                .unwrap_or_default();
            format!("{} | {}, {}{}", e.period, e.position, department, e.institution)
        })
        .collect();

    let mut body = output::section("Professor", &profile);
    body.push_str(&output::section("Education", &education));
    body.push_str(&output::section("Experience", &experience));
    if !p.grants_and_awards.is_empty() {
        body.push_str(&output::section("Grants and Awards", &p.grants_and_awards));
    }
    if !p.memberships.is_empty() {
        body.push_str(&output::section(
            "Professional Activities / Memberships",
            &p.memberships,
        ));
    }

    for (title, group) in [
        ("Researchers", &data.researchers),
        ("PhD Students", &data.phd_students),
        ("MS Students", &data.ms_students),
        ("Alumni", &data.alumni),
    ] {
        if group.is_empty() {
            continue;
        }
        let lines: Vec<String> = group.iter().map(|m| member_line(config, m)).collect();
        body.push_str(&output::section(title, &lines));
    }

    Ok(View::new("/members", "Members", body))
}

pub fn schema() -> serde_json::Value {
    serde_json::json!({
        "name": "members",
        "content_file": CONTENT_FILE,
        "type": "object",
        "properties": {
            "professor": {
                "type": "object",
                "required": ["name", "title", "email", "image", "education", "experience"],
                "properties": {
                    "education": { "type": "array", "items": "Education (ordered)" },
                    "experience": { "type": "array", "items": "Experience (ordered)" }
                }
            },
            "researchers": { "type": "array", "items": "Member" },
            "phd_students": { "type": "array", "items": "Member" },
            "ms_students": { "type": "array", "items": "Member" },
            "alumni": { "type": "array", "items": "Member" }
        }
    })
}
