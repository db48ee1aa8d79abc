//! The professor's CV, assembled from the bundled content.
//!
//! Text rendering of the lab's CV: profile and career timeline from the
//! members collection, journal publications newest-first with the
//! professor's name highlighted, and funded projects grouped by status.

use crate::core::error::SiteError;
use crate::core::output;
use crate::pages::achievements::{self, Publication, PublicationType};
use crate::pages::members;
use crate::pages::projects::{self, Project, ProjectStatus};
use crate::pages::text::Text;
use regex::Regex;

/// Abbreviate a western-order name: `Dongwoo Lim` becomes `D. Lim`,
/// `Dong-Kyu Kim` becomes `D.-K. Kim`. Single-word names pass through.
fn abbreviate_name(full: &str) -> String {
    let parts: Vec<&str> = full.split_whitespace().collect();
    let Some((last, given)) = parts.split_last() else {
        return full.to_string();
    };
    if given.is_empty() {
        return full.to_string();
    }
    let initials: String = given
        .iter()
        .map(|part| {
            part.split('-')
                .filter_map(|p| p.chars().next())
                .map(|c| format!("{}.", c.to_uppercase()))
                .collect::<Vec<_>>()
                .join("-")
        })
        .collect();
    format!("{} {}", initials, last)
}

/// Strip authorship markers. A `*` marks the corresponding author.
fn clean_author(author: &str) -> (String, bool) {
    let corresponding = author.contains('*');
    let name: String = author.chars().filter(|c| !"^*+".contains(*c)).collect();
    (name.trim().to_string(), corresponding)
}

fn format_authors(authors: &[String], highlight: &str) -> String {
    authors
        .iter()
        .map(|author| {
            let (name, corresponding) = clean_author(author);
            let mut out = abbreviate_name(&name);
            if name.to_lowercase().contains(&highlight.to_lowercase()) {
                out = format!("**{}**", out);
            }
            if corresponding {
                out.push('*');
            }
            out
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// First author, or corresponding author marked with `*`.
fn is_lead_author(authors: &[String], name: &str) -> bool {
    let needle = name.to_lowercase();
    if let Some(first) = authors.first() {
        if clean_author(first).0.to_lowercase().contains(&needle) {
            return true;
        }
    }
    authors.iter().any(|a| {
        let (clean, corresponding) = clean_author(a);
        corresponding && clean.to_lowercase().contains(&needle)
    })
}

/// Compact period display: `2023.03 - 2028.02` becomes `23.03 ~ 28.02`.
fn shorten_period(period: &str) -> String {
    let re = Regex::new(r"(\d{4})\.").unwrap();
    let shortened = re.replace_all(period, |caps: &regex::Captures| {
        format!("{}.", &caps[1][2..])
    });
    shortened.replace(" - ", " ~ ")
}

fn start_year(period: &str) -> u32 {
    Regex::new(r"\d{4}")
        .unwrap()
        .find(period)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// The CV is an English document, so the English string wins when present.
fn english_first(text: &Text) -> &str {
    text.english().unwrap_or_else(|| text.primary())
}

fn publication_entry(number: usize, p: &Publication, highlight: &str) -> String {
    let mut line = format!(
        "{}. {}, \"{}\"",
        number,
        format_authors(&p.authors, highlight),
        p.title
    );
    if let Some(journal) = &p.journal {
        line.push_str(&format!(", {}", journal));
        if let Some(impact) = p.impact_factor {
            line.push_str(&format!(" (IF {})", impact));
        }
    }
    if let Some(volume) = &p.volume {
        line.push_str(&format!(", {}", volume));
    }
    if let Some(pages) = &p.pages {
        line.push_str(&format!(", {}", pages));
    }
    if p.status.is_some() {
        line.push_str(", Submitted");
    }
    line.push('.');
    if let Some(doi) = &p.doi {
        line.push_str(&format!(" [doi:{}]", doi));
    }
    if is_lead_author(&p.authors, highlight) {
        line.push_str(" †");
    }
    line
}

fn project_entry(p: &Project) -> String {
    let mut line = english_first(&p.title).to_string();
    if p.title.english().is_some() {
        line.push_str(&format!(" ({})", p.title.primary()));
    }
    line.push_str(&format!(
        " | {} | {} | {}",
        shorten_period(english_first(&p.period)),
        english_first(&p.funding_agency),
        english_first(&p.role)
    ));
    if let Some(amount) = &p.funding_amount {
        line.push_str(&format!(" | {}", english_first(amount)));
    }
    line
}

pub fn render() -> Result<String, SiteError> {
    let members = members::load()?;
    let achievements = achievements::load()?;
    let all_projects = projects::load()?;
    let professor = &members.professor;

    let mut header = vec![format!("{}, {}", professor.name, professor.title)];
    // Current affiliation, taken from the open-ended experience entry.
    if let Some(current) = professor
        .experience
        .iter()
        .find(|e| e.period.to_lowercase().contains("present"))
    {
        header.push(format!("{}, {}", current.position, current.institution));
    }
    if let Some(phone) = &professor.phone {
        header.push(format!("Tel {}", phone));
    }
    header.push(professor.email.clone());
    let mut body = output::section("Curriculum Vitae", &header);

    if let Some(bio) = &professor.bio {
        body.push_str(&output::section("Summary", &[bio.clone()]));
    }

    let experience: Vec<String> = professor
        .experience
        .iter()
        .map(|e| format!("{} | {}, {}", e.period, e.position, e.institution))
        .collect();
    body.push_str(&output::section("Professional Experience", &experience));

    let education: Vec<String> = professor
        .education
        .iter()
        .map(|e| {
            let mut line = format!("{} | {}, {}, {}", e.period, e.degree, e.field, e.institution);
            if let Some(thesis) = &e.thesis {
                line.push_str(&format!(" | {}", thesis));
                if let Some(advisor) = &e.advisor {
                    line.push_str(&format!(" ({})", advisor));
                }
            }
            line
        })
        .collect();
    body.push_str(&output::section("Education", &education));

    if !professor.grants_and_awards.is_empty() {
        body.push_str(&output::section("Grants and Awards", &professor.grants_and_awards));
    }
    if !professor.memberships.is_empty() {
        body.push_str(&output::section("Professional Activities", &professor.memberships));
    }

    // Journal publications only, newest first.
    let mut journal_pubs: Vec<&Publication> = achievements
        .publications
        .iter()
        .filter(|p| p.kind != Some(PublicationType::Conference))
        .collect();
    journal_pubs.sort_by(|a, b| b.year.cmp(&a.year).then_with(|| b.id.cmp(&a.id)));
    let (submitted, published): (Vec<&Publication>, Vec<&Publication>) =
        journal_pubs.into_iter().partition(|p| p.status.is_some());

    let mut pub_lines = vec!["† first-author or corresponding-author publication".to_string()];
    if !submitted.is_empty() {
        pub_lines.push(format!("In Submission ({})", submitted.len()));
        for (i, p) in submitted.iter().enumerate() {
            pub_lines.push(publication_entry(i + 1, p, &professor.name));
        }
    }
    pub_lines.push(format!("Journal Articles (Total: {})", published.len()));
    let mut current_year = None;
    for (i, p) in published.iter().enumerate() {
        if current_year != Some(p.year) {
            pub_lines.push(p.year.to_string());
            current_year = Some(p.year);
        }
        pub_lines.push(publication_entry(i + 1, p, &professor.name));
    }
    body.push_str(&output::section("Publications", &pub_lines));

    let mut project_lines = Vec::new();
    for (label, status) in [
        ("Ongoing Projects", ProjectStatus::Ongoing),
        ("Completed Projects", ProjectStatus::Completed),
    ] {
        let mut group: Vec<&Project> = all_projects.iter().filter(|p| p.status == status).collect();
        if group.is_empty() {
            continue;
        }
        group.sort_by_key(|p| std::cmp::Reverse(start_year(english_first(&p.period))));
        project_lines.push(format!("{} ({})", label, group.len()));
        for p in group {
            project_lines.push(project_entry(p));
        }
    }
    body.push_str(&output::section("Research Projects", &project_lines));

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abbreviate_name_handles_hyphens() {
        assert_eq!(abbreviate_name("Dongwoo Lim"), "D. Lim");
        assert_eq!(abbreviate_name("Dong-Kyu Kim"), "D.-K. Kim");
        assert_eq!(abbreviate_name("Ho Won Lee"), "H.W. Lee");
        assert_eq!(abbreviate_name("Optica"), "Optica");
    }

    #[test]
    fn test_corresponding_marker_survives_abbreviation() {
        let authors = vec!["Sena Park".to_string(), "Jiwon Kang*".to_string()];
        assert_eq!(
            format_authors(&authors, "Jiwon Kang"),
            "S. Park, **J. Kang***"
        );
        assert!(is_lead_author(&authors, "Jiwon Kang"));
        assert!(!is_lead_author(&authors, "Sena Park"));
    }

    #[test]
    fn test_first_author_counts_as_lead() {
        let authors = vec!["Jiwon Kang".to_string(), "Hana Cho".to_string()];
        assert!(is_lead_author(&authors, "Jiwon Kang"));
    }

    #[test]
    fn test_shorten_period() {
        assert_eq!(shorten_period("2023.03 - 2028.02"), "23.03 ~ 28.02");
        assert_eq!(shorten_period("2020 - 2023"), "2020 ~ 2023");
    }

    #[test]
    fn test_render_orders_publications_newest_first() {
        let cv = render().unwrap();
        let newest = cv.find("Nature Photonics").unwrap();
        let oldest = cv.find("Optics Express").unwrap();
        assert!(newest < oldest);
        assert!(cv.contains("**J. Kang**"));
        // Conference papers stay off the CV.
        assert!(!cv.contains("CLEO"));
    }

    #[test]
    fn test_render_covers_profile_and_projects() {
        let cv = render().unwrap();
        for heading in [
            "## Curriculum Vitae",
            "## Professional Experience",
            "## Education",
            "## Publications",
            "## Research Projects",
        ] {
            assert!(cv.contains(heading), "missing {}", heading);
        }
        assert!(cv.contains("In Submission (1)"));
        assert!(cv.contains("Ongoing Projects (2)"));
        assert!(cv.contains("23.03 ~ 28.02"));
        assert!(cv.contains("Exascale Adjoint Electromagnetic Solver"));
    }
}
