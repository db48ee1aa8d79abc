//! Content validation harness.
//!
//! Runs the checks the build step is trusted to have performed: every
//! bundled collection parses against its schema, record ids are unique
//! within their collection, every route has content behind it, and a few
//! cross-record consistency checks (featured publications, DOI shape,
//! contact email). Deterministic: same bundled content always produces the
//! same results.

use crate::core::config::SiteConfig;
use crate::core::error::SiteError;
use crate::core::routes;
use crate::core::tui::{self, ItemStatus};
use crate::pages::{
    achievements, contact, facilities, gallery, home, members, news, projects, research, software,
};
use regex::Regex;

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub pass: u32,
    pub fail: u32,
    pub failures: Vec<String>,
}

impl ValidationReport {
    fn pass(&mut self, _message: &str) {
        self.pass += 1;
    }

    fn fail(&mut self, message: &str) {
        self.fail += 1;
        self.failures.push(message.to_string());
    }

    pub fn ok(&self) -> bool {
        self.fail == 0
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "pass": self.pass,
            "fail": self.fail,
            "failures": self.failures,
            "ok": self.ok(),
        })
    }
}

fn check_unique_ids<'a, I>(report: &mut ValidationReport, collection: &str, ids: I)
where
    I: Iterator<Item = &'a str>,
{
    let mut seen: Vec<&str> = Vec::new();
    let mut duplicates: Vec<&str> = Vec::new();
    for id in ids {
        if seen.contains(&id) {
            duplicates.push(id);
        } else {
            seen.push(id);
        }
    }
    if duplicates.is_empty() {
        report.pass(collection);
    } else {
        report.fail(&format!(
            "{}: duplicate record ids: {}",
            collection,
            duplicates.join(", ")
        ));
    }
}

fn validate_content_parses(report: &mut ValidationReport) {
    macro_rules! check_parse {
        ($name:expr, $load:expr) => {
            match $load {
                Ok(_) => report.pass($name),
                Err(e) => report.fail(&format!("{}: {}", $name, e)),
            }
        };
    }

    check_parse!(home::CONTENT_FILE, home::load());
    check_parse!(members::CONTENT_FILE, members::load());
    check_parse!(research::CONTENT_FILE, research::load());
    check_parse!(facilities::CONTENT_FILE, facilities::load());
    check_parse!(achievements::CONTENT_FILE, achievements::load());
    check_parse!(news::CONTENT_FILE, news::load());
    check_parse!(gallery::CONTENT_FILE, gallery::load());
    check_parse!(software::CONTENT_FILE, software::load());
    check_parse!(projects::CONTENT_FILE, projects::load());
    check_parse!(contact::CONTENT_FILE, contact::load());
}

fn validate_unique_ids(report: &mut ValidationReport) {
    if let Ok(data) = members::load() {
        for (name, group) in [
            ("members.researchers", &data.researchers),
            ("members.phd_students", &data.phd_students),
            ("members.ms_students", &data.ms_students),
            ("members.alumni", &data.alumni),
        ] {
            check_unique_ids(report, name, group.iter().map(|m| m.id.as_str()));
        }
    }
    if let Ok(areas) = research::load() {
        check_unique_ids(report, "research", areas.iter().map(|a| a.id.as_str()));
    }
    if let Ok(facilities) = facilities::load() {
        check_unique_ids(report, "facilities", facilities.iter().map(|f| f.id.as_str()));
    }
    if let Ok(data) = achievements::load() {
        check_unique_ids(
            report,
            "achievements.publications",
            data.publications.iter().map(|p| p.id.as_str()),
        );
        check_unique_ids(
            report,
            "achievements.patents",
            data.patents.iter().map(|p| p.id.as_str()),
        );
        check_unique_ids(
            report,
            "achievements.awards",
            data.awards.iter().map(|a| a.id.as_str()),
        );
    }
    if let Ok(items) = news::load() {
        check_unique_ids(report, "news", items.iter().map(|n| n.id.as_str()));
    }
    if let Ok(entries) = gallery::load() {
        check_unique_ids(report, "gallery", entries.iter().map(|g| g.id.as_str()));
    }
    if let Ok(tools) = software::load() {
        check_unique_ids(report, "software", tools.iter().map(|s| s.id.as_str()));
    }
    if let Ok(projects) = projects::load() {
        check_unique_ids(report, "projects", projects.iter().map(|p| p.id.as_str()));
    }
}

fn validate_route_coverage(report: &mut ValidationReport, config: &SiteConfig) {
    for route in routes::routes() {
        match (route.build)(config) {
            Ok(view) => {
                if view.route_path == route.path {
                    report.pass(route.path);
                } else {
                    report.fail(&format!(
                        "{}: view reports path '{}'",
                        route.path, view.route_path
                    ));
                }
            }
            Err(e) => report.fail(&format!("{}: view build failed: {}", route.path, e)),
        }
    }
}

fn validate_cross_references(report: &mut ValidationReport) {
    let Ok(data) = achievements::load() else {
        return;
    };

    // DOI shape per the Crossref registrant pattern.
    let doi_re = Regex::new(r"^10\.\d{4,9}/\S+$").unwrap();
    let bad_dois: Vec<&str> = data
        .publications
        .iter()
        .filter_map(|p| p.doi.as_deref())
        .filter(|doi| !doi_re.is_match(doi))
        .collect();
    if bad_dois.is_empty() {
        report.pass("doi format");
    } else {
        report.fail(&format!("malformed DOIs: {}", bad_dois.join(", ")));
    }

    if data.publications.iter().any(|p| p.featured) {
        report.pass("featured publications");
    } else {
        report.fail("no publication is flagged featured; the home page highlight is empty");
    }

    if let Ok(info) = contact::load() {
        if info.email.contains('@') {
            report.pass("contact email");
        } else {
            report.fail(&format!("contact email looks invalid: {}", info.email));
        }
    }
}

pub fn run_validation(config: &SiteConfig) -> ValidationReport {
    let mut report = ValidationReport::default();
    validate_content_parses(&mut report);
    validate_unique_ids(&mut report);
    validate_route_coverage(&mut report, config);
    validate_cross_references(&mut report);
    report
}

/// Text rendering of a report, one status line per check plus a summary box.
pub fn print_report(report: &ValidationReport) {
    tui::render_box("CONTENT VALIDATION", "Bundled collections", tui::BoxStyle::Info);
    for failure in &report.failures {
        tui::print_status_line(failure, ItemStatus::Fail);
    }
    tui::print_summary(report.pass as usize, report.fail as usize);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_content_validates_clean() {
        let report = run_validation(&SiteConfig::default());
        assert!(report.ok(), "failures: {:?}", report.failures);
        assert!(report.pass > 0);
    }

    #[test]
    fn test_duplicate_ids_are_reported() {
        let mut report = ValidationReport::default();
        check_unique_ids(&mut report, "sample", ["a", "b", "a"].into_iter());
        assert_eq!(report.fail, 1);
        assert!(report.failures[0].contains("sample"));
    }
}
