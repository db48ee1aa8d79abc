use serde_json::Value;
use std::process::Command;
use tempfile::tempdir;

// Run the binary from an empty directory so the repo's own Labsite.toml
// does not leak into the contract under test.
fn run(args: &[&str]) -> (bool, String) {
    let tmp = tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_labsite"))
        .current_dir(tmp.path())
        .args(args)
        .output()
        .expect("failed to execute labsite");
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).to_string(),
    )
}

fn run_json(args: &[&str]) -> Value {
    let (ok, stdout) = run(args);
    assert!(ok, "labsite {:?} failed", args);
    serde_json::from_str(&stdout).expect("parse json output")
}

#[test]
fn test_routes_lists_menu_in_declaration_order() {
    let (ok, stdout) = run(&["routes"]);
    assert!(ok);
    let members = stdout.find("/members").unwrap();
    let contact = stdout.find("/contact").unwrap();
    assert!(members < contact);
    assert!(stdout.contains("Research Areas"));
}

#[test]
fn test_show_renders_registered_page_as_json() {
    let envelope = run_json(&["show", "/members", "--format", "json"]);
    assert_eq!(envelope["path"], "/members");
    assert_eq!(envelope["outcome"], "rendered");
    assert_eq!(envelope["scroll"], serde_json::json!([0, 0]));
    assert!(envelope["body"].as_str().unwrap().contains("Professor"));
}

#[test]
fn test_show_unregistered_path_is_a_state_not_a_failure() {
    let envelope = run_json(&["show", "/nonexistent", "--format", "json"]);
    assert_eq!(envelope["outcome"], "not_found");
    assert_eq!(envelope["title"], "Page Not Found");
}

#[test]
fn test_validate_passes_on_bundled_content() {
    let report = run_json(&["validate", "--format", "json"]);
    assert_eq!(report["ok"], true);
    assert_eq!(report["fail"], 0);
    assert!(report["pass"].as_u64().unwrap() > 0);
}

#[test]
fn test_schema_deterministic_output_is_stable() {
    let first = run_json(&["schema", "--deterministic"]);
    let second = run_json(&["schema", "--deterministic"]);
    assert_eq!(first, second);
    assert_eq!(first["schema_version"], "1.0.0");
    assert!(first.get("generated_at").is_none());
    assert!(first["pages"]["projects"]["items"]["properties"]["status"].is_object());
}

#[test]
fn test_schema_single_page_filter() {
    let schema = run_json(&["schema", "--page", "contact"]);
    assert_eq!(schema["name"], "contact");

    let missing = run_json(&["schema", "--page", "blog"]);
    assert_eq!(missing["error"], "page not found");
}

#[test]
fn test_cv_assembles_profile_publications_and_projects() {
    let (ok, stdout) = run(&["cv"]);
    assert!(ok);
    assert!(stdout.contains("## Curriculum Vitae"));
    assert!(stdout.contains("Jiwon Kang, Associate Professor"));
    assert!(stdout.contains("## Publications"));
    let newest = stdout.find("Nature Photonics").unwrap();
    let oldest = stdout.find("Optics Express").unwrap();
    assert!(newest < oldest, "publications must be newest-first");
    assert!(stdout.contains("**J. Kang**"));
    assert!(stdout.contains("Ongoing Projects"));
}

#[test]
fn test_unknown_format_value_is_rejected() {
    let (ok, _) = run(&["show", "/members", "--format", "yaml"]);
    assert!(!ok, "unrecognized --format must be a CLI error");
    let (ok, _) = run(&["validate", "--format", "xml"]);
    assert!(!ok);
}

#[test]
fn test_schema_default_output_carries_unix_timestamp() {
    let envelope = run_json(&["schema"]);
    let generated_at = envelope["generated_at"]
        .as_u64()
        .expect("generated_at must be UNIX seconds");
    // 2020-01-01 in UNIX seconds; sanity bound, not an exact clock check.
    assert!(generated_at > 1_577_836_800);
}

#[test]
fn test_asset_resolution_strips_leading_separator() {
    let (ok, stdout) = run(&["asset", "/img/x.png", "--base", "/lab/"]);
    assert!(ok);
    assert_eq!(stdout.trim(), "/lab/img/x.png");

    let (ok, stdout) = run(&["asset", "img/x.png", "--base", "/lab/"]);
    assert!(ok);
    assert_eq!(stdout.trim(), "/lab/img/x.png");
}

#[test]
fn test_version_prints_crate_version() {
    let (ok, stdout) = run(&["version"]);
    assert!(ok);
    assert_eq!(stdout.trim(), format!("v{}", env!("CARGO_PKG_VERSION")));
}
