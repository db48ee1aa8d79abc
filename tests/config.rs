use labsite::core::config::{SiteConfig, BASE_PATH_ENV, CONFIG_FILE};
use std::fs;
use std::sync::Mutex;
use tempfile::tempdir;

// Loading reads the process environment, so tests that call it take this
// lock to stay deterministic under the parallel test runner.
static ENV_LOCK: Mutex<()> = Mutex::new(());

#[test]
fn test_defaults_when_no_config_file() {
    let _guard = ENV_LOCK.lock().unwrap();
    let tmp = tempdir().unwrap();
    let config = SiteConfig::load(tmp.path()).unwrap();
    assert_eq!(config.base_path, "/");
    assert!(!config.site_name.is_empty());
}

#[test]
fn test_malformed_config_file_is_an_error() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join(CONFIG_FILE), "base_path = [not a string").unwrap();
    assert!(SiteConfig::load(tmp.path()).is_err());
}

#[test]
fn test_config_file_and_env_override_precedence() {
    let _guard = ENV_LOCK.lock().unwrap();
    let tmp = tempdir().unwrap();
    fs::write(
        tmp.path().join(CONFIG_FILE),
        "base_path = \"/photonics/\"\nsite_name = \"CPL\"\n",
    )
    .unwrap();

    let config = SiteConfig::load(tmp.path()).unwrap();
    assert_eq!(config.base_path, "/photonics/");
    assert_eq!(config.site_name, "CPL");

    std::env::set_var(BASE_PATH_ENV, "/override/");
    let config = SiteConfig::load(tmp.path()).unwrap();
    std::env::remove_var(BASE_PATH_ENV);

    assert_eq!(config.base_path, "/override/");
    // Only the base path is env-overridable.
    assert_eq!(config.site_name, "CPL");
}

#[test]
fn test_asset_url_from_loaded_config() {
    let _guard = ENV_LOCK.lock().unwrap();
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join(CONFIG_FILE), "base_path = \"/lab/\"\n").unwrap();
    let config = SiteConfig::load(tmp.path()).unwrap();

    assert_eq!(config.asset_url("/img/x.png"), "/lab/img/x.png");
    assert_eq!(config.asset_url("img/x.png"), "/lab/img/x.png");
}
