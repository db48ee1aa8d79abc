//! Site configuration and asset path resolution.
//!
//! One configuration surface feeds the whole core: the deployment base path
//! (for hosting under a non-root URL prefix) and the site name. Values come
//! from `Labsite.toml` at the project root when present, with an environment
//! override for the base path (`LABSITE_BASE_PATH`), falling back to
//! defaults.

use crate::core::error::SiteError;
use serde::Deserialize;
use std::path::Path;

pub const CONFIG_FILE: &str = "Labsite.toml";
pub const BASE_PATH_ENV: &str = "LABSITE_BASE_PATH";

const DEFAULT_BASE_PATH: &str = "/";
const DEFAULT_SITE_NAME: &str = "Computational Photonics Laboratory";

#[derive(Debug, Clone, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    base_path: Option<String>,
    #[serde(default)]
    site_name: Option<String>,
}

/// Resolved site configuration, constructed once at startup.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// URL path prefix the site is deployed under, e.g. `/lab/`.
    pub base_path: String,
    pub site_name: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            base_path: DEFAULT_BASE_PATH.to_string(),
            site_name: DEFAULT_SITE_NAME.to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration for a project directory.
    ///
    /// Precedence for the base path: `LABSITE_BASE_PATH` env var, then
    /// `Labsite.toml`, then the default.
    pub fn load(project_dir: &Path) -> Result<Self, SiteError> {
        let mut config = SiteConfig::default();

        let config_path = project_dir.join(CONFIG_FILE);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path).map_err(SiteError::IoError)?;
            let file: ConfigFile = toml::from_str(&content)
                .map_err(|e| SiteError::ConfigError(format!("{}: {}", CONFIG_FILE, e)))?;
            if let Some(base) = file.base_path {
                config.base_path = base;
            }
            if let Some(name) = file.site_name {
                config.site_name = name;
            }
        }

        if let Ok(base) = std::env::var(BASE_PATH_ENV) {
            if !base.is_empty() {
                config.base_path = base;
            }
        }

        Ok(config)
    }

    /// Resolve a relative asset path against the deployment base path.
    ///
    /// Pure string transform: a leading separator on `path` is stripped so
    /// the join never produces a double separator. No validation of the
    /// result, no error conditions.
    pub fn asset_url(&self, path: &str) -> String {
        let clean = path.strip_prefix('/').unwrap_or(path);
        if self.base_path.ends_with('/') {
            format!("{}{}", self.base_path, clean)
        } else {
            format!("{}/{}", self.base_path, clean)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_base(base: &str) -> SiteConfig {
        SiteConfig {
            base_path: base.to_string(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn test_asset_url_strips_leading_separator() {
        let config = config_with_base("/lab/");
        assert_eq!(config.asset_url("/img/x.png"), "/lab/img/x.png");
    }

    #[test]
    fn test_asset_url_idempotent_without_separator() {
        let config = config_with_base("/lab/");
        assert_eq!(config.asset_url("img/x.png"), "/lab/img/x.png");
    }

    #[test]
    fn test_asset_url_base_without_trailing_separator() {
        let config = config_with_base("/lab");
        assert_eq!(config.asset_url("img/x.png"), "/lab/img/x.png");
        assert_eq!(config.asset_url("/img/x.png"), "/lab/img/x.png");
    }

    #[test]
    fn test_asset_url_root_base() {
        let config = config_with_base("/");
        assert_eq!(config.asset_url("img/x.png"), "/img/x.png");
    }
}
