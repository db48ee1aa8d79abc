//! labsite: the content core of the Computational Photonics Laboratory website.
//!
//! Everything the site renders is bundled into this binary: content
//! collections (members, research areas, facilities, achievements, news,
//! gallery, software, projects, contact) embedded as JSON, a static route
//! table mapping URL paths to pages, and a navigator that builds each
//! page's view lazily on first visit.
//!
//! # Architecture
//!
//! - **Route table**: plain ordered configuration (`core/routes.rs`), menu
//!   order = declaration order, no dynamic segments.
//! - **Navigator**: owns the current view, per-route view cache, history,
//!   and viewport scroll. Scroll resets to the top on every navigation.
//! - **Pages**: one module per route (`pages/`), each owning its record
//!   shapes, loader, renderer, and schema.
//! - **Content**: immutable after load; trusted to be produced by a build
//!   step, re-checked by `labsite validate`.
//!
//! # Examples
//!
//! ```bash
//! # List the navigation menu
//! labsite routes
//!
//! # Render a page
//! labsite show /members
//!
//! # Validate bundled content
//! labsite validate
//!
//! # Assemble the professor's CV
//! labsite cv
//!
//! # Resolve an asset path against the deployment base path
//! labsite asset img/logo.png --base /lab/
//! ```

pub mod core;
pub mod pages;

use core::config::SiteConfig;
use core::navigator::{Navigator, Outcome};
use core::{cv, error, routes, tui, validate};

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::collections::BTreeMap;

#[derive(Parser, Debug)]
#[clap(
    name = "labsite",
    version = env!("CARGO_PKG_VERSION"),
    about = "Content core and navigation layer of the Computational Photonics Laboratory website"
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered routes in navigation menu order
    #[clap(name = "routes", visible_alias = "r")]
    Routes,

    /// Navigate to a path and print the rendered page
    #[clap(name = "show", visible_alias = "s")]
    Show {
        /// URL path of the page (e.g. /members)
        #[clap(value_parser)]
        path: String,
        /// Output format
        #[clap(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Validate bundled content collections
    #[clap(name = "validate", visible_alias = "v")]
    Validate {
        /// Output format
        #[clap(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Dump page content schemas
    #[clap(name = "schema")]
    Schema {
        /// Optional: filter by page name
        #[clap(long)]
        page: Option<String>,
        /// Force deterministic output (removes volatile fields)
        #[clap(long)]
        deterministic: bool,
    },

    /// Assemble the professor's CV from the bundled content
    #[clap(name = "cv")]
    Cv,

    /// Resolve an asset path against the deployment base path
    #[clap(name = "asset")]
    Asset {
        /// Relative asset path (leading separator allowed)
        #[clap(value_parser)]
        path: String,
        /// Override the configured base path
        #[clap(long)]
        base: Option<String>,
    },

    /// Show version information
    #[clap(name = "version")]
    Version,
}

fn page_schemas() -> BTreeMap<&'static str, serde_json::Value> {
    let mut schemas = BTreeMap::new();
    schemas.insert("home", pages::home::schema());
    schemas.insert("members", pages::members::schema());
    schemas.insert("research", pages::research::schema());
    schemas.insert("facilities", pages::facilities::schema());
    schemas.insert("achievements", pages::achievements::schema());
    schemas.insert("news", pages::news::schema());
    schemas.insert("gallery", pages::gallery::schema());
    schemas.insert("software", pages::software::schema());
    schemas.insert("projects", pages::projects::schema());
    schemas.insert("contact", pages::contact::schema());
    schemas
}

pub fn run() -> Result<(), error::SiteError> {
    let cli = Cli::parse();
    let current_dir = std::env::current_dir()?;
    let config = SiteConfig::load(&current_dir)?;

    match cli.command {
        Command::Version => {
            println!("v{}", env!("CARGO_PKG_VERSION"));
        }
        Command::Routes => {
            println!("{}", config.site_name.bold());
            for route in routes::routes() {
                println!("{:<15} {}", route.path, route.name);
            }
        }
        Command::Show { path, format } => {
            let mut navigator = Navigator::new(config);
            let outcome = navigator.navigate(&path)?;
            let view = navigator
                .current_view()
                .ok_or_else(|| error::SiteError::NotFound(path.clone()))?;

            if format == "json" {
                let envelope = serde_json::json!({
                    "path": view.route_path,
                    "title": view.title,
                    "body": view.body,
                    "outcome": match outcome {
                        Outcome::Rendered => "rendered",
                        Outcome::NotFound => "not_found",
                        Outcome::Superseded => "superseded",
                    },
                    "scroll": [navigator.scroll().0, navigator.scroll().1],
                });
                println!("{}", serde_json::to_string_pretty(&envelope)?);
            } else {
                let style = if outcome == Outcome::NotFound {
                    tui::BoxStyle::Warning
                } else {
                    tui::BoxStyle::Info
                };
                tui::render_box(&view.title, &view.route_path, style);
                println!();
                println!("{}", view.body);
            }
        }
        Command::Validate { format } => {
            let report = validate::run_validation(&config);
            if format == "json" {
                println!("{}", serde_json::to_string_pretty(&report.to_json())?);
            } else {
                validate::print_report(&report);
            }
            if !report.ok() {
                return Err(error::SiteError::ValidationError(format!(
                    "{} content check(s) failed",
                    report.fail
                )));
            }
        }
        Command::Schema {
            page,
            deterministic,
        } => {
            let schemas = page_schemas();
            let output = if let Some(name) = page {
                schemas
                    .get(name.as_str())
                    .cloned()
                    .unwrap_or(serde_json::json!({ "error": "page not found" }))
            } else {
                let mut envelope = serde_json::json!({
                    "schema_version": "1.0.0",
                    "pages": schemas
                });
                if !deterministic {
                    let now = std::time::SystemTime::now()
                        .duration_since(std::time::UNIX_EPOCH)
                        .map(|d| d.as_secs())
                        .unwrap_or(0);
                    if let Some(obj) = envelope.as_object_mut() {
                        obj.insert("generated_at".to_string(), serde_json::json!(now));
                    }
                }
                envelope
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Command::Cv => {
            print!("{}", cv::render()?);
        }
        Command::Asset { path, base } => {
            let config = match base {
                Some(base_path) => SiteConfig {
                    base_path,
                    ..config
                },
                None => config,
            };
            println!("{}", config.asset_url(&path));
        }
    }
    Ok(())
}
