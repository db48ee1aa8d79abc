//! Route registration: the static table mapping URL paths to page views.
//!
//! The table is plain configuration, not a dispatch problem: an ordered
//! const slice of `(path, display name, view builder)` triples. Declaration
//! order is navigation menu order. Adding a page: append one entry to
//! `ROUTES`.

use crate::core::config::SiteConfig;
use crate::core::error::SiteError;
use crate::core::view::View;
use crate::pages::{
    achievements, contact, facilities, gallery, home, members, news, projects, research, software,
};

/// A registered route: one URL path bound to exactly one page view.
#[derive(Debug)]
pub struct Route {
    /// Case-sensitive URL path, no dynamic segments.
    pub path: &'static str,
    /// Display name used in the navigation menu.
    pub name: &'static str,
    /// Builds the page view on demand. Runs at most once per route; the
    /// navigator caches the result.
    pub build: fn(&SiteConfig) -> Result<View, SiteError>,
}

/// All registered routes, in menu order.
pub const ROUTES: &[Route] = &[
    Route { path: "/", name: "Home", build: home::view },
    Route { path: "/members", name: "Members", build: members::view },
    Route { path: "/research", name: "Research Areas", build: research::view },
    Route { path: "/facilities", name: "Facilities", build: facilities::view },
    Route { path: "/achievements", name: "Achievements", build: achievements::view },
    Route { path: "/news", name: "News", build: news::view },
    Route { path: "/gallery", name: "Gallery", build: gallery::view },
    Route { path: "/software", name: "Software", build: software::view },
    Route { path: "/projects", name: "Projects", build: projects::view },
    Route { path: "/contact", name: "Contact", build: contact::view },
];

/// Exact-match lookup. Paths are case-sensitive and carry no parameters.
pub fn find(path: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|r| r.path == path)
}

pub fn routes() -> &'static [Route] {
    ROUTES
}
