//! The navigator owns all navigation state for the site.
//!
//! One navigator is constructed at startup and held for the application's
//! lifetime. It maps navigation requests to views through the static route
//! table, builds each route's view lazily on first visit (cached after),
//! keeps back/forward history, and resets the viewport scroll offset to the
//! top on every completed navigation.
//!
//! Navigation is two-phase: `start` resolves the path and claims the current
//! navigation generation; `complete` performs the (possibly deferred) view
//! build and installs the result. A request completed after a newer `start`
//! is superseded and has no visible effect, which is how a rapid second
//! navigation cancels a stale in-flight load.

use crate::core::config::SiteConfig;
use crate::core::error::SiteError;
use crate::core::routes::{self, Route};
use crate::core::view::View;
use rustc_hash::FxHashMap;

/// Result of completing a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The matched view was installed.
    Rendered,
    /// The path matched no route; the built-in not-found view was installed.
    NotFound,
    /// A newer navigation started before this one completed; dropped.
    Superseded,
}

/// An in-flight navigation, produced by [`Navigator::start`].
#[derive(Debug, Clone)]
pub struct NavRequest {
    path: String,
    generation: u64,
    route: Option<&'static Route>,
}

impl NavRequest {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_not_found(&self) -> bool {
        self.route.is_none()
    }
}

pub struct Navigator {
    config: SiteConfig,
    routes: &'static [Route],
    current: Option<View>,
    /// Lazily built views, at most one build per route.
    cache: FxHashMap<&'static str, View>,
    history: Vec<String>,
    forward: Vec<String>,
    scroll: (u32, u32),
    generation: u64,
    /// Path of the last navigation that failed to load, for `retry`.
    last_failed: Option<String>,
}

impl Navigator {
    pub fn new(config: SiteConfig) -> Self {
        Self::with_routes(routes::routes(), config)
    }

    /// A navigator over an explicit route table.
    pub fn with_routes(routes: &'static [Route], config: SiteConfig) -> Self {
        Navigator {
            config,
            routes,
            current: None,
            cache: FxHashMap::default(),
            history: Vec::new(),
            forward: Vec::new(),
            scroll: (0, 0),
            generation: 0,
            last_failed: None,
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn current_view(&self) -> Option<&View> {
        self.current.as_ref()
    }

    pub fn scroll(&self) -> (u32, u32) {
        self.scroll
    }

    /// Viewport scroll mutation (link targets, user scrolling).
    pub fn scroll_to(&mut self, x: u32, y: u32) {
        self.scroll = (x, y);
    }

    pub fn last_failed(&self) -> Option<&str> {
        self.last_failed.as_deref()
    }

    /// Begin a navigation. Resolves the route table entry (an unmatched path
    /// is the not-found state, not an error) and supersedes any in-flight
    /// request.
    pub fn start(&mut self, path: &str) -> NavRequest {
        self.generation += 1;
        NavRequest {
            path: path.to_string(),
            generation: self.generation,
            route: self.find(path),
        }
    }

    /// Complete a navigation: build the view (first visit only; cached
    /// after) and install it. Stale requests are dropped with no visible
    /// effect. A failed build leaves the previous view current and records
    /// the path for [`Navigator::retry`].
    pub fn complete(&mut self, request: NavRequest) -> Result<Outcome, SiteError> {
        if request.generation != self.generation {
            return Ok(Outcome::Superseded);
        }

        let (view, outcome) = match request.route {
            Some(route) => {
                let view = match self.cached_or_build(route) {
                    Ok(v) => v,
                    Err(e) => {
                        self.last_failed = Some(request.path.clone());
                        return Err(SiteError::ViewLoadError(format!(
                            "{}: {}",
                            request.path, e
                        )));
                    }
                };
                (view, Outcome::Rendered)
            }
            // No catch-all route is registered; surface an explicit
            // not-found view rather than leaving navigation inert.
            None => (not_found_view(&request.path), Outcome::NotFound),
        };

        self.install(view);
        Ok(outcome)
    }

    /// One-shot navigation: `start` + `complete`.
    pub fn navigate(&mut self, path: &str) -> Result<Outcome, SiteError> {
        let request = self.start(path);
        self.complete(request)
    }

    /// Re-run the last failed navigation with a fresh generation.
    pub fn retry(&mut self) -> Result<Outcome, SiteError> {
        let path = self.last_failed.take().ok_or_else(|| {
            SiteError::NotFound("no failed navigation to retry".to_string())
        })?;
        self.navigate(&path)
    }

    /// History back. Returns false when there is nothing to go back to.
    /// Scroll resets to the top even when navigating backward; prior scroll
    /// offsets are never restored. A failed re-render leaves the stacks and
    /// the current view untouched.
    pub fn back(&mut self) -> Result<bool, SiteError> {
        let Some(previous) = self.history.last().cloned() else {
            return Ok(false);
        };
        self.generation += 1;
        let view = self.rerender(&previous)?;
        self.history.pop();
        if let Some(current) = self.current.take() {
            self.forward.push(current.route_path.clone());
        }
        self.current = Some(view);
        self.scroll = (0, 0);
        Ok(true)
    }

    /// History forward, mirror of [`Navigator::back`].
    pub fn forward(&mut self) -> Result<bool, SiteError> {
        let Some(next) = self.forward.last().cloned() else {
            return Ok(false);
        };
        self.generation += 1;
        let view = self.rerender(&next)?;
        self.forward.pop();
        if let Some(current) = self.current.take() {
            self.history.push(current.route_path.clone());
        }
        self.current = Some(view);
        self.scroll = (0, 0);
        Ok(true)
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn can_forward(&self) -> bool {
        !self.forward.is_empty()
    }

    fn cached_or_build(&mut self, route: &'static Route) -> Result<View, SiteError> {
        if let Some(view) = self.cache.get(route.path) {
            return Ok(view.clone());
        }
        let view = (route.build)(&self.config)?;
        self.cache.insert(route.path, view.clone());
        Ok(view)
    }

    fn install(&mut self, view: View) {
        if let Some(previous) = self.current.take() {
            self.history.push(previous.route_path);
            self.forward.clear();
        }
        self.current = Some(view);
        self.scroll = (0, 0);
        self.last_failed = None;
    }

    fn find(&self, path: &str) -> Option<&'static Route> {
        self.routes.iter().find(|r| r.path == path)
    }

    fn rerender(&mut self, path: &str) -> Result<View, SiteError> {
        match self.find(path) {
            Some(route) => self.cached_or_build(route),
            None => Ok(not_found_view(path)),
        }
    }
}

/// The explicit not-found state. Never cached: not a registered route.
pub fn not_found_view(path: &str) -> View {
    View::new(
        path,
        "Page Not Found",
        format!(
            "404 - no page is registered at '{}'.\nUse the navigation menu or go back.",
            path
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stable_build(_config: &SiteConfig) -> Result<View, SiteError> {
        Ok(View::new("/stable", "Stable", "stable body".to_string()))
    }

    fn failing_build(_config: &SiteConfig) -> Result<View, SiteError> {
        Err(SiteError::ViewLoadError("malformed content".to_string()))
    }

    // The bundled route table never contains a failing builder, so load
    // failures are exercised over a dedicated table.
    static TABLE: &[Route] = &[
        Route { path: "/stable", name: "Stable", build: stable_build },
        Route { path: "/broken", name: "Broken", build: failing_build },
    ];

    fn navigator() -> Navigator {
        Navigator::with_routes(TABLE, SiteConfig::default())
    }

    #[test]
    fn test_failed_build_keeps_previous_view_current() {
        let mut nav = navigator();
        nav.navigate("/stable").unwrap();

        let result = nav.navigate("/broken");
        assert!(matches!(result, Err(SiteError::ViewLoadError(_))));
        assert_eq!(nav.current_view().unwrap().route_path, "/stable");
        assert_eq!(nav.last_failed(), Some("/broken"));
        assert_eq!(nav.history_len(), 0);
    }

    #[test]
    fn test_retry_reruns_the_failed_navigation() {
        let mut nav = navigator();
        assert!(nav.navigate("/broken").is_err());

        // Still failing on retry; the failure stays retryable.
        assert!(nav.retry().is_err());
        assert_eq!(nav.last_failed(), Some("/broken"));
    }

    #[test]
    fn test_failed_back_traversal_loses_nothing() {
        let mut nav = navigator();
        nav.navigate("/stable").unwrap();
        // A history entry whose view is neither cached nor buildable.
        nav.history.push("/broken".to_string());

        assert!(nav.back().is_err());
        assert_eq!(nav.history_len(), 1, "popped entry must be retained");
        assert_eq!(nav.current_view().unwrap().route_path, "/stable");
        assert!(!nav.can_forward());

        nav.forward.push("/broken".to_string());
        assert!(nav.forward().is_err());
        assert!(nav.can_forward(), "forward entry must be retained");
        assert_eq!(nav.current_view().unwrap().route_path, "/stable");
    }
}
