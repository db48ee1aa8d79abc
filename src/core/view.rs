//! Rendered page views.
//!
//! A `View` is the immutable result of building a page from its content
//! records. Views are cheap to clone and are cached per-route by the
//! navigator after their first build.

/// A rendered page, owned by whichever navigation currently displays it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    /// Route path this view was built for (e.g. `/members`).
    pub route_path: String,
    /// Page title shown in the navigation header.
    pub title: String,
    /// Rendered page body, one section per content block.
    pub body: String,
}

impl View {
    pub fn new(route_path: &str, title: &str, body: String) -> Self {
        View {
            route_path: route_path.to_string(),
            title: title.to_string(),
            body,
        }
    }
}
