use labsite::core::config::SiteConfig;
use labsite::core::navigator::{Navigator, Outcome};
use labsite::core::routes;

fn navigator() -> Navigator {
    Navigator::new(SiteConfig::default())
}

#[test]
fn test_every_registered_path_renders() {
    let mut nav = navigator();
    for route in routes::routes() {
        let outcome = nav.navigate(route.path).unwrap();
        assert_eq!(outcome, Outcome::Rendered, "route {}", route.path);
        let view = nav.current_view().expect("view installed");
        assert_eq!(view.route_path, route.path);
        assert_eq!(view.title, route.name);
        assert!(!view.body.is_empty(), "empty body for {}", route.path);
    }
}

#[test]
fn test_scroll_resets_on_navigation() {
    let mut nav = navigator();
    nav.navigate("/members").unwrap();
    nav.scroll_to(0, 740);
    assert_eq!(nav.scroll(), (0, 740));

    nav.navigate("/research").unwrap();
    assert_eq!(nav.scroll(), (0, 0));
}

#[test]
fn test_scroll_resets_even_when_navigating_backward() {
    let mut nav = navigator();
    nav.navigate("/").unwrap();
    nav.navigate("/contact").unwrap();
    nav.scroll_to(3, 900);

    assert!(nav.back().unwrap());
    assert_eq!(nav.scroll(), (0, 0));
    assert_eq!(nav.current_view().unwrap().route_path, "/");
}

#[test]
fn test_unregistered_path_presents_not_found_state() {
    let mut nav = navigator();
    let outcome = nav.navigate("/nonexistent").unwrap();
    assert_eq!(outcome, Outcome::NotFound);

    let view = nav.current_view().unwrap();
    assert_eq!(view.title, "Page Not Found");
    assert!(view.body.contains("/nonexistent"));
    assert_eq!(nav.scroll(), (0, 0));
}

#[test]
fn test_stale_navigation_is_superseded() {
    let mut nav = navigator();
    nav.navigate("/").unwrap();

    let first = nav.start("/members");
    let second = nav.start("/research");

    // The older request completes after the newer one started: dropped.
    assert_eq!(nav.complete(first).unwrap(), Outcome::Superseded);
    assert_eq!(nav.current_view().unwrap().route_path, "/");

    assert_eq!(nav.complete(second).unwrap(), Outcome::Rendered);
    assert_eq!(nav.current_view().unwrap().route_path, "/research");
}

#[test]
fn test_stale_completion_after_newer_one_landed() {
    let mut nav = navigator();
    let first = nav.start("/members");
    let second = nav.start("/gallery");
    assert_eq!(nav.complete(second).unwrap(), Outcome::Rendered);

    assert_eq!(nav.complete(first).unwrap(), Outcome::Superseded);
    assert_eq!(nav.current_view().unwrap().route_path, "/gallery");
    assert_eq!(nav.history_len(), 0);
}

#[test]
fn test_history_back_and_forward() {
    let mut nav = navigator();
    nav.navigate("/").unwrap();
    nav.navigate("/members").unwrap();
    nav.navigate("/software").unwrap();
    assert_eq!(nav.history_len(), 2);

    assert!(nav.back().unwrap());
    assert_eq!(nav.current_view().unwrap().route_path, "/members");
    assert!(nav.can_forward());

    assert!(nav.back().unwrap());
    assert_eq!(nav.current_view().unwrap().route_path, "/");

    assert!(nav.forward().unwrap());
    assert_eq!(nav.current_view().unwrap().route_path, "/members");
}

#[test]
fn test_back_with_empty_history_is_a_noop() {
    let mut nav = navigator();
    assert!(!nav.back().unwrap());
    assert!(!nav.forward().unwrap());
    assert!(nav.current_view().is_none());
}

#[test]
fn test_new_navigation_clears_forward_stack() {
    let mut nav = navigator();
    nav.navigate("/").unwrap();
    nav.navigate("/news").unwrap();
    nav.back().unwrap();
    assert!(nav.can_forward());

    nav.navigate("/contact").unwrap();
    assert!(!nav.can_forward());
}

#[test]
fn test_retry_without_failure_is_an_error() {
    let mut nav = navigator();
    assert!(nav.retry().is_err());
}

#[test]
fn test_not_found_view_participates_in_history() {
    let mut nav = navigator();
    nav.navigate("/members").unwrap();
    nav.navigate("/missing").unwrap();

    assert!(nav.back().unwrap());
    assert_eq!(nav.current_view().unwrap().route_path, "/members");

    assert!(nav.forward().unwrap());
    assert_eq!(nav.current_view().unwrap().title, "Page Not Found");
}
