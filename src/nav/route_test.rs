use super::*;

fn canon(raw: &str) -> String {
    Route::from_fragment(raw).as_str().to_owned()
}

// =============================================================================
// from_fragment
// =============================================================================

#[test]
fn empty_and_bare_markers_resolve_to_root() {
    for raw in ["", "#", "#/", "/", "   ", "#///", "///"] {
        assert_eq!(canon(raw), "/", "expected root for {raw:?}");
    }
}

#[test]
fn work_routes_normalize_identically() {
    for raw in ["#/work/solar/", "work/solar", "#work/solar", "#//work/solar", "/work/solar/", "  #/work/solar  "] {
        assert_eq!(canon(raw), "/work/solar", "unexpected route for {raw:?}");
    }
}

#[test]
fn everything_before_first_hash_is_dropped() {
    assert_eq!(canon("https://example.test/page#/community"), "/community");
    assert_eq!(canon("#/a#b"), "/a#b");
}

#[test]
fn multiple_trailing_slashes_are_stripped() {
    assert_eq!(canon("#/community///"), "/community");
}

#[test]
fn interior_slashes_are_kept() {
    assert_eq!(canon("#/work//tint"), "/work//tint");
}

#[test]
fn normalization_is_idempotent() {
    for raw in ["", "#/work/tint/", "community", "#//estimate//"] {
        let once = Route::from_fragment(raw);
        let twice = Route::from_fragment(once.as_str());
        assert_eq!(once, twice);
    }
}

#[test]
fn route_serializes_as_plain_string() {
    let json = serde_json::to_string(&Route::from_fragment("#/work/tint")).unwrap();
    assert_eq!(json, "\"/work/tint\"");
}

#[test]
fn default_route_is_root() {
    assert!(Route::default().is_root());
    assert!(!Route::from_fragment("#/community").is_root());
}

// =============================================================================
// RouteResolver
// =============================================================================

#[test]
fn resolver_publishes_initial_fragment() {
    let resolver = RouteResolver::new("#/community/");
    assert_eq!(resolver.current().as_str(), "/community");
    let rx = resolver.subscribe();
    assert_eq!(rx.borrow().as_str(), "/community");
}

#[tokio::test]
async fn navigate_wakes_subscribers_with_new_route() {
    let resolver = RouteResolver::default();
    let mut rx = resolver.subscribe();

    let route = resolver.navigate("#/work/windows");
    assert_eq!(route.as_str(), "/work/windows");

    rx.changed().await.unwrap();
    assert_eq!(rx.borrow_and_update().as_str(), "/work/windows");
}

#[test]
fn navigate_to_equivalent_fragment_does_not_notify() {
    let resolver = RouteResolver::new("#/work/solar");
    let rx = resolver.subscribe();

    resolver.navigate("work/solar/");
    assert!(!rx.has_changed().unwrap());

    resolver.navigate("#/work/tint");
    assert!(rx.has_changed().unwrap());
}
