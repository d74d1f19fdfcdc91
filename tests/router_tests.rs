//! Integration tests for route registration, lookup and deletion
//!
//! These exercise the public `Router` surface end to end: literal,
//! dynamic, catch-all, optional catch-all and wildcard patterns, deletion
//! with pruning, and isolation between dispatch keys.

use reminist::{Router, RouterError, SegmentKind};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
struct Page {
    component: &'static str,
}

fn page(component: &'static str) -> Page {
    Page { component }
}

fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn get_router() -> Router<&'static str, Page> {
    Router::with_keys(["get", "post"])
}

#[test]
fn test_root_route() {
    let mut router = get_router();
    router.add("get", "/", page("RootPage")).unwrap();

    let result = router.find(&"get", "/").unwrap();
    assert_eq!(result.payload(), &page("RootPage"));
    assert!(result.params().is_empty());
}

#[test]
fn test_simple_static_route() {
    let mut router = get_router();
    router.add("get", "/about", page("AboutPage")).unwrap();

    let result = router.find(&"get", "/about").unwrap();
    assert_eq!(result.payload(), &page("AboutPage"));
    assert!(router.has(&"get", "/about"));
}

#[test]
fn test_nested_static_routes() {
    let mut router = get_router();
    router.add("get", "/about/us/team", page("TeamPage")).unwrap();

    let result = router.find(&"get", "/about/us/team").unwrap();
    assert_eq!(result.payload(), &page("TeamPage"));
    assert!(router.find(&"get", "/about/us").is_none());
}

#[test]
fn test_method_isolation() {
    let mut router = get_router();
    router.add("get", "/data", page("DataViewer")).unwrap();
    router.add("post", "/data", page("DataUploader")).unwrap();

    assert_eq!(
        router.find(&"get", "/data").unwrap().payload().component,
        "DataViewer"
    );
    assert_eq!(
        router.find(&"post", "/data").unwrap().payload().component,
        "DataUploader"
    );

    assert!(router.delete(&"post", "/data"));
    assert!(router.has(&"get", "/data"));
    assert!(!router.has(&"post", "/data"));
}

#[test]
fn test_dynamic_colon_param() {
    let mut router = get_router();
    router.add("get", "/users/:id", page("UserProfile")).unwrap();

    let result = router.find(&"get", "/users/123-abc").unwrap();
    assert_eq!(result.params(), &params(&[("id", "123-abc")]));

    let result = router.find(&"get", "/users/42").unwrap();
    assert_eq!(result.param("id"), Some("42"));
    assert_eq!(result.pattern(), "/users/:id");
}

#[test]
fn test_dynamic_bracket_param() {
    let mut router = get_router();
    router.add("get", "/users/[id]", page("UserProfile")).unwrap();

    let result = router.find(&"get", "/users/123-abc").unwrap();
    assert_eq!(result.params(), &params(&[("id", "123-abc")]));
}

#[test]
fn test_multiple_dynamic_params() {
    let mut router = get_router();
    router
        .add("get", "/products/[category]/[productId]", page("ProductPage"))
        .unwrap();

    let result = router.find(&"get", "/products/electronics/456").unwrap();
    assert_eq!(
        result.params(),
        &params(&[("category", "electronics"), ("productId", "456")])
    );
}

#[test]
fn test_catch_all() {
    let mut router = get_router();
    router.add("get", "/docs/[...slug]", page("DocsPage")).unwrap();

    let result = router.find(&"get", "/docs/a/b").unwrap();
    assert_eq!(result.params(), &params(&[("slug", "a/b")]));

    let result = router
        .find(&"get", "/docs/getting-started/installation")
        .unwrap();
    assert_eq!(result.param("slug"), Some("getting-started/installation"));

    // A required catch-all does not match the bare prefix
    assert!(router.find(&"get", "/docs").is_none());
}

#[test]
fn test_optional_catch_all_base_and_populated() {
    let mut router = get_router();
    router
        .add("get", "/gallery/[[...slug]]", page("GalleryPage"))
        .unwrap();

    let base = router.find(&"get", "/gallery").unwrap();
    assert_eq!(base.params(), &params(&[("slug", "")]));
    assert_eq!(base.payload(), &page("GalleryPage"));

    let populated = router.find(&"get", "/gallery/x/y").unwrap();
    assert_eq!(populated.params(), &params(&[("slug", "x/y")]));

    let populated = router.find(&"get", "/gallery/landscapes/ocean").unwrap();
    assert_eq!(populated.param("slug"), Some("landscapes/ocean"));
}

#[test]
fn test_literal_route_wins_over_optional_base() {
    let mut router = get_router();
    router.add("get", "/gallery", page("GalleryIndex")).unwrap();
    router
        .add("get", "/gallery/[[...slug]]", page("GalleryPage"))
        .unwrap();

    let base = router.find(&"get", "/gallery").unwrap();
    assert_eq!(base.payload(), &page("GalleryIndex"));
    assert!(base.params().is_empty());
}

#[test]
fn test_wildcard() {
    let mut router = get_router();
    router.add("get", "/files/*", page("FileServer")).unwrap();

    let result = router.find(&"get", "/files/a/b.jpg").unwrap();
    assert_eq!(result.params(), &params(&[("*", "a/b.jpg")]));

    let result = router.find(&"get", "/files/images/background.jpg").unwrap();
    assert_eq!(result.param("*"), Some("images/background.jpg"));
}

#[test]
fn test_wildcard_at_root() {
    let mut router = get_router();
    router.add("get", "/*", page("RootWildcard")).unwrap();

    let result = router.find(&"get", "/any/path/at/all").unwrap();
    assert_eq!(result.params(), &params(&[("*", "any/path/at/all")]));
}

#[test]
fn test_not_found() {
    let mut router = get_router();
    router.add("get", "/contact", page("ContactPage")).unwrap();
    router
        .add("get", "/posts/[postId]/comments", page("Comments"))
        .unwrap();

    assert!(router.find(&"get", "/contacts").is_none());
    // Partial dynamic match that is not an endpoint
    assert!(router.find(&"get", "/posts/tech-trends").is_none());
    assert!(!router.has(&"get", "/non-existent"));
    assert!(!router.has(&"get", "/posts/123"));
    assert!(router.has(&"get", "/posts/123/comments"));
}

#[test]
fn test_trailing_slash_is_ignored() {
    let mut router = get_router();
    router.add("get", "/about", page("AboutPage")).unwrap();
    router.add("get", "/users/:id", page("UserProfile")).unwrap();

    assert!(router.has(&"get", "/about/"));
    assert!(router.has(&"get", "about"));
    assert_eq!(
        router.find(&"get", "/users/7/").unwrap().param("id"),
        Some("7")
    );
}

#[test]
fn test_duplicate_literal_route_rejected() {
    let mut router = get_router();
    router.add("get", "/about", page("A")).unwrap();
    let err = router.add("get", "/about", page("B")).unwrap_err();
    assert_eq!(
        err,
        RouterError::DuplicateRoute {
            pattern: "/about".to_string()
        }
    );
    // First registration kept
    assert_eq!(router.find(&"get", "/about").unwrap().payload(), &page("A"));
}

#[test]
fn test_duplicate_parameterised_route_rejected() {
    let mut router = get_router();
    router.add("get", "/users/:id", page("A")).unwrap();
    let err = router.add("get", "/users/[id]", page("B")).unwrap_err();
    assert!(matches!(err, RouterError::DuplicateRoute { .. }));
    assert_eq!(
        err.to_string(),
        "Unable to add path '/users/[id]' because a final node already exists"
    );
}

#[test]
fn test_conflicting_dynamic_params() {
    let mut router = get_router();
    router.add("get", "/monitor/:id", page("New")).unwrap();

    let err = router
        .add("get", "/monitor/:monitorId/check", page("New"))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "There are two conflicting routes: /monitor/:monitorId/check and /monitor/:id use different dynamic parameters."
    );
}

#[test]
fn test_conflict_only_on_different_names() {
    let mut router = get_router();
    router.add("get", "/m/:id", page("P")).unwrap();
    assert!(matches!(
        router.add("get", "/m/:other/x", page("Q")),
        Err(RouterError::Conflict { .. })
    ));
    // Same name deeper in the trie is fine
    router.add("get", "/m/:id/x", page("Q")).unwrap();
    assert_eq!(router.find(&"get", "/m/1/x").unwrap().param("id"), Some("1"));
}

#[test]
fn test_conflict_is_per_key() {
    let mut router = get_router();
    router.add("get", "/m/:id", page("P")).unwrap();
    router.add("post", "/m/:other", page("Q")).unwrap();
    assert_eq!(router.find(&"post", "/m/1").unwrap().param("other"), Some("1"));
}

#[test]
fn test_conflict_after_delete_names_remaining_route() {
    let mut router = get_router();
    router.add("get", "/m/:id/a", page("A")).unwrap();
    router.add("get", "/m/:id/b", page("B")).unwrap();
    assert!(router.delete(&"get", "/m/:id/a"));

    let err = router.add("get", "/m/:x", page("X")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "There are two conflicting routes: /m/:x and /m/:id/b use different dynamic parameters."
    );
}

#[test]
fn test_delete_route() {
    let mut router = get_router();
    router.add("get", "/to-be-deleted", page("Temp")).unwrap();
    assert!(router.has(&"get", "/to-be-deleted"));

    assert!(router.delete(&"get", "/to-be-deleted"));
    assert!(!router.has(&"get", "/to-be-deleted"));
    assert!(!router.delete(&"get", "/to-be-deleted"));
}

#[test]
fn test_delete_non_existent() {
    let mut router = get_router();
    assert!(!router.delete(&"get", "/non-existent"));
    assert!(!router.delete(&"put", "/non-existent"));
}

#[test]
fn test_delete_keeps_parent_endpoint() {
    let mut router = get_router();
    router.add("get", "/settings", page("Settings")).unwrap();
    router.add("get", "/settings/profile", page("Profile")).unwrap();

    assert!(router.delete(&"get", "/settings/profile"));
    assert!(!router.has(&"get", "/settings/profile"));
    assert!(router.has(&"get", "/settings"));
}

#[test]
fn test_delete_prunes_literal_chain() {
    let mut router = get_router();
    router.add("get", "/a/b/c", page("C")).unwrap();
    assert!(router.delete(&"get", "/a/b/c"));

    assert!(router.find(&"get", "a").is_none());
    assert!(router.find(&"get", "/a/b").is_none());
    assert!(router.is_empty());
}

#[test]
fn test_delete_parameterised_route_prunes_trie() {
    let mut router = get_router();
    router.add("get", "/shop/:id/items/[...rest]", page("Items")).unwrap();
    router.add("get", "/shop/:id", page("Shop")).unwrap();

    assert_eq!(
        router.remove(&"get", "/shop/:id/items/[...rest]"),
        Some(page("Items"))
    );
    assert!(!router.has(&"get", "/shop/1/items/x"));
    assert!(router.has(&"get", "/shop/1"));

    let shop = router.root(&"get").unwrap().static_child("shop").unwrap();
    let id = shop.special_child(SegmentKind::Dynamic).unwrap();
    assert_eq!(id.child_count(), 0);
    assert!(id.is_endpoint());

    assert!(router.delete(&"get", "/shop/:id"));
    assert_eq!(router.root(&"get").unwrap().child_count(), 0);
}

#[test]
fn test_delete_by_request_path_keeps_route() {
    let mut router = get_router();
    router.add("get", "/users/:id", page("User")).unwrap();

    assert_eq!(router.remove(&"get", "/users/1"), None);
    assert!(router.has(&"get", "/users/1"));
    assert!(router.delete(&"get", "/users/:id"));
    assert!(!router.has(&"get", "/users/1"));
}

#[test]
fn test_readd_after_delete() {
    let mut router = get_router();
    router.add("get", "/m/:id", page("P")).unwrap();
    assert!(router.delete(&"get", "/m/:id"));

    // The slot was pruned, so a different name is no longer a conflict
    router.add("get", "/m/:other", page("Q")).unwrap();
    assert_eq!(router.find(&"get", "/m/9").unwrap().param("other"), Some("9"));
}

#[test]
fn test_literal_and_parameterised_siblings() {
    let mut router = get_router();
    router.add("get", "/users/new", page("NewUser")).unwrap();
    router.add("get", "/users/:id", page("UserProfile")).unwrap();
    router.add("get", "/users/:id/edit", page("EditUser")).unwrap();

    assert_eq!(
        router.find(&"get", "/users/new").unwrap().payload(),
        &page("NewUser")
    );
    assert_eq!(
        router.find(&"get", "/users/7").unwrap().payload(),
        &page("UserProfile")
    );
    let edit = router.find(&"get", "/users/new/edit").unwrap();
    assert_eq!(edit.payload(), &page("EditUser"));
    assert_eq!(edit.param("id"), Some("new"));
}

#[test]
fn test_routes_listing() {
    let mut router = get_router();
    router.add("get", "/b", page("B")).unwrap();
    router.add("get", "/a/:id", page("A")).unwrap();
    router.add("post", "/c", page("C")).unwrap();

    assert_eq!(router.routes(&"get"), vec!["/a/:id", "/b"]);
    assert_eq!(router.routes(&"post"), vec!["/c"]);
    assert_eq!(router.len(), 3);
}

#[test]
fn test_shared_across_threads_for_lookups() {
    let mut router: Router<String, u32> = Router::new();
    router.add("GET".to_string(), "/items/:id", 1).unwrap();
    let router = std::sync::Arc::new(router);

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let router = std::sync::Arc::clone(&router);
            std::thread::spawn(move || {
                let path = format!("/items/{}", i);
                router.find("GET", &path).map(|m| m.param("id").map(str::to_owned))
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Some(Some(i.to_string())));
    }
}
