use super::{RouteKind, Router};
use crate::method::Method;

fn label(name: &'static str) -> impl Fn(&[String]) -> String + Send + Sync {
    move |params: &[String]| {
        if params.is_empty() {
            name.to_string()
        } else {
            format!("{}:{}", name, params.join(","))
        }
    }
}

#[test]
fn test_path_is_classified_once() {
    let mut router: Router<String> = Router::new();
    router.register("GET", "/items", label("list"));
    router.register("GET", "/items/{id}", label("get"));

    let routes = router.list_routes();
    assert_eq!(routes.len(), 2);
    assert_eq!(routes[0].kind, RouteKind::Static);
    assert_eq!(routes[0].path, "/items");
    assert_eq!(routes[1].kind, RouteKind::Dynamic);
    assert_eq!(routes[1].path, "/items/{id}");
}

#[test]
fn test_registration_normalizes_trailing_slash() {
    let mut router: Router<String> = Router::new();
    router.register("GET", "/a/b/", label("ab"));
    router.register("GET", "/", label("root"));

    let paths: Vec<String> = router.list_routes().into_iter().map(|r| r.path).collect();
    assert_eq!(paths, vec!["/".to_string(), "/a/b".to_string()]);
}

#[test]
fn test_all_and_composite_method_specs() {
    let mut router: Router<String> = Router::new();
    router.register("ALL", "/everywhere", label("x"));
    assert_eq!(router.len(), Method::ALL.len());

    let mut router: Router<String> = Router::new();
    router.register("GET|POST", "/two", label("x"));
    assert_eq!(router.len(), 2);
}

#[test]
fn test_unknown_method_is_ignored() {
    let mut router: Router<String> = Router::new();
    router.register("PATCH", "/nope", label("x"));
    assert!(router.is_empty());
}

#[test]
fn test_later_registration_overwrites() {
    let mut router: Router<String> = Router::new();
    router.register("GET", "/a", label("first"));
    router.register("GET", "/a/", label("second"));
    assert_eq!(router.len(), 1);
    assert_eq!(router.dispatch("GET", "/a").into_output().as_deref(), Some("second"));
}

#[test]
fn test_unregister_requires_exact_key() {
    let mut router: Router<String> = Router::new();
    router.register("GET", "/a", label("a"));

    assert!(!router.unregister("GET", "/a/"));
    assert_eq!(router.len(), 1);

    assert!(router.unregister("GET", "/a"));
    assert!(router.is_empty());
    assert!(!router.unregister("GET", "/a"));
}

#[test]
fn test_unregister_removes_templates_too() {
    let mut router: Router<String> = Router::new();
    router.register("GET|POST", "/a/{id}", label("a"));
    assert!(router.unregister("GET", "/a/{id}"));
    let routes = router.list_routes();
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].method, Method::Post);
}

#[test]
fn test_not_found_registration_and_removal() {
    let mut router: Router<String> = Router::new();
    router.register_not_found("GET|POST", label("404"));
    assert!(router.has_not_found(Method::Get));
    assert!(router.has_not_found(Method::Post));
    assert!(!router.has_not_found(Method::Put));

    assert!(router.unregister_not_found("GET"));
    assert!(!router.has_not_found(Method::Get));
    assert!(!router.unregister_not_found("GET"));
    assert!(router.is_empty());
}

#[test]
fn test_arity_check() {
    let mut router: Router<String> = Router::new();
    assert!(router
        .register_with_arity("GET", "/forum/{f}/topic/{t}", 2, label("t"))
        .is_ok());
    let err = router
        .register_with_arity("GET", "/user/{id}", 2, label("u"))
        .unwrap_err();
    assert!(err.to_string().contains("arity mismatch"));
    assert_eq!(router.len(), 1);
}

#[test]
fn test_listing_orders_methods_and_keeps_template_order() {
    let mut router: Router<String> = Router::new();
    router.register("POST", "/z", label("z"));
    router.register("GET", "/b/{x}", label("b"));
    router.register("GET", "/a/{x}", label("a"));
    router.register("GET", "/c", label("c"));

    let listed: Vec<(Method, String)> = router
        .list_routes()
        .into_iter()
        .map(|r| (r.method, r.path))
        .collect();
    assert_eq!(
        listed,
        vec![
            (Method::Get, "/c".to_string()),
            (Method::Get, "/b/{x}".to_string()),
            (Method::Get, "/a/{x}".to_string()),
            (Method::Post, "/z".to_string()),
        ]
    );
}
