use std::rc::Rc;

use pretty_assertions::assert_eq;
use storefront::{build_router, routes, StorefrontConfig};
use storefront_router::prelude::*;

fn router_at(path: &str) -> Router {
    build_router(
        &StorefrontConfig::default(),
        Rc::new(MemoryHistory::with_initial_path(path)),
    )
    .unwrap()
}

fn assert_renders_login(router: &Router) {
    let html = router.render();
    assert!(html.contains("<h1>Login</h1>"), "{html}");
    assert!(!html.contains("<h1>Products</h1>"), "{html}");
}

fn assert_renders_products(router: &Router) {
    let html = router.render();
    assert!(html.contains("<h1>Products</h1>"), "{html}");
    assert!(!html.contains("<h1>Login</h1>"), "{html}");
}

#[test]
fn every_route_renders_its_view() {
    let router = router_at("/");

    for route in routes::routes() {
        router.push(route.path()).unwrap();
        assert_eq!(router.current_name().as_deref(), Some(route.name()));
        assert!(router.render().contains(&format!("<h1>{}</h1>", route.name())));
    }
}

#[test]
fn root_renders_login() {
    let router = router_at("/");
    assert_eq!(router.current_name().as_deref(), Some(routes::LOGIN));
    assert_renders_login(&router);
}

#[test]
fn products_path_renders_products() {
    let router = router_at("/");
    router.push("/products").unwrap();

    assert_eq!(router.current_name().as_deref(), Some(routes::PRODUCTS));
    assert_renders_products(&router);
}

#[test]
fn products_is_reachable_directly() {
    let router = router_at("/products");
    assert_renders_products(&router);
    assert!(!router.can_go_back());
}

#[test]
fn named_navigation_matches_path_navigation() {
    let by_path = router_at("/");
    by_path.push("/products").unwrap();

    let by_name = router_at("/");
    by_name.navigate_by_name(routes::PRODUCTS, &[]).unwrap();

    assert_eq!(by_name.current(), by_path.current());
    assert_eq!(by_name.render(), by_path.render());
}

#[test]
fn back_and_forward_restore_views() {
    let router = router_at("/");
    let login = router.render();

    router.push("/products").unwrap();
    let products = router.render();

    router.go_back();
    assert_eq!(router.current_name().as_deref(), Some(routes::LOGIN));
    assert_eq!(router.render(), login);

    router.go_forward();
    assert_eq!(router.current_name().as_deref(), Some(routes::PRODUCTS));
    assert_eq!(router.render(), products);
}

#[test]
fn unknown_path_renders_not_found() {
    let router = router_at("/");
    router.push("/unknown").unwrap();

    let html = router.render();
    assert_eq!(router.current_name(), None);
    assert!(html.contains("<h1>Page Not Found</h1>"), "{html}");
    assert!(!html.contains("<h1>Login</h1>"));
    assert!(!html.contains("<h1>Products</h1>"));

    // the unknown location is a real history entry
    router.go_back();
    assert_renders_login(&router);
}

#[test]
fn views_link_to_each_other() {
    let router = router_at("/");
    assert_eq!(
        router.render(),
        r#"<main class="login"><h1>Login</h1><nav><a href="/products">Browse products</a></nav></main>"#
    );

    router.push("/products").unwrap();
    assert_eq!(
        router.render(),
        r#"<main class="products"><h1>Products</h1><nav><a href="/">Sign out</a></nav></main>"#
    );
}

#[test]
fn base_path_prefixes_links() {
    let config = StorefrontConfig::default()
        .with_base_path_override(Some(String::from("/shop/")))
        .unwrap();
    let history = MemoryHistory::default().with_prefix(config.base_path().unwrap());
    let router = build_router(&config, Rc::new(history)).unwrap();

    assert!(router.render().contains(r#"<a href="/shop/products">"#));
}

#[test]
fn matching_is_lenient_by_default() {
    let router = router_at("/");
    router.push("/Products/?page=2").unwrap();
    assert_renders_products(&router);
}

#[test]
fn sensitive_config_is_honored() {
    let config = StorefrontConfig::from_toml("[router]\nsensitive = true").unwrap();
    let router = build_router(&config, Rc::new(MemoryHistory::with_initial_path("/PRODUCTS"))).unwrap();

    assert_eq!(router.current_name(), None);
}

#[test]
fn route_names_and_paths_are_unique() {
    let table = RouteTable::new(routes::routes()).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.path_for(routes::LOGIN, &[]).unwrap(), "/");
    assert_eq!(table.path_for(routes::PRODUCTS, &[]).unwrap(), "/products");
}

#[test]
fn equivalent_paths_share_one_history_entry() {
    let router = router_at("/");
    router.push("/products").unwrap();
    router.push("/products/").unwrap();
    router.push("/PRODUCTS").unwrap();

    router.go_back();
    assert_eq!(router.current_name().as_deref(), Some(routes::LOGIN));
}
