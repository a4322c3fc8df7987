//! Deciding which clicked links the router handles instead of the browser.

/// The router path for a clicked link, or [`None`] if the browser should follow it.
///
/// `opens_elsewhere` is set for anchors with a `target` or `rel` attribute. Only absolute paths
/// under `prefix` are handled; protocol-relative (`//host`) and other URLs are left alone.
///
/// ```rust
/// # use storefront::links::router_path_for_href;
/// assert_eq!(
///     router_path_for_href("/shop/products", false, Some("/shop")),
///     Some(String::from("/products"))
/// );
/// assert_eq!(router_path_for_href("https://example.com/", false, None), None);
/// ```
pub fn router_path_for_href(
    href: &str,
    opens_elsewhere: bool,
    prefix: Option<&str>,
) -> Option<String> {
    if opens_elsewhere || !href.starts_with('/') || href.starts_with("//") {
        return None;
    }

    match prefix {
        None => Some(href.to_string()),
        Some(prefix) => storefront_history::strip_prefix(href, prefix).map(String::from),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_paths_are_handled() {
        assert_eq!(
            router_path_for_href("/products?page=2", false, None),
            Some(String::from("/products?page=2"))
        );
    }

    #[test]
    fn prefix_is_removed() {
        assert_eq!(
            router_path_for_href("/shop", false, Some("/shop")),
            Some(String::from("/"))
        );
        assert_eq!(
            router_path_for_href("/shop/products", false, Some("/shop")),
            Some(String::from("/products"))
        );
    }

    #[test]
    fn paths_outside_the_prefix_are_left_alone() {
        assert_eq!(router_path_for_href("/shopping", false, Some("/shop")), None);
        assert_eq!(router_path_for_href("/products", false, Some("/shop")), None);
    }

    #[test]
    fn protocol_relative_and_external_links_are_left_alone() {
        assert_eq!(router_path_for_href("//evil.example/", false, None), None);
        assert_eq!(router_path_for_href("https://example.com/", false, None), None);
        assert_eq!(router_path_for_href("products", false, None), None);
    }

    #[test]
    fn links_opening_elsewhere_are_left_alone() {
        assert_eq!(router_path_for_href("/products", true, None), None);
    }
}
