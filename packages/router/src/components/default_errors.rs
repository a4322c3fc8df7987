use askama_escape::{escape, Html};

use crate::{router::Router, view::Element};

/// The default view for paths no route matches.
#[allow(non_snake_case)]
pub fn NotFound(router: &Router) -> Element {
    let path = router.current().path;
    format!(
        "<h1>Page Not Found</h1><p>There is nothing at <code>{}</code>.</p>",
        escape(&path, Html)
    )
}
