use gloo::events::{EventListener, EventListenerOptions};
use storefront_router::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

use crate::{links::router_path_for_href, LaunchError, StorefrontConfig};

/// The id of the element the application renders into.
const ROOT_ID: &str = "main";

pub(crate) fn mount(router: Router, config: &StorefrontConfig) -> Result<(), LaunchError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(LaunchError::NoDocument)?;
    let root = document
        .get_element_by_id(ROOT_ID)
        .ok_or(LaunchError::MissingRoot(ROOT_ID))?;

    if let Some(title) = &config.web.app.title {
        document.set_title(title);
    }

    let render = {
        let root = root.clone();
        move |router: &Router| root.set_inner_html(&router.render())
    };
    render(&router);
    let subscription = router.subscribe(render);

    // turn clicks on internal links into router navigation instead of page loads
    let prefix = config.base_path();
    let clicks = EventListener::new_with_options(
        &root,
        "click",
        EventListenerOptions::enable_prevent_default(),
        {
            let router = router.clone();
            move |event| {
                let Some(path) = internal_link_target(event, prefix.as_deref()) else {
                    return;
                };
                event.prevent_default();
                if let Err(err) = router.push(path) {
                    tracing::error!("link navigation failed: {err}");
                }
            }
        },
    );

    // the page owns the application until it unloads
    std::mem::forget(clicks);
    std::mem::forget(subscription);
    std::mem::forget(router);
    Ok(())
}

/// The router path of the link a plain left click landed on, if it is an internal link.
fn internal_link_target(event: &web_sys::Event, prefix: Option<&str>) -> Option<String> {
    let click = event.dyn_ref::<MouseEvent>()?;
    let modified = click.ctrl_key() || click.meta_key() || click.shift_key() || click.alt_key();
    if click.button() != 0 || modified {
        return None;
    }

    let anchor = event
        .target()?
        .dyn_into::<web_sys::Element>()
        .ok()?
        .closest("a[href]")
        .ok()??;
    let opens_elsewhere = anchor.has_attribute("target") || anchor.has_attribute("rel");
    let href = anchor.get_attribute("href")?;
    router_path_for_href(&href, opens_elsewhere, prefix)
}
