// ============================================================================
// ROUTER LINK - Enlaces <a> que navegan sin recargar la página
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

use crate::dom::{add_class, on_click, query_selector_all_in, remove_class, ElementBuilder};
use crate::router::path::ensure_leading_slash;
use crate::router::{ResolvedLocation, Router};

/// Atributo con el destino del enlace
pub const LINK_ATTR: &str = "data-router-link";
pub const ACTIVE_CLASS: &str = "router-link-active";
pub const EXACT_ACTIVE_CLASS: &str = "router-link-exact-active";

/// Crear un enlace que navega con el router
pub fn router_link(router: &Rc<Router>, to: &str, label: &str) -> Result<Element, JsValue> {
    let target = ensure_leading_slash(to);
    let link = ElementBuilder::new("a")?
        .attr("href", &router.href(&target))?
        .attr(LINK_ATTR, &target)?
        .text(label)
        .build();

    let weak_router = Rc::downgrade(router);
    let destination = target.clone();
    on_click(&link, move |event: MouseEvent| {
        if !should_intercept(&event) {
            return;
        }
        event.prevent_default();
        if let Some(router) = weak_router.upgrade() {
            if let Err(e) = router.push(&destination) {
                log::error!("❌ [LINK] Error navegando a {}: {}", destination, e);
            }
        }
    })?;

    if let Some(current) = router.current() {
        set_active(&link, is_link_active(router, &target, &current))?;
    }
    Ok(link)
}

/// Actualizar las clases activas de todos los enlaces bajo `root`
pub fn refresh_active_links(root: &Element, router: &Router, current: &ResolvedLocation) -> Result<(), JsValue> {
    for link in query_selector_all_in(root, &format!("[{}]", LINK_ATTR))? {
        if let Some(target) = link.get_attribute(LINK_ATTR) {
            set_active(&link, is_link_active(router, &target, current))?;
        }
    }
    Ok(())
}

/// Un enlace está activo si resuelve a la misma ruta que la ubicación actual
pub fn is_link_active(router: &Router, target: &str, current: &ResolvedLocation) -> bool {
    match (router.resolve(target).name(), current.name()) {
        (Some(link_route), Some(current_route)) => link_route == current_route,
        _ => false,
    }
}

fn set_active(link: &Element, active: bool) -> Result<(), JsValue> {
    for class in [ACTIVE_CLASS, EXACT_ACTIVE_CLASS] {
        if active {
            add_class(link, class)?;
        } else {
            remove_class(link, class)?;
        }
    }
    Ok(())
}

/// Clicks con modificadores, botón no principal o `target=_blank` los maneja el navegador
fn should_intercept(event: &MouseEvent) -> bool {
    if event.meta_key() || event.alt_key() || event.ctrl_key() || event.shift_key() {
        return false;
    }
    if event.default_prevented() || event.button() != 0 {
        return false;
    }
    let opens_new_tab = event
        .current_target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.get_attribute("target"))
        .map(|target| target == "_blank")
        .unwrap_or(false);
    !opens_new_tab
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::{MemoryHistory, Route, RouteTable};
    use crate::views::testing::StubView;

    fn router() -> Rc<Router> {
        let table = RouteTable::new(vec![
            Route::new("/", "Home", StubView::shared("Home")),
            Route::new("/new-page", "NewPage", StubView::shared("NewPage")),
        ])
        .unwrap();
        Router::new(table, Box::new(MemoryHistory::new("/")))
    }

    #[test]
    fn link_active_when_it_resolves_to_current_route() {
        let router = router();
        let current = router.resolve("/new-page/?tab=1");
        assert!(is_link_active(&router, "/new-page", &current));
        assert!(!is_link_active(&router, "/", &current));
    }

    #[test]
    fn links_never_active_on_unmatched_location() {
        let router = router();
        let current = router.resolve("/nowhere");
        assert!(!is_link_active(&router, "/nowhere", &current));
    }
}
