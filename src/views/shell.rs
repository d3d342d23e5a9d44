// ============================================================================
// SHELL VIEW - Vista raíz: navegación + outlet del router
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::router::router_link;
use crate::views::{RenderContext, View};

/// Clase del elemento donde el router pinta la vista activa
pub const ROUTER_VIEW_CLASS: &str = "router-view";

#[derive(Debug, Default)]
pub struct Shell;

impl View for Shell {
    fn name(&self) -> &str {
        "Shell"
    }

    fn render(&self, ctx: &RenderContext) -> Result<Element, JsValue> {
        let mut links = Vec::with_capacity(ctx.router.table().len());
        for route in ctx.router.table().iter() {
            links.push(router_link(&ctx.router, route.path(), &nav_label(route.name()))?);
        }

        let nav = ElementBuilder::new("nav")?
            .class("app-nav")
            .children(links)?
            .build();

        let outlet = ElementBuilder::new("main")?
            .class(ROUTER_VIEW_CLASS)
            .build();

        Ok(ElementBuilder::new("div")?
            .class("app-shell")
            .child(nav)?
            .child(outlet)?
            .build())
    }
}

/// "NewPage" → "New Page"
fn nav_label(route_name: &str) -> String {
    let mut label = String::with_capacity(route_name.len() + 4);
    for (i, c) in route_name.chars().enumerate() {
        if i > 0 && c.is_uppercase() {
            label.push(' ');
        }
        label.push(c);
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_label_splits_camel_case() {
        assert_eq!(nav_label("Home"), "Home");
        assert_eq!(nav_label("NewPage"), "New Page");
        assert_eq!(nav_label("Configurator"), "Configurator");
    }
}
