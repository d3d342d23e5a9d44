// ============================================================================
// HOME VIEW - Página de bienvenida
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::router::router_link;
use crate::views::{RenderContext, View};

#[derive(Debug, Default)]
pub struct Home;

impl View for Home {
    fn name(&self) -> &str {
        "Home"
    }

    fn render(&self, ctx: &RenderContext) -> Result<Element, JsValue> {
        let mut section = ElementBuilder::new("section")?
            .class("view view-home")
            .child(ElementBuilder::new("h1")?.text("Design your own shoe").build())?
            .child(
                ElementBuilder::new("p")?
                    .text("Pick colors, materials and sizes, then preview the result.")
                    .build(),
            )?;

        // El enlace solo existe si la tabla tiene el configurador
        if ctx.router.table().find_by_name("Configurator").is_some() {
            let cta = router_link(&ctx.router, "/configurator", "Start configuring")?;
            section = section.child(cta)?;
        }

        Ok(section.build())
    }
}
