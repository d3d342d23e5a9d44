use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::router::router_link;
use crate::views::{RenderContext, View};

/// Página estática secundaria
#[derive(Debug, Default)]
pub struct NewPage;

impl View for NewPage {
    fn name(&self) -> &str {
        "NewPage"
    }

    fn render(&self, ctx: &RenderContext) -> Result<Element, JsValue> {
        Ok(ElementBuilder::new("section")?
            .class("view view-new-page")
            .child(ElementBuilder::new("h1")?.text("New page").build())?
            .child(ElementBuilder::new("p")?.text("This page has no content yet.").build())?
            .child(router_link(&ctx.router, "/", "Back home")?)?
            .build())
    }
}
