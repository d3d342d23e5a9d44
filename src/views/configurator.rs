// ============================================================================
// CONFIGURATOR VIEW - Configurador de zapatillas
// ============================================================================
// Dos selects (color y talla) y un resumen que se actualiza en cada `change`.
// El estado vive en el DOM: al salir de la ruta se pierde.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlSelectElement};

use crate::dom::{on_change, query_selector_all_in, set_text_content, ElementBuilder};
use crate::views::{RenderContext, View};

pub const COLORS: &[&str] = &["White", "Black", "Red", "Navy"];
pub const SIZES: &[&str] = &["38", "39", "40", "41", "42", "43", "44"];

#[derive(Debug, Default)]
pub struct Configurator;

impl View for Configurator {
    fn name(&self) -> &str {
        "Configurator"
    }

    fn render(&self, _ctx: &RenderContext) -> Result<Element, JsValue> {
        let color = select("color", COLORS)?;
        let size = select("size", SIZES)?;
        let summary = ElementBuilder::new("p")?
            .class("configurator-summary")
            .text(&summary_text(COLORS[0], SIZES[0]))
            .build();

        let form = ElementBuilder::new("form")?
            .class("configurator-form")
            .child(labeled("Color", color)?)?
            .child(labeled("Size", size)?)?
            .build();

        let section = ElementBuilder::new("section")?
            .class("view view-configurator")
            .child(ElementBuilder::new("h1")?.text("Shoe configurator").build())?
            .child(form.clone())?
            .child(summary.clone())?
            .build();

        for select in query_selector_all_in(&form, "select")? {
            let form = form.clone();
            let summary = summary.clone();
            on_change(&select, move |_e| {
                let color = selected_value(&form, "color").unwrap_or_else(|| COLORS[0].to_string());
                let size = selected_value(&form, "size").unwrap_or_else(|| SIZES[0].to_string());
                set_text_content(&summary, &summary_text(&color, &size));
            })?;
        }

        Ok(section)
    }
}

fn select(name: &str, options: &[&str]) -> Result<Element, JsValue> {
    let mut builder = ElementBuilder::new("select")?.attr("name", name)?;
    for option in options {
        builder = builder.child(ElementBuilder::new("option")?.attr("value", option)?.text(option).build())?;
    }
    Ok(builder.build())
}

fn labeled(label: &str, control: Element) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("label")?
        .class("configurator-field")
        .child(ElementBuilder::new("span")?.text(label).build())?
        .child(control)?
        .build())
}

fn selected_value(form: &Element, name: &str) -> Option<String> {
    form.query_selector(&format!("select[name=\"{}\"]", name))
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlSelectElement>().ok())
        .map(|select| select.value())
}

pub fn summary_text(color: &str, size: &str) -> String {
    format!("{} shoe, EU size {}", color, size)
}
