// ============================================================================
// VIEWS - Unidades renderizables
// ============================================================================
// Cada vista construye su subárbol DOM desde cero; el outlet del router
// reemplaza el contenido anterior en cada navegación.
// ============================================================================

pub mod configurator;
pub mod home;
pub mod new_page;
pub mod shell;

pub use configurator::Configurator;
pub use home::Home;
pub use new_page::NewPage;
pub use shell::{Shell, ROUTER_VIEW_CLASS};

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::router::{ResolvedLocation, Router};

/// Lo que una vista necesita para renderizarse
pub struct RenderContext {
    pub router: Rc<Router>,
    pub location: Option<ResolvedLocation>,
}

impl RenderContext {
    pub fn new(router: Rc<Router>) -> Self {
        let location = router.current();
        Self { router, location }
    }

    pub fn for_location(router: Rc<Router>, location: ResolvedLocation) -> Self {
        Self {
            router,
            location: Some(location),
        }
    }
}

pub trait View {
    /// Nombre de la vista, visible en logs y en `data-view`
    fn name(&self) -> &str;

    fn render(&self, ctx: &RenderContext) -> Result<Element, JsValue>;
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::dom::ElementBuilder;

    /// Vista mínima para tests de tablas y router
    pub struct StubView {
        name: String,
    }

    impl StubView {
        pub fn shared(name: &str) -> Rc<dyn View> {
            Rc::new(Self { name: name.to_string() })
        }
    }

    impl View for StubView {
        fn name(&self) -> &str {
            &self.name
        }

        fn render(&self, _ctx: &RenderContext) -> Result<Element, JsValue> {
            Ok(ElementBuilder::new("section")?.text(&self.name).build())
        }
    }
}
