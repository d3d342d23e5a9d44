// ============================================================================
// APP - Bootstrap: crear instancia, instalar router, montar en el DOM
// ============================================================================
// Secuencia (sin reintentos):
//   App::create(root) → use_plugin(router) → mount("#app")
// `mount` devuelve el único AppContext de la página; quien necesite
// navegar lo recibe explícitamente.
// ============================================================================

use std::rc::Rc;

use web_sys::Element;

use crate::config::{AppConfig, CONFIG};
use crate::dom::{append_child, clear_children, document, has_class, set_attribute};
use crate::error::{describe_js, AppError, RouteError};
use crate::router::{create_history, refresh_active_links, NavigationOutcome, ResolvedLocation, Router};
use crate::routes;
use crate::views::{RenderContext, Shell, View, ROUTER_VIEW_CLASS};

/// Marca que deja `mount` en el elemento raíz
pub const MOUNTED_ATTR: &str = "data-app-mounted";

/// Capacidad que se instala en la app antes de montar
pub trait Plugin {
    fn name(&self) -> &str;
    fn install(self, app: &mut App) -> Result<(), AppError>;
}

/// Destino donde se pinta la vista de la ruta activa
pub trait Outlet {
    fn show(&self, router: &Rc<Router>, location: &ResolvedLocation) -> Result<(), AppError>;
}

/// Outlet sobre un elemento del DOM. Es el único que escribe en ese subárbol.
pub struct DomOutlet {
    outlet: Element,
    root: Element,
}

impl DomOutlet {
    pub fn new(outlet: Element, root: Element) -> Self {
        Self { outlet, root }
    }
}

impl Outlet for DomOutlet {
    fn show(&self, router: &Rc<Router>, location: &ResolvedLocation) -> Result<(), AppError> {
        clear_children(&self.outlet);

        match &location.matched {
            Some(route) => {
                let ctx = RenderContext::for_location(router.clone(), location.clone());
                let view = route.view();
                let element = view.render(&ctx).map_err(|e| AppError::Render(describe_js(&e)))?;
                set_attribute(&self.outlet, "data-view", view.name())
                    .and_then(|_| append_child(&self.outlet, &element))
                    .map_err(|e| AppError::Render(describe_js(&e)))?;
            }
            None => {
                self.outlet
                    .remove_attribute("data-view")
                    .map_err(|e| AppError::Render(describe_js(&e)))?;
            }
        }

        refresh_active_links(&self.root, router, location).map_err(|e| AppError::Render(describe_js(&e)))
    }
}

/// Aplicación aún sin montar
pub struct App {
    root: Rc<dyn View>,
    router: Option<Rc<Router>>,
    plugins: Vec<String>,
    config: AppConfig,
}

impl App {
    pub fn create(root: Rc<dyn View>) -> Self {
        Self {
            root,
            router: None,
            plugins: Vec::new(),
            config: CONFIG.clone(),
        }
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn use_plugin<P: Plugin>(mut self, plugin: P) -> Result<Self, AppError> {
        let name = plugin.name().to_string();
        if self.plugins.contains(&name) {
            return Err(AppError::PluginAlreadyInstalled { plugin: name });
        }
        plugin.install(&mut self)?;
        log::info!("🔌 [APP] Plugin '{}' instalado", name);
        self.plugins.push(name);
        Ok(self)
    }

    pub(crate) fn set_router(&mut self, router: Rc<Router>) -> Result<(), AppError> {
        if self.router.is_some() {
            return Err(AppError::PluginAlreadyInstalled { plugin: "router".to_string() });
        }
        self.router = Some(router);
        Ok(())
    }

    pub fn router(&self) -> Option<&Rc<Router>> {
        self.router.as_ref()
    }

    /// Montar en el elemento que resuelva `selector`.
    /// El contenido previo del elemento se reemplaza; un segundo montaje se rechaza.
    pub fn mount(self, selector: &str) -> Result<Rc<AppContext>, AppError> {
        let router = self.router.clone().ok_or(AppError::RouterNotInstalled)?;
        let document = document().ok_or(AppError::NoDocument)?;
        let mount = document
            .query_selector(selector)
            .map_err(|e| AppError::InvalidSelector {
                selector: selector.to_string(),
                reason: describe_js(&e),
            })?
            .ok_or_else(|| AppError::MountTargetNotFound { selector: selector.to_string() })?;

        if mount.has_attribute(MOUNTED_ATTR) {
            return Err(AppError::AlreadyMounted { selector: selector.to_string() });
        }

        // Renderizar y localizar el outlet antes de tocar el nodo: si falla, queda como estaba
        let shell = self
            .root
            .render(&RenderContext::new(router))
            .map_err(|e| AppError::Render(describe_js(&e)))?;
        let outlet = if has_class(&shell, ROUTER_VIEW_CLASS) {
            shell.clone()
        } else {
            shell
                .query_selector(&format!(".{}", ROUTER_VIEW_CLASS))
                .ok()
                .flatten()
                .ok_or(AppError::MissingRouterView)?
        };

        clear_children(&mount);
        append_child(&mount, &shell)
            .and_then(|_| set_attribute(&mount, MOUNTED_ATTR, "true"))
            .map_err(|e| AppError::Render(describe_js(&e)))?;

        log::info!("📌 [APP] Montada en {}", selector);
        self.attach(Rc::new(DomOutlet::new(outlet, mount.clone())), Some(mount))
    }

    /// Conectar router y outlet y arrancar el router
    pub(crate) fn attach(self, outlet: Rc<dyn Outlet>, mount: Option<Element>) -> Result<Rc<AppContext>, AppError> {
        let router = self.router.ok_or(AppError::RouterNotInstalled)?;

        let weak_router = Rc::downgrade(&router);
        router.on_change(move |location| {
            if let Some(router) = weak_router.upgrade() {
                if let Err(e) = outlet.show(&router, location) {
                    log::error!("❌ [APP] Error mostrando {}: {}", location.full_path, e);
                }
            }
        });
        router.start()?;

        Ok(Rc::new(AppContext {
            router,
            mount,
            root: self.root,
            config: self.config,
        }))
    }
}

/// App montada. Hay una por página y vive hasta que se cierra la pestaña.
pub struct AppContext {
    router: Rc<Router>,
    mount: Option<Element>,
    root: Rc<dyn View>,
    config: AppConfig,
}

impl AppContext {
    pub fn router(&self) -> &Rc<Router> {
        &self.router
    }

    pub fn mount_element(&self) -> Option<&Element> {
        self.mount.as_ref()
    }

    pub fn root_view(&self) -> &Rc<dyn View> {
        &self.root
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn navigate(&self, location: &str) -> Result<NavigationOutcome, RouteError> {
        self.router.push(location)
    }
}

/// Bootstrap completo a partir de la configuración
pub fn bootstrap(config: AppConfig) -> Result<Rc<AppContext>, AppError> {
    let table = routes::table_for(config.route_table)?;
    let history = create_history(config.history_mode, &config.base_path)?;
    let router = Router::new(table, history);
    let selector = config.mount_selector.clone();

    App::create(Rc::new(Shell))
        .with_config(config)
        .use_plugin(router)?
        .mount(&selector)
}
