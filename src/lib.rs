// ============================================================================
// SHOE CONFIGURATOR - SPA SHELL (RUST PURO + WASM)
// ============================================================================
// - Routes: tabla estática ruta → vista, validada al arrancar
// - Router: historial HTML5/hash/memoria, navegación, enlaces
// - App: bootstrap (crear → instalar router → montar en #app)
// - Views: Home, NewPage, Configurator y el Shell raíz
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod router;
pub mod routes;
pub mod state;
pub mod views;

pub use app::{bootstrap, App, AppContext, Outlet, Plugin};
pub use config::{AppConfig, HistoryMode, RouteTableVariant};
pub use error::{AppError, RouteError};
pub use router::{NavigationOutcome, ResolvedLocation, Route, RouteTable, Router};

use wasm_bindgen::prelude::*;

use crate::config::CONFIG;

/// Punto de entrada WASM. Corre una vez al cargar la página.
/// Un fallo de bootstrap se reporta en consola y la página queda vacía.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let config = CONFIG.clone();
    wasm_logger::init(wasm_logger::Config::new(config.log_level()));
    log::info!("🚀 Shoe Configurator - entorno {}", config.environment);

    match bootstrap(config) {
        Ok(context) => {
            log::info!(
                "✅ [MAIN] App montada con {} rutas",
                context.router().table().len()
            );
            // La app vive hasta que se descarga la pestaña
            std::mem::forget(context);
        }
        Err(e) => {
            log::error!("❌ [MAIN] Bootstrap fallido: {}", e);
        }
    }
}
