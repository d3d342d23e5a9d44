// ============================================================================
// ROUTES - Tablas de rutas de la aplicación
// ============================================================================

use std::rc::Rc;

use crate::config::RouteTableVariant;
use crate::error::RouteError;
use crate::router::{Route, RouteTable};
use crate::views::{Configurator, Home, NewPage};

/// Tabla canónica: inicio, página secundaria y configurador
pub fn default_table() -> Result<RouteTable, RouteError> {
    RouteTable::new(vec![
        Route::new("/", "Home", Rc::new(Home)),
        Route::new("/new-page", "NewPage", Rc::new(NewPage)),
        Route::new("/configurator", "Configurator", Rc::new(Configurator)),
    ])
}

/// Tabla anterior sin `/configurator`
pub fn legacy_table() -> Result<RouteTable, RouteError> {
    RouteTable::new(vec![
        Route::new("/", "Home", Rc::new(Home)),
        Route::new("/new-page", "NewPage", Rc::new(NewPage)),
    ])
}

pub fn table_for(variant: RouteTableVariant) -> Result<RouteTable, RouteError> {
    match variant {
        RouteTableVariant::Default => default_table(),
        RouteTableVariant::Legacy => {
            log::warn!("⚠️ [ROUTES] Usando la tabla legacy sin /configurator");
            legacy_table()
        }
    }
}
