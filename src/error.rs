// ============================================================================
// ERRORS - Errores de la tabla de rutas, del router y del arranque
// ============================================================================

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errores de la tabla de rutas y de la navegación
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("route path '{path}' must start with '/'")]
    InvalidPath { path: String },

    #[error("route '{path}' has an empty name")]
    EmptyName { path: String },

    #[error("duplicate route path '{path}'")]
    DuplicatePath { path: String },

    #[error("duplicate route name '{name}'")]
    DuplicateName { name: String },

    #[error("no route named '{name}'")]
    UnknownName { name: String },

    #[error("history operation failed: {0}")]
    History(String),
}

/// Errores del bootstrap de la aplicación. Todos son fatales.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("mount target '{selector}' not found")]
    MountTargetNotFound { selector: String },

    #[error("invalid mount selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("mount target '{selector}' already owns a mounted app")]
    AlreadyMounted { selector: String },

    #[error("no document available")]
    NoDocument,

    #[error("plugin '{plugin}' is already installed")]
    PluginAlreadyInstalled { plugin: String },

    #[error("no router installed before mount")]
    RouterNotInstalled,

    #[error("root view rendered no router outlet")]
    MissingRouterView,

    #[error("render failed: {0}")]
    Render(String),

    #[error(transparent)]
    Route(#[from] RouteError),
}

impl From<AppError> for JsValue {
    fn from(err: AppError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Convierte un error JS en texto para guardarlo en los enums de arriba
pub(crate) fn describe_js(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
