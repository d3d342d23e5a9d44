use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Estrategia de historial que usa el router
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    /// HTML5 `pushState` + `popstate`
    #[default]
    Web,
    /// Rutas detrás de `#`
    Hash,
    /// Pila en memoria, sin tocar la URL
    Memory,
}

impl FromStr for HistoryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "web" | "html5" => Ok(Self::Web),
            "hash" => Ok(Self::Hash),
            "memory" => Ok(Self::Memory),
            other => Err(format!("unknown history mode '{}'", other)),
        }
    }
}

/// Variante de tabla de rutas.
/// `Legacy` es la tabla de dos rutas sin `/configurator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteTableVariant {
    #[default]
    Default,
    Legacy,
}

impl FromStr for RouteTableVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "legacy" => Ok(Self::Legacy),
            other => Err(format!("unknown route table '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub environment: String,
    pub log_level: String,
    pub mount_selector: String,
    pub history_mode: HistoryMode,
    pub base_path: String,
    pub route_table: RouteTableVariant,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            log_level: "info".to_string(),
            mount_selector: "#app".to_string(),
            history_mode: HistoryMode::Web,
            base_path: String::new(),
            route_table: RouteTableVariant::Default,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación.
    /// `APP_CONFIG_JSON`, si existe, tiene prioridad sobre las variables sueltas.
    pub fn from_env() -> Self {
        if let Some(json) = option_env!("APP_CONFIG_JSON") {
            match Self::from_json(json) {
                Ok(config) => return config,
                Err(e) => log::warn!("⚠️ [CONFIG] APP_CONFIG_JSON inválido, se ignora: {}", e),
            }
        }

        let defaults = Self::default();
        Self {
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            log_level: option_env!("LOG_LEVEL")
                .unwrap_or("info").to_string(),
            mount_selector: option_env!("MOUNT_SELECTOR")
                .unwrap_or("#app").to_string(),
            history_mode: option_env!("HISTORY_MODE")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.history_mode),
            base_path: option_env!("BASE_PATH")
                .unwrap_or("").to_string(),
            route_table: option_env!("ROUTE_TABLE")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.route_table),
        }
    }

    /// Parsea configuración JSON; los campos ausentes toman su valor por defecto
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Nivel de log para `wasm_logger`. Valores desconocidos caen en `Info`.
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_mount_on_app_with_web_history() {
        let config = AppConfig::default();
        assert_eq!(config.mount_selector, "#app");
        assert_eq!(config.history_mode, HistoryMode::Web);
        assert_eq!(config.route_table, RouteTableVariant::Default);
        assert!(!config.is_production());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"history_mode":"hash","base_path":"/shop"}"#).unwrap();
        assert_eq!(config.history_mode, HistoryMode::Hash);
        assert_eq!(config.base_path, "/shop");
        assert_eq!(config.mount_selector, "#app");
    }

    #[test]
    fn invalid_json_is_rejected() {
        assert!(AppConfig::from_json(r#"{"history_mode":"sideways"}"#).is_err());
    }

    #[test]
    fn history_mode_parses_case_insensitively() {
        assert_eq!("HASH".parse::<HistoryMode>(), Ok(HistoryMode::Hash));
        assert_eq!("html5".parse::<HistoryMode>(), Ok(HistoryMode::Web));
        assert!("tape".parse::<HistoryMode>().is_err());
        assert_eq!("Legacy".parse::<RouteTableVariant>(), Ok(RouteTableVariant::Legacy));
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let mut config = AppConfig::default();
        config.log_level = "debug".into();
        assert_eq!(config.log_level(), log::Level::Debug);
        config.log_level = "loud".into();
        assert_eq!(config.log_level(), log::Level::Info);
    }
}
