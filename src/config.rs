use serde::{Deserialize, Serialize};

/// Valor de relleno que indica que la URL de la API todavía no se configuró
pub const API_URL_PLACEHOLDER: &str = "REEMPLAZAR_CON_LA_URL_DE_TU_API_IMPLEMENTADA";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub customer_sync_enabled: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: API_URL_PLACEHOLDER.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            customer_sync_enabled: false,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            api_url: option_env!("API_URL")
                .unwrap_or(API_URL_PLACEHOLDER).to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            customer_sync_enabled: option_env!("CUSTOMER_SYNC_ENABLED")
                .unwrap_or("false").parse().unwrap_or(false),
        }
    }

    /// URL del endpoint, o `None` si sigue vacía o con el valor de relleno
    pub fn api_endpoint(&self) -> Option<&str> {
        let url = self.api_url.trim();
        if url.is_empty() || url == API_URL_PLACEHOLDER {
            None
        } else {
            Some(url)
        }
    }

    /// Nivel de log para la consola del navegador
    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Info
        } else {
            log::Level::Warn
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
