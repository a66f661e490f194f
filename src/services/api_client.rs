// ============================================================================
// API GATEWAY - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Un único endpoint, un único sobre {action, payload}. Todo fallo se
// normaliza a {estado: "error", mensaje}; el llamador nunca ve el error
// de transporte.
// ============================================================================

use std::rc::Rc;

use serde::Serialize;
use thiserror::Error;

use crate::config::AppConfig;
use crate::models::{ApiAction, ApiRequest, ApiResponse};
use crate::services::transport::{GlooTransport, Transport};

pub const NOT_CONFIGURED_MESSAGE: &str = "URL de API no configurada.";
pub const CONNECTION_ERROR_MESSAGE: &str =
    "Error de conexión con el servidor. Verifique la URL y la implementación.";

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("la URL de la API no está configurada")]
    NotConfigured,
    #[error("error serializando la petición: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("error de red: {0}")]
    Network(String),
    #[error("error de red o API. Status: {0}")]
    Status(u16),
    #[error("respuesta no válida: {0}")]
    Parse(#[source] serde_json::Error),
}

impl GatewayError {
    /// Mensaje que llega al usuario final dentro del sobre de error
    pub fn user_message(&self) -> &'static str {
        match self {
            GatewayError::NotConfigured => NOT_CONFIGURED_MESSAGE,
            _ => CONNECTION_ERROR_MESSAGE,
        }
    }
}

/// Gateway hacia el backend
#[derive(Clone)]
pub struct ApiGateway {
    endpoint: Option<String>,
    transport: Rc<dyn Transport>,
}

impl ApiGateway {
    pub fn new(endpoint: Option<String>, transport: Rc<dyn Transport>) -> Self {
        Self { endpoint, transport }
    }

    /// Gateway del navegador a partir de la configuración
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.api_endpoint().map(str::to_string),
            Rc::new(GlooTransport::new()),
        )
    }

    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }

    /// Enviar acción y normalizar cualquier fallo a un sobre de error
    pub async fn send<P: Serialize>(&self, action: ApiAction, payload: &P) -> ApiResponse {
        match self.try_send(action, payload).await {
            Ok(response) => response,
            Err(GatewayError::NotConfigured) => {
                log::error!("⚙️ [API] Configura API_URL (.env) con la URL de la Web App implementada");
                ApiResponse::error(NOT_CONFIGURED_MESSAGE)
            }
            Err(e) => {
                log::error!("❌ [API] Error al comunicarse con la API ({}): {}", action.as_str(), e);
                ApiResponse::error(e.user_message())
            }
        }
    }

    /// Igual que `send` pero devolviendo la causa tipada
    pub async fn try_send<P: Serialize>(
        &self,
        action: ApiAction,
        payload: &P,
    ) -> Result<ApiResponse, GatewayError> {
        let endpoint = self.endpoint.as_deref().ok_or(GatewayError::NotConfigured)?;

        let body = serde_json::to_string(&ApiRequest { action, payload })
            .map_err(GatewayError::Serialize)?;

        log::info!("📤 [API] Enviando {}", action.as_str());

        let raw = self.transport.post_json(endpoint, body).await?;
        if !raw.is_success() {
            return Err(GatewayError::Status(raw.status));
        }

        let response = serde_json::from_str::<ApiResponse>(&raw.body)
            .map_err(GatewayError::Parse)?;

        log::info!("📥 [API] {} respondió estado={:?}", action.as_str(), response.estado);
        Ok(response)
    }
}
