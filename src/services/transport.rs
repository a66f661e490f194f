// ============================================================================
// TRANSPORT - Capa HTTP intercambiable
// ============================================================================
// El gateway solo necesita "POST este JSON y dame status + cuerpo".
// En el navegador se usa gloo-net; en tests, un transporte falso.
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::Request;

use crate::services::api_client::GatewayError;

/// Respuesta HTTP cruda
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait(?Send)]
pub trait Transport {
    /// POST con `Content-Type: application/json`
    async fn post_json(&self, url: &str, body: String) -> Result<RawResponse, GatewayError>;
}

/// Transporte real basado en `fetch` (gloo-net)
#[derive(Clone, Default)]
pub struct GlooTransport;

impl GlooTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<RawResponse, GatewayError> {
        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| GatewayError::Network(format!("Error construyendo request: {}", e)))?
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Network(format!("Error leyendo respuesta: {}", e)))?;

        Ok(RawResponse { status, body })
    }
}
