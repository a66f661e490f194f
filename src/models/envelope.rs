// ============================================================================
// ENVELOPE - Contrato de petición/respuesta con el backend
// ============================================================================
// Toda petición viaja como {action, payload} y toda respuesta como
// {estado, data?, mensaje?}
// ============================================================================

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Mensaje cuando el backend responde error sin `mensaje`
pub const UNKNOWN_ERROR_MESSAGE: &str = "Error desconocido.";

/// Acciones que entiende el backend
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiAction {
    Login,
    GuardarCliente,
}

impl ApiAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiAction::Login => "LOGIN",
            ApiAction::GuardarCliente => "GUARDAR_CLIENTE",
        }
    }
}

/// Petición genérica: el payload depende de la acción
#[derive(Debug, Serialize)]
pub struct ApiRequest<'a, P: Serialize> {
    pub action: ApiAction,
    pub payload: &'a P,
}

/// Payload de LOGIN
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginPayload {
    pub user: String,
    pub password: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Estado {
    Ok,
    Error,
}

/// Respuesta genérica del backend
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub estado: Estado,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mensaje: Option<String>,
}

impl ApiResponse {
    pub fn error(mensaje: impl Into<String>) -> Self {
        Self {
            estado: Estado::Error,
            data: None,
            mensaje: Some(mensaje.into()),
        }
    }

    /// `Ok(data)` si estado es "ok" (Null si no vino data), `Err(mensaje)` si no
    pub fn into_result(self) -> Result<Value, String> {
        match self.estado {
            Estado::Ok => Ok(self.data.unwrap_or(Value::Null)),
            Estado::Error => Err(self
                .mensaje
                .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_action_and_payload() {
        let payload = LoginPayload {
            user: "ana".to_string(),
            password: "secreto".to_string(),
        };
        let request = ApiRequest { action: ApiAction::Login, payload: &payload };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({"action": "LOGIN", "payload": {"user": "ana", "password": "secreto"}})
        );
    }

    #[test]
    fn action_names_match_backend() {
        assert_eq!(serde_json::to_value(ApiAction::GuardarCliente).unwrap(), json!("GUARDAR_CLIENTE"));
        assert_eq!(ApiAction::GuardarCliente.as_str(), "GUARDAR_CLIENTE");
        assert_eq!(ApiAction::Login.as_str(), "LOGIN");
    }

    #[test]
    fn error_without_mensaje_is_unknown_failure() {
        let response: ApiResponse = serde_json::from_str(r#"{"estado":"error"}"#).unwrap();
        assert_eq!(response.into_result(), Err(UNKNOWN_ERROR_MESSAGE.to_string()));
    }

    #[test]
    fn ok_response_yields_data() {
        let response: ApiResponse =
            serde_json::from_str(r#"{"estado":"ok","data":{"nombre":"Ana"}}"#).unwrap();
        assert_eq!(response.estado, Estado::Ok);
        assert_eq!(response.into_result(), Ok(json!({"nombre": "Ana"})));
    }

    #[test]
    fn unknown_estado_does_not_parse() {
        assert!(serde_json::from_str::<ApiResponse>(r#"{"estado":"quizas"}"#).is_err());
    }
}
