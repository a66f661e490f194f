use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Perfil del usuario logueado: el objeto `data` de LOGIN, guardado sin tocar
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserSession {
    fields: Map<String, Value>,
}

impl UserSession {
    /// Construir desde el `data` de una respuesta LOGIN (debe ser un objeto)
    pub fn from_login_data(data: Value) -> Result<Self, String> {
        match data {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err("Respuesta de login sin datos de usuario.".to_string()),
        }
    }

    /// `nombre` como texto; vacío si falta o es null
    pub fn display_name(&self) -> String {
        match self.fields.get("nombre") {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(nombre)) => nombre.clone(),
            Some(other) => other.to_string(),
        }
    }
}
