use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Datos del formulario "nuevo cliente" (payload provisional de GUARDAR_CLIENTE)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub nombres: String,
    pub apellidos: String,
    pub dpi: String,
    pub telefono: String,
    pub direccion: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Faltan nombres y/o apellidos del cliente")]
    MissingNames,
}

impl CustomerRecord {
    /// Solo nombres y apellidos son obligatorios
    pub fn validate(self) -> Result<Self, ValidationError> {
        if self.nombres.is_empty() || self.apellidos.is_empty() {
            return Err(ValidationError::MissingNames);
        }
        Ok(self)
    }
}
