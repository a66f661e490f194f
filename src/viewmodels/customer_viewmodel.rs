// ============================================================================
// CUSTOMER VIEWMODEL - Formulario "nuevo cliente"
// ============================================================================

use std::rc::Rc;

use crate::dom::FormFields;
use crate::models::{ApiAction, CustomerRecord, Notice, ValidationError};
use crate::services::ApiGateway;
use crate::utils::constants::{
    CUSTOMER_APELLIDOS_FIELD, CUSTOMER_DIRECCION_FIELD, CUSTOMER_DPI_FIELD, CUSTOMER_FIELDS,
    CUSTOMER_NOMBRES_FIELD, CUSTOMER_TELEFONO_FIELD,
};

#[derive(Clone)]
pub struct CustomerViewModel {
    gateway: ApiGateway,
    fields: Rc<dyn FormFields>,
    /// GUARDAR_CLIENTE aún es provisional: apagado salvo que se configure
    sync_enabled: bool,
}

impl CustomerViewModel {
    pub fn new(gateway: ApiGateway, fields: Rc<dyn FormFields>, sync_enabled: bool) -> Self {
        Self {
            gateway,
            fields,
            sync_enabled,
        }
    }

    /// Leer los cinco campos tal cual
    pub fn collect(&self) -> CustomerRecord {
        CustomerRecord {
            nombres: self.fields.read(CUSTOMER_NOMBRES_FIELD),
            apellidos: self.fields.read(CUSTOMER_APELLIDOS_FIELD),
            dpi: self.fields.read(CUSTOMER_DPI_FIELD),
            telefono: self.fields.read(CUSTOMER_TELEFONO_FIELD),
            direccion: self.fields.read(CUSTOMER_DIRECCION_FIELD),
        }
    }

    pub fn collect_and_validate(&self) -> Result<CustomerRecord, ValidationError> {
        self.collect().validate()
    }

    /// Botón "AGREGAR CLIENTE"
    pub async fn save(&self) -> Notice {
        let record = match self.collect_and_validate() {
            Ok(record) => record,
            Err(e) => {
                log::warn!("⚠️ [CLIENTES] {}", e);
                return Notice::CustomerMissingNames;
            }
        };

        if !self.sync_enabled {
            log::info!("📝 [CLIENTES] Cliente listo para enviar: {} {}", record.nombres, record.apellidos);
            self.clear_fields();
            return Notice::CustomerReady;
        }

        match self.gateway.send(ApiAction::GuardarCliente, &record).await.into_result() {
            Ok(_) => {
                log::info!("✅ [CLIENTES] Cliente guardado: {} {}", record.nombres, record.apellidos);
                self.clear_fields();
                Notice::CustomerSaved
            }
            Err(mensaje) => {
                log::error!("❌ [CLIENTES] Error guardando cliente: {}", mensaje);
                Notice::CustomerSaveFailed { mensaje }
            }
        }
    }

    /// Botón "LIMPIAR"
    pub fn clear(&self) -> Notice {
        self.clear_fields();
        Notice::CustomerFormCleared
    }

    fn clear_fields(&self) {
        for id in CUSTOMER_FIELDS {
            self.fields.clear(id);
        }
    }
}
