/// Gravedad de un aviso (decide cómo se registra en consola)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// Resultado de una acción del usuario, listo para presentarse en la UI
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    MissingCredentials,
    Welcome { nombre: String },
    LoginFailed { mensaje: String },
    SessionClosed,
    CustomerMissingNames,
    CustomerReady,
    CustomerSaved,
    CustomerSaveFailed { mensaje: String },
    CustomerFormCleared,
    UnknownSection { name: String },
    UnknownCustomerSection { name: String },
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::MissingCredentials => "Ingrese usuario y contraseña.".to_string(),
            Notice::Welcome { nombre } => format!("¡Login Exitoso! Bienvenido, {}", nombre),
            Notice::LoginFailed { mensaje } => format!("Error: {}", mensaje),
            Notice::SessionClosed => "Sesión cerrada.".to_string(),
            Notice::CustomerMissingNames => {
                "Por favor, complete al menos los campos Nombres y Apellidos.".to_string()
            }
            Notice::CustomerReady => {
                "Datos listos para enviar a la API. Continuemos con la implementación del backend.".to_string()
            }
            Notice::CustomerSaved => "Cliente guardado correctamente.".to_string(),
            Notice::CustomerSaveFailed { mensaje } => {
                format!("Error guardando cliente: {}", mensaje)
            }
            Notice::CustomerFormCleared => "Formulario de cliente limpiado.".to_string(),
            Notice::UnknownSection { name } => format!("Cambiando a sección: {}", name),
            Notice::UnknownCustomerSection { name } => {
                format!("Subsección de clientes desconocida: {}", name)
            }
        }
    }

    pub fn level(&self) -> NoticeLevel {
        match self {
            Notice::Welcome { .. }
            | Notice::SessionClosed
            | Notice::CustomerReady
            | Notice::CustomerSaved
            | Notice::CustomerFormCleared => NoticeLevel::Info,
            Notice::MissingCredentials
            | Notice::CustomerMissingNames
            | Notice::UnknownSection { .. }
            | Notice::UnknownCustomerSection { .. } => NoticeLevel::Warning,
            Notice::LoginFailed { .. } | Notice::CustomerSaveFailed { .. } => NoticeLevel::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_is_shown_verbatim() {
        let notice = Notice::LoginFailed { mensaje: "bad credentials".to_string() };
        assert_eq!(notice.message(), "Error: bad credentials");
        assert_eq!(notice.level(), NoticeLevel::Error);
    }

    #[test]
    fn welcome_includes_display_name() {
        let notice = Notice::Welcome { nombre: "Ana".to_string() };
        assert!(notice.message().ends_with("Bienvenido, Ana"));
        assert_eq!(notice.level(), NoticeLevel::Info);
    }
}
