// IDs del DOM y claves de almacenamiento compartidas

/// Clave de localStorage con el perfil del usuario logueado
pub const SESSION_STORAGE_KEY: &str = "userData";

pub const LOGIN_REGION_ID: &str = "Login";
pub const NAVBAR_ID: &str = "navbar";

pub const LOGIN_USER_FIELD: &str = "login_user";
pub const LOGIN_PASSWORD_FIELD: &str = "login_pass";

pub const CUSTOMER_NOMBRES_FIELD: &str = "nombre_cliente";
pub const CUSTOMER_APELLIDOS_FIELD: &str = "apellido_cliente";
pub const CUSTOMER_DPI_FIELD: &str = "dpi_cliente";
pub const CUSTOMER_TELEFONO_FIELD: &str = "telefono_cliente";
pub const CUSTOMER_DIRECCION_FIELD: &str = "direccion_cliente";

pub const CUSTOMER_FIELDS: [&str; 5] = [
    CUSTOMER_NOMBRES_FIELD,
    CUSTOMER_APELLIDOS_FIELD,
    CUSTOMER_DPI_FIELD,
    CUSTOMER_TELEFONO_FIELD,
    CUSTOMER_DIRECCION_FIELD,
];
