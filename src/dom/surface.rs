// ============================================================================
// SURFACE - Lo mínimo que los ViewModels necesitan del DOM
// ============================================================================

/// Modo de visualización de una región
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Display {
    Block,
    Flex,
    None,
}

impl Display {
    pub fn as_css(&self) -> &'static str {
        match self {
            Display::Block => "block",
            Display::Flex => "flex",
            Display::None => "none",
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, Display::None)
    }
}

/// Regiones mostrables/ocultables por ID
pub trait RegionRegistry {
    /// Un ID inexistente es un no-op
    fn set_display(&self, id: &str, display: Display);

    fn show(&self, id: &str, display: Display) {
        self.set_display(id, display);
    }

    fn hide(&self, id: &str) {
        self.set_display(id, Display::None);
    }
}

/// Campos de formulario por ID
pub trait FormFields {
    /// Cadena vacía si el campo no existe
    fn read(&self, id: &str) -> String;
    fn write(&self, id: &str, value: &str);

    fn clear(&self, id: &str) {
        self.write(id, "");
    }
}
