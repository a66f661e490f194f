// ============================================================================
// ELEMENT HELPERS - Acceso al DOM real
// ============================================================================

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, Window};

use crate::dom::surface::{Display, FormFields, RegionRegistry};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Obtener elemento HTML por ID
pub fn get_html_element(id: &str) -> Option<HtmlElement> {
    get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}

/// Obtener input por ID
pub fn get_input(id: &str) -> Option<HtmlInputElement> {
    get_element_by_id(id)?.dyn_into::<HtmlInputElement>().ok()
}

/// Página real: regiones y campos resueltos con `getElementById`
#[derive(Clone, Default)]
pub struct DomSurface;

impl DomSurface {
    pub fn new() -> Self {
        Self
    }
}

impl RegionRegistry for DomSurface {
    fn set_display(&self, id: &str, display: Display) {
        match get_html_element(id) {
            Some(element) => {
                if let Err(e) = element.style().set_property("display", display.as_css()) {
                    log::warn!("⚠️ [DOM] No se pudo cambiar display de #{}: {:?}", id, e);
                }
            }
            None => log::debug!("🔍 [DOM] Región #{} no encontrada", id),
        }
    }
}

impl FormFields for DomSurface {
    fn read(&self, id: &str) -> String {
        get_input(id).map(|input| input.value()).unwrap_or_default()
    }

    fn write(&self, id: &str, value: &str) {
        match get_input(id) {
            Some(input) => input.set_value(value),
            None => log::debug!("🔍 [DOM] Campo #{} no encontrado", id),
        }
    }
}
