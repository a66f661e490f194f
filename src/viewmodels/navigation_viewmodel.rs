// ============================================================================
// NAVIGATION VIEWMODEL - Visibilidad de secciones y subsecciones
// ============================================================================
// Navegación plana: cada sección es una región del DOM que se muestra u
// oculta, y cada una tiene su botón en la navbar.
// ============================================================================

use std::rc::Rc;

use crate::dom::{Display, RegionRegistry};
use crate::models::{CustomerSection, Notice, Section, UnknownSection};
use crate::state::{ActiveView, AppState};
use crate::utils::constants::{LOGIN_REGION_ID, NAVBAR_ID};

#[derive(Clone)]
pub struct NavigationViewModel {
    regions: Rc<dyn RegionRegistry>,
    state: AppState,
}

impl NavigationViewModel {
    pub fn new(regions: Rc<dyn RegionRegistry>, state: AppState) -> Self {
        Self { regions, state }
    }

    /// Mostrar una sección registrada
    pub fn show_section(&self, section: Section) {
        self.reset_sections();

        if section.is_home() {
            // El menú de inicio es un modo propio: sin navbar
            self.regions.hide(NAVBAR_ID);
            self.regions.show(section.route().region_id, Display::Flex);
            self.state.set_active_view(ActiveView::Home);
            log::info!("🏠 [NAV] Menú de inicio");
            return;
        }

        self.regions.show(NAVBAR_ID, Display::Flex);
        let route = section.route();
        self.regions.show(route.region_id, Display::Block);
        self.regions.hide(route.nav_button_id);
        self.state.set_active_view(ActiveView::Section(section));
        log::info!("🧭 [NAV] Sección: {}", section);

        if section == Section::Clientes {
            self.show_customer_section(CustomerSection::General);
        }
    }

    /// Variante por nombre (la que llama la página). Un nombre desconocido
    /// deja todas las regiones ocultas y devuelve un diagnóstico.
    pub fn show_section_named(&self, name: &str) -> Option<Notice> {
        match name.parse::<Section>() {
            Ok(section) => {
                self.show_section(section);
                None
            }
            Err(UnknownSection(name)) => {
                self.reset_sections();
                self.regions.show(NAVBAR_ID, Display::Flex);
                self.state.set_active_view(ActiveView::Blank);
                log::warn!("⚠️ [NAV] Sección no registrada: {}", name);
                Some(Notice::UnknownSection { name })
            }
        }
    }

    /// Mostrar exactamente una subsección de clientes
    pub fn show_customer_section(&self, sub: CustomerSection) {
        self.hide_customer_sections();
        self.regions.show(sub.region_id(), Display::Block);
        self.state.set_customer_view(Some(sub));
    }

    pub fn show_customer_section_named(&self, name: &str) -> Option<Notice> {
        match name.parse::<CustomerSection>() {
            Ok(sub) => {
                self.show_customer_section(sub);
                None
            }
            Err(UnknownSection(name)) => {
                self.hide_customer_sections();
                self.state.set_customer_view(None);
                log::warn!("⚠️ [NAV] Subsección de clientes no registrada: {}", name);
                Some(Notice::UnknownCustomerSection { name })
            }
        }
    }

    /// Ocultar las regiones de todas las secciones
    pub fn hide_all_sections(&self) {
        for section in Section::ALL {
            self.regions.hide(section.route().region_id);
        }
    }

    /// Modo login: solo el formulario de login visible
    pub fn enter_login_view(&self) {
        self.hide_all_sections();
        self.regions.hide(NAVBAR_ID);
        self.regions.show(LOGIN_REGION_ID, Display::Block);
        self.state.set_active_view(ActiveView::Login);
    }

    /// Salir del login hacia el menú de inicio
    pub fn leave_login_view(&self) {
        self.regions.hide(LOGIN_REGION_ID);
        self.regions.show(NAVBAR_ID, Display::Flex);
        self.show_section(Section::Inicio);
    }

    fn reset_sections(&self) {
        self.hide_all_sections();
        for section in Section::ALL {
            self.regions.show(section.route().nav_button_id, Display::Block);
        }
    }

    fn hide_customer_sections(&self) {
        for sub in CustomerSection::ALL {
            self.regions.hide(sub.region_id());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MemorySessionStore, RecordingSurface};

    fn setup() -> (Rc<RecordingSurface>, AppState, NavigationViewModel) {
        let surface = Rc::new(RecordingSurface::default());
        let state = AppState::new(Rc::new(MemorySessionStore::default()));
        let nav = NavigationViewModel::new(surface.clone(), state.clone());
        (surface, state, nav)
    }

    #[test]
    fn each_section_shows_only_its_region_and_hides_its_button() {
        let (surface, state, nav) = setup();

        for section in [Section::Abonos, Section::Clientes, Section::NuevaVenta] {
            nav.show_section(section);

            assert_eq!(surface.visible_sections(), vec![section]);
            assert_eq!(surface.hidden_nav_buttons(), vec![section]);
            assert_eq!(surface.display_of(NAVBAR_ID), Some(Display::Flex));
            assert_eq!(surface.display_of(section.route().region_id), Some(Display::Block));
            assert_eq!(state.active_view(), ActiveView::Section(section));
        }
    }

    #[test]
    fn home_hides_navbar_regardless_of_prior_section() {
        let (surface, state, nav) = setup();
        nav.show_section(Section::NuevaVenta);

        nav.show_section(Section::Inicio);

        assert_eq!(surface.display_of(NAVBAR_ID), Some(Display::None));
        assert_eq!(surface.visible_sections(), vec![Section::Inicio]);
        assert_eq!(surface.display_of("menu_inicio"), Some(Display::Flex));
        // Ningún botón queda oculto de la navegación anterior
        assert!(surface.hidden_nav_buttons().is_empty());
        assert_eq!(state.active_view(), ActiveView::Home);
    }

    #[test]
    fn customers_section_starts_on_general() {
        let (surface, state, nav) = setup();
        nav.show_section(Section::Clientes);

        assert!(surface.is_visible("customer_general"));
        assert!(!surface.is_visible("customer_individual"));
        assert!(!surface.is_visible("customer_nuevo"));
        assert_eq!(state.customer_view(), Some(CustomerSection::General));
    }

    #[test]
    fn unknown_section_shows_nothing_and_reports() {
        let (surface, state, nav) = setup();
        nav.show_section(Section::Abonos);

        let notice = nav.show_section_named("reportes");

        assert_eq!(notice, Some(Notice::UnknownSection { name: "reportes".to_string() }));
        assert!(surface.visible_sections().is_empty());
        assert!(surface.hidden_nav_buttons().is_empty());
        assert_eq!(state.active_view(), ActiveView::Blank);
    }

    #[test]
    fn named_navigation_uses_registry_names() {
        let (surface, _state, nav) = setup();
        assert_eq!(nav.show_section_named("nuevaVenta"), None);
        assert_eq!(surface.visible_sections(), vec![Section::NuevaVenta]);
    }

    #[test]
    fn customer_subsections_are_exclusive() {
        let (surface, state, nav) = setup();

        for sub in CustomerSection::ALL {
            nav.show_customer_section(sub);
            for other in CustomerSection::ALL {
                assert_eq!(surface.is_visible(other.region_id()), other == sub);
            }
            assert_eq!(state.customer_view(), Some(sub));
        }
    }

    #[test]
    fn unknown_customer_subsection_hides_all_and_reports() {
        let (surface, state, nav) = setup();
        nav.show_customer_section(CustomerSection::Individual);

        let notice = nav.show_customer_section_named("historial");

        assert_eq!(notice, Some(Notice::UnknownCustomerSection { name: "historial".to_string() }));
        assert!(CustomerSection::ALL.iter().all(|s| !surface.is_visible(s.region_id())));
        assert_eq!(state.customer_view(), None);
    }

    #[test]
    fn login_view_hides_everything_else() {
        let (surface, state, nav) = setup();
        nav.show_section(Section::Abonos);

        nav.enter_login_view();

        assert!(surface.visible_sections().is_empty());
        assert!(!surface.is_visible(NAVBAR_ID));
        assert_eq!(surface.display_of(LOGIN_REGION_ID), Some(Display::Block));
        assert_eq!(state.active_view(), ActiveView::Login);
    }
}
