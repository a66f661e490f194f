// ============================================================================
// APP - Composición de estado, servicios y ViewModels
// ============================================================================

use std::rc::Rc;

use crate::config::AppConfig;
use crate::dom::{DomSurface, FormFields, RegionRegistry};
use crate::services::{ApiGateway, LocalSessionStore, SessionStore};
use crate::state::AppState;
use crate::viewmodels::{CustomerViewModel, NavigationViewModel, SessionViewModel};

/// Aplicación principal
#[derive(Clone)]
pub struct App {
    state: AppState,
    navigation: NavigationViewModel,
    session: SessionViewModel,
    customers: CustomerViewModel,
}

impl App {
    /// App del navegador: DOM real, localStorage y fetch
    pub fn new(config: &AppConfig) -> Self {
        let surface = Rc::new(DomSurface::new());
        let gateway = ApiGateway::from_config(config);
        if !gateway.is_configured() {
            log::error!("⚙️ [APP] API_URL no configurada: las peticiones al backend fallarán");
        }
        Self::from_parts(
            surface.clone(),
            surface,
            Rc::new(LocalSessionStore::new()),
            gateway,
            config.customer_sync_enabled,
        )
    }

    pub fn from_parts(
        regions: Rc<dyn RegionRegistry>,
        fields: Rc<dyn FormFields>,
        store: Rc<dyn SessionStore>,
        gateway: ApiGateway,
        customer_sync_enabled: bool,
    ) -> Self {
        let state = AppState::new(store);
        let navigation = NavigationViewModel::new(regions, state.clone());
        let session = SessionViewModel::new(
            gateway.clone(),
            fields.clone(),
            navigation.clone(),
            state.clone(),
        );
        let customers = CustomerViewModel::new(gateway, fields, customer_sync_enabled);

        Self {
            state,
            navigation,
            session,
            customers,
        }
    }

    /// Estado inicial: inicio si hay sesión guardada, login si no
    pub fn start(&self) {
        if self.session.restore() {
            log::info!("✅ [APP] Sesión previa encontrada, mostrando inicio");
        } else {
            log::info!("🔐 [APP] Sin sesión, mostrando login");
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn navigation(&self) -> &NavigationViewModel {
        &self.navigation
    }

    pub fn session(&self) -> &SessionViewModel {
        &self.session
    }

    pub fn customers(&self) -> &CustomerViewModel {
        &self.customers
    }
}
