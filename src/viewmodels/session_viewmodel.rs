// ============================================================================
// SESSION VIEWMODEL - LOGIN / LOGOUT
// ============================================================================
// LoggedOut -> LoggedIn con LOGIN exitoso; LoggedIn -> LoggedOut con logout.
// Devuelve un Notice; la vista decide cómo mostrarlo.
// ============================================================================

use std::rc::Rc;

use crate::dom::FormFields;
use crate::models::{ApiAction, LoginPayload, Notice, UserSession};
use crate::services::ApiGateway;
use crate::state::AppState;
use crate::utils::constants::{LOGIN_PASSWORD_FIELD, LOGIN_USER_FIELD};
use crate::viewmodels::NavigationViewModel;

#[derive(Clone)]
pub struct SessionViewModel {
    gateway: ApiGateway,
    fields: Rc<dyn FormFields>,
    navigation: NavigationViewModel,
    state: AppState,
}

impl SessionViewModel {
    pub fn new(
        gateway: ApiGateway,
        fields: Rc<dyn FormFields>,
        navigation: NavigationViewModel,
        state: AppState,
    ) -> Self {
        Self {
            gateway,
            fields,
            navigation,
            state,
        }
    }

    /// Login con los campos del formulario
    pub async fn login(&self) -> Notice {
        let user = self.fields.read(LOGIN_USER_FIELD);
        let password = self.fields.read(LOGIN_PASSWORD_FIELD);

        if user.is_empty() || password.is_empty() {
            return Notice::MissingCredentials;
        }

        log::info!("🔐 [LOGIN] Iniciando login para usuario: {}", user);

        let response = self
            .gateway
            .send(ApiAction::Login, &LoginPayload { user, password })
            .await;

        let session = response
            .into_result()
            .and_then(UserSession::from_login_data);

        match session {
            Ok(session) => {
                let nombre = session.display_name();
                self.state.session.start(session);
                self.navigation.leave_login_view();
                log::info!("✅ [LOGIN] Login exitoso: {}", nombre);
                Notice::Welcome { nombre }
            }
            Err(mensaje) => {
                log::warn!("❌ [LOGIN] Login rechazado: {}", mensaje);
                self.fields.clear(LOGIN_PASSWORD_FIELD);
                Notice::LoginFailed { mensaje }
            }
        }
    }

    /// Logout: incondicional e idempotente
    pub fn logout(&self) -> Notice {
        log::info!("👋 [LOGOUT] Cerrando sesión");
        self.state.session.end();
        self.navigation.enter_login_view();
        self.fields.clear(LOGIN_USER_FIELD);
        self.fields.clear(LOGIN_PASSWORD_FIELD);
        Notice::SessionClosed
    }

    /// Al arrancar: entrar directo al inicio si hay sesión guardada
    pub fn restore(&self) -> bool {
        match self.state.session.restore() {
            Some(session) => {
                log::info!("💾 [APP] Sesión restaurada: {}", session.display_name());
                self.navigation.leave_login_view();
                true
            }
            None => {
                self.navigation.enter_login_view();
                false
            }
        }
    }
}
