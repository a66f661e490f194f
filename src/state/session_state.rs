// ============================================================================
// SESSION STATE - Sesión del usuario logueado
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::UserSession;
use crate::services::SessionStore;

/// Estado de sesión: copia en memoria + almacén durable
#[derive(Clone)]
pub struct SessionState {
    session: Rc<RefCell<Option<UserSession>>>,
    store: Rc<dyn SessionStore>,
}

impl SessionState {
    pub fn new(store: Rc<dyn SessionStore>) -> Self {
        Self {
            session: Rc::new(RefCell::new(None)),
            store,
        }
    }

    /// Cargar la sesión guardada (si existe y se puede leer)
    pub fn restore(&self) -> Option<UserSession> {
        let restored = match self.store.load() {
            Ok(session) => session,
            Err(e) => {
                log::warn!("⚠️ [SESSION] Sesión guardada ilegible, se ignora: {}", e);
                None
            }
        };
        *self.session.borrow_mut() = restored.clone();
        restored
    }

    /// Iniciar sesión tras un LOGIN exitoso
    pub fn start(&self, session: UserSession) {
        if let Err(e) = self.store.save(&session) {
            log::error!("❌ [SESSION] Error guardando sesión en storage: {}", e);
        }
        *self.session.borrow_mut() = Some(session);
    }

    /// Cerrar sesión (memoria + storage)
    pub fn end(&self) {
        if let Err(e) = self.store.clear() {
            log::error!("❌ [SESSION] Error eliminando sesión de storage: {}", e);
        }
        *self.session.borrow_mut() = None;
    }

    pub fn current(&self) -> Option<UserSession> {
        self.session.borrow().clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.borrow().is_some()
    }
}
