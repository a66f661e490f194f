// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{CustomerSection, Section};
use crate::services::SessionStore;
use crate::state::SessionState;

/// Vista de primer nivel activa
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveView {
    Login,
    Home,
    Section(Section),
    /// Tras pedir una sección que no existe: navbar visible, ninguna región
    Blank,
}

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub session: SessionState,
    pub active_view: Rc<RefCell<ActiveView>>,
    pub customer_view: Rc<RefCell<Option<CustomerSection>>>,
}

impl AppState {
    pub fn new(store: Rc<dyn SessionStore>) -> Self {
        Self {
            session: SessionState::new(store),
            active_view: Rc::new(RefCell::new(ActiveView::Login)),
            customer_view: Rc::new(RefCell::new(None)),
        }
    }

    pub fn active_view(&self) -> ActiveView {
        *self.active_view.borrow()
    }

    pub fn set_active_view(&self, view: ActiveView) {
        *self.active_view.borrow_mut() = view;
    }

    pub fn customer_view(&self) -> Option<CustomerSection> {
        *self.customer_view.borrow()
    }

    pub fn set_customer_view(&self, view: Option<CustomerSection>) {
        *self.customer_view.borrow_mut() = view;
    }
}
