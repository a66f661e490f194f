// Dobles de prueba para DOM, localStorage y HTTP

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;

use crate::dom::{Display, FormFields, RegionRegistry};
use crate::models::{Section, UserSession};
use crate::services::{GatewayError, RawResponse, SessionStore, SessionStoreError, Transport};

/// Página falsa que recuerda cada cambio de display y el valor de cada campo
#[derive(Default)]
pub struct RecordingSurface {
    displays: RefCell<HashMap<String, Display>>,
    history: RefCell<Vec<(String, Display)>>,
    values: RefCell<HashMap<String, String>>,
}

impl RecordingSurface {
    pub fn display_of(&self, id: &str) -> Option<Display> {
        self.displays.borrow().get(id).copied()
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.display_of(id).map_or(false, |d| d.is_visible())
    }

    pub fn was_set(&self, id: &str, display: Display) -> bool {
        self.history.borrow().iter().any(|(i, d)| i == id && *d == display)
    }

    pub fn visible_sections(&self) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|s| self.is_visible(s.route().region_id))
            .collect()
    }

    pub fn hidden_nav_buttons(&self) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|s| !self.is_visible(s.route().nav_button_id))
            .collect()
    }

    pub fn fill(&self, id: &str, value: &str) {
        self.values.borrow_mut().insert(id.to_string(), value.to_string());
    }

    pub fn value_of(&self, id: &str) -> Option<String> {
        self.values.borrow().get(id).cloned()
    }
}

impl RegionRegistry for RecordingSurface {
    fn set_display(&self, id: &str, display: Display) {
        self.displays.borrow_mut().insert(id.to_string(), display);
        self.history.borrow_mut().push((id.to_string(), display));
    }
}

impl FormFields for RecordingSurface {
    fn read(&self, id: &str) -> String {
        self.value_of(id).unwrap_or_default()
    }

    fn write(&self, id: &str, value: &str) {
        self.fill(id, value);
    }
}

/// localStorage en memoria; `broken` simula storage inaccesible
#[derive(Default)]
pub struct MemorySessionStore {
    session: RefCell<Option<UserSession>>,
    broken: bool,
}

impl MemorySessionStore {
    pub fn with_session(session: UserSession) -> Self {
        Self {
            session: RefCell::new(Some(session)),
            broken: false,
        }
    }

    pub fn broken() -> Self {
        Self {
            session: RefCell::new(None),
            broken: true,
        }
    }

    pub fn stored(&self) -> Option<UserSession> {
        self.session.borrow().clone()
    }

    fn check(&self) -> Result<(), SessionStoreError> {
        if self.broken {
            Err(SessionStoreError::Unavailable("storage deshabilitado".to_string()))
        } else {
            Ok(())
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, session: &UserSession) -> Result<(), SessionStoreError> {
        self.check()?;
        *self.session.borrow_mut() = Some(session.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<UserSession>, SessionStoreError> {
        self.check()?;
        Ok(self.stored())
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        self.check()?;
        *self.session.borrow_mut() = None;
        Ok(())
    }
}

/// Transporte HTTP falso con respuesta fija; registra (url, cuerpo) de cada POST
pub struct FakeTransport {
    reply: Result<RawResponse, String>,
    requests: RefCell<Vec<(String, String)>>,
}

impl FakeTransport {
    pub fn replying(status: u16, body: &str) -> Self {
        Self {
            reply: Ok(RawResponse { status, body: body.to_string() }),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(cause: &str) -> Self {
        Self {
            reply: Err(cause.to_string()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests.borrow().clone()
    }

    pub fn sent_bodies(&self) -> Vec<serde_json::Value> {
        self.requests
            .borrow()
            .iter()
            .map(|(_, body)| serde_json::from_str(body).unwrap())
            .collect()
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<RawResponse, GatewayError> {
        self.requests.borrow_mut().push((url.to_string(), body));
        self.reply.clone().map_err(GatewayError::Network)
    }
}

/// Superficie, storage y transporte falsos ya cableados
pub struct Harness {
    pub surface: Rc<RecordingSurface>,
    pub store: Rc<MemorySessionStore>,
    pub transport: Rc<FakeTransport>,
}

impl Harness {
    pub fn new(transport: FakeTransport) -> Self {
        Self {
            surface: Rc::new(RecordingSurface::default()),
            store: Rc::new(MemorySessionStore::default()),
            transport: Rc::new(transport),
        }
    }
}
