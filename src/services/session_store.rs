use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use thiserror::Error;

use crate::models::UserSession;
use crate::utils::constants::SESSION_STORAGE_KEY;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionStoreError {
    #[error("no se pudo acceder a localStorage: {0}")]
    Unavailable(String),
    #[error("error serializando la sesión: {0}")]
    Serialization(String),
}

impl From<StorageError> for SessionStoreError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::SerdeError(e) => SessionStoreError::Serialization(e.to_string()),
            other => SessionStoreError::Unavailable(other.to_string()),
        }
    }
}

/// Almacén durable del perfil del usuario logueado
pub trait SessionStore {
    fn save(&self, session: &UserSession) -> Result<(), SessionStoreError>;
    fn load(&self) -> Result<Option<UserSession>, SessionStoreError>;
    fn clear(&self) -> Result<(), SessionStoreError>;
}

/// `localStorage` del navegador, clave fija
#[derive(Clone, Default)]
pub struct LocalSessionStore;

impl LocalSessionStore {
    pub fn new() -> Self {
        Self
    }
}

impl SessionStore for LocalSessionStore {
    fn save(&self, session: &UserSession) -> Result<(), SessionStoreError> {
        LocalStorage::set(SESSION_STORAGE_KEY, session)?;
        log::info!("💾 [STORAGE] Sesión guardada en localStorage");
        Ok(())
    }

    fn load(&self) -> Result<Option<UserSession>, SessionStoreError> {
        match LocalStorage::get::<UserSession>(SESSION_STORAGE_KEY) {
            Ok(session) => Ok(Some(session)),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        LocalStorage::delete(SESSION_STORAGE_KEY);
        log::info!("🗑️ [STORAGE] Sesión eliminada de localStorage");
        Ok(())
    }
}
