//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. El dataset es inmutable, así que no hay
//! locks: todas las peticiones leen el mismo `Arc`.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::MockFleetStore;
use crate::routes::RequestDispatcher;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub store: Arc<MockFleetStore>,
    pub dispatcher: RequestDispatcher,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, store: MockFleetStore) -> Self {
        let store = Arc::new(store);
        Self {
            config,
            dispatcher: RequestDispatcher::new(store.clone()),
            store,
        }
    }

    /// Ruta relativa al prefijo de la API, o `None` si está fuera de él
    pub fn strip_api_prefix<'a>(&self, path: &'a str) -> Option<&'a str> {
        strip_prefix(&self.config.api_prefix, path)
    }
}

fn strip_prefix<'a>(prefix: &str, path: &'a str) -> Option<&'a str> {
    if prefix.is_empty() {
        return Some(path);
    }
    match path.strip_prefix(prefix) {
        Some("") => Some("/"),
        Some(rest) if rest.starts_with('/') => Some(rest),
        _ => None,
    }
}
