//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use crate::config::environment::EnvironmentConfig;
use crate::repositories::FleetStore;

#[derive(Clone)]
pub struct AppState {
    pub store: FleetStore,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(store: FleetStore, config: EnvironmentConfig) -> Self {
        Self { store, config }
    }

    /// Estado con almacenamiento en memoria y configuración por defecto
    pub fn in_memory() -> Self {
        Self::new(FleetStore::in_memory(), EnvironmentConfig::default())
    }
}
