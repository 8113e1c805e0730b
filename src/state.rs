//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::fleet_repository::FleetRepository;

#[derive(Clone)]
pub struct AppState {
    pub fleet: Arc<RwLock<FleetRepository>>,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(config: EnvironmentConfig) -> Self {
        Self {
            fleet: Arc::new(RwLock::new(FleetRepository::new())),
            config,
        }
    }

    /// Cantidad de vehículos registrados en la flota
    pub async fn fleet_size(&self) -> usize {
        self.fleet.read().await.len()
    }
}
