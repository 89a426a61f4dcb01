//! Estado compartido de la aplicación
//!
//! Este módulo construye los repositorios sobre un único handle de store
//! inyectado. No hay singletons globales: cada `AppState` tiene su propio
//! store y su propio ciclo de vida.

use std::sync::Arc;
use tracing::info;

use crate::config::AppConfig;
use crate::repositories::{DeliveryRepository, DriverRepository, RouteRepository};
use crate::services::{DashboardService, LookupService, SeedReport, SeedService};
use crate::store::{FileStore, KeyValueStore, MemoryStore};
use crate::utils::clock::{Clock, SystemClock};
use crate::utils::errors::AppResult;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn KeyValueStore>,
    pub drivers: Arc<DriverRepository>,
    pub routes: Arc<RouteRepository>,
    pub deliveries: Arc<DeliveryRepository>,
    clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            drivers: Arc::new(DriverRepository::with_clock(store.clone(), clock.clone())),
            routes: Arc::new(RouteRepository::with_clock(store.clone(), clock.clone())),
            deliveries: Arc::new(DeliveryRepository::with_clock(store.clone(), clock.clone())),
            store,
            clock,
        }
    }

    /// Estado sobre un `MemoryStore` vacío, sin datos de ejemplo
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()), Arc::new(SystemClock))
    }

    /// Abrir el `FileStore` configurado y sembrar si corresponde
    pub fn open(config: &AppConfig) -> AppResult<Self> {
        let store = FileStore::open(&config.data_dir)?;
        let state = Self::new(Arc::new(store), Arc::new(SystemClock));
        if config.seed {
            state.seed()?;
        }
        info!("✅ Store listo en {}", config.data_dir.display());
        Ok(state)
    }

    /// Sembrar las colecciones cuya clave no existe
    pub fn seed(&self) -> AppResult<SeedReport> {
        SeedService::with_clock(self.store.clone(), self.clock.clone()).seed_all()
    }

    pub fn dashboard(&self) -> DashboardService {
        DashboardService::new(
            self.drivers.clone(),
            self.routes.clone(),
            self.deliveries.clone(),
        )
    }

    pub fn lookup(&self) -> LookupService {
        LookupService::new(self.drivers.clone(), self.routes.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_seeds_once() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            data_dir: dir.path().to_path_buf(),
            ..AppConfig::default()
        };

        let state = AppState::open(&config).unwrap();
        assert_eq!(state.drivers.get_all().unwrap().len(), 2);
        state.deliveries.delete("1").unwrap();

        // Reabrir no vuelve a sembrar la entrega borrada
        let reopened = AppState::open(&config).unwrap();
        assert!(reopened.deliveries.get_all().unwrap().is_empty());
        assert_eq!(reopened.routes.get_all().unwrap().len(), 1);
    }

    #[test]
    fn test_open_without_seed() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            data_dir: dir.path().to_path_buf(),
            seed: false,
            ..AppConfig::default()
        };
        let state = AppState::open(&config).unwrap();
        assert!(state.drivers.get_all().unwrap().is_empty());
        assert!(state.deliveries.get_all().unwrap().is_empty());
    }
}
