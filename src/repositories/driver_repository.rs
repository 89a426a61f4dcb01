use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use super::collection::{JsonCollection, Record};
use crate::models::driver::{Driver, DriverUpdate, NewDriver};
use crate::store::{KeyValueStore, DRIVERS_KEY};
use crate::utils::clock::{Clock, SystemClock};
use crate::utils::errors::AppResult;

impl Record for Driver {
    const RESOURCE: &'static str = "Driver";

    fn id(&self) -> &str {
        &self.id
    }
}

pub struct DriverRepository {
    collection: JsonCollection<Driver>,
    clock: Arc<dyn Clock>,
}

impl DriverRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    pub fn with_clock(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            collection: JsonCollection::new(store, DRIVERS_KEY),
            clock,
        }
    }

    pub fn get_all(&self) -> AppResult<Vec<Driver>> {
        self.collection.load()
    }

    pub fn get_by_id(&self, id: &str) -> AppResult<Option<Driver>> {
        self.collection.find(id)
    }

    pub fn create(&self, input: NewDriver) -> AppResult<Driver> {
        let driver = Driver::new(Uuid::new_v4().to_string(), input, self.clock.now());
        let driver = self.collection.insert(driver)?;
        info!("🚚 Motorista {} creado: {}", driver.id, driver.name);
        Ok(driver)
    }

    pub fn update(&self, id: &str, update: DriverUpdate) -> AppResult<Option<Driver>> {
        let updated = self.collection.update_by_id(id, |driver| driver.apply(update))?;
        if updated.is_none() {
            warn!("⚠️ Motorista {} no encontrado para actualizar", id);
        }
        Ok(updated)
    }

    /// Eliminar un motorista. Rotas y entregas que lo referencian no se tocan.
    pub fn delete(&self, id: &str) -> AppResult<bool> {
        let removed = self.collection.remove_by_id(id)?;
        if removed {
            info!("🗑️ Motorista {} eliminado", id);
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::driver::DriverStatus;
    use crate::store::MemoryStore;

    fn new_driver(name: &str) -> NewDriver {
        NewDriver {
            name: name.to_string(),
            cpf: "123.456.789-00".to_string(),
            phone: "(11) 98765-4321".to_string(),
            status: DriverStatus::Active,
        }
    }

    #[test]
    fn test_driver_crud() {
        let repo = DriverRepository::new(Arc::new(MemoryStore::new()));
        let driver = repo.create(new_driver("João Silva")).unwrap();
        assert_eq!(repo.get_all().unwrap().len(), 1);

        let updated = repo
            .update(
                &driver.id,
                DriverUpdate {
                    phone: Some("(21) 3456-7890".to_string()),
                    ..Default::default()
                },
            )
            .unwrap()
            .unwrap();
        assert_eq!(updated.phone, "(21) 3456-7890");
        assert_eq!(updated.id, driver.id);
        assert_eq!(updated.created_at, driver.created_at);

        assert!(repo.update("nope", DriverUpdate::default()).unwrap().is_none());
        assert!(repo.delete(&driver.id).unwrap());
        assert!(!repo.delete(&driver.id).unwrap());
        assert!(repo.get_by_id(&driver.id).unwrap().is_none());
    }
}
