use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use super::collection::{JsonCollection, Record};
use crate::models::delivery::{Delivery, DeliveryStatus, NewDelivery};
use crate::store::{KeyValueStore, DELIVERIES_KEY};
use crate::utils::clock::{Clock, SystemClock};
use crate::utils::errors::AppResult;

impl Record for Delivery {
    const RESOURCE: &'static str = "Delivery";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Repositorio de entregas.
///
/// Dueño de la colección `logistics_deliveries`. El historial de cada entrega
/// sólo crece: `update_status` añade un evento y nunca reescribe los anteriores.
/// `route_id`/`driver_id` no se validan contra sus colecciones.
pub struct DeliveryRepository {
    collection: JsonCollection<Delivery>,
    clock: Arc<dyn Clock>,
}

impl DeliveryRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    pub fn with_clock(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            collection: JsonCollection::new(store, DELIVERIES_KEY),
            clock,
        }
    }

    pub fn get_all(&self) -> AppResult<Vec<Delivery>> {
        self.collection.load()
    }

    pub fn get_by_id(&self, id: &str) -> AppResult<Option<Delivery>> {
        self.collection.find(id)
    }

    pub fn find_by_status(&self, status: DeliveryStatus) -> AppResult<Vec<Delivery>> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|d| d.status == status)
            .collect())
    }

    pub fn find_by_route(&self, route_id: &str) -> AppResult<Vec<Delivery>> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|d| d.route_id == route_id)
            .collect())
    }

    /// Crear una entrega con id nuevo y el estado inicial como primer evento
    pub fn create(&self, input: NewDelivery) -> AppResult<Delivery> {
        let delivery = Delivery::new(Uuid::new_v4().to_string(), input, self.clock.now());
        let delivery = self.collection.insert(delivery)?;
        info!(
            "📦 Entrega {} creada con estado {} para {}",
            delivery.id, delivery.status, delivery.client_name
        );
        Ok(delivery)
    }

    /// Registrar un nuevo estado; `None` si la entrega no existe
    pub fn update_status(
        &self,
        id: &str,
        status: DeliveryStatus,
        notes: Option<String>,
    ) -> AppResult<Option<Delivery>> {
        let now = self.clock.now();
        let updated = self
            .collection
            .update_by_id(id, |delivery| delivery.record_status(status, notes, now))?;

        match &updated {
            Some(delivery) => info!(
                "🔄 Entrega {} -> {} ({} eventos en historial)",
                delivery.id,
                delivery.status,
                delivery.history.len()
            ),
            None => warn!("⚠️ Cambio de estado para entrega inexistente: {}", id),
        }
        Ok(updated)
    }

    /// Eliminar una entrega; `false` si no existía
    pub fn delete(&self, id: &str) -> AppResult<bool> {
        let removed = self.collection.remove_by_id(id)?;
        if removed {
            info!("🗑️ Entrega {} eliminada", id);
        } else {
            warn!("⚠️ Entrega {} no encontrada para eliminar", id);
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::utils::clock::ManualClock;
    use chrono::{Duration, TimeZone, Utc};

    fn repository() -> (DeliveryRepository, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap(),
        ));
        let repo = DeliveryRepository::with_clock(Arc::new(MemoryStore::new()), clock.clone());
        (repo, clock)
    }

    fn input(status: DeliveryStatus) -> NewDelivery {
        NewDelivery {
            route_id: "1".to_string(),
            driver_id: "1".to_string(),
            status,
            client_name: "Empresa ABC Ltda".to_string(),
            address: "Av. Paulista, 1000 - São Paulo".to_string(),
        }
    }

    #[test]
    fn test_create_records_first_event() {
        let (repo, _) = repository();
        for status in DeliveryStatus::ALL {
            let delivery = repo.create(input(status)).unwrap();
            assert_eq!(delivery.history.len(), 1);
            assert_eq!(delivery.history[0].status, status);
            assert_eq!(delivery.updated_at, delivery.created_at);
            assert!(delivery.is_consistent());
        }
        assert_eq!(repo.get_all().unwrap().len(), 5);
    }

    #[test]
    fn test_ids_are_unique() {
        let (repo, _) = repository();
        let a = repo.create(input(DeliveryStatus::Entregue)).unwrap();
        let b = repo.create(input(DeliveryStatus::Entregue)).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_update_status_appends_history() {
        let (repo, clock) = repository();
        let created = repo.create(input(DeliveryStatus::Entregue)).unwrap();
        let t0 = created.created_at;

        clock.advance(Duration::minutes(10));
        let updated = repo
            .update_status(&created.id, DeliveryStatus::Nok, Some("cliente recusou".to_string()))
            .unwrap()
            .unwrap();

        assert_eq!(updated.status, DeliveryStatus::Nok);
        assert_eq!(updated.history.len(), 2);
        assert_eq!(updated.history[0], created.history[0]);
        assert_eq!(updated.history[0].timestamp, t0);
        assert_eq!(updated.history[1].status, DeliveryStatus::Nok);
        assert_eq!(updated.history[1].notes.as_deref(), Some("cliente recusou"));
        assert_eq!(updated.updated_at, t0 + Duration::minutes(10));
        assert_eq!(updated.created_at, t0);

        // Persistido
        assert_eq!(repo.get_by_id(&created.id).unwrap(), Some(updated));
    }

    #[test]
    fn test_any_transition_is_allowed() {
        let (repo, clock) = repository();
        let created = repo.create(input(DeliveryStatus::Entregue)).unwrap();
        let sequence = [
            DeliveryStatus::Nok,
            DeliveryStatus::Entregue,
            DeliveryStatus::Entregue,
            DeliveryStatus::Revertido,
        ];
        let mut previous = created.history.clone();
        for status in sequence {
            clock.advance(Duration::seconds(1));
            let updated = repo.update_status(&created.id, status, None).unwrap().unwrap();
            assert_eq!(updated.history.len(), previous.len() + 1);
            assert_eq!(&updated.history[..previous.len()], previous.as_slice());
            assert!(updated.is_consistent());
            previous = updated.history;
        }
    }

    #[test]
    fn test_update_unknown_id() {
        let (repo, _) = repository();
        repo.create(input(DeliveryStatus::Entregue)).unwrap();
        let result = repo.update_status("unknown-id", DeliveryStatus::Nok, None).unwrap();
        assert!(result.is_none());
        assert_eq!(repo.get_all().unwrap().len(), 1);
    }

    #[test]
    fn test_delete() {
        let (repo, _) = repository();
        let delivery = repo.create(input(DeliveryStatus::Revertido)).unwrap();
        assert!(repo.delete(&delivery.id).unwrap());
        assert_eq!(repo.get_by_id(&delivery.id).unwrap(), None);
        assert!(!repo.delete(&delivery.id).unwrap());
        assert!(repo.update_status(&delivery.id, DeliveryStatus::Nok, None).unwrap().is_none());
    }

    #[test]
    fn test_find_helpers() {
        let (repo, _) = repository();
        repo.create(input(DeliveryStatus::Entregue)).unwrap();
        let mut other = input(DeliveryStatus::Nok);
        other.route_id = "2".to_string();
        repo.create(other).unwrap();

        assert_eq!(repo.find_by_status(DeliveryStatus::Nok).unwrap().len(), 1);
        assert_eq!(repo.find_by_status(DeliveryStatus::Revertido).unwrap().len(), 0);
        assert_eq!(repo.find_by_route("1").unwrap().len(), 1);
        assert_eq!(repo.find_by_route("ghost").unwrap().len(), 0);
    }
}
