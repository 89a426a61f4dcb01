//! Datos iniciales
//!
//! En el primer acceso, cada colección cuya clave no existe en el store se
//! rellena con un pequeño conjunto de registros de ejemplo. Si la clave ya
//! existe (aunque sea `[]`) la colección no se toca.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

use crate::models::delivery::{Delivery, DeliveryHistoryEvent, DeliveryStatus};
use crate::models::driver::{Driver, DriverStatus};
use crate::models::route::{Route, RouteStatus};
use crate::store::{KeyValueStore, DELIVERIES_KEY, DRIVERS_KEY, ROUTES_KEY};
use crate::utils::clock::{Clock, SystemClock};
use crate::utils::errors::AppResult;

/// Colecciones sembradas en una llamada
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub seeded: Vec<&'static str>,
}

impl SeedReport {
    pub fn is_empty(&self) -> bool {
        self.seeded.is_empty()
    }
}

pub struct SeedService {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
}

impl SeedService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    pub fn with_clock(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Sembrar todas las colecciones ausentes. Idempotente.
    pub fn seed_all(&self) -> AppResult<SeedReport> {
        let now = self.clock.now();
        let mut report = SeedReport::default();

        if self.seed_if_absent(DRIVERS_KEY, &seed_drivers(now))? {
            report.seeded.push(DRIVERS_KEY);
        }
        if self.seed_if_absent(ROUTES_KEY, &seed_routes(now))? {
            report.seeded.push(ROUTES_KEY);
        }
        if self.seed_if_absent(DELIVERIES_KEY, &seed_deliveries(now))? {
            report.seeded.push(DELIVERIES_KEY);
        }

        if report.is_empty() {
            debug!("🌱 Store ya inicializado, sin datos de ejemplo");
        } else {
            info!("🌱 Datos de ejemplo cargados en: {}", report.seeded.join(", "));
        }
        Ok(report)
    }

    /// Escribir `records` bajo `key` sólo si la clave no existe.
    ///
    /// La comprobación y la escritura ocurren dentro de un único
    /// `KeyValueStore::update`.
    pub fn seed_if_absent<T: Serialize>(&self, key: &str, records: &[T]) -> AppResult<bool> {
        let raw = serde_json::to_string(records)?;
        let mut seeded = false;
        self.store.update(key, &mut |current| {
            if current.is_some() {
                return Ok(None);
            }
            seeded = true;
            Ok(Some(raw.clone()))
        })?;
        Ok(seeded)
    }
}

fn seed_drivers(now: DateTime<Utc>) -> Vec<Driver> {
    vec![
        Driver {
            id: "1".to_string(),
            name: "João Silva".to_string(),
            cpf: "123.456.789-00".to_string(),
            phone: "(11) 98765-4321".to_string(),
            status: DriverStatus::Active,
            created_at: now,
        },
        Driver {
            id: "2".to_string(),
            name: "Maria Santos".to_string(),
            cpf: "987.654.321-00".to_string(),
            phone: "(11) 91234-5678".to_string(),
            status: DriverStatus::Active,
            created_at: now,
        },
    ]
}

fn seed_routes(now: DateTime<Utc>) -> Vec<Route> {
    vec![Route {
        id: "1".to_string(),
        origin: "São Paulo - SP".to_string(),
        destination: "Rio de Janeiro - RJ".to_string(),
        driver_id: "1".to_string(),
        client_name: "Empresa ABC Ltda".to_string(),
        date: now.format("%Y-%m-%d").to_string(),
        value: 1500.0,
        observations: "Entrega urgente".to_string(),
        status: RouteStatus::Active,
        created_at: now,
    }]
}

fn seed_deliveries(now: DateTime<Utc>) -> Vec<Delivery> {
    vec![Delivery {
        id: "1".to_string(),
        route_id: "1".to_string(),
        driver_id: "1".to_string(),
        status: DeliveryStatus::Entregue,
        client_name: "Empresa ABC Ltda".to_string(),
        address: "Av. Paulista, 1000 - São Paulo".to_string(),
        updated_at: now,
        created_at: now,
        history: vec![DeliveryHistoryEvent {
            status: DeliveryStatus::Entregue,
            timestamp: now,
            notes: Some("Entrega realizada com sucesso".to_string()),
        }],
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_seed_all_then_idempotent() {
        let store = Arc::new(MemoryStore::new());
        let seed = SeedService::new(store.clone());

        let first = seed.seed_all().unwrap();
        assert_eq!(first.seeded, vec![DRIVERS_KEY, ROUTES_KEY, DELIVERIES_KEY]);
        let snapshot: Vec<Option<String>> = [DRIVERS_KEY, ROUTES_KEY, DELIVERIES_KEY]
            .iter()
            .map(|k| store.get(k).unwrap())
            .collect();

        let second = seed.seed_all().unwrap();
        assert!(second.is_empty());
        for (key, before) in [DRIVERS_KEY, ROUTES_KEY, DELIVERIES_KEY].iter().zip(snapshot) {
            assert_eq!(store.get(key).unwrap(), before);
        }
    }

    #[test]
    fn test_empty_array_blocks_reseeding() {
        let store = Arc::new(MemoryStore::new());
        store.set(DELIVERIES_KEY, "[]").unwrap();

        let report = SeedService::new(store.clone()).seed_all().unwrap();
        assert_eq!(report.seeded, vec![DRIVERS_KEY, ROUTES_KEY]);
        assert_eq!(store.get(DELIVERIES_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_seed_does_not_clobber_concurrent_creates() {
        use crate::models::delivery::NewDelivery;
        use crate::repositories::DeliveryRepository;

        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let writers: Vec<_> = (0..4)
            .map(|_| {
                let repo = DeliveryRepository::new(store.clone());
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        repo.create(NewDelivery {
                            route_id: "1".to_string(),
                            driver_id: "1".to_string(),
                            status: DeliveryStatus::Nok,
                            client_name: "Loja".to_string(),
                            address: "Rua 1".to_string(),
                        })
                        .unwrap();
                    }
                })
            })
            .collect();
        let seeders: Vec<_> = (0..4)
            .map(|_| {
                let seed = SeedService::new(store.clone());
                std::thread::spawn(move || seed.seed_all().unwrap())
            })
            .collect();

        for handle in writers {
            handle.join().unwrap();
        }
        let seeded_deliveries = seeders
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|report| report.seeded.contains(&DELIVERIES_KEY))
            .count();
        assert!(seeded_deliveries <= 1);

        let all = DeliveryRepository::new(store).get_all().unwrap();
        let created = all.iter().filter(|d| d.status == DeliveryStatus::Nok).count();
        assert_eq!(created, 100);
        assert_eq!(all.len(), 100 + seeded_deliveries);
    }

    #[test]
    fn test_seed_delivery_is_consistent() {
        let deliveries = seed_deliveries(Utc::now());
        assert!(deliveries.iter().all(Delivery::is_consistent));
    }
}
