use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use super::collection::{JsonCollection, Record};
use crate::models::route::{NewRoute, Route, RouteStatus, RouteUpdate};
use crate::store::{KeyValueStore, ROUTES_KEY};
use crate::utils::clock::{Clock, SystemClock};
use crate::utils::errors::AppResult;

impl Record for Route {
    const RESOURCE: &'static str = "Route";

    fn id(&self) -> &str {
        &self.id
    }
}

pub struct RouteRepository {
    collection: JsonCollection<Route>,
    clock: Arc<dyn Clock>,
}

impl RouteRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    pub fn with_clock(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            collection: JsonCollection::new(store, ROUTES_KEY),
            clock,
        }
    }

    pub fn get_all(&self) -> AppResult<Vec<Route>> {
        self.collection.load()
    }

    pub fn get_by_id(&self, id: &str) -> AppResult<Option<Route>> {
        self.collection.find(id)
    }

    pub fn find_by_driver(&self, driver_id: &str) -> AppResult<Vec<Route>> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|r| r.driver_id == driver_id)
            .collect())
    }

    pub fn count_by_status(&self, status: RouteStatus) -> AppResult<usize> {
        Ok(self.get_all()?.iter().filter(|r| r.status == status).count())
    }

    pub fn create(&self, input: NewRoute) -> AppResult<Route> {
        let route = Route::new(Uuid::new_v4().to_string(), input, self.clock.now());
        let route = self.collection.insert(route)?;
        info!("🗺️ Rota {} creada: {}", route.id, route.label());
        Ok(route)
    }

    pub fn update(&self, id: &str, update: RouteUpdate) -> AppResult<Option<Route>> {
        let updated = self.collection.update_by_id(id, |route| route.apply(update))?;
        if updated.is_none() {
            warn!("⚠️ Rota {} no encontrada para actualizar", id);
        }
        Ok(updated)
    }

    pub fn delete(&self, id: &str) -> AppResult<bool> {
        let removed = self.collection.remove_by_id(id)?;
        if removed {
            info!("🗑️ Rota {} eliminada", id);
        }
        Ok(removed)
    }
}
