//! Resolución de referencias débiles
//!
//! `driverId`/`routeId` pueden estar vacíos o apuntar a registros borrados;
//! en ese caso se devuelve la etiqueta "sin asignar".

use std::sync::Arc;

use crate::repositories::{DriverRepository, RouteRepository};
use crate::utils::errors::AppResult;

pub const UNASSIGNED_DRIVER: &str = "Não atribuído";
pub const UNASSIGNED_ROUTE: &str = "Não atribuída";

pub struct LookupService {
    drivers: Arc<DriverRepository>,
    routes: Arc<RouteRepository>,
}

impl LookupService {
    pub fn new(drivers: Arc<DriverRepository>, routes: Arc<RouteRepository>) -> Self {
        Self { drivers, routes }
    }

    pub fn driver_name(&self, driver_id: &str) -> AppResult<String> {
        Ok(self
            .drivers
            .get_by_id(driver_id)?
            .map(|d| d.name)
            .unwrap_or_else(|| UNASSIGNED_DRIVER.to_string()))
    }

    pub fn route_label(&self, route_id: &str) -> AppResult<String> {
        Ok(self
            .routes
            .get_by_id(route_id)?
            .map(|r| r.label())
            .unwrap_or_else(|| UNASSIGNED_ROUTE.to_string()))
    }
}
