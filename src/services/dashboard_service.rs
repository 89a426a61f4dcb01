//! Métricas del dashboard y filtros sobre las entregas

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::models::delivery::{Delivery, DeliveryStatus};
use crate::models::route::RouteStatus;
use crate::repositories::{DeliveryRepository, DriverRepository, RouteRepository};
use crate::utils::errors::AppResult;

/// Número de entregas mostradas como "recientes"
pub const RECENT_DELIVERIES: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub drivers: usize,
    pub routes: usize,
    pub deliveries: usize,
    pub active_routes: usize,
    /// Conteo por estado sobre las entregas recientes
    pub status_counts: BTreeMap<DeliveryStatus, usize>,
    pub recent_deliveries: Vec<Delivery>,
}

pub struct DashboardService {
    drivers: Arc<DriverRepository>,
    routes: Arc<RouteRepository>,
    deliveries: Arc<DeliveryRepository>,
}

impl DashboardService {
    pub fn new(
        drivers: Arc<DriverRepository>,
        routes: Arc<RouteRepository>,
        deliveries: Arc<DeliveryRepository>,
    ) -> Self {
        Self {
            drivers,
            routes,
            deliveries,
        }
    }

    pub fn metrics(&self) -> AppResult<DashboardMetrics> {
        let deliveries = self.deliveries.get_all()?;

        let recent: Vec<Delivery> = deliveries.iter().take(RECENT_DELIVERIES).cloned().collect();
        let mut status_counts = BTreeMap::new();
        for delivery in &recent {
            *status_counts.entry(delivery.status).or_insert(0) += 1;
        }

        Ok(DashboardMetrics {
            drivers: self.drivers.get_all()?.len(),
            routes: self.routes.get_all()?.len(),
            deliveries: deliveries.len(),
            active_routes: self.routes.count_by_status(RouteStatus::Active)?,
            status_counts,
            recent_deliveries: recent,
        })
    }
}

/// Filtrar por estado; `None` devuelve todas
pub fn filter_by_status(deliveries: &[Delivery], status: Option<DeliveryStatus>) -> Vec<&Delivery> {
    deliveries
        .iter()
        .filter(|d| status.map_or(true, |s| d.status == s))
        .collect()
}

/// Conteo por estado con los cinco estados presentes (cero incluido)
pub fn count_by_status(deliveries: &[Delivery]) -> BTreeMap<DeliveryStatus, usize> {
    let mut counts: BTreeMap<DeliveryStatus, usize> =
        DeliveryStatus::ALL.iter().map(|s| (*s, 0)).collect();
    for delivery in deliveries {
        *counts.entry(delivery.status).or_insert(0) += 1;
    }
    counts
}
