//! Services module
//!
//! Este módulo contiene la lógica que combina varios repositorios: datos
//! iniciales, métricas del dashboard y resolución de referencias débiles.

pub mod dashboard_service;
pub mod lookup_service;
pub mod seed_service;

pub use dashboard_service::{count_by_status, filter_by_status, DashboardMetrics, DashboardService};
pub use lookup_service::LookupService;
pub use seed_service::{SeedReport, SeedService};
