//! Logistics store
//!
//! Persistencia del dashboard de logística: motoristas, rotas y entregas
//! guardados como colecciones JSON en un store clave-valor síncrono. Las
//! entregas llevan un historial de estados que sólo crece.

pub mod cli;
pub mod commands;
pub mod config;
pub mod dto;
pub mod models;
pub mod repositories;
pub mod services;
pub mod state;
pub mod store;
pub mod utils;

pub use models::{Delivery, DeliveryHistoryEvent, DeliveryStatus, NewDelivery};
pub use repositories::DeliveryRepository;
pub use state::AppState;
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use utils::errors::{AppError, AppResult};
