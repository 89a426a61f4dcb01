//! Repositorios
//!
//! Acceso CRUD a las colecciones guardadas en el store.

pub mod collection;
pub mod delivery_repository;
pub mod driver_repository;
pub mod route_repository;

pub use collection::{JsonCollection, Record};
pub use delivery_repository::DeliveryRepository;
pub use driver_repository::DriverRepository;
pub use route_repository::RouteRepository;
