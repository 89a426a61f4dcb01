//! DTOs de entrada
//!
//! Requests con datos sin validar (formularios, CLI, JSON) y su conversión a
//! los tipos que aceptan los repositorios.

pub mod delivery_dto;
pub mod driver_dto;
pub mod route_dto;

pub use delivery_dto::{CreateDeliveryRequest, UpdateStatusRequest};
pub use driver_dto::{CreateDriverRequest, UpdateDriverRequest};
pub use route_dto::{CreateRouteRequest, UpdateRouteRequest};
