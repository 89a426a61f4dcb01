//! Modelos del sistema
//!
//! Este módulo contiene los registros que se persisten en el store con el
//! mismo formato JSON que ya usaba el dashboard.

pub mod delivery;
pub mod driver;
pub mod route;

pub use delivery::{Delivery, DeliveryHistoryEvent, DeliveryStatus, NewDelivery};
pub use driver::{Driver, DriverStatus, DriverUpdate, NewDriver};
pub use route::{NewRoute, Route, RouteStatus, RouteUpdate};
