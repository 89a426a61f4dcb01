//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación
//! y el reloj usado para los timestamps.

pub mod clock;
pub mod errors;
pub mod validation;

pub use errors::{AppError, AppResult};
