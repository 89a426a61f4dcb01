//! Configuración del proyecto
//!
//! Este módulo contiene la configuración cargada del entorno.

pub mod environment;

pub use environment::*;
