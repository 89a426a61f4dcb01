//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno: directorio de datos,
//! carga de datos de ejemplo y nivel de log.

use std::env;
use std::path::PathBuf;
use tracing::Level;

use crate::utils::errors::{AppError, AppResult};

pub const DATA_DIR_VAR: &str = "LOGISTICS_DATA_DIR";
pub const SEED_VAR: &str = "LOGISTICS_SEED";
pub const LOG_LEVEL_VAR: &str = "LOGISTICS_LOG_LEVEL";

/// Configuración del entorno
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Directorio del `FileStore`
    pub data_dir: PathBuf,
    /// Sembrar colecciones ausentes al abrir
    pub seed: bool,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            seed: true,
            log_level: Level::INFO,
        }
    }
}

impl AppConfig {
    /// Cargar desde el entorno (después de `dotenvy::dotenv()`)
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Cargar usando una función de lookup arbitraria
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let data_dir = lookup(DATA_DIR_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let seed = match lookup(SEED_VAR) {
            Some(raw) => parse_bool(SEED_VAR, &raw)?,
            None => defaults.seed,
        };

        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(raw) => raw.trim().parse::<Level>().map_err(|_| {
                AppError::Config(format!("{} must be a log level, got '{}'", LOG_LEVEL_VAR, raw))
            })?,
            None => defaults.log_level,
        };

        Ok(Self {
            data_dir,
            seed,
            log_level,
        })
    }
}

fn parse_bool(name: &str, raw: &str) -> AppResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(AppError::Config(format!(
            "{} must be true/false, got '{}'",
            name, raw
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            (DATA_DIR_VAR, "/tmp/logistics"),
            (SEED_VAR, "0"),
            (LOG_LEVEL_VAR, "debug"),
        ]))
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/logistics"));
        assert!(!config.seed);
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            AppConfig::from_lookup(lookup(&[(SEED_VAR, "maybe")])),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            AppConfig::from_lookup(lookup(&[(LOG_LEVEL_VAR, "loud")])),
            Err(AppError::Config(_))
        ));
    }
}
