//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema. Los repositorios
//! devuelven `Option`/`bool` para ids desconocidos; `NotFound` queda para los
//! consumidores que necesitan convertir esa ausencia en un error.

use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Store error: {0}")]
    Store(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid delivery status: '{0}'")]
    InvalidStatus(String),

    #[error("Invalid driver status: '{0}'")]
    InvalidDriverStatus(String),

    #[error("Invalid route status: '{0}'")]
    InvalidRouteStatus(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Código estable del error, útil para la salida del CLI
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Store(_) => "STORE_ERROR",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::InvalidStatus(_) => "INVALID_STATUS",
            AppError::InvalidDriverStatus(_) => "INVALID_DRIVER_STATUS",
            AppError::InvalidRouteStatus(_) => "INVALID_ROUTE_STATUS",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Config(_) => "CONFIG_ERROR",
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Store(err.to_string())
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de validación
pub fn validation_error(field: &'static str, message: &'static str) -> AppError {
    use validator::ValidationError;

    let mut error = ValidationError::new("custom");
    error.add_param("field".into(), &field);
    error.add_param("message".into(), &message);

    let mut errors = validator::ValidationErrors::new();
    errors.add(field, error);

    AppError::Validation(errors)
}

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}

/// Función helper para crear errores del store
pub fn store_error(operation: &str, key: &str, reason: impl std::fmt::Display) -> AppError {
    AppError::Store(format!("cannot {} '{}': {}", operation, key, reason))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error_message() {
        let err = not_found_error("Delivery", "abc");
        assert_eq!(err.to_string(), "Not found: Delivery with id 'abc' not found");
        assert_eq!(err.code(), "NOT_FOUND");
    }

    #[test]
    fn test_validation_error_field() {
        let err = validation_error("cpf", "invalid format");
        match err {
            AppError::Validation(errors) => {
                assert!(errors.field_errors().contains_key("cpf"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_io_error_maps_to_store() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: AppError = io.into();
        assert_eq!(err.code(), "STORE_ERROR");
    }
}
