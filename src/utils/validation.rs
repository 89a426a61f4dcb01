//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos de los
//! formularios de motoristas, rotas y entregas.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// CPF formateado: 000.000.000-00
    pub static ref CPF_REGEX: Regex = Regex::new(r"^\d{3}\.\d{3}\.\d{3}-\d{2}$").unwrap();

    /// Teléfono brasileño: (00) 00000-0000 o (00) 0000-0000
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^\(\d{2}\) \d{4,5}-\d{4}$").unwrap();
}

/// Validar y convertir string a fecha (YYYY-MM-DD)
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Variante de `validate_date` con la firma que espera `#[validate(custom)]`
pub fn validate_date_field(value: &str) -> Result<(), ValidationError> {
    validate_date(value).map(|_| ())
}

/// Validar que un string no esté vacío (ignorando espacios)
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpf_regex() {
        assert!(CPF_REGEX.is_match("123.456.789-00"));
        assert!(!CPF_REGEX.is_match("12345678900"));
        assert!(!CPF_REGEX.is_match("123.456.789-0"));
    }

    #[test]
    fn test_phone_regex() {
        assert!(PHONE_REGEX.is_match("(11) 98765-4321"));
        assert!(PHONE_REGEX.is_match("(11) 3456-7890"));
        assert!(!PHONE_REGEX.is_match("11987654321"));
    }

    #[test]
    fn test_validate_date() {
        assert!(validate_date("2024-03-15").is_ok());
        assert!(validate_date("15/03/2024").is_err());
        assert!(validate_date_field("2024-02-30").is_err());
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("Empresa ABC").is_ok());
        assert!(validate_not_empty("   ").is_err());
    }
}
