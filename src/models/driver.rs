//! Modelo de Driver (motorista)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::errors::AppError;

/// Estado del motorista
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriverStatus {
    Active,
    Inactive,
}

impl DriverStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DriverStatus::Active => "active",
            DriverStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for DriverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DriverStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(DriverStatus::Active),
            "inactive" => Ok(DriverStatus::Inactive),
            other => Err(AppError::InvalidDriverStatus(other.to_string())),
        }
    }
}

/// Motorista - registro guardado en `logistics_drivers`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: String,
    pub name: String,
    /// CPF formateado (000.000.000-00)
    pub cpf: String,
    pub phone: String,
    pub status: DriverStatus,
    pub created_at: DateTime<Utc>,
}

/// Datos para crear un motorista
#[derive(Debug, Clone, PartialEq)]
pub struct NewDriver {
    pub name: String,
    pub cpf: String,
    pub phone: String,
    pub status: DriverStatus,
}

/// Actualización parcial: sólo los campos `Some` se modifican
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DriverUpdate {
    pub name: Option<String>,
    pub cpf: Option<String>,
    pub phone: Option<String>,
    pub status: Option<DriverStatus>,
}

impl Driver {
    pub fn new(id: String, input: NewDriver, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: input.name,
            cpf: input.cpf,
            phone: input.phone,
            status: input.status,
            created_at: now,
        }
    }

    pub fn apply(&mut self, update: DriverUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(cpf) = update.cpf {
            self.cpf = cpf;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_status_parse() {
        assert_eq!("active".parse::<DriverStatus>().unwrap(), DriverStatus::Active);
        assert!(matches!(
            "suspended".parse::<DriverStatus>(),
            Err(AppError::InvalidDriverStatus(_))
        ));
    }

    #[test]
    fn test_apply_partial_update() {
        let mut driver = Driver::new(
            "1".to_string(),
            NewDriver {
                name: "João Silva".to_string(),
                cpf: "123.456.789-00".to_string(),
                phone: "(11) 98765-4321".to_string(),
                status: DriverStatus::Active,
            },
            Utc::now(),
        );

        driver.apply(DriverUpdate {
            status: Some(DriverStatus::Inactive),
            ..Default::default()
        });

        assert_eq!(driver.status, DriverStatus::Inactive);
        assert_eq!(driver.name, "João Silva");
        let json = serde_json::to_value(&driver).unwrap();
        assert_eq!(json["status"], "inactive");
        assert!(json.get("createdAt").is_some());
    }
}
