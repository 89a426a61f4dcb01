//! Modelo de Route (rota)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::errors::AppError;

/// Estado de la rota
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteStatus {
    Active,
    Completed,
    Cancelled,
}

impl RouteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteStatus::Active => "active",
            RouteStatus::Completed => "completed",
            RouteStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for RouteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(RouteStatus::Active),
            "completed" => Ok(RouteStatus::Completed),
            "cancelled" => Ok(RouteStatus::Cancelled),
            other => Err(AppError::InvalidRouteStatus(other.to_string())),
        }
    }
}

/// Rota - registro guardado en `logistics_routes`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: String,
    pub origin: String,
    pub destination: String,
    /// Referencia débil a un motorista; puede estar vacía o no existir
    pub driver_id: String,
    pub client_name: String,
    /// Fecha de la rota (YYYY-MM-DD)
    pub date: String,
    pub value: f64,
    pub observations: String,
    pub status: RouteStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewRoute {
    pub origin: String,
    pub destination: String,
    pub driver_id: String,
    pub client_name: String,
    pub date: String,
    pub value: f64,
    pub observations: String,
    pub status: RouteStatus,
}

/// Actualización parcial: sólo los campos `Some` se modifican
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteUpdate {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub driver_id: Option<String>,
    pub client_name: Option<String>,
    pub date: Option<String>,
    pub value: Option<f64>,
    pub observations: Option<String>,
    pub status: Option<RouteStatus>,
}

impl Route {
    pub fn new(id: String, input: NewRoute, now: DateTime<Utc>) -> Self {
        Self {
            id,
            origin: input.origin,
            destination: input.destination,
            driver_id: input.driver_id,
            client_name: input.client_name,
            date: input.date,
            value: input.value,
            observations: input.observations,
            status: input.status,
            created_at: now,
        }
    }

    pub fn apply(&mut self, update: RouteUpdate) {
        if let Some(origin) = update.origin {
            self.origin = origin;
        }
        if let Some(destination) = update.destination {
            self.destination = destination;
        }
        if let Some(driver_id) = update.driver_id {
            self.driver_id = driver_id;
        }
        if let Some(client_name) = update.client_name {
            self.client_name = client_name;
        }
        if let Some(date) = update.date {
            self.date = date;
        }
        if let Some(value) = update.value {
            self.value = value;
        }
        if let Some(observations) = update.observations {
            self.observations = observations;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
    }

    /// Etiqueta "origen → destino"
    pub fn label(&self) -> String {
        format!("{} → {}", self.origin, self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_status_parse() {
        assert_eq!("cancelled".parse::<RouteStatus>().unwrap(), RouteStatus::Cancelled);
        assert!(matches!(
            "paused".parse::<RouteStatus>(),
            Err(AppError::InvalidRouteStatus(_))
        ));
    }

    #[test]
    fn test_label_and_partial_update() {
        let mut route = Route::new(
            "1".to_string(),
            NewRoute {
                origin: "São Paulo - SP".to_string(),
                destination: "Rio de Janeiro - RJ".to_string(),
                driver_id: "1".to_string(),
                client_name: "Empresa ABC Ltda".to_string(),
                date: "2024-05-01".to_string(),
                value: 1500.0,
                observations: "Entrega urgente".to_string(),
                status: RouteStatus::Active,
            },
            Utc::now(),
        );
        assert_eq!(route.label(), "São Paulo - SP → Rio de Janeiro - RJ");

        route.apply(RouteUpdate {
            status: Some(RouteStatus::Completed),
            driver_id: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(route.status, RouteStatus::Completed);
        assert_eq!(route.driver_id, "");
        assert_eq!(route.value, 1500.0);
    }
}
