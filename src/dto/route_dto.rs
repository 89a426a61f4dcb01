use serde::Deserialize;
use validator::Validate;

use crate::models::route::{NewRoute, RouteStatus, RouteUpdate};
use crate::utils::errors::AppResult;
use crate::utils::validation::{validate_date_field, validate_not_empty};

// Request para crear una rota
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRouteRequest {
    #[validate(custom = "validate_not_empty")]
    pub origin: String,

    #[validate(custom = "validate_not_empty")]
    pub destination: String,

    /// Vacío = sin motorista asignado
    #[serde(default)]
    pub driver_id: String,

    #[validate(custom = "validate_not_empty")]
    pub client_name: String,

    #[validate(custom = "validate_date_field")]
    pub date: String,

    #[validate(range(min = 0.0))]
    pub value: f64,

    #[serde(default)]
    pub observations: String,

    #[serde(default)]
    pub status: Option<String>,
}

// Request para actualizar una rota
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRouteRequest {
    #[validate(custom = "validate_not_empty")]
    pub origin: Option<String>,

    #[validate(custom = "validate_not_empty")]
    pub destination: Option<String>,

    pub driver_id: Option<String>,

    #[validate(custom = "validate_not_empty")]
    pub client_name: Option<String>,

    #[validate(custom = "validate_date_field")]
    pub date: Option<String>,

    #[validate(range(min = 0.0))]
    pub value: Option<f64>,

    pub observations: Option<String>,

    pub status: Option<String>,
}

impl CreateRouteRequest {
    pub fn into_input(self) -> AppResult<NewRoute> {
        self.validate()?;
        let status = match self.status.as_deref() {
            Some(raw) => raw.parse::<RouteStatus>()?,
            None => RouteStatus::Active,
        };
        Ok(NewRoute {
            origin: self.origin,
            destination: self.destination,
            driver_id: self.driver_id,
            client_name: self.client_name,
            date: self.date,
            value: self.value,
            observations: self.observations,
            status,
        })
    }
}

impl UpdateRouteRequest {
    pub fn into_update(self) -> AppResult<RouteUpdate> {
        self.validate()?;
        let status: Option<RouteStatus> = self.status.as_deref().map(str::parse).transpose()?;
        Ok(RouteUpdate {
            origin: self.origin,
            destination: self.destination,
            driver_id: self.driver_id,
            client_name: self.client_name,
            date: self.date,
            value: self.value,
            observations: self.observations,
            status,
        })
    }
}
