use serde::Deserialize;
use validator::Validate;

use crate::models::delivery::{DeliveryStatus, NewDelivery};
use crate::utils::errors::AppResult;
use crate::utils::validation::validate_not_empty;

// Request para crear una entrega. `status` llega como texto y se
// rechaza con `InvalidStatus` si no es uno de los cinco valores.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeliveryRequest {
    #[serde(default)]
    pub route_id: String,

    #[serde(default)]
    pub driver_id: String,

    pub status: String,

    #[validate(custom = "validate_not_empty")]
    pub client_name: String,

    #[validate(custom = "validate_not_empty")]
    pub address: String,
}

// Request para cambiar el estado de una entrega
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl CreateDeliveryRequest {
    pub fn into_input(self) -> AppResult<NewDelivery> {
        let status: DeliveryStatus = self.status.parse()?;
        self.validate()?;
        Ok(NewDelivery {
            route_id: self.route_id,
            driver_id: self.driver_id,
            status,
            client_name: self.client_name,
            address: self.address,
        })
    }
}

impl UpdateStatusRequest {
    /// Estado tipado y notas normalizadas (texto vacío = sin notas)
    pub fn into_parts(self) -> AppResult<(DeliveryStatus, Option<String>)> {
        let status: DeliveryStatus = self.status.parse()?;
        let notes = self
            .notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        Ok((status, notes))
    }
}
