use serde::Deserialize;
use validator::Validate;

use crate::models::driver::{DriverStatus, DriverUpdate, NewDriver};
use crate::utils::errors::AppResult;
use crate::utils::validation::{validate_not_empty, CPF_REGEX, PHONE_REGEX};

// Request para crear un motorista
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDriverRequest {
    #[validate(custom = "validate_not_empty")]
    pub name: String,

    #[validate(regex = "CPF_REGEX")]
    pub cpf: String,

    #[validate(regex = "PHONE_REGEX")]
    pub phone: String,

    /// "active" si se omite
    #[serde(default)]
    pub status: Option<String>,
}

// Request para actualizar un motorista
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDriverRequest {
    #[validate(custom = "validate_not_empty")]
    pub name: Option<String>,

    #[validate(regex = "CPF_REGEX")]
    pub cpf: Option<String>,

    #[validate(regex = "PHONE_REGEX")]
    pub phone: Option<String>,

    pub status: Option<String>,
}

impl CreateDriverRequest {
    pub fn into_input(self) -> AppResult<NewDriver> {
        self.validate()?;
        let status = match self.status.as_deref() {
            Some(raw) => raw.parse::<DriverStatus>()?,
            None => DriverStatus::Active,
        };
        Ok(NewDriver {
            name: self.name.trim().to_string(),
            cpf: self.cpf,
            phone: self.phone,
            status,
        })
    }
}

impl UpdateDriverRequest {
    pub fn into_update(self) -> AppResult<DriverUpdate> {
        self.validate()?;
        let status: Option<DriverStatus> = self.status.as_deref().map(str::parse).transpose()?;
        Ok(DriverUpdate {
            name: self.name.map(|n| n.trim().to_string()),
            cpf: self.cpf,
            phone: self.phone,
            status,
        })
    }
}
