//! Modelo de Delivery
//!
//! Este módulo contiene la entrega, su estado y el historial de cambios de
//! estado. Los nombres de campo serializados (camelCase) y los valores del
//! estado son el formato ya persistido en el store y no deben cambiar.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::errors::AppError;

/// Estado de una entrega - enumeración cerrada.
///
/// No hay grafo de transiciones: cualquier estado puede seguir a cualquier otro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    Entregue,
    Revertido,
    EvidenciaInvalida,
    ContestacaoEnviada,
    Nok,
}

impl DeliveryStatus {
    pub const ALL: [DeliveryStatus; 5] = [
        DeliveryStatus::Entregue,
        DeliveryStatus::Revertido,
        DeliveryStatus::EvidenciaInvalida,
        DeliveryStatus::ContestacaoEnviada,
        DeliveryStatus::Nok,
    ];

    /// Valor persistido
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Entregue => "entregue",
            DeliveryStatus::Revertido => "revertido",
            DeliveryStatus::EvidenciaInvalida => "evidencia_invalida",
            DeliveryStatus::ContestacaoEnviada => "contestacao_enviada",
            DeliveryStatus::Nok => "nok",
        }
    }

    /// Etiqueta para mostrar al usuario
    pub fn label(&self) -> &'static str {
        match self {
            DeliveryStatus::Entregue => "Entregue",
            DeliveryStatus::Revertido => "Revertido",
            DeliveryStatus::EvidenciaInvalida => "Evidência Inválida",
            DeliveryStatus::ContestacaoEnviada => "Contestação Enviada",
            DeliveryStatus::Nok => "NOK",
        }
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliveryStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeliveryStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| AppError::InvalidStatus(s.to_string()))
    }
}

/// Evento inmutable del historial de una entrega
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryHistoryEvent {
    pub status: DeliveryStatus,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Entrega principal - mapea exactamente al registro guardado en `logistics_deliveries`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    pub id: String,
    /// Referencia débil a una rota; puede estar vacía o no existir
    pub route_id: String,
    /// Referencia débil a un motorista; puede estar vacía o no existir
    pub driver_id: String,
    pub status: DeliveryStatus,
    pub client_name: String,
    pub address: String,
    pub updated_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub history: Vec<DeliveryHistoryEvent>,
}

impl Delivery {
    /// Construir una entrega nueva con su primer evento de historial
    pub fn new(id: String, input: NewDelivery, now: DateTime<Utc>) -> Self {
        Self {
            id,
            route_id: input.route_id,
            driver_id: input.driver_id,
            status: input.status,
            client_name: input.client_name,
            address: input.address,
            updated_at: now,
            created_at: now,
            history: vec![DeliveryHistoryEvent {
                status: input.status,
                timestamp: now,
                notes: None,
            }],
        }
    }

    /// Registrar un cambio de estado al final del historial
    pub fn record_status(&mut self, status: DeliveryStatus, notes: Option<String>, now: DateTime<Utc>) {
        self.history.push(DeliveryHistoryEvent {
            status,
            timestamp: now,
            notes,
        });
        self.status = status;
        self.updated_at = now;
    }

    /// Últimos `n` eventos, el más reciente primero
    pub fn recent_history(&self, n: usize) -> Vec<&DeliveryHistoryEvent> {
        self.history.iter().rev().take(n).collect()
    }

    /// El estado actual coincide con el último evento y `updated_at` con su timestamp
    pub fn is_consistent(&self) -> bool {
        match self.history.last() {
            Some(last) => last.status == self.status && last.timestamp == self.updated_at,
            None => false,
        }
    }
}

/// Datos para crear una entrega, ya tipados
#[derive(Debug, Clone, PartialEq)]
pub struct NewDelivery {
    pub route_id: String,
    pub driver_id: String,
    pub status: DeliveryStatus,
    pub client_name: String,
    pub address: String,
}
