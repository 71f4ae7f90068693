//! Sobre de respuesta del servicio de reservas
//!
//! Todas las respuestas llegan como `{ success, data, message }`.

use serde::Deserialize;

/// Sobre genérico de respuesta
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default = "default_success")]
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

fn default_success() -> bool {
    true
}

/// Datos de disponibilidad de un vehículo: días no disponibles en
/// formato canónico `YYYY-MM-DD`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityData {
    #[serde(default)]
    pub unavailable_dates: Vec<String>,
}
