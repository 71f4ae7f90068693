//! Modelo de cliente
//!
//! Perfil del cliente tal como lo entrega el servicio de reservas
//! (sesión activa) y datos de un cliente nuevo capturados en el
//! formulario.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::location::Address;

/// Perfil de cliente devuelto por `GET /auth/me`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerProfile {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub license_number: Option<String>,
    #[serde(default)]
    pub license_expiry: Option<NaiveDate>,
    #[serde(default)]
    pub address: Option<Address>,
}

impl CustomerProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Datos validados de un cliente nuevo (sin sesión), listos para el
/// payload compuesto de la reserva pública
#[derive(Debug, Clone)]
pub struct GuestDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Teléfono ya normalizado a sólo dígitos
    pub phone: String,
    pub password: String,
    pub date_of_birth: NaiveDate,
    pub license_number: String,
    pub license_expiry: NaiveDate,
    pub address: Address,
}
