//! Modelo de Car
//!
//! Este módulo contiene el struct Car tal como lo entrega el servicio
//! de reservas. El vehículo es inmutable desde el punto de vista del
//! cliente; sólo el servicio remoto lo muta.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Estado del ciclo de vida del vehículo según el servicio remoto
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CarStatus {
    Available,
    Unavailable,
    Maintenance,
    #[serde(rename = "out-of-service")]
    OutOfService,
    /// Valores nuevos del servicio que este cliente aún no conoce
    #[serde(other)]
    Unknown,
}

impl Default for CarStatus {
    fn default() -> Self {
        CarStatus::Available
    }
}

impl CarStatus {
    /// Un vehículo se ofrece salvo que esté marcado explícitamente
    /// como no disponible, en mantenimiento o fuera de servicio.
    pub fn is_rentable(&self) -> bool {
        !matches!(
            self,
            CarStatus::Unavailable | CarStatus::Maintenance | CarStatus::OutOfService
        )
    }
}

/// Vehículo de la flota
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    #[serde(rename = "_id")]
    pub id: String,
    pub brand: String,
    pub model: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub category: Option<String>,
    pub daily_rate: Decimal,
    #[serde(default)]
    pub deposit: Decimal,
    #[serde(default)]
    pub transmission: Option<String>,
    #[serde(default)]
    pub fuel_type: Option<String>,
    #[serde(default)]
    pub seats: Option<u8>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub status: CarStatus,
}

impl Car {
    /// Nombre para mostrar: "Škoda Octavia (2023)"
    pub fn display_name(&self) -> String {
        match self.year {
            Some(year) => format!("{} {} ({})", self.brand, self.model, year),
            None => format!("{} {}", self.brand, self.model),
        }
    }
}

/// Filtros opcionales para el listado de vehículos del tenant
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarListFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transmission: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_is_rentable() {
        assert!(CarStatus::Available.is_rentable());
        assert!(CarStatus::Unknown.is_rentable());
        assert!(!CarStatus::Unavailable.is_rentable());
        assert!(!CarStatus::Maintenance.is_rentable());
        assert!(!CarStatus::OutOfService.is_rentable());
    }

    #[test]
    fn test_car_deserializes_remote_shape() {
        let json = r#"{
            "_id": "66b1f0",
            "brand": "Skoda",
            "model": "Octavia",
            "year": 2023,
            "category": "sedan",
            "dailyRate": 50,
            "deposit": 200,
            "transmission": "manual",
            "fuelType": "petrol",
            "seats": 5,
            "features": ["GPS", "Bluetooth"],
            "status": "out-of-service"
        }"#;
        let car: Car = serde_json::from_str(json).unwrap();
        assert_eq!(car.id, "66b1f0");
        assert_eq!(car.status, CarStatus::OutOfService);
        assert_eq!(car.display_name(), "Skoda Octavia (2023)");
    }

    #[test]
    fn test_car_tolerates_missing_optional_fields() {
        let json = r#"{"_id": "x", "brand": "Kia", "model": "Ceed", "dailyRate": 35}"#;
        let car: Car = serde_json::from_str(json).unwrap();
        assert_eq!(car.status, CarStatus::Available);
        assert!(car.features.is_empty());
        assert_eq!(car.display_name(), "Kia Ceed");
    }

    #[test]
    fn test_unknown_status_value() {
        let json = r#"{"_id": "x", "brand": "Kia", "model": "Ceed", "dailyRate": 35, "status": "reserved"}"#;
        let car: Car = serde_json::from_str(json).unwrap();
        assert_eq!(car.status, CarStatus::Unknown);
        assert!(car.status.is_rentable());
    }
}
