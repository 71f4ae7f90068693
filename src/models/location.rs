//! Modelo de sucursales de recogida y devolución
//!
//! La lista de sucursales es fija en el cliente (Bratislava); cada una
//! lleva una dirección postal estructurada que viaja en el payload de
//! la reserva.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// Dirección postal estructurada
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

impl Address {
    pub fn is_blank(&self) -> bool {
        self.street.trim().is_empty()
    }
}

impl Default for Address {
    /// Dirección en blanco con el país del operador
    fn default() -> Self {
        Self {
            street: String::new(),
            city: String::new(),
            state: String::new(),
            postal_code: String::new(),
            country: "SK".to_string(),
        }
    }
}

/// Sucursal con nombre y dirección
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalLocation {
    pub name: String,
    pub address: Address,
}

fn location(name: &str, street: &str, postal_code: &str) -> RentalLocation {
    RentalLocation {
        name: name.to_string(),
        address: Address {
            street: street.to_string(),
            city: "Bratislava".to_string(),
            state: "Bratislavský kraj".to_string(),
            postal_code: postal_code.to_string(),
            country: "SK".to_string(),
        },
    }
}

lazy_static! {
    /// Sucursales disponibles para recogida y devolución
    pub static ref RENTAL_LOCATIONS: Vec<RentalLocation> = vec![
        location("Centrum - Bratislava", "Hlavná 123", "821 08"),
        location("Letisko - M. R. Štefánika", "Letisko M. R. Štefánika", "823 05"),
        location("Petržalka - Bratislava", "Petržalská 456", "851 01"),
        location("Ružinov - Bratislava", "Ružinovská 789", "821 01"),
        location("Nové Mesto - Bratislava", "Nové Mesto 321", "831 01"),
    ];
}

/// Buscar una sucursal por su nombre exacto (deep links)
pub fn find_location(name: &str) -> Option<RentalLocation> {
    RENTAL_LOCATIONS.iter().find(|l| l.name == name).cloned()
}
