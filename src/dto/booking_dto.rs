//! DTOs de reserva
//!
//! Payloads de los dos endpoints de creación de reserva. El contrato
//! canónico es el payload sin mecanismo de descuento; la variante con
//! override de precios quedó descartada como deriva muerta.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    Address, Car, CostBreakdown, CustomerProfile, GuestDetails, IssuedCredentials, Reservation,
    RentalLocation,
};

/// Ubicación tal como viaja en el payload de reserva.
///
/// El servicio usa `zipCode` en el payload aunque el resto del sistema
/// hable de `postalCode`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationPayload {
    pub name: String,
    pub address: AddressPayload,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressPayload {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl From<&RentalLocation> for LocationPayload {
    fn from(location: &RentalLocation) -> Self {
        Self {
            name: location.name.clone(),
            address: AddressPayload {
                street: location.address.street.clone(),
                city: location.address.city.clone(),
                state: location.address.state.clone(),
                zip_code: location.address.postal_code.clone(),
                country: location.address.country.clone(),
            },
        }
    }
}

/// Payload compuesto cliente+alquiler del endpoint público
/// `POST /public/users/{tenant}/reservations`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicReservationRequest {
    pub first_name: String,
    pub last_name: String,
    pub customer_email: String,
    pub phone: String,
    pub password: String,
    pub license_number: String,
    pub license_expiry: NaiveDate,
    pub date_of_birth: NaiveDate,
    pub address: Address,
    pub car_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub pickup_location: LocationPayload,
    pub dropoff_location: LocationPayload,
    pub special_requests: String,
}

impl PublicReservationRequest {
    pub fn new(
        guest: &GuestDetails,
        car_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        pickup: &RentalLocation,
        dropoff: &RentalLocation,
        special_requests: &str,
    ) -> Self {
        Self {
            first_name: guest.first_name.clone(),
            last_name: guest.last_name.clone(),
            customer_email: guest.email.clone(),
            phone: guest.phone.clone(),
            password: guest.password.clone(),
            license_number: guest.license_number.clone(),
            license_expiry: guest.license_expiry,
            date_of_birth: guest.date_of_birth,
            address: guest.address.clone(),
            car_id: car_id.to_string(),
            start_date,
            end_date,
            pickup_location: pickup.into(),
            dropoff_location: dropoff.into(),
            special_requests: special_requests.to_string(),
        }
    }
}

/// Payload del endpoint autenticado `POST /reservations`, referencia al
/// cliente existente por id
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedReservationRequest {
    pub customer: String,
    pub car: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub pickup_location: LocationPayload,
    pub dropoff_location: LocationPayload,
    pub additional_drivers: Vec<String>,
    pub special_requests: String,
}

/// Desglose de precios calculado por el servicio (flujo público)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingData {
    pub rental_cost: Decimal,
    #[serde(default)]
    pub deposit: Decimal,
    pub total_cost: Decimal,
    pub days: i64,
}

impl From<PricingData> for CostBreakdown {
    fn from(pricing: PricingData) -> Self {
        Self {
            rental_cost: pricing.rental_cost,
            deposit: pricing.deposit,
            total_cost: pricing.total_cost,
            days: pricing.days,
        }
    }
}

/// Respuesta del endpoint público: reserva, vehículo, precios, cliente
/// creado y (condicionalmente) credenciales emitidas
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicReservationData {
    pub reservation: Reservation,
    #[serde(default)]
    pub car: Option<Car>,
    #[serde(default)]
    pub pricing: Option<PricingData>,
    #[serde(default)]
    pub customer: Option<CustomerProfile>,
    /// Presente sólo cuando el servicio creó la cuenta del cliente
    #[serde(default)]
    pub login_info: Option<IssuedCredentials>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::find_location;

    #[test]
    fn test_location_payload_uses_zip_code_key() {
        let location = find_location("Centrum - Bratislava").unwrap();
        let payload = LocationPayload::from(&location);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["address"]["zipCode"], "821 08");
        assert!(json["address"].get("postalCode").is_none());
    }

    #[test]
    fn test_public_response_with_credentials() {
        let json = r#"{
            "reservation": {"_id": "r1", "reservationNumber": "RES-1"},
            "pricing": {"rentalCost": 150, "deposit": 200, "totalCost": 350, "days": 3},
            "loginInfo": {"email": "jana@example.com", "password": "generated"}
        }"#;
        let data: PublicReservationData = serde_json::from_str(json).unwrap();
        assert!(data.login_info.is_some());
        assert_eq!(data.pricing.unwrap().days, 3);
    }

    #[test]
    fn test_public_response_without_credentials() {
        let json = r#"{"reservation": {"_id": "r1"}}"#;
        let data: PublicReservationData = serde_json::from_str(json).unwrap();
        assert!(data.login_info.is_none());
        assert!(data.car.is_none());
    }
}
