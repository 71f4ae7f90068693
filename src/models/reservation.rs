//! Modelo de reserva y resultado de la reserva
//!
//! El servicio remoto responde con dos formas distintas según exista o
//! no una sesión: cliente nuevo (con credenciales recién emitidas) o
//! cliente existente. Aquí se normalizan ambas en una variante etiquetada
//! resuelta una sola vez en el borde de la API, de modo que el código de
//! presentación nunca vuelva a inspeccionar campos opcionales.

use chrono::{DateTime, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::car::Car;
use super::customer::CustomerProfile;

/// Registro de reserva devuelto por el servicio
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub reservation_number: Option<String>,
    #[serde(default, deserialize_with = "deserialize_reservation_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_reservation_date")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub total_amount: Option<Decimal>,
}

impl Reservation {
    /// Número de reserva para mostrar; cae al identificador interno
    pub fn display_number(&self) -> &str {
        self.reservation_number.as_deref().unwrap_or(&self.id)
    }
}

/// Las fechas de la reserva llegan como día (`YYYY-MM-DD`) por el
/// endpoint público y como instante ISO-8601 por el autenticado; ambas
/// formas se reducen al día de calendario.
fn deserialize_reservation_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    let Some(raw) = raw else {
        return Ok(None);
    };
    if let Ok(date) = NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
        return Ok(Some(date));
    }
    match DateTime::parse_from_rfc3339(&raw) {
        Ok(instant) => Ok(Some(instant.date_naive())),
        Err(e) => Err(serde::de::Error::custom(format!(
            "invalid reservation date '{}': {}",
            raw, e
        ))),
    }
}

/// Desglose de costes de la reserva
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub rental_cost: Decimal,
    pub deposit: Decimal,
    pub total_cost: Decimal,
    pub days: i64,
}

/// Credenciales emitidas por el servicio al crear la cuenta del cliente
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedCredentials {
    pub email: String,
    pub password: String,
}

/// Vista de confirmación común a ambos flujos
#[derive(Debug, Clone)]
pub struct BookingConfirmation {
    pub reservation: Reservation,
    pub car: Car,
    pub costs: CostBreakdown,
    pub customer: Option<CustomerProfile>,
}

/// Resultado de la reserva, resuelto una sola vez en el borde de la API
#[derive(Debug, Clone)]
pub enum BookingOutcome {
    /// Sin sesión previa: el servicio creó la cuenta y emitió credenciales
    NewCustomer {
        confirmation: BookingConfirmation,
        credentials: IssuedCredentials,
    },
    /// Cliente con sesión existente: sin bloque de credenciales
    ReturningCustomer { confirmation: BookingConfirmation },
}

impl BookingOutcome {
    pub fn confirmation(&self) -> &BookingConfirmation {
        match self {
            BookingOutcome::NewCustomer { confirmation, .. } => confirmation,
            BookingOutcome::ReturningCustomer { confirmation } => confirmation,
        }
    }

    /// Credenciales a renderizar; `None` significa que el bloque de
    /// credenciales no se muestra
    pub fn issued_credentials(&self) -> Option<&IssuedCredentials> {
        match self {
            BookingOutcome::NewCustomer { credentials, .. } => Some(credentials),
            BookingOutcome::ReturningCustomer { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_number_falls_back_to_id() {
        let with_number: Reservation = serde_json::from_str(
            r#"{"_id": "abc123", "reservationNumber": "RES-2026-0042"}"#,
        )
        .unwrap();
        assert_eq!(with_number.display_number(), "RES-2026-0042");

        let without: Reservation = serde_json::from_str(r#"{"_id": "abc123"}"#).unwrap();
        assert_eq!(without.display_number(), "abc123");
    }

    #[test]
    fn test_dates_accept_both_wire_shapes() {
        // Endpoint público: día de calendario
        let public: Reservation = serde_json::from_str(
            r#"{"_id": "r1", "startDate": "2026-09-10", "endDate": "2026-09-13"}"#,
        )
        .unwrap();
        assert_eq!(public.start_date, NaiveDate::from_ymd_opt(2026, 9, 10));

        // Endpoint autenticado: instante ISO-8601
        let authenticated: Reservation = serde_json::from_str(
            r#"{"_id": "r2", "startDate": "2026-09-10T00:00:00.000Z", "endDate": "2026-09-13T00:00:00.000Z"}"#,
        )
        .unwrap();
        assert_eq!(
            authenticated.start_date,
            NaiveDate::from_ymd_opt(2026, 9, 10)
        );
        assert_eq!(authenticated.end_date, NaiveDate::from_ymd_opt(2026, 9, 13));
    }

    #[test]
    fn test_dates_tolerate_null_and_absent() {
        let reservation: Reservation =
            serde_json::from_str(r#"{"_id": "r1", "startDate": null}"#).unwrap();
        assert_eq!(reservation.start_date, None);
        assert_eq!(reservation.end_date, None);
    }

    #[test]
    fn test_unparseable_date_is_an_error() {
        let result: Result<Reservation, _> =
            serde_json::from_str(r#"{"_id": "r1", "startDate": "10/09/2026"}"#);
        assert!(result.is_err());
    }
}
