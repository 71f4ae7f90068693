//! Deep links del asistente de reserva
//!
//! El listado de flota y el detalle del vehículo enlazan al asistente
//! con el vehículo y, opcionalmente, fechas y sucursales ya elegidas en
//! la query string. Un parámetro ilegible se ignora con aviso; nunca
//! bloquea la entrada al asistente.

use chrono::NaiveDate;
use tracing::warn;

use crate::utils::validation::validate_date;

/// Parámetros reconocidos en la query string del asistente
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingDeepLink {
    pub car_id: Option<String>,
    pub pickup_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
    pub pickup_location: Option<String>,
    pub return_location: Option<String>,
}

impl BookingDeepLink {
    /// Interpretar una query string tipo
    /// `car=66b1f0&pickupDate=2026-09-10&pickupLocation=Centrum%20-%20Bratislava`
    pub fn parse(query: &str) -> Self {
        let mut link = Self::default();

        for pair in query.trim_start_matches('?').split('&') {
            let Some((key, raw_value)) = pair.split_once('=') else {
                continue;
            };
            // El '+' sin codificar es un espacio; un '+' literal viaja
            // como %2B y debe sobrevivir a la decodificación
            let value = match urlencoding::decode(&raw_value.replace('+', " ")) {
                Ok(decoded) => decoded.into_owned(),
                Err(e) => {
                    warn!("⚠️ Parámetro de deep link ilegible '{}': {}", key, e);
                    continue;
                }
            };
            if value.is_empty() {
                continue;
            }

            match key {
                "car" => link.car_id = Some(value),
                "pickupDate" => link.pickup_date = parse_date_param(key, &value),
                "returnDate" => link.return_date = parse_date_param(key, &value),
                "pickupLocation" => link.pickup_location = Some(value),
                "returnLocation" => link.return_location = Some(value),
                _ => {}
            }
        }
        link
    }

    /// Construir la query string del asistente para un vehículo, con el
    /// rango de fechas si ya está elegido
    pub fn to_query(&self) -> String {
        let mut params: Vec<String> = Vec::new();
        if let Some(car_id) = &self.car_id {
            params.push(format!("car={}", urlencoding::encode(car_id)));
        }
        if let Some(date) = self.pickup_date {
            params.push(format!("pickupDate={}", date.format("%Y-%m-%d")));
        }
        if let Some(date) = self.return_date {
            params.push(format!("returnDate={}", date.format("%Y-%m-%d")));
        }
        if let Some(name) = &self.pickup_location {
            params.push(format!("pickupLocation={}", urlencoding::encode(name)));
        }
        if let Some(name) = &self.return_location {
            params.push(format!("returnLocation={}", urlencoding::encode(name)));
        }
        params.join("&")
    }
}

fn parse_date_param(key: &str, value: &str) -> Option<NaiveDate> {
    match validate_date(value) {
        Ok(date) => Some(date),
        Err(_) => {
            warn!("⚠️ Fecha de deep link ilegible '{}': {}", key, value);
            None
        }
    }
}
