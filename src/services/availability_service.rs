//! Carga de disponibilidad de la flota
//!
//! Este módulo consulta la disponibilidad de cada vehículo de la flota
//! dentro de la ventana de 6 meses. Las consultas se lanzan en paralelo
//! y se espera su liquidación conjunta; el fallo de una consulta degrada
//! ese vehículo a "sin días ocupados conocidos" y nunca tumba al resto.

use std::collections::HashMap;

use chrono::NaiveDate;
use futures::future::join_all;
use log::{info, warn};

use crate::availability::{availability_window, is_range_available, UnavailableDates};
use crate::models::Car;
use crate::services::api_client::RentalApi;

/// Mapa de disponibilidad por vehículo, reemplazado en bloque en cada
/// recarga
pub type FleetAvailability = HashMap<String, UnavailableDates>;

/// Cargar la disponibilidad de todos los vehículos para la ventana de
/// 6 meses a partir de `today`
pub async fn load_fleet_availability(
    api: &dyn RentalApi,
    cars: &[Car],
    today: NaiveDate,
) -> FleetAvailability {
    let (start_date, end_date) = availability_window(today);

    let fetches = cars.iter().map(|car| {
        let car_id = car.id.clone();
        async move {
            match api.car_availability(&car_id, start_date, end_date).await {
                Ok(unavailable) => (car_id, unavailable),
                Err(e) => {
                    // Degradar a "todo disponible" en vez de propagar
                    warn!(
                        "⚠️ Disponibilidad no cargada para vehículo {}: {}",
                        car_id, e
                    );
                    (car_id, UnavailableDates::new())
                }
            }
        }
    });

    let results = join_all(fetches).await;
    let map: FleetAvailability = results.into_iter().collect();
    info!("📅 Disponibilidad cargada para {} vehículos", map.len());
    map
}

/// Disponibilidad de un solo vehículo (detalle y asistente de reserva);
/// degrada a conjunto vacío con aviso si la consulta falla
pub async fn load_car_availability(
    api: &dyn RentalApi,
    car_id: &str,
    today: NaiveDate,
) -> UnavailableDates {
    let (start_date, end_date) = availability_window(today);
    match api.car_availability(car_id, start_date, end_date).await {
        Ok(unavailable) => unavailable,
        Err(e) => {
            warn!("⚠️ Disponibilidad no cargada para vehículo {}: {}", car_id, e);
            UnavailableDates::new()
        }
    }
}

/// Filtrar la flota a los vehículos libres en todo el rango pedido.
///
/// Un vehículo sin entrada en el mapa se trata como libre (mismo
/// degradado seguro que en la carga).
pub fn filter_cars_by_range<'a>(
    cars: &'a [Car],
    availability: &FleetAvailability,
    pickup: NaiveDate,
    return_date: NaiveDate,
) -> Vec<&'a Car> {
    cars.iter()
        .filter(|car| match availability.get(&car.id) {
            Some(unavailable) => is_range_available(unavailable, pickup, return_date),
            None => true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn car(id: &str) -> Car {
        serde_json::from_value(serde_json::json!({
            "_id": id,
            "brand": "Škoda",
            "model": "Octavia",
            "dailyRate": 45,
            "status": "available"
        }))
        .unwrap()
    }

    #[test]
    fn test_filter_keeps_cars_with_free_range() {
        let cars = vec![car("a"), car("b")];
        let mut availability = FleetAvailability::new();
        availability.insert("a".to_string(), UnavailableDates::new());
        availability.insert(
            "b".to_string(),
            [date(2026, 9, 11)].into_iter().collect(),
        );

        let free = filter_cars_by_range(&cars, &availability, date(2026, 9, 10), date(2026, 9, 12));
        assert_eq!(free.len(), 1);
        assert_eq!(free[0].id, "a");
    }

    #[test]
    fn test_car_without_entry_is_treated_as_free() {
        let cars = vec![car("c")];
        let availability = FleetAvailability::new();

        let free = filter_cars_by_range(&cars, &availability, date(2026, 9, 10), date(2026, 9, 12));
        assert_eq!(free.len(), 1);
    }
}
