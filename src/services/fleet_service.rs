//! Vista de flota
//!
//! Este módulo aplica los filtros y la ordenación del listado de flota
//! sobre los vehículos ya descargados. Todo ocurre en memoria: el
//! servicio remoto entrega la flota completa y aquí se refina para la
//! vista sin más peticiones.

use std::cmp::Ordering;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::Car;
use crate::services::availability_service::{filter_cars_by_range, FleetAvailability};

/// Orden del listado de flota
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FleetSort {
    /// Precio diario ascendente (orden por defecto)
    #[default]
    PriceAscending,
    /// Precio diario descendente
    PriceDescending,
    /// Marca y modelo alfabéticamente
    Name,
    /// Año de matriculación, más nuevos primero
    YearDescending,
}

/// Filtros del listado de flota. Los campos de texto comparan sin
/// distinguir mayúsculas; `None` no filtra.
#[derive(Debug, Clone, Default)]
pub struct FleetFilters {
    pub category: Option<String>,
    pub transmission: Option<String>,
    pub fuel_type: Option<String>,
    pub min_daily_rate: Option<Decimal>,
    pub max_daily_rate: Option<Decimal>,
    /// Rango de alquiler pedido; sólo se muestran vehículos libres en
    /// todo el rango
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    pub sort: FleetSort,
}

fn matches_text(filter: &Option<String>, value: &Option<String>) -> bool {
    match filter {
        None => true,
        Some(wanted) => match value {
            Some(actual) => actual.eq_ignore_ascii_case(wanted),
            None => false,
        },
    }
}

fn matches_price(car: &Car, min: Option<Decimal>, max: Option<Decimal>) -> bool {
    if let Some(min) = min {
        if car.daily_rate < min {
            return false;
        }
    }
    if let Some(max) = max {
        if car.daily_rate > max {
            return false;
        }
    }
    true
}

fn compare(sort: FleetSort, a: &Car, b: &Car) -> Ordering {
    match sort {
        FleetSort::PriceAscending => a.daily_rate.cmp(&b.daily_rate),
        FleetSort::PriceDescending => b.daily_rate.cmp(&a.daily_rate),
        FleetSort::Name => (&a.brand, &a.model).cmp(&(&b.brand, &b.model)),
        FleetSort::YearDescending => b.year.unwrap_or(0).cmp(&a.year.unwrap_or(0)),
    }
}

/// Aplicar filtros y ordenación sobre la flota descargada.
///
/// Los vehículos fuera de servicio o en mantenimiento nunca se listan.
pub fn build_fleet_view<'a>(
    cars: &'a [Car],
    availability: &FleetAvailability,
    filters: &FleetFilters,
) -> Vec<&'a Car> {
    let mut view: Vec<&Car> = match filters.date_range {
        Some((pickup, return_date)) => {
            filter_cars_by_range(cars, availability, pickup, return_date)
        }
        None => cars.iter().collect(),
    };

    view.retain(|car| {
        car.status.is_rentable()
            && matches_text(&filters.category, &car.category)
            && matches_text(&filters.transmission, &car.transmission)
            && matches_text(&filters.fuel_type, &car.fuel_type)
            && matches_price(car, filters.min_daily_rate, filters.max_daily_rate)
    });

    view.sort_by(|a, b| compare(filters.sort, a, b));
    view
}

/// Valores únicos de un atributo de la flota, ordenados, para poblar
/// los desplegables de filtro
pub fn distinct_values<F>(cars: &[Car], attribute: F) -> Vec<String>
where
    F: Fn(&Car) -> Option<&String>,
{
    let mut values: Vec<String> = cars.iter().filter_map(|c| attribute(c).cloned()).collect();
    values.sort();
    values.dedup();
    values
}
