//! Filtro de disponibilidad por rango de fechas
//!
//! El servicio entrega, por vehículo, el conjunto de días no disponibles
//! dentro de la ventana de consulta (6 meses). Este módulo decide si un
//! rango de alquiler está completamente libre y cuenta días ocupados en
//! la ventana informativa de 30 días. Todo opera sobre días de
//! calendario, sin componente horario.

use std::collections::HashSet;

use chrono::{Days, Months, NaiveDate};
use tracing::warn;

/// Ventana de consulta de disponibilidad, en meses
pub const AVAILABILITY_WINDOW_MONTHS: u32 = 6;

/// Ventana informativa para el contador de días reservados
pub const NEAR_TERM_WINDOW_DAYS: u64 = 30;

/// Conjunto de días no disponibles de un vehículo
pub type UnavailableDates = HashSet<NaiveDate>;

/// Parsear las fechas `YYYY-MM-DD` del servicio a un conjunto de días.
///
/// Las entradas malformadas se descartan con un aviso; una fecha ilegible
/// nunca debe tumbar la vista.
pub fn parse_unavailable_dates(raw: &[String]) -> UnavailableDates {
    raw.iter()
        .filter_map(|value| match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                warn!("⚠️ Fecha no disponible ilegible del servicio: '{}'", value);
                None
            }
        })
        .collect()
}

/// Ventana de disponibilidad a consultar: desde `today` hasta 6 meses
/// en adelante
pub fn availability_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    (today, today + Months::new(AVAILABILITY_WINDOW_MONTHS))
}

/// Decidir si todos los días del rango `[start, end]` (ambos inclusive)
/// están libres.
///
/// Precondición del llamador: `start <= end`. Un rango invertido es un
/// bug del llamador, no se defiende aquí. `start == end` sigue
/// comprobando ese único día.
pub fn is_range_available(
    unavailable: &UnavailableDates,
    start: NaiveDate,
    end: NaiveDate,
) -> bool {
    debug_assert!(start <= end, "is_range_available: start > end");

    let mut day = start;
    while day <= end {
        if unavailable.contains(&day) {
            return false;
        }
        day = day + Days::new(1);
    }
    true
}

/// Contar los días no disponibles dentro de los próximos 30 días
/// (ambos extremos inclusive), para el texto informativo de la tarjeta
/// del vehículo cuando aún no hay rango seleccionado
pub fn count_unavailable_days(unavailable: &UnavailableDates, today: NaiveDate) -> usize {
    let end = today + Days::new(NEAR_TERM_WINDOW_DAYS);
    let mut count = 0;
    let mut day = today;
    while day <= end {
        if unavailable.contains(&day) {
            count += 1;
        }
        day = day + Days::new(1);
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn set(days: &[NaiveDate]) -> UnavailableDates {
        days.iter().copied().collect()
    }

    #[test]
    fn test_empty_set_is_always_available() {
        let empty = UnavailableDates::new();
        assert!(is_range_available(&empty, date(2026, 9, 1), date(2026, 9, 30)));
        assert!(is_range_available(&empty, date(2026, 9, 1), date(2026, 9, 1)));
    }

    #[test]
    fn test_range_blocked_by_any_member_day() {
        let unavailable = set(&[date(2026, 9, 15)]);
        assert!(!is_range_available(&unavailable, date(2026, 9, 10), date(2026, 9, 20)));
        assert!(!is_range_available(&unavailable, date(2026, 9, 15), date(2026, 9, 15)));
        // El día ocupado es el límite del rango
        assert!(!is_range_available(&unavailable, date(2026, 9, 1), date(2026, 9, 15)));
        assert!(!is_range_available(&unavailable, date(2026, 9, 15), date(2026, 9, 20)));
    }

    #[test]
    fn test_range_free_when_occupied_days_outside() {
        let unavailable = set(&[date(2026, 9, 1), date(2026, 9, 30)]);
        assert!(is_range_available(&unavailable, date(2026, 9, 2), date(2026, 9, 29)));
    }

    #[test]
    fn test_single_day_range_checks_that_day() {
        let unavailable = set(&[date(2026, 9, 5)]);
        assert!(!is_range_available(&unavailable, date(2026, 9, 5), date(2026, 9, 5)));
        assert!(is_range_available(&unavailable, date(2026, 9, 6), date(2026, 9, 6)));
    }

    #[test]
    fn test_membership_equivalence() {
        // is_range_available(U, s, e) == true sii ningún día de [s,e] ∈ U
        let unavailable = set(&[date(2026, 10, 3), date(2026, 10, 7)]);
        let start = date(2026, 10, 1);
        let end = date(2026, 10, 10);

        let mut expected = true;
        let mut day = start;
        while day <= end {
            if unavailable.contains(&day) {
                expected = false;
            }
            day = day + Days::new(1);
        }
        assert_eq!(is_range_available(&unavailable, start, end), expected);
    }

    #[test]
    fn test_count_unavailable_days_in_near_term_window() {
        let today = date(2026, 9, 1);
        let unavailable = set(&[
            date(2026, 9, 1),   // hoy, cuenta
            date(2026, 9, 15),  // dentro de la ventana
            date(2026, 10, 1),  // día 30, límite inclusive
            date(2026, 10, 2),  // día 31, fuera
            date(2026, 8, 31),  // pasado, fuera
        ]);
        assert_eq!(count_unavailable_days(&unavailable, today), 3);
    }

    #[test]
    fn test_parse_skips_malformed_dates() {
        let raw = vec![
            "2026-09-01".to_string(),
            "not-a-date".to_string(),
            "2026-09-02".to_string(),
        ];
        let parsed = parse_unavailable_dates(&raw);
        assert_eq!(parsed.len(), 2);
        assert!(parsed.contains(&date(2026, 9, 1)));
    }

    #[test]
    fn test_availability_window_is_six_months() {
        let (start, end) = availability_window(date(2026, 8, 29));
        assert_eq!(start, date(2026, 8, 29));
        assert_eq!(end, date(2027, 2, 28));
    }
}
