//! Rejilla mensual del calendario
//!
//! Celdas de un mes para el selector de fechas: semana empezando en
//! lunes, con relleno vacío antes del día 1. La vista decide colores y
//! leyenda; aquí sólo la forma y el estado de cada día.

use chrono::{Datelike, Days, NaiveDate};

use super::calendar::UnavailableDates;

/// Celdas del mes: `None` es relleno antes del primer día
pub fn month_grid(year: i32, month: u32) -> Vec<Option<NaiveDate>> {
    let first = match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(date) => date,
        None => return Vec::new(),
    };

    // Lunes = 0 ... Domingo = 6
    let leading = first.weekday().num_days_from_monday() as usize;
    let mut cells: Vec<Option<NaiveDate>> = vec![None; leading];

    let mut day = first;
    while day.month() == month {
        cells.push(Some(day));
        day = day + Days::new(1);
    }
    cells
}

/// Un día no se puede elegir si cae antes del mínimo, después del
/// máximo, o está en el conjunto de días no disponibles
pub fn is_date_disabled(
    date: NaiveDate,
    min_date: Option<NaiveDate>,
    max_date: Option<NaiveDate>,
    unavailable: &UnavailableDates,
) -> bool {
    if let Some(min) = min_date {
        if date < min {
            return true;
        }
    }
    if let Some(max) = max_date {
        if date > max {
            return true;
        }
    }
    unavailable.contains(&date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_grid_starts_on_monday() {
        // Septiembre 2026 empieza en martes: una celda de relleno
        let cells = month_grid(2026, 9);
        assert_eq!(cells[0], None);
        assert_eq!(cells[1], Some(date(2026, 9, 1)));
        assert_eq!(cells.len(), 1 + 30);
        assert_eq!(cells.last().unwrap(), &Some(date(2026, 9, 30)));
    }

    #[test]
    fn test_month_grid_no_padding_when_month_starts_monday() {
        // Junio 2026 empieza en lunes
        let cells = month_grid(2026, 6);
        assert_eq!(cells[0], Some(date(2026, 6, 1)));
        assert_eq!(cells.len(), 30);
    }

    #[test]
    fn test_is_date_disabled() {
        let unavailable: UnavailableDates = [date(2026, 9, 10)].into_iter().collect();
        let min = Some(date(2026, 9, 5));
        let max = Some(date(2026, 9, 20));

        assert!(is_date_disabled(date(2026, 9, 4), min, max, &unavailable));
        assert!(is_date_disabled(date(2026, 9, 21), min, max, &unavailable));
        assert!(is_date_disabled(date(2026, 9, 10), min, max, &unavailable));
        assert!(!is_date_disabled(date(2026, 9, 6), min, max, &unavailable));
    }
}
