//! Selección de rango de fechas
//!
//! Par ordenado (recogida, devolución) con el invariante
//! recogida < devolución. Estado transitorio de la vista.

use chrono::NaiveDate;

/// Selección de fechas de recogida y devolución
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRangeSelection {
    pickup: Option<NaiveDate>,
    return_date: Option<NaiveDate>,
}

impl DateRangeSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pickup(&self) -> Option<NaiveDate> {
        self.pickup
    }

    pub fn return_date(&self) -> Option<NaiveDate> {
        self.return_date
    }

    /// Seleccionar la fecha de recogida.
    ///
    /// Si la nueva recogida es igual o posterior a la devolución ya
    /// elegida, la devolución se limpia para mantener el invariante.
    pub fn select_pickup(&mut self, date: NaiveDate) {
        if let Some(return_date) = self.return_date {
            if date >= return_date {
                self.return_date = None;
            }
        }
        self.pickup = Some(date);
    }

    /// Seleccionar la fecha de devolución; debe ser posterior a la
    /// recogida ya elegida
    pub fn select_return(&mut self, date: NaiveDate) -> bool {
        match self.pickup {
            Some(pickup) if date > pickup => {
                self.return_date = Some(date);
                true
            }
            None => {
                self.return_date = Some(date);
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.pickup = None;
        self.return_date = None;
    }

    /// Rango completo (recogida, devolución), si ambos extremos existen
    pub fn complete_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.pickup, self.return_date) {
            (Some(pickup), Some(return_date)) => Some((pickup, return_date)),
            _ => None,
        }
    }

    /// Días facturables del rango: un rango que cruza cualquier día
    /// parcial cuenta como día completo (recogida día 1, devolución
    /// día 2 = exactamente 1 día)
    pub fn rental_days(&self) -> Option<i64> {
        self.complete_range()
            .map(|(pickup, return_date)| (return_date - pickup).num_days())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_pickup_at_or_after_return_clears_return() {
        let mut selection = DateRangeSelection::new();
        selection.select_pickup(date(2026, 9, 10));
        assert!(selection.select_return(date(2026, 9, 12)));

        // Igual que la devolución: se limpia
        selection.select_pickup(date(2026, 9, 12));
        assert_eq!(selection.pickup(), Some(date(2026, 9, 12)));
        assert_eq!(selection.return_date(), None);

        // Posterior a la devolución: también se limpia
        selection.select_return(date(2026, 9, 14));
        selection.select_pickup(date(2026, 9, 20));
        assert_eq!(selection.return_date(), None);
    }

    #[test]
    fn test_earlier_pickup_keeps_return() {
        let mut selection = DateRangeSelection::new();
        selection.select_pickup(date(2026, 9, 10));
        selection.select_return(date(2026, 9, 15));
        selection.select_pickup(date(2026, 9, 8));
        assert_eq!(selection.return_date(), Some(date(2026, 9, 15)));
    }

    #[test]
    fn test_return_must_follow_pickup() {
        let mut selection = DateRangeSelection::new();
        selection.select_pickup(date(2026, 9, 10));
        assert!(!selection.select_return(date(2026, 9, 10)));
        assert!(!selection.select_return(date(2026, 9, 9)));
        assert_eq!(selection.return_date(), None);
    }

    #[test]
    fn test_rental_days_is_whole_day_count() {
        let mut selection = DateRangeSelection::new();
        selection.select_pickup(date(2026, 9, 1));
        selection.select_return(date(2026, 9, 2));
        // Día 1 a día 2: exactamente 1 día, nunca 0 ni fraccional
        assert_eq!(selection.rental_days(), Some(1));

        selection.select_return(date(2026, 9, 4));
        assert_eq!(selection.rental_days(), Some(3));
    }

    #[test]
    fn test_incomplete_selection_has_no_range() {
        let mut selection = DateRangeSelection::new();
        assert_eq!(selection.complete_range(), None);
        selection.select_pickup(date(2026, 9, 1));
        assert_eq!(selection.complete_range(), None);
        assert_eq!(selection.rental_days(), None);
    }
}
