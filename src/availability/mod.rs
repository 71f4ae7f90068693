//! Disponibilidad por fechas
//!
//! Este módulo contiene el algoritmo de disponibilidad reutilizado por
//! el listado de flota, el detalle del vehículo y el asistente de
//! reserva, junto con la selección de rango y la rejilla del calendario.

pub mod calendar;
pub mod date_range;
pub mod month_grid;

pub use calendar::{
    availability_window, count_unavailable_days, is_range_available, parse_unavailable_dates,
    UnavailableDates, AVAILABILITY_WINDOW_MONTHS, NEAR_TERM_WINDOW_DAYS,
};
pub use date_range::DateRangeSelection;
pub use month_grid::{is_date_disabled, month_grid};
