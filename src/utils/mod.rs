//! Utilidades compartidas
//!
//! Este módulo contiene el sistema de errores y las utilidades de
//! validación usadas por el asistente de reserva.

pub mod errors;
pub mod validation;

pub use errors::*;
