//! Cliente del sistema de reservas CarFlow
//!
//! Lógica del sitio de alquiler de vehículos de cara al cliente:
//! listado de flota con filtro de disponibilidad por fechas, asistente
//! de reserva multipaso y consumo del servicio remoto de reservas. El
//! servicio remoto es la única autoridad de precios, disponibilidad y
//! cuentas; aquí sólo estado de interfaz y forma de las peticiones.

pub mod availability;
pub mod config;
pub mod dto;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod wizard;

pub use config::EnvironmentConfig;
pub use services::{CarflowApiClient, RentalApi};
pub use state::SessionContext;
pub use utils::errors::{AppError, AppResult};
pub use wizard::{BookingDeepLink, BookingWizard, WizardStep};
