//! Servicios de la aplicación
//!
//! Cliente HTTP del servicio de reservas y la lógica que lo consume:
//! carga de disponibilidad, vista de flota y finalización de la reserva.

pub mod api_client;
pub mod availability_service;
pub mod booking_service;
pub mod fleet_service;

pub use api_client::{CarflowApiClient, RentalApi};
pub use availability_service::{
    filter_cars_by_range, load_car_availability, load_fleet_availability, FleetAvailability,
};
pub use booking_service::{
    cancel_with_reason, complete_booking, BookingIdentity, RentalOrder,
};
pub use fleet_service::{build_fleet_view, distinct_values, FleetFilters, FleetSort};
