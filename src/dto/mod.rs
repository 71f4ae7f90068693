//! DTOs del servicio de reservas
//!
//! Formas de petición y respuesta tal como viajan por la red
//! (camelCase), separadas de los modelos de dominio.

pub mod api_dto;
pub mod auth_dto;
pub mod booking_dto;

pub use api_dto::{ApiEnvelope, AvailabilityData};
pub use auth_dto::{AuthResponse, LoginRequest, RegisterRequest};
pub use booking_dto::{
    AuthenticatedReservationRequest, LocationPayload, PricingData, PublicReservationData,
    PublicReservationRequest,
};
