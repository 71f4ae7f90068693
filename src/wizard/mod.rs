//! Asistente de reserva
//!
//! Máquina de estados del formulario multipaso, cálculo de coste
//! orientativo y deep links de entrada.

pub mod booking_wizard;
pub mod deep_link;
pub mod pricing;

pub use booking_wizard::{BookingWizard, GuestForm, WizardStep, DEFAULT_GUEST_PASSWORD};
pub use deep_link::BookingDeepLink;
pub use pricing::{rental_quote, RentalExtras, RentalQuote};
