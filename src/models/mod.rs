//! Modelos del sistema
//!
//! Este módulo contiene los modelos de dominio que mapean a las
//! entidades que entrega el servicio de reservas.

pub mod car;
pub mod customer;
pub mod location;
pub mod reservation;

pub use car::{Car, CarListFilters, CarStatus};
pub use customer::{CustomerProfile, GuestDetails};
pub use location::{find_location, Address, RentalLocation, RENTAL_LOCATIONS};
pub use reservation::{
    BookingConfirmation, BookingOutcome, CostBreakdown, IssuedCredentials, Reservation,
};
