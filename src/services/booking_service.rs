//! Servicio de reserva
//!
//! Este módulo completa la reserva contra el servicio remoto por uno de
//! los dos caminos: con sesión (reserva autenticada referenciando al
//! cliente existente) o sin sesión (payload compuesto cliente+alquiler,
//! el servicio crea la cuenta). El resultado se resuelve aquí, una sola
//! vez, en la variante etiquetada `BookingOutcome`.

use chrono::{NaiveDate, NaiveTime};
use log::info;
use rust_decimal::Decimal;

use crate::dto::{AuthenticatedReservationRequest, PublicReservationRequest};
use crate::models::{
    Address, BookingConfirmation, BookingOutcome, Car, CostBreakdown, GuestDetails, RentalLocation,
};
use crate::services::api_client::RentalApi;
use crate::state::SessionContext;
use crate::utils::errors::{bad_request_error, AppResult};

/// Identidad con la que se completa la reserva
pub enum BookingIdentity<'a> {
    /// Cliente con sesión activa
    Session(&'a SessionContext),
    /// Cliente nuevo capturado en el formulario
    Guest(&'a GuestDetails),
}

/// Datos del alquiler ya confirmados por el asistente
#[derive(Debug, Clone)]
pub struct RentalOrder {
    pub car_id: String,
    pub pickup_date: NaiveDate,
    pub return_date: NaiveDate,
    pub pickup_location: RentalLocation,
    pub dropoff_location: RentalLocation,
    pub additional_drivers: Vec<String>,
    pub special_requests: String,
}

/// Dirección de relleno cuando el cliente nuevo no aporta la suya.
/// El servicio remoto exige una dirección en el payload compuesto.
fn placeholder_address() -> Address {
    Address {
        street: "123 Main St".to_string(),
        city: "New York".to_string(),
        state: "NY".to_string(),
        postal_code: "10001".to_string(),
        country: "US".to_string(),
    }
}

/// Coste local: tarifa por noches completas más el depósito aparte
fn local_costs(car: &Car, pickup: NaiveDate, return_date: NaiveDate) -> CostBreakdown {
    let days = (return_date - pickup).num_days();
    let rental_cost = car.daily_rate * Decimal::from(days);
    CostBreakdown {
        rental_cost,
        deposit: car.deposit,
        total_cost: rental_cost + car.deposit,
        days,
    }
}

/// Completar la reserva por el camino que corresponda a la identidad
pub async fn complete_booking(
    api: &dyn RentalApi,
    identity: BookingIdentity<'_>,
    order: &RentalOrder,
) -> AppResult<BookingOutcome> {
    match identity {
        BookingIdentity::Session(session) => book_with_session(api, session, order).await,
        BookingIdentity::Guest(guest) => book_as_guest(api, guest, order).await,
    }
}

async fn book_with_session(
    api: &dyn RentalApi,
    session: &SessionContext,
    order: &RentalOrder,
) -> AppResult<BookingOutcome> {
    let car = api.car_details(&order.car_id).await?;
    let costs = local_costs(&car, order.pickup_date, order.return_date);

    let request = AuthenticatedReservationRequest {
        customer: session.profile.id.clone(),
        car: car.id.clone(),
        start_date: order.pickup_date.and_time(NaiveTime::MIN).and_utc(),
        end_date: order.return_date.and_time(NaiveTime::MIN).and_utc(),
        pickup_location: (&order.pickup_location).into(),
        dropoff_location: (&order.dropoff_location).into(),
        additional_drivers: order.additional_drivers.clone(),
        special_requests: order.special_requests.clone(),
    };

    let reservation = api.create_reservation(session, &request).await?;
    info!(
        "✅ Reserva {} creada para cliente existente {}",
        reservation.display_number(),
        session.profile.email
    );

    Ok(BookingOutcome::ReturningCustomer {
        confirmation: BookingConfirmation {
            reservation,
            car,
            costs,
            customer: Some(session.profile.clone()),
        },
    })
}

async fn book_as_guest(
    api: &dyn RentalApi,
    guest: &GuestDetails,
    order: &RentalOrder,
) -> AppResult<BookingOutcome> {
    let mut guest = guest.clone();
    if guest.address.is_blank() {
        guest.address = placeholder_address();
    }

    let request = PublicReservationRequest::new(
        &guest,
        &order.car_id,
        order.pickup_date,
        order.return_date,
        &order.pickup_location,
        &order.dropoff_location,
        &order.special_requests,
    );

    let data = api.create_public_reservation(&request).await?;

    let car = match data.car {
        Some(car) => car,
        None => api.car_details(&order.car_id).await?,
    };
    let costs = match data.pricing {
        Some(pricing) => pricing.into(),
        None => local_costs(&car, order.pickup_date, order.return_date),
    };
    let confirmation = BookingConfirmation {
        reservation: data.reservation,
        car,
        costs,
        customer: data.customer,
    };

    match data.login_info {
        Some(credentials) => {
            info!(
                "✅ Reserva {} creada con cuenta nueva para {}",
                confirmation.reservation.display_number(),
                credentials.email
            );
            Ok(BookingOutcome::NewCustomer {
                confirmation,
                credentials,
            })
        }
        None => {
            info!(
                "✅ Reserva {} creada para cliente ya registrado",
                confirmation.reservation.display_number()
            );
            Ok(BookingOutcome::ReturningCustomer { confirmation })
        }
    }
}

/// Cancelación con motivo obligatorio
pub async fn cancel_with_reason(
    api: &dyn RentalApi,
    session: &SessionContext,
    reservation_id: &str,
    reason: &str,
) -> AppResult<()> {
    if reason.trim().is_empty() {
        return Err(bad_request_error("Cancellation reason is required"));
    }
    let cancelled = api
        .cancel_reservation(session, reservation_id, reason.trim())
        .await?;
    info!("🚫 Reserva {} cancelada", cancelled.display_number());
    Ok(())
}
