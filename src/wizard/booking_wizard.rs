//! Máquina de estados del asistente de reserva
//!
//! Cuatro estados nombrados con transiciones explícitas: detalles del
//! alquiler, datos del cliente, revisión y confirmación. Avanzar está
//! condicionado por el predicado de completitud de cada paso; toda
//! precondición local se comprueba aquí, antes de cualquier llamada
//! remota.

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::availability::{is_date_disabled, DateRangeSelection, UnavailableDates};
use crate::models::{
    find_location, Address, BookingOutcome, Car, GuestDetails, RentalLocation,
};
use crate::services::api_client::RentalApi;
use crate::services::availability_service::load_car_availability;
use crate::services::booking_service::{complete_booking, BookingIdentity, RentalOrder};
use crate::state::SessionContext;
use crate::utils::errors::{bad_request_error, AppResult};
use crate::utils::validation::{
    validate_date, validate_email, validate_future_date, validate_password, validate_phone,
};

use super::deep_link::BookingDeepLink;
use super::pricing::{rental_quote, RentalExtras, RentalQuote};

/// Contraseña sustituida cuando el cliente nuevo deja el campo en
/// blanco. Comportamiento heredado del servicio; se registra con aviso
/// cada vez que se aplica.
pub const DEFAULT_GUEST_PASSWORD: &str = "customer123";

/// Estados del asistente
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    RentalDetails,
    CustomerInfo,
    ReviewConfirm,
    Confirmed,
}

/// Campos del formulario de cliente nuevo tal como se teclean
#[derive(Debug, Clone, Default)]
pub struct GuestForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub date_of_birth: String,
    pub license_number: String,
    pub license_expiry: String,
    pub address: Address,
}

/// Asistente de reserva para un vehículo concreto
pub struct BookingWizard {
    car: Car,
    unavailable: UnavailableDates,
    today: NaiveDate,
    session: Option<SessionContext>,
    step: WizardStep,
    dates: DateRangeSelection,
    pickup_location: Option<RentalLocation>,
    return_location: Option<RentalLocation>,
    guest_form: GuestForm,
    guest: Option<GuestDetails>,
    extras: RentalExtras,
    special_requests: String,
    additional_drivers: Vec<String>,
    terms_accepted: bool,
    submit_error: Option<String>,
    outcome: Option<BookingOutcome>,
}

impl BookingWizard {
    /// Cargar el asistente para el vehículo del deep link.
    ///
    /// Un fallo aquí (vehículo inexistente, red caída) termina el
    /// asistente antes de empezar: el llamante lo convierte en la vista
    /// de error bloqueante con vuelta al listado.
    pub async fn load(
        api: &dyn RentalApi,
        link: &BookingDeepLink,
        session: Option<SessionContext>,
        today: NaiveDate,
    ) -> AppResult<Self> {
        let car_id = link
            .car_id
            .as_deref()
            .ok_or_else(|| bad_request_error("No car selected for booking"))?;

        let car = api.car_details(car_id).await?;
        let unavailable = load_car_availability(api, car_id, today).await;
        info!("🚗 Asistente de reserva cargado para {}", car.display_name());

        let mut wizard = Self {
            car,
            unavailable,
            today,
            session,
            step: WizardStep::RentalDetails,
            dates: DateRangeSelection::new(),
            pickup_location: None,
            return_location: None,
            guest_form: GuestForm::default(),
            guest: None,
            extras: RentalExtras::default(),
            special_requests: String::new(),
            additional_drivers: Vec::new(),
            terms_accepted: false,
            submit_error: None,
            outcome: None,
        };

        // Prefijar fechas y sucursales del deep link
        if let Some(date) = link.pickup_date {
            wizard.select_pickup_date(date);
        }
        if let Some(date) = link.return_date {
            wizard.select_return_date(date);
        }
        if let Some(name) = &link.pickup_location {
            wizard.select_pickup_location(name);
        }
        if let Some(name) = &link.return_location {
            wizard.select_return_location(name);
        }

        // Prefijar los datos del cliente desde la sesión, si existe
        if let Some(session) = &wizard.session {
            let profile = &session.profile;
            wizard.guest_form.first_name = profile.first_name.clone();
            wizard.guest_form.last_name = profile.last_name.clone();
            wizard.guest_form.email = profile.email.clone();
            wizard.guest_form.phone = profile.phone.clone().unwrap_or_default();
        }

        Ok(wizard)
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn car(&self) -> &Car {
        &self.car
    }

    pub fn dates(&self) -> &DateRangeSelection {
        &self.dates
    }

    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// Error inline del último intento de envío, si lo hubo
    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn outcome(&self) -> Option<&BookingOutcome> {
        self.outcome.as_ref()
    }

    pub fn guest_form_mut(&mut self) -> &mut GuestForm {
        &mut self.guest_form
    }

    pub fn set_extras(&mut self, extras: RentalExtras) {
        self.extras = extras;
    }

    pub fn set_special_requests(&mut self, text: &str) {
        self.special_requests = text.to_string();
    }

    pub fn set_additional_drivers(&mut self, drivers: Vec<String>) {
        self.additional_drivers = drivers;
    }

    pub fn set_terms_accepted(&mut self, accepted: bool) {
        self.terms_accepted = accepted;
    }

    /// Elegir la fecha de recogida; rechazada si está deshabilitada en
    /// el calendario
    pub fn select_pickup_date(&mut self, date: NaiveDate) -> bool {
        if is_date_disabled(date, Some(self.today), None, &self.unavailable) {
            return false;
        }
        self.dates.select_pickup(date);
        true
    }

    /// Elegir la fecha de devolución; debe ser posterior a la recogida
    pub fn select_return_date(&mut self, date: NaiveDate) -> bool {
        if is_date_disabled(date, Some(self.today), None, &self.unavailable) {
            return false;
        }
        self.dates.select_return(date)
    }

    /// Elegir sucursal de recogida por nombre
    pub fn select_pickup_location(&mut self, name: &str) -> bool {
        match find_location(name) {
            Some(location) => {
                self.pickup_location = Some(location);
                true
            }
            None => false,
        }
    }

    /// Elegir sucursal de devolución por nombre
    pub fn select_return_location(&mut self, name: &str) -> bool {
        match find_location(name) {
            Some(location) => {
                self.return_location = Some(location);
                true
            }
            None => false,
        }
    }

    /// Predicado de completitud del paso 1: ambas fechas y ambas
    /// sucursales
    pub fn rental_details_complete(&self) -> bool {
        self.dates.complete_range().is_some()
            && self.pickup_location.is_some()
            && self.return_location.is_some()
    }

    /// Presupuesto para el resumen; `None` mientras el rango esté
    /// incompleto
    pub fn quote(&self) -> Option<RentalQuote> {
        self.dates
            .rental_days()
            .map(|days| rental_quote(&self.car, days, self.extras))
    }

    /// Avanzar al paso siguiente si el predicado del paso actual se
    /// cumple
    pub fn advance(&mut self) -> AppResult<WizardStep> {
        match self.step {
            WizardStep::RentalDetails => {
                if !self.rental_details_complete() {
                    return Err(bad_request_error(
                        "Please select pickup date, return date and both locations",
                    ));
                }
                self.step = WizardStep::CustomerInfo;
            }
            WizardStep::CustomerInfo => {
                // Con sesión los datos son de solo lectura; sin sesión
                // se validan aquí, antes de cualquier llamada remota
                if self.session.is_none() {
                    let guest = validate_guest_form(&self.guest_form, self.today)?;
                    self.guest = Some(guest);
                }
                self.step = WizardStep::ReviewConfirm;
            }
            WizardStep::ReviewConfirm => {
                return Err(bad_request_error(
                    "Review step is completed by submitting the booking",
                ));
            }
            WizardStep::Confirmed => {
                return Err(bad_request_error("Booking is already confirmed"));
            }
        }
        Ok(self.step)
    }

    /// Volver al paso anterior; desde la confirmación no hay vuelta
    pub fn previous(&mut self) -> WizardStep {
        self.step = match self.step {
            WizardStep::CustomerInfo => WizardStep::RentalDetails,
            WizardStep::ReviewConfirm => WizardStep::CustomerInfo,
            other => other,
        };
        self.step
    }

    /// Enviar la reserva desde el paso de revisión, exactamente una
    /// llamada por intento. Un fallo deja el asistente en revisión con
    /// el mensaje remoto literal; el reenvío requiere otra llamada
    /// explícita.
    pub async fn submit(&mut self, api: &dyn RentalApi) -> AppResult<&BookingOutcome> {
        if self.step != WizardStep::ReviewConfirm {
            return Err(bad_request_error("Booking can only be submitted from review"));
        }
        if !self.terms_accepted {
            return Err(bad_request_error(
                "You must accept the terms and conditions",
            ));
        }
        let (pickup_date, return_date) = self
            .dates
            .complete_range()
            .ok_or_else(|| bad_request_error("Rental dates are incomplete"))?;
        let (pickup_location, return_location) =
            match (&self.pickup_location, &self.return_location) {
                (Some(pickup), Some(dropoff)) => (pickup.clone(), dropoff.clone()),
                _ => return Err(bad_request_error("Rental locations are incomplete")),
            };

        let order = RentalOrder {
            car_id: self.car.id.clone(),
            pickup_date,
            return_date,
            pickup_location,
            dropoff_location: return_location,
            additional_drivers: self.additional_drivers.clone(),
            special_requests: self.special_requests.clone(),
        };

        let identity = match (&self.session, &self.guest) {
            (Some(session), _) => BookingIdentity::Session(session),
            (None, Some(guest)) => BookingIdentity::Guest(guest),
            (None, None) => {
                return Err(bad_request_error("Customer details are incomplete"))
            }
        };

        let result = complete_booking(api, identity, &order).await;
        match result {
            Ok(outcome) => {
                self.submit_error = None;
                self.step = WizardStep::Confirmed;
                Ok(&*self.outcome.insert(outcome))
            }
            Err(e) => {
                // Sin reintento automático: el asistente queda en
                // revisión con el mensaje literal
                self.submit_error = Some(e.user_message());
                Err(e)
            }
        }
    }
}

/// Validar el formulario de cliente nuevo. Los campos obligatorios que
/// falten se enumeran todos en un solo error.
fn validate_guest_form(form: &GuestForm, today: NaiveDate) -> AppResult<GuestDetails> {
    let required = [
        ("firstName", form.first_name.trim()),
        ("lastName", form.last_name.trim()),
        ("email", form.email.trim()),
        ("phone", form.phone.trim()),
        ("licenseNumber", form.license_number.trim()),
        ("licenseExpiry", form.license_expiry.trim()),
        ("dateOfBirth", form.date_of_birth.trim()),
    ];
    let missing: Vec<&str> = required
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| *name)
        .collect();
    if !missing.is_empty() {
        return Err(bad_request_error(&format!(
            "Please fill in all required fields: {}",
            missing.join(", ")
        )));
    }

    validate_email(form.email.trim())
        .map_err(|_| bad_request_error("Please provide a valid email address"))?;
    let phone = validate_phone(&form.phone).map_err(|_| {
        bad_request_error("Please provide a valid phone number (minimum 10 digits)")
    })?;
    let date_of_birth = validate_date(form.date_of_birth.trim())
        .map_err(|_| bad_request_error("Please provide a valid date of birth"))?;
    let license_expiry = validate_date(form.license_expiry.trim())
        .map_err(|_| bad_request_error("Please provide a valid license expiry date"))?;
    validate_future_date(license_expiry, today)
        .map_err(|_| bad_request_error("License expiry date must be in the future"))?;

    let password = {
        let trimmed = form.password.trim();
        if trimmed.is_empty() {
            warn!(
                "⚠️ Contraseña en blanco para {}: se sustituye la contraseña por defecto",
                form.email.trim()
            );
            DEFAULT_GUEST_PASSWORD.to_string()
        } else {
            validate_password(trimmed)
                .map_err(|_| bad_request_error("Password must be at least 6 characters"))?;
            trimmed.to_string()
        }
    };

    Ok(GuestDetails {
        first_name: form.first_name.trim().to_string(),
        last_name: form.last_name.trim().to_string(),
        email: form.email.trim().to_string(),
        phone,
        password,
        date_of_birth,
        license_number: form.license_number.trim().to_string(),
        license_expiry,
        address: form.address.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn filled_form() -> GuestForm {
        GuestForm {
            first_name: "Jana".to_string(),
            last_name: "Nováková".to_string(),
            email: "jana@example.com".to_string(),
            phone: "+421 905 123 456".to_string(),
            password: "tajneheslo".to_string(),
            date_of_birth: "1994-03-15".to_string(),
            license_number: "SK998877".to_string(),
            license_expiry: "2030-05-01".to_string(),
            address: Address::default(),
        }
    }

    #[test]
    fn test_valid_guest_form() {
        let guest = validate_guest_form(&filled_form(), date(2026, 8, 29)).unwrap();
        assert_eq!(guest.phone, "421905123456");
        assert_eq!(guest.password, "tajneheslo");
        assert_eq!(guest.license_expiry, date(2030, 5, 1));
    }

    #[test]
    fn test_missing_fields_are_enumerated() {
        let mut form = filled_form();
        form.first_name.clear();
        form.license_number = "   ".to_string();
        let err = validate_guest_form(&form, date(2026, 8, 29)).unwrap_err();
        let message = err.user_message();
        assert!(message.contains("firstName"));
        assert!(message.contains("licenseNumber"));
        assert!(!message.contains("lastName"));
    }

    #[test]
    fn test_blank_password_gets_default() {
        let mut form = filled_form();
        form.password = "  ".to_string();
        let guest = validate_guest_form(&form, date(2026, 8, 29)).unwrap();
        assert_eq!(guest.password, DEFAULT_GUEST_PASSWORD);
    }

    #[test]
    fn test_short_password_is_rejected() {
        let mut form = filled_form();
        form.password = "abc".to_string();
        assert!(validate_guest_form(&form, date(2026, 8, 29)).is_err());
    }

    #[test]
    fn test_license_expiry_must_be_future() {
        let mut form = filled_form();
        form.license_expiry = "2026-08-29".to_string();
        let err = validate_guest_form(&form, date(2026, 8, 29)).unwrap_err();
        assert!(err.user_message().contains("future"));
    }

    #[test]
    fn test_short_phone_is_rejected() {
        let mut form = filled_form();
        form.phone = "0905 123".to_string();
        assert!(validate_guest_form(&form, date(2026, 8, 29)).is_err());
    }
}
