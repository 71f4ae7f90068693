//! Cliente HTTP del servicio de reservas CarFlow
//!
//! Este módulo define el contrato `RentalApi` y su implementación fina
//! sobre reqwest. El cliente sólo da forma a peticiones y decodifica
//! respuestas: sin reintentos, sin backoff, sin caché. Los errores
//! declarados por el servicio viajan con su mensaje literal.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::availability::{parse_unavailable_dates, UnavailableDates};
use crate::config::EnvironmentConfig;
use crate::dto::{
    ApiEnvelope, AuthResponse, AuthenticatedReservationRequest, AvailabilityData, LoginRequest,
    PublicReservationData, PublicReservationRequest, RegisterRequest,
};
use crate::models::{Car, CarListFilters, CustomerProfile, Reservation};
use crate::state::SessionContext;
use crate::utils::errors::{internal_error, AppError, AppResult};

/// Contrato del servicio remoto de reservas.
///
/// El asistente de reserva y las vistas dependen de este trait, no de la
/// implementación HTTP, para poder ejecutarse contra un doble en tests.
#[async_trait]
pub trait RentalApi: Send + Sync {
    /// Listar los vehículos del operador
    async fn list_cars(&self, filters: Option<&CarListFilters>) -> AppResult<Vec<Car>>;

    /// Detalle de un vehículo
    async fn car_details(&self, car_id: &str) -> AppResult<Car>;

    /// Vehículos de una categoría
    async fn cars_by_category(&self, category: &str) -> AppResult<Vec<Car>>;

    /// Días no disponibles de un vehículo dentro de la ventana pedida
    async fn car_availability(
        &self,
        car_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> AppResult<UnavailableDates>;

    /// Crear reserva sin sesión (el servicio crea la cuenta del cliente)
    async fn create_public_reservation(
        &self,
        request: &PublicReservationRequest,
    ) -> AppResult<PublicReservationData>;

    /// Crear reserva autenticada referenciando al cliente existente
    async fn create_reservation(
        &self,
        session: &SessionContext,
        request: &AuthenticatedReservationRequest,
    ) -> AppResult<Reservation>;

    /// Reservas del cliente con sesión
    async fn my_reservations(&self, session: &SessionContext) -> AppResult<Vec<Reservation>>;

    /// Cancelar una reserva del cliente con sesión
    async fn cancel_reservation(
        &self,
        session: &SessionContext,
        reservation_id: &str,
        reason: &str,
    ) -> AppResult<Reservation>;

    /// Login: adquiere el contexto de sesión
    async fn login(&self, email: &str, password: &str) -> AppResult<SessionContext>;

    /// Registro de un cliente nuevo: adquiere el contexto de sesión
    async fn register(&self, request: &RegisterRequest) -> AppResult<SessionContext>;

    /// Perfil de la sesión actual. `None` invalida la sesión en lugar
    /// de propagar error: un token caducado no es un fallo de la vista.
    async fn current_user(&self, session: &SessionContext) -> Option<CustomerProfile>;
}

/// Implementación HTTP del contrato contra el servicio CarFlow
pub struct CarflowApiClient {
    client: Client,
    config: EnvironmentConfig,
}

impl CarflowApiClient {
    /// Crear el cliente con timeout de petición configurado
    pub fn new(config: EnvironmentConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    /// Decodificar el sobre `{ success, data, message }`; un estado
    /// no-2xx o `success: false` se convierte en error con el mensaje
    /// literal del servicio
    async fn decode_envelope<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> AppResult<T> {
        let status = response.status().as_u16();
        let envelope: ApiEnvelope<T> = response.json().await?;

        if !(200..300).contains(&status) || !envelope.success {
            return Err(AppError::Api {
                status,
                message: envelope
                    .message
                    .unwrap_or_else(|| "API request failed".to_string()),
            });
        }

        envelope
            .data
            .ok_or_else(|| internal_error("API response envelope missing data"))
    }
}

#[async_trait]
impl RentalApi for CarflowApiClient {
    async fn list_cars(&self, filters: Option<&CarListFilters>) -> AppResult<Vec<Car>> {
        let mut request = self.client.get(self.config.public_url("cars"));
        if let Some(filters) = filters {
            request = request.query(filters);
        }
        let response = request.send().await?;
        let cars: Vec<Car> = Self::decode_envelope(response).await?;
        debug!("🚗 Listado de flota: {} vehículos", cars.len());
        Ok(cars)
    }

    async fn car_details(&self, car_id: &str) -> AppResult<Car> {
        let url = self.config.public_url(&format!("cars/{}", car_id));
        let response = self.client.get(url).send().await?;
        Self::decode_envelope(response).await
    }

    async fn cars_by_category(&self, category: &str) -> AppResult<Vec<Car>> {
        let url = self
            .config
            .public_url(&format!("cars/category/{}", category));
        let response = self.client.get(url).send().await?;
        Self::decode_envelope(response).await
    }

    async fn car_availability(
        &self,
        car_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> AppResult<UnavailableDates> {
        let url = self
            .config
            .public_url(&format!("cars/{}/availability", car_id));
        let response = self
            .client
            .get(url)
            .query(&[
                ("startDate", start_date.format("%Y-%m-%d").to_string()),
                ("endDate", end_date.format("%Y-%m-%d").to_string()),
            ])
            .send()
            .await?;

        let data: AvailabilityData = Self::decode_envelope(response).await?;
        Ok(parse_unavailable_dates(&data.unavailable_dates))
    }

    async fn create_public_reservation(
        &self,
        request: &PublicReservationRequest,
    ) -> AppResult<PublicReservationData> {
        let response = self
            .client
            .post(self.config.public_url("reservations"))
            .json(request)
            .send()
            .await?;
        Self::decode_envelope(response).await
    }

    async fn create_reservation(
        &self,
        session: &SessionContext,
        request: &AuthenticatedReservationRequest,
    ) -> AppResult<Reservation> {
        let response = self
            .client
            .post(self.config.api_url("reservations"))
            .header("Authorization", session.bearer())
            .json(request)
            .send()
            .await?;
        Self::decode_envelope(response).await
    }

    async fn my_reservations(&self, session: &SessionContext) -> AppResult<Vec<Reservation>> {
        let response = self
            .client
            .get(self.config.api_url("reservations"))
            .query(&[("populate", "car")])
            .header("Authorization", session.bearer())
            .send()
            .await?;
        Self::decode_envelope(response).await
    }

    async fn cancel_reservation(
        &self,
        session: &SessionContext,
        reservation_id: &str,
        reason: &str,
    ) -> AppResult<Reservation> {
        let url = self
            .config
            .api_url(&format!("reservations/{}/cancel", reservation_id));
        let response = self
            .client
            .put(url)
            .header("Authorization", session.bearer())
            .json(&serde_json::json!({ "reason": reason }))
            .send()
            .await?;
        Self::decode_envelope(response).await
    }

    async fn login(&self, email: &str, password: &str) -> AppResult<SessionContext> {
        let response = self
            .client
            .post(self.config.api_url("auth/login"))
            .json(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;

        let auth: AuthResponse = response.json().await?;
        match (auth.success, auth.token, auth.user) {
            (true, Some(token), Some(user)) => Ok(SessionContext::new(token, user)),
            _ => Err(AppError::Unauthorized(
                auth.message.unwrap_or_else(|| "Login failed".to_string()),
            )),
        }
    }

    async fn register(&self, request: &RegisterRequest) -> AppResult<SessionContext> {
        let response = self
            .client
            .post(self.config.api_url("auth/register"))
            .json(request)
            .send()
            .await?;

        let auth: AuthResponse = response.json().await?;
        match (auth.success, auth.token, auth.user) {
            (true, Some(token), Some(user)) => Ok(SessionContext::new(token, user)),
            _ => Err(AppError::Unauthorized(
                auth.message
                    .unwrap_or_else(|| "Registration failed".to_string()),
            )),
        }
    }

    async fn current_user(&self, session: &SessionContext) -> Option<CustomerProfile> {
        let response = self
            .client
            .get(self.config.api_url("auth/me"))
            .header("Authorization", session.bearer())
            .send()
            .await;

        match response {
            Ok(resp) if resp.status().is_success() => {
                match resp.json::<ApiEnvelope<CustomerProfile>>().await {
                    Ok(envelope) => envelope.data,
                    Err(e) => {
                        warn!("⚠️ Perfil de sesión ilegible, sesión descartada: {}", e);
                        None
                    }
                }
            }
            _ => None,
        }
    }
}
