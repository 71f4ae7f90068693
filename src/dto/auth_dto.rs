//! DTOs de autenticación
//!
//! Peticiones y respuestas de `POST /auth/login`, `POST /auth/register`
//! y `GET /auth/me`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Address, CustomerProfile};

/// Petición de login
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Petición de registro; el rol se fuerza siempre a `customer`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_expiry: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    pub role: String,
}

impl RegisterRequest {
    /// Petición de registro con el rol de cliente
    pub fn customer(
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
        phone: &str,
    ) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            phone: phone.to_string(),
            date_of_birth: None,
            license_number: None,
            license_expiry: None,
            address: None,
            role: "customer".to_string(),
        }
    }
}

/// Respuesta de login/registro: token de sesión más el perfil
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub success: bool,
    pub token: Option<String>,
    pub user: Option<CustomerProfile>,
    pub message: Option<String>,
}
