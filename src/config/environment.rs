//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del cliente: URL base del servicio
//! de reservas y el identificador del operador (tenant). Los endpoints
//! públicos están parametrizados por tenant aunque en la práctica el
//! cliente opera con un único operador fijo.

use std::env;

/// URL base del servicio de reservas en producción
const DEFAULT_API_BASE: &str = "https://carflow-reservation-system.onrender.com/api";

/// Identificador del operador bajo el que se consultan los endpoints públicos
const DEFAULT_TENANT_EMAIL: &str = "admin@example.com";

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub api_base_url: String,
    pub tenant_email: String,
    pub request_timeout_secs: u64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            api_base_url: env::var("CARFLOW_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            tenant_email: env::var("CARFLOW_TENANT_EMAIL")
                .unwrap_or_else(|_| DEFAULT_TENANT_EMAIL.to_string()),
            request_timeout_secs: env::var("CARFLOW_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }
}

impl EnvironmentConfig {
    /// Segmento de path del tenant, URL-encoded
    pub fn tenant_segment(&self) -> String {
        urlencoding::encode(&self.tenant_email).into_owned()
    }

    /// URL de un endpoint público del tenant
    pub fn public_url(&self, path: &str) -> String {
        format!(
            "{}/public/users/{}/{}",
            self.api_base_url,
            self.tenant_segment(),
            path
        )
    }

    /// URL de un endpoint general (autenticado o de sesión)
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path)
    }
}
