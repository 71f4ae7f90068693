//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del cliente y su
//! clasificación: transporte, error declarado por el servicio remoto,
//! y precondición local.

use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Mensaje del error tal como debe mostrarse al usuario.
    ///
    /// Los errores remotos se muestran literalmente (sin reformular),
    /// según el contrato de la capa de presentación.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Verificar si el error proviene del servicio remoto
    pub fn is_remote(&self) -> bool {
        matches!(self, AppError::Api { .. } | AppError::Network(_))
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de validación
pub fn validation_error(field: &'static str, message: &'static str) -> AppError {
    use validator::ValidationError;

    let mut error = ValidationError::new("custom");
    error.add_param("field".into(), &field);
    error.add_param("message".into(), &message);

    let mut errors = validator::ValidationErrors::new();
    errors.add(field, error);

    AppError::Validation(errors)
}

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}

/// Función helper para crear errores internos
pub fn internal_error(message: &str) -> AppError {
    AppError::Internal(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message_is_verbatim() {
        let err = AppError::Api {
            status: 422,
            message: "Car is not available for the selected dates".to_string(),
        };
        assert_eq!(
            err.user_message(),
            "Car is not available for the selected dates"
        );
        assert!(err.is_remote());
    }

    #[test]
    fn test_local_errors_are_not_remote() {
        let err = bad_request_error("pickup date must be before return date");
        assert!(!err.is_remote());

        let err = validation_error("phone", "minimum 10 digits");
        assert!(matches!(err, AppError::Validation(_)));

        let err = not_found_error("Car", "66b1f0");
        assert_eq!(err.user_message(), "Not found: Car with id '66b1f0' not found");

        let err = internal_error("API response envelope missing data");
        assert!(matches!(err, AppError::Internal(_)));
        assert!(!err.is_remote());
    }
}
