//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! del formulario de reserva antes de cualquier llamada remota.

use chrono::NaiveDate;
use validator::ValidationError;

/// Validar y convertir string a fecha
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de email
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if !value.contains('@') || !value.contains('.') {
        let mut error = ValidationError::new("email");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Normalizar un número de teléfono a sólo dígitos.
///
/// El servicio remoto espera el número limpio; el usuario puede escribirlo
/// con espacios, guiones o prefijo "+421 ...".
pub fn clean_phone(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Validar número de teléfono (mínimo 10 dígitos tras limpiar formato)
pub fn validate_phone(value: &str) -> Result<String, ValidationError> {
    let clean = clean_phone(value);
    if clean.len() < 10 {
        let mut error = ValidationError::new("phone");
        error.add_param("value".into(), &value.to_string());
        error.add_param("minimum_digits".into(), &10);
        return Err(error);
    }
    Ok(clean)
}

/// Validar contraseña (mínimo 6 caracteres)
pub fn validate_password(value: &str) -> Result<(), ValidationError> {
    if value.chars().count() < 6 {
        let mut error = ValidationError::new("password");
        error.add_param("minimum_length".into(), &6);
        return Err(error);
    }
    Ok(())
}

/// Validar que una fecha sea estrictamente futura respecto a `today`
pub fn validate_future_date(value: NaiveDate, today: NaiveDate) -> Result<(), ValidationError> {
    if value <= today {
        let mut error = ValidationError::new("future_date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("today".into(), &today.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_date() {
        assert!(validate_date("2026-01-15").is_ok());
        assert!(validate_date("2026/01/15").is_err());
        assert!(validate_date("15-01-2026").is_err());
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("hello").is_ok());
        assert!(validate_not_empty("   ").is_err());
        assert!(validate_not_empty("").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("jan.novak@example.com").is_ok());
        assert!(validate_email("invalid-email").is_err());
        assert!(validate_email("jan@").is_err());
    }

    #[test]
    fn test_clean_phone_strips_formatting() {
        assert_eq!(clean_phone("+421 905 123 456"), "421905123456");
        assert_eq!(clean_phone("0905-123-456"), "0905123456");
    }

    #[test]
    fn test_validate_phone() {
        assert_eq!(validate_phone("+421 905 123 456").unwrap(), "421905123456");
        assert!(validate_phone("12345").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("secret1").is_ok());
        assert!(validate_password("abc").is_err());
    }

    #[test]
    fn test_validate_future_date() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
        let future = NaiveDate::from_ymd_opt(2027, 8, 29).unwrap();
        assert!(validate_future_date(future, today).is_ok());
        assert!(validate_future_date(today, today).is_err());
        let past = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert!(validate_future_date(past, today).is_err());
    }
}
