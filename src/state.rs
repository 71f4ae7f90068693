//! Contexto de sesión
//!
//! Este módulo define el contexto de sesión explícito que sustituye a la
//! consulta ambiental del token en el almacenamiento del navegador: se
//! adquiere en login/registro, se limpia en logout y se restaura al
//! arrancar la aplicación. Su presencia es la única señal que distingue
//! el flujo de cliente nuevo del de cliente existente.

use serde::{Deserialize, Serialize};

use crate::models::CustomerProfile;

/// Sesión activa: token bearer más el perfil del cliente
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionContext {
    pub token: String,
    pub profile: CustomerProfile,
}

impl SessionContext {
    pub fn new(token: String, profile: CustomerProfile) -> Self {
        Self { token, profile }
    }

    /// Valor del header `Authorization`
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// Serializar para persistir entre cargas de página
    pub fn to_stored(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Restaurar una sesión persistida; `None` si el valor guardado es
    /// ilegible (sesión descartada, no error)
    pub fn from_stored(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> CustomerProfile {
        serde_json::from_str(
            r#"{"id": "c1", "firstName": "Jana", "lastName": "Nováková", "email": "jana@example.com"}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_bearer_header() {
        let session = SessionContext::new("tok123".to_string(), profile());
        assert_eq!(session.bearer(), "Bearer tok123");
    }

    #[test]
    fn test_session_round_trips_through_storage() {
        let session = SessionContext::new("tok123".to_string(), profile());
        let stored = session.to_stored();
        let restored = SessionContext::from_stored(&stored).unwrap();
        assert_eq!(restored.token, "tok123");
        assert_eq!(restored.profile.email, "jana@example.com");
    }

    #[test]
    fn test_unreadable_stored_session_is_discarded() {
        assert!(SessionContext::from_stored("garbage").is_none());
    }
}
