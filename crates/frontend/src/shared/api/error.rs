use thiserror::Error;

/// Every way a backend call can fail. All variants end up in the same
/// notification shape; only the message text differs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, DNS)
    #[error("Error de conexión: {0}")]
    Transport(String),

    /// Non-2xx response carrying `{ "error": "..." }`; shown verbatim
    #[error("{0}")]
    Application(String),

    /// Non-2xx response without a readable error body
    #[error("El servidor respondió con estado {0}")]
    Status(u16),

    /// No stored credential, or the backend rejected it
    #[error("Sesión no iniciada o expirada")]
    Unauthenticated,

    /// 2xx response whose body could not be read
    #[error("Respuesta inválida del servidor: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, ApiError::Unauthenticated)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_error_is_shown_verbatim() {
        let err = ApiError::Application("No se puede eliminar".to_string());
        assert_eq!(err.to_string(), "No se puede eliminar");
    }

    #[test]
    fn test_decode_from_serde() {
        let err: ApiError = serde_json::from_str::<Vec<i32>>("{").unwrap_err().into();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
