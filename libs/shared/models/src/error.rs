use thiserror::Error;

pub const LOAD_DOCTORS_FAILED: &str = "No se pudieron cargar los médicos. Probá más tarde.";
pub const DOCTOR_REQUIRED: &str = "Elegí un médico para continuar.";
pub const MISSING_PAYMENT_LINK: &str = "El backend respondió sin enlace de pago (init_point).";
pub const PREFERENCE_FAILED: &str = "No se pudo crear la preferencia de pago.";
pub const UNEXPECTED_ERROR: &str = "Ocurrió un error inesperado.";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BookingError {
    /// The request never reached the backend or never came back.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("HTTP error ({status}): {message}")]
    Http { status: u16, message: String },

    /// 2xx response missing an expected field or not decodable.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl BookingError {
    /// Text shown in the message bar when a booking submission fails.
    pub fn user_message(&self) -> String {
        match self {
            BookingError::Transport(_) => UNEXPECTED_ERROR.to_string(),
            BookingError::Http { message, .. } if message.is_empty() => {
                PREFERENCE_FAILED.to_string()
            }
            BookingError::Http { message, .. } => message.clone(),
            BookingError::MalformedResponse(_) => MISSING_PAYMENT_LINK.to_string(),
            BookingError::Validation(message) => message.clone(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            BookingError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for BookingError {
    fn from(err: serde_json::Error) -> Self {
        BookingError::MalformedResponse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_hides_transport_detail() {
        let err = BookingError::Transport("connection refused".to_string());
        assert_eq!(err.user_message(), UNEXPECTED_ERROR);
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_user_message_for_http_error() {
        let err = BookingError::Http { status: 409, message: "slot taken".to_string() };
        assert_eq!(err.user_message(), "slot taken");
        assert_eq!(err.status(), Some(409));

        let empty = BookingError::Http { status: 500, message: String::new() };
        assert_eq!(empty.user_message(), PREFERENCE_FAILED);
    }

    #[test]
    fn test_user_message_for_contract_and_validation() {
        let err = BookingError::MalformedResponse("init_point missing".to_string());
        assert_eq!(err.user_message(), MISSING_PAYMENT_LINK);

        let err = BookingError::Validation(DOCTOR_REQUIRED.to_string());
        assert_eq!(err.user_message(), DOCTOR_REQUIRED);
        assert_eq!(err.status(), None);
    }
}
