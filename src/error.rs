use thiserror::Error;

/// Mensaje genérico que ve el usuario ante cualquier fallo de un dispatch.
pub const GENERIC_ALERT_MESSAGE: &str = "Unexpected error";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("payload error: {0}")]
    Payload(String),
    #[error("internal error: {0}")]
    Internal(String),
}

/// Failure of a single dispatch. Both kinds are surfaced to the user as the same generic alert.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("malformed status payload: {0}")]
    Payload(String),
}

impl From<DispatchError> for AppError {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::Transport(msg) => AppError::Transport(msg),
            DispatchError::Payload(msg) => AppError::Payload(msg),
        }
    }
}
