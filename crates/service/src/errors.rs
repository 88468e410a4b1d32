use models::errors::ModelError;
use thiserror::Error;

/// Business errors for customer workflows. The display strings of the first
/// three variants are part of the client-visible API contract.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Id cannot be null.")]
    InvalidRequest,
    #[error("Customer not found with id: {0}")]
    NotFound(i64),
    #[error("Invalid mobile number: {0}")]
    InvalidMobile(String),
    #[error("mobile validator unavailable: {0}")]
    ValidatorUnavailable(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("database error: {0}")]
    Db(String),
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => ServiceError::Validation(msg),
            ModelError::Db(msg) => ServiceError::Db(msg),
        }
    }
}
