//! Service layer errors
//!
//! Wraps domain and application errors and adds the failures that only the
//! service layer can produce: form input that does not survive sanitizing,
//! and an incomplete [`ServiceContext`](super::ServiceContext).

use chatroom_common::{domain_status_code, AppError};
use chatroom_core::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    App(#[from] AppError),

    /// A form field was empty once unsupported characters were removed
    #[error("{field} must contain letters, digits, or _@.-:()")]
    UnusableInput { field: &'static str },

    #[error("{field} must be {min}-{max} characters")]
    InputLength {
        field: &'static str,
        min: usize,
        max: usize,
    },

    /// Sanitizing would have changed a field that must be stored as typed
    #[error("{field} contains unsupported characters")]
    UnsupportedCharacters { field: &'static str },

    #[error("service context is missing {0}")]
    MissingDependency(&'static str),
}

impl ServiceError {
    /// HTTP status for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => domain_status_code(e),
            Self::App(e) => e.status_code(),
            Self::UnusableInput { .. }
            | Self::InputLength { .. }
            | Self::UnsupportedCharacters { .. } => 400,
            Self::MissingDependency(_) => 500,
        }
    }

    /// Stable machine-readable code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::UnusableInput { .. }
            | Self::InputLength { .. }
            | Self::UnsupportedCharacters { .. } => "VALIDATION_ERROR",
            Self::MissingDependency(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::App(e) => e,
            e @ (ServiceError::UnusableInput { .. }
            | ServiceError::InputLength { .. }
            | ServiceError::UnsupportedCharacters { .. }) => AppError::Validation(e.to_string()),
            e @ ServiceError::MissingDependency(_) => AppError::Internal(e.into()),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
