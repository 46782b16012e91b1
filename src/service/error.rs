//! Error types for seating service operations.

use std::error::Error;
use std::fmt;

use crate::classroom::ValidationError;
use crate::store::StoreError;

/// Error type for service operations.
///
/// An infeasible allocation is not an error; it is an `AllocationResult`
/// with `success == false`.
#[derive(Debug)]
pub enum ServiceError {
    /// The request payload was rejected before reaching the core.
    Validation(ValidationError),
    /// The request body could not be read as JSON.
    MalformedBody(String),
    /// The store refused or failed the operation.
    Store(StoreError),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Validation(e) => write!(f, "{}", e),
            ServiceError::MalformedBody(msg) => write!(f, "{}", msg),
            ServiceError::Store(StoreError::DuplicateId(_)) => write!(f, "Room ID already exists"),
            ServiceError::Store(e) => write!(f, "{}", e),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ServiceError::Validation(e) => Some(e),
            ServiceError::Store(e) => Some(e),
            ServiceError::MalformedBody(_) => None,
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self {
        ServiceError::Validation(err)
    }
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        ServiceError::Store(err)
    }
}

impl ServiceError {
    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) | ServiceError::MalformedBody(_) => 400,
            ServiceError::Store(e) if e.is_persistence() => 500,
            ServiceError::Store(_) => 400,
        }
    }
}
