//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use appeal_common::AppError;
use appeal_core::{AccountId, DomainError, IdentityError, SurfaceError};
use std::fmt;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Domain rule violation or store failure
    Domain(DomainError),

    /// Input failed shape validation (rejected before any network/store call)
    Validation(String),

    /// Primary identity provider has no profile for the id
    IdentityNotFound(AccountId),

    /// Identity provider transport/decoding failure
    Provider(String),

    /// Actor lacks the required capability
    PermissionDenied { capability: String },

    /// A submission for the same id is already in flight
    Conflict(String),

    /// Interaction-surface failure
    Surface(String),

    /// Internal error
    Internal(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
            Self::IdentityNotFound(id) => {
                write!(f, "No identity profile found for account {id}")
            }
            Self::Provider(msg) => write!(f, "Identity provider error: {msg}"),
            Self::PermissionDenied { capability } => {
                write!(f, "Missing required capability: {capability}")
            }
            Self::Conflict(msg) => write!(f, "Conflict: {msg}"),
            Self::Surface(msg) => write!(f, "Interaction surface error: {msg}"),
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            _ => None,
        }
    }
}

impl ServiceError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a permission denied error
    pub fn permission_denied(capability: impl Into<String>) -> Self {
        Self::PermissionDenied {
            capability: capability.into(),
        }
    }

    /// Create a conflict error
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Get the error code for logging and user-facing reporting
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::IdentityNotFound(_) => "IDENTITY_NOT_FOUND",
            Self::Provider(_) => "EXTERNAL_SERVICE_ERROR",
            Self::PermissionDenied { .. } => "PERMISSION_DENIED",
            Self::Conflict(_) => "CONFLICT",
            Self::Surface(_) => "SURFACE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<IdentityError> for ServiceError {
    fn from(err: IdentityError) -> Self {
        match err {
            IdentityError::NotFound(id) => Self::IdentityNotFound(id),
            IdentityError::Provider(msg) => Self::Provider(msg),
        }
    }
}

impl From<SurfaceError> for ServiceError {
    fn from(err: SurfaceError) -> Self {
        Self::Surface(err.to_string())
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::Validation(msg) => AppError::Validation(msg),
            ServiceError::IdentityNotFound(id) => AppError::IdentityNotFound(id.to_string()),
            ServiceError::Provider(msg) => AppError::ExternalService(msg),
            ServiceError::PermissionDenied { .. } => AppError::PermissionDenied,
            ServiceError::Conflict(msg) => AppError::Validation(msg),
            ServiceError::Surface(msg) => AppError::ExternalService(msg),
            ServiceError::Internal(msg) => AppError::Internal(anyhow::anyhow!(msg)),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_denied_error() {
        let err = ServiceError::permission_denied("RESOLVE_REQUESTS");
        assert_eq!(err.error_code(), "PERMISSION_DENIED");
        assert!(err.to_string().contains("RESOLVE_REQUESTS"));
    }

    #[test]
    fn test_identity_error_mapping() {
        let err = ServiceError::from(IdentityError::NotFound(AccountId::new(1)));
        assert_eq!(err.error_code(), "IDENTITY_NOT_FOUND");

        let err = ServiceError::from(IdentityError::Provider("timeout".to_string()));
        assert_eq!(err.error_code(), "EXTERNAL_SERVICE_ERROR");
    }

    #[test]
    fn test_convert_to_app_error() {
        let err = ServiceError::permission_denied("RESOLVE_REQUESTS");
        let app_err: AppError = err.into();
        assert_eq!(app_err.error_code(), "PERMISSION_DENIED");
        assert!(app_err.is_user_facing());

        let err = ServiceError::from(DomainError::DatabaseError("down".to_string()));
        let app_err: AppError = err.into();
        assert!(!app_err.is_user_facing());
    }
}
