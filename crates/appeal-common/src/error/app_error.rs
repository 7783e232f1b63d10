//! Application error types
//!
//! Unified error handling for the entire application. Nothing here is fatal
//! to the process; callers log server-side failures and show the acting user
//! either the concrete rejection (validation, identity, permission) or a
//! generic failure message.

use appeal_core::DomainError;
use std::fmt;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Validation errors - rejected before any network or store call
    #[error("Validation error: {0}")]
    Validation(String),

    // Identity gate
    #[error("No identity profile found for account {0}")]
    IdentityNotFound(String),

    // Authorization
    #[error("Insufficient permissions")]
    PermissionDenied,

    // Resource errors
    #[error("Resource not found: {0}")]
    NotFound(String),

    // Rate limiting
    #[error("Request limit reached")]
    LimitReached,

    // Infrastructure
    #[error("Database error: {0}")]
    Database(String),

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Internal error")]
    Internal(#[source] anyhow::Error),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get error code for logging and user-facing reporting
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::IdentityNotFound(_) => "IDENTITY_NOT_FOUND",
            Self::PermissionDenied => "PERMISSION_DENIED",
            Self::NotFound(_) => "NOT_FOUND",
            Self::LimitReached => "LIMIT_REACHED",
            Self::Database(_) => "DATABASE_ERROR",
            Self::ExternalService(_) => "EXTERNAL_SERVICE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Domain(e) => e.code(),
            Self::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Whether the concrete error text may be relayed to the acting user.
    /// Infrastructure failures get a generic message instead.
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        match self {
            Self::Validation(_)
            | Self::IdentityNotFound(_)
            | Self::PermissionDenied
            | Self::NotFound(_)
            | Self::LimitReached => true,
            Self::Database(_)
            | Self::ExternalService(_)
            | Self::Internal(_)
            | Self::Config(_) => false,
            Self::Domain(e) => e.is_validation() || e.is_authorization() || e.is_not_found(),
        }
    }

    /// The message shown to the acting user
    #[must_use]
    pub fn user_message(&self) -> String {
        if self.is_user_facing() {
            self.to_string()
        } else {
            "An error occurred while processing your request.".to_string()
        }
    }

    /// Create a validation error
    #[must_use]
    pub fn validation(msg: impl fmt::Display) -> Self {
        Self::Validation(msg.to_string())
    }

    /// Create a not found error for a resource
    #[must_use]
    pub fn not_found(resource: impl fmt::Display) -> Self {
        Self::NotFound(resource.to_string())
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::PermissionDenied.error_code(), "PERMISSION_DENIED");
        assert_eq!(AppError::LimitReached.error_code(), "LIMIT_REACHED");
        assert_eq!(
            AppError::Database("down".to_string()).error_code(),
            "DATABASE_ERROR"
        );
    }

    #[test]
    fn test_user_facing_classification() {
        assert!(AppError::validation("account id missing").is_user_facing());
        assert!(AppError::LimitReached.is_user_facing());
        assert!(AppError::PermissionDenied.is_user_facing());
        assert!(!AppError::Database("connection refused".to_string()).is_user_facing());
        assert!(!AppError::ExternalService("timeout".to_string()).is_user_facing());
    }

    #[test]
    fn test_user_message_is_generic_for_server_errors() {
        let err = AppError::Database("connection refused to 10.0.0.1".to_string());
        assert_eq!(
            err.user_message(),
            "An error occurred while processing your request."
        );

        let err = AppError::validation("reason is required");
        assert_eq!(err.user_message(), "Validation error: reason is required");
    }

    #[test]
    fn test_domain_error_mapping() {
        let err = AppError::from(DomainError::MissingCapability("RESOLVE_REQUESTS".to_string()));
        assert_eq!(err.error_code(), "MISSING_CAPABILITY");
        assert!(err.is_user_facing());

        let err = AppError::from(DomainError::DatabaseError("oops".to_string()));
        assert!(!err.is_user_facing());
    }
}
