//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::AccountId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Unban request not found: {0}")]
    RequestNotFound(AccountId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid account id: {0}")]
    InvalidAccountId(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Missing capability: {0}")]
    MissingCapability(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for user-facing reporting
    pub fn code(&self) -> &'static str {
        match self {
            Self::RequestNotFound(_) => "UNKNOWN_REQUEST",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidAccountId(_) => "INVALID_ACCOUNT_ID",
            Self::MissingCapability(_) => "MISSING_CAPABILITY",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RequestNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::InvalidAccountId(_))
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::MissingCapability(_))
    }
}
