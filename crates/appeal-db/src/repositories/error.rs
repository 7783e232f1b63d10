//! Error handling utilities for repositories

use appeal_core::{AccountId, DomainError};
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Create a "request not found" error
pub fn request_not_found(id: AccountId) -> DomainError {
    DomainError::RequestNotFound(id)
}
