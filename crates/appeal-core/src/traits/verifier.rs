//! Identity-verification port
//!
//! Validated account ids are cross-checked against two external identity
//! providers before a submission is accepted. The primary lookup gates
//! acceptance; the secondary linked-profile lookup is advisory only.

use async_trait::async_trait;
use thiserror::Error;

use crate::value_objects::AccountId;

/// Profile data corroborating a submitted account id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedIdentity {
    pub account_id: AccountId,
    /// Display name from the primary provider profile
    pub profile_name: String,
    /// Linked player id from the secondary provider, when the cross-check
    /// found one. `None` does not block acceptance.
    pub linked_player_id: Option<String>,
}

/// Identity-provider errors
#[derive(Debug, Error)]
pub enum IdentityError {
    /// The primary provider has no profile for the id
    #[error("No identity profile found for account {0}")]
    NotFound(AccountId),

    /// Transport or decoding failure talking to a provider
    #[error("Identity provider error: {0}")]
    Provider(String),
}

#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// Verify an account id against the identity providers. Read-only, no
    /// caching: every call hits the providers fresh.
    async fn verify(&self, account_id: AccountId) -> Result<VerifiedIdentity, IdentityError>;
}
