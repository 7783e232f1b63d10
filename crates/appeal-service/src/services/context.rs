//! Service context - dependency container for services
//!
//! Holds the repository, identity verifier, interaction surface, and policy
//! configuration needed by the services. Explicitly constructed and passed
//! around; there are no ambient singletons.

use std::sync::Arc;

use dashmap::DashMap;

use appeal_common::LimitConfig;
use appeal_core::{AccountId, IdentityVerifier, InteractionSurface, RequestRepository};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    request_repo: Arc<dyn RequestRepository>,
    verifier: Arc<dyn IdentityVerifier>,
    surface: Arc<dyn InteractionSurface>,
    limits: LimitConfig,
    /// Platform role granted access to support channels
    moderator_role: String,
    /// Account ids with a submission currently in flight
    in_flight: Arc<DashMap<AccountId, ()>>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        request_repo: Arc<dyn RequestRepository>,
        verifier: Arc<dyn IdentityVerifier>,
        surface: Arc<dyn InteractionSurface>,
        limits: LimitConfig,
        moderator_role: impl Into<String>,
    ) -> Self {
        Self {
            request_repo,
            verifier,
            surface,
            limits,
            moderator_role: moderator_role.into(),
            in_flight: Arc::new(DashMap::new()),
        }
    }

    /// Get the request repository
    pub fn request_repo(&self) -> &dyn RequestRepository {
        self.request_repo.as_ref()
    }

    /// Get the identity verifier
    pub fn verifier(&self) -> &dyn IdentityVerifier {
        self.verifier.as_ref()
    }

    /// Get the interaction surface
    pub fn surface(&self) -> &dyn InteractionSurface {
        self.surface.as_ref()
    }

    /// Get the request-limit and sweep policy
    pub fn limits(&self) -> &LimitConfig {
        &self.limits
    }

    /// Get the moderator role name
    pub fn moderator_role(&self) -> &str {
        &self.moderator_role
    }

    /// Get the in-flight submission map
    pub(crate) fn in_flight(&self) -> &DashMap<AccountId, ()> {
        &self.in_flight
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("limits", &self.limits)
            .field("moderator_role", &self.moderator_role)
            .field("in_flight", &self.in_flight.len())
            .finish()
    }
}
