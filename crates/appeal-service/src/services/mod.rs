//! Business logic services
//!
//! The lifecycle controller, the rate limiter, and the sweep scheduler,
//! orchestrating the repository, identity-verifier, and interaction-surface
//! ports.

pub mod context;
pub mod error;
pub mod rate_limit;
pub mod request;
pub mod sweep;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export all services for convenience
pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use rate_limit::RateLimiter;
pub use request::{RequestService, SubmitOutcome};
pub use sweep::SweepScheduler;
