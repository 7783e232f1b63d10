//! Ports - interfaces the domain needs from the outside world
//!
//! The domain layer defines what it needs; the infrastructure crates
//! (`appeal-db`, `appeal-identity`, the chat-platform adapter) provide the
//! implementations.

mod repositories;
mod surface;
mod verifier;

pub use repositories::{RepoResult, RequestRepository, UpsertOutcome};
pub use surface::{
    AccessSubject, ActionButton, InteractionSurface, ModeratorAction, Notice, RequestCard,
    SurfaceError, SurfaceResult,
};
pub use verifier::{IdentityError, IdentityVerifier, VerifiedIdentity};
