//! # appeal-core
//!
//! Domain layer containing entities, value objects, repository and provider ports.
//! This crate has zero dependencies on infrastructure (database, HTTP client, chat SDK).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{RequestSubmission, Resolution, ResolutionParseError, UnbanRequest};
pub use error::DomainError;
pub use traits::{
    AccessSubject, ActionButton, IdentityError, IdentityVerifier, InteractionSurface,
    ModeratorAction, Notice, RepoResult, RequestCard, RequestRepository, SurfaceError,
    SurfaceResult, UpsertOutcome, VerifiedIdentity,
};
pub use value_objects::{AccountId, AccountIdParseError, Actor, Capabilities, ChannelId};
