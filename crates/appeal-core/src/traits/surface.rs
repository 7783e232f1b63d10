//! Interaction-surface port - chat-platform channel/message primitives
//!
//! The chat platform is an external collaborator: the core calls these
//! primitives, it never implements them. Moderator actions are plain
//! payloads (account id + outcome) dispatched back through the platform
//! adapter, not stateful callbacks.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entities::Resolution;
use crate::value_objects::{AccountId, ChannelId};

/// Result type for surface operations
pub type SurfaceResult<T> = Result<T, SurfaceError>;

/// Interaction-surface errors. The core logs these and reports a generic
/// failure; it never crashes on them.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Missing platform permission: {0}")]
    Forbidden(String),

    #[error("Interaction surface error: {0}")]
    Unavailable(String),
}

/// Who an access grant applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessSubject {
    /// A single platform user
    User(i64),
    /// A named platform role
    Role(String),
    /// The default audience of the scope
    Everyone,
}

/// A formatted message without actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Explicit moderator-action payload carried by a request card button.
/// Resolved against the store when dispatched; nothing is captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeratorAction {
    pub account_id: AccountId,
    pub resolution: Resolution,
}

/// A labeled action button on a request card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionButton {
    pub label: String,
    pub action: ModeratorAction,
}

impl ActionButton {
    pub fn new(label: impl Into<String>, action: ModeratorAction) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }
}

/// A formatted message carrying up to two moderator actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestCard {
    pub notice: Notice,
    pub actions: Vec<ActionButton>,
}

#[async_trait]
pub trait InteractionSurface: Send + Sync {
    /// Create a private channel scoped to a user, returning its handle
    async fn create_private_channel(&self, user_id: i64, reason: &str)
        -> SurfaceResult<ChannelId>;

    /// Find the existing private channel for a user, if any
    async fn find_private_channel(&self, user_id: i64) -> SurfaceResult<Option<ChannelId>>;

    /// Grant or deny read/write access on a channel for a subject
    async fn set_access(
        &self,
        channel: ChannelId,
        subject: AccessSubject,
        allow: bool,
    ) -> SurfaceResult<()>;

    /// Send a formatted message to a channel
    async fn send_notice(&self, channel: ChannelId, notice: &Notice) -> SurfaceResult<()>;

    /// Send a formatted message with moderator action buttons
    async fn send_request_card(&self, channel: ChannelId, card: &RequestCard)
        -> SurfaceResult<()>;

    /// Delete a channel with an audit reason
    async fn delete_channel(&self, channel: ChannelId, reason: &str) -> SurfaceResult<()>;
}
