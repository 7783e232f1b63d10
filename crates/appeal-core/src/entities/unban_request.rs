//! Unban request entity and its resolution outcome

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::AccountId;

/// Terminal moderator-assigned outcome for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// The submitted account id and linked platform profile do not match
    NotConnected,
    /// The player has left the community
    Left,
}

impl Resolution {
    /// Stable string form used in the store
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotConnected => "not_connected",
            Self::Left => "left",
        }
    }

    /// Parse from the stored string form
    pub fn parse(s: &str) -> Result<Self, ResolutionParseError> {
        match s {
            "not_connected" => Ok(Self::NotConnected),
            "left" => Ok(Self::Left),
            other => Err(ResolutionParseError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a Resolution from its stored form
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolutionParseError {
    #[error("unknown resolution: {0}")]
    Unknown(String),
}

/// One unban request row. At most one exists per account id; repeated
/// accepted submissions update the row in place, no history is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnbanRequest {
    pub account_id: AccountId,
    /// Display name on the linked platform profile, as supplied by the user
    pub platform_nickname: String,
    /// Sub-community / hub label
    pub community: String,
    pub reason: String,
    /// Number of accepted submissions since the last sweep reset
    pub request_count: i32,
    /// Time of the most recent accepted submission
    pub request_time: DateTime<Utc>,
    pub resolution: Option<Resolution>,
    pub resolved_by: Option<String>,
}

/// The four user-supplied fields of a submission, already validated for shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSubmission {
    pub account_id: AccountId,
    pub platform_nickname: String,
    pub community: String,
    pub reason: String,
}

impl RequestSubmission {
    pub fn new(
        account_id: AccountId,
        platform_nickname: impl Into<String>,
        community: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            account_id,
            platform_nickname: platform_nickname.into(),
            community: community.into(),
            reason: reason.into(),
        }
    }
}
