//! Request DTOs - raw command input before domain validation

use serde::Deserialize;
use validator::Validate;

/// Raw fields of an `unban` command as received from the chat platform.
/// All four fields are required; the account id shape is checked separately
/// by `AccountId::parse`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitRequest {
    #[validate(length(min = 1, message = "account id is required"))]
    pub account_id: String,

    #[validate(length(min = 1, message = "platform nickname is required"))]
    pub platform_nickname: String,

    #[validate(length(min = 1, message = "community is required"))]
    pub community: String,

    #[validate(length(min = 1, message = "reason is required"))]
    pub reason: String,
}

impl SubmitRequest {
    pub fn new(
        account_id: impl Into<String>,
        platform_nickname: impl Into<String>,
        community: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            platform_nickname: platform_nickname.into(),
            community: community.into(),
            reason: reason.into(),
        }
    }
}
