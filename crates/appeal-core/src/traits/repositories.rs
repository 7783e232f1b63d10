//! Repository port for the unban-request store

use async_trait::async_trait;

use crate::entities::{RequestSubmission, Resolution, UnbanRequest};
use crate::error::DomainError;
use crate::value_objects::AccountId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Outcome of an accept-and-write attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// The submission was written; `request_count` is the value after the
    /// increment (1 for a fresh row).
    Accepted { request_count: i32 },
    /// The row already holds `max_requests` accepted submissions; nothing
    /// was written.
    LimitReached,
}

#[async_trait]
pub trait RequestRepository: Send + Sync {
    /// Accept-and-write in one atomic operation: create the row with a count
    /// of 1, or update it in place and increment the count, but only while
    /// the current count is below `max_requests`. Concurrent submissions for
    /// the same id must not be able to exceed the cap.
    async fn upsert(
        &self,
        submission: &RequestSubmission,
        max_requests: u32,
    ) -> RepoResult<UpsertOutcome>;

    /// Fetch a request row by account id
    async fn find(&self, account_id: AccountId) -> RepoResult<Option<UnbanRequest>>;

    /// Current accepted-submission count for an id (0 if no row exists)
    async fn request_count(&self, account_id: AccountId) -> RepoResult<i32>;

    /// Record a moderator resolution. Fails with `RequestNotFound` when no
    /// row exists for the id.
    async fn set_resolution(
        &self,
        account_id: AccountId,
        resolution: Resolution,
        resolved_by: &str,
    ) -> RepoResult<()>;

    /// Zero the request count of every row whose `request_time` is older
    /// than `older_than`. Resolutions are left untouched. Returns the number
    /// of rows reset.
    async fn reset_stale_counts(&self, older_than: chrono::Duration) -> RepoResult<u64>;
}
