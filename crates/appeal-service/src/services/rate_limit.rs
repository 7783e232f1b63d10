//! Rate limiter - policy layer over the request store
//!
//! Caps accepted submissions per identity and exposes the stale-counter
//! sweep. The accept path delegates to the store's atomic guarded upsert,
//! so the cap check and the write are one operation.

use tracing::{info, instrument};

use appeal_core::{AccountId, RequestSubmission, UpsertOutcome};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Rate limiter over the request store
pub struct RateLimiter<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RateLimiter<'a> {
    /// Create a new RateLimiter
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Current accepted-submission count for an id (0 if unknown)
    #[instrument(skip(self))]
    pub async fn current_count(&self, account_id: AccountId) -> ServiceResult<i32> {
        let count = self.ctx.request_repo().request_count(account_id).await?;
        Ok(count)
    }

    /// Try to accept a submission. Accepting and writing happen in the same
    /// atomic store operation; on `LimitReached` nothing is mutated.
    #[instrument(skip(self, submission), fields(account_id = %submission.account_id))]
    pub async fn try_accept(
        &self,
        submission: &RequestSubmission,
    ) -> ServiceResult<UpsertOutcome> {
        let max = self.ctx.limits().max_requests;
        let outcome = self.ctx.request_repo().upsert(submission, max).await?;
        Ok(outcome)
    }

    /// Zero the counter of every row idle longer than `older_than`.
    /// Resolutions are never altered.
    #[instrument(skip(self))]
    pub async fn sweep(&self, older_than: chrono::Duration) -> ServiceResult<u64> {
        let reset = self
            .ctx
            .request_repo()
            .reset_stale_counts(older_than)
            .await?;

        info!(
            rows = reset,
            window_days = older_than.num_days(),
            "request counters reset for stale rows"
        );
        Ok(reset)
    }
}
