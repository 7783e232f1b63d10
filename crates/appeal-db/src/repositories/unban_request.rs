//! PostgreSQL implementation of RequestRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use appeal_core::{
    AccountId, RepoResult, RequestRepository, RequestSubmission, Resolution, UnbanRequest,
    UpsertOutcome,
};

use crate::models::UnbanRequestModel;

use super::error::{map_db_error, request_not_found};

/// PostgreSQL implementation of RequestRepository
#[derive(Clone)]
pub struct PgRequestRepository {
    pool: PgPool,
}

impl PgRequestRepository {
    /// Create a new PgRequestRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RequestRepository for PgRequestRepository {
    /// Accept-and-write in a single conditional statement. The count guard
    /// lives in the `DO UPDATE ... WHERE` clause, so two concurrent
    /// submissions for one id serialize on the row and cannot both pass a
    /// stale count check.
    #[instrument(skip(self, submission), fields(account_id = %submission.account_id))]
    async fn upsert(
        &self,
        submission: &RequestSubmission,
        max_requests: u32,
    ) -> RepoResult<UpsertOutcome> {
        if max_requests == 0 {
            return Ok(UpsertOutcome::LimitReached);
        }

        let count = sqlx::query_scalar::<_, i32>(
            r"
            INSERT INTO unban_requests
                (account_id, platform_nickname, community, reason, request_count, request_time)
            VALUES ($1, $2, $3, $4, 1, NOW())
            ON CONFLICT (account_id) DO UPDATE
            SET platform_nickname = EXCLUDED.platform_nickname,
                community = EXCLUDED.community,
                reason = EXCLUDED.reason,
                request_count = unban_requests.request_count + 1,
                request_time = NOW()
            WHERE unban_requests.request_count < $5
            RETURNING request_count
            ",
        )
        .bind(submission.account_id.into_inner())
        .bind(&submission.platform_nickname)
        .bind(&submission.community)
        .bind(&submission.reason)
        .bind(i64::from(max_requests))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(match count {
            Some(request_count) => UpsertOutcome::Accepted { request_count },
            None => UpsertOutcome::LimitReached,
        })
    }

    #[instrument(skip(self))]
    async fn find(&self, account_id: AccountId) -> RepoResult<Option<UnbanRequest>> {
        let model = sqlx::query_as::<_, UnbanRequestModel>(
            r"
            SELECT account_id, platform_nickname, community, reason,
                   request_count, request_time, resolution, resolved_by
            FROM unban_requests
            WHERE account_id = $1
            ",
        )
        .bind(account_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        model.map(UnbanRequestModel::into_entity).transpose()
    }

    #[instrument(skip(self))]
    async fn request_count(&self, account_id: AccountId) -> RepoResult<i32> {
        let count = sqlx::query_scalar::<_, i32>(
            r"
            SELECT request_count FROM unban_requests WHERE account_id = $1
            ",
        )
        .bind(account_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count.unwrap_or(0))
    }

    #[instrument(skip(self))]
    async fn set_resolution(
        &self,
        account_id: AccountId,
        resolution: Resolution,
        resolved_by: &str,
    ) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE unban_requests
            SET resolution = $2, resolved_by = $3
            WHERE account_id = $1
            ",
        )
        .bind(account_id.into_inner())
        .bind(resolution.as_str())
        .bind(resolved_by)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(request_not_found(account_id));
        }

        Ok(())
    }

    /// Bulk, unconditional reset: every row older than the cutoff gets its
    /// counter zeroed. Resolutions are never touched here.
    #[instrument(skip(self))]
    async fn reset_stale_counts(&self, older_than: chrono::Duration) -> RepoResult<u64> {
        let cutoff = chrono::Utc::now() - older_than;

        let result = sqlx::query(
            r"
            UPDATE unban_requests
            SET request_count = 0
            WHERE request_time < $1
            ",
        )
        .bind(cutoff)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgRequestRepository>();
    }
}
