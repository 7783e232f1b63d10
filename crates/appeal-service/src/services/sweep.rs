//! Background sweep scheduler
//!
//! Runs the stale-counter sweep on a fixed cadence starting from process
//! start. There is no persisted last-swept marker: a process that was down
//! past a tick does not catch up, it simply resumes the cadence.

use tracing::{error, info, instrument};

use super::context::ServiceContext;
use super::rate_limit::RateLimiter;

/// Periodic sweep runner
pub struct SweepScheduler {
    ctx: ServiceContext,
}

impl SweepScheduler {
    /// Create a new SweepScheduler
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    /// Run the sweep loop forever. The first tick fires immediately, then
    /// on the configured interval. Store failures are logged and the loop
    /// continues; nothing here reaches a user.
    #[instrument(skip(self))]
    pub async fn run(self) {
        let cadence = self.ctx.limits().sweep_interval();
        let window = self.ctx.limits().sweep_window();

        info!(
            interval_hours = self.ctx.limits().sweep_interval_hours,
            window_days = self.ctx.limits().sweep_window_days,
            "sweep scheduler started"
        );

        let mut interval = tokio::time::interval(cadence);
        loop {
            interval.tick().await;

            match RateLimiter::new(&self.ctx).sweep(window).await {
                Ok(rows) => info!(rows, "sweep completed"),
                Err(e) => error!(error = %e, "sweep failed"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{
        test_context, MemoryRequestRepository, RecordingSurface, StubVerifier, VerifierMode,
    };
    use appeal_core::{AccountId, RequestRepository, RequestSubmission, Resolution};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_sweep_resets_only_stale_counters() {
        let repo = Arc::new(MemoryRequestRepository::new());
        let verifier = Arc::new(StubVerifier::new(VerifierMode::Found));
        let surface = Arc::new(RecordingSurface::new());
        let ctx = test_context(repo.clone(), verifier, surface);

        let stale = AccountId::new(76_561_198_000_000_001);
        let fresh = AccountId::new(76_561_198_000_000_002);
        repo.upsert(&RequestSubmission::new(stale, "a", "DPLB", "x"), 3)
            .await
            .unwrap();
        repo.upsert(&RequestSubmission::new(fresh, "b", "DPLB", "y"), 3)
            .await
            .unwrap();
        repo.set_resolution(stale, Resolution::Left, "modname")
            .await
            .unwrap();
        repo.backdate(stale, chrono::Duration::days(8));

        let reset = RateLimiter::new(&ctx)
            .sweep(chrono::Duration::days(7))
            .await
            .unwrap();
        assert_eq!(reset, 1);

        let stale_row = repo.row(stale).unwrap();
        assert_eq!(stale_row.request_count, 0);
        // The sweep never alters resolutions
        assert_eq!(stale_row.resolution, Some(Resolution::Left));

        assert_eq!(repo.row(fresh).unwrap().request_count, 1);
    }
}
