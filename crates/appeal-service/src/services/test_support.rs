//! In-memory fakes for service-layer tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use appeal_common::LimitConfig;
use appeal_core::{
    AccessSubject, AccountId, ChannelId, DomainError, IdentityError, IdentityVerifier,
    InteractionSurface, ModeratorAction, Notice, RepoResult, RequestCard, RequestRepository,
    RequestSubmission, Resolution, SurfaceResult, UnbanRequest, UpsertOutcome, VerifiedIdentity,
};

use super::context::ServiceContext;

/// Build a context with a zero teardown delay and the default cap of 3
pub fn test_context(
    repo: Arc<MemoryRequestRepository>,
    verifier: Arc<StubVerifier>,
    surface: Arc<RecordingSurface>,
) -> ServiceContext {
    let limits = LimitConfig {
        max_requests: 3,
        sweep_window_days: 7,
        sweep_interval_hours: 24,
        teardown_delay_secs: 0,
    };
    ServiceContext::new(repo, verifier, surface, limits, "admin")
}

// ============================================================================
// Repository fake
// ============================================================================

/// HashMap-backed `RequestRepository` mirroring the guarded-upsert semantics
pub struct MemoryRequestRepository {
    rows: Mutex<HashMap<AccountId, UnbanRequest>>,
    upsert_calls: AtomicUsize,
    fail_next: AtomicBool,
}

impl MemoryRequestRepository {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(HashMap::new()),
            upsert_calls: AtomicUsize::new(0),
            fail_next: AtomicBool::new(false),
        }
    }

    pub fn row(&self, id: AccountId) -> Option<UnbanRequest> {
        self.rows.lock().unwrap().get(&id).cloned()
    }

    pub fn upsert_calls(&self) -> usize {
        self.upsert_calls.load(Ordering::SeqCst)
    }

    /// Make the next store operation fail with a database error
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    /// Push a row's request_time into the past
    pub fn backdate(&self, id: AccountId, by: chrono::Duration) {
        if let Some(row) = self.rows.lock().unwrap().get_mut(&id) {
            row.request_time -= by;
        }
    }

    fn check_fail(&self) -> RepoResult<()> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("injected failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl RequestRepository for MemoryRequestRepository {
    async fn upsert(
        &self,
        submission: &RequestSubmission,
        max_requests: u32,
    ) -> RepoResult<UpsertOutcome> {
        self.upsert_calls.fetch_add(1, Ordering::SeqCst);
        self.check_fail()?;

        if max_requests == 0 {
            return Ok(UpsertOutcome::LimitReached);
        }

        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(&submission.account_id) {
            Some(row) => {
                if row.request_count >= max_requests as i32 {
                    return Ok(UpsertOutcome::LimitReached);
                }
                row.platform_nickname = submission.platform_nickname.clone();
                row.community = submission.community.clone();
                row.reason = submission.reason.clone();
                row.request_count += 1;
                row.request_time = Utc::now();
                Ok(UpsertOutcome::Accepted {
                    request_count: row.request_count,
                })
            }
            None => {
                rows.insert(
                    submission.account_id,
                    UnbanRequest {
                        account_id: submission.account_id,
                        platform_nickname: submission.platform_nickname.clone(),
                        community: submission.community.clone(),
                        reason: submission.reason.clone(),
                        request_count: 1,
                        request_time: Utc::now(),
                        resolution: None,
                        resolved_by: None,
                    },
                );
                Ok(UpsertOutcome::Accepted { request_count: 1 })
            }
        }
    }

    async fn find(&self, account_id: AccountId) -> RepoResult<Option<UnbanRequest>> {
        self.check_fail()?;
        Ok(self.rows.lock().unwrap().get(&account_id).cloned())
    }

    async fn request_count(&self, account_id: AccountId) -> RepoResult<i32> {
        self.check_fail()?;
        Ok(self
            .rows
            .lock()
            .unwrap()
            .get(&account_id)
            .map_or(0, |row| row.request_count))
    }

    async fn set_resolution(
        &self,
        account_id: AccountId,
        resolution: Resolution,
        resolved_by: &str,
    ) -> RepoResult<()> {
        self.check_fail()?;
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .get_mut(&account_id)
            .ok_or(DomainError::RequestNotFound(account_id))?;
        row.resolution = Some(resolution);
        row.resolved_by = Some(resolved_by.to_string());
        Ok(())
    }

    async fn reset_stale_counts(&self, older_than: chrono::Duration) -> RepoResult<u64> {
        self.check_fail()?;
        let cutoff = Utc::now() - older_than;
        let mut reset = 0;
        for row in self.rows.lock().unwrap().values_mut() {
            if row.request_time < cutoff {
                row.request_count = 0;
                reset += 1;
            }
        }
        Ok(reset)
    }
}

// ============================================================================
// Verifier stub
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifierMode {
    /// Profile found with a linked secondary profile
    Found,
    /// Profile found, secondary cross-check missed
    FoundWithoutLink,
    /// No profile on the primary provider
    NotFound,
    /// Transport failure
    Fail,
}

pub struct StubVerifier {
    mode: Mutex<VerifierMode>,
    calls: AtomicUsize,
}

impl StubVerifier {
    pub fn new(mode: VerifierMode) -> Self {
        Self {
            mode: Mutex::new(mode),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn set_mode(&self, mode: VerifierMode) {
        *self.mode.lock().unwrap() = mode;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityVerifier for StubVerifier {
    async fn verify(&self, account_id: AccountId) -> Result<VerifiedIdentity, IdentityError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match *self.mode.lock().unwrap() {
            VerifierMode::Found => Ok(VerifiedIdentity {
                account_id,
                profile_name: "muuki".to_string(),
                linked_player_id: Some("abc-123".to_string()),
            }),
            VerifierMode::FoundWithoutLink => Ok(VerifiedIdentity {
                account_id,
                profile_name: "muuki".to_string(),
                linked_player_id: None,
            }),
            VerifierMode::NotFound => Err(IdentityError::NotFound(account_id)),
            VerifierMode::Fail => Err(IdentityError::Provider("injected failure".to_string())),
        }
    }
}

// ============================================================================
// Surface fake
// ============================================================================

#[derive(Debug, Clone)]
pub enum SurfaceEvent {
    ChannelCreated {
        user_id: i64,
        channel: ChannelId,
    },
    AccessSet {
        channel: ChannelId,
        subject: AccessSubject,
        allow: bool,
    },
    Notice {
        channel: ChannelId,
        title: String,
    },
    Card {
        channel: ChannelId,
        title: String,
        actions: Vec<ModeratorAction>,
    },
    Deleted {
        channel: ChannelId,
        reason: String,
    },
}

/// Records every surface call for assertions
pub struct RecordingSurface {
    next_channel: AtomicI64,
    channels: Mutex<HashMap<i64, ChannelId>>,
    events: Mutex<Vec<SurfaceEvent>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            next_channel: AtomicI64::new(100),
            channels: Mutex::new(HashMap::new()),
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.events.lock().unwrap().clone()
    }

    fn record(&self, event: SurfaceEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl InteractionSurface for RecordingSurface {
    async fn create_private_channel(
        &self,
        user_id: i64,
        _reason: &str,
    ) -> SurfaceResult<ChannelId> {
        let channel = ChannelId::new(self.next_channel.fetch_add(1, Ordering::SeqCst));
        self.channels.lock().unwrap().insert(user_id, channel);
        self.record(SurfaceEvent::ChannelCreated { user_id, channel });
        Ok(channel)
    }

    async fn find_private_channel(&self, user_id: i64) -> SurfaceResult<Option<ChannelId>> {
        Ok(self.channels.lock().unwrap().get(&user_id).copied())
    }

    async fn set_access(
        &self,
        channel: ChannelId,
        subject: AccessSubject,
        allow: bool,
    ) -> SurfaceResult<()> {
        self.record(SurfaceEvent::AccessSet {
            channel,
            subject,
            allow,
        });
        Ok(())
    }

    async fn send_notice(&self, channel: ChannelId, notice: &Notice) -> SurfaceResult<()> {
        self.record(SurfaceEvent::Notice {
            channel,
            title: notice.title.clone(),
        });
        Ok(())
    }

    async fn send_request_card(
        &self,
        channel: ChannelId,
        card: &RequestCard,
    ) -> SurfaceResult<()> {
        self.record(SurfaceEvent::Card {
            channel,
            title: card.notice.title.clone(),
            actions: card.actions.iter().map(|a| a.action).collect(),
        });
        Ok(())
    }

    async fn delete_channel(&self, channel: ChannelId, reason: &str) -> SurfaceResult<()> {
        self.channels
            .lock()
            .unwrap()
            .retain(|_, c| *c != channel);
        self.record(SurfaceEvent::Deleted {
            channel,
            reason: reason.to_string(),
        });
        Ok(())
    }
}
