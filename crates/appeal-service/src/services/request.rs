//! Request lifecycle controller
//!
//! Orchestrates intake (validate, verify identity, rate-limit, persist) and
//! resolution (capability check, persist outcome, tear down the support
//! channel). State machine per account id:
//! `NoRequest -> Pending -> Resolved(not_connected | left)`, with `Pending`
//! reachable again after a resolution.

use tracing::{info, instrument, warn};
use validator::Validate;

use appeal_core::{
    AccessSubject, AccountId, ActionButton, Actor, Capabilities, ChannelId, ModeratorAction,
    Notice, RequestCard, RequestSubmission, Resolution, UpsertOutcome,
};

use crate::dto::SubmitRequest;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::rate_limit::RateLimiter;

/// Outcome of a submission attempt that passed all gates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The request was persisted; `request_count` is the value after the write
    Accepted { request_count: i32 },
    /// The identity already holds the maximum of accepted submissions;
    /// nothing was written and the support channel has been torn down
    LimitReached { request_count: i32 },
}

/// Removes the in-flight marker for an account id when the accept-and-write
/// sequence finishes, on every exit path.
struct InFlightGuard<'a> {
    ctx: &'a ServiceContext,
    account_id: AccountId,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(ctx: &'a ServiceContext, account_id: AccountId) -> Option<Self> {
        use dashmap::mapref::entry::Entry;
        match ctx.in_flight().entry(account_id) {
            Entry::Occupied(_) => None,
            Entry::Vacant(vacant) => {
                vacant.insert(());
                Some(Self { ctx, account_id })
            }
        }
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.ctx.in_flight().remove(&self.account_id);
    }
}

/// Request lifecycle service
pub struct RequestService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RequestService<'a> {
    /// Create a new RequestService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Provision a private support channel for a user and post the
    /// submission instructions. If the user already has one, the existing
    /// channel is returned untouched.
    #[instrument(skip(self))]
    pub async fn open_support_channel(&self, user_id: i64) -> ServiceResult<ChannelId> {
        let surface = self.ctx.surface();

        if let Some(existing) = surface.find_private_channel(user_id).await? {
            info!(user_id, channel = %existing, "user already has an open support channel");
            return Ok(existing);
        }

        let channel = surface
            .create_private_channel(user_id, "Support channel for unban request")
            .await?;

        surface
            .set_access(channel, AccessSubject::User(user_id), true)
            .await?;
        surface
            .set_access(channel, AccessSubject::Everyone, false)
            .await?;
        surface
            .set_access(
                channel,
                AccessSubject::Role(self.ctx.moderator_role().to_string()),
                true,
            )
            .await?;

        surface
            .send_notice(channel, &instructions_notice(self.ctx.moderator_role()))
            .await?;

        info!(user_id, %channel, "support channel created");
        Ok(channel)
    }

    /// Handle an `unban` submission command. Each step is a hard gate; any
    /// failure aborts the transition and leaves stored state unchanged.
    #[instrument(skip(self, request), fields(account_id = %request.account_id))]
    pub async fn submit(
        &self,
        channel: ChannelId,
        request: &SubmitRequest,
    ) -> ServiceResult<SubmitOutcome> {
        // (a) all four fields present
        request
            .validate()
            .map_err(|e| ServiceError::validation(validation_message(&e)))?;

        // (b) account id format - rejected before any network or store call
        let account_id = AccountId::parse(&request.account_id)
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        // (c) identity gate
        let identity = self.ctx.verifier().verify(account_id).await?;
        if identity.linked_player_id.is_none() {
            // Advisory only: the moderator card still offers a manual
            // "not connected" outcome.
            warn!(%account_id, "submission accepted without a linked platform profile");
        }

        let submission = RequestSubmission::new(
            account_id,
            request.platform_nickname.clone(),
            request.community.clone(),
            request.reason.clone(),
        );

        // (d) rate limit + persist, serialized per id for the duration of
        // the accept-and-write sequence
        let limiter = RateLimiter::new(self.ctx);
        let outcome = {
            let _guard = InFlightGuard::acquire(self.ctx, account_id).ok_or_else(|| {
                ServiceError::conflict(format!(
                    "a submission for account {account_id} is already being processed"
                ))
            })?;
            limiter.try_accept(&submission).await?
        };

        match outcome {
            UpsertOutcome::Accepted { request_count } => {
                info!(%account_id, request_count, "unban request accepted");
                self.present_confirmation(channel, account_id).await;
                Ok(SubmitOutcome::Accepted { request_count })
            }
            UpsertOutcome::LimitReached => {
                let request_count = match limiter.current_count(account_id).await {
                    Ok(count) => count,
                    Err(e) => {
                        warn!(%account_id, error = %e, "failed to read count for limit notice");
                        self.ctx.limits().max_requests as i32
                    }
                };
                info!(%account_id, request_count, "unban request refused, limit reached");
                self.present_limit_notice(channel, request_count).await;
                Ok(SubmitOutcome::LimitReached { request_count })
            }
        }
    }

    /// Record a moderator resolution and tear down the support channel.
    /// Only callers holding `RESOLVE_REQUESTS` may transition a request out
    /// of `Pending`; everyone else is refused with no state change.
    #[instrument(skip(self, actor), fields(moderator = %actor.display_name, account_id = %action.account_id))]
    pub async fn resolve(
        &self,
        actor: &Actor,
        channel: ChannelId,
        action: ModeratorAction,
    ) -> ServiceResult<()> {
        if !actor.capabilities.has(Capabilities::RESOLVE_REQUESTS) {
            return Err(ServiceError::permission_denied("RESOLVE_REQUESTS"));
        }

        self.ctx
            .request_repo()
            .set_resolution(action.account_id, action.resolution, &actor.display_name)
            .await?;

        info!(resolution = %action.resolution, "unban request resolved");

        let reason = format!("Request resolved as '{}'", action.resolution);
        if let Err(e) = self.ctx.surface().delete_channel(channel, &reason).await {
            warn!(%channel, error = %e, "failed to delete support channel after resolution");
        }

        Ok(())
    }

    /// Send the acceptance card carrying the two moderator actions. The
    /// request is already persisted; a failed send is logged, not unwound.
    async fn present_confirmation(&self, channel: ChannelId, account_id: AccountId) {
        let card = confirmation_card(account_id);
        if let Err(e) = self.ctx.surface().send_request_card(channel, &card).await {
            warn!(%channel, error = %e, "failed to send confirmation card");
        }
    }

    /// Send the limit notice, wait the configured delay, then tear the
    /// channel down. The wait is fixed and not cancellable.
    async fn present_limit_notice(&self, channel: ChannelId, request_count: i32) {
        let notice = limit_notice(
            request_count,
            self.ctx.limits().max_requests,
            self.ctx.limits().sweep_window_days,
        );
        if let Err(e) = self.ctx.surface().send_notice(channel, &notice).await {
            warn!(%channel, error = %e, "failed to send limit notice");
        }

        tokio::time::sleep(self.ctx.limits().teardown_delay()).await;

        if let Err(e) = self
            .ctx
            .surface()
            .delete_channel(channel, "Unban request limit reached")
            .await
        {
            warn!(%channel, error = %e, "failed to delete support channel after limit notice");
        }
    }
}

/// Flatten validator errors into one user-facing line
fn validation_message(errors: &validator::ValidationErrors) -> String {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(ToString::to_string)
        .collect();
    fields.sort_unstable();
    format!("missing or empty fields: {}", fields.join(", "))
}

fn instructions_notice(moderator_role: &str) -> Notice {
    Notice::new(
        "Unban Request Instructions",
        format!(
            "To submit an unban request, use:\n\
             `!unban <account_id> <platform_nickname> <community> <reason>`\n\n\
             Example:\n`!unban 76561198012345678 muuki DPLB crash`\n\n\
             A moderator with the `{moderator_role}` role will assist you here.\n\n\
             Submitting an incorrect account id or nickname will result in a \
             temporary ban from using this service. You may post evidence \
             supporting your case in this channel."
        ),
    )
}

fn confirmation_card(account_id: AccountId) -> RequestCard {
    RequestCard {
        notice: Notice::new(
            "Unban Request Submitted",
            "Your unban request has been accepted.\n\n\
             Submitting an incorrect account id or nickname will result in a \
             temporary ban from the community."
                .to_string(),
        ),
        actions: vec![
            ActionButton::new(
                "Not Connected",
                ModeratorAction {
                    account_id,
                    resolution: Resolution::NotConnected,
                },
            ),
            ActionButton::new(
                "Left",
                ModeratorAction {
                    account_id,
                    resolution: Resolution::Left,
                },
            ),
        ],
    }
}

fn limit_notice(request_count: i32, max_requests: u32, window_days: i64) -> Notice {
    Notice::new(
        "Unban Request Limit Reached",
        format!(
            "You have already submitted {request_count} unban requests, reaching \
             the maximum of {max_requests}.\n\n\
             If you submit no requests for {window_days} days, your counter is \
             reset. This channel will be deleted automatically shortly."
        ),
    )
}
