//! Placeholder interaction surface for headless runs
//!
//! The binary currently runs the sweep worker only; interactive traffic
//! arrives once a chat-platform adapter implementing `InteractionSurface`
//! is attached. Until then every surface call reports the platform as
//! unavailable, which the services log and translate into a generic
//! user-facing failure.

use async_trait::async_trait;

use appeal_core::{
    AccessSubject, ChannelId, InteractionSurface, Notice, RequestCard, SurfaceError,
    SurfaceResult,
};

pub struct DetachedSurface;

impl DetachedSurface {
    fn unavailable<T>() -> SurfaceResult<T> {
        Err(SurfaceError::Unavailable(
            "no chat platform adapter attached".to_string(),
        ))
    }
}

#[async_trait]
impl InteractionSurface for DetachedSurface {
    async fn create_private_channel(
        &self,
        _user_id: i64,
        _reason: &str,
    ) -> SurfaceResult<ChannelId> {
        Self::unavailable()
    }

    async fn find_private_channel(&self, _user_id: i64) -> SurfaceResult<Option<ChannelId>> {
        Self::unavailable()
    }

    async fn set_access(
        &self,
        _channel: ChannelId,
        _subject: AccessSubject,
        _allow: bool,
    ) -> SurfaceResult<()> {
        Self::unavailable()
    }

    async fn send_notice(&self, _channel: ChannelId, _notice: &Notice) -> SurfaceResult<()> {
        Self::unavailable()
    }

    async fn send_request_card(
        &self,
        _channel: ChannelId,
        _card: &RequestCard,
    ) -> SurfaceResult<()> {
        Self::unavailable()
    }

    async fn delete_channel(&self, _channel: ChannelId, _reason: &str) -> SurfaceResult<()> {
        Self::unavailable()
    }
}
