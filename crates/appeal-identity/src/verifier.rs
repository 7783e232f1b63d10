//! Identity-verification gate over the two provider clients

use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use appeal_common::ProviderConfig;
use appeal_core::{AccountId, IdentityError, IdentityVerifier, VerifiedIdentity};

use crate::faceit::FaceitClient;
use crate::steam::SteamClient;

/// `IdentityVerifier` implementation backed by the HTTP provider clients.
///
/// The primary (profile) lookup gates acceptance. The secondary
/// (linked-profile) cross-check is informational: a miss or failure is
/// logged and recorded as `linked_player_id: None`, never rejected.
#[derive(Debug, Clone)]
pub struct HttpIdentityVerifier {
    steam: SteamClient,
    faceit: FaceitClient,
}

impl HttpIdentityVerifier {
    /// Create a verifier from existing provider clients
    pub fn new(steam: SteamClient, faceit: FaceitClient) -> Self {
        Self { steam, faceit }
    }

    /// Build the verifier from configuration, constructing a shared HTTP
    /// client with the configured per-request timeout.
    pub fn from_config(config: &ProviderConfig) -> Result<Self, IdentityError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| IdentityError::Provider(e.to_string()))?;

        Ok(Self {
            steam: SteamClient::new(http.clone(), &config.steam_api_key),
            faceit: FaceitClient::new(http, &config.faceit_api_key),
        })
    }
}

#[async_trait]
impl IdentityVerifier for HttpIdentityVerifier {
    #[instrument(skip(self))]
    async fn verify(&self, account_id: AccountId) -> Result<VerifiedIdentity, IdentityError> {
        let profile = self
            .steam
            .player_summary(account_id)
            .await?
            .ok_or(IdentityError::NotFound(account_id))?;

        let linked_player_id = match self.faceit.player_by_game_id(account_id).await {
            Ok(Some(linked)) => {
                debug!(%account_id, player_id = %linked.player_id, "linked profile found");
                Some(linked.player_id)
            }
            Ok(None) => {
                warn!(%account_id, "no linked profile on secondary provider");
                None
            }
            Err(e) => {
                warn!(%account_id, error = %e, "secondary provider lookup failed");
                None
            }
        };

        Ok(VerifiedIdentity {
            account_id,
            profile_name: profile.persona_name,
            linked_player_id,
        })
    }
}
