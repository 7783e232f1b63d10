//! Secondary identity provider client (FaceIT linked-profile lookup)
//!
//! The lookup resolves the same numeric account id, filtered by a fixed game
//! tag, to a linked platform profile. Its result is advisory: the verifier
//! records it but never blocks acceptance on it.

use serde::Deserialize;
use tracing::{instrument, warn};

use appeal_core::{AccountId, IdentityError};

const DEFAULT_BASE_URL: &str = "https://open.faceit.com";

/// Game tag the account id is resolved under
const GAME_TAG: &str = "csgo";

/// Linked profile returned by the secondary provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceitProfile {
    pub player_id: String,
    pub nickname: String,
}

/// Raw player envelope. A matched lookup carries `player_id`; anything
/// without one counts as no linked profile.
#[derive(Debug, Deserialize)]
struct PlayerEnvelope {
    #[serde(default)]
    player_id: Option<String>,
    #[serde(default)]
    nickname: Option<String>,
}

impl PlayerEnvelope {
    fn into_profile(self) -> Option<FaceitProfile> {
        let player_id = self.player_id?;
        Some(FaceitProfile {
            player_id,
            nickname: self.nickname.unwrap_or_default(),
        })
    }
}

/// Client for the secondary identity provider
#[derive(Clone)]
pub struct FaceitClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl FaceitClient {
    /// Create a new client using the given HTTP client and bearer credential
    pub fn new(http: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self {
            http,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the base URL (for tests against a local server)
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Look up the linked profile for an account id. `Ok(None)` means the
    /// provider answered without a match; transport and decoding failures
    /// surface as `IdentityError::Provider`.
    #[instrument(skip(self))]
    pub async fn player_by_game_id(
        &self,
        account_id: AccountId,
    ) -> Result<Option<FaceitProfile>, IdentityError> {
        let url = format!("{}/data/v4/players", self.base_url);
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.api_key)
            .query(&[
                ("game", GAME_TAG),
                ("game_player_id", &account_id.to_string()),
            ])
            .send()
            .await
            .map_err(|e| IdentityError::Provider(e.to_string()))?;

        if !response.status().is_success() {
            warn!(
                %account_id,
                status = %response.status(),
                "secondary identity provider returned non-success status"
            );
            return Ok(None);
        }

        let envelope: PlayerEnvelope = response
            .json()
            .await
            .map_err(|e| IdentityError::Provider(e.to_string()))?;

        Ok(envelope.into_profile())
    }
}

impl std::fmt::Debug for FaceitClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FaceitClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_matched_player() {
        let json = r#"{"player_id": "abc-123", "nickname": "muuki", "games": {}}"#;
        let envelope: PlayerEnvelope = serde_json::from_str(json).unwrap();
        let profile = envelope.into_profile().unwrap();
        assert_eq!(profile.player_id, "abc-123");
        assert_eq!(profile.nickname, "muuki");
    }

    #[test]
    fn test_decode_without_player_id_is_no_match() {
        let json = r#"{"errors": [{"message": "not found"}]}"#;
        let envelope: PlayerEnvelope = serde_json::from_str(json).unwrap();
        assert!(envelope.into_profile().is_none());
    }
}
