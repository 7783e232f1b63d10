//! Primary identity provider client (Steam player summaries)

use serde::Deserialize;
use tracing::{instrument, warn};

use appeal_core::{AccountId, IdentityError};

const DEFAULT_BASE_URL: &str = "https://api.steampowered.com";

/// Profile object returned by the primary provider
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SteamProfile {
    #[serde(rename = "steamid")]
    pub steam_id: String,
    #[serde(rename = "personaname")]
    pub persona_name: String,
    #[serde(rename = "profileurl", default)]
    pub profile_url: Option<String>,
}

/// Success envelope of the player-summaries endpoint. Not-found ids come
/// back as a success response with an empty `players` array.
#[derive(Debug, Deserialize)]
struct SummariesEnvelope {
    response: SummariesResponse,
}

#[derive(Debug, Deserialize)]
struct SummariesResponse {
    #[serde(default)]
    players: Vec<SteamProfile>,
}

/// Client for the primary identity provider
#[derive(Clone)]
pub struct SteamClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl SteamClient {
    /// Create a new client using the given HTTP client and API key
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

    /// Fetch the profile for an account id. `Ok(None)` means the provider
    /// answered but has no profile for the id; transport and decoding
    /// failures surface as `IdentityError::Provider`.
    #[instrument(skip(self))]
    pub async fn player_summary(
        &self,
        account_id: AccountId,
    ) -> Result<Option<SteamProfile>, IdentityError> {
        let url = format!("{}/ISteamUser/GetPlayerSummaries/v2/", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("steamids", &account_id.to_string()),
            ])
            .send()
            .await
            .map_err(|e| IdentityError::Provider(e.to_string()))?;

        if !response.status().is_success() {
            warn!(
                %account_id,
                status = %response.status(),
                "primary identity provider returned non-success status"
            );
            return Ok(None);
        }

        let envelope: SummariesEnvelope = response
            .json()
            .await
            .map_err(|e| IdentityError::Provider(e.to_string()))?;

        Ok(envelope.response.players.into_iter().next())
    }
}

impl std::fmt::Debug for SteamClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SteamClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}
