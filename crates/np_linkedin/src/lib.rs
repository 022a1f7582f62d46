use np_core::{Config, Error, OAuthToken, Result, UpstreamFailure};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use url::Url;

pub mod oauth;
pub mod publish;
pub mod state;

pub use oauth::{CallbackParams, CallbackStep};
pub use state::StateSigner;

pub const CONFIG_MISSING: &str = "LinkedIn configuration missing";

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Talks to LinkedIn's OAuth and UGC endpoints on behalf of the caller.
#[derive(Clone)]
pub struct LinkedInClient {
    client: Client,
    client_id: Option<String>,
    client_secret: Option<String>,
    redirect_uri: Option<String>,
    oauth_url: String,
    api_url: String,
    author_urn: String,
}

impl fmt::Debug for LinkedInClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedInClient")
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_deref().map(|_| "<redacted>"))
            .field("redirect_uri", &self.redirect_uri)
            .field("oauth_url", &self.oauth_url)
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl LinkedInClient {
    pub fn from_config(client: Client, config: &Config) -> Self {
        Self {
            client,
            client_id: config.linkedin_client_id.clone(),
            client_secret: config.linkedin_client_secret.clone(),
            redirect_uri: config.linkedin_redirect_uri.clone(),
            oauth_url: config.linkedin_oauth_url.trim_end_matches('/').to_string(),
            api_url: config.linkedin_api_url.trim_end_matches('/').to_string(),
            author_urn: config.linkedin_author_urn.clone(),
        }
    }

    fn required(value: &Option<String>) -> Result<&str> {
        value
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::Configuration(CONFIG_MISSING.to_string()))
    }

    /// Authorization URL to send the browser to, carrying a fresh signed state.
    pub fn authorize_url(&self, signer: &StateSigner) -> Result<Url> {
        let client_id = Self::required(&self.client_id)?;
        let redirect_uri = Self::required(&self.redirect_uri)?;
        oauth::authorization_url(&self.oauth_url, client_id, redirect_uri, &signer.issue()?)
    }

    /// Trades an authorization code for an access token.
    pub async fn exchange_code(&self, code: &str) -> Result<OAuthToken> {
        let client_id = Self::required(&self.client_id)?;
        let client_secret = Self::required(&self.client_secret)?;
        let redirect_uri = Self::required(&self.redirect_uri)?;

        let form = [
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", redirect_uri),
            ("client_id", client_id),
            ("client_secret", client_secret),
        ];

        let response = self
            .client
            .post(format!("{}/accessToken", self.oauth_url))
            .form(&form)
            .send()
            .await
            .map_err(|e| Error::Authentication(UpstreamFailure::new(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Authentication(failure_from(status, response).await));
        }

        let token = response
            .json::<TokenResponse>()
            .await
            .map_err(|e| Error::Authentication(UpstreamFailure::new(e.to_string())))?;
        Ok(OAuthToken::new(token.access_token))
    }
}

/// Reads an unsuccessful response into an [`UpstreamFailure`], keeping the
/// JSON body when there is one.
pub(crate) async fn failure_from(status: reqwest::StatusCode, response: reqwest::Response) -> UpstreamFailure {
    let body = response.text().await.unwrap_or_default();
    let payload = serde_json::from_str::<Value>(&body).unwrap_or(Value::String(body));
    UpstreamFailure::with_payload(format!("LinkedIn returned {}", status), payload)
}
