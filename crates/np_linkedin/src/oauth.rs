use np_core::{Error, Result};
use serde::Deserialize;
use url::Url;

use crate::state::StateSigner;

pub const SCOPE: &str = "w_member_social";
pub const CODE_MISSING: &str = "Authorization code not provided";
pub const AUTH_FAILED: &str = "LinkedIn authentication failed";
pub const STATE_INVALID: &str = "Invalid OAuth state";

/// Query parameters LinkedIn appends when redirecting back to us.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
    pub state: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackStep {
    /// Send the browser back with `?error=<message>`
    Reject(String),
    /// Trade the code for a token
    Exchange { code: String },
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl CallbackParams {
    /// Decides what the callback does. An upstream `error` always wins,
    /// then a missing code, then a bad state.
    pub fn step(&self, signer: &StateSigner) -> CallbackStep {
        if let Some(error) = present(&self.error) {
            let message = present(&self.error_description).unwrap_or(error);
            return CallbackStep::Reject(message.to_string());
        }

        let Some(code) = present(&self.code) else {
            return CallbackStep::Reject(CODE_MISSING.to_string());
        };

        match present(&self.state) {
            Some(state) if signer.verify(state) => CallbackStep::Exchange {
                code: code.to_string(),
            },
            _ => CallbackStep::Reject(STATE_INVALID.to_string()),
        }
    }
}

/// `https://www.linkedin.com/oauth/v2/authorization?...` for the configured
/// client.
pub fn authorization_url(oauth_url: &str, client_id: &str, redirect_uri: &str, state: &str) -> Result<Url> {
    let mut url = Url::parse(&format!("{}/authorization", oauth_url.trim_end_matches('/')))
        .map_err(|e| Error::Configuration(format!("Invalid LinkedIn OAuth URL: {}", e)))?;
    url.query_pairs_mut()
        .append_pair("response_type", "code")
        .append_pair("client_id", client_id)
        .append_pair("redirect_uri", redirect_uri)
        .append_pair("scope", SCOPE)
        .append_pair("state", state);
    Ok(url)
}

/// The frontend URL with one extra query parameter.
pub fn frontend_redirect(frontend_url: &str, key: &str, value: &str) -> Result<Url> {
    let mut url = Url::parse(frontend_url)
        .map_err(|e| Error::Configuration(format!("Invalid frontend URL {}: {}", frontend_url, e)))?;
    url.query_pairs_mut().append_pair(key, value);
    Ok(url)
}
