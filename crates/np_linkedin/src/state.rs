//! Stateless OAuth `state` values.
//!
//! A state is `<unix_ts>.<nonce>.<hex hmac>`; the server keeps nothing and
//! checks the signature and age when LinkedIn sends the browser back.

use chrono::Utc;
use hmac::{Hmac, Mac};
use np_core::{Config, Error, Result};
use sha2::Sha256;
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

/// How long an issued state stays valid, in seconds.
pub const STATE_MAX_AGE_SECS: i64 = 600;

#[derive(Clone)]
pub struct StateSigner {
    key: Vec<u8>,
}

impl StateSigner {
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            key: secret.as_ref().to_vec(),
        }
    }

    /// Uses the configured secret, or a per-process random one.
    pub fn from_config(config: &Config) -> Self {
        match &config.oauth_state_secret {
            Some(secret) => Self::new(secret),
            None => {
                tracing::warn!("🔑 OAUTH_STATE_SECRET not set, OAuth state only valid for this process");
                Self::new(Uuid::new_v4().to_string())
            }
        }
    }

    fn mac(&self, payload: &str) -> Result<HmacSha256> {
        let mut mac = HmacSha256::new_from_slice(&self.key)
            .map_err(|e| Error::Configuration(format!("Invalid state secret: {}", e)))?;
        mac.update(payload.as_bytes());
        Ok(mac)
    }

    pub fn issue(&self) -> Result<String> {
        self.issue_at(Utc::now().timestamp())
    }

    pub fn issue_at(&self, timestamp: i64) -> Result<String> {
        let payload = format!("{}.{}", timestamp, Uuid::new_v4().simple());
        let signature = hex::encode(self.mac(&payload)?.finalize().into_bytes());
        Ok(format!("{}.{}", payload, signature))
    }

    pub fn verify(&self, state: &str) -> bool {
        self.verify_at(state, Utc::now().timestamp())
    }

    pub fn verify_at(&self, state: &str, now: i64) -> bool {
        let Some((payload, signature)) = state.rsplit_once('.') else {
            return false;
        };
        let Ok(signature) = hex::decode(signature) else {
            return false;
        };
        let Ok(mac) = self.mac(payload) else {
            return false;
        };
        if mac.verify_slice(&signature).is_err() {
            return false;
        }

        let issued_at = payload
            .split_once('.')
            .and_then(|(ts, _)| ts.parse::<i64>().ok());
        match issued_at {
            Some(ts) => ts <= now && now - ts <= STATE_MAX_AGE_SECS,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issued_state_verifies() {
        let signer = StateSigner::new("secret");
        let state = signer.issue_at(1_000).unwrap();
        assert!(signer.verify_at(&state, 1_000));
        assert!(signer.verify_at(&state, 1_000 + STATE_MAX_AGE_SECS));
    }

    #[test]
    fn test_expired_or_future_state_rejected() {
        let signer = StateSigner::new("secret");
        let state = signer.issue_at(1_000).unwrap();
        assert!(!signer.verify_at(&state, 1_001 + STATE_MAX_AGE_SECS));
        assert!(!signer.verify_at(&state, 999));
    }

    #[test]
    fn test_other_key_or_tampering_rejected() {
        let signer = StateSigner::new("secret");
        let state = signer.issue_at(1_000).unwrap();
        assert!(!StateSigner::new("other").verify_at(&state, 1_000));

        let tampered = state.replacen("1000", "1001", 1);
        assert!(!signer.verify_at(&tampered, 1_001));
        assert!(!signer.verify_at("garbage", 1_000));
        assert!(!signer.verify_at("", 1_000));
    }

    #[test]
    fn test_states_are_unique() {
        let signer = StateSigner::new("secret");
        assert_ne!(signer.issue_at(1).unwrap(), signer.issue_at(1).unwrap());
    }
}
