use np_core::{Error, GeneratedPost, Result, UpstreamFailure};
use serde_json::{json, Value};

use crate::{failure_from, LinkedInClient};

pub const RESTLI_PROTOCOL_VERSION: &str = "2.0.0";

/// UGC post body for a plain-text share.
pub fn ugc_payload(author_urn: &str, text: &str) -> Value {
    json!({
        "author": author_urn,
        "lifecycleState": "PUBLISHED",
        "specificContent": {
            "com.linkedin.ugc.ShareContent": {
                "shareCommentary": { "text": text },
                "shareMediaCategory": "NONE"
            }
        },
        "visibility": {
            "com.linkedin.ugc.MemberNetworkVisibility": "PUBLIC"
        }
    })
}

impl LinkedInClient {
    pub async fn publish(&self, post: &GeneratedPost) -> Result<()> {
        let response = self
            .client
            .post(format!("{}/ugcPosts", self.api_url))
            .bearer_auth(post.token.secret())
            .header("X-Restli-Protocol-Version", RESTLI_PROTOCOL_VERSION)
            .json(&ugc_payload(&self.author_urn, &post.content))
            .send()
            .await
            .map_err(|e| Error::Publish(UpstreamFailure::new(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Publish(failure_from(status, response).await));
        }

        tracing::info!("📤 Published {} chars to LinkedIn", post.content.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ugc_payload_shape() {
        let payload = ugc_payload("urn:li:person:me", "Hello network");
        assert_eq!(payload["author"], "urn:li:person:me");
        assert_eq!(payload["lifecycleState"], "PUBLISHED");
        let share = &payload["specificContent"]["com.linkedin.ugc.ShareContent"];
        assert_eq!(share["shareCommentary"]["text"], "Hello network");
        assert_eq!(share["shareMediaCategory"], "NONE");
        assert_eq!(payload["visibility"]["com.linkedin.ugc.MemberNetworkVisibility"], "PUBLIC");
    }
}
