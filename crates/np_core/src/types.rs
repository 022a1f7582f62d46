use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Error, Result};

/// One feed item, as returned by `/news`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub link: String,
    #[serde(rename = "pubDate")]
    pub pub_date: String,
    pub description: String,
}

/// The part of an article the drafting prompt needs. Callers usually post
/// back the `Article`s they got from `/news`; extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptArticle {
    pub title: String,
    pub description: String,
}

impl From<Article> for PromptArticle {
    fn from(article: Article) -> Self {
        Self {
            title: article.title,
            description: article.description,
        }
    }
}

/// Text drafted by the language model, already trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft(pub String);

impl PostDraft {
    pub fn new(text: &str) -> Self {
        Self(text.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Bearer token issued by LinkedIn. Never logged.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct OAuthToken(String);

impl OAuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for OAuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OAuthToken(<redacted>)")
    }
}

/// A post the caller wants published.
#[derive(Debug, Clone)]
pub struct GeneratedPost {
    pub token: OAuthToken,
    pub content: String,
}

impl GeneratedPost {
    /// Both fields must be present and non-empty.
    pub fn new(token: Option<String>, content: Option<String>) -> Result<Self> {
        match (token, content) {
            (Some(token), Some(content)) if !token.is_empty() && !content.is_empty() => Ok(Self {
                token: OAuthToken::new(token),
                content,
            }),
            _ => Err(Error::InvalidRequest("Token and content required".to_string())),
        }
    }
}
