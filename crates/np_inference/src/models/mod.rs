use async_trait::async_trait;
use np_core::{Config, Error, PostDraft, PromptArticle, Result};
use reqwest::Client;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

pub mod dummy;
pub mod openrouter;

pub use dummy::DummyModel;
pub use openrouter::OpenRouterModel;

#[async_trait]
pub trait InferenceModel: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Drafts a LinkedIn post from a non-empty list of articles
    async fn draft_post(&self, articles: &[PromptArticle]) -> Result<PostDraft>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    OpenRouter,
    Dummy,
}

impl FromStr for ModelKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openrouter" => Ok(ModelKind::OpenRouter),
            "dummy" => Ok(ModelKind::Dummy),
            other => Err(format!("Unknown model: {} (available: openrouter, dummy)", other)),
        }
    }
}

pub fn create_model(kind: ModelKind, client: Client, config: &Config) -> Arc<dyn InferenceModel> {
    match kind {
        ModelKind::OpenRouter => Arc::new(OpenRouterModel::from_config(client, config)),
        ModelKind::Dummy => Arc::new(DummyModel),
    }
}

pub(crate) fn ensure_articles(articles: &[PromptArticle]) -> Result<()> {
    if articles.is_empty() {
        return Err(Error::InvalidRequest("Articles required".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_kind_from_str() {
        assert_eq!("OpenRouter".parse::<ModelKind>().unwrap(), ModelKind::OpenRouter);
        assert_eq!("dummy".parse::<ModelKind>().unwrap(), ModelKind::Dummy);
        assert!("ollama".parse::<ModelKind>().is_err());
    }

    #[test]
    fn test_create_model_names() {
        let config = Config::default();
        assert_eq!(create_model(ModelKind::Dummy, Client::new(), &config).name(), "Dummy");
        assert_eq!(create_model(ModelKind::OpenRouter, Client::new(), &config).name(), "OpenRouter");
    }
}
