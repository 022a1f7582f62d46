use std::fmt;
use np_core::{PostDraft, PromptArticle, Result};
use super::{ensure_articles, InferenceModel};

/// Offline model that stitches a post together from the article titles.
pub struct DummyModel;

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel").finish()
    }
}

#[async_trait::async_trait]
impl InferenceModel for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn draft_post(&self, articles: &[PromptArticle]) -> Result<PostDraft> {
        ensure_articles(articles)?;

        let mut lines = vec!["📰 What caught my eye today:".to_string()];
        lines.extend(articles.iter().take(5).map(|a| format!("- {}", a.title)));
        lines.push("What's your take?".to_string());
        Ok(PostDraft::new(&lines.join("\n")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use np_core::Error;

    #[tokio::test]
    async fn test_dummy_model() {
        let articles = vec![
            PromptArticle { title: "Rust 2024 ships".to_string(), description: "Edition".to_string() },
            PromptArticle { title: "Axum 0.8".to_string(), description: "Routing".to_string() },
        ];
        let post = DummyModel.draft_post(&articles).await.unwrap();
        assert!(post.as_str().contains("- Rust 2024 ships"));
        assert!(post.as_str().contains("- Axum 0.8"));
        assert_eq!(post.as_str(), post.as_str().trim());
    }

    #[tokio::test]
    async fn test_dummy_model_rejects_empty() {
        let result = DummyModel.draft_post(&[]).await;
        assert!(matches!(result, Err(Error::InvalidRequest(_))));
    }
}
