use async_trait::async_trait;
use np_core::{Article, Result};

pub mod google_news;
pub mod rss;

pub use google_news::GoogleNewsSource;

/// Most articles a single lookup returns.
pub const MAX_ARTICLES: usize = 5;

#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Returns the name of the news source
    fn source(&self) -> &str;

    /// Looks up articles matching `keyword`, in feed order, at most
    /// [`MAX_ARTICLES`] of them
    async fn search(&self, keyword: &str) -> Result<Vec<Article>>;
}

