use async_trait::async_trait;
use np_core::{Article, Config, Error, Result, UpstreamFailure};
use reqwest::Client;
use url::Url;

use crate::{rss, NewsSource, MAX_ARTICLES};

/// Keyword search over the Google News RSS endpoint.
#[derive(Debug, Clone)]
pub struct GoogleNewsSource {
    client: Client,
    feed_url: String,
}

impl GoogleNewsSource {
    pub fn new(client: Client, feed_url: impl Into<String>) -> Self {
        Self {
            client,
            feed_url: feed_url.into(),
        }
    }

    pub fn from_config(client: Client, config: &Config) -> Self {
        Self::new(client, config.news_feed_url.clone())
    }

    /// Builds the search URL for `keyword`, URL-encoding it.
    pub fn search_url(&self, keyword: &str) -> Result<Url> {
        let mut url = Url::parse(&self.feed_url).map_err(|e| {
            Error::Configuration(format!("Invalid news feed URL {}: {}", self.feed_url, e))
        })?;
        url.query_pairs_mut()
            .append_pair("q", keyword)
            .append_pair("hl", "en-US")
            .append_pair("gl", "US")
            .append_pair("ceid", "US:en");
        Ok(url)
    }

    async fn fetch(&self, url: Url) -> Result<String> {
        let unavailable = |e: reqwest::Error| {
            Error::UpstreamUnavailable(UpstreamFailure::new(e.to_string()))
        };

        self.client
            .get(url)
            .send()
            .await
            .map_err(unavailable)?
            .error_for_status()
            .map_err(unavailable)?
            .text()
            .await
            .map_err(unavailable)
    }
}

#[async_trait]
impl NewsSource for GoogleNewsSource {
    fn source(&self) -> &str {
        "Google News"
    }

    async fn search(&self, keyword: &str) -> Result<Vec<Article>> {
        let url = self.search_url(keyword)?;
        tracing::debug!("📰 Fetching feed {}", url);

        let body = self.fetch(url).await?;
        let articles = rss::parse_feed(&body, MAX_ARTICLES)?;

        tracing::info!("📰 {} returned {} articles for '{}'", self.source(), articles.len(), keyword);
        Ok(articles)
    }
}
