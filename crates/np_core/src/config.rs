use clap::Args;
use std::fmt;

pub const DEFAULT_LLM_MODEL: &str = "mistralai/mistral-7b-instruct";
pub const DEFAULT_LLM_API_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_HTTP_REFERER: &str = "http://localhost:3000";
pub const DEFAULT_LINKEDIN_OAUTH_URL: &str = "https://www.linkedin.com/oauth/v2";
pub const DEFAULT_LINKEDIN_API_URL: &str = "https://api.linkedin.com/v2";
/// Author URN LinkedIn resolves to the token's owner.
pub const DEFAULT_LINKEDIN_AUTHOR_URN: &str = "urn:li:person:me";
pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";
pub const DEFAULT_NEWS_FEED_URL: &str = "https://news.google.com/rss/search";
pub const DEFAULT_PORT: u16 = 3001;

/// Deployment configuration, resolved once at startup from flags and the
/// environment and then handed to every handler.
#[derive(Args, Clone)]
pub struct Config {
    /// OpenRouter API key used for post drafting
    #[arg(long, env = "OPENROUTER_API_KEY", hide_env_values = true)]
    pub llm_api_key: Option<String>,

    /// Chat model identifier
    #[arg(long, env = "LLM_MODEL", default_value = DEFAULT_LLM_MODEL)]
    pub llm_model: String,

    #[arg(long, env = "LLM_API_URL", default_value = DEFAULT_LLM_API_URL)]
    pub llm_api_url: String,

    /// Value sent as HTTP-Referer to the model provider
    #[arg(long, env = "HTTP_REFERER", default_value = DEFAULT_HTTP_REFERER)]
    pub http_referer: String,

    #[arg(long, env = "LINKEDIN_CLIENT_ID")]
    pub linkedin_client_id: Option<String>,

    #[arg(long, env = "LINKEDIN_CLIENT_SECRET", hide_env_values = true)]
    pub linkedin_client_secret: Option<String>,

    #[arg(long, env = "LINKEDIN_REDIRECT_URI")]
    pub linkedin_redirect_uri: Option<String>,

    #[arg(long, env = "LINKEDIN_OAUTH_URL", default_value = DEFAULT_LINKEDIN_OAUTH_URL)]
    pub linkedin_oauth_url: String,

    #[arg(long, env = "LINKEDIN_API_URL", default_value = DEFAULT_LINKEDIN_API_URL)]
    pub linkedin_api_url: String,

    #[arg(long, env = "LINKEDIN_AUTHOR_URN", default_value = DEFAULT_LINKEDIN_AUTHOR_URN)]
    pub linkedin_author_urn: String,

    /// Key for signing the OAuth state parameter. A random key is used when
    /// unset, which only works for a single process.
    #[arg(long, env = "OAUTH_STATE_SECRET", hide_env_values = true)]
    pub oauth_state_secret: Option<String>,

    /// Where the OAuth callback sends the browser back to
    #[arg(long, env = "FRONTEND_URL", default_value = DEFAULT_FRONTEND_URL)]
    pub frontend_url: String,

    #[arg(long, env = "NEWS_FEED_URL", default_value = DEFAULT_NEWS_FEED_URL)]
    pub news_feed_url: String,

    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm_api_key: None,
            llm_model: DEFAULT_LLM_MODEL.to_string(),
            llm_api_url: DEFAULT_LLM_API_URL.to_string(),
            http_referer: DEFAULT_HTTP_REFERER.to_string(),
            linkedin_client_id: None,
            linkedin_client_secret: None,
            linkedin_redirect_uri: None,
            linkedin_oauth_url: DEFAULT_LINKEDIN_OAUTH_URL.to_string(),
            linkedin_api_url: DEFAULT_LINKEDIN_API_URL.to_string(),
            linkedin_author_urn: DEFAULT_LINKEDIN_AUTHOR_URN.to_string(),
            oauth_state_secret: None,
            frontend_url: DEFAULT_FRONTEND_URL.to_string(),
            news_feed_url: DEFAULT_NEWS_FEED_URL.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |value: &Option<String>| value.as_deref().map(|_| "<redacted>");
        f.debug_struct("Config")
            .field("llm_api_key", &redact(&self.llm_api_key))
            .field("llm_model", &self.llm_model)
            .field("llm_api_url", &self.llm_api_url)
            .field("http_referer", &self.http_referer)
            .field("linkedin_client_id", &self.linkedin_client_id)
            .field("linkedin_client_secret", &redact(&self.linkedin_client_secret))
            .field("linkedin_redirect_uri", &self.linkedin_redirect_uri)
            .field("linkedin_oauth_url", &self.linkedin_oauth_url)
            .field("linkedin_api_url", &self.linkedin_api_url)
            .field("linkedin_author_urn", &self.linkedin_author_urn)
            .field("oauth_state_secret", &redact(&self.oauth_state_secret))
            .field("frontend_url", &self.frontend_url)
            .field("news_feed_url", &self.news_feed_url)
            .field("port", &self.port)
            .finish()
    }
}
